use std::fmt;

/// Error type for page rendering.
///
/// Only corrupt upstream data surfaces as an error from the rendering entry
/// points. Recoverable conditions (missing resources, unsupported features,
/// imbalanced save/restore) are logged and skipped instead.
#[derive(Debug, Clone)]
pub enum RenderError {
    /// An embedded font program could not be parsed.
    FontParse(String),

    /// The font uses a subtype or encoding we do not handle.
    UnsupportedFont(String),

    /// An image stream could not be decoded.
    ImageDecode(String),

    /// The image uses a color space, bit depth, or Decode array we do not handle.
    UnsupportedImage(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::FontParse(msg) => {
                write!(f, "font parse error: {}", msg)
            }
            RenderError::UnsupportedFont(msg) => {
                write!(f, "unsupported font: {}", msg)
            }
            RenderError::ImageDecode(msg) => {
                write!(f, "image decode error: {}", msg)
            }
            RenderError::UnsupportedImage(msg) => {
                write!(f, "unsupported image: {}", msg)
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Result type alias for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
