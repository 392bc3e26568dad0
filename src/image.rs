//! Decoding image XObjects: DCT (JPEG) pass-through and 1-bit
//! DeviceGray bitmaps.

use zune_jpeg::JpegDecoder;

use crate::error::{RenderError, RenderResult};
use crate::object::Value;

/// A decoded image ready for a surface to paint.
#[derive(Debug, Clone)]
pub enum Image {
    /// 8-bit RGB, three bytes per pixel.
    Rgb8 {
        width: u32,
        height: u32,
        data: Vec<u8>,
    },
    /// 8-bit grayscale, one byte per pixel.
    Gray8 {
        width: u32,
        height: u32,
        data: Vec<u8>,
    },
    /// 1-bit bitmap with rows padded to whole bytes; bit 7 of byte 0 is
    /// pixel (0, 0). A set bit is white unless `inverted`.
    Bitmap {
        width: u32,
        height: u32,
        data: Vec<u8>,
        inverted: bool,
    },
}

impl Image {
    pub(crate) fn bitmap(width: u32, height: u32, data: Vec<u8>, inverted: bool) -> Image {
        Image::Bitmap {
            width,
            height,
            data,
            inverted,
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            Image::Rgb8 { width, .. } | Image::Gray8 { width, .. } | Image::Bitmap { width, .. } => {
                *width
            }
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            Image::Rgb8 { height, .. }
            | Image::Gray8 { height, .. }
            | Image::Bitmap { height, .. } => *height,
        }
    }

    /// Expand to tightly packed, opaque RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        match self {
            Image::Rgb8 { data, .. } => {
                let mut out = Vec::with_capacity(data.len() / 3 * 4);
                for px in data.chunks_exact(3) {
                    out.extend_from_slice(&[px[0], px[1], px[2], 255]);
                }
                out
            }
            Image::Gray8 { data, .. } => {
                let mut out = Vec::with_capacity(data.len() * 4);
                for &v in data {
                    out.extend_from_slice(&[v, v, v, 255]);
                }
                out
            }
            Image::Bitmap {
                width,
                height,
                data,
                inverted,
            } => {
                let stride = (*width as usize).div_ceil(8);
                let mut out = Vec::with_capacity(*width as usize * *height as usize * 4);
                for y in 0..*height as usize {
                    for x in 0..*width as usize {
                        let byte = data[stride * y + x / 8];
                        let set = byte & (1 << (7 - x % 8)) != 0;
                        let v = if set != *inverted { 255 } else { 0 };
                        out.extend_from_slice(&[v, v, v, 255]);
                    }
                }
                out
            }
        }
    }
}

/// Decode an image XObject stream.
///
/// `DCTDecode` streams pass through a JPEG decoder. Without a filter,
/// only 1-bit DeviceGray data is accepted, honoring a `[1 0]` Decode
/// array by inverting. Anything else is unsupported.
pub fn decode_image(image: &Value) -> RenderResult<Image> {
    let data = image
        .reader()
        .ok_or_else(|| RenderError::UnsupportedImage("image XObject is not a stream".to_string()))?;

    if has_filter(image, "DCTDecode") {
        return decode_jpeg(data);
    }

    let width = dict_u32(image, "Width")?;
    let height = dict_u32(image, "Height")?;
    let color_space = image.key("ColorSpace").and_then(Value::name).unwrap_or("");
    let bits = image
        .key("BitsPerComponent")
        .and_then(Value::int)
        .unwrap_or(8);

    if color_space == "DeviceGray" && bits == 1 {
        let inverted = match image.key("Decode") {
            None | Some(Value::Null) => false,
            Some(decode) => match (
                decode.index(0).and_then(Value::float),
                decode.index(1).and_then(Value::float),
            ) {
                (Some(a), Some(b)) if a == 0.0 && b == 1.0 => false,
                (Some(a), Some(b)) if a == 1.0 && b == 0.0 => true,
                _ => {
                    return Err(RenderError::UnsupportedImage(format!(
                        "unsupported Decode array: {:?}",
                        decode
                    )))
                }
            },
        };
        let stride = (width as usize).div_ceil(8);
        let expected = stride * height as usize;
        if data.len() < expected {
            return Err(RenderError::ImageDecode(format!(
                "bitmap data is {} bytes, expected {}",
                data.len(),
                expected
            )));
        }
        return Ok(Image::bitmap(width, height, data.to_vec(), inverted));
    }

    Err(RenderError::UnsupportedImage(format!(
        "unsupported image (ColorSpace: {:?}, BitsPerComponent: {})",
        color_space, bits
    )))
}

fn decode_jpeg(data: &[u8]) -> RenderResult<Image> {
    let mut decoder = JpegDecoder::new(data);
    let pixels = decoder
        .decode()
        .map_err(|e| RenderError::ImageDecode(format!("JPEG decode failed: {:?}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| RenderError::ImageDecode("JPEG stream has no header info".to_string()))?;
    let width = info.width as u32;
    let height = info.height as u32;
    let px = width as usize * height as usize;
    if px == 0 {
        return Err(RenderError::ImageDecode("empty JPEG image".to_string()));
    }
    match pixels.len() / px {
        1 => Ok(Image::Gray8 {
            width,
            height,
            data: pixels,
        }),
        3 => Ok(Image::Rgb8 {
            width,
            height,
            data: pixels,
        }),
        channels => Err(RenderError::UnsupportedImage(format!(
            "JPEG with {} channels",
            channels
        ))),
    }
}

fn has_filter(image: &Value, name: &str) -> bool {
    match image.key("Filter") {
        Some(Value::Name(n)) => n == name,
        Some(filters @ Value::Array(_)) => (0..filters.len())
            .any(|i| filters.index(i).and_then(Value::name) == Some(name)),
        _ => false,
    }
}

fn dict_u32(image: &Value, key: &str) -> RenderResult<u32> {
    image
        .key(key)
        .and_then(Value::int)
        .filter(|&v| v >= 0)
        .map(|v| v as u32)
        .ok_or_else(|| RenderError::UnsupportedImage(format!("missing or invalid {}", key)))
}
