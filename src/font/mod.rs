//! Importing embedded fonts into indexed glyph tables.
//!
//! A font arrives as raw embedded bytes plus the PDF `Encoding` value
//! from its font dictionary. Importing produces a [`SimpleFont`]: 256
//! glyph slots indexed by byte code, each holding an outline in unit-em
//! space (baseline origin, y up) and a horizontal advance in ems. All
//! outline data is converted to cubic Beziers on the way in; nothing
//! downstream ever sees a quadratic.

mod encoding;
mod sfnt;
mod type1;

use crate::error::{RenderError, RenderResult};
use crate::geom::Affine;
use crate::object::FontDict;
use crate::path::{PathBuilder, PathElement};

/// A single character's outline and metrics, in unit-em space.
#[derive(Debug, Clone, Default)]
pub struct Glyph {
    pub outline: Vec<PathElement>,
    /// Horizontal advance in ems.
    pub advance: f32,
}

/// A font with a simple 8-bit encoding: one glyph slot per byte code.
///
/// Unmapped slots hold an empty glyph with zero advance.
#[derive(Debug)]
pub struct SimpleFont {
    glyphs: Box<[Glyph; 256]>,
}

impl SimpleFont {
    pub(crate) fn empty() -> SimpleFont {
        SimpleFont {
            glyphs: Box::new(std::array::from_fn(|_| Glyph::default())),
        }
    }

    pub fn glyph(&self, code: u8) -> &Glyph {
        &self.glyphs[code as usize]
    }

    pub(crate) fn glyph_mut(&mut self, code: u8) -> &mut Glyph {
        &mut self.glyphs[code as usize]
    }
}

/// Import an embedded font described by a PDF font dictionary.
///
/// TrueType and Type 1 subtypes are supported; Type 1 covers bare CFF
/// font programs as well, since PDFs routinely label those Type1. A
/// missing font file or an unknown subtype is an unsupported-font error;
/// data that fails to parse is a font-parse error.
pub fn import_font(font: &FontDict) -> RenderResult<SimpleFont> {
    let base = font.base_font().unwrap_or("unnamed font").to_string();
    let subtype = font.subtype().unwrap_or("");
    match subtype {
        "TrueType" => {
            let data = font.font_file().ok_or_else(|| {
                RenderError::UnsupportedFont(format!("{} has no embedded font data", base))
            })?;
            sfnt::from_sfnt(data, font.encoding())
        }
        "Type1" => {
            let data = font.font_file().ok_or_else(|| {
                RenderError::UnsupportedFont(format!("{} has no embedded font data", base))
            })?;
            type1::from_type1(data, font.encoding())
        }
        other => Err(RenderError::UnsupportedFont(format!(
            "{} has unsupported subtype {:?}",
            base, other
        ))),
    }
}

/// Collects outline callbacks from a font parser into our path model,
/// transforming every point into unit-em space.
pub(crate) struct GlyphSink {
    builder: PathBuilder,
    transform: Affine,
}

impl GlyphSink {
    pub(crate) fn new(transform: Affine) -> GlyphSink {
        GlyphSink {
            builder: PathBuilder::new(),
            transform,
        }
    }

    fn move_to(&mut self, x: f32, y: f32) {
        // Contours are implicitly closed at the next move.
        self.builder.close_path();
        let p = self.transform.apply(crate::geom::Point::new(x, y));
        self.builder.move_to(p.x, p.y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.transform.apply(crate::geom::Point::new(x, y));
        self.builder.line_to(p.x, p.y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let cp = self.transform.apply(crate::geom::Point::new(x1, y1));
        let p = self.transform.apply(crate::geom::Point::new(x, y));
        self.builder.quadratic_to(cp.x, cp.y, p.x, p.y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let cp1 = self.transform.apply(crate::geom::Point::new(x1, y1));
        let cp2 = self.transform.apply(crate::geom::Point::new(x2, y2));
        let p = self.transform.apply(crate::geom::Point::new(x, y));
        self.builder.curve_to(cp1.x, cp1.y, cp2.x, cp2.y, p.x, p.y);
    }

    fn close(&mut self) {
        self.builder.close_path();
    }

    /// Close any trailing contour and return the finished outline.
    pub(crate) fn finish(mut self) -> Vec<PathElement> {
        self.builder.close_path();
        self.builder.take()
    }
}

impl ttf_parser::OutlineBuilder for GlyphSink {
    fn move_to(&mut self, x: f32, y: f32) {
        GlyphSink::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        GlyphSink::line_to(self, x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        GlyphSink::quad_to(self, x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        GlyphSink::curve_to(self, x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        GlyphSink::close(self);
    }
}

impl hayro_font::OutlineBuilder for GlyphSink {
    fn move_to(&mut self, x: f32, y: f32) {
        GlyphSink::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        GlyphSink::line_to(self, x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        GlyphSink::quad_to(self, x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        GlyphSink::curve_to(self, x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        GlyphSink::close(self);
    }
}
