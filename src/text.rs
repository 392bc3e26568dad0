//! Text objects: matrices, glyph placement, and rendering modes.
//!
//! Glyph outlines live in unit-em space. Showing text scales them by the
//! font size (and horizontal scaling), places them through the text
//! matrix, and feeds the result back through the normal path pipeline.

use std::rc::Rc;

use crate::canvas::{Canvas, TextRenderMode};
use crate::font::SimpleFont;
use crate::geom::Affine;
use crate::surface::{FillRule, Surface};

impl<S: Surface> Canvas<'_, S> {
    /// The `BT` operator: reset the text matrix and text line matrix to
    /// the identity.
    pub fn begin_text(&mut self) {
        self.set_text_matrix(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    }

    /// The `ET` operator.
    pub fn end_text(&mut self) {}

    /// The `Tm` operator: set both the text matrix and the text line
    /// matrix.
    pub fn set_text_matrix(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        let m = Affine::new(a, b, c, d, e, f);
        let state = self.state_mut();
        state.text_matrix = m;
        state.text_line_matrix = m;
    }

    /// The `Td` operator: move to the start of the next line, offset from
    /// the start of the current one.
    pub fn text_move(&mut self, x: f32, y: f32) {
        let state = self.state_mut();
        state.text_line_matrix = state.text_line_matrix.pre_translate(x, y);
        state.text_matrix = state.text_line_matrix;
    }

    /// The `Tz` operator: set horizontal scaling, in percent.
    pub fn set_h_scale(&mut self, percent: f32) {
        self.state_mut().h_scale = percent;
    }

    /// The `Tr` operator.
    pub fn set_text_render_mode(&mut self, mode: i64) {
        match TextRenderMode::from_i64(mode) {
            Some(m) => self.state_mut().render_mode = m,
            None => log::warn!("invalid text rendering mode {}; keeping current", mode),
        }
    }

    /// The `Tf` operator.
    pub fn set_font(&mut self, font: Rc<SimpleFont>, size: f32) {
        let state = self.state_mut();
        state.font = Some(font);
        state.font_size = size;
    }

    /// Show a string of text, placing one glyph per byte.
    ///
    /// The glyph outlines are appended to the current path and then
    /// painted according to the text rendering mode.
    pub fn show_text(&mut self, bytes: &[u8]) {
        let Some(font) = self.state().font.clone() else {
            log::warn!("Tj without a font set; skipping");
            return;
        };
        let v_size = self.state().font_size;
        let h_size = v_size * self.state().h_scale / 100.0;

        for &code in bytes {
            let glyph = font.glyph(code);
            let glyph_space = Affine::scale(h_size, v_size).then(&self.state().text_matrix);
            self.path.extend_transformed(&glyph.outline, &glyph_space);
            self.state_mut().text_matrix.e += glyph.advance * h_size;
        }

        match self.state().render_mode {
            TextRenderMode::Fill => self.fill(FillRule::NonZero),
            TextRenderMode::Stroke => self.stroke(),
            TextRenderMode::FillStroke => self.fill_and_stroke(FillRule::NonZero),
            TextRenderMode::Invisible => self.no_op_paint(),
            mode => {
                // Modes 4 through 7 also accumulate the text into the
                // clipping path, which we do not support.
                log::warn!("text clipping (mode {:?}) is not supported", mode);
                match mode {
                    TextRenderMode::FillClip => self.fill(FillRule::NonZero),
                    TextRenderMode::StrokeClip => self.stroke(),
                    TextRenderMode::FillStrokeClip => self.fill_and_stroke(FillRule::NonZero),
                    _ => self.no_op_paint(),
                }
            }
        }
    }

    /// A kerning adjustment from a `TJ` array, in thousandths of an em.
    /// Positive amounts move the next glyph to the left.
    pub fn kern(&mut self, amount: f32) {
        let h_size = self.state().font_size * self.state().h_scale / 100.0;
        self.state_mut().text_matrix.e -= h_size * amount / 1000.0;
    }
}
