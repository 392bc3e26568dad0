//! The content-stream interpreter.
//!
//! Dispatches page-description operators to the canvas, the font
//! importer, and the image decoder. Unknown operators and missing
//! resources are logged and skipped; only corrupt embedded data (fonts,
//! images) aborts the page.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::canvas::Canvas;
use crate::error::{RenderError, RenderResult};
use crate::font::{import_font, SimpleFont};
use crate::image::decode_image;
use crate::object::{ContentReader, Page, Value};
use crate::surface::{FillRule, Surface};

/// Operator codes for the supported subset of the page-description
/// language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpCode {
    // Graphics state
    Save,
    Restore,
    Transform,
    SetLineWidth,
    SetLineCap,
    SetLineJoin,
    SetMiterLimit,
    SetDash,
    SetExtGState,

    // Color
    SetStrokeGray,
    SetFillGray,
    SetStrokeRgb,
    SetFillRgb,

    // Path construction
    MoveTo,
    LineTo,
    CurveTo,
    CurveV,
    CurveY,
    ClosePath,
    Rectangle,

    // Path painting
    Stroke,
    CloseStroke,
    Fill,
    EoFill,
    FillStroke,
    EoFillStroke,
    CloseFillStroke,
    CloseEoFillStroke,
    EndPath,

    // Clipping
    Clip,
    EoClip,

    // Text
    BeginText,
    EndText,
    SetFont,
    SetTextMatrix,
    TextMove,
    SetHScale,
    SetTextRenderMode,
    ShowText,
    ShowSpacedText,

    // XObjects
    PaintXObject,
}

impl OpCode {
    /// Map an operator string to its code. Unknown operators return
    /// `None` and are skipped by the interpreter.
    pub fn parse(op: &str) -> Option<OpCode> {
        Some(match op {
            "q" => OpCode::Save,
            "Q" => OpCode::Restore,
            "cm" => OpCode::Transform,
            "w" => OpCode::SetLineWidth,
            "J" => OpCode::SetLineCap,
            "j" => OpCode::SetLineJoin,
            "M" => OpCode::SetMiterLimit,
            "d" => OpCode::SetDash,
            "gs" => OpCode::SetExtGState,
            "G" => OpCode::SetStrokeGray,
            "g" => OpCode::SetFillGray,
            "RG" => OpCode::SetStrokeRgb,
            "rg" => OpCode::SetFillRgb,
            "m" => OpCode::MoveTo,
            "l" => OpCode::LineTo,
            "c" => OpCode::CurveTo,
            "v" => OpCode::CurveV,
            "y" => OpCode::CurveY,
            "h" => OpCode::ClosePath,
            "re" => OpCode::Rectangle,
            "S" => OpCode::Stroke,
            "s" => OpCode::CloseStroke,
            "f" | "F" => OpCode::Fill,
            "f*" => OpCode::EoFill,
            "B" => OpCode::FillStroke,
            "B*" => OpCode::EoFillStroke,
            "b" => OpCode::CloseFillStroke,
            "b*" => OpCode::CloseEoFillStroke,
            "n" => OpCode::EndPath,
            "W" => OpCode::Clip,
            "W*" => OpCode::EoClip,
            "BT" => OpCode::BeginText,
            "ET" => OpCode::EndText,
            "Tf" => OpCode::SetFont,
            "Tm" => OpCode::SetTextMatrix,
            "Td" => OpCode::TextMove,
            "Tz" => OpCode::SetHScale,
            "Tr" => OpCode::SetTextRenderMode,
            "Tj" => OpCode::ShowText,
            "TJ" => OpCode::ShowSpacedText,
            "Do" => OpCode::PaintXObject,
            _ => return None,
        })
    }
}

/// Render one page's content onto a surface.
///
/// Drives the reader to exhaustion, then drains any layers left open by
/// imbalanced saves. Errors only on corrupt embedded data.
pub fn render_page<S: Surface>(
    page: &Page,
    reader: &mut dyn ContentReader,
    surface: &mut S,
) -> RenderResult<()> {
    let mut interp = Interpreter::new(page, surface);
    interp.run(reader)
}

/// Interprets content-stream instructions against one page's resources.
pub struct Interpreter<'a, S: Surface> {
    canvas: Canvas<'a, S>,
    page: &'a Page,
    /// Imported fonts, keyed by resource name, so repeated `Tf`s of the
    /// same font parse it once.
    fonts: FxHashMap<String, Rc<SimpleFont>>,
}

impl<'a, S: Surface> Interpreter<'a, S> {
    pub fn new(page: &'a Page, surface: &'a mut S) -> Interpreter<'a, S> {
        Interpreter {
            canvas: Canvas::new(surface),
            page,
            fonts: FxHashMap::default(),
        }
    }

    /// Process every instruction the reader yields, then finish the page.
    ///
    /// Open surface layers are drained even when rendering aborts.
    pub fn run(&mut self, reader: &mut dyn ContentReader) -> RenderResult<()> {
        let mut result = Ok(());
        while let Some((operands, operator)) = reader.read_instruction() {
            if let Err(e) = self.process(&operands, &operator) {
                result = Err(e);
                break;
            }
        }
        self.canvas.finish();
        result
    }

    /// Process a single instruction.
    pub fn process(&mut self, operands: &[Value], operator: &str) -> RenderResult<()> {
        let Some(op) = OpCode::parse(operator) else {
            log::debug!("skipping unknown operator {:?}", operator);
            return Ok(());
        };

        match op {
            OpCode::Save => self.canvas.save(),
            OpCode::Restore => self.canvas.restore(),
            OpCode::Transform => {
                if let Some([a, b, c, d, e, f]) = floats::<6>(operands, operator) {
                    self.canvas.transform(a, b, c, d, e, f);
                }
            }

            OpCode::SetLineWidth => {
                if let Some([w]) = floats::<1>(operands, operator) {
                    self.canvas.set_line_width(w);
                }
            }
            OpCode::SetLineCap => {
                if let Some(cap) = int_operand(operands, operator) {
                    self.canvas.set_line_cap(cap);
                }
            }
            OpCode::SetLineJoin => {
                if let Some(join) = int_operand(operands, operator) {
                    self.canvas.set_line_join(join);
                }
            }
            OpCode::SetMiterLimit => {
                if let Some([limit]) = floats::<1>(operands, operator) {
                    self.canvas.set_miter_limit(limit);
                }
            }
            OpCode::SetDash => self.set_dash(operands),
            OpCode::SetExtGState => self.set_ext_g_state(operands),

            OpCode::SetStrokeGray => {
                if let Some([v]) = floats::<1>(operands, operator) {
                    self.canvas.set_stroke_gray(v);
                }
            }
            OpCode::SetFillGray => {
                if let Some([v]) = floats::<1>(operands, operator) {
                    self.canvas.set_fill_gray(v);
                }
            }
            OpCode::SetStrokeRgb => {
                if let Some([r, g, b]) = floats::<3>(operands, operator) {
                    self.canvas.set_stroke_rgb(r, g, b);
                }
            }
            OpCode::SetFillRgb => {
                if let Some([r, g, b]) = floats::<3>(operands, operator) {
                    self.canvas.set_fill_rgb(r, g, b);
                }
            }

            OpCode::MoveTo => {
                if let Some([x, y]) = floats::<2>(operands, operator) {
                    self.canvas.path.move_to(x, y);
                }
            }
            OpCode::LineTo => {
                if let Some([x, y]) = floats::<2>(operands, operator) {
                    self.canvas.path.line_to(x, y);
                }
            }
            OpCode::CurveTo => {
                if let Some([x1, y1, x2, y2, x3, y3]) = floats::<6>(operands, operator) {
                    self.canvas.path.curve_to(x1, y1, x2, y2, x3, y3);
                }
            }
            OpCode::CurveV => {
                if let Some([x2, y2, x3, y3]) = floats::<4>(operands, operator) {
                    self.canvas.path.curve_v(x2, y2, x3, y3);
                }
            }
            OpCode::CurveY => {
                if let Some([x1, y1, x3, y3]) = floats::<4>(operands, operator) {
                    self.canvas.path.curve_y(x1, y1, x3, y3);
                }
            }
            OpCode::ClosePath => self.canvas.path.close_path(),
            OpCode::Rectangle => {
                if let Some([x, y, w, h]) = floats::<4>(operands, operator) {
                    self.canvas.path.rectangle(x, y, w, h);
                }
            }

            OpCode::Stroke => self.canvas.stroke(),
            OpCode::CloseStroke => self.canvas.close_and_stroke(),
            OpCode::Fill => self.canvas.fill(FillRule::NonZero),
            OpCode::EoFill => self.canvas.fill(FillRule::EvenOdd),
            OpCode::FillStroke => self.canvas.fill_and_stroke(FillRule::NonZero),
            OpCode::EoFillStroke => self.canvas.fill_and_stroke(FillRule::EvenOdd),
            OpCode::CloseFillStroke => self.canvas.close_fill_and_stroke(FillRule::NonZero),
            OpCode::CloseEoFillStroke => self.canvas.close_fill_and_stroke(FillRule::EvenOdd),
            OpCode::EndPath => self.canvas.no_op_paint(),

            OpCode::Clip => self.canvas.clip(FillRule::NonZero),
            OpCode::EoClip => self.canvas.clip(FillRule::EvenOdd),

            OpCode::BeginText => self.canvas.begin_text(),
            OpCode::EndText => self.canvas.end_text(),
            OpCode::SetFont => return self.set_font(operands),
            OpCode::SetTextMatrix => {
                if let Some([a, b, c, d, e, f]) = floats::<6>(operands, operator) {
                    self.canvas.set_text_matrix(a, b, c, d, e, f);
                }
            }
            OpCode::TextMove => {
                if let Some([x, y]) = floats::<2>(operands, operator) {
                    self.canvas.text_move(x, y);
                }
            }
            OpCode::SetHScale => {
                if let Some([p]) = floats::<1>(operands, operator) {
                    self.canvas.set_h_scale(p);
                }
            }
            OpCode::SetTextRenderMode => {
                if let Some(mode) = int_operand(operands, operator) {
                    self.canvas.set_text_render_mode(mode);
                }
            }
            OpCode::ShowText => {
                if let Some(bytes) = operands.first().and_then(Value::raw_string) {
                    self.canvas.show_text(bytes);
                } else {
                    log::warn!("Tj without a string operand; skipping");
                }
            }
            OpCode::ShowSpacedText => self.show_spaced_text(operands),

            OpCode::PaintXObject => return self.paint_xobject(operands),
        }

        Ok(())
    }

    fn set_dash(&mut self, operands: &[Value]) {
        let (Some(array), Some(phase)) = (
            operands.first(),
            operands.get(1).and_then(Value::float),
        ) else {
            log::warn!("d operator needs a dash array and a phase; skipping");
            return;
        };
        let mut dashes = Vec::with_capacity(array.len());
        for i in 0..array.len() {
            match array.index(i).and_then(Value::float) {
                Some(d) => dashes.push(d),
                None => {
                    log::warn!("dash array contains a non-number; skipping");
                    return;
                }
            }
        }
        self.canvas.set_dash(dashes, phase);
    }

    /// Apply the entries of an ExtGState resource dictionary.
    fn set_ext_g_state(&mut self, operands: &[Value]) {
        let Some(name) = operands.first().and_then(Value::name) else {
            log::warn!("gs operator needs a name operand; skipping");
            return;
        };
        let Some(Value::Dict(dict)) = self.page.ext_g_state(name) else {
            log::warn!("ExtGState resource missing: {}", name);
            return;
        };

        for (key, value) in dict {
            match key.as_str() {
                "Type" => {}
                "LW" => {
                    if let Some(w) = value.float() {
                        self.canvas.set_line_width(w);
                    }
                }
                "LC" => {
                    if let Some(c) = value.int() {
                        self.canvas.set_line_cap(c);
                    }
                }
                "LJ" => {
                    if let Some(j) = value.int() {
                        self.canvas.set_line_join(j);
                    }
                }
                "ML" => {
                    if let Some(m) = value.float() {
                        self.canvas.set_miter_limit(m);
                    }
                }
                "D" => {
                    let dashes: Option<Vec<f32>> = value.index(0).map(|array| {
                        (0..array.len())
                            .filter_map(|i| array.index(i).and_then(Value::float))
                            .collect()
                    });
                    let phase = value.index(1).and_then(Value::float).unwrap_or(0.0);
                    if let Some(dashes) = dashes {
                        self.canvas.set_dash(dashes, phase);
                    }
                }
                "CA" => {
                    if let Some(a) = value.float() {
                        self.canvas.set_stroke_alpha(a);
                    }
                }
                "ca" => {
                    if let Some(a) = value.float() {
                        self.canvas.set_fill_alpha(a);
                    }
                }
                "BM" => {
                    if value.name().is_some_and(|n| n != "Normal") {
                        log::warn!("unsupported blend mode: {:?}", value);
                    }
                }
                other => {
                    log::warn!("unsupported graphics state parameter {} = {:?}", other, value);
                }
            }
        }
    }

    fn set_font(&mut self, operands: &[Value]) -> RenderResult<()> {
        let (Some(name), Some(size)) = (
            operands.first().and_then(Value::name),
            operands.get(1).and_then(Value::float),
        ) else {
            log::warn!("Tf operator needs a font name and size; skipping");
            return Ok(());
        };

        if let Some(font) = self.fonts.get(name) {
            self.canvas.set_font(font.clone(), size);
            return Ok(());
        }

        let Some(font_dict) = self.page.font(name) else {
            log::warn!("font resource missing: {}", name);
            return Ok(());
        };

        match import_font(&font_dict) {
            Ok(font) => {
                let font = Rc::new(font);
                self.fonts.insert(name.to_string(), font.clone());
                self.canvas.set_font(font, size);
                Ok(())
            }
            Err(RenderError::UnsupportedFont(msg)) => {
                log::warn!("cannot use font {}: {}", name, msg);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// The `TJ` operator: strings interleaved with kern adjustments.
    fn show_spaced_text(&mut self, operands: &[Value]) {
        let Some(array @ Value::Array(_)) = operands.first() else {
            log::warn!("TJ operator needs an array operand; skipping");
            return;
        };
        for i in 0..array.len() {
            match array.index(i) {
                Some(Value::String(bytes)) => {
                    if !bytes.is_empty() {
                        self.canvas.show_text(bytes);
                    }
                }
                Some(item) => {
                    if let Some(amount) = item.float() {
                        self.canvas.kern(amount);
                    }
                }
                None => {}
            }
        }
    }

    fn paint_xobject(&mut self, operands: &[Value]) -> RenderResult<()> {
        let Some(name) = operands.first().and_then(Value::name) else {
            log::warn!("Do operator needs a name operand; skipping");
            return Ok(());
        };
        let Some(xobject) = self.page.xobject(name) else {
            log::warn!("XObject resource missing: {}", name);
            return Ok(());
        };

        match xobject.key("Subtype").and_then(Value::name) {
            Some("Image") => match decode_image(xobject) {
                Ok(image) => {
                    self.canvas.image(&image);
                    Ok(())
                }
                Err(RenderError::UnsupportedImage(msg)) => {
                    log::warn!("cannot paint image {}: {}", name, msg);
                    Ok(())
                }
                Err(e) => Err(e),
            },
            subtype => {
                log::warn!("unsupported XObject {} (subtype {:?})", name, subtype);
                Ok(())
            }
        }
    }
}

/// The first `N` operands as floats, or `None` (with a warning) if there
/// are too few or they are not numbers.
fn floats<const N: usize>(operands: &[Value], operator: &str) -> Option<[f32; N]> {
    let mut out = [0.0f32; N];
    for (i, slot) in out.iter_mut().enumerate() {
        match operands.get(i).and_then(Value::float) {
            Some(v) => *slot = v,
            None => {
                log::warn!(
                    "{} operator requires {} numeric operand(s); skipping",
                    operator,
                    N
                );
                return None;
            }
        }
    }
    Some(out)
}

fn int_operand(operands: &[Value], operator: &str) -> Option<i64> {
    let v = operands.first().and_then(Value::int);
    if v.is_none() {
        log::warn!("{} operator requires an integer operand; skipping", operator);
    }
    v
}
