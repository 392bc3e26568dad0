//! The canvas: graphics state, save/restore, and path painting.
//!
//! A `Canvas` implements the PDF imaging model on top of an abstract
//! [`Surface`]. Most of its methods correspond directly to PDF page
//! description operators.

use std::rc::Rc;

use crate::font::SimpleFont;
use crate::geom::Affine;
use crate::image::Image;
use crate::path::{PathBuilder, PathElement};
use crate::stroke::{self, Cap, Join, Options, Segment};
use crate::surface::{FillRule, Handle, Surface};

/// A non-premultiplied RGBA color with byte components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Rgba {
        Rgba { r, g, b, a }
    }
}

fn color_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0) as u8
}

/// Text rendering mode, `Tr` operand values 0 through 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextRenderMode {
    #[default]
    Fill = 0,
    Stroke = 1,
    FillStroke = 2,
    Invisible = 3,
    FillClip = 4,
    StrokeClip = 5,
    FillStrokeClip = 6,
    Clip = 7,
}

impl TextRenderMode {
    pub fn from_i64(mode: i64) -> Option<TextRenderMode> {
        Some(match mode {
            0 => TextRenderMode::Fill,
            1 => TextRenderMode::Stroke,
            2 => TextRenderMode::FillStroke,
            3 => TextRenderMode::Invisible,
            4 => TextRenderMode::FillClip,
            5 => TextRenderMode::StrokeClip,
            6 => TextRenderMode::FillStrokeClip,
            7 => TextRenderMode::Clip,
            _ => return None,
        })
    }
}

/// The graphics state parameters saved and restored by `q`/`Q`.
///
/// Handles for transform and clip layers opened on the surface are owned
/// by the canvas stack frames instead; they are side effects, not values.
#[derive(Debug, Clone)]
pub struct GraphicsState {
    pub fill_color: Rgba,
    pub stroke_color: Rgba,

    pub line_width: f32,
    pub line_cap: Cap,
    pub line_join: Join,
    pub miter_limit: f32,
    pub dashes: Vec<f32>,
    pub dash_phase: f32,

    pub font: Option<Rc<SimpleFont>>,
    pub font_size: f32,
    /// Horizontal scaling as a percentage.
    pub h_scale: f32,
    pub render_mode: TextRenderMode,
    pub text_matrix: Affine,
    pub text_line_matrix: Affine,
}

impl Default for GraphicsState {
    fn default() -> Self {
        GraphicsState {
            fill_color: Rgba::BLACK,
            stroke_color: Rgba::BLACK,
            line_width: 1.0,
            line_cap: Cap::Butt,
            line_join: Join::Miter,
            miter_limit: 10.0,
            dashes: Vec::new(),
            dash_phase: 0.0,
            font: None,
            font_size: 0.0,
            h_scale: 100.0,
            render_mode: TextRenderMode::Fill,
            text_matrix: Affine::IDENTITY,
            text_line_matrix: Affine::IDENTITY,
        }
    }
}

struct StackFrame {
    snapshot: GraphicsState,
    /// Layer handles that were open when the frame was pushed. They become
    /// the live list again once the frame is restored.
    opened: Vec<Handle>,
}

/// A canvas draws PDF page content onto a surface.
///
/// It owns one graphics state, the save/restore stack, and the path being
/// built. All painting for a page goes through one canvas; the stack must
/// be empty again at page end, and [`Canvas::finish`] cleans up if it is
/// not.
pub struct Canvas<'a, S: Surface> {
    surface: &'a mut S,
    state: GraphicsState,
    stack: Vec<StackFrame>,
    /// Layer handles opened since the last save.
    opened: Vec<Handle>,
    /// Fill rule armed by `W`/`W*`, applied by the next path-finishing
    /// operator.
    clip_armed: Option<FillRule>,
    pub(crate) path: PathBuilder,
}

impl<'a, S: Surface> Canvas<'a, S> {
    pub fn new(surface: &'a mut S) -> Canvas<'a, S> {
        Canvas {
            surface,
            state: GraphicsState::default(),
            stack: Vec::new(),
            opened: Vec::new(),
            clip_armed: None,
            path: PathBuilder::default(),
        }
    }

    pub fn state(&self) -> &GraphicsState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut GraphicsState {
        &mut self.state
    }

    // === Save / restore ===

    /// The `q` operator: push a copy of the graphics state.
    pub fn save(&mut self) {
        self.stack.push(StackFrame {
            snapshot: self.state.clone(),
            opened: std::mem::take(&mut self.opened),
        });
    }

    /// The `Q` operator: pop surface layers opened since the matching
    /// save, then restore the parameter snapshot.
    ///
    /// A restore with an empty stack is logged and ignored.
    pub fn restore(&mut self) {
        let Some(frame) = self.stack.pop() else {
            log::warn!("restore without matching save; ignored");
            return;
        };
        for handle in self.opened.drain(..).rev() {
            self.surface.pop(handle);
        }
        self.state = frame.snapshot;
        self.opened = frame.opened;
    }

    /// The `cm` operator: push a coordinate transform onto the surface.
    pub fn transform(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        let handle = self.surface.push_transform(Affine::new(a, b, c, d, e, f));
        self.opened.push(handle);
    }

    /// Pop all remaining surface layers and report stack imbalance.
    ///
    /// Called once at page end. The canvas is reusable afterwards.
    pub fn finish(&mut self) {
        if !self.stack.is_empty() {
            log::warn!(
                "{} graphics state save(s) left open at page end",
                self.stack.len()
            );
        }
        for handle in self.opened.drain(..).rev() {
            self.surface.pop(handle);
        }
        while let Some(frame) = self.stack.pop() {
            for handle in frame.opened.into_iter().rev() {
                self.surface.pop(handle);
            }
            self.state = frame.snapshot;
        }
        self.clip_armed = None;
        self.path.clear();
    }

    // === Path painting ===

    /// The `f`/`f*` operators: fill the current path.
    pub fn fill(&mut self, rule: FillRule) {
        self.fill_internal(rule);
        self.finish_path();
    }

    /// The `S` operator: stroke the current path.
    pub fn stroke(&mut self) {
        self.stroke_internal();
        self.finish_path();
    }

    /// The `s` operator: close, then stroke.
    pub fn close_and_stroke(&mut self) {
        self.path.close_path();
        self.stroke_internal();
        self.finish_path();
    }

    /// The `B`/`B*` operators: fill, then stroke.
    pub fn fill_and_stroke(&mut self, rule: FillRule) {
        self.fill_internal(rule);
        self.stroke_internal();
        self.finish_path();
    }

    /// The `b`/`b*` operators: close, fill, then stroke.
    pub fn close_fill_and_stroke(&mut self, rule: FillRule) {
        self.path.close_path();
        self.fill_internal(rule);
        self.stroke_internal();
        self.finish_path();
    }

    /// The `n` operator: finish the path without painting it.
    ///
    /// Normally used to apply a clipping path after `W`.
    pub fn no_op_paint(&mut self) {
        self.finish_path();
    }

    /// The `W`/`W*` operators: arm clipping. The next path-finishing
    /// operator adds the current path to the clipping region.
    pub fn clip(&mut self, rule: FillRule) {
        self.clip_armed = Some(rule);
    }

    fn fill_internal(&mut self, rule: FillRule) {
        if self.path.is_empty() {
            return;
        }
        self.surface
            .fill_outline(self.path.elements(), rule, self.state.fill_color);
    }

    fn stroke_internal(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let contours = self.path.contours();
        let options = Options {
            width: self.state.line_width,
            cap: self.state.line_cap,
            join: self.state.line_join,
            miter_limit: self.state.miter_limit,
            dashes: self.state.dashes.clone(),
            dash_phase: self.state.dash_phase,
        };
        let outlines = stroke::stroke(&contours, &options);
        if outlines.is_empty() {
            return;
        }
        let elements = elements_from_contours(&outlines);
        self.surface
            .fill_outline(&elements, FillRule::NonZero, self.state.stroke_color);
    }

    pub(crate) fn finish_path(&mut self) {
        if let Some(rule) = self.clip_armed.take() {
            if !self.path.is_empty() {
                let handle = self.surface.push_clip(self.path.elements(), rule);
                self.opened.push(handle);
            }
        }
        self.path.clear();
    }

    // === Color and line parameters ===

    /// The `g` operator. The alpha component is preserved.
    pub fn set_fill_gray(&mut self, gray: f32) {
        let v = color_byte(gray);
        let a = self.state.fill_color.a;
        self.state.fill_color = Rgba::new(v, v, v, a);
    }

    /// The `G` operator. The alpha component is preserved.
    pub fn set_stroke_gray(&mut self, gray: f32) {
        let v = color_byte(gray);
        let a = self.state.stroke_color.a;
        self.state.stroke_color = Rgba::new(v, v, v, a);
    }

    /// The `rg` operator. The alpha component is preserved.
    pub fn set_fill_rgb(&mut self, r: f32, g: f32, b: f32) {
        let a = self.state.fill_color.a;
        self.state.fill_color = Rgba::new(color_byte(r), color_byte(g), color_byte(b), a);
    }

    /// The `RG` operator. The alpha component is preserved.
    pub fn set_stroke_rgb(&mut self, r: f32, g: f32, b: f32) {
        let a = self.state.stroke_color.a;
        self.state.stroke_color = Rgba::new(color_byte(r), color_byte(g), color_byte(b), a);
    }

    /// The `ca` graphics state parameter.
    pub fn set_fill_alpha(&mut self, alpha: f32) {
        self.state.fill_color.a = color_byte(alpha);
    }

    /// The `CA` graphics state parameter.
    pub fn set_stroke_alpha(&mut self, alpha: f32) {
        self.state.stroke_color.a = color_byte(alpha);
    }

    /// The `w` operator.
    pub fn set_line_width(&mut self, width: f32) {
        self.state.line_width = width;
    }

    /// The `J` operator.
    pub fn set_line_cap(&mut self, cap: i64) {
        self.state.line_cap = match cap {
            0 => Cap::Butt,
            1 => Cap::Round,
            2 => Cap::Square,
            _ => {
                log::warn!("invalid line cap {}; keeping current", cap);
                return;
            }
        };
    }

    /// The `j` operator.
    pub fn set_line_join(&mut self, join: i64) {
        self.state.line_join = match join {
            0 => Join::Miter,
            1 => Join::Round,
            2 => Join::Bevel,
            _ => {
                log::warn!("invalid line join {}; keeping current", join);
                return;
            }
        };
    }

    /// The `M` operator.
    pub fn set_miter_limit(&mut self, limit: f32) {
        self.state.miter_limit = limit;
    }

    /// The `d` operator. A pattern with negative entries is invalid and is
    /// replaced with no dashing.
    pub fn set_dash(&mut self, dashes: Vec<f32>, phase: f32) {
        if dashes.iter().any(|&d| d < 0.0) {
            log::warn!("invalid dash pattern {:?}; dashing disabled", dashes);
            self.state.dashes = Vec::new();
            self.state.dash_phase = 0.0;
            return;
        }
        self.state.dashes = dashes;
        self.state.dash_phase = phase;
    }

    // === Images ===

    /// Paint an image into the unit square of the current coordinate
    /// system, flipping it so that image row 0 lands at the top.
    pub fn image(&mut self, image: &Image) {
        let w = image.width() as f32;
        let h = image.height() as f32;
        if w == 0.0 || h == 0.0 {
            return;
        }
        self.surface
            .paint_image(image, Affine::new(1.0 / w, 0.0, 0.0, -1.0 / h, 0.0, 1.0));
    }
}

/// Convert stroked contours back into a path element list so they can be
/// filled through the surface contract.
fn elements_from_contours(contours: &[Vec<Segment>]) -> Vec<PathElement> {
    let mut elements = Vec::new();
    for contour in contours {
        let Some(first) = contour.first() else {
            continue;
        };
        elements.push(PathElement::Move(first.start));
        for s in contour {
            elements.push(PathElement::Cubic(s.cp1, s.cp2, s.end));
        }
        elements.push(PathElement::Close);
    }
    elements
}
