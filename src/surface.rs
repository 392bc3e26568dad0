//! The drawing surface contract.
//!
//! The canvas reduces everything it renders to a small set of surface
//! calls: filling closed outlines, painting images, and pushing and
//! popping transform and clip layers. Handles returned by the push
//! operations are scoped; the canvas pops them in LIFO order.

use crate::canvas::Rgba;
use crate::geom::Affine;
use crate::image::Image;
use crate::path::PathElement;

/// Fill rule for outlines and clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    /// Nonzero winding number rule.
    #[default]
    NonZero,
    /// Even-odd rule.
    EvenOdd,
}

/// An opaque token for a pushed transform or clip layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handle(pub u64);

/// A sink for rendered page content.
///
/// Outlines are path element lists in which every subpath is treated as
/// closed. Images are painted into the unit square through the supplied
/// transform, composed with whatever transform layers are active.
pub trait Surface {
    /// Fill an outline with a solid color.
    fn fill_outline(&mut self, outline: &[PathElement], rule: FillRule, color: Rgba);

    /// Paint an image. `unit_transform` maps image pixel coordinates onto
    /// the unit square of the current coordinate system.
    fn paint_image(&mut self, image: &Image, unit_transform: Affine);

    /// Push a coordinate transform layer. Subsequent drawing is mapped
    /// through `transform` before any previously pushed layers.
    fn push_transform(&mut self, transform: Affine) -> Handle;

    /// Push a clip layer. Subsequent drawing is restricted to the outline.
    fn push_clip(&mut self, outline: &[PathElement], rule: FillRule) -> Handle;

    /// Pop a previously pushed layer. Layers are popped in LIFO order.
    fn pop(&mut self, handle: Handle);
}

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    FillOutline {
        outline: Vec<PathElement>,
        rule: FillRule,
        color: Rgba,
    },
    PaintImage {
        width: u32,
        height: u32,
        unit_transform: Affine,
    },
    PushTransform {
        handle: Handle,
        transform: Affine,
    },
    PushClip {
        handle: Handle,
        rule: FillRule,
    },
    Pop {
        handle: Handle,
    },
}

/// A surface that records every call it receives.
///
/// Produces no visual output; used by tests to assert on the exact
/// sequence of drawing operations a page produces.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    events: Vec<SurfaceEvent>,
    next_handle: u64,
}

impl RecordingSurface {
    pub fn new() -> RecordingSurface {
        RecordingSurface::default()
    }

    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// The recorded fills, in order.
    pub fn fills(&self) -> Vec<&SurfaceEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, SurfaceEvent::FillOutline { .. }))
            .collect()
    }

    /// The number of push events without a matching pop.
    pub fn open_layers(&self) -> usize {
        let pushes = self
            .events
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    SurfaceEvent::PushTransform { .. } | SurfaceEvent::PushClip { .. }
                )
            })
            .count();
        let pops = self
            .events
            .iter()
            .filter(|e| matches!(e, SurfaceEvent::Pop { .. }))
            .count();
        pushes - pops
    }

    fn allocate(&mut self) -> Handle {
        let h = Handle(self.next_handle);
        self.next_handle += 1;
        h
    }
}

impl Surface for RecordingSurface {
    fn fill_outline(&mut self, outline: &[PathElement], rule: FillRule, color: Rgba) {
        self.events.push(SurfaceEvent::FillOutline {
            outline: outline.to_vec(),
            rule,
            color,
        });
    }

    fn paint_image(&mut self, image: &Image, unit_transform: Affine) {
        self.events.push(SurfaceEvent::PaintImage {
            width: image.width(),
            height: image.height(),
            unit_transform,
        });
    }

    fn push_transform(&mut self, transform: Affine) -> Handle {
        let handle = self.allocate();
        self.events
            .push(SurfaceEvent::PushTransform { handle, transform });
        handle
    }

    fn push_clip(&mut self, _outline: &[PathElement], rule: FillRule) -> Handle {
        let handle = self.allocate();
        self.events.push(SurfaceEvent::PushClip { handle, rule });
        handle
    }

    fn pop(&mut self, handle: Handle) {
        self.events.push(SurfaceEvent::Pop { handle });
    }
}
