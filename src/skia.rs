//! A tiny-skia backed surface for rasterizing page content.

use tiny_skia::{
    FillRule as SkiaFillRule, IntSize, Mask, Paint, Path, PathBuilder, Pixmap, PixmapPaint,
    Transform,
};

use crate::canvas::Rgba;
use crate::geom::Affine;
use crate::image::Image;
use crate::path::PathElement;
use crate::surface::{FillRule, Handle, Surface};

fn to_skia_transform(m: Affine) -> Transform {
    Transform::from_row(m.a, m.b, m.c, m.d, m.e, m.f)
}

fn to_skia_fill_rule(rule: FillRule) -> SkiaFillRule {
    match rule {
        FillRule::NonZero => SkiaFillRule::Winding,
        FillRule::EvenOdd => SkiaFillRule::EvenOdd,
    }
}

/// Convert an outline to a tiny-skia path, closing every subpath.
fn to_skia_path(outline: &[PathElement]) -> Option<Path> {
    let mut pb = PathBuilder::new();
    let mut open = false;
    for e in outline {
        match *e {
            PathElement::Move(p) => {
                if open {
                    pb.close();
                }
                pb.move_to(p.x, p.y);
                open = false;
            }
            PathElement::Line(p) => {
                pb.line_to(p.x, p.y);
                open = true;
            }
            PathElement::Cubic(cp1, cp2, p) => {
                pb.cubic_to(cp1.x, cp1.y, cp2.x, cp2.y, p.x, p.y);
                open = true;
            }
            PathElement::Close => {
                pb.close();
                open = false;
            }
        }
    }
    if open {
        pb.close();
    }
    pb.finish()
}

enum Saved {
    Transform(Transform),
    Clip(Option<Mask>),
}

/// A surface that rasterizes into a [`tiny_skia::Pixmap`].
///
/// Transform layers compose onto a current transform; clip layers
/// intersect into a mask. Both are restored when their handle is popped.
pub struct SkiaSurface {
    pixmap: Pixmap,
    transform: Transform,
    mask: Option<Mask>,
    stack: Vec<(Handle, Saved)>,
    next_handle: u64,
}

impl SkiaSurface {
    /// Create a surface with a transparent pixmap of the given size.
    pub fn new(width: u32, height: u32) -> Option<SkiaSurface> {
        Some(SkiaSurface {
            pixmap: Pixmap::new(width, height)?,
            transform: Transform::identity(),
            mask: None,
            stack: Vec::new(),
            next_handle: 0,
        })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    fn allocate(&mut self) -> Handle {
        let h = Handle(self.next_handle);
        self.next_handle += 1;
        h
    }
}

impl Surface for SkiaSurface {
    fn fill_outline(&mut self, outline: &[PathElement], rule: FillRule, color: Rgba) {
        let Some(path) = to_skia_path(outline) else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color(tiny_skia::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        paint.anti_alias = true;
        self.pixmap.fill_path(
            &path,
            &paint,
            to_skia_fill_rule(rule),
            self.transform,
            self.mask.as_ref(),
        );
    }

    fn paint_image(&mut self, image: &Image, unit_transform: Affine) {
        let Some(size) = IntSize::from_wh(image.width(), image.height()) else {
            return;
        };
        let Some(source) = Pixmap::from_vec(image.to_rgba8(), size) else {
            return;
        };
        let transform = self.transform.pre_concat(to_skia_transform(unit_transform));
        self.pixmap.draw_pixmap(
            0,
            0,
            source.as_ref(),
            &PixmapPaint::default(),
            transform,
            self.mask.as_ref(),
        );
    }

    fn push_transform(&mut self, transform: Affine) -> Handle {
        let handle = self.allocate();
        self.stack.push((handle, Saved::Transform(self.transform)));
        self.transform = self.transform.pre_concat(to_skia_transform(transform));
        handle
    }

    fn push_clip(&mut self, outline: &[PathElement], rule: FillRule) -> Handle {
        let handle = self.allocate();
        let saved = self.mask.take();

        if let Some(path) = to_skia_path(outline) {
            let rule = to_skia_fill_rule(rule);
            let mut mask = match &saved {
                Some(old) => {
                    let mut mask = old.clone();
                    mask.intersect_path(&path, rule, true, self.transform);
                    Some(mask)
                }
                None => Mask::new(self.pixmap.width(), self.pixmap.height()),
            };
            if saved.is_none() {
                if let Some(mask) = &mut mask {
                    mask.fill_path(&path, rule, true, self.transform);
                }
            }
            self.mask = mask;
        }

        self.stack.push((handle, Saved::Clip(saved)));
        handle
    }

    fn pop(&mut self, handle: Handle) {
        let Some((top, saved)) = self.stack.pop() else {
            log::warn!("pop with an empty layer stack");
            return;
        };
        if top != handle {
            log::warn!("layers popped out of order: got {:?}, expected {:?}", handle, top);
        }
        match saved {
            Saved::Transform(t) => self.transform = t,
            Saved::Clip(m) => self.mask = m,
        }
    }
}
