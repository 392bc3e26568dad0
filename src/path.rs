//! Path construction mirroring the PDF path operators.
//!
//! Paths are stored as a flat list of elements. Subpaths are delimited by
//! `Move`; consecutive `Move`s collapse into one and consecutive `Close`s
//! collapse. The builder tracks the current point and the target of the
//! last move-to, which `Close` restores.

use crate::geom::{Affine, Point};
use crate::stroke::Segment;

/// A single element of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathElement {
    /// Start a new subpath at the given point.
    Move(Point),
    /// A straight line to the given point.
    Line(Point),
    /// A cubic Bezier curve with two control points and an end point.
    Cubic(Point, Point, Point),
    /// Close the current subpath.
    Close,
}

/// Incremental path builder.
///
/// The methods correspond directly to PDF path construction operators
/// (`m l c v y h re`), plus a quadratic helper used by the font importer.
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    elements: Vec<PathElement>,
    current_point: Point,
    last_move_to: Point,
}

impl PathBuilder {
    pub fn new() -> PathBuilder {
        PathBuilder::default()
    }

    /// The `m` operator.
    pub fn move_to(&mut self, x: f32, y: f32) {
        let pt = Point::new(x, y);
        self.current_point = pt;
        self.last_move_to = pt;

        if let Some(PathElement::Move(end)) = self.elements.last_mut() {
            *end = pt;
            return;
        }
        self.elements.push(PathElement::Move(pt));
    }

    /// The `l` operator.
    pub fn line_to(&mut self, x: f32, y: f32) {
        let pt = Point::new(x, y);
        self.current_point = pt;
        self.elements.push(PathElement::Line(pt));
    }

    /// The `c` operator.
    pub fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) {
        let end = Point::new(x3, y3);
        self.elements.push(PathElement::Cubic(
            Point::new(x1, y1),
            Point::new(x2, y2),
            end,
        ));
        self.current_point = end;
    }

    /// The `v` operator: the first control point is the current point.
    pub fn curve_v(&mut self, x2: f32, y2: f32, x3: f32, y3: f32) {
        let cp1 = self.current_point;
        let end = Point::new(x3, y3);
        self.elements
            .push(PathElement::Cubic(cp1, Point::new(x2, y2), end));
        self.current_point = end;
    }

    /// The `y` operator: the second control point coincides with the end point.
    pub fn curve_y(&mut self, x1: f32, y1: f32, x3: f32, y3: f32) {
        let end = Point::new(x3, y3);
        self.elements
            .push(PathElement::Cubic(Point::new(x1, y1), end, end));
        self.current_point = end;
    }

    /// The `h` operator.
    pub fn close_path(&mut self) {
        match self.elements.last() {
            None | Some(PathElement::Close) => return,
            _ => {}
        }
        self.elements.push(PathElement::Close);
        self.current_point = self.last_move_to;
    }

    /// The `re` operator.
    pub fn rectangle(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.move_to(x, y);
        self.line_to(x + width, y);
        self.line_to(x + width, y + height);
        self.line_to(x, y + height);
        self.close_path();
    }

    /// Append a quadratic Bezier curve, upgraded to a cubic.
    ///
    /// PDF content streams never emit quadratics; this exists for the font
    /// importer, which receives them from TrueType outlines.
    pub fn quadratic_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let p0 = self.current_point;
        let p1 = Point::new(x1, y1);
        let p2 = Point::new(x2, y2);
        let cp1 = p0 + (p1 - p0) * (2.0 / 3.0);
        let cp2 = p2 + (p1 - p2) * (2.0 / 3.0);
        self.elements.push(PathElement::Cubic(cp1, cp2, p2));
        self.current_point = p2;
    }

    /// Append pre-built elements, transforming their points.
    ///
    /// Used by the text engine to place glyph outlines.
    pub fn extend_transformed(&mut self, elements: &[PathElement], m: &Affine) {
        for e in elements {
            match *e {
                PathElement::Move(end) => {
                    let p = m.apply(end);
                    self.move_to(p.x, p.y);
                }
                PathElement::Line(end) => {
                    let p = m.apply(end);
                    self.line_to(p.x, p.y);
                }
                PathElement::Cubic(cp1, cp2, end) => {
                    let cp1 = m.apply(cp1);
                    let cp2 = m.apply(cp2);
                    let end = m.apply(end);
                    self.curve_to(cp1.x, cp1.y, cp2.x, cp2.y, end.x, end.y);
                }
                PathElement::Close => self.close_path(),
            }
        }
    }

    /// The current point, at the end of the last emitted element.
    pub fn current_point(&self) -> Point {
        self.current_point
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Take the finished element list, leaving the builder empty.
    pub fn take(&mut self) -> Vec<PathElement> {
        self.current_point = Point::ZERO;
        self.last_move_to = Point::ZERO;
        std::mem::take(&mut self.elements)
    }

    /// Reset the builder to an empty path.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.current_point = Point::ZERO;
        self.last_move_to = Point::ZERO;
    }

    /// Convert the element list into contours for the stroker.
    ///
    /// Each `Move` starts a new contour. Lines become cubic segments with
    /// collinear control points. A `Close` whose current point differs from
    /// the last move-to gets an explicit closing segment.
    pub fn contours(&self) -> Vec<Vec<Segment>> {
        contours_of(&self.elements)
    }
}

/// Convert a slice of path elements into contours of cubic segments.
pub fn contours_of(elements: &[PathElement]) -> Vec<Vec<Segment>> {
    let mut result = Vec::new();
    let mut contour: Vec<Segment> = Vec::new();
    let mut pos = Point::ZERO;
    let mut last_move = Point::ZERO;

    for e in elements {
        match *e {
            PathElement::Move(end) => {
                if !contour.is_empty() {
                    result.push(std::mem::take(&mut contour));
                }
                pos = end;
                last_move = end;
            }
            PathElement::Line(end) => {
                contour.push(Segment::linear(pos, end));
                pos = end;
            }
            PathElement::Cubic(cp1, cp2, end) => {
                contour.push(Segment {
                    start: pos,
                    cp1,
                    cp2,
                    end,
                });
                pos = end;
            }
            PathElement::Close => {
                if pos != last_move {
                    contour.push(Segment::linear(pos, last_move));
                    pos = last_move;
                }
            }
        }
    }
    if !contour.is_empty() {
        result.push(contour);
    }
    result
}
