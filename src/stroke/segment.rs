//! Cubic Bezier segments and the curve math the stroker is built on.
//!
//! Many of the algorithms come from <https://pomax.github.io/bezierinfo/>.

use smallvec::SmallVec;

use crate::geom::Point;

/// A cubic Bezier curve, or a line segment promoted to one with collinear
/// control points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Segment {
    pub start: Point,
    pub cp1: Point,
    pub cp2: Point,
    pub end: Point,
}

impl Segment {
    /// A line segment from `a` to `b`, as a cubic with control points at the
    /// 1/3 and 2/3 marks.
    pub fn linear(a: Point, b: Point) -> Segment {
        let spacing = (b - a) / 3.0;
        Segment {
            start: a,
            cp1: a + spacing,
            cp2: b - spacing,
            end: b,
        }
    }

    /// A quadratic Bezier curve from `a` through control point `cp` to `b`,
    /// upgraded to a cubic.
    pub fn quadratic(a: Point, cp: Point, b: Point) -> Segment {
        Segment {
            start: a,
            cp1: a + (cp - a) * (2.0 / 3.0),
            cp2: b + (cp - b) * (2.0 / 3.0),
            end: b,
        }
    }

    /// Unit tangent directions at the start and end of the segment.
    ///
    /// When control points coincide with an endpoint, the direction falls
    /// through to the next distinct point. A fully degenerate segment
    /// returns zero vectors.
    pub(crate) fn tangents(&self) -> (Point, Point) {
        let t0 = if self.cp1 != self.start {
            unit_vector(self.cp1 - self.start)
        } else if self.cp2 != self.start {
            unit_vector(self.cp2 - self.start)
        } else {
            unit_vector(self.end - self.start)
        };

        let t1 = if self.cp2 != self.end {
            unit_vector(self.end - self.cp2)
        } else if self.cp1 != self.end {
            unit_vector(self.end - self.cp1)
        } else {
            unit_vector(self.end - self.start)
        };

        (t0, t1)
    }

    /// Split into two segments at `t` with de Casteljau's algorithm.
    pub fn split(&self, t: f32) -> (Segment, Segment) {
        let a1 = interpolate(t, self.start, self.cp1);
        let a2 = interpolate(t, self.cp1, self.cp2);
        let a3 = interpolate(t, self.cp2, self.end);

        let b1 = interpolate(t, a1, a2);
        let b2 = interpolate(t, a2, a3);

        let c = interpolate(t, b1, b2);

        (
            Segment {
                start: self.start,
                cp1: a1,
                cp2: b1,
                end: c,
            },
            Segment {
                start: c,
                cp1: b2,
                cp2: a3,
                end: self.end,
            },
        )
    }

    /// The section of the segment that lies between `t1` and `t2`.
    pub fn split2(&self, t1: f32, t2: f32) -> Segment {
        if t1 == 0.0 {
            return self.split(t2).0;
        }
        if t2 == 1.0 {
            return self.split(t1).1;
        }

        let (a, _) = self.split(t2);
        a.split(t1 / t2).1
    }

    /// Sorted, deduplicated `t` values of the segment's extreme points,
    /// always including 0 and 1.
    pub fn extrema(&self) -> SmallVec<[f32; 8]> {
        let mut result: SmallVec<[f32; 8]> = SmallVec::new();

        let (a, b, c) = (
            self.cp1.x - self.start.x,
            self.cp2.x - self.cp1.x,
            self.end.x - self.cp2.x,
        );
        quadratic_roots(&mut result, a, b, c);
        if let Some(r) = linear_root(b - a, c - b) {
            result.push(r);
        }

        let (a, b, c) = (
            self.cp1.y - self.start.y,
            self.cp2.y - self.cp1.y,
            self.end.y - self.cp2.y,
        );
        quadratic_roots(&mut result, a, b, c);
        if let Some(r) = linear_root(b - a, c - b) {
            result.push(r);
        }

        // Make sure the endpoints are included.
        result.push(0.0);
        result.push(1.0);

        // Values outside [0, 1], and NaN, are clamped to zero so that
        // sorting and deduplication remove them.
        for v in result.iter_mut() {
            if *v < 0.0 || *v > 1.0 || v.is_nan() {
                *v = 0.0;
            }
        }
        result.sort_by(|a, b| a.total_cmp(b));
        result.dedup();
        result
    }

    /// Sub-segments of the curve cut at its extrema.
    pub(crate) fn split_at_extrema(&self) -> SmallVec<[Segment; 8]> {
        let extrema = self.extrema();
        let mut result = SmallVec::new();
        for pair in extrema.windows(2) {
            result.push(self.split2(pair[0], pair[1]));
        }
        result
    }

    pub(crate) fn reverse(&self) -> Segment {
        Segment {
            start: self.end,
            cp1: self.cp2,
            cp2: self.cp1,
            end: self.start,
        }
    }

    /// Approximate arc length, calculated with 5-point Gauss-Lobatto
    /// quadrature.
    ///
    /// The weights are those of the approximateCubicArcLengthC function from
    /// fonttools. The dash algorithm relies on this approximation growing
    /// monotonically with the span of a sub-segment; do not substitute
    /// different weights.
    pub(crate) fn length(&self) -> f32 {
        let v0 = self.start.distance(self.cp1) * 0.15;
        let v1 = (self.start * -0.558983582205757
            + self.cp1 * 0.325650248872424
            + self.cp2 * 0.208983582205757
            + self.end * 0.024349751127576)
            .length();
        let v2 = (self.end - self.start + self.cp2 - self.cp1).length() * 0.26666666666666666;
        let v3 = (self.start * -0.024349751127576 - self.cp1 * 0.208983582205757
            - self.cp2 * 0.325650248872424
            + self.end * 0.558983582205757)
            .length();
        let v4 = self.end.distance(self.cp2) * 0.15;

        v0 + v1 + v2 + v3 + v4
    }

    /// Split the segment so that the first piece has the given arc length.
    ///
    /// If the segment is shorter than `length`, the first piece is the whole
    /// segment and the second is `None`.
    pub(crate) fn split_at_length(&self, length: f32) -> (Segment, Option<Segment>) {
        const STEPS: u32 = 1 << 20;
        // Binary search for the smallest split point whose left piece is at
        // least the requested length.
        let mut lo = 0u32;
        let mut hi = STEPS;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let (left, _) = self.split(mid as f32 / STEPS as f32);
            if left.length() >= length {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        if lo == STEPS {
            return (*self, None);
        }
        let (s1, s2) = self.split(lo as f32 / STEPS as f32);
        (s1, Some(s2))
    }
}

/// Reverse a contour, reversing every segment and their order.
pub(crate) fn reverse_contour(contour: &[Segment]) -> Vec<Segment> {
    contour.iter().rev().map(Segment::reverse).collect()
}

/// Scale `p` so that it lies on the unit circle. The zero vector is
/// returned unchanged.
pub(crate) fn unit_vector(p: Point) -> Point {
    if p == Point::ZERO {
        return p;
    }
    p / p.length()
}

/// A point between `a` and `b`, with the ratio specified by `t`.
fn interpolate(t: f32, a: Point, b: Point) -> Point {
    a * (1.0 - t) + b * t
}

/// Append the `t` values for which a one-dimensional quadratic Bezier
/// function with endpoints `a` and `c` and control value `b` returns zero.
fn quadratic_roots(dst: &mut SmallVec<[f32; 8]>, a: f32, b: f32, c: f32) {
    let d = a - 2.0 * b + c;
    if d != 0.0 {
        // A negative discriminant makes m1 NaN; the caller filters those out.
        let m1 = -(((b * b - a * c) as f64).sqrt() as f32);
        let m2 = -a + b;
        dst.push(-(m1 + m2) / d);
        dst.push(-(-m1 + m2) / d);
    } else if b != c {
        dst.push((2.0 * b - c) / (2.0 * (b - c)));
    }
}

/// The `t` value for which a one-dimensional linear Bezier function with
/// endpoints `a` and `b` returns zero.
fn linear_root(a: f32, b: f32) -> Option<f32> {
    if a != b {
        Some(a / (a - b))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    fn assert_point_near(got: Point, want: Point) {
        assert!(
            (got.x - want.x).abs() < 1e-5 && (got.y - want.y).abs() < 1e-5,
            "got {:?}, want {:?}",
            got,
            want
        );
    }

    #[test]
    fn test_linear_control_points() {
        let s = Segment::linear(pt(0.0, 0.0), pt(9.0, 3.0));
        assert_eq!(s.cp1, pt(3.0, 1.0));
        assert_eq!(s.cp2, pt(6.0, 2.0));
    }

    #[test]
    fn test_tangents() {
        let s = Segment {
            start: pt(119.0, 100.0),
            cp1: pt(25.0, 190.0),
            cp2: pt(210.0, 250.0),
            end: pt(210.0, 30.0),
        };
        let (t0, t1) = s.tangents();
        assert_point_near(t0, pt(-0.72230804, 0.69157153));
        assert_point_near(t1, pt(0.0, -1.0));
    }

    #[test]
    fn test_tangents_coincident_control_point() {
        let s = Segment {
            start: pt(25.0, 190.0),
            cp1: pt(25.0, 190.0),
            cp2: pt(210.0, 250.0),
            end: pt(210.0, 30.0),
        };
        let (t0, t1) = s.tangents();
        assert_point_near(t0, pt(0.95122284, 0.3085047));
        assert_point_near(t1, pt(0.0, -1.0));
    }

    #[test]
    fn test_tangents_degenerate() {
        let p = pt(5.0, 5.0);
        let s = Segment {
            start: p,
            cp1: p,
            cp2: p,
            end: p,
        };
        assert_eq!(s.tangents(), (Point::ZERO, Point::ZERO));
    }

    #[test]
    fn test_extrema() {
        let s = Segment {
            start: pt(110.0, 150.0),
            cp1: pt(25.0, 190.0),
            cp2: pt(210.0, 250.0),
            end: pt(210.0, 30.0),
        };
        let want = [0.0, 0.06666667, 0.18681319, 0.43785095, 0.5934066, 1.0];
        let got = s.extrema();
        assert_eq!(got.len(), want.len(), "got {:?}", got);
        for (g, w) in got.iter().zip(want.iter()) {
            assert!((g - w).abs() < 1e-6, "got {:?}, want {:?}", got, want);
        }
    }

    #[test]
    fn test_extrema_sorted_unique_with_endpoints() {
        let s = Segment {
            start: pt(0.0, 0.0),
            cp1: pt(10.0, 20.0),
            cp2: pt(-5.0, 40.0),
            end: pt(30.0, -10.0),
        };
        let ex = s.extrema();
        assert_eq!(*ex.first().unwrap(), 0.0);
        assert_eq!(*ex.last().unwrap(), 1.0);
        for pair in ex.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_split_meets_in_the_middle() {
        let s = Segment {
            start: pt(0.0, 0.0),
            cp1: pt(10.0, 30.0),
            cp2: pt(40.0, 30.0),
            end: pt(50.0, 0.0),
        };
        let (left, right) = s.split(0.3);
        assert_eq!(left.start, s.start);
        assert_eq!(right.end, s.end);
        assert_eq!(left.end, right.start);
    }

    #[test]
    fn test_split2_matches_split() {
        let s = Segment {
            start: pt(0.0, 0.0),
            cp1: pt(10.0, 30.0),
            cp2: pt(40.0, 30.0),
            end: pt(50.0, 0.0),
        };
        assert_eq!(s.split2(0.0, 0.4), s.split(0.4).0);
        assert_eq!(s.split2(0.4, 1.0), s.split(0.4).1);
    }

    #[test]
    fn test_length_of_line() {
        let s = Segment::linear(pt(0.0, 0.0), pt(30.0, 40.0));
        assert!((s.length() - 50.0).abs() < 0.05, "length {}", s.length());
    }

    #[test]
    fn test_split_at_length() {
        let s = Segment::linear(pt(0.0, 0.0), pt(100.0, 0.0));
        let (s1, s2) = s.split_at_length(40.0);
        assert!((s1.end.x - 40.0).abs() < 0.1, "split at {}", s1.end.x);
        assert!(s2.is_some());

        let (s1, s2) = s.split_at_length(150.0);
        assert_eq!(s1, s);
        assert!(s2.is_none());
    }

    #[test]
    fn test_reverse() {
        let s = Segment {
            start: pt(0.0, 0.0),
            cp1: pt(1.0, 2.0),
            cp2: pt(3.0, 4.0),
            end: pt(5.0, 6.0),
        };
        let r = s.reverse();
        assert_eq!(r.start, s.end);
        assert_eq!(r.cp1, s.cp2);
        assert_eq!(r.cp2, s.cp1);
        assert_eq!(r.end, s.start);
        assert_eq!(r.reverse(), s);
    }
}
