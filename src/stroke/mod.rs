//! Geometric stroking: widening cubic Bezier contours into closed,
//! fillable outlines.
//!
//! The stroker takes a multi-contour path plus line width, cap, join,
//! miter limit, and dash pattern, and produces closed outlines that the
//! canvas fills with the stroke color. The downstream surface never needs
//! to know about strokes.

mod dash;
mod offset;
mod segment;

pub use segment::Segment;

use crate::geom::Point;
use offset::offset_curves;
use segment::{reverse_contour, unit_vector};

/// Bezier circle constant for the half-circle approximation used by round
/// caps.
const ROUND_CAP_K: f32 = 0.551784777779014;

/// Line cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cap {
    /// The stroke is squared off at the endpoint.
    #[default]
    Butt,
    /// A semicircular arc centered on the endpoint.
    Round,
    /// The stroke continues half a line width beyond the endpoint.
    Square,
}

/// Line join style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Join {
    /// Outer edges extended until they meet, subject to the miter limit.
    #[default]
    Miter,
    /// A circular arc between the outer edges.
    Round,
    /// A straight line between the outer edges.
    Bevel,
}

/// Stroking parameters.
#[derive(Debug, Clone)]
pub struct Options {
    pub width: f32,
    pub cap: Cap,
    pub join: Join,
    pub miter_limit: f32,
    pub dashes: Vec<f32>,
    pub dash_phase: f32,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            width: 1.0,
            cap: Cap::Butt,
            join: Join::Miter,
            miter_limit: 10.0,
            dashes: Vec::new(),
            dash_phase: 0.0,
        }
    }
}

/// Stroke a multi-contour path into closed outlines.
///
/// Open contours produce one closed outline each. Closed contours produce
/// two: the outer edge (counter-clockwise) and the inner edge of the hole
/// (clockwise). The result is meant to be filled with the non-zero rule.
pub fn stroke(path: &[Vec<Segment>], options: &Options) -> Vec<Vec<Segment>> {
    let dashed;
    let contours: &[Vec<Segment>] = if options.dashes.is_empty() {
        path
    } else {
        dashed = dash::dash(path, &options.dashes, options.dash_phase);
        &dashed
    };

    let mut result = Vec::new();
    for contour in contours {
        let mut c: Vec<Segment> = contour
            .iter()
            .copied()
            .filter(|s| !(s.cp1 == s.start && s.cp2 == s.start && s.end == s.start))
            .collect();
        if c.is_empty() {
            continue;
        }
        if !is_counter_clockwise(&c) {
            c = reverse_contour(&c);
        }
        let (outer, inner) = stroke_contour(&c, options);
        result.push(outer);
        if let Some(inner) = inner {
            result.push(inner);
        }
    }
    result
}

/// Orientation test using the shoelace formula over segment endpoints.
fn is_counter_clockwise(c: &[Segment]) -> bool {
    let mut sum = 0.0f32;
    for s in c {
        sum += (s.end.x - s.start.x) * (s.end.y + s.start.y);
    }
    sum < 0.0
}

/// Stroke a single contour.
///
/// Returns the outer outline, plus the inner outline if the contour was
/// closed.
fn stroke_contour(c: &[Segment], options: &Options) -> (Vec<Segment>, Option<Vec<Segment>>) {
    let half = options.width / 2.0;
    let closed = c[0].start == c[c.len() - 1].end;

    let mut outer: Vec<Segment> = Vec::new();
    let mut inner: Vec<Segment> = Vec::new();
    let mut prev_end_tangent: Option<Point> = None;

    for s in c {
        let (right, left) = offset_curves(*s, half);
        let (t_start, t_end) = s.tangents();
        if let Some(tp) = prev_end_tangent {
            let (outer_style, inner_style) = join_styles(tp, t_start, options.join);
            add_join(
                &mut outer,
                outer_style,
                options.miter_limit,
                s.start,
                half,
                tp,
                t_start,
                right[0].start,
            );
            add_join(
                &mut inner,
                inner_style,
                options.miter_limit,
                s.start,
                half,
                tp,
                t_start,
                left[0].start,
            );
        }
        outer.extend_from_slice(&right);
        inner.extend_from_slice(&left);
        prev_end_tangent = Some(t_end);
    }

    let t_end = prev_end_tangent.unwrap_or(Point::ZERO);
    let (t_first, _) = c[0].tangents();

    if closed {
        // Close both outlines with a join at the seam, then return the
        // inner outline reversed so it winds the opposite way.
        let (outer_style, inner_style) = join_styles(t_end, t_first, options.join);
        let outer_first = outer[0].start;
        let inner_first = inner[0].start;
        add_join(
            &mut outer,
            outer_style,
            options.miter_limit,
            c[0].start,
            half,
            t_end,
            t_first,
            outer_first,
        );
        add_join(
            &mut inner,
            inner_style,
            options.miter_limit,
            c[0].start,
            half,
            t_end,
            t_first,
            inner_first,
        );
        (outer, Some(reverse_contour(&inner)))
    } else {
        // Cap both ends and combine everything into one closed contour.
        let outer_start = outer[0].start;
        let outer_end = outer[outer.len() - 1].end;
        let inner_start = inner[0].start;
        let inner_end = inner[inner.len() - 1].end;

        let mut result = outer;
        add_cap(
            &mut result,
            options.cap,
            c[c.len() - 1].end,
            outer_end,
            inner_end,
            t_end,
            half,
        );
        result.extend(reverse_contour(&inner));
        add_cap(
            &mut result,
            options.cap,
            c[0].start,
            inner_start,
            outer_start,
            -t_first,
            half,
        );
        (result, None)
    }
}

/// Pick the join styles for the two offset outlines at a corner.
///
/// The outer side of the turn gets the configured style; the inner side is
/// always beveled.
fn join_styles(t_prev: Point, t_next: Point, join: Join) -> (Join, Join) {
    if t_prev.cross(t_next) > 0.0 {
        // Left turn: the right-hand offset is on the outside.
        (join, Join::Bevel)
    } else {
        (Join::Bevel, join)
    }
}

/// Connect the end of `dst` to `next_start` around `corner`.
#[allow(clippy::too_many_arguments)]
fn add_join(
    dst: &mut Vec<Segment>,
    style: Join,
    miter_limit: f32,
    corner: Point,
    half_width: f32,
    t_prev: Point,
    t_next: Point,
    next_start: Point,
) {
    let p0 = match dst.last() {
        Some(s) => s.end,
        None => return,
    };
    if p0 == next_start {
        return;
    }

    match style {
        Join::Bevel => dst.push(Segment::linear(p0, next_start)),
        Join::Round => {
            let r0 = corner.distance(p0);
            let r1 = corner.distance(next_start);
            let d0 = p0 - corner;
            let d1 = next_start - corner;
            let theta = (d0.cross(d1) as f64).atan2(d0.dot(d1) as f64).abs() as f32;
            let k = (theta / 4.0).tan() * (4.0 / 3.0);
            dst.push(Segment {
                start: p0,
                cp1: p0 + t_prev * (k * r0),
                cp2: next_start - t_next * (k * r1),
                end: next_start,
            });
        }
        Join::Miter => {
            let dot = t_prev.dot(t_next).clamp(-1.0, 1.0);
            let turn = dot.acos();
            let ratio = 1.0 / ((std::f32::consts::PI - turn) / 2.0).sin();
            if miter_limit <= 0.0 || !ratio.is_finite() || ratio > miter_limit {
                dst.push(Segment::linear(p0, next_start));
                return;
            }
            let bisector = unit_vector(unit_vector(p0 - corner) + unit_vector(next_start - corner));
            let tip = corner + bisector * (half_width * ratio);
            dst.push(Segment::linear(p0, tip));
            dst.push(Segment::linear(tip, next_start));
        }
    }
}

/// Cap the stroke at an endpoint, connecting `from` to `to` around
/// `center`. `outward` points away from the contour.
fn add_cap(dst: &mut Vec<Segment>, cap: Cap, center: Point, from: Point, to: Point, outward: Point, half_width: f32) {
    match cap {
        Cap::Butt => dst.push(Segment::linear(from, to)),
        Cap::Square => {
            let a = from + outward * half_width;
            let b = to + outward * half_width;
            dst.push(Segment::linear(from, a));
            dst.push(Segment::linear(a, b));
            dst.push(Segment::linear(b, to));
        }
        Cap::Round => {
            let tip = center + outward * half_width;
            let n0 = unit_vector(from - center);
            let n1 = unit_vector(to - center);
            let handle = half_width * ROUND_CAP_K;
            dst.push(Segment {
                start: from,
                cp1: from + outward * handle,
                cp2: tip + n0 * handle,
                end: tip,
            });
            dst.push(Segment {
                start: tip,
                cp1: tip + n1 * handle,
                cp2: to + outward * handle,
                end: to,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    fn is_closed(c: &[Segment]) -> bool {
        c[0].start == c[c.len() - 1].end
    }

    /// Area of a closed contour via flattening, always positive.
    fn contour_area(c: &[Segment]) -> f32 {
        const N: usize = 32;
        let mut area = 0.0f64;
        let mut prev = c[0].start;
        for s in c {
            for i in 1..=N {
                let t = i as f32 / N as f32;
                let p = if i == N { s.end } else { s.split(t).0.end };
                area += (prev.x as f64) * (p.y as f64) - (p.x as f64) * (prev.y as f64);
                prev = p;
            }
        }
        (area / 2.0).abs() as f32
    }

    #[test]
    fn test_single_segment_is_one_closed_contour() {
        let path = vec![vec![Segment::linear(pt(10.0, 50.0), pt(60.0, 50.0))]];
        let stroked = stroke(
            &path,
            &Options {
                width: 2.0,
                cap: Cap::Butt,
                join: Join::Bevel,
                ..Options::default()
            },
        );
        assert_eq!(stroked.len(), 1);
        assert!(is_closed(&stroked[0]));
    }

    #[test]
    fn test_butt_cap_line_area() {
        let len = 40.0;
        let width = 6.0;
        let path = vec![vec![Segment::linear(pt(0.0, 5.0), pt(len, 5.0))]];
        let stroked = stroke(
            &path,
            &Options {
                width,
                cap: Cap::Butt,
                join: Join::Bevel,
                ..Options::default()
            },
        );
        assert_eq!(stroked.len(), 1);
        let area = contour_area(&stroked[0]);
        assert!(
            (area - len * width).abs() / (len * width) < 0.01,
            "area {}",
            area
        );
    }

    #[test]
    fn test_square_cap_extends_line() {
        let width = 4.0;
        let path = vec![vec![Segment::linear(pt(0.0, 0.0), pt(10.0, 0.0))]];
        let stroked = stroke(
            &path,
            &Options {
                width,
                cap: Cap::Square,
                join: Join::Bevel,
                ..Options::default()
            },
        );
        // A square cap adds half a width on both ends: 14 * 4.
        let area = contour_area(&stroked[0]);
        assert!((area - 56.0).abs() / 56.0 < 0.01, "area {}", area);
    }

    #[test]
    fn test_round_cap_area() {
        let width = 4.0;
        let path = vec![vec![Segment::linear(pt(0.0, 0.0), pt(10.0, 0.0))]];
        let stroked = stroke(
            &path,
            &Options {
                width,
                cap: Cap::Round,
                join: Join::Bevel,
                ..Options::default()
            },
        );
        // Rectangle plus a full disc of radius 2 from the two half-circle caps.
        let want = 40.0 + std::f32::consts::PI * 4.0;
        let area = contour_area(&stroked[0]);
        assert!((area - want).abs() / want < 0.02, "area {}", area);
    }

    #[test]
    fn test_closed_contour_gives_outer_and_inner() {
        let square = vec![vec![
            Segment::linear(pt(0.0, 0.0), pt(10.0, 0.0)),
            Segment::linear(pt(10.0, 0.0), pt(10.0, 10.0)),
            Segment::linear(pt(10.0, 10.0), pt(0.0, 10.0)),
            Segment::linear(pt(0.0, 10.0), pt(0.0, 0.0)),
        ]];
        let stroked = stroke(
            &square,
            &Options {
                width: 2.0,
                join: Join::Miter,
                ..Options::default()
            },
        );
        assert_eq!(stroked.len(), 2);
        assert!(is_closed(&stroked[0]));
        assert!(is_closed(&stroked[1]));
        // Outer outline should enclose more area than the inner one.
        assert!(contour_area(&stroked[0]) > contour_area(&stroked[1]));
    }

    #[test]
    fn test_miter_join_square_area() {
        // An L of two unit-width strokes with miter joins keeps sharp
        // corners; the path is open, so one contour.
        let path = vec![vec![
            Segment::linear(pt(0.0, 0.0), pt(10.0, 0.0)),
            Segment::linear(pt(10.0, 0.0), pt(10.0, 10.0)),
        ]];
        let stroked = stroke(
            &path,
            &Options {
                width: 2.0,
                cap: Cap::Butt,
                join: Join::Miter,
                miter_limit: 10.0,
                ..Options::default()
            },
        );
        assert_eq!(stroked.len(), 1);
        assert!(is_closed(&stroked[0]));
        // Two 10x2 rectangles sharing a 2x2 corner square, plus the miter
        // tip filling the outer corner.
        let area = contour_area(&stroked[0]);
        assert!((area - 40.0).abs() / 40.0 < 0.03, "area {}", area);
    }

    #[test]
    fn test_degenerate_segments_are_skipped() {
        let p = pt(5.0, 5.0);
        let degenerate = Segment {
            start: p,
            cp1: p,
            cp2: p,
            end: p,
        };
        let path = vec![
            vec![degenerate],
            vec![degenerate, Segment::linear(p, pt(15.0, 5.0))],
        ];
        let stroked = stroke(&path, &Options::default());
        // The all-degenerate contour vanishes; the other strokes normally.
        assert_eq!(stroked.len(), 1);
    }

    #[test]
    fn test_zero_miter_limit_always_bevels() {
        let path = vec![vec![
            Segment::linear(pt(0.0, 0.0), pt(10.0, 0.0)),
            Segment::linear(pt(10.0, 0.0), pt(10.0, 10.0)),
        ]];
        let mitered = stroke(
            &path,
            &Options {
                width: 2.0,
                join: Join::Miter,
                miter_limit: 10.0,
                ..Options::default()
            },
        );
        let beveled = stroke(
            &path,
            &Options {
                width: 2.0,
                join: Join::Miter,
                miter_limit: 0.0,
                ..Options::default()
            },
        );
        // The bevel fallback cuts off the miter tip at the outer corner.
        let lost = contour_area(&mitered[0]) - contour_area(&beveled[0]);
        assert!(lost > 0.2, "bevel removed area {}", lost);
    }

    #[test]
    fn test_dashes_produce_separate_outlines() {
        let path = vec![vec![Segment::linear(pt(0.0, 0.0), pt(16.0, 0.0))]];
        let stroked = stroke(
            &path,
            &Options {
                width: 2.0,
                cap: Cap::Butt,
                join: Join::Bevel,
                dashes: vec![5.0, 3.0],
                dash_phase: 0.0,
                ..Options::default()
            },
        );
        assert_eq!(stroked.len(), 2);
        for c in &stroked {
            assert!(is_closed(c));
            let area = contour_area(c);
            assert!((area - 10.0).abs() / 10.0 < 0.02, "area {}", area);
        }
    }
}
