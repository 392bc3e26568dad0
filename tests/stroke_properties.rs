//! Property-based tests for the geometry and stroking invariants.

use proptest::prelude::*;

use pdf_ink::{stroke, Cap, Join, Options, PathBuilder, Point, Segment};

fn pt(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

fn seg_strategy() -> impl Strategy<Value = Segment> {
    let coord = -100.0f32..100.0f32;
    (
        (coord.clone(), coord.clone()),
        (coord.clone(), coord.clone()),
        (coord.clone(), coord.clone()),
        (coord.clone(), coord),
    )
        .prop_map(|(s, c1, c2, e)| Segment {
            start: pt(s.0, s.1),
            cp1: pt(c1.0, c1.1),
            cp2: pt(c2.0, c2.1),
            end: pt(e.0, e.1),
        })
        .prop_filter("segment must not be a point", |s| {
            s.start.distance(s.end) > 1.0
        })
}

proptest! {
    /// Splitting composes: the pieces share the split point and keep the
    /// original endpoints.
    #[test]
    fn prop_split_preserves_endpoints(s in seg_strategy(), t in 0.01f32..0.99f32) {
        let (left, right) = s.split(t);
        prop_assert_eq!(left.start, s.start);
        prop_assert_eq!(right.end, s.end);
        prop_assert_eq!(left.end, right.start);
    }

    /// `split2` agrees with `split` on half-open spans.
    #[test]
    fn prop_split2_matches_split(s in seg_strategy(), t in 0.01f32..0.99f32) {
        prop_assert_eq!(s.split2(0.0, t), s.split(t).0);
        prop_assert_eq!(s.split2(t, 1.0), s.split(t).1);
    }

    /// Extrema are sorted, unique, and bracketed by 0 and 1.
    #[test]
    fn prop_extrema_sorted_unique(s in seg_strategy()) {
        let ex = s.extrema();
        prop_assert_eq!(*ex.first().unwrap(), 0.0);
        prop_assert_eq!(*ex.last().unwrap(), 1.0);
        for pair in ex.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    /// Stroking a single open segment produces exactly one closed contour
    /// whose segments connect.
    #[test]
    fn prop_single_segment_stroke_closes(s in seg_strategy(), width in 0.5f32..10.0f32) {
        let stroked = stroke(
            &[vec![s]],
            &Options {
                width,
                cap: Cap::Butt,
                join: Join::Bevel,
                ..Options::default()
            },
        );
        prop_assert_eq!(stroked.len(), 1);
        let c = &stroked[0];
        prop_assert_eq!(c[0].start, c[c.len() - 1].end);
    }

    /// Stroking a closed contour produces exactly two contours.
    #[test]
    fn prop_closed_contour_strokes_to_two(
        a in 10.0f32..100.0f32,
        bx in -50.0f32..50.0f32,
        cy in 10.0f32..100.0f32,
        width in 0.5f32..4.0f32,
    ) {
        let p0 = pt(0.0, 0.0);
        let p1 = pt(a, 0.0);
        let p2 = pt(bx, cy);
        let triangle = vec![
            Segment::linear(p0, p1),
            Segment::linear(p1, p2),
            Segment::linear(p2, p0),
        ];
        let stroked = stroke(&[triangle], &Options { width, ..Options::default() });
        prop_assert_eq!(stroked.len(), 2);
        for c in &stroked {
            prop_assert_eq!(c[0].start, c[c.len() - 1].end);
        }
    }

    /// Advancing the dash phase by twice the pattern length changes
    /// nothing. Integer-valued inputs keep the phase arithmetic exact.
    #[test]
    fn prop_dash_phase_period(
        d1 in 1u32..10u32,
        d2 in 1u32..10u32,
        phase in 0u32..20u32,
        len in 20u32..200u32,
    ) {
        let contour = vec![Segment::linear(pt(0.0, 0.0), pt(len as f32, 0.0))];
        let pattern = vec![d1 as f32, d2 as f32];
        let period = 2.0 * (d1 + d2) as f32;

        let opts = |phase: f32| Options {
            width: 2.0,
            cap: Cap::Butt,
            join: Join::Bevel,
            dashes: pattern.clone(),
            dash_phase: phase,
            ..Options::default()
        };
        let a = stroke(&[contour.clone()], &opts(phase as f32));
        let b = stroke(&[contour], &opts(phase as f32 + period));

        prop_assert_eq!(a.len(), b.len());
        for (ca, cb) in a.iter().zip(b.iter()) {
            prop_assert_eq!(ca.len(), cb.len());
            for (sa, sb) in ca.iter().zip(cb.iter()) {
                prop_assert!(sa.start.distance(sb.start) < 1e-3);
                prop_assert!(sa.end.distance(sb.end) < 1e-3);
            }
        }
    }

    /// Paths without a close produce contours whose segments connect
    /// exactly.
    #[test]
    fn prop_contours_connect(coords in prop::collection::vec((-100.0f32..100.0, -100.0f32..100.0), 2..20)) {
        let mut path = PathBuilder::new();
        path.move_to(coords[0].0, coords[0].1);
        for (i, &(x, y)) in coords[1..].iter().enumerate() {
            if i % 3 == 2 {
                path.curve_v(x + 1.0, y + 1.0, x, y);
            } else {
                path.line_to(x, y);
            }
        }
        for contour in path.contours() {
            for pair in contour.windows(2) {
                prop_assert_eq!(pair[1].start, pair[0].end);
            }
        }
    }

    /// A stroked horizontal line with butt caps covers length times
    /// width, within the Bezier approximation tolerance.
    #[test]
    fn prop_butt_stroke_area(len in 10.0f32..200.0f32, width in 1.0f32..10.0f32) {
        let contour = vec![Segment::linear(pt(0.0, 3.0), pt(len, 3.0))];
        let stroked = stroke(
            &[contour],
            &Options {
                width,
                cap: Cap::Butt,
                join: Join::Bevel,
                ..Options::default()
            },
        );
        prop_assert_eq!(stroked.len(), 1);
        let area = contour_area(&stroked[0]);
        let want = len * width;
        prop_assert!((area - want).abs() / want < 0.01, "area {} want {}", area, want);
    }
}

/// Area of a closed contour by flattening, always positive.
fn contour_area(c: &[Segment]) -> f32 {
    const N: usize = 16;
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
