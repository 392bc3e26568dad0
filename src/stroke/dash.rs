//! Dashing: cutting contours into on/off pieces along their arc length.

use super::segment::Segment;

/// Return a dashed version of `path` according to the pattern and phase.
///
/// A pattern with a negative entry is invalid; the path is returned
/// unchanged, as is a pattern that sums to zero.
pub(crate) fn dash(path: &[Vec<Segment>], pattern: &[f32], phase: f32) -> Vec<Vec<Segment>> {
    let mut pattern_len = 0.0f32;
    for &d in pattern {
        if d < 0.0 {
            log::warn!("ignoring dash pattern with negative entry: {:?}", pattern);
            return path.to_vec();
        }
        pattern_len += d;
    }
    if pattern_len == 0.0 {
        return path.to_vec();
    }

    let mut phase = phase;
    while phase < 0.0 {
        // Multiply by two in case the pattern has an odd number of elements.
        phase += pattern_len * 2.0;
    }

    let mut result = Vec::new();

    for contour in path {
        let mut ph = phase;
        let mut contour = contour.clone();
        let mut i = 0usize;
        while !contour.is_empty() {
            let mut dash_len = pattern[i % pattern.len()];
            if ph > dash_len {
                ph -= dash_len;
                i += 1;
                continue;
            }
            dash_len -= ph;
            ph = 0.0;
            let (c1, c2) = split_contour(&contour, dash_len);
            if i % 2 == 0 && !c1.is_empty() {
                result.push(c1);
            }
            contour = c2;
            i += 1;
        }
    }

    result
}

/// Split `c` into two sections, the first with the specified arc length if
/// possible. If `c` is too short, the first section is all of `c` and the
/// second is empty.
fn split_contour(c: &[Segment], length: f32) -> (Vec<Segment>, Vec<Segment>) {
    let mut c1 = Vec::new();
    let mut remaining = length;
    let mut rest = c;

    while let Some((first, tail)) = rest.split_first() {
        if remaining <= 0.0 {
            break;
        }
        let segment_length = first.length();
        if segment_length > remaining {
            let (s1, s2) = first.split_at_length(remaining);
            c1.push(s1);
            let mut c2 = Vec::with_capacity(tail.len() + 1);
            if let Some(s2) = s2 {
                c2.push(s2);
            }
            c2.extend_from_slice(tail);
            return (c1, c2);
        }
        remaining -= segment_length;
        c1.push(*first);
        rest = tail;
    }

    (c1, rest.to_vec())
}
