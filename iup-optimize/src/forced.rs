//! Finding points that can never be interpolated

use std::collections::HashSet;

use kurbo::{Point, Vec2};

use crate::interpolate::{Axis, AxisValue};
use crate::IupError;

/// Indices whose deltas must stay explicit no matter which anchors end up
/// around them.
///
/// A point is tested against its two immediate contour neighbors, the most
/// favorable anchors it could ever get; the per-axis conditions are chosen
/// so that widening the anchor span can never turn a detected point
/// recoverable. The result is a search-space shortcut for [`optimize_dp`]:
/// feeding it in (or leaving it empty) never changes the optimizer's
/// answer, it only lets the scan stop early.
///
/// Contours of one or two points have no third point to interpolate from,
/// so every index is returned.
///
/// [`optimize_dp`]: crate::optimize_dp
pub fn forced_points(deltas: &[Vec2], coords: &[Point]) -> Result<HashSet<usize>, IupError> {
    crate::validate(deltas, coords)?;
    Ok(forced_points_impl(deltas, coords))
}

pub(crate) fn forced_points_impl(deltas: &[Vec2], coords: &[Point]) -> HashSet<usize> {
    let n = deltas.len();
    if n == 0 {
        return HashSet::new();
    }
    if n <= 2 {
        return (0..n).collect();
    }
    (0..n).filter(|&i| forced_at(deltas, coords, i)).collect()
}

/// Whether no anchor pair bracketing `at` can reproduce its delta.
fn forced_at(deltas: &[Vec2], coords: &[Point], at: usize) -> bool {
    let n = deltas.len();
    let prev = (at + n - 1) % n;
    let next = (at + 1) % n;

    for axis in Axis::BOTH {
        let c = coords[at].axis(axis);
        let d = deltas[at].axis(axis);
        // Neighbors ordered by coordinate so c1 <= c2.
        let (c1, d1, c2, d2) = if coords[prev].axis(axis) <= coords[next].axis(axis) {
            (
                coords[prev].axis(axis),
                deltas[prev].axis(axis),
                coords[next].axis(axis),
                deltas[next].axis(axis),
            )
        } else {
            (
                coords[next].axis(axis),
                deltas[next].axis(axis),
                coords[prev].axis(axis),
                deltas[prev].axis(axis),
            )
        };
        let force = if c1 == c2 {
            // Coincident neighbors reproduce nothing unless their deltas
            // agree; a zero delta stays reachable through wider spans.
            d1 != d2 && d != 0.0
        } else if (c1..=c2).contains(&c) {
            // Interpolation cannot leave the anchors' delta range, here or
            // for any wider span.
            !(d1.min(d2)..=d1.max(d2)).contains(&d)
        } else if d1 != d2 && d != 0.0 {
            // Beyond the near neighbor the delta must match it exactly or
            // at least sit on the same side as the span's slope.
            if c < c1 {
                d != d1 && (d < d1) != (d1 < d2)
            } else {
                d != d2 && (d2 < d) != (d1 < d2)
            }
        } else {
            false
        };
        if force {
            return true;
        }
    }
    false
}
