//! The exact rule by which omitted deltas are recovered
//!
//! A delta may only be dropped if this predicate accepts it; the forced-point
//! scan and the dynamic program both go through here, so the two can never
//! disagree about feasibility.

use kurbo::{Point, Vec2};
use num::BigRational;

/// The two coordinate axes. Interpolation treats them independently.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Axis {
    X,
    Y,
}

impl Axis {
    pub(crate) const BOTH: [Axis; 2] = [Axis::X, Axis::Y];
}

/// Project one axis out of a coordinate or delta.
pub(crate) trait AxisValue {
    fn axis(&self, axis: Axis) -> f64;
}

impl AxisValue for Point {
    fn axis(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

impl AxisValue for Vec2 {
    fn axis(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

/// Lossless conversion. Inputs were validated finite at the public boundary.
fn exact(v: f64) -> BigRational {
    BigRational::from_float(v).unwrap()
}

/// Whether anchors `(a, da)` and `(b, db)` land exactly on `dp` at
/// coordinate `p`, on one axis.
///
/// Inside the anchors' coordinate range the recovered value is the linear
/// interpolation of the two deltas, evaluated in rational arithmetic so
/// float rounding can neither accept a lossy point nor reject a recoverable
/// one. Outside the range the nearer anchor's delta carries over unchanged.
/// Anchors sharing a coordinate recover nothing unless their deltas agree,
/// and then only that shared delta.
fn axis_recoverable(a: f64, da: f64, b: f64, db: f64, p: f64, dp: f64) -> bool {
    if a == b {
        // Zero-length span; both anchors are equally near, so the rule is
        // only defined when their deltas agree.
        return da == db && dp == da;
    }
    let (lo, hi, dlo, dhi) = if a < b { (a, b, da, db) } else { (b, a, db, da) };
    if p < lo {
        dp == dlo
    } else if p > hi {
        dp == dhi
    } else {
        let predicted = exact(dlo)
            + (exact(dhi) - exact(dlo)) * (exact(p) - exact(lo)) / (exact(hi) - exact(lo));
        exact(dp) == predicted
    }
}

/// Whether the point `p` is exactly recoverable from anchors `a` and `b`.
///
/// Each argument pairs a coordinate with its delta. Both axes must succeed.
pub(crate) fn recoverable(a: (Point, Vec2), b: (Point, Vec2), p: (Point, Vec2)) -> bool {
    Axis::BOTH.into_iter().all(|axis| {
        axis_recoverable(
            a.0.axis(axis),
            a.1.axis(axis),
            b.0.axis(axis),
            b.1.axis(axis),
            p.0.axis(axis),
            p.1.axis(axis),
        )
    })
}

/// Whether anchors at `from` and `to` exactly reproduce every point strictly
/// between them.
///
/// Indices are in cut-open linear order; `from == -1` addresses the cut
/// point at the last position, reached by wrapping backward past zero.
pub(crate) fn spans_exactly(deltas: &[Vec2], coords: &[Point], from: isize, to: usize) -> bool {
    debug_assert!(from >= -1 && (to as isize) > from);
    let a = if from < 0 {
        (coords[coords.len() - 1], deltas[deltas.len() - 1])
    } else {
        (coords[from as usize], deltas[from as usize])
    };
    let b = (coords[to], deltas[to]);
    ((from + 1) as usize..to).all(|i| recoverable(a, b, (coords[i], deltas[i])))
}
