//! The dynamic program that picks the cheapest anchor set

use std::collections::HashSet;

use kurbo::{Point, Vec2};

use crate::forced::forced_points_impl;
use crate::interpolate::spans_exactly;
use crate::IupError;

/// Cost and predecessor tables of one linear optimization pass.
///
/// State `i` means "position `i` is an anchor and every earlier omitted
/// position interpolates exactly from its bracketing anchors". `costs[i]`
/// is the fewest anchors achieving that, `chain[i]` the previous anchor in
/// the cheapest such prefix, with `None` standing for the cut point at the
/// last position, reached by wrapping backward past zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DpSolution {
    pub costs: Vec<u32>,
    pub chain: Vec<Option<usize>>,
}

/// Least-cost encoding for every prefix of a cut-open contour.
///
/// The contour is assumed rotated so the chosen cut point sits at the last
/// position; the cut is always an anchor, making `costs[n - 1]` the total
/// for the whole cycle and `chain` the path to walk to recover the anchor
/// set.
///
/// `forced` never changes the tables, it only prunes the candidate scan: a
/// span across a point nothing can interpolate will never validate, so the
/// scan stops at the first forced candidate. Passing an empty set yields
/// the identical result, just slower.
pub fn optimize_dp(
    deltas: &[Vec2],
    coords: &[Point],
    forced: &HashSet<usize>,
) -> Result<DpSolution, IupError> {
    crate::validate(deltas, coords)?;
    Ok(optimize_dp_impl(deltas, coords, forced))
}

fn optimize_dp_impl(deltas: &[Vec2], coords: &[Point], forced: &HashSet<usize>) -> DpSolution {
    let n = deltas.len();
    let mut costs = Vec::with_capacity(n);
    let mut chain: Vec<Option<usize>> = (0..n).map(|i| i.checked_sub(1)).collect();

    if n <= 2 {
        // Cycles this small cannot interpolate anything; every point is its
        // own anchor whatever `forced` says.
        costs.extend(1..=n as u32);
        return DpSolution { costs, chain };
    }

    for i in 0..n {
        // Chaining straight to the previous position skips nothing and is
        // always valid.
        costs.push(if i > 0 { costs[i - 1] } else { 0 } + 1);

        if i > 0 && forced.contains(&(i - 1)) {
            // Any longer span would have to interpolate across a forced
            // point.
            continue;
        }
        for j in (-1..=i as isize - 2).rev() {
            let (cost, j_forced) = if j < 0 {
                (1, false)
            } else {
                (costs[j as usize] + 1, forced.contains(&(j as usize)))
            };
            if cost < costs[i] && spans_exactly(deltas, coords, j, i) {
                costs[i] = cost;
                chain[i] = (j >= 0).then_some(j as usize);
            }
            if j_forced {
                break;
            }
        }
    }
    DpSolution { costs, chain }
}

/// Optimize one contour, returning the deltas worth storing explicitly.
///
/// `Some` entries are the chosen anchors; every `None` delta is exactly
/// recoverable at decode time by interpolating between the nearest `Some`
/// on either side of it along the contour. The anchor set is as small as
/// any feasible set for this contour.
///
/// One- and two-point contours keep all their deltas, and an empty contour
/// is a valid no-op.
pub fn optimize_contour(deltas: &[Vec2], coords: &[Point]) -> Result<Vec<Option<Vec2>>, IupError> {
    crate::validate(deltas, coords)?;

    let n = deltas.len();
    if n == 0 {
        return Ok(Vec::new());
    }
    if n <= 2 {
        return Ok(deltas.iter().copied().map(Some).collect());
    }
    let first = deltas[0];
    if deltas.iter().all(|d| *d == first) {
        // A shared delta needs at most one anchor; the rest of the contour
        // inherits it. A shared zero delta needs none at all.
        let mut result = vec![None; n];
        if first.x != 0.0 || first.y != 0.0 {
            result[0] = Some(first);
        }
        return Ok(result);
    }

    let forced = forced_points_impl(deltas, coords);
    log::trace!("contour of {n} points, {} forced", forced.len());

    let anchors = if forced.is_empty() {
        // Nothing pins down a rotation, so try every cut and keep the
        // cheapest cycle.
        let mut best_cost = u32::MAX;
        let mut best = None;
        for cut in 0..n {
            let (cost, anchors) = solve_with_cut(deltas, coords, &forced, cut);
            if cost < best_cost {
                best_cost = cost;
                best = Some(anchors);
            }
        }
        best.ok_or_else(|| IupError::InvalidState("no cut produced a solution".into()))?
    } else {
        // Every forced point is an anchor in every optimal solution, so
        // cutting at one of them already yields the global optimum.
        let cut = *forced.iter().max().unwrap();
        let (_, anchors) = solve_with_cut(deltas, coords, &forced, cut);
        if !anchors.is_superset(&forced) {
            return Err(IupError::InvalidState(format!(
                "{anchors:?} should contain {forced:?}"
            )));
        }
        anchors
    };

    log::debug!("kept {} of {n} deltas", anchors.len());
    Ok((0..n)
        .map(|i| anchors.contains(&i).then(|| deltas[i]))
        .collect())
}

/// Rotate the contour so `cut` becomes the trailing anchor, solve the
/// linear problem, and walk the winning chain back to contour indices.
fn solve_with_cut(
    deltas: &[Vec2],
    coords: &[Point],
    forced: &HashSet<usize>,
    cut: usize,
) -> (u32, HashSet<usize>) {
    let n = deltas.len();
    let mid = n - 1 - cut;
    let mut rot_deltas = deltas.to_vec();
    let mut rot_coords = coords.to_vec();
    rot_deltas.rotate_right(mid);
    rot_coords.rotate_right(mid);
    let rot_forced = forced.iter().map(|&i| (i + mid) % n).collect();

    let dp = optimize_dp_impl(&rot_deltas, &rot_coords, &rot_forced);

    let mut anchors = HashSet::new();
    let mut i = n - 1;
    loop {
        // Undo the rotation as we collect.
        anchors.insert((i + cut + 1) % n);
        match dp.chain[i] {
            Some(prev) => i = prev,
            None => break,
        }
    }
    (dp.costs[n - 1], anchors)
}
