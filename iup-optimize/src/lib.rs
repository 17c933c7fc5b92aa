//! Interpolate Untouched Points
//!
//! A variable glyph stores one displacement ("delta") per outline point and
//! per design-space region, but it may leave any delta out as long as the
//! decoder can rebuild it by interpolating between the nearest stored
//! neighbors along the contour, per
//! [Inferred deltas for un-referenced point numbers][spec].
//!
//! This crate picks, for one closed contour at a time, the smallest set of
//! points whose deltas must stay explicit so that every omitted delta is
//! recovered with zero error. Callers iterate contours (and variation
//! regions) themselves and hand the winning anchor set to whatever packs
//! the sparse point data.
//!
//! The heavy lifting is a dynamic program over the cut-open cycle; see
//! [`optimize_contour`] for the all-in-one entry point, or drive
//! [`forced_points`] and [`optimize_dp`] separately to reuse the tables.
//!
//! [spec]: https://learn.microsoft.com/en-us/typography/opentype/spec/gvar#inferred-deltas-for-un-referenced-point-numbers

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod error;
mod forced;
mod interpolate;
mod optimize;

pub use error::IupError;
pub use forced::forced_points;
pub use optimize::{optimize_contour, optimize_dp, DpSolution};

use kurbo::{Point, Vec2};

/// Reject inputs the optimizer cannot meaningfully process.
///
/// Every public entry point runs this before touching the data; a failure
/// produces no partial result.
pub(crate) fn validate(deltas: &[Vec2], coords: &[Point]) -> Result<(), IupError> {
    if deltas.len() != coords.len() {
        return Err(IupError::LengthMismatch {
            num_deltas: deltas.len(),
            num_coords: coords.len(),
        });
    }
    for (i, (d, c)) in deltas.iter().zip(coords).enumerate() {
        if !(d.x.is_finite() && d.y.is_finite() && c.x.is_finite() && c.y.is_finite()) {
            return Err(IupError::NonFiniteValue { index: i });
        }
    }
    Ok(())
}
