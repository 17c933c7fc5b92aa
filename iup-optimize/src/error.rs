//! Errors that occur while optimizing a contour

/// A contour could not be optimized
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IupError {
    /// The delta and coordinate slices disagree about how many points the
    /// contour has
    LengthMismatch {
        num_deltas: usize,
        num_coords: usize,
    },
    /// A coordinate or delta component is NaN or infinite
    NonFiniteValue { index: usize },
    /// An internal invariant did not hold
    InvalidState(String),
}

impl std::fmt::Display for IupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IupError::LengthMismatch {
                num_deltas,
                num_coords,
            } => write!(f, "{num_deltas} deltas for {num_coords} coordinates"),
            IupError::NonFiniteValue { index } => {
                write!(f, "non-finite coordinate or delta at point {index}")
            }
            IupError::InvalidState(detail) => write!(f, "invalid state: {detail}"),
        }
    }
}

impl std::error::Error for IupError {}
