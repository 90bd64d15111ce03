use std::fmt;

/// Errors surfaced when building clipping inputs.
///
/// Geometry outcomes (fully outside, degenerate segments) are never errors;
/// only inputs that break a documented precondition end up here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClipError {
    /// Bounds violate `x_min <= x_max` or `y_min <= y_max` (NaN included).
    InvalidWindow {
        x_min: f64,
        y_min: f64,
        x_max: f64,
        y_max: f64,
    },
    /// A polygon needs at least three vertices.
    TooFewVertices { got: usize },
}

impl fmt::Display for ClipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipError::InvalidWindow {
                x_min,
                y_min,
                x_max,
                y_max,
            } => write!(
                f,
                "invalid window [{x_min}, {x_max}] x [{y_min}, {y_max}] (needs x_min <= x_max and y_min <= y_max)"
            ),
            ClipError::TooFewVertices { got } => {
                write!(f, "polygon has {got} vertices (needs at least 3)")
            }
        }
    }
}

impl std::error::Error for ClipError {}
