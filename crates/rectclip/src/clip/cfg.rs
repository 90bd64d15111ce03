//! Tolerance defaults (internal).
//!
//! Policy
//! - The clipper never compares against an epsilon: outcodes use exact
//!   comparisons, so an accepted segment lies in the closed window exactly.
//! - Tolerances only apply to checks made by callers on derived geometry, e.g.
//!   comparing clipped points with expected literals or testing containment of
//!   points that went through further arithmetic.

/// Default slack passed to `Window::contains_eps` and `ClippedPolygon::within`.
pub const CONTAIN_EPS: f64 = 1e-9;
