//! Rectangular window clipping (Cohen-Sutherland).
//!
//! Purpose
//! - Clip a single segment, or every edge of a closed polygon, against an
//!   axis-aligned window.
//! - Keep the API pure: inputs by value or shared reference, outputs are fresh
//!   values, no global state. Everything here is `Send + Sync`.
//!
//! Outcomes vs errors
//! - "Nothing visible" is a normal result (`None`, empty `ClippedPolygon`).
//! - `ClipError` only covers broken preconditions, raised when building a
//!   `Window` or `Polygon`.
//!
//! Code cross-refs: `Window`, `Outcode`, `clip_segment`, `clip_polygon`

pub mod cfg;
mod error;
mod outcode;
mod polygon;
mod segment;
mod types;

pub use error::ClipError;
pub use outcode::{Boundary, Outcode};
pub use polygon::{clip_points, clip_polygon, ClippedPolygon};
pub use segment::clip_segment;
pub use types::{Point, Polygon, Segment, Window};
