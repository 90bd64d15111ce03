//! Rectangular window clipping for segments and polygons.
//!
//! The engine is a set of pure functions: window bounds and geometry go in,
//! clipped geometry (or "nothing visible") comes out. Rendering and input
//! collection live elsewhere (see the `rectclip` CLI crate).
//!
//! API Policy
//! - Outcomes are values: `Option<Segment>` for segments, `ClippedPolygon`
//!   for polygons. Only broken preconditions (inverted window, fewer than three
//!   vertices) surface as `ClipError`, at construction time.

pub mod clip;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use clip::{
    clip_points, clip_polygon, clip_segment, ClipError, ClippedPolygon, Point, Polygon, Segment,
    Window,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::clip::{
        clip_points, clip_polygon, clip_segment, Boundary, ClipError, ClippedPolygon, Outcode,
        Point, Polygon, Segment, Window,
    };
    pub use crate::sample::{draw_polygon, ReplayToken, SampleCfg, VertexCount};
}
