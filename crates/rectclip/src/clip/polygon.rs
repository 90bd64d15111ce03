//! Edge-wise polygon clipping.
//!
//! Every edge (closing edge included) is clipped on its own with
//! `clip_segment`; the surviving endpoints are concatenated in edge order.
//!
//! Known limitation
//! - This is not Sutherland-Hodgman. Fully outside edges vanish, no window
//!   corners are inserted, and the output is a flat list of fragment endpoints
//!   rather than a closed polygon. Consumers that need a closed region must
//!   stitch it themselves.

use super::error::ClipError;
use super::segment::clip_segment;
use super::types::{Point, Polygon, Segment, Window};

/// Points retained by [`clip_polygon`], two per surviving edge.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClippedPolygon {
    points: Vec<Point>,
}

impl ClippedPolygon {
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Retained per-edge fragments in edge order.
    pub fn fragments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points.chunks_exact(2).map(|c| Segment::new(c[0], c[1]))
    }

    /// All points inside `window` up to slack `eps`.
    pub fn within(&self, window: &Window, eps: f64) -> bool {
        self.points.iter().all(|&p| window.contains_eps(p, eps))
    }
}

/// Clip every edge of `polygon` and concatenate the visible endpoints.
///
/// An all-outside polygon yields an empty result.
pub fn clip_polygon(window: &Window, polygon: &Polygon) -> ClippedPolygon {
    let mut points = Vec::with_capacity(2 * polygon.len());
    for edge in polygon.edges() {
        if let Some(seg) = clip_segment(window, edge.p1, edge.p2) {
            points.push(seg.p1);
            points.push(seg.p2);
        }
    }
    ClippedPolygon { points }
}

/// Validate a raw vertex list, then clip it.
pub fn clip_points(window: &Window, vertices: &[Point]) -> Result<ClippedPolygon, ClipError> {
    let polygon = Polygon::new(vertices.to_vec())?;
    Ok(clip_polygon(window, &polygon))
}

impl Polygon {
    /// See [`clip_polygon`].
    #[inline]
    pub fn clip(&self, window: &Window) -> ClippedPolygon {
        clip_polygon(window, self)
    }
}
