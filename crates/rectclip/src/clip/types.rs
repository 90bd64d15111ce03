//! Value types fed to and returned by the clipper.
//!
//! - `Point`: `Vector2<f64>`; integer inputs are converted before clipping.
//! - `Window`: closed axis-aligned rectangle, validated on construction.
//! - `Segment`: ordered endpoint pair; order only matters for reporting.
//! - `Polygon`: closed vertex loop with at least three vertices.
//!
//! References
//! - Code cross-refs: `outcode::Outcode`, `segment::clip_segment`, `polygon::clip_polygon`

use nalgebra::Vector2;

use super::error::ClipError;
use super::outcode::Outcode;

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Axis-aligned clipping window `[x_min, x_max] × [y_min, y_max]`.
///
/// Invariant: `x_min <= x_max` and `y_min <= y_max`. Zero-width or zero-height
/// windows are allowed; they clip to a line or a single point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

impl Window {
    /// Build a window, rejecting inverted or NaN bounds.
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self, ClipError> {
        // Written as negated `<=` so NaN fails the check as well.
        if !(x_min <= x_max) || !(y_min <= y_max) {
            return Err(ClipError::InvalidWindow {
                x_min,
                y_min,
                x_max,
                y_max,
            });
        }
        Ok(Self {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Window spanned by two opposite corners, in any order.
    pub fn from_corners(a: Point, b: Point) -> Result<Self, ClipError> {
        Self::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    #[inline]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }
    #[inline]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }
    #[inline]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }
    #[inline]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Corners in counterclockwise order starting at `(x_min, y_min)`.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x_min, self.y_min),
            Point::new(self.x_max, self.y_min),
            Point::new(self.x_max, self.y_max),
            Point::new(self.x_min, self.y_max),
        ]
    }

    /// Region code of `p` relative to this window.
    #[inline]
    pub fn outcode(&self, p: Point) -> Outcode {
        Outcode::of(self, p)
    }

    /// Exact membership in the closed rectangle.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.outcode(p).is_inside()
    }

    /// Membership with slack `eps` on every side (`eps < 0` shrinks the window).
    #[inline]
    pub fn contains_eps(&self, p: Point, eps: f64) -> bool {
        p.x >= self.x_min - eps
            && p.x <= self.x_max + eps
            && p.y >= self.y_min - eps
            && p.y <= self.y_max + eps
    }
}

/// Ordered pair of endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    #[inline]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Same segment with endpoints swapped.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            p1: self.p2,
            p2: self.p1,
        }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }
}

/// Closed polygon; the last vertex connects back to the first.
///
/// No convexity or simplicity is assumed.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Build a polygon from at least three vertices.
    pub fn new(vertices: Vec<Point>) -> Result<Self, ClipError> {
        if vertices.len() < 3 {
            return Err(ClipError::TooFewVertices {
                got: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    /// Caller guarantees `vertices.len() >= 3`.
    pub(crate) fn from_vertices_unchecked(vertices: Vec<Point>) -> Self {
        debug_assert!(vertices.len() >= 3);
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false for a constructed polygon; provided for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges `v[i] → v[(i+1) mod n]`, closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }
}
