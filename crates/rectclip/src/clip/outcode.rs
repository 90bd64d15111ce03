//! Region codes and window boundaries for Cohen-Sutherland.
//!
//! Bit layout (fixed): LEFT=1, RIGHT=2, BOTTOM=4, TOP=8, INSIDE=0.
//! LEFT/RIGHT are mutually exclusive, as are BOTTOM/TOP.

use std::ops::{BitAnd, BitOr};

use super::types::{Point, Window};

/// 4-bit classification of a point relative to a `Window`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Outcode(u8);

impl Outcode {
    pub const INSIDE: Outcode = Outcode(0);
    pub const LEFT: Outcode = Outcode(1);
    pub const RIGHT: Outcode = Outcode(2);
    pub const BOTTOM: Outcode = Outcode(4);
    pub const TOP: Outcode = Outcode(8);

    /// Classify `p`. Comparisons are strict, so boundary points are inside.
    pub fn of(window: &Window, p: Point) -> Outcode {
        let mut code = 0u8;
        if p.x < window.x_min() {
            code |= Self::LEFT.0;
        } else if p.x > window.x_max() {
            code |= Self::RIGHT.0;
        }
        if p.y < window.y_min() {
            code |= Self::BOTTOM.0;
        } else if p.y > window.y_max() {
            code |= Self::TOP.0;
        }
        Outcode(code)
    }

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// True if every bit of `other` is set in `self`.
    #[inline]
    pub fn contains(self, other: Outcode) -> bool {
        self.0 & other.0 == other.0
    }

    /// First boundary to clip against, in the fixed order TOP, BOTTOM, RIGHT, LEFT.
    ///
    /// `None` for an inside code.
    pub fn first_boundary(self) -> Option<Boundary> {
        Boundary::PRIORITY
            .into_iter()
            .find(|b| self.contains(b.flag()))
    }
}

impl BitOr for Outcode {
    type Output = Outcode;
    #[inline]
    fn bitor(self, rhs: Outcode) -> Outcode {
        Outcode(self.0 | rhs.0)
    }
}

impl BitAnd for Outcode {
    type Output = Outcode;
    #[inline]
    fn bitand(self, rhs: Outcode) -> Outcode {
        Outcode(self.0 & rhs.0)
    }
}

/// One side of the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Boundary {
    Top,
    Bottom,
    Right,
    Left,
}

impl Boundary {
    /// Clip order. Changing it moves intermediate intersection points for
    /// corner cases, so it is pinned.
    pub const PRIORITY: [Boundary; 4] = [
        Boundary::Top,
        Boundary::Bottom,
        Boundary::Right,
        Boundary::Left,
    ];

    #[inline]
    pub fn flag(self) -> Outcode {
        match self {
            Boundary::Top => Outcode::TOP,
            Boundary::Bottom => Outcode::BOTTOM,
            Boundary::Right => Outcode::RIGHT,
            Boundary::Left => Outcode::LEFT,
        }
    }

    /// Intersection of the line through `a`,`b` with this boundary line.
    ///
    /// Pre: the segment crosses the boundary's axis (`a.y != b.y` for
    /// Top/Bottom, `a.x != b.x` for Right/Left). Cohen-Sutherland only calls
    /// this when one endpoint is outside the boundary and the other is not,
    /// which guarantees it.
    pub fn intersect(self, window: &Window, a: Point, b: Point) -> Point {
        match self {
            Boundary::Top => at_y(a, b, window.y_max()),
            Boundary::Bottom => at_y(a, b, window.y_min()),
            Boundary::Right => at_x(a, b, window.x_max()),
            Boundary::Left => at_x(a, b, window.x_min()),
        }
    }
}

#[inline]
fn at_y(a: Point, b: Point, y: f64) -> Point {
    Point::new(a.x + (b.x - a.x) * (y - a.y) / (b.y - a.y), y)
}

#[inline]
fn at_x(a: Point, b: Point, x: f64) -> Point {
    Point::new(x, a.y + (b.y - a.y) * (x - a.x) / (b.x - a.x))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w() -> Window {
        Window::new(-10.0, -10.0, 10.0, 10.0).unwrap()
    }

    #[test]
    fn codes_for_the_nine_regions() {
        let w = w();
        assert_eq!(Outcode::of(&w, Point::new(0.0, 0.0)), Outcode::INSIDE);
        assert_eq!(Outcode::of(&w, Point::new(-11.0, 0.0)), Outcode::LEFT);
        assert_eq!(Outcode::of(&w, Point::new(11.0, 0.0)), Outcode::RIGHT);
        assert_eq!(Outcode::of(&w, Point::new(0.0, -11.0)), Outcode::BOTTOM);
        assert_eq!(Outcode::of(&w, Point::new(0.0, 11.0)), Outcode::TOP);
        assert_eq!(
            Outcode::of(&w, Point::new(11.0, 11.0)),
            Outcode::TOP | Outcode::RIGHT
        );
        assert_eq!(Outcode::of(&w, Point::new(-11.0, -11.0)).bits(), 0b0101);
    }

    #[test]
    fn boundary_points_are_inside() {
        let w = w();
        for c in w.corners() {
            assert!(Outcode::of(&w, c).is_inside());
        }
        assert!(Outcode::of(&w, Point::new(10.0, 3.0)).is_inside());
    }

    #[test]
    fn priority_top_bottom_right_left() {
        assert_eq!(
            (Outcode::TOP | Outcode::LEFT).first_boundary(),
            Some(Boundary::Top)
        );
        assert_eq!(
            (Outcode::BOTTOM | Outcode::RIGHT).first_boundary(),
            Some(Boundary::Bottom)
        );
        assert_eq!(Outcode::RIGHT.first_boundary(), Some(Boundary::Right));
        assert_eq!(Outcode::LEFT.first_boundary(), Some(Boundary::Left));
        assert_eq!(Outcode::INSIDE.first_boundary(), None);
    }

    #[test]
    fn intersections_land_on_boundary_lines() {
        let w = w();
        let a = Point::new(0.0, 0.0);
        let b = Point::new(20.0, 40.0);
        let top = Boundary::Top.intersect(&w, a, b);
        assert_eq!(top, Point::new(5.0, 10.0));
        let right = Boundary::Right.intersect(&w, a, b);
        assert_eq!(right, Point::new(10.0, 20.0));
    }
}
