//! Cohen-Sutherland segment clipping against a `Window`.
//!
//! Model
//! - Each iteration is a pure step over an immutable snapshot of both endpoints
//!   and their outcodes; the loop rebinds the snapshot instead of mutating
//!   coordinates in place.
//! - The endpoint to move is the first one if it is outside, else the second.
//! - Its boundary is chosen in the fixed order TOP, BOTTOM, RIGHT, LEFT.
//!
//! Termination: every step either rejects, accepts, or moves one outside
//! endpoint onto a boundary line between the two endpoints, so only a handful
//! of steps run before both codes are zero.

use super::outcode::Outcode;
use super::types::{Point, Segment, Window};

/// Snapshot of the refinement state.
#[derive(Clone, Copy, Debug)]
struct Ends {
    p1: Point,
    c1: Outcode,
    p2: Point,
    c2: Outcode,
}

enum Step {
    Accept(Segment),
    Reject,
    Continue(Ends),
}

impl Ends {
    fn new(window: &Window, p1: Point, p2: Point) -> Self {
        Self {
            p1,
            c1: window.outcode(p1),
            p2,
            c2: window.outcode(p2),
        }
    }

    fn step(self, window: &Window) -> Step {
        if !(self.c1 & self.c2).is_inside() {
            return Step::Reject;
        }
        let first_outside = !self.c1.is_inside();
        let code_out = if first_outside { self.c1 } else { self.c2 };
        // No boundary left means both codes are zero.
        let Some(boundary) = code_out.first_boundary() else {
            return Step::Accept(Segment::new(self.p1, self.p2));
        };
        let p = boundary.intersect(window, self.p1, self.p2);
        let next = if first_outside {
            Ends {
                p1: p,
                c1: window.outcode(p),
                ..self
            }
        } else {
            Ends {
                p2: p,
                c2: window.outcode(p),
                ..self
            }
        };
        Step::Continue(next)
    }
}

/// Clip segment `p1 → p2` to the closed window.
///
/// Returns the visible sub-segment with endpoints in input order, or `None`
/// if nothing of the segment lies in the window. Degenerate segments
/// (`p1 == p2`) come back unchanged when inside and `None` otherwise.
pub fn clip_segment(window: &Window, p1: Point, p2: Point) -> Option<Segment> {
    let mut ends = Ends::new(window, p1, p2);
    loop {
        ends = match ends.step(window) {
            Step::Accept(seg) => return Some(seg),
            Step::Reject => return None,
            Step::Continue(next) => next,
        };
    }
}

impl Segment {
    /// See [`clip_segment`].
    #[inline]
    pub fn clip(&self, window: &Window) -> Option<Segment> {
        clip_segment(window, self.p1, self.p2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w10() -> Window {
        Window::new(-10.0, -10.0, 10.0, 10.0).unwrap()
    }

    #[test]
    fn inside_snapshot_accepts_unchanged() {
        let w = w10();
        let ends = Ends::new(&w, Point::new(-5.0, 1.0), Point::new(10.0, -10.0));
        match ends.step(&w) {
            Step::Accept(seg) => {
                assert_eq!(seg, Segment::new(Point::new(-5.0, 1.0), Point::new(10.0, -10.0)))
            }
            _ => panic!("expected accept"),
        }
    }

    #[test]
    fn one_step_moves_only_the_first_outside_endpoint() {
        let w = w10();
        let ends = Ends::new(&w, Point::new(-15.0, 0.0), Point::new(15.0, 0.0));
        match ends.step(&w) {
            Step::Continue(next) => {
                assert_eq!(next.p1, Point::new(-10.0, 0.0));
                assert!(next.c1.is_inside());
                assert_eq!(next.p2, Point::new(15.0, 0.0));
                assert_eq!(next.c2, Outcode::RIGHT);
            }
            _ => panic!("expected a clipping step"),
        }
    }

    #[test]
    fn second_endpoint_moves_when_first_is_inside() {
        let w = w10();
        let ends = Ends::new(&w, Point::new(0.0, 0.0), Point::new(0.0, 20.0));
        match ends.step(&w) {
            Step::Continue(next) => {
                assert_eq!(next.p1, Point::new(0.0, 0.0));
                assert_eq!(next.p2, Point::new(0.0, 10.0));
            }
            _ => panic!("expected a clipping step"),
        }
    }

    #[test]
    fn shared_outside_bit_rejects() {
        let w = w10();
        let ends = Ends::new(&w, Point::new(11.0, -20.0), Point::new(30.0, 40.0));
        assert!(matches!(ends.step(&w), Step::Reject));
    }
}
