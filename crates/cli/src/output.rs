//! JSON document handed to the rendering layer.
//!
//! The renderer draws `input` dashed, the window outline, and `clipped` solid.
//! It performs no geometry of its own.

use rectclip::{ClippedPolygon, Point, Segment, Window};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Segment,
    Polygon,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct WindowDoc {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl From<&Window> for WindowDoc {
    fn from(w: &Window) -> Self {
        Self {
            x_min: w.x_min(),
            y_min: w.y_min(),
            x_max: w.x_max(),
            y_max: w.y_max(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClipReport {
    pub mode: Mode,
    pub window: WindowDoc,
    pub input: Vec<[f64; 2]>,
    /// `None` when nothing of a segment is visible; polygons always carry a
    /// (possibly empty) list.
    pub clipped: Option<Vec<[f64; 2]>>,
    pub visible: bool,
}

fn xy(p: &Point) -> [f64; 2] {
    [p.x, p.y]
}

impl ClipReport {
    pub fn segment(window: &Window, input: Segment, clipped: Option<Segment>) -> Self {
        Self {
            mode: Mode::Segment,
            window: window.into(),
            input: vec![xy(&input.p1), xy(&input.p2)],
            clipped: clipped.map(|s| vec![xy(&s.p1), xy(&s.p2)]),
            visible: clipped.is_some(),
        }
    }

    pub fn polygon(window: &Window, input: &[Point], clipped: &ClippedPolygon) -> Self {
        Self {
            mode: Mode::Polygon,
            window: window.into(),
            input: input.iter().map(xy).collect(),
            clipped: Some(clipped.points().iter().map(xy).collect()),
            visible: !clipped.is_empty(),
        }
    }
}
