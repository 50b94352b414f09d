use std::fmt::Display;

use serde::Serialize;

use super::point::Point;

/// The four corners of an axis-aligned box.
///
/// A `Rectangle` can only be built through [`Rectangle::from_points`], so `top_left` is always the
/// minimum corner and `bottom_right` the maximum one, no matter in which direction the user
/// dragged.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rectangle {
    top_left: Point,
    top_right: Point,
    bottom_left: Point,
    bottom_right: Point,
}

impl Rectangle {
    /// Spans the canonical rectangle between two arbitrary points.
    ///
    /// Both points must be finite. Equal points give a rectangle of zero size whose corners all
    /// sit on that point.
    pub fn from_points(start: Point, end: Point) -> Self {
        let top_left = Point {
            x: f64::min(start.x, end.x),
            y: f64::min(start.y, end.y),
        };
        let bottom_right = Point {
            x: f64::max(start.x, end.x),
            y: f64::max(start.y, end.y),
        };

        Self {
            top_left,
            top_right: Point {
                x: bottom_right.x,
                y: top_left.y,
            },
            bottom_left: Point {
                x: top_left.x,
                y: bottom_right.y,
            },
            bottom_right,
        }
    }

    pub fn top_left(&self) -> Point {
        self.top_left
    }

    pub fn top_right(&self) -> Point {
        self.top_right
    }

    pub fn bottom_left(&self) -> Point {
        self.bottom_left
    }

    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    pub fn width(&self) -> f64 {
        self.top_right.x - self.top_left.x
    }

    pub fn height(&self) -> f64 {
        self.bottom_left.y - self.top_left.y
    }
}

impl Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "topLeft={} topRight={} bottomLeft={} bottomRight={}",
            self.top_left, self.top_right, self.bottom_left, self.bottom_right
        )
    }
}
