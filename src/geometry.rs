use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A canvas-local pixel position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        let dx = f64::from(other.x - self.x);
        let dy = f64::from(other.y - self.y);
        dx.hypot(dy)
    }

    /// Convert a screen position into canvas space, rounding to the nearest pixel
    pub fn from_screen(pos: Pos2, origin: Pos2) -> Self {
        let local = pos - origin;
        Self::new(local.x.round() as i32, local.y.round() as i32)
    }

    /// Convert back into screen space relative to the canvas origin
    pub fn to_screen(self, origin: Pos2) -> Pos2 {
        origin + Vec2::new(self.x as f32, self.y as f32)
    }
}

/// Axis-aligned rectangle stored as top-left corner plus non-negative extents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Zero-sized rectangle sitting on a point
    pub const fn at(point: Point) -> Self {
        Self::new(point.x, point.y, 0, 0)
    }

    /// Normalized bounding box of two corners, whichever way the drag went
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn to_screen(self, origin: Pos2) -> Rect {
        Rect::from_min_size(
            self.top_left().to_screen(origin),
            Vec2::new(self.width as f32, self.height as f32),
        )
    }
}

/// Circle described by the top-left corner of its bounding box and its diameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Circle {
    pub x: i32,
    pub y: i32,
    pub diameter: i32,
}

impl Circle {
    /// Circle centred on `center`
    pub fn centered(center: Point, radius: i32) -> Self {
        Self {
            x: center.x - radius,
            y: center.y - radius,
            diameter: radius * 2,
        }
    }

    /// Circle centred on the anchor that reaches through `edge`.
    ///
    /// The radius is truncated to whole pixels.
    pub fn from_anchor(anchor: Point, edge: Point) -> Self {
        Self::centered(anchor, anchor.distance(edge) as i32)
    }

    pub fn radius(&self) -> i32 {
        self.diameter / 2
    }

    pub fn center(&self) -> Point {
        let r = self.radius();
        Point::new(self.x + r, self.y + r)
    }
}
