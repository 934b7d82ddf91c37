use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Free-hand stroke: points in the order they were recorded
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Start a stroke at `start`.
    ///
    /// The start point is recorded twice so that even a click without any
    /// drag yields a drawable segment.
    pub fn begin(start: Point) -> Self {
        Self::new(vec![start, start])
    }

    /// Add a point to the end of the stroke
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Screen-space points for painting
    pub fn to_screen(&self, origin: Pos2) -> Vec<Pos2> {
        self.points.iter().map(|p| p.to_screen(origin)).collect()
    }
}
