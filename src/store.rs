use serde::{Deserialize, Serialize};

use crate::geometry::{Circle, Rectangle};
use crate::stroke::Stroke;

/// A committed shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Stroke(Stroke),
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Rectangle(_) => "rectangle",
            Shape::Circle(_) => "circle",
            Shape::Stroke(_) => "stroke",
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Stroke> for Shape {
    fn from(stroke: Stroke) -> Self {
        Shape::Stroke(stroke)
    }
}

/// Stable handle to a shape in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(u64);

/// Which shape `undo_last` takes away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UndoPolicy {
    /// Remove the newest rectangle if any, else the newest circle, else the
    /// newest stroke, regardless of when they were drawn
    #[default]
    TypePriority,
    /// Remove the shape that was added most recently
    Chronological,
}

/// Every committed shape, oldest first
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    entries: Vec<(ShapeId, Shape)>,
    next_id: u64,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, shape: impl Into<Shape>) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, shape.into()));
        id
    }

    /// Remove one shape according to `policy`. Does nothing on an empty store.
    pub fn undo_last(&mut self, policy: UndoPolicy) -> Option<Shape> {
        let index = match policy {
            UndoPolicy::Chronological => self.entries.len().checked_sub(1)?,
            UndoPolicy::TypePriority => self
                .last_index_of(|s| matches!(s, Shape::Rectangle(_)))
                .or_else(|| self.last_index_of(|s| matches!(s, Shape::Circle(_))))
                .or_else(|| self.last_index_of(|s| matches!(s, Shape::Stroke(_))))?,
        };
        Some(self.entries.remove(index).1)
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    fn last_index_of(&self, pred: impl Fn(&Shape) -> bool) -> Option<usize> {
        self.entries.iter().rposition(|(_, shape)| pred(shape))
    }

    /// Mutable access to a stroke still in the store
    pub fn stroke_mut(&mut self, id: ShapeId) -> Option<&mut Stroke> {
        self.entries
            .iter_mut()
            .rev()
            .find(|(entry_id, _)| *entry_id == id)
            .and_then(|(_, shape)| match shape {
                Shape::Stroke(stroke) => Some(stroke),
                _ => None,
            })
    }

    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.entries.iter().map(|(_, shape)| shape)
    }

    pub fn rectangles(&self) -> impl Iterator<Item = &Rectangle> {
        self.shapes().filter_map(|shape| match shape {
            Shape::Rectangle(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &Circle> {
        self.shapes().filter_map(|shape| match shape {
            Shape::Circle(circle) => Some(circle),
            _ => None,
        })
    }

    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.shapes().filter_map(|shape| match shape {
            Shape::Stroke(stroke) => Some(stroke),
            _ => None,
        })
    }

    /// Number of (rectangles, circles, strokes)
    pub fn counts(&self) -> (usize, usize, usize) {
        self.shapes().fold((0, 0, 0), |(r, c, s), shape| match shape {
            Shape::Rectangle(_) => (r + 1, c, s),
            Shape::Circle(_) => (r, c + 1, s),
            Shape::Stroke(_) => (r, c, s + 1),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
