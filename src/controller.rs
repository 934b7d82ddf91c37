//! Turns pointer gestures into committed shapes.
//!
//! Each gesture is a small state machine keyed by the tool that was active
//! when the button went down:
//!
//! ```text
//!            PointerDown                       PointerUp
//!   ┌──────┐ ─────────────► DraggingRect ────────────────────► commit rect ──┐
//!   │      │ ─────────────► SizingCircle ────────────────────► commit circle ┤
//!   │ Idle │ ─────────────► Brushing  (stroke already in store) ─────────────┤
//!   │      │ ◄───────────────────────────────────────────────────────────────┘
//!   └──────┘        (or RetainedCircle after a circle, when configured)
//! ```
//!
//! `PointerDrag` keeps the gesture where it is and updates the live shape.

use log::{debug, trace};

use crate::geometry::{Circle, Point, Rectangle};
use crate::store::{ShapeId, ShapeStore};
use crate::stroke::Stroke;
use crate::tools::Tool;

/// State of the gesture in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    /// No button held
    #[default]
    Idle,
    /// Rectangle tool: live rectangle spanning the anchor and the pointer
    DraggingRect { anchor: Point, live: Rectangle },
    /// Circle tool: radius follows the pointer, nothing stored yet
    SizingCircle { anchor: Point },
    /// Free brush: the stroke was appended on press and grows with every drag
    Brushing { stroke: ShapeId },
    /// A circle was committed but its anchor is still kept for previewing
    RetainedCircle { anchor: Point },
}

impl Gesture {
    /// Returns true while a button is held
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            Gesture::DraggingRect { .. } | Gesture::SizingCircle { .. } | Gesture::Brushing { .. }
        )
    }

    /// Circle anchor the preview should be drawn from, if any
    pub fn circle_anchor(&self) -> Option<Point> {
        match self {
            Gesture::SizingCircle { anchor } | Gesture::RetainedCircle { anchor } => Some(*anchor),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Gesture::Idle => "Idle",
            Gesture::DraggingRect { .. } => "DraggingRect",
            Gesture::SizingCircle { .. } => "SizingCircle",
            Gesture::Brushing { .. } => "Brushing",
            Gesture::RetainedCircle { .. } => "RetainedCircle",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    gesture: Gesture,
    /// Last known pointer position over the canvas
    pointer: Option<Point>,
    retain_circle_anchor: bool,
}

impl InteractionController {
    pub fn new(retain_circle_anchor: bool) -> Self {
        Self {
            retain_circle_anchor,
            ..Self::default()
        }
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Start a gesture with `tool` at `point`
    pub fn pointer_down(&mut self, tool: Tool, point: Point, store: &mut ShapeStore) {
        self.pointer = Some(point);
        self.gesture = match tool {
            Tool::Rectangle => Gesture::DraggingRect {
                anchor: point,
                live: Rectangle::at(point),
            },
            Tool::Circle => Gesture::SizingCircle { anchor: point },
            Tool::FreeBrush => Gesture::Brushing {
                stroke: store.append(Stroke::begin(point)),
            },
        };
        debug!("Gesture started: {} at {:?}", self.gesture.name(), point);
    }

    /// Update the live shape. Returns true if anything changed.
    pub fn pointer_drag(&mut self, point: Point, store: &mut ShapeStore) -> bool {
        self.pointer = Some(point);
        match &mut self.gesture {
            Gesture::DraggingRect { anchor, live } => {
                *live = Rectangle::from_corners(*anchor, point);
                trace!("Live rectangle: {:?}", live);
                true
            }
            // the preview radius is derived from the pointer at paint time
            Gesture::SizingCircle { .. } => true,
            Gesture::Brushing { stroke } => match store.stroke_mut(*stroke) {
                Some(stroke) => {
                    stroke.add_point(point);
                    trace!("Stroke grew to {} points", stroke.len());
                    true
                }
                None => false,
            },
            Gesture::Idle | Gesture::RetainedCircle { .. } => false,
        }
    }

    /// Finish the gesture, committing its shape. Returns true if anything changed.
    pub fn pointer_up(&mut self, point: Point, store: &mut ShapeStore) -> bool {
        self.pointer = Some(point);
        match std::mem::take(&mut self.gesture) {
            Gesture::DraggingRect { anchor, .. } => {
                let rect = Rectangle::from_corners(anchor, point);
                store.append(rect);
                debug!("Committed rectangle {:?}", rect);
                true
            }
            Gesture::SizingCircle { anchor } => {
                let circle = Circle::from_anchor(anchor, point);
                store.append(circle);
                debug!("Committed circle {:?}", circle);
                if self.retain_circle_anchor {
                    self.gesture = Gesture::RetainedCircle { anchor };
                }
                true
            }
            Gesture::Brushing { .. } => {
                debug!("Stroke finished");
                true
            }
            idle @ (Gesture::Idle | Gesture::RetainedCircle { .. }) => {
                self.gesture = idle;
                false
            }
        }
    }

    /// Track the pointer while no button is held. Returns true if a preview moved.
    pub fn hover(&mut self, point: Point) -> bool {
        let moved = self.pointer != Some(point);
        self.pointer = Some(point);
        moved && self.gesture.circle_anchor().is_some()
    }

    pub fn pointer_left(&mut self) -> bool {
        self.pointer.take().is_some() && self.gesture.circle_anchor().is_some()
    }

    /// Drop any retained circle anchor after a tool switch.
    ///
    /// Gestures already under way keep the tool they started with.
    pub fn tool_changed(&mut self) -> bool {
        if matches!(self.gesture, Gesture::RetainedCircle { .. }) {
            self.gesture = Gesture::Idle;
            return true;
        }
        false
    }

    /// Rectangle being dragged out, if any
    pub fn live_rectangle(&self) -> Option<Rectangle> {
        match self.gesture {
            Gesture::DraggingRect { live, .. } => Some(live),
            _ => None,
        }
    }

    /// Circle from the anchor to the current pointer, if one should be previewed
    pub fn preview_circle(&self) -> Option<Circle> {
        let anchor = self.gesture.circle_anchor()?;
        let pointer = self.pointer?;
        Some(Circle::from_anchor(anchor, pointer))
    }
}
