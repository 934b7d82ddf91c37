use egui::{Context, Pos2, Rect, Response};

use crate::event::CanvasEvent;
use crate::geometry::Point;

/// Converts raw egui pointer input over the canvas into [`CanvasEvent`]s.
///
/// Only the primary button draws. A press is tracked from the frame it lands
/// on the canvas until it is released, even if the pointer wanders off the
/// canvas in between.
#[derive(Debug)]
pub struct InputHandler {
    canvas_rect: Rect,
    /// Last screen position reported to the canvas
    last_pointer_pos: Option<Pos2>,
    /// A press started on the canvas and has not been released yet
    tracking: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self {
            canvas_rect: Rect::NOTHING,
            last_pointer_pos: None,
            tracking: false,
        }
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas-local position of a screen position
    pub fn to_canvas(&self, pos: Pos2) -> Point {
        Point::from_screen(pos, self.canvas_rect.min)
    }

    /// Process this frame's pointer input for the canvas widget behind `response`
    pub fn process_input(&mut self, ctx: &Context, response: &Response) -> Vec<CanvasEvent> {
        self.canvas_rect = response.rect;
        // false when another window (e.g. the color dialog) covers the canvas
        let hovered = response.hovered();
        let mut events = Vec::new();

        ctx.input(|input| {
            let pointer = &input.pointer;
            let latest = pointer.latest_pos();

            if !self.tracking && hovered && pointer.primary_pressed() {
                if let Some(pos) = pointer.press_origin().or(latest) {
                    events.push(CanvasEvent::PointerDown(self.to_canvas(pos)));
                    self.last_pointer_pos = Some(pos);
                    self.tracking = true;
                }
            }

            if self.tracking {
                if let Some(pos) = latest {
                    if Some(pos) != self.last_pointer_pos {
                        events.push(CanvasEvent::PointerDrag(self.to_canvas(pos)));
                        self.last_pointer_pos = Some(pos);
                    }
                }
                if pointer.primary_released() {
                    if let Some(pos) = latest.or(self.last_pointer_pos) {
                        events.push(CanvasEvent::PointerUp(self.to_canvas(pos)));
                    }
                    self.tracking = false;
                }
                return;
            }

            match latest.filter(|_| hovered) {
                Some(pos) if Some(pos) != self.last_pointer_pos => {
                    events.push(CanvasEvent::PointerHover(self.to_canvas(pos)));
                    self.last_pointer_pos = Some(pos);
                }
                Some(_) => {}
                None => {
                    if self.last_pointer_pos.take().is_some() {
                        events.push(CanvasEvent::PointerLeft);
                    }
                }
            }
        });

        events
    }
}
