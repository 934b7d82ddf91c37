use std::f32::consts::TAU;

use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke as EguiStroke};

use crate::canvas::DrawingCanvas;
use crate::config::{CanvasConfig, DashPattern};
use crate::geometry::{Circle, Rectangle};
use crate::stroke::Stroke;
use crate::style::Style;

/// Fewest segments used to trace a dashed circle
const MIN_CIRCLE_SEGMENTS: usize = 16;
const MAX_CIRCLE_SEGMENTS: usize = 256;

/// Builds the frame for a [`DrawingCanvas`].
///
/// Layers are emitted back to front: committed rectangles, committed circles,
/// the rectangle being dragged, strokes, then the circle preview.
#[derive(Debug, Clone)]
pub struct Renderer {
    dash: DashPattern,
    line_width: f32,
    background: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(&CanvasConfig::default())
    }
}

impl Renderer {
    pub fn new(config: &CanvasConfig) -> Self {
        Self {
            dash: config.dash,
            line_width: config.line_width,
            background: Color32::WHITE,
        }
    }

    /// Paint the canvas into `rect`
    pub fn paint(&self, painter: &Painter, canvas: &DrawingCanvas, rect: Rect) {
        painter.extend(self.frame(canvas, rect));
    }

    /// Every shape of the current frame, in paint order
    pub fn frame(&self, canvas: &DrawingCanvas, rect: Rect) -> Vec<Shape> {
        let style = canvas.style();
        let origin = rect.min;
        let store = canvas.store();
        let controller = canvas.controller();

        let mut shapes = vec![Shape::rect_filled(rect, 0.0, self.background)];

        for rectangle in store.rectangles() {
            self.push_rectangle(&mut shapes, *rectangle, style, origin);
        }
        for circle in store.circles() {
            self.push_circle(&mut shapes, *circle, style, origin);
        }
        if let Some(live) = controller.live_rectangle() {
            self.push_rectangle(&mut shapes, live, style, origin);
        }
        for stroke in store.strokes() {
            self.push_stroke(&mut shapes, stroke, style, origin);
        }
        if let Some(preview) = controller.preview_circle() {
            self.push_circle(&mut shapes, preview, style, origin);
        }

        shapes
    }

    fn pen(&self, style: Style) -> EguiStroke {
        EguiStroke::new(self.line_width, style.color())
    }

    fn push_rectangle(&self, shapes: &mut Vec<Shape>, rectangle: Rectangle, style: Style, origin: Pos2) {
        let rect = rectangle.to_screen(origin);
        if style.is_filled() {
            shapes.push(Shape::rect_filled(rect, 0.0, style.color()));
        } else if style.is_dashed() {
            let outline = [
                rect.left_top(),
                rect.right_top(),
                rect.right_bottom(),
                rect.left_bottom(),
                rect.left_top(),
            ];
            self.push_dashed(shapes, &outline, style);
        } else {
            shapes.push(Shape::rect_stroke(rect, 0.0, self.pen(style)));
        }
    }

    fn push_circle(&self, shapes: &mut Vec<Shape>, circle: Circle, style: Style, origin: Pos2) {
        let center = circle.center().to_screen(origin);
        let radius = circle.radius() as f32;
        if style.is_filled() {
            shapes.push(Shape::circle_filled(center, radius, style.color()));
        } else if style.is_dashed() {
            self.push_dashed(shapes, &circle_outline(center, radius), style);
        } else {
            shapes.push(Shape::circle_stroke(center, radius, self.pen(style)));
        }
    }

    // strokes ignore the fill flag
    fn push_stroke(&self, shapes: &mut Vec<Shape>, stroke: &Stroke, style: Style, origin: Pos2) {
        let points = stroke.to_screen(origin);
        if points.len() < 2 {
            return;
        }
        if style.is_dashed() {
            self.push_dashed(shapes, &points, style);
        } else {
            shapes.push(Shape::line(points, self.pen(style)));
        }
    }

    fn push_dashed(&self, shapes: &mut Vec<Shape>, path: &[Pos2], style: Style) {
        shapes.extend(Shape::dashed_line(
            path,
            self.pen(style),
            self.dash.on,
            self.dash.off,
        ));
    }
}

/// Closed polygon approximating a circle outline
fn circle_outline(center: Pos2, radius: f32) -> Vec<Pos2> {
    let segments = ((radius * TAU / 4.0).ceil() as usize).clamp(MIN_CIRCLE_SEGMENTS, MAX_CIRCLE_SEGMENTS);
    (0..=segments)
        .map(|i| {
            let angle = TAU * i as f32 / segments as f32;
            center + radius * egui::vec2(angle.cos(), angle.sin())
        })
        .collect()
}
