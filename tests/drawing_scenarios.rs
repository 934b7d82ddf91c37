use drawing_app::{
    CanvasConfig, CanvasEvent, Circle, DrawingCanvas, Gesture, Point, Rectangle, Shape, Tool,
    UndoPolicy,
};

fn drag(canvas: &mut DrawingCanvas, path: &[(i32, i32)]) {
    let (first, rest) = path.split_first().expect("empty path");
    canvas.dispatch(CanvasEvent::PointerDown(Point::new(first.0, first.1)));
    for &(x, y) in rest {
        canvas.dispatch(CanvasEvent::PointerDrag(Point::new(x, y)));
    }
    let &(x, y) = path.last().expect("empty path");
    canvas.dispatch(CanvasEvent::PointerUp(Point::new(x, y)));
}

fn with_tool(tool: Tool) -> DrawingCanvas {
    let mut canvas = DrawingCanvas::default();
    canvas.dispatch(CanvasEvent::ToolChanged(tool));
    canvas
}

fn chronological_canvas() -> DrawingCanvas {
    DrawingCanvas::new(CanvasConfig {
        undo_policy: UndoPolicy::Chronological,
        ..Default::default()
    })
}

#[test]
fn test_rectangle_scenario() {
    let mut canvas = DrawingCanvas::default();
    assert_eq!(canvas.tool(), Tool::Rectangle);

    drag(&mut canvas, &[(10, 10), (30, 20), (50, 30)]);

    let rects: Vec<_> = canvas.store().rectangles().copied().collect();
    assert_eq!(rects, vec![Rectangle::new(10, 10, 40, 20)]);
    assert_eq!(canvas.controller().live_rectangle(), None);
}

#[test]
fn test_rectangle_every_quadrant() {
    let anchor = (100, 100);
    for release in [(140, 130), (60, 130), (140, 70), (60, 70)] {
        let mut canvas = DrawingCanvas::default();
        drag(&mut canvas, &[anchor, release]);

        let rect = *canvas.store().rectangles().next().expect("rectangle");
        assert!(rect.width >= 0 && rect.height >= 0);
        assert_eq!(rect.x, anchor.0.min(release.0));
        assert_eq!(rect.y, anchor.1.min(release.1));
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 30);
    }
}

#[test]
fn test_circle_scenario() {
    let mut canvas = with_tool(Tool::Circle);
    drag(&mut canvas, &[(100, 100), (105, 100), (110, 100)]);

    let circles: Vec<_> = canvas.store().circles().copied().collect();
    assert_eq!(circles, vec![Circle { x: 90, y: 90, diameter: 20 }]);
    assert_eq!(circles[0].radius(), 10);
}

#[test]
fn test_circle_bounding_box_matches_distance() {
    let mut canvas = with_tool(Tool::Circle);
    drag(&mut canvas, &[(50, 50), (56, 58)]);

    // distance is exactly 10
    let circle = *canvas.store().circles().next().expect("circle");
    assert_eq!(circle, Circle { x: 40, y: 40, diameter: 20 });
}

#[test]
fn test_free_brush_scenario() {
    let mut canvas = with_tool(Tool::FreeBrush);
    canvas.dispatch(CanvasEvent::PointerDown(Point::new(0, 0)));
    canvas.dispatch(CanvasEvent::PointerDrag(Point::new(5, 5)));
    canvas.dispatch(CanvasEvent::PointerDrag(Point::new(10, 10)));
    canvas.dispatch(CanvasEvent::PointerUp(Point::new(10, 10)));

    let stroke = canvas.store().strokes().next().expect("stroke");
    assert_eq!(
        stroke.points(),
        &[
            Point::new(0, 0),
            Point::new(0, 0),
            Point::new(5, 5),
            Point::new(10, 10)
        ]
    );
}

#[test]
fn test_circle_preview_cleared_after_release() {
    let mut canvas = with_tool(Tool::Circle);
    canvas.dispatch(CanvasEvent::PointerDown(Point::new(20, 20)));
    canvas.dispatch(CanvasEvent::PointerDrag(Point::new(20, 30)));
    assert!(canvas.controller().preview_circle().is_some());

    canvas.dispatch(CanvasEvent::PointerUp(Point::new(20, 30)));
    canvas.dispatch(CanvasEvent::PointerHover(Point::new(40, 40)));
    assert_eq!(canvas.controller().gesture(), &Gesture::Idle);
    assert_eq!(canvas.controller().preview_circle(), None);
}

#[test]
fn test_retained_circle_anchor_when_configured() {
    let mut canvas = DrawingCanvas::new(CanvasConfig {
        retain_circle_anchor: true,
        ..Default::default()
    });
    canvas.dispatch(CanvasEvent::ToolChanged(Tool::Circle));
    drag(&mut canvas, &[(20, 20), (20, 30)]);

    assert!(canvas.dispatch(CanvasEvent::PointerHover(Point::new(20, 45))));
    assert_eq!(
        canvas.controller().preview_circle(),
        Some(Circle { x: -5, y: -5, diameter: 50 })
    );

    canvas.dispatch(CanvasEvent::ToolChanged(Tool::Rectangle));
    assert_eq!(canvas.controller().preview_circle(), None);
}

#[test]
fn test_undo_on_empty_canvas_is_noop() {
    for mut canvas in [DrawingCanvas::default(), chronological_canvas()] {
        canvas.dispatch(CanvasEvent::UndoRequested);
        assert_eq!(canvas.store().counts(), (0, 0, 0));
    }
}

#[test]
fn test_undo_removes_rectangle_before_newer_circle() {
    let mut canvas = DrawingCanvas::default();
    drag(&mut canvas, &[(0, 0), (10, 10)]);
    canvas.dispatch(CanvasEvent::ToolChanged(Tool::Circle));
    drag(&mut canvas, &[(50, 50), (60, 50)]);
    assert_eq!(canvas.store().counts(), (1, 1, 0));

    canvas.dispatch(CanvasEvent::UndoRequested);
    assert_eq!(canvas.store().counts(), (0, 1, 0));
}

#[test]
fn test_type_priority_undo_with_mixed_shapes() {
    let mut canvas = DrawingCanvas::default();
    assert_eq!(canvas.config().undo_policy, UndoPolicy::TypePriority);
    drag(&mut canvas, &[(0, 0), (10, 10)]);
    canvas.dispatch(CanvasEvent::ToolChanged(Tool::Circle));
    drag(&mut canvas, &[(50, 50), (60, 50)]);
    canvas.dispatch(CanvasEvent::ToolChanged(Tool::FreeBrush));
    drag(&mut canvas, &[(5, 5), (6, 6)]);
    canvas.dispatch(CanvasEvent::ToolChanged(Tool::Rectangle));
    drag(&mut canvas, &[(20, 20), (25, 25)]);
    assert_eq!(canvas.store().counts(), (2, 1, 1));

    canvas.dispatch(CanvasEvent::UndoRequested);
    assert_eq!(canvas.store().counts(), (1, 1, 1));
    canvas.dispatch(CanvasEvent::UndoRequested);
    assert_eq!(canvas.store().counts(), (0, 1, 1));
    // the stroke is newer than the circle, but circles go first
    canvas.dispatch(CanvasEvent::UndoRequested);
    assert_eq!(canvas.store().counts(), (0, 0, 1));
    canvas.dispatch(CanvasEvent::UndoRequested);
    assert_eq!(canvas.store().counts(), (0, 0, 0));
}

#[test]
fn test_chronological_undo_with_mixed_shapes() {
    let mut canvas = chronological_canvas();
    drag(&mut canvas, &[(0, 0), (10, 10)]);
    canvas.dispatch(CanvasEvent::ToolChanged(Tool::FreeBrush));
    drag(&mut canvas, &[(5, 5), (6, 6)]);
    canvas.dispatch(CanvasEvent::ToolChanged(Tool::Circle));
    drag(&mut canvas, &[(50, 50), (60, 50)]);

    canvas.dispatch(CanvasEvent::UndoRequested);
    assert_eq!(canvas.store().counts(), (1, 0, 1));
    canvas.dispatch(CanvasEvent::UndoRequested);
    assert_eq!(canvas.store().counts(), (1, 0, 0));
    assert!(matches!(canvas.store().shapes().next(), Some(Shape::Rectangle(_))));
}

#[test]
fn test_clear_all_empties_everything() {
    let mut canvas = DrawingCanvas::default();
    drag(&mut canvas, &[(0, 0), (10, 10)]);
    canvas.dispatch(CanvasEvent::ToolChanged(Tool::Circle));
    drag(&mut canvas, &[(50, 50), (60, 50)]);
    canvas.dispatch(CanvasEvent::ToolChanged(Tool::FreeBrush));
    drag(&mut canvas, &[(5, 5), (6, 6), (7, 7)]);

    canvas.dispatch(CanvasEvent::ClearRequested);
    assert_eq!(canvas.store().counts(), (0, 0, 0));

    // clearing an empty canvas is fine too
    canvas.dispatch(CanvasEvent::ClearRequested);
    assert!(canvas.store().is_empty());
}

#[test]
fn test_cancelled_color_resets_to_black() {
    let mut canvas = DrawingCanvas::default();
    canvas.dispatch(CanvasEvent::ColorChosen(Some(egui::Color32::RED)));
    assert_eq!(canvas.style().color(), egui::Color32::RED);

    canvas.dispatch(CanvasEvent::ColorChosen(None));
    assert_eq!(canvas.style().color(), egui::Color32::BLACK);
}

#[test]
fn test_tool_is_read_at_gesture_start() {
    let mut canvas = DrawingCanvas::default();
    canvas.dispatch(CanvasEvent::PointerDown(Point::new(0, 0)));
    canvas.dispatch(CanvasEvent::ToolChanged(Tool::Circle));
    canvas.dispatch(CanvasEvent::PointerDrag(Point::new(8, 6)));
    canvas.dispatch(CanvasEvent::PointerUp(Point::new(8, 6)));

    assert_eq!(canvas.store().counts(), (1, 0, 0));
}
