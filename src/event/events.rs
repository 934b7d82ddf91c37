use egui::Color32;

use crate::geometry::Point;
use crate::tools::Tool;

/// Everything the user can do to the canvas.
///
/// Toolkit callbacks are translated into these and fed to
/// [`DrawingCanvas::dispatch`](crate::canvas::DrawingCanvas::dispatch).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    /// A different tool was picked in the selector
    ToolChanged(Tool),
    /// The color dialog closed; `None` when it was cancelled
    ColorChosen(Option<Color32>),
    /// "Dotted Line" was toggled
    DashToggled(bool),
    /// "Filled" was toggled
    FillToggled(bool),
    ClearRequested,
    UndoRequested,
    /// Primary button pressed inside the canvas
    PointerDown(Point),
    /// Pointer moved while the button is held
    PointerDrag(Point),
    /// Button released, ending the gesture
    PointerUp(Point),
    /// Pointer moved with no button held
    PointerHover(Point),
    /// Pointer left the canvas
    PointerLeft,
}

impl CanvasEvent {
    /// Returns true for pointer events
    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            CanvasEvent::PointerDown(_)
                | CanvasEvent::PointerDrag(_)
                | CanvasEvent::PointerUp(_)
                | CanvasEvent::PointerHover(_)
                | CanvasEvent::PointerLeft
        )
    }
}
