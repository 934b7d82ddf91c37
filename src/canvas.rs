use log::{debug, info};

use crate::config::CanvasConfig;
use crate::controller::InteractionController;
use crate::event::CanvasEvent;
use crate::store::ShapeStore;
use crate::style::Style;
use crate::tools::Tool;

/// All drawing state behind the window: the committed shapes, the gesture in
/// progress, and the current tool and style.
#[derive(Debug, Clone)]
pub struct DrawingCanvas {
    store: ShapeStore,
    controller: InteractionController,
    style: Style,
    tool: Tool,
    config: CanvasConfig,
}

impl Default for DrawingCanvas {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl DrawingCanvas {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            store: ShapeStore::new(),
            controller: InteractionController::new(config.retain_circle_anchor),
            style: Style::default(),
            tool: Tool::default(),
            config,
        }
    }

    /// Apply one event. Returns true if the canvas needs repainting.
    pub fn dispatch(&mut self, event: CanvasEvent) -> bool {
        if !event.is_pointer() {
            debug!("Dispatching {:?}", event);
        }

        match event {
            CanvasEvent::ToolChanged(tool) => {
                info!("Tool selected: {}", tool);
                self.tool = tool;
                self.controller.tool_changed();
                true
            }
            CanvasEvent::ColorChosen(color) => {
                let color = color.unwrap_or(Style::DEFAULT_COLOR);
                info!("Color set to {:?}", color);
                self.style = self.style.with_color(color);
                true
            }
            CanvasEvent::DashToggled(dashed) => {
                self.style = self.style.with_dashed(dashed);
                true
            }
            CanvasEvent::FillToggled(filled) => {
                self.style = self.style.with_filled(filled);
                true
            }
            CanvasEvent::ClearRequested => {
                info!("Clearing {} shapes", self.store.len());
                self.store.clear_all();
                true
            }
            CanvasEvent::UndoRequested => {
                match self.store.undo_last(self.config.undo_policy) {
                    Some(shape) => info!("Undid {}", shape.kind()),
                    None => debug!("Nothing to undo"),
                }
                true
            }
            CanvasEvent::PointerDown(point) => {
                self.controller.pointer_down(self.tool, point, &mut self.store);
                true
            }
            CanvasEvent::PointerDrag(point) => self.controller.pointer_drag(point, &mut self.store),
            CanvasEvent::PointerUp(point) => self.controller.pointer_up(point, &mut self.store),
            CanvasEvent::PointerHover(point) => self.controller.hover(point),
            CanvasEvent::PointerLeft => self.controller.pointer_left(),
        }
    }

    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }
}
