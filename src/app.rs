use crate::canvas::DrawingCanvas;
use crate::config::CanvasConfig;
use crate::event::CanvasEvent;
use crate::input::InputHandler;
use crate::panels::{self, ColorDialog};
use crate::renderer::Renderer;

/// The drawing window: toolbar on top, canvas below.
///
/// Nothing is persisted; every shape is gone once the window closes.
pub struct DrawingApp {
    canvas: DrawingCanvas,
    renderer: Renderer,
    input: InputHandler,
    // Open while the user is picking a color
    color_dialog: Option<ColorDialog>,
}

impl Default for DrawingApp {
    fn default() -> Self {
        Self::with_config(CanvasConfig::default())
    }
}

impl DrawingApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: CanvasConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_config(config)
    }

    pub fn with_config(config: CanvasConfig) -> Self {
        Self {
            renderer: Renderer::new(&config),
            canvas: DrawingCanvas::new(config),
            input: InputHandler::new(),
            color_dialog: None,
        }
    }

    pub fn canvas(&self) -> &DrawingCanvas {
        &self.canvas
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub(crate) fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    /// Forward an event to the canvas and schedule a repaint if it changed anything
    pub fn dispatch(&mut self, ctx: &egui::Context, event: CanvasEvent) {
        if self.canvas.dispatch(event) {
            ctx.request_repaint();
        }
    }

    pub fn open_color_dialog(&mut self) {
        if self.color_dialog.is_none() {
            log::debug!("Opening color dialog");
            self.color_dialog = Some(ColorDialog::new(self.canvas.style().color()));
        }
    }

    fn show_color_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = &mut self.color_dialog else {
            return;
        };
        if let Some(outcome) = dialog.show(ctx) {
            self.color_dialog = None;
            self.dispatch(ctx, CanvasEvent::ColorChosen(outcome.color()));
        }
    }
}

impl eframe::App for DrawingApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::toolbar(self, ctx);
        panels::canvas_panel(self, ctx);
        self.show_color_dialog(ctx);
    }
}
