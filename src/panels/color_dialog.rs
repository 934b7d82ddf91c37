use egui::Color32;
use egui::color_picker::{self, Alpha};

/// How the color dialog was closed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialogOutcome {
    Chosen(Color32),
    Cancelled,
}

impl DialogOutcome {
    /// The picked color, `None` when cancelled
    pub fn color(self) -> Option<Color32> {
        match self {
            DialogOutcome::Chosen(color) => Some(color),
            DialogOutcome::Cancelled => None,
        }
    }
}

/// Modal-style "Choose Color" window, seeded with the current color
#[derive(Debug, Clone)]
pub struct ColorDialog {
    color: Color32,
}

impl ColorDialog {
    pub fn new(initial: Color32) -> Self {
        Self { color: initial }
    }

    /// Show the dialog for this frame. Returns the outcome once it closes.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<DialogOutcome> {
        let mut open = true;
        let mut outcome = None;

        egui::Window::new("Choose Color")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .open(&mut open)
            .show(ctx, |ui| {
                color_picker::color_picker_color32(ui, &mut self.color, Alpha::Opaque);
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        outcome = Some(DialogOutcome::Chosen(self.color));
                    }
                    if ui.button("Cancel").clicked() {
                        outcome = Some(DialogOutcome::Cancelled);
                    }
                });
            });

        // closing through the title bar counts as cancelling
        if !open && outcome.is_none() {
            outcome = Some(DialogOutcome::Cancelled);
        }
        outcome
    }
}
