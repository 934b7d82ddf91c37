mod canvas_panel;
mod color_dialog;
mod toolbar;

pub use canvas_panel::canvas_panel;
pub use color_dialog::{ColorDialog, DialogOutcome};
pub use toolbar::toolbar;
