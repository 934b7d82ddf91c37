use crate::DrawingApp;
use crate::event::CanvasEvent;
use crate::tools::Tool;

pub fn toolbar(app: &mut DrawingApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            let style = app.canvas().style();
            let current = app.canvas().tool();

            ui.label("Shape");
            let mut selected = current;
            egui::ComboBox::from_id_salt("shape_selector")
                .selected_text(selected.name())
                .show_ui(ui, |ui| {
                    for tool in Tool::ALL {
                        ui.selectable_value(&mut selected, tool, tool.name());
                    }
                });
            if selected != current {
                app.dispatch(ctx, CanvasEvent::ToolChanged(selected));
            }

            if ui.button("Color").clicked() {
                app.open_color_dialog();
            }

            let mut dashed = style.is_dashed();
            if ui.checkbox(&mut dashed, "Dotted Line").changed() {
                app.dispatch(ctx, CanvasEvent::DashToggled(dashed));
            }

            let mut filled = style.is_filled();
            if ui.checkbox(&mut filled, "Filled").changed() {
                app.dispatch(ctx, CanvasEvent::FillToggled(filled));
            }

            if ui.button("Clear All").clicked() {
                app.dispatch(ctx, CanvasEvent::ClearRequested);
            }

            if ui.button("Undo").clicked() {
                app.dispatch(ctx, CanvasEvent::UndoRequested);
            }
        });
    });
}
