use crate::DrawingApp;

/// The drawing surface filling the rest of the window
pub fn canvas_panel(app: &mut DrawingApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::drag());

            let events = app.input_mut().process_input(ctx, &response);
            for event in events {
                app.dispatch(ctx, event);
            }

            app.renderer().paint(&painter, app.canvas(), response.rect);
        });
}
