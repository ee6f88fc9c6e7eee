use crate::CanvasApp;

pub fn central_panel(app: &mut CanvasApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available = ui.available_size();
        let height = available.y * app.config().canvas_height_fraction;
        let (response, painter) =
            ui.allocate_painter(egui::vec2(available.x, height), egui::Sense::drag());

        // Handle input before painting so the live stroke is current
        app.handle_input(ctx, response.rect);

        app.render_canvas(&painter, response.rect);

        if app.state().recorder().is_recording() {
            ctx.request_repaint();
        }
    });
}
