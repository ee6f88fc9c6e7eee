use crate::CanvasApp;

pub fn header_panel(app: &CanvasApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("header_panel")
        .frame(
            egui::Frame::none()
                .fill(egui::Color32::from_rgb(0x63, 0x66, 0xF1))
                .inner_margin(egui::Margin::symmetric(0.0, 15.0)),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(&app.config().title)
                        .color(egui::Color32::WHITE)
                        .size(24.0)
                        .strong(),
                );
            });
        });
}
