use crate::CanvasApp;
use crate::components::{ColorSwatch, WidthButton};
use crate::pen::{Color, StrokeWidth};

pub fn tools_panel(app: &mut CanvasApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("tools_panel")
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(10.0);

            ui.strong("Color:");
            ui.horizontal_wrapped(|ui| {
                let active = app.state().pen().color();
                for color in Color::ALL {
                    if ColorSwatch::new(color, color == active).show(ui).clicked() {
                        let _ = app.state_mut().select_color(color);
                    }
                }
            });

            ui.separator();

            ui.strong("Width:");
            ui.horizontal(|ui| {
                let active = app.state().pen().width();
                for width in StrokeWidth::ALL {
                    if WidthButton::new(width, width == active).show(ui).clicked() {
                        let _ = app.state_mut().select_width(width);
                    }
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                let can_undo = !app.state().history().is_empty();
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    let _ = app.state_mut().undo();
                }
                let clear = egui::Button::new(
                    egui::RichText::new("Clear").color(egui::Color32::WHITE),
                )
                .fill(egui::Color32::from_rgb(0xEF, 0x44, 0x44));
                if ui.add(clear).clicked() {
                    let _ = app.state_mut().clear();
                }

                ui.label(format!("Strokes: {}", app.state().history().len()));
                ui.checkbox(app.show_event_log_mut(), "Event log");
            });

            ui.add_space(10.0);
        });
}
