use eframe::egui;
use crate::pen::Color;

/// Round palette button filled with its color
pub struct ColorSwatch {
    pub color: Color,
    pub selected: bool,
}

impl ColorSwatch {
    pub fn new(color: Color, selected: bool) -> Self {
        Self { color, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(40.0, 40.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let radius = rect.width() / 2.0;
            ui.painter()
                .circle_filled(rect.center(), radius, self.color.to_color32());

            let border = if self.selected {
                egui::Stroke::new(3.0, egui::Color32::from_rgb(0x33, 0x33, 0x33))
            } else if response.hovered() {
                egui::Stroke::new(2.0, egui::Color32::from_gray(0x99))
            } else {
                egui::Stroke::new(2.0, egui::Color32::from_gray(0xDD))
            };
            ui.painter().circle_stroke(rect.center(), radius, border);
        }

        response.on_hover_text(self.color.hex())
    }
}
