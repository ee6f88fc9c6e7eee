use eframe::egui;
use crate::pen::{PenSettings, StrokeWidth};

/// Width picker button: a preview dot sized to the width, with its label below
pub struct WidthButton {
    pub width: StrokeWidth,
    pub selected: bool,
}

impl WidthButton {
    pub fn new(width: StrokeWidth, selected: bool) -> Self {
        Self { width, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(48.0, 64.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let (bg_color, border_color) = if self.selected {
                (
                    egui::Color32::from_rgb(0xE0, 0xE7, 0xFF),
                    egui::Color32::from_rgb(0x63, 0x66, 0xF1),
                )
            } else if response.hovered() {
                (egui::Color32::from_gray(0xF5), egui::Color32::from_gray(0xBB))
            } else {
                (egui::Color32::WHITE, egui::Color32::from_gray(0xDD))
            };

            ui.painter().rect_filled(rect, 8.0, bg_color);
            ui.painter()
                .rect_stroke(rect, 8.0, egui::Stroke::new(1.0, border_color));

            let (dot_center, label_pos) = Self::layout(rect);
            ui.painter().circle_filled(
                dot_center,
                PenSettings::preview_diameter(self.width) / 2.0,
                egui::Color32::from_rgb(0x33, 0x33, 0x33),
            );

            ui.painter().text(
                label_pos,
                egui::Align2::CENTER_CENTER,
                self.width.pixels().to_string(),
                egui::FontId::proportional(LABEL_SIZE),
                egui::Color32::from_rgb(0x66, 0x66, 0x66),
            );
        }

        response
    }

    /// Centers of the preview dot and the label. The dot area is sized for
    /// the widest preview so no dot reaches the label.
    fn layout(rect: egui::Rect) -> (egui::Pos2, egui::Pos2) {
        let largest = StrokeWidth::ALL
            .into_iter()
            .map(PenSettings::preview_diameter)
            .fold(0.0, f32::max);
        let dot_center = egui::pos2(rect.center().x, rect.min.y + PADDING + largest / 2.0);
        let label_pos = egui::pos2(rect.center().x, rect.max.y - PADDING - LABEL_SIZE / 2.0);
        (dot_center, label_pos)
    }
}

const PADDING: f32 = 6.0;
const LABEL_SIZE: f32 = 12.0;
