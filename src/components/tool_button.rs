use eframe::egui;

const BUTTON_SIZE: egui::Vec2 = egui::vec2(72.0, 28.0);

/// Text button for the toolbar that stays highlighted while its mode is active.
pub struct ToolButton {
    pub label: &'static str,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(label: &'static str, selected: bool) -> Self {
        Self { label, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(BUTTON_SIZE, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(100, 180, 255)
            } else if response.hovered() {
                egui::Color32::from_gray(90)
            } else {
                egui::Color32::from_rgba_unmultiplied(70, 70, 70, 220)
            };

            ui.painter().rect_filled(rect, 4.0, bg_color);

            let text_color = if self.selected {
                egui::Color32::BLACK
            } else {
                egui::Color32::WHITE
            };

            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(14.0),
                text_color,
            );

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response
    }
}
