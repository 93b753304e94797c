use egui::{Frame, Margin, Response, Stroke, Ui};

use crate::utils::colors::{DANGER_BG, DANGER_FG};

/// Full-width danger banner.
pub fn error_banner(ui: &mut Ui, message: &str) -> Response {
    Frame::NONE
        .fill(DANGER_BG)
        .stroke(Stroke::new(1.0, DANGER_FG))
        .inner_margin(Margin::same(8))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.colored_label(DANGER_FG, message);
        })
        .response
}
