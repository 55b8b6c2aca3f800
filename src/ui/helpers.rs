// src/ui/helpers.rs
use egui::{Button, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Fila de dos botones del mismo ancho. Devuelve (clicked_izq, clicked_der).
pub fn two_button_row(ui: &mut Ui, total_width: f32, left: &str, right: &str) -> (bool, bool) {
    let gap = 8.0;
    let w = ((total_width - gap) / 2.0).max(80.0);
    let mut clicked = (false, false);
    ui.horizontal(|ui| {
        clicked.0 = ui.add_sized([w, 36.0], Button::new(left)).clicked();
        ui.add_space(gap);
        clicked.1 = ui.add_sized([w, 36.0], Button::new(right)).clicked();
    });
    clicked
}
