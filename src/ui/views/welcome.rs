use egui::{Context, RichText};

use crate::QuizApp;
use crate::storage::KeyValueStore;
use crate::ui::helpers::two_button_row;
use crate::ui::layout::centered_panel;

pub fn ui_welcome<S: KeyValueStore + Clone>(app: &mut QuizApp<S>, ctx: &Context) {
    centered_panel(ctx, 220.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("📝 Quiz").size(32.0));
            ui.add_space(10.0);
            ui.label("Crea tus propias preguntas o juega con las que ya tienes guardadas.");
            ui.add_space(20.0);

            let width = ui.available_width();
            let (jugar, editar) = two_button_row(ui, width, "▶ Empezar", "✏ Editar preguntas");
            if jugar {
                app.empezar_quiz();
            }
            if editar {
                app.ir_a_editor();
            }
        });
    });
}
