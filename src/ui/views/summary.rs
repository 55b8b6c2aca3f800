use egui::{Context, RichText};

use crate::QuizApp;
use crate::storage::KeyValueStore;
use crate::ui::helpers::two_button_row;
use crate::ui::layout::centered_panel;
use crate::view_models::tier_badge;

pub fn ui_summary<S: KeyValueStore + Clone>(app: &mut QuizApp<S>, ctx: &Context) {
    let result = app.resultado();

    centered_panel(ctx, 260.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("¡Fin del quiz!");
            ui.add_space(10.0);

            match result {
                Some(result) => {
                    ui.label(RichText::new(tier_badge(result.tier)).size(64.0));
                    ui.add_space(6.0);
                    ui.heading(format!("Tu puntuación = {}%", result.score_percent));
                    ui.label(format!("{} de {} correctas", result.correct, result.total));
                }
                None => {
                    ui.label("No hay ninguna partida terminada.");
                }
            }

            ui.add_space(20.0);
            let width = ui.available_width();
            let (otra, salir) = two_button_row(ui, width, "⟲ Jugar otra vez", "Salir");
            if otra {
                app.empezar_quiz();
            }
            if salir {
                app.ir_a_inicio();
            }
        });
    });
}
