use egui::{Context, RichText};

use crate::QuizApp;
use crate::storage::KeyValueStore;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::centered_panel;

pub fn ui_quiz<S: KeyValueStore + Clone>(app: &mut QuizApp<S>, ctx: &Context) {
    let Some(card) = app.tarjeta_actual() else {
        // sin pregunta actual la partida ya terminó
        app.state = crate::model::AppState::Summary;
        return;
    };

    centered_panel(ctx, 360.0, 560.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(format!("Pregunta {} de {}", card.number, card.total));
            ui.add_space(6.0);
            ui.heading(RichText::new(&card.title).size(22.0));
            ui.add_space(16.0);

            let width = ui.available_width();
            let mut elegida = None;
            for (choice, text) in &card.options {
                if big_list_button(ui, format!("{choice}. {text}"), width, 40.0, true) {
                    elegida = Some(*choice);
                }
                ui.add_space(4.0);
            }
            if let Some(choice) = elegida {
                app.responder(choice);
            }

            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(&app.message);
            }
        });
    });
}
