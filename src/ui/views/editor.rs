use egui::{Context, ScrollArea};

use crate::QuizApp;
use crate::model::Choice;
use crate::storage::KeyValueStore;
use crate::ui::helpers::{big_list_button, two_button_row};
use crate::ui::layout::centered_panel;

enum RowAction {
    Edit(String),
    Delete(String),
}

pub fn ui_editor<S: KeyValueStore + Clone>(app: &mut QuizApp<S>, ctx: &Context) {
    let rows = app.question_rows();

    centered_panel(ctx, 520.0, 600.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Preguntas");
        });
        ui.add_space(10.0);

        let width = ui.available_width();
        let mut action = None;

        ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
            if rows.is_empty() {
                ui.label("No hay preguntas. Crea una o restaura los valores por defecto.");
            }
            for row in &rows {
                ui.horizontal(|ui| {
                    ui.label(row.label());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Borrar").clicked() {
                            action = Some(RowAction::Delete(row.id.clone()));
                        }
                        if ui.button("Editar").clicked() {
                            action = Some(RowAction::Edit(row.id.clone()));
                        }
                    });
                });
                ui.separator();
            }
        });

        match action {
            Some(RowAction::Edit(id)) => app.abrir_dialogo(Some(&id)),
            Some(RowAction::Delete(id)) => app.borrar_pregunta(&id),
            None => {}
        }

        ui.add_space(10.0);
        let (crear, restaurar) = two_button_row(ui, width, "➕ Crear pregunta", "⟲ Restaurar");
        if crear {
            app.abrir_dialogo(None);
        }
        if restaurar {
            app.restaurar_preguntas();
        }

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(&app.message);
        }
    });
}

/// Ventana de crear/editar
pub fn question_dialog<S: KeyValueStore + Clone>(app: &mut QuizApp<S>, ctx: &Context) {
    let mut guardar = false;
    let mut cancelar = false;

    egui::Window::new(app.editor.header())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Enunciado");
            ui.text_edit_singleline(&mut app.editor.draft.title);
            ui.add_space(6.0);

            for choice in Choice::ALL {
                ui.horizontal(|ui| {
                    let selected =
                        app.editor.draft.correct.as_deref() == Some(choice.answer_key());
                    if ui.radio(selected, choice.letter()).clicked() {
                        app.marcar_correcta(choice);
                    }
                    ui.text_edit_singleline(app.editor.draft.answer_mut(choice));
                });
            }

            if let Some(error) = &app.editor.error {
                ui.add_space(6.0);
                ui.colored_label(egui::Color32::LIGHT_RED, error);
            }

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                guardar = big_list_button(ui, "Guardar".to_owned(), 120.0, 32.0, true);
                cancelar = big_list_button(ui, "Cancelar".to_owned(), 120.0, 32.0, true);
            });
        });

    if guardar {
        app.guardar_pregunta();
    } else if cancelar {
        app.cerrar_dialogo();
    }
}
