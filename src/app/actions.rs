// Acciones del editor de preguntas

use super::*;
use crate::model::Choice;

impl<S: KeyValueStore + Clone> QuizApp<S> {
    pub fn question_rows(&mut self) -> Vec<QuestionRow> {
        self.repository
            .list()
            .into_iter()
            .map(QuestionRow::from_record)
            .collect()
    }

    /// Abre el diálogo vacío o, con `id`, precargado con esa pregunta
    pub fn abrir_dialogo(&mut self, id: Option<&str>) {
        self.editor = EditorDialog::default();
        if let Some(id) = id {
            match self.repository.find(id) {
                Some(record) => {
                    self.editor.draft = QuestionDraft::from_record(record);
                    self.editor.editing_id = Some(id.to_string());
                }
                None => {
                    self.message = "La pregunta ya no existe.".into();
                    return;
                }
            }
        }
        self.editor.open = true;
    }

    pub fn cerrar_dialogo(&mut self) {
        self.editor = EditorDialog::default();
    }

    pub fn marcar_correcta(&mut self, choice: Choice) {
        self.editor.draft.correct = Some(choice.answer_key().to_string());
    }

    /// Crea o actualiza según el modo; si falla la validación el diálogo sigue abierto
    pub fn guardar_pregunta(&mut self) {
        let draft = self.editor.draft.clone();
        let result = match self.editor.editing_id.clone() {
            Some(id) => self.repository.update(&id, draft),
            None => self.repository.create(draft),
        };
        match result {
            Ok(record) => {
                self.message = format!("✅ Guardada: {}", record.title_text());
                self.cerrar_dialogo();
            }
            Err(e) => {
                self.editor.error = Some(format!("⚠ {e}"));
            }
        }
    }

    pub fn borrar_pregunta(&mut self, id: &str) {
        if self.repository.delete(id) {
            self.message = "🗑 Pregunta borrada.".into();
        }
    }

    /// "Restaurar": vacía el almacenamiento, sin confirmación
    pub fn restaurar_preguntas(&mut self) {
        self.repository.restore_defaults();
        self.cerrar_dialogo();
        self.message.clear();
    }
}
