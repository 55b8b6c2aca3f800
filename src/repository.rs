// src/repository.rs

use log::{debug, error, info, warn};

use crate::error::{QuizError, QuizResult};
use crate::model::{QuestionDraft, QuestionRecord};
use crate::storage::{KeyValueStore, PersistenceGateway};

/// Dueño de la lista de preguntas del editor.
///
/// Cada cambio reescribe la colección completa. Si la escritura falla se
/// loguea y la copia en memoria sigue mandando hasta el siguiente guardado.
pub struct QuestionRepository<S> {
    gateway: PersistenceGateway<S>,
    questions: Vec<QuestionRecord>,
    loaded: bool,
}

impl<S: KeyValueStore> QuestionRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            gateway: PersistenceGateway::new(store),
            questions: Vec::new(),
            loaded: false,
        }
    }

    /// Relee el almacenamiento. Nunca falla: sin datos o con datos ilegibles
    /// la colección queda vacía (el editor no siembra las de ejemplo).
    pub fn load(&mut self) {
        self.questions = match self.gateway.load_questions() {
            Ok(Some(questions)) => questions,
            Ok(None) => Vec::new(),
            Err(e) if e.is_recoverable() => {
                warn!("Failed to load questions from storage: {e}");
                Vec::new()
            }
            Err(e) => {
                error!("Unexpected error loading questions: {e}");
                Vec::new()
            }
        };
        self.loaded = true;
        debug!("Loaded {} stored questions", self.questions.len());
    }

    fn ensure_loaded(&mut self) {
        if !self.loaded {
            self.load();
        }
    }

    fn persist(&self) {
        if let Err(e) = self.gateway.save_questions(&self.questions) {
            error!("Failed to save questions to storage: {e}");
        }
    }

    /// Solo los registros con id y título; el resto se queda guardado sin tocar
    pub fn list(&mut self) -> Vec<&QuestionRecord> {
        self.ensure_loaded();
        self.questions.iter().filter(|q| q.is_listed()).collect()
    }

    pub fn find(&mut self, id: &str) -> Option<&QuestionRecord> {
        self.ensure_loaded();
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn create(&mut self, draft: QuestionDraft) -> QuizResult<QuestionRecord> {
        let correct = draft.validate()?;
        self.ensure_loaded();

        let id = self.fresh_id();
        let record = draft.into_record(id, correct);
        self.questions.push(record.clone());
        self.persist();
        debug!("Created question {}", record.id);
        Ok(record)
    }

    pub fn update(&mut self, id: &str, draft: QuestionDraft) -> QuizResult<QuestionRecord> {
        let correct = draft.validate()?;
        self.ensure_loaded();

        let slot = self
            .questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| QuizError::NotFound(id.to_string()))?;
        let mut record = draft.into_record(id.to_string(), correct);
        record.extra = std::mem::take(&mut slot.extra);
        *slot = record;
        let record = slot.clone();
        self.persist();
        debug!("Updated question {id}");
        Ok(record)
    }

    /// Borrar un id inexistente no es un error; devuelve si se quitó algo
    pub fn delete(&mut self, id: &str) -> bool {
        self.ensure_loaded();
        let before = self.questions.len();
        self.questions.retain(|q| q.id != id);
        let removed = self.questions.len() != before;
        self.persist();
        debug!("Delete {id}: removed={removed}");
        removed
    }

    /// Vacía almacenamiento y memoria. No vuelve a cargar las de ejemplo:
    /// esas solo se siembran al empezar a jugar.
    pub fn restore_defaults(&mut self) {
        if let Err(e) = self.gateway.clear() {
            error!("Failed to clear stored questions: {e}");
        }
        self.questions.clear();
        self.loaded = true;
        info!("Question storage reset");
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = uuid::Uuid::new_v4().simple().to_string();
            if !self.questions.iter().any(|q| q.id == id) {
                return id;
            }
        }
    }
}
