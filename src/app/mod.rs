use crate::config::AppConfig;
use crate::model::{AppState, QuestionDraft};
use crate::repository::QuestionRepository;
use crate::session::{QuizSession, SeedingLoader};
use crate::storage::{KeyValueStore, PlatformStore};

// Submódulos
pub mod actions;
pub mod navigation;

// Re-export de view models
pub use crate::view_models::{QuestionCard, QuestionRow};

/// Estado del formulario de crear/editar pregunta
#[derive(Clone, Debug, Default)]
pub struct EditorDialog {
    pub open: bool,
    /// `Some(id)` en modo edición
    pub editing_id: Option<String>,
    pub draft: QuestionDraft,
    pub error: Option<String>,
}

impl EditorDialog {
    pub fn header(&self) -> &'static str {
        if self.editing_id.is_some() {
            "Editar pregunta"
        } else {
            "Crear pregunta"
        }
    }
}

/// Aplicación completa: editor y jugador comparten almacén pero no estado.
pub struct QuizApp<S: KeyValueStore + Clone = PlatformStore> {
    pub state: AppState,
    pub repository: QuestionRepository<S>,
    pub session: QuizSession<SeedingLoader<S>>,
    pub editor: EditorDialog,
    pub message: String,
}

impl QuizApp<PlatformStore> {
    pub fn new() -> Self {
        let config = AppConfig::from_env();
        log::info!("Opening question store: {config:?}");
        Self::with_store(config.open_store())
    }
}

impl Default for QuizApp<PlatformStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: KeyValueStore + Clone> QuizApp<S> {
    pub fn with_store(store: S) -> Self {
        Self {
            state: AppState::Welcome,
            repository: QuestionRepository::new(store.clone()),
            session: QuizSession::new(SeedingLoader::new(store)),
            editor: EditorDialog::default(),
            message: String::new(),
        }
    }
}
