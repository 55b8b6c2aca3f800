// src/error.rs

use thiserror::Error;

use crate::session::SessionState;

/// Errores del núcleo (repositorio, sesión y almacenamiento).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Malformed stored data: {0}")]
    MalformedStoredData(String),

    #[error("Invalid question: {0}")]
    Validation(String),

    #[error("No question with id '{0}'")]
    NotFound(String),

    #[error("Operation not allowed while session is {actual:?}")]
    InvalidState { actual: SessionState },

    #[error("The quiz session has finished")]
    SessionFinished,
}

pub type QuizResult<T> = Result<T, QuizError>;

impl QuizError {
    /// Errores que el núcleo recupera localmente (se loguean, no llegan a la UI)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            QuizError::StorageUnavailable(_) | QuizError::MalformedStoredData(_)
        )
    }
}

impl From<serde_json::Error> for QuizError {
    fn from(e: serde_json::Error) -> Self {
        QuizError::MalformedStoredData(e.to_string())
    }
}

impl From<std::io::Error> for QuizError {
    fn from(e: std::io::Error) -> Self {
        QuizError::StorageUnavailable(e.to_string())
    }
}
