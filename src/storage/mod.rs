//! Persistencia de las preguntas: un almacén clave/valor de texto y la
//! pasarela que (de)serializa la colección completa bajo una única clave.

mod memory;
#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local;

pub use memory::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

use crate::error::QuizResult;
use crate::model::QuestionRecord;

/// Clave fija bajo la que se guarda la colección
pub const STORAGE_KEY: &str = "quizQuestions";

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = FileStore;
#[cfg(target_arch = "wasm32")]
pub type PlatformStore = LocalStorage;

/// Almacén de cadenas por clave (localStorage, fichero, memoria...).
pub trait KeyValueStore {
    fn get_raw(&self, key: &str) -> QuizResult<Option<String>>;
    fn set_raw(&self, key: &str, value: &str) -> QuizResult<()>;
    fn remove_raw(&self, key: &str) -> QuizResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_raw(&self, key: &str) -> QuizResult<Option<String>> {
        (**self).get_raw(key)
    }
    fn set_raw(&self, key: &str, value: &str) -> QuizResult<()> {
        (**self).set_raw(key, value)
    }
    fn remove_raw(&self, key: &str) -> QuizResult<()> {
        (**self).remove_raw(key)
    }
}

/// Lectura y escritura de la colección entera; nunca escrituras parciales.
#[derive(Clone, Debug)]
pub struct PersistenceGateway<S> {
    store: S,
}

impl<S: KeyValueStore> PersistenceGateway<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// `Ok(None)` si no hay nada guardado todavía
    pub fn load_questions(&self) -> QuizResult<Option<Vec<QuestionRecord>>> {
        let Some(raw) = self.store.get_raw(STORAGE_KEY)? else {
            return Ok(None);
        };
        let questions: Vec<QuestionRecord> = serde_json::from_str(&raw)?;
        Ok(Some(questions))
    }

    pub fn save_questions(&self, questions: &[QuestionRecord]) -> QuizResult<()> {
        let json = serde_json::to_string(questions)?;
        self.store.set_raw(STORAGE_KEY, &json)
    }

    pub fn clear(&self) -> QuizResult<()> {
        self.store.remove_raw(STORAGE_KEY)
    }
}
