// src/config.rs

use crate::storage::PlatformStore;

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_STORE_PATH: &str = "quiz_questions.json";

/// Configuración de arranque.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Fichero del almacén nativo (en web se usa localStorage)
    #[cfg(not(target_arch = "wasm32"))]
    pub store_path: std::path::PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            #[cfg(not(target_arch = "wasm32"))]
            store_path: DEFAULT_STORE_PATH.into(),
        }
    }
}

impl AppConfig {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let store_path = std::env::var("QUIZ_STORE_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STORE_PATH.to_string());
        Self {
            store_path: store_path.into(),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn open_store(&self) -> PlatformStore {
        crate::storage::FileStore::new(&self.store_path)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn open_store(&self) -> PlatformStore {
        crate::storage::LocalStorage
    }
}
