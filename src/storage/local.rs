// Almacén del navegador (window.localStorage)

use super::KeyValueStore;
use crate::error::{QuizError, QuizResult};

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

fn js_error(e: web_sys::wasm_bindgen::JsValue) -> QuizError {
    QuizError::StorageUnavailable(format!("{e:?}"))
}

impl LocalStorage {
    fn storage(&self) -> QuizResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| QuizError::StorageUnavailable("no window".into()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| QuizError::StorageUnavailable("localStorage disabled".into()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get_raw(&self, key: &str) -> QuizResult<Option<String>> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set_raw(&self, key: &str, value: &str) -> QuizResult<()> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove_raw(&self, key: &str) -> QuizResult<()> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}
