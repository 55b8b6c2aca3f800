// Almacén nativo: un fichero JSON con un objeto clave -> texto

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::error::{QuizError, QuizResult};

#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> QuizResult<BTreeMap<String, String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| {
            QuizError::StorageUnavailable(format!(
                "store file {:?} is corrupt: {e}",
                self.path
            ))
        })
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> QuizResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(entries)?;
        // escribir al lado y renombrar: el fichero nunca queda a medias
        let tmp = self.temp_path();
        fs::write(&tmp, json)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "store".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl KeyValueStore for FileStore {
    fn get_raw(&self, key: &str) -> QuizResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_raw(&self, key: &str, value: &str) -> QuizResult<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove_raw(&self, key: &str) -> QuizResult<()> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("stored_quiz_{}", uuid::Uuid::new_v4()))
            .join(name)
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let store = FileStore::new(temp_path("none.json"));
        assert_eq!(store.get_raw("quizQuestions").unwrap(), None);
        // borrar algo inexistente no crea el fichero
        store.remove_raw("quizQuestions").unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn values_persist_across_handles() {
        let path = temp_path("store.json");
        FileStore::new(&path).set_raw("a", "[1,2]").unwrap();
        FileStore::new(&path).set_raw("b", "x").unwrap();

        let reader = FileStore::new(&path);
        assert_eq!(reader.get_raw("a").unwrap().as_deref(), Some("[1,2]"));
        reader.remove_raw("a").unwrap();
        assert_eq!(reader.get_raw("a").unwrap(), None);
        assert_eq!(reader.get_raw("b").unwrap().as_deref(), Some("x"));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn writes_leave_no_temp_file_behind() {
        let path = temp_path("atomic.json");
        let store = FileStore::new(&path);
        store.set_raw("quizQuestions", "[]").unwrap();
        store.set_raw("quizQuestions", "[1]").unwrap();

        assert!(!store.temp_path().exists());
        assert_eq!(store.temp_path().file_name().unwrap(), "atomic.json.tmp");
        let content = fs::read_to_string(&path).unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["quizQuestions"], "[1]");

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn stale_temp_file_does_not_block_writes() {
        let path = temp_path("stale.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let store = FileStore::new(&path);
        fs::write(store.temp_path(), "half writ").unwrap();

        store.set_raw("k", "v").unwrap();
        assert_eq!(store.get_raw("k").unwrap().as_deref(), Some("v"));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn corrupt_file_is_storage_unavailable() {
        let path = temp_path("corrupt.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.get_raw("quizQuestions"),
            Err(QuizError::StorageUnavailable(_))
        ));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
