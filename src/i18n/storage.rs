//! Durable client-side storage for the selected locale.

use crate::i18n::I18nError;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

/// Storage key holding the last-selected locale code.
pub const LOCALE_STORAGE_KEY: &str = "apollo-locale";

/// A string key/value store that survives restarts.
pub trait LocaleStorage: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, I18nError>;
    fn write(&self, key: &str, value: &str) -> Result<(), I18nError>;
}

/// Storage backed by a JSON object file, e.g. `{"apollo-locale": "es"}`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> I18nError {
        I18nError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_entries(&self) -> Result<Map<String, Value>, I18nError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        match serde_json::from_str(&raw) {
            Ok(Value::Object(entries)) => Ok(entries),
            Ok(_) => Err(I18nError::Storage(format!(
                "{} does not hold a JSON object",
                self.path.display()
            ))),
            Err(e) => Err(I18nError::Storage(format!(
                "{} is not valid JSON: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

impl LocaleStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, I18nError> {
        Ok(self
            .read_entries()?
            .get(key)
            .and_then(Value::as_str)
            .map(ToString::to_string))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), I18nError> {
        // Unparseable contents are replaced; a file we cannot read is left alone
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(I18nError::Storage(_)) => Map::new(),
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let serialized = serde_json::to_string_pretty(&Value::Object(entries))
            .map_err(|e| I18nError::Storage(e.to_string()))?;
        std::fs::write(&self.path, serialized).map_err(|e| self.io_error(e))
    }
}

/// In-process storage; contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl LocaleStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, I18nError> {
        Ok(self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), I18nError> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage that refuses every operation, as in a private browsing session.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStorage;

impl LocaleStorage for UnavailableStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, I18nError> {
        Err(I18nError::Storage("storage is disabled".to_string()))
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), I18nError> {
        Err(I18nError::Storage("storage is disabled".to_string()))
    }
}
