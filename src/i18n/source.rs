//! Translation content sources.
//!
//! A source hands out one parsed document per locale. The resolver decides
//! what to do when a locale has none.

use crate::i18n::{I18nError, Locale, TranslationTable};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Something that can produce the translation document for a locale.
pub trait TranslationSource: Send + Sync {
    fn load(&self, locale: Locale) -> Result<TranslationTable, I18nError>;
}

/// Documents compiled into the binary from `locales/`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    fn document(locale: Locale) -> Option<&'static str> {
        match locale.code() {
            "en" => Some(include_str!("../../locales/en.json")),
            "es" => Some(include_str!("../../locales/es.json")),
            _ => None,
        }
    }
}

impl TranslationSource for EmbeddedSource {
    fn load(&self, locale: Locale) -> Result<TranslationTable, I18nError> {
        let raw = Self::document(locale).ok_or_else(|| I18nError::MissingTable {
            locale: locale.code().to_string(),
        })?;
        TranslationTable::from_json(locale, raw)
    }
}

/// Documents read from `<dir>/<code>.json` at load time.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, locale: Locale) -> PathBuf {
        self.dir.join(format!("{}.json", locale.code()))
    }
}

impl TranslationSource for DirectorySource {
    fn load(&self, locale: Locale) -> Result<TranslationTable, I18nError> {
        let path = self.path_for(locale);
        debug!("Reading translation document {}", path.display());

        let raw = std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                I18nError::MissingTable {
                    locale: locale.code().to_string(),
                }
            } else {
                I18nError::Io { path, source }
            }
        })?;

        TranslationTable::from_json(locale, &raw)
    }
}

/// Documents held in memory, keyed by locale.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    documents: HashMap<Locale, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, locale: Locale, raw: impl Into<String>) -> Self {
        self.documents.insert(locale, raw.into());
        self
    }
}

impl TranslationSource for MemorySource {
    fn load(&self, locale: Locale) -> Result<TranslationTable, I18nError> {
        let raw = self
            .documents
            .get(&locale)
            .ok_or_else(|| I18nError::MissingTable {
                locale: locale.code().to_string(),
            })?;
        TranslationTable::from_json(locale, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ==================== EmbeddedSource Tests ====================

    #[test]
    fn test_embedded_ships_english_and_spanish() {
        let english = EmbeddedSource.load(Locale::ENGLISH).expect("en is embedded");
        let spanish = EmbeddedSource.load(Locale::SPANISH).expect("es is embedded");

        assert_eq!(english.lookup("hero.title"), Some("Automate your business"));
        assert!(spanish.lookup("hero.title").is_some());
        assert_ne!(english.lookup("hero.title"), spanish.lookup("hero.title"));
    }

    #[test]
    fn test_embedded_missing_french() {
        let err = EmbeddedSource.load(Locale::FRENCH).unwrap_err();
        assert!(err.is_missing_table());
    }

    // ==================== DirectorySource Tests ====================

    #[test]
    fn test_directory_reads_locale_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("de.json"),
            r#"{ "hero": { "title": "Automatisieren Sie Ihr Geschäft" } }"#,
        )
        .unwrap();

        let source = DirectorySource::new(temp_dir.path());
        let table = source.load(Locale::GERMAN).expect("de.json exists");
        assert_eq!(
            table.lookup("hero.title"),
            Some("Automatisieren Sie Ihr Geschäft")
        );
    }

    #[test]
    fn test_directory_missing_file_is_missing_table() {
        let temp_dir = TempDir::new().unwrap();
        let err = DirectorySource::new(temp_dir.path())
            .load(Locale::FRENCH)
            .unwrap_err();
        assert!(err.is_missing_table());
    }

    #[test]
    fn test_directory_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("es.json"), "not json").unwrap();

        let err = DirectorySource::new(temp_dir.path())
            .load(Locale::SPANISH)
            .unwrap_err();
        assert!(matches!(err, I18nError::InvalidDocument { .. }));
    }

    // ==================== MemorySource Tests ====================

    #[test]
    fn test_memory_source() {
        let source = MemorySource::new().with_document(Locale::ENGLISH, r#"{ "a": "b" }"#);
        assert_eq!(source.load(Locale::ENGLISH).unwrap().lookup("a"), Some("b"));
        assert!(source.load(Locale::SPANISH).unwrap_err().is_missing_table());
    }
}
