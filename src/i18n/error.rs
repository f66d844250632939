//! Error types for the i18n core.
//!
//! None of these reach callers of `resolve` or `set_locale`; they surface only
//! from loaders, storage backends and the consistency check.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("Unsupported locale code: '{0}'")]
    UnsupportedLocale(String),

    #[error("No translation document for locale '{locale}'")]
    MissingTable { locale: String },

    #[error("Translation document for locale '{locale}' is not valid JSON: {source}")]
    InvalidDocument {
        locale: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Translation document for locale '{locale}' must have an object at its root")]
    NotAnObject { locale: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Locale storage unavailable: {0}")]
    Storage(String),
}

impl I18nError {
    /// Whether this error means the locale simply has no document.
    pub fn is_missing_table(&self) -> bool {
        matches!(self, I18nError::MissingTable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_locale_message() {
        let err = I18nError::UnsupportedLocale("ja".to_string());
        assert_eq!(err.to_string(), "Unsupported locale code: 'ja'");
    }

    #[test]
    fn test_io_message_includes_path() {
        let err = I18nError::Io {
            path: PathBuf::from("/tmp/locales/fr.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = err.to_string();
        assert!(message.contains("/tmp/locales/fr.json"));
        assert!(message.contains("denied"));
    }

    #[test]
    fn test_is_missing_table() {
        let missing = I18nError::MissingTable {
            locale: "fr".to_string(),
        };
        assert!(missing.is_missing_table());
        assert!(!I18nError::Storage("private mode".to_string()).is_missing_table());
    }
}
