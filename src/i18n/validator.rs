//! Locale consistency validation.
//!
//! Compares every locale document against the default locale's document so
//! missing or mistyped translations are caught at startup or in CI rather
//! than showing up as raw keys on the page.

use crate::i18n::{LeafKind, Locale, TranslationSource, TranslationTable};
use serde::Serialize;

/// Validation report containing errors and warnings about one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Problems that make the page show raw keys or fallback text
    pub errors: Vec<String>,

    /// Suspicious content that does not break lookups
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

/// Per-locale results of a consistency check.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConsistencyReport {
    pub locales: Vec<(String, ValidationReport)>,
}

impl ConsistencyReport {
    pub fn has_errors(&self) -> bool {
        self.locales.iter().any(|(_, report)| report.has_errors())
    }

    pub fn error_count(&self) -> usize {
        self.locales.iter().map(|(_, r)| r.errors.len()).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.locales.iter().map(|(_, r)| r.warnings.len()).sum()
    }

    pub fn report_for(&self, locale: Locale) -> Option<&ValidationReport> {
        self.locales
            .iter()
            .find(|(code, _)| code == locale.code())
            .map(|(_, report)| report)
    }
}

pub struct LocaleConsistencyValidator;

impl LocaleConsistencyValidator {
    /// Compare `candidate` against the authoritative `default` document.
    pub fn compare(default: &TranslationTable, candidate: &TranslationTable) -> ValidationReport {
        let mut report = ValidationReport::new();
        let expected = default.leaves();
        let actual = candidate.leaves();

        for (key, kind) in &expected {
            match (kind, actual.get(key)) {
                (_, None) => report.errors.push(format!("Missing key: {}", key)),
                (LeafKind::Text | LeafKind::EmptyText, Some(LeafKind::Other)) => report
                    .errors
                    .push(format!("Key {} is not a string", key)),
                _ => {}
            }
        }

        for (key, kind) in &actual {
            if !expected.contains_key(key) {
                report
                    .warnings
                    .push(format!("Key {} is not in the default locale", key));
            }
            if *kind == LeafKind::EmptyText {
                report.warnings.push(format!("Key {} is empty", key));
            }
        }

        report
    }

    /// Validate every locale in `locales` as served by `source`.
    ///
    /// A non-default locale without a document is only a warning, since the
    /// resolver serves it from the default table. A broken or missing default
    /// document is an error.
    pub fn check_source(source: &dyn TranslationSource, locales: &[Locale]) -> ConsistencyReport {
        let mut consistency = ConsistencyReport::default();
        let default_locale = Locale::default_locale();

        let default = match source.load(default_locale) {
            Ok(table) => table,
            Err(e) => {
                let mut report = ValidationReport::new();
                report.errors.push(e.to_string());
                consistency
                    .locales
                    .push((default_locale.code().to_string(), report));
                return consistency;
            }
        };

        for &locale in locales {
            let report = if locale == default_locale {
                Self::compare(&default, &default)
            } else {
                match source.load(locale) {
                    Ok(table) => Self::compare(&default, &table),
                    Err(e) if e.is_missing_table() => ValidationReport {
                        errors: Vec::new(),
                        warnings: vec![format!(
                            "No document; served from the {} table",
                            default_locale.name()
                        )],
                    },
                    Err(e) => ValidationReport {
                        errors: vec![e.to_string()],
                        warnings: Vec::new(),
                    },
                }
            };
            consistency.locales.push((locale.code().to_string(), report));
        }

        consistency
    }
}
