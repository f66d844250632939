//! Locale type: a validated handle into the locale registry.
//!
//! A `Locale` can only be built from a supported code, so an unsupported value
//! can never become the current locale.

use crate::i18n::{I18nError, LocaleConfig, LocaleRegistry};
use std::fmt;

/// A supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    /// ISO 639-1 language code (e.g., "en", "es")
    code: &'static str,
}

impl Locale {
    pub const ENGLISH: Locale = Locale { code: "en" };
    pub const SPANISH: Locale = Locale { code: "es" };
    pub const FRENCH: Locale = Locale { code: "fr" };
    pub const GERMAN: Locale = Locale { code: "de" };

    /// Create a Locale from an exact, supported language code.
    ///
    /// # Example
    /// ```ignore
    /// let spanish = Locale::from_code("es")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Locale, I18nError> {
        LocaleRegistry::get()
            .get_by_code(code)
            .map(|config| Locale { code: config.code })
            .ok_or_else(|| I18nError::UnsupportedLocale(code.to_string()))
    }

    /// Map an ambient language tag (`en-US`, `es_MX.UTF-8`, `de@euro`) to a
    /// supported locale using only its primary subtag.
    pub fn from_lang_tag(tag: &str) -> Option<Locale> {
        let primary = tag
            .trim()
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        if primary.is_empty() {
            return None;
        }

        Locale::from_code(&primary).ok()
    }

    /// The default locale, whose table is the authoritative fallback.
    pub fn default_locale() -> Locale {
        Locale {
            code: LocaleRegistry::get().default_locale().code,
        }
    }

    /// All supported locales in registry order.
    pub fn all() -> Vec<Locale> {
        LocaleRegistry::get()
            .list_all()
            .into_iter()
            .map(|config| Locale { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not in the registry, which cannot happen for a
    /// Locale built through `from_code` or the constants.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be registered")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
