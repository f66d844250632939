//! Locale registry: single source of truth for all supported locales.
//!
//! The registry is a `OnceLock` singleton, built on first access and immutable
//! afterwards. Every `Locale` value in the crate points at one of its entries.

use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-1 language code (e.g., "en", "es")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Spanish")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Español")
    pub native_name: &'static str,

    /// Whether this is the default locale and authoritative fallback table
    /// (exactly one entry must be true)
    pub is_default: bool,

    /// Whether the language selector offers this locale out of the box
    pub offered: bool,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: supported_locales(),
        })
    }

    /// Get a locale configuration by its exact code.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// All supported locales, in registry order.
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Locales offered by the language selector when nothing else is configured.
    pub fn list_offered(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.offered).collect()
    }

    /// Get the default locale configuration.
    ///
    /// # Panics
    /// Panics if the registry defines zero or several default locales. The
    /// registry is static data, so this is a programming error.
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.as_slice() {
            [only] => *only,
            [] => panic!("No default locale found in registry"),
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check if a locale code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// The supported locale set. Only `en` and `es` are offered in the selector;
/// `fr` and `de` are accepted but ship without their own documents.
fn supported_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: true,
            offered: true,
        },
        LocaleConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            is_default: false,
            offered: true,
        },
        LocaleConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            is_default: false,
            offered: false,
        },
        LocaleConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            is_default: false,
            offered: false,
        },
    ]
}
