//! Language context: the shared object handed to every page section.
//!
//! It owns the single `LocaleStore` and the `TranslationResolver`, so sections
//! read the locale and resolve strings through one explicit handle instead of
//! consulting storage themselves.

use crate::config::Config;
use crate::i18n::{
    detect_ambient_locale, DirectorySource, EmbeddedSource, FileStorage, Locale,
    LocaleConsistencyValidator, LocaleStore, TranslationResolver,
};
use anyhow::{bail, Result};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{info, warn};

pub struct LanguageContext {
    store: LocaleStore,
    resolver: TranslationResolver,
}

impl LanguageContext {
    pub fn new(store: LocaleStore, resolver: TranslationResolver) -> Self {
        Self { store, resolver }
    }

    /// Wire up a context from configuration: content source, durable storage,
    /// ambient OS locale and the selector's locale list.
    ///
    /// Fails only in strict mode, when the locale documents are inconsistent.
    pub fn from_config(config: &Config) -> Result<Self> {
        let resolver = match &config.locales_dir {
            Some(dir) => {
                info!("Loading translations from {}", dir.display());
                TranslationResolver::new(DirectorySource::new(dir))
            }
            None => TranslationResolver::new(EmbeddedSource),
        };

        if config.strict_locales {
            let report = LocaleConsistencyValidator::check_source(resolver.source(), &Locale::all());
            if report.has_errors() {
                bail!(
                    "Locale documents are inconsistent ({} errors); run check-locales for details",
                    report.error_count()
                );
            }
        }

        let available: Vec<Locale> = config
            .available_locales
            .iter()
            .filter_map(|code| match Locale::from_code(code) {
                Ok(locale) => Some(locale),
                Err(e) => {
                    warn!("Dropping entry from available locales: {}", e);
                    None
                }
            })
            .collect();

        let ambient = detect_ambient_locale();
        let store = LocaleStore::initialize(
            Arc::new(FileStorage::new(&config.state_file)),
            config.locale_override.as_deref(),
            ambient.as_deref(),
            available,
        );

        Ok(Self::new(store, resolver))
    }

    pub fn current_locale(&self) -> Locale {
        self.store.current_locale()
    }

    pub fn set_locale(&self, code: &str) -> bool {
        self.store.set_locale(code)
    }

    pub fn available_locales(&self) -> &[Locale] {
        self.store.available_locales()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.store.subscribe()
    }

    /// Resolve `key` in the current locale.
    pub fn t(&self, key: &str) -> String {
        self.resolver.resolve(self.current_locale(), key, None)
    }

    /// Resolve `key` in the current locale, with literal fallback text.
    pub fn t_or(&self, key: &str, fallback: &str) -> String {
        self.resolver
            .resolve(self.current_locale(), key, Some(fallback))
    }

    /// A translator bound to the current locale.
    pub fn translator(&self) -> Translator<'_> {
        self.translator_for(None)
    }

    /// A translator bound to `locale_override`, or to the current locale.
    pub fn translator_for(&self, locale_override: Option<Locale>) -> Translator<'_> {
        Translator {
            resolver: &self.resolver,
            locale: locale_override.unwrap_or_else(|| self.current_locale()),
        }
    }

    /// Display name of `locale` in the current language, for the selector.
    pub fn language_name(&self, locale: Locale) -> String {
        self.t_or(
            &format!("common.languages.{}", locale.code()),
            locale.native_name(),
        )
    }

    pub fn store(&self) -> &LocaleStore {
        &self.store
    }

    pub fn resolver(&self) -> &TranslationResolver {
        &self.resolver
    }
}

/// A snapshot view that resolves keys for one fixed locale.
#[derive(Clone, Copy)]
pub struct Translator<'a> {
    resolver: &'a TranslationResolver,
    locale: Locale,
}

impl Translator<'_> {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn t(&self, key: &str) -> String {
        self.resolver.resolve(self.locale, key, None)
    }

    pub fn t_or(&self, key: &str, fallback: &str) -> String {
        self.resolver.resolve(self.locale, key, Some(fallback))
    }
}
