//! Translation resolver: dot-path lookups over lazily cached tables.
//!
//! Two fallback axes apply. A locale with no document is served from the
//! default locale's table, cached under the requested locale so loading is not
//! retried. A key with no usable string falls back to the caller's text, then
//! to the key itself. Locale fallback is table-level only: a present but
//! incomplete table never borrows individual strings from the default table.

use crate::i18n::{Locale, TranslationMetrics, TranslationSource, TranslationTable};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, error, warn};

pub struct TranslationResolver {
    source: Box<dyn TranslationSource>,
    cache: RwLock<HashMap<Locale, Arc<TranslationTable>>>,
    metrics: TranslationMetrics,
}

impl TranslationResolver {
    pub fn new(source: impl TranslationSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            cache: RwLock::new(HashMap::new()),
            metrics: TranslationMetrics::new(),
        }
    }

    /// Resolve `key` in `locale`'s table.
    ///
    /// Never fails. When no string is found the result is `fallback` if it is
    /// non-empty, otherwise `key`. An empty key yields `fallback` or `""`.
    pub fn resolve(&self, locale: Locale, key: &str, fallback: Option<&str>) -> String {
        if key.is_empty() {
            self.metrics.record_empty_key();
            warn!("Translation key is empty or undefined");
            return fallback.unwrap_or_default().to_string();
        }

        let table = self.table(locale);
        if let Some(text) = table.lookup(key).filter(|text| !text.is_empty()) {
            return text.to_string();
        }

        self.metrics.record_missing_key();
        warn!(
            "Missing translation for key: \"{}\" in locale: \"{}\"",
            key, locale
        );

        fallback
            .filter(|text| !text.is_empty())
            .unwrap_or(key)
            .to_string()
    }

    /// The table serving `locale`, loading and caching it on first use.
    pub fn table(&self, locale: Locale) -> Arc<TranslationTable> {
        if let Some(table) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&locale)
        {
            self.metrics.record_cache_hit();
            return Arc::clone(table);
        }

        self.metrics.record_cache_miss();
        let loaded = self.load_table(locale);

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(cache.entry(locale).or_insert(loaded))
    }

    /// Whether `locale` already has a cached table.
    pub fn is_cached(&self, locale: Locale) -> bool {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&locale)
    }

    pub fn metrics(&self) -> &TranslationMetrics {
        &self.metrics
    }

    pub fn source(&self) -> &dyn TranslationSource {
        self.source.as_ref()
    }

    fn load_table(&self, locale: Locale) -> Arc<TranslationTable> {
        self.metrics.record_table_load();
        let err = match self.source.load(locale) {
            Ok(table) => {
                debug!("Loaded translation table for locale \"{}\"", locale);
                return Arc::new(table);
            }
            Err(err) => err,
        };

        let default = Locale::default_locale();
        if locale == default {
            error!("No usable translation table for default locale: {}", err);
            return Arc::new(TranslationTable::empty());
        }

        // Shares the default locale's cached table, loading it at most once
        let table = self.table(default);
        if table.is_empty() {
            error!(
                "No translation files found for \"{}\" or \"{}\": {}",
                locale, default, err
            );
        } else {
            self.metrics.record_locale_fallback();
            warn!(
                "Translation file for locale \"{}\" not available ({}), falling back to {}",
                locale,
                err,
                default.name()
            );
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::MemorySource;
    use proptest::prelude::*;

    const EN: &str = r#"{
        "hero": { "title": "Automate your business", "empty": "" },
        "navigation": { "home": "Home", "about": "About" },
        "faq": { "items": [ { "question": "Do I need AI?" } ] }
    }"#;

    const ES: &str = r#"{
        "hero": { "title": "Automatiza tu negocio" },
        "navigation": { "home": "Inicio" }
    }"#;

    fn resolver() -> TranslationResolver {
        TranslationResolver::new(
            MemorySource::new()
                .with_document(Locale::ENGLISH, EN)
                .with_document(Locale::SPANISH, ES),
        )
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_resolve_nested_key() {
        let resolver = resolver();
        assert_eq!(
            resolver.resolve(Locale::ENGLISH, "hero.title", None),
            "Automate your business"
        );
        assert_eq!(
            resolver.resolve(Locale::SPANISH, "hero.title", None),
            "Automatiza tu negocio"
        );
    }

    #[test]
    fn test_resolve_array_element() {
        assert_eq!(
            resolver().resolve(Locale::ENGLISH, "faq.items.0.question", None),
            "Do I need AI?"
        );
    }

    // ==================== Key Fallback Tests ====================

    #[test]
    fn test_missing_key_returns_fallback_text() {
        assert_eq!(
            resolver().resolve(Locale::ENGLISH, "missing.key", Some("Default Title")),
            "Default Title"
        );
    }

    #[test]
    fn test_missing_key_without_fallback_returns_key() {
        assert_eq!(
            resolver().resolve(Locale::ENGLISH, "missing.key", None),
            "missing.key"
        );
    }

    #[test]
    fn test_empty_fallback_text_falls_through_to_key() {
        assert_eq!(
            resolver().resolve(Locale::ENGLISH, "missing.key", Some("")),
            "missing.key"
        );
    }

    #[test]
    fn test_empty_key_returns_fallback_or_blank() {
        let resolver = resolver();
        assert_eq!(resolver.resolve(Locale::ENGLISH, "", Some("Hello")), "Hello");
        assert_eq!(resolver.resolve(Locale::ENGLISH, "", None), "");
        assert_eq!(resolver.metrics().empty_keys(), 2);
        assert!(!resolver.is_cached(Locale::ENGLISH));
    }

    #[test]
    fn test_walk_through_string_uses_fallback_chain() {
        assert_eq!(
            resolver().resolve(Locale::ENGLISH, "hero.title.extra", Some("x")),
            "x"
        );
    }

    #[test]
    fn test_object_value_uses_fallback_chain() {
        assert_eq!(
            resolver().resolve(Locale::ENGLISH, "navigation", None),
            "navigation"
        );
    }

    #[test]
    fn test_empty_string_value_is_treated_as_missing() {
        assert_eq!(
            resolver().resolve(Locale::ENGLISH, "hero.empty", Some("Start")),
            "Start"
        );
    }

    // ==================== Locale Fallback Tests ====================

    #[test]
    fn test_incomplete_table_does_not_borrow_default_strings() {
        let resolver = resolver();
        assert_eq!(
            resolver.resolve(Locale::SPANISH, "navigation.about", None),
            "navigation.about"
        );
        assert_eq!(resolver.metrics().locale_fallbacks(), 0);
    }

    #[test]
    fn test_missing_table_served_from_default() {
        let resolver = resolver();
        assert_eq!(
            resolver.resolve(Locale::FRENCH, "hero.title", None),
            "Automate your business"
        );
        assert!(resolver.is_cached(Locale::FRENCH));
        assert_eq!(resolver.metrics().locale_fallbacks(), 1);
    }

    #[test]
    fn test_missing_table_is_not_reloaded() {
        let resolver = resolver();
        resolver.resolve(Locale::GERMAN, "hero.title", None);
        let loads = resolver.metrics().table_loads();

        resolver.resolve(Locale::GERMAN, "navigation.home", None);
        assert_eq!(resolver.metrics().table_loads(), loads);
        assert_eq!(resolver.metrics().locale_fallbacks(), 1);
    }

    #[test]
    fn test_missing_default_table_yields_keys() {
        let resolver = TranslationResolver::new(MemorySource::new());
        assert_eq!(resolver.resolve(Locale::FRENCH, "hero.title", None), "hero.title");
        assert_eq!(resolver.resolve(Locale::ENGLISH, "hero.title", Some("Hi")), "Hi");
        assert!(resolver.table(Locale::ENGLISH).is_empty());
    }

    #[test]
    fn test_invalid_document_falls_back_to_default() {
        let resolver = TranslationResolver::new(
            MemorySource::new()
                .with_document(Locale::ENGLISH, EN)
                .with_document(Locale::GERMAN, "{ broken"),
        );
        assert_eq!(
            resolver.resolve(Locale::GERMAN, "navigation.home", None),
            "Home"
        );
    }

    // ==================== Cache Tests ====================

    #[test]
    fn test_resolve_is_idempotent_and_cached() {
        let resolver = resolver();
        let first = resolver.resolve(Locale::SPANISH, "navigation.home", None);
        let second = resolver.resolve(Locale::SPANISH, "navigation.home", None);

        assert_eq!(first, second);
        assert_eq!(resolver.metrics().table_loads(), 1);
        assert_eq!(resolver.metrics().cache_misses(), 1);
        assert_eq!(resolver.metrics().cache_hits(), 1);
    }

    #[test]
    fn test_table_returns_shared_instance() {
        let resolver = resolver();
        let first = resolver.table(Locale::ENGLISH);
        let second = resolver.table(Locale::ENGLISH);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_fallback_reuses_cached_default_table() {
        let resolver = resolver();
        let english = resolver.table(Locale::ENGLISH);
        assert_eq!(resolver.metrics().table_loads(), 1);

        let french = resolver.table(Locale::FRENCH);
        assert!(Arc::ptr_eq(&english, &french));
        // One failed attempt for fr, no second parse of en
        assert_eq!(resolver.metrics().table_loads(), 2);
        assert_eq!(resolver.metrics().locale_fallbacks(), 1);
    }

    #[test]
    fn test_fallback_caches_default_table_too() {
        let resolver = resolver();
        resolver.resolve(Locale::GERMAN, "hero.title", None);
        assert!(resolver.is_cached(Locale::ENGLISH));

        let loads = resolver.metrics().table_loads();
        resolver.resolve(Locale::ENGLISH, "hero.title", None);
        resolver.resolve(Locale::FRENCH, "hero.title", None);
        // fr still needs its own failed attempt, en is never parsed again
        assert_eq!(resolver.metrics().table_loads(), loads + 1);
    }

    // ==================== Poisoned Lock Tests ====================

    #[test]
    fn test_resolve_survives_poisoned_cache() {
        let resolver = Arc::new(resolver());
        resolver.resolve(Locale::SPANISH, "hero.title", None);

        let holder = Arc::clone(&resolver);
        let result = std::thread::spawn(move || {
            let _guard = holder.cache.write().unwrap();
            panic!("panicked while holding the cache lock");
        })
        .join();
        assert!(result.is_err());
        assert!(resolver.cache.is_poisoned());

        assert_eq!(
            resolver.resolve(Locale::SPANISH, "hero.title", None),
            "Automatiza tu negocio"
        );
        assert_eq!(
            resolver.resolve(Locale::ENGLISH, "navigation.about", None),
            "About"
        );
        assert!(resolver.is_cached(Locale::ENGLISH));
    }

    proptest! {
        #[test]
        fn test_resolve_is_total(key in "[a-zA-Z0-9._]{0,32}", fallback in proptest::option::of("[a-z ]{0,8}")) {
            let resolver = resolver();
            let result = resolver.resolve(Locale::SPANISH, &key, fallback.as_deref());
            if key.is_empty() {
                prop_assert_eq!(result, fallback.unwrap_or_default());
            }
        }
    }
}
