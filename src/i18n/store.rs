//! Locale store: the single owner and writer of the current locale.
//!
//! Readers observe changes through a payload-less broadcast and re-read
//! `current_locale()` when notified.

use crate::i18n::{Locale, LocaleRegistry, LocaleStorage, LOCALE_STORAGE_KEY};
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

/// Queued notifications per subscriber before it starts lagging.
const CHANGE_CHANNEL_CAPACITY: usize = 16;

pub struct LocaleStore {
    current: RwLock<Locale>,
    available: Vec<Locale>,
    storage: Arc<dyn LocaleStorage>,
    changes: broadcast::Sender<()>,
}

impl LocaleStore {
    /// Pick the startup locale.
    ///
    /// Precedence: explicit override, persisted selection, primary subtag of
    /// the ambient tag, then the default locale. Unsupported values at any tier
    /// are skipped. Only reads from storage.
    pub fn resolve_initial(
        storage: &dyn LocaleStorage,
        override_code: Option<&str>,
        ambient_tag: Option<&str>,
    ) -> Locale {
        if let Some(code) = override_code {
            match Locale::from_code(code) {
                Ok(locale) => return locale,
                Err(e) => warn!("Ignoring locale override: {}", e),
            }
        }

        match storage.read(LOCALE_STORAGE_KEY) {
            Ok(Some(stored)) => match Locale::from_code(&stored) {
                Ok(locale) => return locale,
                Err(e) => debug!("Ignoring persisted locale: {}", e),
            },
            Ok(None) => {}
            Err(e) => warn!("Could not read persisted locale: {}", e),
        }

        if let Some(locale) = ambient_tag.and_then(Locale::from_lang_tag) {
            return locale;
        }

        Locale::default_locale()
    }

    /// Create a store holding `initial`.
    ///
    /// An empty `available` list means the registry's offered locales.
    /// Repeated entries keep only their first position.
    pub fn new(storage: Arc<dyn LocaleStorage>, initial: Locale, available: Vec<Locale>) -> Self {
        let available = if available.is_empty() {
            LocaleRegistry::get()
                .list_offered()
                .into_iter()
                .filter_map(|config| Locale::from_code(config.code).ok())
                .collect()
        } else {
            let mut unique: Vec<Locale> = Vec::with_capacity(available.len());
            for locale in available {
                if !unique.contains(&locale) {
                    unique.push(locale);
                }
            }
            unique
        };

        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);

        Self {
            current: RwLock::new(initial),
            available,
            storage,
            changes,
        }
    }

    /// Run the startup precedence chain and build the store from its result.
    pub fn initialize(
        storage: Arc<dyn LocaleStorage>,
        override_code: Option<&str>,
        ambient_tag: Option<&str>,
        available: Vec<Locale>,
    ) -> Self {
        let initial = Self::resolve_initial(storage.as_ref(), override_code, ambient_tag);
        info!("Starting with locale: {}", initial);
        Self::new(storage, initial, available)
    }

    pub fn current_locale(&self) -> Locale {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Switch to `code`, persist it and notify subscribers.
    ///
    /// Returns `false` and changes nothing if `code` is not supported.
    /// Persistence is best-effort.
    pub fn set_locale(&self, code: &str) -> bool {
        let locale = match Locale::from_code(code) {
            Ok(locale) => locale,
            Err(e) => {
                warn!("Ignoring locale change: {}", e);
                return false;
            }
        };

        *self.current.write().unwrap_or_else(PoisonError::into_inner) = locale;

        if let Err(e) = self.storage.write(LOCALE_STORAGE_KEY, locale.code()) {
            warn!("Could not persist locale \"{}\": {}", locale, e);
        }

        info!("Language changed to: {}", locale);
        self.notify();
        true
    }

    /// Locales offered by the language selector, in display order.
    pub fn available_locales(&self) -> &[Locale] {
        &self.available
    }

    /// Receive one `()` per successful locale change.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.changes.subscribe()
    }

    /// Adopt a locale written to storage by someone else.
    ///
    /// Returns `true` and notifies only if the stored value is supported and
    /// differs from the current one. Never writes to storage.
    pub fn sync_from_storage(&self) -> bool {
        let stored = match self.storage.read(LOCALE_STORAGE_KEY) {
            Ok(Some(stored)) => stored,
            Ok(None) => return false,
            Err(e) => {
                debug!("Skipping storage sync: {}", e);
                return false;
            }
        };

        let Ok(locale) = Locale::from_code(&stored) else {
            return false;
        };

        {
            let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
            if *current == locale {
                return false;
            }
            *current = locale;
        }

        info!("Language changed externally to: {}", locale);
        self.notify();
        true
    }

    fn notify(&self) {
        // No subscribers is not an error
        let _ = self.changes.send(());
    }
}

/// The ambient OS/user language tag, e.g. `"en-US"`.
pub fn detect_ambient_locale() -> Option<String> {
    sys_locale::get_locale()
}
