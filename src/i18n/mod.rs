//! Internationalization (i18n) core for the site.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales
//! - `locale`: Validated `Locale` handle into the registry
//! - `table` / `source`: Translation documents and where they come from
//! - `resolver`: Dot-path lookups with caching and fallbacks
//! - `storage` / `store`: The persisted current locale and its change broadcast
//! - `context`: The shared handle page sections resolve strings through
//! - `validator`: Key-set consistency check across locale documents
//! - `metrics`: Resolver cache and fallback counters
//!
//! # Example
//!
//! ```rust,ignore
//! use apollo_i18n::i18n::LanguageContext;
//!
//! let context = LanguageContext::from_config(&config)?;
//! let title = context.t("hero.title");
//! context.set_locale("es");
//! ```

mod context;
mod error;
mod locale;
mod metrics;
mod registry;
mod resolver;
mod source;
mod storage;
mod store;
mod table;
mod validator;

pub use context::{LanguageContext, Translator};
pub use error::I18nError;
pub use locale::Locale;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use resolver::TranslationResolver;
pub use source::{DirectorySource, EmbeddedSource, MemorySource, TranslationSource};
pub use storage::{FileStorage, LocaleStorage, MemoryStorage, UnavailableStorage, LOCALE_STORAGE_KEY};
pub use store::{detect_ambient_locale, LocaleStore};
pub use table::{LeafKind, TranslationTable};
pub use validator::{ConsistencyReport, LocaleConsistencyValidator, ValidationReport};
