//! Locale consistency checker - compares every locale document against the
//! default locale and fails when keys are missing or mistyped.
//!
//! Usage:
//!   cargo run --bin check-locales                  # Check the embedded documents
//!   cargo run --bin check-locales -- path/to/dir   # Check <dir>/<code>.json files
//!
//! Optional:
//! - APOLLO_LOCALES_DIR (used when no directory argument is given)

use anyhow::{bail, Result};
use apollo_i18n::i18n::{
    DirectorySource, EmbeddedSource, Locale, LocaleConsistencyValidator, TranslationSource,
};
use tracing::{error, info, warn};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("check_locales=info".parse()?)
                .add_directive("apollo_i18n=info".parse()?),
        )
        .init();

    let dir = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("APOLLO_LOCALES_DIR").ok());

    let source: Box<dyn TranslationSource> = match dir {
        Some(dir) => {
            info!("Checking translation documents in {}", dir);
            Box::new(DirectorySource::new(dir))
        }
        None => {
            info!("Checking embedded translation documents");
            Box::new(EmbeddedSource)
        }
    };

    let report = LocaleConsistencyValidator::check_source(source.as_ref(), &Locale::all());

    for (locale, locale_report) in &report.locales {
        for message in &locale_report.errors {
            error!("[{}] {}", locale, message);
        }
        for message in &locale_report.warnings {
            warn!("[{}] {}", locale, message);
        }
        if locale_report.is_clean() {
            info!("[{}] ✓ consistent with the default locale", locale);
        }
    }

    if report.has_errors() {
        bail!(
            "{} errors, {} warnings across {} locales",
            report.error_count(),
            report.warning_count(),
            report.locales.len()
        );
    }

    info!(
        "✓ All locale documents consistent ({} warnings)",
        report.warning_count()
    );
    Ok(())
}
