use anyhow::{bail, Result};
use apollo_i18n::config::Config;
use apollo_i18n::i18n::{LanguageContext, LocaleConsistencyValidator};
use tracing::{info, warn};

/// Navigation entries: translation key and in-page anchor.
const NAV_ITEMS: [(&str, &str); 8] = [
    ("navigation.home", "#home"),
    ("navigation.about", "#about"),
    ("navigation.solutions", "#solutions"),
    ("navigation.technologies", "#technologies"),
    ("navigation.process", "#process"),
    ("navigation.caseStudies", "#case-studies"),
    ("navigation.faq", "#faq"),
    ("navigation.contact", "#contact"),
];

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("apollo_i18n=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let requested = requested_locale(std::env::args().skip(1))?;

    let context = LanguageContext::from_config(&config)?;

    let consistency = LocaleConsistencyValidator::check_source(
        context.resolver().source(),
        context.available_locales(),
    );
    if consistency.error_count() + consistency.warning_count() > 0 {
        warn!(
            "Locale documents have {} errors and {} warnings",
            consistency.error_count(),
            consistency.warning_count()
        );
    }

    let mut changes = context.subscribe();
    if let Some(code) = requested {
        if !context.set_locale(&code) {
            warn!("Locale \"{}\" is not supported, keeping {}", code, context.current_locale());
        }
    }
    while changes.try_recv().is_ok() {
        info!("Rendering with locale: {}", context.current_locale());
    }

    print_outline(&context);

    let metrics = context.resolver().metrics().report();
    info!(
        "Resolved page: {} table loads, {} missing keys, {:.0}% cache hit rate",
        metrics.table_loads, metrics.missing_keys, metrics.cache_hit_rate
    );

    Ok(())
}

/// Parse an optional `--locale <code>` (or `--locale=<code>`) argument.
fn requested_locale(mut args: impl Iterator<Item = String>) -> Result<Option<String>> {
    let mut requested = None;
    while let Some(arg) = args.next() {
        if arg == "--locale" {
            match args.next() {
                Some(code) => requested = Some(code),
                None => bail!("--locale requires a value"),
            }
        } else if let Some(code) = arg.strip_prefix("--locale=") {
            requested = Some(code.to_string());
        } else {
            bail!("Unknown argument: {}", arg);
        }
    }
    Ok(requested)
}

fn print_outline(context: &LanguageContext) {
    let t = context.translator();

    println!("{}", t.t("navigation.brand"));
    for (key, anchor) in NAV_ITEMS {
        println!("  {:<10} {}", anchor, t.t(key));
    }

    println!();
    println!("{}", t.t("hero.title"));
    println!("{}", t.t("hero.subtitle"));

    println!();
    println!("{}:", t.t("footer.languageSelector.selectLanguage"));
    let current = context.current_locale();
    for &locale in context.available_locales() {
        let marker = if locale == current { "*" } else { " " };
        println!("  {} {} ({})", marker, context.language_name(locale), locale);
    }
}
