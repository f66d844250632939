use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Locale forced at startup, ahead of the persisted and ambient locales
    pub locale_override: Option<String>,

    /// Read translation documents from this directory instead of the embedded set
    pub locales_dir: Option<PathBuf>,

    /// File holding the persisted locale selection
    pub state_file: PathBuf,

    /// Locales offered by the language selector; empty means the registry default
    pub available_locales: Vec<String>,

    /// Refuse to start when locale documents are inconsistent
    pub strict_locales: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            locale_override: std::env::var("APOLLO_LOCALE")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),

            locales_dir: std::env::var("APOLLO_LOCALES_DIR").ok().map(PathBuf::from),

            state_file: std::env::var("APOLLO_STATE_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".apollo/state.json")),

            available_locales: std::env::var("APOLLO_AVAILABLE_LOCALES")
                .map(|v| parse_locale_list(&v))
                .unwrap_or_default(),

            strict_locales: match std::env::var("APOLLO_STRICT_LOCALES") {
                Ok(v) => parse_bool(&v).context("APOLLO_STRICT_LOCALES must be true or false")?,
                Err(_) => false,
            },
        })
    }
}

fn parse_locale_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|code| code.trim().to_string())
        .filter(|code| !code.is_empty())
        .collect()
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        other => anyhow::bail!("invalid boolean: {}", other),
    }
}
