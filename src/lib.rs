//! Locale store and translation resolver for the Apollo Automation website.

pub mod config;
pub mod i18n;
