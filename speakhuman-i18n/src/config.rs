//! Environment configuration for catalog lookup.

use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;

static CONFIG: Lazy<I18nConfig> = Lazy::new(I18nConfig::from_env);

/// Settings read once from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct I18nConfig {
    /// Directory searched after the built-in catalogs (`SPEAKHUMAN_LOCALE_PATH`).
    pub locale_path: Option<PathBuf>,
}

impl I18nConfig {
    /// Read settings from environment variables.
    ///
    /// - `SPEAKHUMAN_LOCALE_PATH`: extra directory of `<tag>.json` catalogs
    pub fn from_env() -> Self {
        let locale_path = env::var_os("SPEAKHUMAN_LOCALE_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        Self { locale_path }
    }

    /// Set the fallback catalog directory.
    pub fn with_locale_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.locale_path = Some(path.into());
        self
    }
}

/// Process-wide configuration, read on first use.
pub fn config() -> &'static I18nConfig {
    &CONFIG
}
