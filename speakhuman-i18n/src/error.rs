//! Error types for locale and catalog operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving locales or loading catalogs.
#[derive(Debug, Error)]
pub enum I18nError {
    /// No catalog matches the tag
    #[error("Locale not found: {tag} (searched {searched:?})")]
    LocaleNotFound { tag: String, searched: Vec<PathBuf> },

    /// Invalid locale string
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    /// Catalog content is malformed
    #[error("Failed to parse catalog: {0}")]
    ParseError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parse error
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid plural category
    #[error("Invalid plural category: {0}")]
    InvalidPluralCategory(String),
}
