//! Locale Support for speakhuman
//!
//! Provides the pieces the formatters localize through:
//!
//! - **Locale Context**: a per-thread active locale with scoped activation
//! - **Catalogs**: JSON message catalogs with separators and plural forms
//! - **Pluralization**: CLDR plural rules per language
//!
//! # Quick Start
//!
//! ```rust
//! use speakhuman_i18n::{activate, active, deactivate};
//!
//! activate("fr_FR", None)?;
//! let catalog = active();
//! assert_eq!(catalog.plural_with("days", 3.0, "3"), "3 jours");
//! assert_eq!(catalog.text("yesterday"), "hier");
//!
//! deactivate();
//! assert_eq!(active().text("yesterday"), "yesterday");
//! # Ok::<(), speakhuman_i18n::I18nError>(())
//! ```
//!
//! # Custom Catalogs
//!
//! `activate("pt_BR", Some(dir))` looks for `dir/pt_BR.json`, then
//! `dir/pt.json`, before trying the built-in catalogs (German, French,
//! Russian) and `SPEAKHUMAN_LOCALE_PATH`.

mod catalog;
mod config;
mod context;
mod error;
mod locale;
mod plural;

pub use catalog::{Catalog, fill};
pub use config::{I18nConfig, config};
pub use context::{
    LocaleGuard, activate, active, active_locale, deactivate, decimal_separator, resolve,
    scoped, thousands_separator, with_locale,
};
pub use error::I18nError;
pub use locale::Locale;
pub use plural::{PluralCategory, PluralRule};

/// Result type for locale operations
pub type Result<T> = std::result::Result<T, I18nError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Catalog, I18nError, Locale, PluralCategory, PluralRule, Result, activate, active,
        deactivate, decimal_separator, scoped, thousands_separator, with_locale,
    };
}
