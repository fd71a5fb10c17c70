// speakhuman - Human-readable, locale-aware formatting for Rust
//
// Turns numbers, byte counts, durations, dates and lists into phrases such as
// "1.2 million", "3.0 MB", "2 days ago" and "a, b, and c".

// Re-export the formatters
pub use speakhuman_format::*;

// Re-export locale handling
pub use speakhuman_i18n::{
    Catalog, I18nConfig, I18nError, Locale, LocaleGuard, PluralCategory, PluralRule, activate,
    active, active_locale, deactivate, decimal_separator, scoped, thousands_separator,
    with_locale,
};

// Re-export the supporting crates
pub use speakhuman_i18n as i18n;
pub use speakhuman_log as logging;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        FormatError,
        I18nError,
        IntoNumeric,
        IntoTimeSpan,
        LocaleGuard,
        Result,
        TimeSpan,
        Unit,
        UnitSystem,
        activate,
        apnumber,
        clamp,
        deactivate,
        fractional,
        intcomma,
        intword,
        metric,
        natural_list,
        naturaldate,
        naturaldelta,
        naturalday,
        naturalsize,
        naturaltime,
        ordinal,
        precisedelta,
        scientific,
        scoped,
        with_locale,
    };
}
