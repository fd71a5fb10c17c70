//! Human-Readable Formatters for speakhuman
//!
//! Turns numbers, byte counts, durations, dates and lists into phrases:
//!
//! - **Numbers**: `intcomma`, `intword`, `ordinal`, `apnumber`,
//!   `scientific`, `fractional`, `metric`, `clamp`
//! - **Byte sizes**: `naturalsize` in decimal, binary or GNU units
//! - **Durations and dates**: `naturaldelta`, `naturaltime`, `naturalday`,
//!   `naturaldate`, `precisedelta`
//! - **Lists**: `natural_list`
//!
//! Every formatter reads separators, plural forms and words from the active
//! locale of the calling thread (see [`speakhuman_i18n`]).
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::TimeDelta;
//! use speakhuman_format::prelude::*;
//!
//! assert_eq!(intcomma(1_000_000)?, "1,000,000");
//! assert_eq!(intword(1_200_000_000)?, "1.2 billion");
//! assert_eq!(ordinal(22)?, "22nd");
//! assert_eq!(naturalsize(3_000_000, false, false, "%.1f")?, "3.0 MB");
//! assert_eq!(naturaltime(TimeDelta::hours(3))?, "3 hours ago");
//! assert_eq!(natural_list(&["tea", "milk", "sugar"]), "tea, milk, and sugar");
//! # Ok::<(), speakhuman_format::FormatError>(())
//! ```
//!
//! # Inputs
//!
//! Numeric arguments take integers, floats or numeral strings through
//! [`IntoNumeric`]; strings that do not parse and non-finite floats fail
//! with [`FormatError::InvalidNumericInput`]. Durations take
//! `chrono::TimeDelta`, `std::time::Duration`, [`TimeSpan`] or a number of
//! seconds through [`IntoTimeSpan`].

pub mod error;
pub mod filesize;
pub mod lists;
pub mod number;
pub mod numeric;
pub mod precise;
pub mod printf;
pub mod time;

pub use error::FormatError;
pub use filesize::{UnitSystem, naturalsize, naturalsize_with};
pub use lists::natural_list;
pub use number::{
    Gender, apnumber, clamp, fractional, fractional_with, intcomma, intcomma_with, intword,
    intword_with, metric, ordinal, ordinal_gendered, scientific, scientific_superscript,
};
pub use numeric::{IntoNumeric, Numeric};
pub use precise::{precise_breakdown, precisedelta, precisedelta_with};
pub use printf::FloatFormat;
pub use time::{
    IntoTimeSpan, TimeSpan, Unit, naturaldate, naturaldate_from, naturaldelta,
    naturaldelta_with, naturalday, naturalday_from, naturaltime, naturaltime_between,
    naturaltime_with,
};

/// Result type for formatting operations
pub type Result<T> = std::result::Result<T, FormatError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        FormatError, Gender, IntoNumeric, IntoTimeSpan, Numeric, Result, TimeSpan, Unit,
        UnitSystem, apnumber, clamp, fractional, intcomma, intword, metric, natural_list,
        naturaldate, naturaldelta, naturalday, naturalsize, naturaltime, ordinal, precisedelta,
        scientific,
    };
}
