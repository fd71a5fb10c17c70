//! Byte Sizes
//!
//! Scales a byte count into a value and unit under one of three unit
//! systems.
//!
//! | System  | Base | Suffixes            |
//! |---------|------|---------------------|
//! | Decimal | 1000 | ` kB`, ` MB`, ...   |
//! | Binary  | 1024 | ` KiB`, ` MiB`, ... |
//! | Gnu     | 1024 | `K`, `M`, ...       |

use crate::printf::FloatFormat;
use crate::{FormatError, IntoNumeric, Result};
use serde::{Deserialize, Serialize};
use speakhuman_i18n::active;
use std::fmt;
use std::str::FromStr;

const SUFFIXES_DECIMAL: [&str; 10] = [
    " kB", " MB", " GB", " TB", " PB", " EB", " ZB", " YB", " RB", " QB",
];
const SUFFIXES_BINARY: [&str; 10] = [
    " KiB", " MiB", " GiB", " TiB", " PiB", " EiB", " ZiB", " YiB", " RiB", " QiB",
];
const SUFFIXES_GNU: [&str; 10] = ["K", "M", "G", "T", "P", "E", "Z", "Y", "R", "Q"];

/// Unit system for [`naturalsize_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Powers of 1000, SI suffixes
    #[default]
    Decimal,
    /// Powers of 1024, IEC suffixes
    Binary,
    /// Powers of 1024, single-letter suffixes as printed by GNU tools
    Gnu,
}

impl UnitSystem {
    /// Pick the system from the two flags; `gnu` wins over `binary`.
    pub fn from_flags(binary: bool, gnu: bool) -> Self {
        if gnu {
            Self::Gnu
        } else if binary {
            Self::Binary
        } else {
            Self::Decimal
        }
    }

    /// Divisor between successive units.
    pub fn base(&self) -> f64 {
        match self {
            Self::Decimal => 1000.0,
            Self::Binary | Self::Gnu => 1024.0,
        }
    }

    fn suffixes(&self) -> &'static [&'static str; 10] {
        match self {
            Self::Decimal => &SUFFIXES_DECIMAL,
            Self::Binary => &SUFFIXES_BINARY,
            Self::Gnu => &SUFFIXES_GNU,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Binary => "binary",
            Self::Gnu => "gnu",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "decimal" | "si" => Ok(Self::Decimal),
            "binary" | "iec" => Ok(Self::Binary),
            "gnu" => Ok(Self::Gnu),
            _ => Err(FormatError::UnsupportedUnit(s.to_string())),
        }
    }
}

/// Format a byte count like a file size.
///
/// `gnu` takes precedence over `binary`; with neither, decimal units are
/// used. `format` is a printf-style format for the scaled value.
///
/// # Example
///
/// ```
/// use speakhuman_format::filesize::naturalsize;
///
/// assert_eq!(naturalsize(3_000_000, false, false, "%.1f").unwrap(), "3.0 MB");
/// assert_eq!(naturalsize(3000, true, false, "%.1f").unwrap(), "2.9 KiB");
/// assert_eq!(naturalsize(300, false, true, "%.1f").unwrap(), "300B");
/// ```
pub fn naturalsize(value: impl IntoNumeric, binary: bool, gnu: bool, format: &str) -> Result<String> {
    naturalsize_with(value, UnitSystem::from_flags(binary, gnu), format)
}

/// Format a byte count in an explicit unit system.
pub fn naturalsize_with(value: impl IntoNumeric, system: UnitSystem, format: &str) -> Result<String> {
    let number = value.into_numeric()?;
    let fmt = FloatFormat::parse(format)?;
    let catalog = active();

    let bytes = number.as_f64();
    let magnitude = bytes.abs();
    let base = system.base();

    if magnitude < base {
        let count = number.as_i128();
        return Ok(match system {
            UnitSystem::Gnu => format!("{}B", count),
            _ => catalog.plural_with("bytes", count.unsigned_abs() as f64, &count.to_string()),
        });
    }

    let suffixes = system.suffixes();
    let mut scaled = magnitude / base;
    let mut unit = 0;
    while scaled >= base && unit + 1 < suffixes.len() {
        scaled /= base;
        unit += 1;
    }

    // 999.95 kB shown as "1000.0 kB" becomes "1.0 MB"
    if fmt.round(scaled) >= base && unit + 1 < suffixes.len() {
        scaled /= base;
        unit += 1;
    }

    let sign = if number.is_negative() { "-" } else { "" };
    Ok(format!(
        "{}{}{}",
        sign,
        fmt.format_localized(scaled, catalog.decimal_separator()),
        suffixes[unit]
    ))
}
