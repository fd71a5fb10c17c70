//! Error types for the formatters

use speakhuman_i18n::I18nError;
use thiserror::Error;

/// Errors returned by the formatting functions.
///
/// A formatter either returns the complete string or one of these; there are
/// no partial results.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Unparsable numeral, NaN or infinity
    #[error("Invalid numeric input: {0}")]
    InvalidNumericInput(String),

    /// Unknown unit name or unit not allowed for the operation
    #[error("Unsupported unit: {0}")]
    UnsupportedUnit(String),

    /// Malformed printf or strftime format string
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Locale resolution failed
    #[error(transparent)]
    Locale(#[from] I18nError),
}
