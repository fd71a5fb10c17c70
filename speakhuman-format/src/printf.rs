//! printf-style float formats
//!
//! `naturalsize`, `intword` and `precisedelta` take their number format as a
//! printf string such as `"%.1f"` or `"%0.2f"`. Exactly one conversion is
//! allowed; text around it is kept.
//!
//! Supported conversions: `f`/`F` (fixed), `d`/`i` (truncated integer),
//! `e`/`E` (exponent, at least two exponent digits). Flags `-`, `+`, `0` and
//! space, a width and a precision may precede the conversion. `%%` is a
//! literal percent sign.

use crate::{FormatError, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    Fixed,
    Integer,
    Exponent { upper: bool },
}

/// A parsed printf format with a single float conversion.
///
/// # Example
///
/// ```
/// use speakhuman_format::FloatFormat;
///
/// let fmt = FloatFormat::parse("%.2f").unwrap();
/// assert_eq!(fmt.format(3.14159), "3.14");
/// assert_eq!(fmt.round(2.675), 2.67);
///
/// let fmt = FloatFormat::parse("~%d items").unwrap();
/// assert_eq!(fmt.format(12.9), "~12 items");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatFormat {
    prefix: String,
    suffix: String,
    left_align: bool,
    plus: bool,
    space: bool,
    zero_pad: bool,
    width: usize,
    precision: Option<usize>,
    conversion: Conversion,
}

impl FloatFormat {
    /// Parse a format string.
    pub fn parse(fmt: &str) -> Result<Self> {
        let invalid = |reason: &str| FormatError::InvalidFormat(format!("{:?}: {}", fmt, reason));

        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut parsed: Option<Self> = None;
        let mut chars = fmt.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                if parsed.is_some() {
                    suffix.push(c);
                } else {
                    prefix.push(c);
                }
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                if parsed.is_some() {
                    suffix.push('%');
                } else {
                    prefix.push('%');
                }
                continue;
            }
            if parsed.is_some() {
                return Err(invalid("more than one conversion"));
            }

            let mut spec = Self {
                prefix: String::new(),
                suffix: String::new(),
                left_align: false,
                plus: false,
                space: false,
                zero_pad: false,
                width: 0,
                precision: None,
                conversion: Conversion::Fixed,
            };

            while let Some(&flag) = chars.peek() {
                match flag {
                    '-' => spec.left_align = true,
                    '+' => spec.plus = true,
                    ' ' => spec.space = true,
                    '0' => spec.zero_pad = true,
                    '#' => {}
                    _ => break,
                }
                chars.next();
            }

            let mut width = String::new();
            while let Some(&d) = chars.peek().filter(|d| d.is_ascii_digit()) {
                width.push(d);
                chars.next();
            }
            if !width.is_empty() {
                spec.width = width.parse().map_err(|_| invalid("width out of range"))?;
            }

            if chars.peek() == Some(&'.') {
                chars.next();
                let mut precision = String::new();
                while let Some(&d) = chars.peek().filter(|d| d.is_ascii_digit()) {
                    precision.push(d);
                    chars.next();
                }
                // "%.f" means precision 0
                spec.precision = Some(if precision.is_empty() {
                    0
                } else {
                    precision.parse().map_err(|_| invalid("precision out of range"))?
                });
            }

            spec.conversion = match chars.next() {
                Some('f') | Some('F') => Conversion::Fixed,
                Some('d') | Some('i') => Conversion::Integer,
                Some('e') => Conversion::Exponent { upper: false },
                Some('E') => Conversion::Exponent { upper: true },
                Some(other) => return Err(invalid(&format!("unsupported conversion '{}'", other))),
                None => return Err(invalid("incomplete conversion")),
            };
            parsed = Some(spec);
        }

        let mut spec = parsed.ok_or_else(|| invalid("no conversion"))?;
        spec.prefix = prefix;
        spec.suffix = suffix;
        Ok(spec)
    }

    /// Format a value, including the surrounding literal text.
    pub fn format(&self, value: f64) -> String {
        format!("{}{}{}", self.prefix, self.number(value), self.suffix)
    }

    /// Like [`format`](Self::format), with `decimal` as the decimal separator.
    pub fn format_localized(&self, value: f64, decimal: char) -> String {
        let number = self.number(value);
        let number = if decimal == '.' {
            number
        } else {
            number.replace('.', &decimal.to_string())
        };
        format!("{}{}{}", self.prefix, number, self.suffix)
    }

    /// Round a value the way [`format`](Self::format) displays it.
    pub fn round(&self, value: f64) -> f64 {
        let shown = self.digits(value);
        shown.parse().unwrap_or(value)
    }

    /// The converted number with sign, width and padding applied.
    pub(crate) fn number(&self, value: f64) -> String {
        let digits = self.digits(value);
        let (negative, magnitude) = match digits.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, digits.as_str()),
        };

        let sign = if negative {
            "-"
        } else if self.plus {
            "+"
        } else if self.space {
            " "
        } else {
            ""
        };

        let len = sign.chars().count() + magnitude.chars().count();
        let pad = self.width.saturating_sub(len);
        if pad == 0 {
            format!("{}{}", sign, magnitude)
        } else if self.left_align {
            format!("{}{}{}", sign, magnitude, " ".repeat(pad))
        } else if self.zero_pad {
            format!("{}{}{}", sign, "0".repeat(pad), magnitude)
        } else {
            format!("{}{}{}", " ".repeat(pad), sign, magnitude)
        }
    }

    fn digits(&self, value: f64) -> String {
        match self.conversion {
            Conversion::Fixed => {
                format!("{:.prec$}", value, prec = self.precision.unwrap_or(6))
            }
            Conversion::Integer => format!("{}", value.trunc() as i64),
            Conversion::Exponent { upper } => {
                let rendered = exponent(value, self.precision.unwrap_or(6));
                if upper { rendered.to_uppercase() } else { rendered }
            }
        }
    }
}

impl FromStr for FloatFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// `value` as `"{mantissa}e{sign}{exponent:02}"`, e.g. `1.00e+03`.
pub(crate) fn exponent(value: f64, precision: usize) -> String {
    let (mantissa, exp) = split_exponent(value, precision);
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
}

/// Mantissa text and exponent of `value` in scientific notation.
pub(crate) fn split_exponent(value: f64, precision: usize) -> (String, i32) {
    let rendered = format!("{:.prec$e}", value, prec = precision);
    match rendered.split_once('e') {
        Some((mantissa, exp)) => (mantissa.to_string(), exp.parse().unwrap_or(0)),
        None => (rendered, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed() {
        assert_eq!(FloatFormat::parse("%.1f").unwrap().format(2.93), "2.9");
        assert_eq!(FloatFormat::parse("%0.2f").unwrap().format(33.123), "33.12");
        assert_eq!(FloatFormat::parse("%f").unwrap().format(1.5), "1.500000");
        assert_eq!(FloatFormat::parse("%.f").unwrap().format(2.5), "2");
        assert_eq!(FloatFormat::parse("%.0f").unwrap().format(3.5), "4");
    }

    #[test]
    fn test_width_and_flags() {
        assert_eq!(FloatFormat::parse("%6.2f").unwrap().format(3.14159), "  3.14");
        assert_eq!(FloatFormat::parse("%-6.1f|").unwrap().format(3.14159), "3.1   |");
        assert_eq!(FloatFormat::parse("%06.1f").unwrap().format(-3.14159), "-003.1");
        assert_eq!(FloatFormat::parse("%+.1f").unwrap().format(3.0), "+3.0");
    }

    #[test]
    fn test_integer_truncates() {
        let fmt = FloatFormat::parse("%d").unwrap();
        assert_eq!(fmt.format(1.999999999999999), "1");
        assert_eq!(fmt.format(-2.7), "-2");
        assert_eq!(fmt.round(1.9), 1.0);
    }

    #[test]
    fn test_exponent() {
        assert_eq!(FloatFormat::parse("%.2e").unwrap().format(1000.0), "1.00e+03");
        assert_eq!(FloatFormat::parse("%.1E").unwrap().format(0.00012), "1.2E-04");
        assert_eq!(exponent(1e120, 2), "1.00e+120");
    }

    #[test]
    fn test_literal_text() {
        let fmt = FloatFormat::parse("about %.1f%%").unwrap();
        assert_eq!(fmt.format(12.345), "about 12.3%");
    }

    #[test]
    fn test_rejects_bad_formats() {
        for fmt in ["", "%", "no conversion", "%.2f %.2f", "%s", "%.2"] {
            assert!(
                matches!(FloatFormat::parse(fmt), Err(FormatError::InvalidFormat(_))),
                "{:?} should be rejected",
                fmt
            );
        }
    }

    #[test]
    fn test_round() {
        let fmt = FloatFormat::parse("%.2f").unwrap();
        assert_eq!(fmt.round(33.123), 33.12);
        assert_eq!(fmt.round(59.999), 60.0);
    }
}
