//! Numeric input
//!
//! Formatters accept integers, floats and numeral strings interchangeably.
//! The input is resolved once into a [`Numeric`] at the function boundary.

use crate::{FormatError, Result};
use std::fmt;
use std::str::FromStr;

/// A resolved numeric input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    /// Integral input; every primitive integer up to `i128` fits
    Int(i128),
    /// Floating-point input, always finite
    Float(f64),
}

impl Numeric {
    /// Parse a numeral.
    ///
    /// Integers become [`Numeric::Int`]; anything else that parses as a
    /// finite float becomes [`Numeric::Float`]. Surrounding whitespace and
    /// `_` digit separators are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use speakhuman_format::Numeric;
    ///
    /// assert_eq!(Numeric::parse("1_000").unwrap(), Numeric::Int(1000));
    /// assert_eq!(Numeric::parse("2.5").unwrap(), Numeric::Float(2.5));
    /// assert!(Numeric::parse("NaN").is_err());
    /// assert!(Numeric::parse("ten").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let cleaned: String = s.trim().chars().filter(|&c| c != '_').collect();
        if let Ok(i) = cleaned.parse::<i128>() {
            return Ok(Self::Int(i));
        }
        match cleaned.parse::<f64>() {
            Ok(f) => Self::finite(f).map_err(|_| FormatError::InvalidNumericInput(s.to_string())),
            Err(_) => Err(FormatError::InvalidNumericInput(s.to_string())),
        }
    }

    /// Wrap a float, rejecting NaN and infinities.
    pub fn finite(value: f64) -> Result<Self> {
        if value.is_finite() {
            Ok(Self::Float(value))
        } else {
            Err(FormatError::InvalidNumericInput(value.to_string()))
        }
    }

    /// Value as a float.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// Value truncated toward zero, saturating at the `i128` bounds.
    pub fn as_i128(self) -> i128 {
        match self {
            Self::Int(i) => i,
            Self::Float(f) => f.trunc() as i128,
        }
    }

    /// Integer part as decimal digits, exact for every finite value.
    ///
    /// # Example
    ///
    /// ```
    /// use speakhuman_format::Numeric;
    ///
    /// assert_eq!(Numeric::Float(1e20).whole_digits(), "100000000000000000000");
    /// assert_eq!(Numeric::Float(-0.5).whole_digits(), "0");
    /// ```
    pub fn whole_digits(self) -> String {
        match self {
            Self::Int(i) => i.to_string(),
            Self::Float(f) => {
                let whole = f.trunc();
                if whole == 0.0 {
                    "0".to_string()
                } else {
                    format!("{:.0}", whole)
                }
            }
        }
    }

    /// Whether the value is below zero.
    pub fn is_negative(self) -> bool {
        match self {
            Self::Int(i) => i < 0,
            Self::Float(f) => f < 0.0,
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
        }
    }
}

impl FromStr for Numeric {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Conversion into a [`Numeric`] at a formatter's boundary.
pub trait IntoNumeric {
    /// Resolve the input, failing on unparsable or non-finite values.
    fn into_numeric(self) -> Result<Numeric>;
}

macro_rules! impl_into_numeric_int {
    ($($t:ty),*) => {
        $(
            impl IntoNumeric for $t {
                fn into_numeric(self) -> Result<Numeric> {
                    Ok(Numeric::Int(i128::from(self)))
                }
            }
        )*
    };
}

macro_rules! impl_into_numeric_wide_int {
    ($($t:ty),*) => {
        $(
            impl IntoNumeric for $t {
                fn into_numeric(self) -> Result<Numeric> {
                    Ok(match i128::try_from(self) {
                        Ok(i) => Numeric::Int(i),
                        Err(_) => Numeric::Float(self as f64),
                    })
                }
            }
        )*
    };
}

impl_into_numeric_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);
impl_into_numeric_wide_int!(isize, usize, u128);

impl IntoNumeric for f64 {
    fn into_numeric(self) -> Result<Numeric> {
        Numeric::finite(self)
    }
}

impl IntoNumeric for f32 {
    fn into_numeric(self) -> Result<Numeric> {
        Numeric::finite(f64::from(self))
    }
}

impl IntoNumeric for &str {
    fn into_numeric(self) -> Result<Numeric> {
        Numeric::parse(self)
    }
}

impl IntoNumeric for String {
    fn into_numeric(self) -> Result<Numeric> {
        Numeric::parse(&self)
    }
}

impl IntoNumeric for &String {
    fn into_numeric(self) -> Result<Numeric> {
        Numeric::parse(self)
    }
}

impl IntoNumeric for Numeric {
    fn into_numeric(self) -> Result<Numeric> {
        match self {
            Self::Float(f) => Numeric::finite(f),
            int => Ok(int),
        }
    }
}
