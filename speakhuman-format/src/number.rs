//! Number Formatting
//!
//! Locale-aware renderings of numbers: digit grouping, short-scale words,
//! ordinals, spelled-out digits, scientific and SI notation, fractions and
//! clamped ranges.
//!
//! # Examples
//!
//! ```
//! use speakhuman_format::number::{intcomma, intword, ordinal};
//!
//! assert_eq!(intcomma(1_000_000).unwrap(), "1,000,000");
//! assert_eq!(intword(1_200_000_000u64).unwrap(), "1.2 billion");
//! assert_eq!(ordinal(111).unwrap(), "111th");
//! ```

use crate::printf::{FloatFormat, split_exponent};
use crate::{FormatError, IntoNumeric, Numeric, Result};
use serde::{Deserialize, Serialize};
use speakhuman_i18n::active;
use speakhuman_log::trace;
use std::str::FromStr;

/// Short-scale powers and the catalog keys of their words.
const POWERS: &[(f64, &str)] = &[
    (1e3, "thousand"),
    (1e6, "million"),
    (1e9, "billion"),
    (1e12, "trillion"),
    (1e15, "quadrillion"),
    (1e18, "quintillion"),
    (1e21, "sextillion"),
    (1e24, "septillion"),
    (1e27, "octillion"),
    (1e30, "nonillion"),
    (1e33, "decillion"),
    (1e100, "googol"),
];

const DIGIT_WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const SI_LARGE: [&str; 10] = ["k", "M", "G", "T", "P", "E", "Z", "Y", "R", "Q"];
const SI_SMALL: [&str; 10] = ["m", "\u{3bc}", "n", "p", "f", "a", "z", "y", "r", "q"];

/// Units written directly after the number.
const UNSPACED_UNITS: [&str; 3] = ["\u{b0}", "\u{2032}", "\u{2033}"];

// ============================================================================
// Digit Grouping
// ============================================================================

/// Insert `sep` every three digits from the right.
fn add_grouping(digits: &str, sep: char) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let len = chars.len();

    if len <= 3 {
        return digits.to_string();
    }

    let mut result = String::with_capacity(len + (len - 1) / 3);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(sep);
        }
        result.push(*c);
    }
    result
}

/// Group the integer part of a plain decimal string and swap in the locale's
/// decimal separator.
pub(crate) fn localize_decimal(number: &str, thousands: char, decimal: char) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut result = format!("{}{}", sign, add_grouping(int_part, thousands));
    if let Some(frac) = frac_part {
        result.push(decimal);
        result.push_str(frac);
    }
    result
}

/// Round a plain decimal string to `places` fractional digits, ties to even,
/// dropping trailing zeros.
fn round_half_even(number: &str, places: usize) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    let kept = frac_part.len().min(places);
    digits.extend(frac_part[..kept].bytes().map(|b| b - b'0'));

    if frac_part.len() > places {
        let next = frac_part.as_bytes()[places] - b'0';
        let sticky = frac_part[places + 1..].bytes().any(|b| b != b'0');
        let last_odd = digits.last().is_some_and(|d| d % 2 == 1);
        if next > 5 || (next == 5 && (sticky || last_odd)) {
            let mut i = digits.len();
            loop {
                if i == 0 {
                    digits.insert(0, 1);
                    break;
                }
                i -= 1;
                if digits[i] == 9 {
                    digits[i] = 0;
                } else {
                    digits[i] += 1;
                    break;
                }
            }
        }
    }

    let int_len = digits.len() - kept;
    let int_digits: String = digits[..int_len].iter().map(|d| char::from(b'0' + d)).collect();
    let frac_digits: String = digits[int_len..].iter().map(|d| char::from(b'0' + d)).collect();
    let frac_digits = frac_digits.trim_end_matches('0');

    let is_zero = int_digits.bytes().all(|b| b == b'0') && frac_digits.is_empty();
    let sign = if is_zero { "" } else { sign };
    if frac_digits.is_empty() {
        format!("{}{}", sign, int_digits)
    } else {
        format!("{}{}.{}", sign, int_digits, frac_digits)
    }
}

/// Format a number with the active locale's thousands separator.
///
/// Floats keep at most two fractional digits, rounded half to even;
/// trailing zeros are dropped.
///
/// # Example
///
/// ```
/// use speakhuman_format::number::intcomma;
///
/// assert_eq!(intcomma(4500).unwrap(), "4,500");
/// assert_eq!(intcomma(-1234567.891).unwrap(), "-1,234,567.89");
/// assert_eq!(intcomma("1000000").unwrap(), "1,000,000");
/// ```
pub fn intcomma(value: impl IntoNumeric) -> Result<String> {
    let number = match value.into_numeric()? {
        Numeric::Int(i) => i.to_string(),
        Numeric::Float(f) => round_half_even(&f.to_string(), 2),
    };
    let catalog = active();
    Ok(localize_decimal(
        &number,
        catalog.thousands_separator(),
        catalog.decimal_separator(),
    ))
}

/// Like [`intcomma`], always showing exactly `ndigits` fractional digits.
///
/// # Example
///
/// ```
/// use speakhuman_format::number::intcomma_with;
///
/// assert_eq!(intcomma_with(1234567.1234567, 1).unwrap(), "1,234,567.1");
/// assert_eq!(intcomma_with(1234567, 2).unwrap(), "1,234,567.00");
/// ```
pub fn intcomma_with(value: impl IntoNumeric, ndigits: usize) -> Result<String> {
    let number = match value.into_numeric()? {
        Numeric::Int(i) if ndigits == 0 => i.to_string(),
        Numeric::Int(i) => format!("{}.{}", i, "0".repeat(ndigits)),
        Numeric::Float(f) => format!("{:.prec$}", f, prec = ndigits),
    };
    let catalog = active();
    Ok(localize_decimal(
        &number,
        catalog.thousands_separator(),
        catalog.decimal_separator(),
    ))
}

// ============================================================================
// Words
// ============================================================================

/// Express a large number with a short-scale word, e.g. "1.2 million".
///
/// Values below one thousand are returned as plain integers.
pub fn intword(value: impl IntoNumeric) -> Result<String> {
    intword_with(value, "%.1f")
}

/// Like [`intword`] with a printf-style format for the coefficient.
///
/// # Example
///
/// ```
/// use speakhuman_format::number::intword_with;
///
/// assert_eq!(intword_with(1_230_000, "%0.2f").unwrap(), "1.23 million");
/// assert_eq!(intword_with(999_500, "%.0f").unwrap(), "1 million");
/// ```
pub fn intword_with(value: impl IntoNumeric, format: &str) -> Result<String> {
    let number = value.into_numeric()?;
    let fmt = FloatFormat::parse(format)?;

    let magnitude = number.as_f64().abs();
    if magnitude < POWERS[0].0 {
        return Ok(number.as_i128().to_string());
    }

    let mut index = POWERS
        .iter()
        .rposition(|(power, _)| *power <= magnitude)
        .unwrap_or(0);
    let mut coefficient = fmt.round(magnitude / POWERS[index].0);

    // 999.95 thousand shown as "1000.0 thousand" becomes "1.0 million"
    if coefficient >= 1000.0 {
        if let Some((next, _)) = POWERS.get(index + 1) {
            if (next / POWERS[index].0 - 1000.0).abs() < 1e-6 {
                index += 1;
                coefficient = fmt.round(magnitude / next);
            }
        }
    }

    let catalog = active();
    let (_, key) = POWERS[index];
    let word = catalog.plural(key, coefficient.ceil());
    let sign = if number.is_negative() { "-" } else { "" };
    trace!("intword {} -> {} {}", number, coefficient, key);

    Ok(format!(
        "{}{} {}",
        sign,
        fmt.format_localized(coefficient, catalog.decimal_separator()),
        word
    ))
}

/// Grammatical gender for ordinal suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Masculine suffixes
    #[default]
    Male,
    /// Feminine suffixes
    Female,
}

impl Gender {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "male" | "masculine" | "m" => Ok(Self::Male),
            "female" | "feminine" | "f" => Ok(Self::Female),
            _ => Err(FormatError::InvalidFormat(format!("unknown gender: {}", s))),
        }
    }
}

/// Append the ordinal suffix: "1st", "2nd", "3rd", "11th".
pub fn ordinal(value: impl IntoNumeric) -> Result<String> {
    ordinal_gendered(value, Gender::Male)
}

/// Append the ordinal suffix for a grammatical gender.
///
/// Fractions are truncated toward zero. A catalog may give a distinct
/// suffix for exactly one (`ordinal.<gender>.one`), as French does with
/// "1er" against "21e".
///
/// # Example
///
/// ```
/// use speakhuman_format::number::{ordinal_gendered, Gender};
/// use speakhuman_i18n::with_locale;
///
/// let first = with_locale("fr_FR", None, || ordinal_gendered(1, Gender::Female)).unwrap();
/// assert_eq!(first.unwrap(), "1re");
/// ```
pub fn ordinal_gendered(value: impl IntoNumeric, gender: Gender) -> Result<String> {
    let digits = value.into_numeric()?.whole_digits();
    let unsigned = digits.trim_start_matches('-');
    let tail: u32 = unsigned[unsigned.len().saturating_sub(2)..]
        .parse()
        .unwrap_or(0);

    let catalog = active();
    let one = format!("ordinal.{}.one", gender.as_str());
    let key = if unsigned == "1" && catalog.has(&one) {
        one
    } else if (11..=13).contains(&tail) {
        format!("ordinal.{}.teen", gender.as_str())
    } else {
        format!("ordinal.{}.{}", gender.as_str(), tail % 10)
    };
    Ok(format!("{}{}", digits, catalog.text(&key)))
}

/// Spell out 0 through 9; other numbers are returned as digits.
///
/// # Example
///
/// ```
/// use speakhuman_format::number::apnumber;
///
/// assert_eq!(apnumber(5).unwrap(), "five");
/// assert_eq!(apnumber(10).unwrap(), "10");
/// ```
pub fn apnumber(value: impl IntoNumeric) -> Result<String> {
    let number = value.into_numeric()?;
    match usize::try_from(number.as_i128()).ok().and_then(|i| DIGIT_WORDS.get(i)) {
        Some(key) => Ok(active().text(key).to_string()),
        None => Ok(number.whole_digits()),
    }
}

// ============================================================================
// Notation
// ============================================================================

/// Scientific notation with `precision` mantissa digits: `"1.00e+03"`.
///
/// # Example
///
/// ```
/// use speakhuman_format::number::scientific;
///
/// assert_eq!(scientific(1000, 2).unwrap(), "1.00e+03");
/// assert_eq!(scientific(0.3, 1).unwrap(), "3.0e-01");
/// ```
pub fn scientific(value: impl IntoNumeric, precision: usize) -> Result<String> {
    let f = value.into_numeric()?.as_f64();
    let (mantissa, exp) = split_exponent(f, precision);
    let sign = if exp < 0 { '-' } else { '+' };
    Ok(format!(
        "{}e{}{:02}",
        localize_mantissa(&mantissa),
        sign,
        exp.unsigned_abs()
    ))
}

/// Scientific notation with a superscript exponent: `"1.00 x 10³"`.
///
/// # Example
///
/// ```
/// use speakhuman_format::number::scientific_superscript;
///
/// assert_eq!(scientific_superscript(0.3, 2).unwrap(), "3.00 x 10⁻¹");
/// ```
pub fn scientific_superscript(value: impl IntoNumeric, precision: usize) -> Result<String> {
    let f = value.into_numeric()?.as_f64();
    let (mantissa, exp) = split_exponent(f, precision);
    Ok(format!(
        "{} x 10{}",
        localize_mantissa(&mantissa),
        superscript(exp)
    ))
}

fn localize_mantissa(mantissa: &str) -> String {
    let decimal = active().decimal_separator();
    if decimal == '.' {
        mantissa.to_string()
    } else {
        mantissa.replace('.', &decimal.to_string())
    }
}

fn superscript(exp: i32) -> String {
    exp.to_string()
        .chars()
        .map(|c| match c {
            '-' => '\u{207b}',
            '0' => '\u{2070}',
            '1' => '\u{b9}',
            '2' => '\u{b2}',
            '3' => '\u{b3}',
            d => char::from_u32(0x2070 + d.to_digit(10).unwrap_or(0)).unwrap_or(d),
        })
        .collect()
}

/// Best rational approximation of `x` in [0, 1) with denominator at most
/// `max_denominator`, by continued fractions.
fn limit_denominator(x: f64, max_denominator: u64) -> (u64, u64) {
    const TOLERANCE: f64 = 1e-9;

    if x < TOLERANCE {
        return (0, 1);
    }

    let (mut p0, mut q0, mut p1, mut q1) = (0u64, 1u64, 1u64, 0u64);
    let mut rest = x;
    loop {
        let a = rest.floor();
        let q2 = q0 + a as u64 * q1;
        if q2 > max_denominator {
            break;
        }
        let p2 = p0 + a as u64 * p1;
        (p0, q0, p1, q1) = (p1, q1, p2, q2);

        let frac = rest - a;
        if frac < TOLERANCE || (p1 as f64 / q1 as f64 - x).abs() < TOLERANCE {
            return (p1, q1);
        }
        rest = 1.0 / frac;
    }

    // Semiconvergent between the last two convergents
    let k = (max_denominator - q0) / q1;
    let (bp, bq) = (p0 + k * p1, q0 + k * q1);
    let convergent_err = (p1 as f64 / q1 as f64 - x).abs();
    let semi_err = (bp as f64 / bq as f64 - x).abs();
    if convergent_err <= semi_err { (p1, q1) } else { (bp, bq) }
}

/// Render as a whole number and a simple fraction, e.g. "1 1/3".
pub fn fractional(value: impl IntoNumeric) -> Result<String> {
    fractional_with(value, 10)
}

/// Like [`fractional`] with a custom largest denominator.
///
/// # Example
///
/// ```
/// use speakhuman_format::number::fractional_with;
///
/// assert_eq!(fractional_with(0.333, 10).unwrap(), "1/3");
/// assert_eq!(fractional_with(0.333, 1000).unwrap(), "333/1000");
/// assert_eq!(fractional_with(-2.5, 10).unwrap(), "-2 1/2");
/// ```
pub fn fractional_with(value: impl IntoNumeric, max_denominator: u64) -> Result<String> {
    if max_denominator == 0 {
        return Err(FormatError::InvalidFormat(
            "largest denominator must be at least 1".to_string(),
        ));
    }

    let number = value.into_numeric()?;
    let f = match number {
        Numeric::Int(i) => return Ok(i.to_string()),
        Numeric::Float(f) => f,
    };

    let magnitude = f.abs();
    let mut whole = magnitude.trunc();
    let (mut numerator, denominator) = limit_denominator(magnitude - whole, max_denominator);
    if numerator == denominator {
        whole += 1.0;
        numerator = 0;
    }

    let sign = if f < 0.0 && (whole > 0.0 || numerator > 0) { "-" } else { "" };
    Ok(match (whole > 0.0, numerator) {
        (_, 0) => format!("{}{:.0}", sign, whole),
        (false, n) => format!("{}{}/{}", sign, n, denominator),
        (true, n) => format!("{}{:.0} {}/{}", sign, whole, n, denominator),
    })
}

/// Scale a value with an SI prefix, keeping `precision` significant digits.
///
/// # Example
///
/// ```
/// use speakhuman_format::number::metric;
///
/// assert_eq!(metric(1500, "V", 3).unwrap(), "1.50 kV");
/// assert_eq!(metric(220e-6, "F", 3).unwrap(), "220 μF");
/// assert_eq!(metric(1, "°", 3).unwrap(), "1.00°");
/// ```
pub fn metric(value: impl IntoNumeric, unit: &str, precision: usize) -> Result<String> {
    let f = value.into_numeric()?.as_f64();
    let precision = precision.max(1);

    let (mantissa, exp) = if f == 0.0 {
        ("0".to_string(), 0)
    } else {
        split_exponent(f, precision - 1)
    };

    if !(-30..33).contains(&exp) {
        let notation = scientific_superscript(f, precision - 1)?;
        return Ok(format!("{}{}", notation, unit));
    }

    let group = exp.div_euclid(3);
    let shift = exp.rem_euclid(3);
    let scaled = mantissa.parse::<f64>().unwrap_or(0.0) * 10f64.powi(shift);
    let decimals = (precision as i32 - 1 - shift).max(0) as usize;

    let prefix = match group {
        1..=10 => SI_LARGE[(group - 1) as usize],
        -10..=-1 => SI_SMALL[(-group - 1) as usize],
        _ => "",
    };
    let space = if (prefix.is_empty() && unit.is_empty()) || UNSPACED_UNITS.contains(&unit) {
        ""
    } else {
        " "
    };

    let number = format!("{:.prec$}", scaled, prec = decimals);
    Ok(format!(
        "{}{}{}{}",
        localize_mantissa(&number),
        space,
        prefix,
        unit
    ))
}

/// Format a value, replacing it with a bound when it falls outside
/// `[floor, ceil]`.
///
/// Out-of-range values render as the token (default `"<"` / `">"`) followed
/// by the formatted bound.
///
/// # Example
///
/// ```
/// use speakhuman_format::number::clamp;
///
/// let percent = |v: f64| format!("{:.0}%", v * 100.0);
/// assert_eq!(clamp(0.0001, percent, Some(0.01), None, Some(0.99), None).unwrap(), "<1%");
/// assert_eq!(clamp(0.999, percent, Some(0.01), None, Some(0.99), None).unwrap(), ">99%");
/// assert_eq!(clamp(0.5, percent, Some(0.01), None, Some(0.99), None).unwrap(), "50%");
/// ```
pub fn clamp(
    value: impl IntoNumeric,
    format: impl Fn(f64) -> String,
    floor: Option<f64>,
    floor_token: Option<&str>,
    ceil: Option<f64>,
    ceil_token: Option<&str>,
) -> Result<String> {
    let v = value.into_numeric()?.as_f64();

    if let Some(floor) = floor.filter(|floor| v < *floor) {
        return Ok(format!("{}{}", floor_token.unwrap_or("<"), format(floor)));
    }
    if let Some(ceil) = ceil.filter(|ceil| v > *ceil) {
        return Ok(format!("{}{}", ceil_token.unwrap_or(">"), format(ceil)));
    }
    Ok(format(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use speakhuman_i18n::with_locale;

    #[test]
    fn test_add_grouping() {
        assert_eq!(add_grouping("1", ','), "1");
        assert_eq!(add_grouping("123", ','), "123");
        assert_eq!(add_grouping("1234", ','), "1,234");
        assert_eq!(add_grouping("1234567", '.'), "1.234.567");
    }

    #[test]
    fn test_round_half_even() {
        assert_eq!(round_half_even("0.125", 2), "0.12");
        assert_eq!(round_half_even("0.135", 2), "0.14");
        assert_eq!(round_half_even("0.1251", 2), "0.13");
        assert_eq!(round_half_even("9.999", 2), "10");
        assert_eq!(round_half_even("-0.001", 2), "0");
        assert_eq!(round_half_even("1.5", 2), "1.5");
        assert_eq!(round_half_even("1.0", 2), "1");
    }

    #[test]
    fn test_intcomma() {
        assert_eq!(intcomma(100).unwrap(), "100");
        assert_eq!(intcomma(1000).unwrap(), "1,000");
        assert_eq!(intcomma(10123).unwrap(), "10,123");
        assert_eq!(intcomma(-10311).unwrap(), "-10,311");
        assert_eq!(intcomma(1_000_000).unwrap(), "1,000,000");
        assert_eq!(intcomma(1234567.25).unwrap(), "1,234,567.25");
        assert_eq!(intcomma("10311.545").unwrap(), "10,311.54");
        assert_eq!(intcomma(0.5).unwrap(), "0.5");
        assert!(intcomma("ten").is_err());
        assert!(intcomma(f64::NAN).is_err());
    }

    #[test]
    fn test_intcomma_digit_structure() {
        for n in [7i64, 42, 999, 1000, 65536, 1234567, 9876543210, i64::MAX] {
            let formatted = intcomma(n).unwrap();
            assert_eq!(formatted.replace(',', ""), n.to_string());
            for group in formatted.split(',').skip(1) {
                assert_eq!(group.len(), 3, "{} in {}", group, formatted);
            }
        }
    }

    #[test]
    fn test_intcomma_localized() {
        let de = with_locale("de_DE", None, || intcomma(1234567.25)).unwrap();
        assert_eq!(de.unwrap(), "1.234.567,25");
        let fr = with_locale("fr_FR", None, || intcomma(1234567)).unwrap();
        assert_eq!(fr.unwrap(), "1\u{a0}234\u{a0}567");
    }

    #[test]
    fn test_intcomma_with() {
        assert_eq!(intcomma_with(1234567.1234567, 0).unwrap(), "1,234,567");
        assert_eq!(intcomma_with(1234567.1234567, 1).unwrap(), "1,234,567.1");
        assert_eq!(intcomma_with(1234567, 1).unwrap(), "1,234,567.0");
        assert_eq!(intcomma_with(-0.5, 3).unwrap(), "-0.500");
    }

    #[test]
    fn test_intword() {
        assert_eq!(intword(100).unwrap(), "100");
        assert_eq!(intword(1000).unwrap(), "1.0 thousand");
        assert_eq!(intword(12400).unwrap(), "12.4 thousand");
        assert_eq!(intword(1_000_000).unwrap(), "1.0 million");
        assert_eq!(intword(-1_000_000).unwrap(), "-1.0 million");
        assert_eq!(intword(1_200_000_000).unwrap(), "1.2 billion");
        assert_eq!(intword(8_100_000_000_000_000_000_000_000_000_000_000u128).unwrap(), "8.1 decillion");
        assert_eq!(intword("1e100").unwrap(), "1.0 googol");
        assert_eq!(intword(999_950).unwrap(), "1.0 million");
    }

    #[test]
    fn test_intword_with() {
        assert_eq!(intword_with(1_234_567, "%.0f").unwrap(), "1 million");
        assert_eq!(intword_with(999_499, "%.0f").unwrap(), "999 thousand");
        assert!(intword_with(1_000_000, "%s").is_err());
    }

    #[test]
    fn test_intword_localized() {
        let de = with_locale("de_DE", None, || intword(1_200_000)).unwrap();
        assert_eq!(de.unwrap(), "1,2 Millionen");
        let ru = with_locale("ru_RU", None, || intword(1_000_000)).unwrap();
        assert_eq!(ru.unwrap(), "1,0 миллион");
    }

    #[test]
    fn test_ordinal() {
        let cases = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (101, "101st"),
            (111, "111th"),
        ];
        for (n, expected) in cases {
            assert_eq!(ordinal(n).unwrap(), expected);
        }
        assert_eq!(ordinal(0).unwrap(), "0th");
        assert_eq!(ordinal(-1).unwrap(), "-1st");
        assert_eq!(ordinal("22").unwrap(), "22nd");
        assert!(ordinal("something else").is_err());
    }

    #[test]
    fn test_ordinal_keeps_wide_integers() {
        assert_eq!(ordinal(u64::MAX).unwrap(), "18446744073709551615th");
        assert_eq!(ordinal(i128::MIN + 1).unwrap(), format!("{}th", i128::MIN + 1));
        assert_eq!(ordinal(1e20).unwrap(), "100000000000000000000th");
        assert_eq!(ordinal("18446744073709551602").unwrap(), "18446744073709551602nd");
        assert_eq!(apnumber(u64::MAX).unwrap(), "18446744073709551615");
    }

    #[test]
    fn test_ordinal_gendered() {
        let fr = with_locale("fr_FR", None, || {
            (
                ordinal_gendered(1, Gender::Male).unwrap(),
                ordinal_gendered(1, Gender::Female).unwrap(),
                ordinal_gendered(2, Gender::Female).unwrap(),
            )
        })
        .unwrap();
        assert_eq!(fr, ("1er".to_string(), "1re".to_string(), "2e".to_string()));

        let fr = with_locale("fr_FR", None, || {
            [21, 31, 101, -1, 11]
                .map(|n| ordinal_gendered(n, Gender::Male).unwrap())
        })
        .unwrap();
        assert_eq!(fr, ["21e", "31e", "101e", "-1er", "11e"]);

        assert_eq!("feminine".parse::<Gender>().unwrap(), Gender::Female);
        assert!("neuter".parse::<Gender>().is_err());
    }

    #[test]
    fn test_apnumber() {
        assert_eq!(apnumber(0).unwrap(), "zero");
        assert_eq!(apnumber(9).unwrap(), "nine");
        assert_eq!(apnumber(10).unwrap(), "10");
        assert_eq!(apnumber(-1).unwrap(), "-1");
        assert!(apnumber("foo").is_err());
        let de = with_locale("de_DE", None, || apnumber(3)).unwrap();
        assert_eq!(de.unwrap(), "drei");
    }

    #[test]
    fn test_scientific() {
        assert_eq!(scientific(1000, 2).unwrap(), "1.00e+03");
        assert_eq!(scientific(-1000, 2).unwrap(), "-1.00e+03");
        assert_eq!(scientific(5.5, 2).unwrap(), "5.50e+00");
        assert_eq!(scientific(0.00012, 3).unwrap(), "1.200e-04");
        assert_eq!(scientific(0, 2).unwrap(), "0.00e+00");
    }

    #[test]
    fn test_scientific_superscript() {
        assert_eq!(scientific_superscript(1000, 2).unwrap(), "1.00 x 10\u{b3}");
        assert_eq!(scientific_superscript(-1000, 2).unwrap(), "-1.00 x 10\u{b3}");
        assert_eq!(scientific_superscript(5.5, 2).unwrap(), "5.50 x 10\u{2070}");
        assert_eq!(
            scientific_superscript(0.3, 2).unwrap(),
            "3.00 x 10\u{207b}\u{b9}"
        );
        assert_eq!(scientific_superscript(1e45, 1).unwrap(), "1.0 x 10\u{2074}\u{2075}");
    }

    #[test]
    fn test_limit_denominator() {
        assert_eq!(limit_denominator(0.3, 10), (3, 10));
        assert_eq!(limit_denominator(0.5, 10), (1, 2));
        assert_eq!(limit_denominator(1.0 / 3.0, 10), (1, 3));
        assert_eq!(limit_denominator(0.999999, 10), (1, 1));
        assert_eq!(limit_denominator(0.0, 10), (0, 1));
        assert_eq!(limit_denominator(0.142857, 100), (1, 7));
    }

    #[test]
    fn test_fractional() {
        assert_eq!(fractional(1).unwrap(), "1");
        assert_eq!(fractional(0.3).unwrap(), "3/10");
        assert_eq!(fractional(1.3).unwrap(), "1 3/10");
        assert_eq!(fractional(1.5).unwrap(), "1 1/2");
        assert_eq!(fractional(2.0).unwrap(), "2");
        assert_eq!(fractional(0.0).unwrap(), "0");
        assert_eq!(fractional(-0.25).unwrap(), "-1/4");
        assert_eq!(fractional(1.99999).unwrap(), "2");
        assert!(fractional("ten").is_err());
        assert!(fractional_with(0.5, 0).is_err());
    }

    #[test]
    fn test_fractional_large_magnitudes() {
        assert_eq!(fractional(1e20).unwrap(), "100000000000000000000");
        assert_eq!(fractional(-3e19).unwrap(), "-30000000000000000000");
        assert_eq!(fractional(u64::MAX).unwrap(), "18446744073709551615");
        assert_eq!(fractional(2251799813685248.5).unwrap(), "2251799813685248 1/2");
    }

    #[test]
    fn test_metric() {
        assert_eq!(metric(1500, "V", 3).unwrap(), "1.50 kV");
        assert_eq!(metric(2e8, "W", 3).unwrap(), "200 MW");
        assert_eq!(metric(220e-6, "F", 3).unwrap(), "220 \u{3bc}F");
        assert_eq!(metric(200_000, "", 3).unwrap(), "200 k");
        assert_eq!(metric(0, "", 3).unwrap(), "0.00");
        assert_eq!(metric(12.3, "m", 3).unwrap(), "12.3 m");
        assert_eq!(metric(999.9, "Hz", 3).unwrap(), "1.00 kHz");
        assert_eq!(metric(-0.0015, "A", 2).unwrap(), "-1.5 mA");
    }

    #[test]
    fn test_metric_edges() {
        assert_eq!(metric(1, "\u{b0}", 3).unwrap(), "1.00\u{b0}");
        assert_eq!(metric(1e30, "g", 1).unwrap(), "1 Qg");
        assert_eq!(metric(1e35, "W", 3).unwrap(), "1.00 x 10\u{b3}\u{2075}W");
    }

    #[test]
    fn test_clamp() {
        let plain = |v: f64| format!("{}", v);
        assert_eq!(clamp(5, plain, Some(1.0), None, Some(10.0), None).unwrap(), "5");
        assert_eq!(clamp(0.5, plain, Some(1.0), None, None, None).unwrap(), "<1");
        assert_eq!(clamp(50, plain, None, None, Some(10.0), Some("above ")).unwrap(), "above 10");
        assert_eq!(clamp(0.5, plain, Some(1.0), Some("under "), None, None).unwrap(), "under 1");
        assert!(clamp(f64::NAN, plain, None, None, None, None).is_err());
    }
}
