//! Durations and Dates
//!
//! Relative phrasing for time spans ("3 minutes", "2 days ago") and calendar
//! dates ("yesterday", "Mar 09").
//!
//! # Examples
//!
//! ```
//! use chrono::TimeDelta;
//! use speakhuman_format::time::{naturaldelta, naturaltime};
//!
//! assert_eq!(naturaldelta(TimeDelta::seconds(60)).unwrap(), "a minute");
//! assert_eq!(naturaltime(TimeDelta::days(3)).unwrap(), "3 days ago");
//! assert_eq!(naturaltime(-TimeDelta::hours(5)).unwrap(), "5 hours from now");
//! ```

use crate::number::intcomma;
use crate::{FormatError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeDelta, TimeZone};
use serde::{Deserialize, Serialize};
use speakhuman_i18n::{Catalog, active, fill};
use speakhuman_log::trace;
use std::fmt::{self, Write as _};
use std::str::FromStr;
use std::time::Duration;

const MICROS_PER_SECOND: i128 = 1_000_000;
const MICROS_PER_DAY: i128 = 86_400 * MICROS_PER_SECOND;

// ============================================================================
// Units
// ============================================================================

/// Time units, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    Years,
}

impl Unit {
    /// All units, smallest first.
    pub const ALL: [Unit; 8] = [
        Unit::Microseconds,
        Unit::Milliseconds,
        Unit::Seconds,
        Unit::Minutes,
        Unit::Hours,
        Unit::Days,
        Unit::Months,
        Unit::Years,
    ];

    /// Plural English name, also the catalog key of the unit's word forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Microseconds => "microseconds",
            Self::Milliseconds => "milliseconds",
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Days => "days",
            Self::Months => "months",
            Self::Years => "years",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = FormatError;

    /// Parse a unit name, case-insensitively. Singular names are accepted.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase();
        Unit::ALL
            .into_iter()
            .find(|unit| {
                let plural = unit.as_str();
                name == plural || name == plural[..plural.len() - 1]
            })
            .ok_or_else(|| FormatError::UnsupportedUnit(s.to_string()))
    }
}

// ============================================================================
// Time Spans
// ============================================================================

/// A signed duration: a non-negative magnitude split into days, seconds and
/// microseconds, plus a sign.
///
/// A positive span lies in the past when phrased relative to now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimeSpan {
    days: i64,
    seconds: i64,
    microseconds: i64,
    negative: bool,
}

impl TimeSpan {
    /// Build from components, which may be of any sign.
    ///
    /// # Example
    ///
    /// ```
    /// use speakhuman_format::TimeSpan;
    ///
    /// let span = TimeSpan::new(0, -90, 0);
    /// assert!(span.is_negative());
    /// assert_eq!(span.seconds(), 90);
    /// ```
    pub fn new(days: i64, seconds: i64, microseconds: i64) -> Self {
        Self::from_micros(
            i128::from(days) * MICROS_PER_DAY
                + i128::from(seconds) * MICROS_PER_SECOND
                + i128::from(microseconds),
        )
    }

    /// Build from a signed microsecond count.
    pub fn from_micros(total: i128) -> Self {
        let magnitude = total.unsigned_abs();
        let per_day = MICROS_PER_DAY as u128;
        let per_second = MICROS_PER_SECOND as u128;
        let rest = magnitude % per_day;
        Self {
            days: i64::try_from(magnitude / per_day).unwrap_or(i64::MAX),
            seconds: (rest / per_second) as i64,
            microseconds: (rest % per_second) as i64,
            negative: total < 0,
        }
    }

    /// Build from fractional seconds, rounded to the microsecond.
    pub fn from_secs_f64(seconds: f64) -> Result<Self> {
        if !seconds.is_finite() {
            return Err(FormatError::InvalidNumericInput(seconds.to_string()));
        }
        Ok(Self::from_micros((seconds * 1e6).round() as i128))
    }

    /// Span from `start` to `end`; positive when `start` is earlier.
    pub fn between<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> Self {
        Self::from(end.clone() - start.clone())
    }

    /// Whole days of the magnitude.
    pub fn days(&self) -> i64 {
        self.days
    }

    /// Seconds of the magnitude past the whole days (0..86400).
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Microseconds of the magnitude past the whole seconds (0..1000000).
    pub fn microseconds(&self) -> i64 {
        self.microseconds
    }

    /// Whether the span is negative (in the future).
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// The magnitude, always non-negative.
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            ..*self
        }
    }

    /// Signed total in seconds.
    pub fn total_seconds(&self) -> f64 {
        let magnitude =
            self.days as f64 * 86_400.0 + self.seconds as f64 + self.microseconds as f64 / 1e6;
        if self.negative { -magnitude } else { magnitude }
    }
}

impl From<TimeDelta> for TimeSpan {
    fn from(delta: TimeDelta) -> Self {
        let micros = i128::from(delta.num_seconds()) * MICROS_PER_SECOND
            + i128::from(delta.subsec_nanos()) / 1000;
        Self::from_micros(micros)
    }
}

impl From<Duration> for TimeSpan {
    fn from(duration: Duration) -> Self {
        Self::from_micros(i128::try_from(duration.as_micros()).unwrap_or(i128::MAX))
    }
}

/// Conversion into a [`TimeSpan`] at a formatter's boundary.
///
/// Numbers are read as seconds.
pub trait IntoTimeSpan {
    /// Resolve the input, failing on non-finite seconds.
    fn into_time_span(self) -> Result<TimeSpan>;
}

impl IntoTimeSpan for TimeSpan {
    fn into_time_span(self) -> Result<TimeSpan> {
        Ok(self)
    }
}

impl IntoTimeSpan for TimeDelta {
    fn into_time_span(self) -> Result<TimeSpan> {
        Ok(self.into())
    }
}

impl IntoTimeSpan for Duration {
    fn into_time_span(self) -> Result<TimeSpan> {
        Ok(self.into())
    }
}

impl IntoTimeSpan for f64 {
    fn into_time_span(self) -> Result<TimeSpan> {
        TimeSpan::from_secs_f64(self)
    }
}

impl IntoTimeSpan for f32 {
    fn into_time_span(self) -> Result<TimeSpan> {
        TimeSpan::from_secs_f64(f64::from(self))
    }
}

macro_rules! impl_into_time_span_int {
    ($($t:ty),*) => {
        $(
            impl IntoTimeSpan for $t {
                fn into_time_span(self) -> Result<TimeSpan> {
                    Ok(TimeSpan::from_micros(i128::from(self) * MICROS_PER_SECOND))
                }
            }
        )*
    };
}

impl_into_time_span_int!(i32, i64, u32, u64);

// ============================================================================
// naturaldelta / naturaltime
// ============================================================================

/// A naturaldelta result before localization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phrase {
    /// Below the smallest reported unit
    Moment,
    /// A fixed message such as "a minute"
    Text(&'static str),
    /// A plural message with a count
    Count(&'static str, i64),
}

impl Phrase {
    fn render(self, catalog: &Catalog) -> Result<String> {
        Ok(match self {
            Self::Moment => catalog.text("a moment").to_string(),
            Self::Text(key) => catalog.text(key).to_string(),
            Self::Count(key, n) => catalog.plural_with(key, n as f64, &intcomma(n)?),
        })
    }
}

fn check_minimum_unit(minimum_unit: Unit) -> Result<()> {
    match minimum_unit {
        Unit::Seconds | Unit::Milliseconds | Unit::Microseconds => Ok(()),
        other => Err(FormatError::UnsupportedUnit(format!(
            "{} is not a valid minimum unit here",
            other
        ))),
    }
}

/// Bucket a span's magnitude. Sub-unit remainders round half up.
fn classify(span: TimeSpan, months: bool, minimum_unit: Unit) -> Phrase {
    let years = span.days / 365;
    let days = span.days % 365;
    let num_months = (days as f64 / 30.5).round() as i64;

    match years {
        0 if days == 0 => {
            let seconds = span.seconds;
            let micros = span.microseconds;
            match seconds {
                0 if minimum_unit == Unit::Microseconds && micros < 1000 => {
                    Phrase::Count("microseconds", micros)
                }
                0 if minimum_unit == Unit::Milliseconds || minimum_unit == Unit::Microseconds => {
                    Phrase::Count("milliseconds", micros / 1000)
                }
                0 => Phrase::Moment,
                1 => Phrase::Text("a second"),
                2..=59 => Phrase::Count("seconds", seconds),
                60..=3599 => match (seconds as f64 / 60.0).round() as i64 {
                    1 => Phrase::Text("a minute"),
                    60 => Phrase::Text("an hour"),
                    minutes => Phrase::Count("minutes", minutes),
                },
                _ => match (seconds as f64 / 3600.0).round() as i64 {
                    1 => Phrase::Text("an hour"),
                    24 => Phrase::Text("a day"),
                    hours => Phrase::Count("hours", hours),
                },
            }
        }
        0 => match (days, num_months) {
            (1, _) => Phrase::Text("a day"),
            (_, 0) => Phrase::Count("days", days),
            _ if !months => Phrase::Count("days", days),
            (_, 1) => Phrase::Text("a month"),
            (_, 12) => Phrase::Text("a year"),
            _ => Phrase::Count("months", num_months),
        },
        1 => match (days, num_months) {
            (0, 0) => Phrase::Text("a year"),
            (_, 0) => Phrase::Count("year and days", days),
            _ if !months => Phrase::Count("year and days", days),
            (_, 12) => Phrase::Count("years", 2),
            _ => Phrase::Count("year and months", num_months),
        },
        _ => Phrase::Count("years", years),
    }
}

/// Describe the length of a span without tense, e.g. "3 hours".
pub fn naturaldelta(value: impl IntoTimeSpan) -> Result<String> {
    naturaldelta_with(value, true, Unit::Seconds)
}

/// Describe the length of a span.
///
/// With `months` off, spans under two years are counted in days.
/// `minimum_unit` may be seconds, milliseconds or microseconds; the smaller
/// units replace "a moment" for sub-second spans.
///
/// # Example
///
/// ```
/// use chrono::TimeDelta;
/// use speakhuman_format::time::{naturaldelta_with, Unit};
///
/// let span = TimeDelta::days(45);
/// assert_eq!(naturaldelta_with(span, true, Unit::Seconds).unwrap(), "a month");
/// assert_eq!(naturaldelta_with(span, false, Unit::Seconds).unwrap(), "45 days");
///
/// let span = TimeDelta::microseconds(4000);
/// assert_eq!(naturaldelta_with(span, true, Unit::Milliseconds).unwrap(), "4 milliseconds");
/// ```
pub fn naturaldelta_with(value: impl IntoTimeSpan, months: bool, minimum_unit: Unit) -> Result<String> {
    check_minimum_unit(minimum_unit)?;
    let span = value.into_time_span()?;
    let phrase = classify(span.abs(), months, minimum_unit);
    trace!("naturaldelta {:?} -> {:?}", span, phrase);
    phrase.render(&active())
}

/// Describe a span relative to now: "3 days ago", "in 2 hours" style.
///
/// Positive spans are in the past, negative spans in the future.
pub fn naturaltime(value: impl IntoTimeSpan) -> Result<String> {
    naturaltime_with(value, true, Unit::Seconds)
}

/// Like [`naturaltime`] with the options of [`naturaldelta_with`].
pub fn naturaltime_with(value: impl IntoTimeSpan, months: bool, minimum_unit: Unit) -> Result<String> {
    check_minimum_unit(minimum_unit)?;
    let span = value.into_time_span()?;
    let catalog = active();

    let phrase = classify(span.abs(), months, minimum_unit);
    if phrase == Phrase::Moment {
        return Ok(catalog.text("now").to_string());
    }

    let delta = phrase.render(&catalog)?;
    let template = if span.is_negative() {
        catalog.text("from now")
    } else {
        catalog.text("ago")
    };
    Ok(fill(template, &[("delta", delta.as_str())]))
}

/// Describe `when` relative to `now`.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use speakhuman_format::time::naturaltime_between;
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
/// let when = Utc.with_ymd_and_hms(2024, 3, 9, 11, 30, 0).unwrap();
/// assert_eq!(naturaltime_between(&when, &now).unwrap(), "30 minutes ago");
/// assert_eq!(naturaltime_between(&now, &when).unwrap(), "30 minutes from now");
/// ```
pub fn naturaltime_between<Tz: TimeZone>(when: &DateTime<Tz>, now: &DateTime<Tz>) -> Result<String> {
    naturaltime(TimeSpan::between(when, now))
}

// ============================================================================
// naturalday / naturaldate
// ============================================================================

/// Swap month and weekday name conversions for the catalog's names.
fn localize_strftime(format: &str, date: NaiveDate, catalog: &Catalog) -> String {
    let month = date.month();
    let weekday = date.weekday().number_from_monday();
    let mut out = String::with_capacity(format.len());
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let key = match chars.peek() {
            Some('b') | Some('h') => format!("month.short.{}", month),
            Some('B') => format!("month.long.{}", month),
            Some('a') => format!("weekday.short.{}", weekday),
            Some('A') => format!("weekday.long.{}", weekday),
            Some(&next) => {
                out.push('%');
                out.push(next);
                chars.next();
                continue;
            }
            None => {
                out.push('%');
                continue;
            }
        };
        chars.next();
        out.push_str(&catalog.text(&key).replace('%', "%%"));
    }
    out
}

/// "today", "yesterday" or "tomorrow" for nearby dates, else `date`
/// formatted with a strftime `format`.
pub fn naturalday(date: NaiveDate, format: &str) -> Result<String> {
    naturalday_from(date, Local::now().date_naive(), format)
}

/// Like [`naturalday`] relative to an explicit `today`.
///
/// Month and weekday names (`%b`, `%B`, `%a`, `%A`) come from the active
/// catalog.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use speakhuman_format::time::naturalday_from;
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
/// assert_eq!(naturalday_from(date, today, "%b %d").unwrap(), "yesterday");
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// assert_eq!(naturalday_from(date, today, "%A, %B %-d").unwrap(), "Saturday, June 1");
/// ```
pub fn naturalday_from(date: NaiveDate, today: NaiveDate, format: &str) -> Result<String> {
    let catalog = active();
    match (date - today).num_days() {
        0 => return Ok(catalog.text("today").to_string()),
        1 => return Ok(catalog.text("tomorrow").to_string()),
        -1 => return Ok(catalog.text("yesterday").to_string()),
        _ => {}
    }

    let localized = localize_strftime(format, date, &catalog);
    let items: Vec<Item<'_>> = StrftimeItems::new(&localized).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(FormatError::InvalidFormat(format.to_string()));
    }

    let mut out = String::new();
    write!(out, "{}", date.format_with_items(items.iter()))
        .map_err(|_| FormatError::InvalidFormat(format.to_string()))?;
    Ok(out)
}

/// Like [`naturalday`] with `"%b %d"`, adding the year when it is not the
/// current one.
pub fn naturaldate(date: NaiveDate) -> Result<String> {
    naturaldate_from(date, Local::now().date_naive())
}

/// Like [`naturaldate`] relative to an explicit `today`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use speakhuman_format::time::naturaldate_from;
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
/// assert_eq!(naturaldate_from(date, today).unwrap(), "Jul 04");
///
/// let date = NaiveDate::from_ymd_opt(2023, 7, 4).unwrap();
/// assert_eq!(naturaldate_from(date, today).unwrap(), "Jul 04 2023");
/// ```
pub fn naturaldate_from(date: NaiveDate, today: NaiveDate) -> Result<String> {
    let format = if date.year() == today.year() {
        "%b %d"
    } else {
        "%b %d %Y"
    };
    naturalday_from(date, today, format)
}
