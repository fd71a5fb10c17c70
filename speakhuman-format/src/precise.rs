//! Itemized durations
//!
//! [`precisedelta`] spells a span out unit by unit, e.g.
//! "2 days, 1 hour and 33.12 seconds". Years count 365 days and months 30.5
//! days.

use crate::number::intcomma;
use crate::printf::FloatFormat;
use crate::time::{IntoTimeSpan, TimeSpan, Unit};
use crate::{FormatError, Result};
use speakhuman_i18n::{active, fill};
use speakhuman_log::trace;
use std::collections::HashSet;

/// Seconds in one `unit`, using the same calendar approximations as
/// [`precisedelta`].
pub fn unit_seconds(unit: Unit) -> f64 {
    match unit {
        Unit::Microseconds => 1e-6,
        Unit::Milliseconds => 1e-3,
        Unit::Seconds => 1.0,
        Unit::Minutes => 60.0,
        Unit::Hours => 3600.0,
        Unit::Days => 86_400.0,
        Unit::Months => 30.5 * 86_400.0,
        Unit::Years => 365.0 * 86_400.0,
    }
}

/// The smallest unit at or above `minimum` that is not suppressed.
fn suitable_minimum_unit(minimum: Unit, suppress: &[Unit]) -> Result<Unit> {
    Unit::ALL
        .into_iter()
        .find(|unit| *unit >= minimum && !suppress.contains(unit))
        .ok_or_else(|| {
            FormatError::UnsupportedUnit(format!(
                "minimum unit {} is suppressed and no larger unit is available",
                minimum
            ))
        })
}

/// Suppressed units plus every unit below the minimum.
fn suppress_lower_units(minimum: Unit, suppress: &[Unit]) -> HashSet<Unit> {
    Unit::ALL
        .into_iter()
        .filter(|unit| *unit < minimum || suppress.contains(unit))
        .collect()
}

struct Decomposer<'a> {
    minimum: Unit,
    suppressed: &'a HashSet<Unit>,
    format: &'a FloatFormat,
}

impl Decomposer<'_> {
    /// Quotient and remainder of `value` for `unit`. The minimum unit takes
    /// the rounded quotient and leaves nothing; a suppressed unit passes the
    /// whole value down.
    fn split(&self, value: f64, divisor: f64, unit: Unit) -> (f64, f64) {
        if unit == self.minimum {
            (self.format.round(value / divisor), 0.0)
        } else if self.suppressed.contains(&unit) {
            (0.0, value)
        } else {
            let quotient = (value / divisor).floor();
            (quotient, value - quotient * divisor)
        }
    }
}

/// Quantities per unit, largest first, down to the minimum unit.
///
/// Suppressed units are present with a zero quantity; their share is folded
/// into the neighbouring retained units.
///
/// # Example
///
/// ```
/// use chrono::TimeDelta;
/// use speakhuman_format::precise::precise_breakdown;
/// use speakhuman_format::time::Unit;
///
/// let span = TimeDelta::hours(26) + TimeDelta::minutes(3);
/// let parts = precise_breakdown(span, Unit::Minutes, &[Unit::Days], "%d").unwrap();
/// assert_eq!(
///     parts,
///     vec![
///         (Unit::Years, 0.0),
///         (Unit::Months, 0.0),
///         (Unit::Days, 0.0),
///         (Unit::Hours, 26.0),
///         (Unit::Minutes, 3.0),
///     ]
/// );
/// ```
pub fn precise_breakdown(
    value: impl IntoTimeSpan,
    minimum_unit: Unit,
    suppress: &[Unit],
    format: &str,
) -> Result<Vec<(Unit, f64)>> {
    let span = value.into_time_span()?.abs();
    let format = FloatFormat::parse(format)?;
    let minimum = suitable_minimum_unit(minimum_unit, suppress)?;
    let suppressed = suppress_lower_units(minimum, suppress);
    Ok(decompose(span, minimum, &suppressed, &format))
}

fn decompose(
    span: TimeSpan,
    minimum: Unit,
    suppressed: &HashSet<Unit>,
    format: &FloatFormat,
) -> Vec<(Unit, f64)> {
    let d = Decomposer {
        minimum,
        suppressed,
        format,
    };

    let (years, days) = d.split(span.days() as f64, 365.0, Unit::Years);
    let (months, days) = d.split(days, 30.5, Unit::Months);

    let secs = days * 86_400.0 + span.seconds() as f64;
    let (days, secs) = d.split(secs, 86_400.0, Unit::Days);
    let (hours, secs) = d.split(secs, 3600.0, Unit::Hours);
    let (minutes, secs) = d.split(secs, 60.0, Unit::Minutes);

    let usecs = secs * 1e6 + span.microseconds() as f64;
    let (seconds, usecs) = d.split(usecs, 1e6, Unit::Seconds);
    let (millis, usecs) = d.split(usecs, 1000.0, Unit::Milliseconds);
    let (micros, _) = d.split(usecs, 1.0, Unit::Microseconds);

    let mut parts = [
        (Unit::Years, years),
        (Unit::Months, months),
        (Unit::Days, days),
        (Unit::Hours, hours),
        (Unit::Minutes, minutes),
        (Unit::Seconds, seconds),
        (Unit::Milliseconds, millis),
        (Unit::Microseconds, micros),
    ];

    // Rounding at the minimum unit may overflow into the next retained unit.
    // Indices run from the smaller unit to the larger one.
    const CARRIES: [(usize, usize, f64); 7] = [
        (7, 6, 1000.0),
        (6, 5, 1000.0),
        (5, 4, 60.0),
        (4, 3, 60.0),
        (3, 2, 24.0),
        (2, 1, 31.0),
        (1, 0, 12.0),
    ];
    for (small, large, limit) in CARRIES {
        if parts[small].1 >= limit && !suppressed.contains(&parts[large].0) {
            parts[small].1 -= limit;
            parts[large].1 += 1.0;
        }
    }

    parts.into_iter().filter(|(unit, _)| *unit >= minimum).collect()
}

/// Itemize a span down to seconds with two decimals.
///
/// ```
/// use chrono::TimeDelta;
/// use speakhuman_format::precise::precisedelta;
///
/// assert_eq!(precisedelta(TimeDelta::seconds(1)).unwrap(), "1 second");
/// ```
pub fn precisedelta(value: impl IntoTimeSpan) -> Result<String> {
    precisedelta_with(value, Unit::Seconds, &[], "%0.2f")
}

/// Itemize a span down to `minimum_unit`.
///
/// Units in `suppress` are never shown; their quantity moves to the
/// neighbouring retained units. If the minimum unit itself is suppressed, the
/// next larger retained unit takes its place. Only the minimum unit is
/// rounded with `format` and may show a fraction.
///
/// # Example
///
/// ```
/// use chrono::TimeDelta;
/// use speakhuman_format::precise::precisedelta_with;
/// use speakhuman_format::time::Unit;
///
/// let span = TimeDelta::days(2) + TimeDelta::seconds(3633) + TimeDelta::milliseconds(123);
/// assert_eq!(
///     precisedelta_with(span, Unit::Seconds, &[], "%0.2f").unwrap(),
///     "2 days, 1 hour and 33.12 seconds"
/// );
/// assert_eq!(
///     precisedelta_with(span, Unit::Seconds, &[Unit::Days], "%0.2f").unwrap(),
///     "49 hours and 33.12 seconds"
/// );
/// ```
pub fn precisedelta_with(
    value: impl IntoTimeSpan,
    minimum_unit: Unit,
    suppress: &[Unit],
    format: &str,
) -> Result<String> {
    let span = value.into_time_span()?.abs();
    let fmt = FloatFormat::parse(format)?;
    let minimum = suitable_minimum_unit(minimum_unit, suppress)?;
    let suppressed = suppress_lower_units(minimum, suppress);
    let parts = decompose(span, minimum, &suppressed, &fmt);
    trace!("precisedelta {:?} -> {:?}", span, parts);

    let catalog = active();
    let mut items: Vec<String> = Vec::new();
    for (unit, quantity) in parts {
        if quantity <= 0.0 && !(items.is_empty() && unit == minimum) {
            continue;
        }
        let fractional = unit == minimum && quantity.fract().abs() > 1e-9;
        let (count, shown) = if fractional {
            (quantity, fmt.format_localized(quantity, catalog.decimal_separator()))
        } else if unit == Unit::Years {
            (quantity.trunc(), intcomma(quantity.trunc() as i64)?)
        } else {
            (quantity.trunc(), (quantity.trunc() as i64).to_string())
        };
        items.push(catalog.plural_with(unit.as_str(), count, &shown));
    }

    Ok(match items.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, head)) => {
            let head = head.join(", ");
            fill(
                catalog.text("delta.join"),
                &[("head", head.as_str()), ("last", last.as_str())],
            )
        }
    })
}
