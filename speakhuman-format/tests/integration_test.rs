//! Integration tests for speakhuman-format

use chrono::{NaiveDate, TimeDelta};
use speakhuman_format::prelude::*;
use speakhuman_format::{naturalday_from, precisedelta_with};
use speakhuman_i18n::with_locale;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_intcomma_groups_every_three_digits() {
    for n in [0i64, 7, 999, 1000, 65_536, 1_234_567, -98_765_432, i64::MAX] {
        let formatted = intcomma(n).unwrap();
        let digits: String = formatted.chars().filter(|c| *c != ',').collect();
        assert_eq!(digits, n.to_string());

        let unsigned = formatted.trim_start_matches('-');
        for (i, group) in unsigned.rsplit(',').enumerate() {
            let last = i == unsigned.matches(',').count();
            assert!(
                group.len() == 3 || (last && !group.is_empty() && group.len() <= 3),
                "bad grouping in {}",
                formatted
            );
        }
    }
}

#[test]
fn test_ordinal_table() {
    let expected = [
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
    for (n, text) in expected {
        assert_eq!(ordinal(n).unwrap(), text);
    }
}

#[test]
fn test_naturalsize_table() {
    assert_eq!(naturalsize(0, false, false, "%.1f").unwrap(), "0 Bytes");
    assert_eq!(naturalsize(1024, true, false, "%.1f").unwrap(), "1.0 KiB");
    assert_eq!(naturalsize(1000, false, false, "%.1f").unwrap(), "1.0 kB");
    assert_eq!(naturalsize(1024, false, true, "%.1f").unwrap(), "1.0K");
}

#[test]
fn test_durations() {
    assert_eq!(naturaldelta(TimeDelta::seconds(60)).unwrap(), "a minute");
    assert_eq!(naturaldelta(TimeDelta::days(500)).unwrap(), "1 year, 4 months");
    assert_eq!(naturaltime(TimeDelta::minutes(-10)).unwrap(), "10 minutes from now");
    assert_eq!(precisedelta(TimeDelta::seconds(1)).unwrap(), "1 second");
    assert_eq!(
        precisedelta_with(TimeDelta::hours(50), Unit::Hours, &[Unit::Days], "%d").unwrap(),
        "50 hours"
    );
}

#[test]
fn test_natural_list_table() {
    assert_eq!(natural_list::<&str>(&[]), "");
    assert_eq!(natural_list(&["a"]), "a");
    assert_eq!(natural_list(&["a", "b"]), "a and b");
    assert_eq!(natural_list(&["a", "b", "c"]), "a, b, and c");
}

#[test]
fn test_formatting_is_repeatable() {
    let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    for _ in 0..3 {
        assert_eq!(intword("1234567890").unwrap(), "1.2 billion");
        assert_eq!(naturalday_from(date, today, "%b %d").unwrap(), "Jan 02");
        assert_eq!(precisedelta(3725.5).unwrap(), "1 hour, 2 minutes and 5.50 seconds");
    }
}

#[test]
fn test_invalid_inputs_fail() {
    assert!(matches!(intcomma("1.2.3"), Err(FormatError::InvalidNumericInput(_))));
    assert!(matches!(intword(f64::NAN), Err(FormatError::InvalidNumericInput(_))));
    assert!(matches!(naturaldelta(f64::INFINITY), Err(FormatError::InvalidNumericInput(_))));
    assert!(matches!("weeks".parse::<Unit>(), Err(FormatError::UnsupportedUnit(_))));
}

#[test]
fn test_unknown_locale_surfaces_as_locale_error() {
    let err = with_locale("xx_YY", None, || ()).unwrap_err();
    let err: FormatError = err.into();
    assert!(matches!(err, FormatError::Locale(_)));
}

#[test]
fn test_german_formatting() {
    let results = with_locale("de_DE", None, || {
        (
            intcomma(1_234_567.5).unwrap(),
            intword(2_500_000).unwrap(),
            ordinal(3).unwrap(),
            naturalsize(1_500_000, false, false, "%.1f").unwrap(),
            naturaltime(TimeDelta::minutes(5)).unwrap(),
            natural_list(&["Äpfel", "Birnen"]),
        )
    })
    .unwrap();

    assert_eq!(results.0, "1.234.567,5");
    assert_eq!(results.1, "2,5 Millionen");
    assert_eq!(results.2, "3.");
    assert_eq!(results.3, "1,5 MB");
    assert_eq!(results.4, "vor 5 Minuten");
    assert_eq!(results.5, "Äpfel und Birnen");
}

#[test]
fn test_locale_does_not_leak_between_scopes() {
    let inside = with_locale("fr_FR", None, || intcomma(1_000_000).unwrap()).unwrap();
    assert_eq!(inside, "1\u{a0}000\u{a0}000");
    assert_eq!(intcomma(1_000_000).unwrap(), "1,000,000");
}

#[test]
fn test_custom_catalog_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("es.json"),
        r#"{
            "decimal_separator": ",",
            "thousands_separator": ".",
            "messages": {
                "ago": "hace {delta}",
                "days": {"one": "{n} día", "other": "{n} días"},
                "list.pair": "{first} y {second}"
            }
        }"#,
    )
    .unwrap();

    let results = with_locale("es_ES", Some(dir.path()), || {
        (
            intcomma(1_234_567).unwrap(),
            naturaltime(TimeDelta::days(3)).unwrap(),
            natural_list(&["pan", "vino"]),
            naturaldelta(TimeDelta::seconds(60)).unwrap(),
        )
    })
    .unwrap();

    assert_eq!(results.0, "1.234.567");
    assert_eq!(results.1, "hace 3 días");
    assert_eq!(results.2, "pan y vino");
    // Untranslated keys fall back to English
    assert_eq!(results.3, "a minute");
}

#[test]
fn test_option_enums_serialize_lowercase() {
    assert_eq!(serde_json::to_string(&UnitSystem::Gnu).unwrap(), "\"gnu\"");
    assert_eq!(serde_json::to_string(&Unit::Milliseconds).unwrap(), "\"milliseconds\"");
    let gender: Gender = serde_json::from_str("\"female\"").unwrap();
    assert_eq!(gender, Gender::Female);
}
