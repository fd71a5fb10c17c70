//! Message Catalogs
//!
//! A catalog holds everything a locale contributes to formatting: the two
//! separators, the plural rule, plain messages and plural message forms.
//!
//! Catalogs are JSON documents:
//!
//! ```json
//! {
//!     "decimal_separator": ",",
//!     "thousands_separator": ".",
//!     "plural_rule": "de",
//!     "messages": {
//!         "a minute": "eine Minute",
//!         "minutes": { "one": "{n} Minute", "other": "{n} Minuten" }
//!     }
//! }
//! ```
//!
//! Keys missing from a catalog fall back to the built-in English catalog.

use crate::{I18nError, Locale, PluralCategory, PluralRule, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use speakhuman_log::{debug, warn};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

const ENGLISH_SOURCE: &str = include_str!("../locales/en.json");

/// Catalogs compiled into the crate, keyed by POSIX tag.
const BUILTIN: &[(&str, &str)] = &[
    ("de_DE", include_str!("../locales/de_DE.json")),
    ("fr_FR", include_str!("../locales/fr_FR.json")),
    ("ru_RU", include_str!("../locales/ru_RU.json")),
];

static ENGLISH: Lazy<Arc<Catalog>> = Lazy::new(|| {
    Arc::new(Catalog::from_json("en", ENGLISH_SOURCE).expect("built-in English catalog is valid JSON"))
});

#[derive(Debug, Deserialize)]
struct CatalogFile {
    decimal_separator: Option<char>,
    thousands_separator: Option<char>,
    plural_rule: Option<String>,
    #[serde(default)]
    messages: HashMap<String, serde_json::Value>,
}

/// Separators, plural rule and messages of one locale.
#[derive(Debug, Clone)]
pub struct Catalog {
    name: String,
    decimal_separator: char,
    thousands_separator: char,
    rule: PluralRule,
    messages: HashMap<String, String>,
    plurals: HashMap<(String, PluralCategory), String>,
}

impl Catalog {
    /// The default catalog: English text, "." decimal and "," thousands.
    pub fn english() -> Arc<Catalog> {
        Arc::clone(&ENGLISH)
    }

    /// Parse a catalog. `name` is the locale tag it was loaded for; its
    /// language picks the plural rule unless the document names one.
    pub fn from_json(name: &str, json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let language = file
            .plural_rule
            .as_deref()
            .unwrap_or_else(|| name.split(|c: char| c == '_' || c == '-').next().unwrap_or(name));

        let mut catalog = Self {
            name: name.to_string(),
            decimal_separator: file.decimal_separator.unwrap_or('.'),
            thousands_separator: file.thousands_separator.unwrap_or(','),
            rule: PluralRule::for_language(language),
            messages: HashMap::new(),
            plurals: HashMap::new(),
        };

        for (key, value) in file.messages {
            match value {
                serde_json::Value::String(s) => {
                    catalog.messages.insert(key, s);
                }
                serde_json::Value::Object(forms) => {
                    for (form, msg) in forms {
                        let serde_json::Value::String(msg) = msg else {
                            warn!("Catalog {}: non-string form {}.{} ignored", name, key, form);
                            continue;
                        };
                        match PluralCategory::from_str(&form) {
                            Ok(category) => {
                                catalog.plurals.insert((key.clone(), category), msg);
                            }
                            Err(_) => {
                                catalog.messages.insert(format!("{}.{}", key, form), msg);
                            }
                        }
                    }
                }
                other => {
                    return Err(I18nError::ParseError(format!(
                        "{}: message {} must be a string or an object of plural forms, got {}",
                        name, key, other
                    )));
                }
            }
        }

        Ok(catalog)
    }

    /// Load a catalog file for `locale`.
    pub fn load(path: impl AsRef<Path>, locale: &Locale) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_json(&locale.posix(), &content)?;
        debug!(
            "Loaded catalog {} from {} ({} messages, {} plural forms)",
            catalog.name,
            path.display(),
            catalog.messages.len(),
            catalog.plurals.len()
        );
        Ok(catalog)
    }

    /// Built-in catalog for a locale: exact tag first, then any catalog of the
    /// same language.
    pub fn builtin(locale: &Locale) -> Result<Option<Self>> {
        let posix = locale.posix();
        let found = BUILTIN
            .iter()
            .find(|(tag, _)| *tag == posix)
            .or_else(|| {
                BUILTIN
                    .iter()
                    .find(|(tag, _)| tag.split('_').next() == Some(locale.language.as_str()))
            });

        match found {
            Some((tag, source)) => {
                debug!("Using built-in catalog {} for {}", tag, posix);
                Self::from_json(tag, source).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Tags of the built-in catalogs (besides English).
    pub fn builtin_tags() -> impl Iterator<Item = &'static str> {
        BUILTIN.iter().map(|(tag, _)| *tag)
    }

    /// Tag this catalog was loaded for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Decimal separator.
    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// Thousands separator.
    pub fn thousands_separator(&self) -> char {
        self.thousands_separator
    }

    /// Plural rule.
    pub fn plural_rule(&self) -> PluralRule {
        self.rule
    }

    /// Whether this catalog defines a plain message itself.
    pub fn has(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Look up a plain message, falling back to English and then the key.
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(msg) = self.messages.get(key) {
            return msg;
        }
        ENGLISH.messages.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Look up the plural form of `key` for count `n`.
    ///
    /// Tries this catalog's category, then its `other` form, then English.
    pub fn plural<'a>(&'a self, key: &'a str, n: f64) -> &'a str {
        self.own_plural(key, self.rule.select(n))
            .or_else(|| ENGLISH.own_plural(key, ENGLISH.rule.select(n)))
            .unwrap_or(key)
    }

    fn own_plural(&self, key: &str, category: PluralCategory) -> Option<&str> {
        self.plurals
            .get(&(key.to_string(), category))
            .or_else(|| self.plurals.get(&(key.to_string(), PluralCategory::Other)))
            .map(String::as_str)
    }

    /// Plural form of `key` with `{n}` replaced by `shown`.
    pub fn plural_with(&self, key: &str, n: f64, shown: &str) -> String {
        fill(self.plural(key, n), &[("n", shown)])
    }
}

/// Replace `{name}` placeholders in a template.
///
/// The template is scanned once; inserted values are never re-scanned, so a
/// value containing `{...}` text is kept as is. Unknown placeholders stay
/// in the output.
///
/// # Example
///
/// ```
/// use speakhuman_i18n::fill;
///
/// assert_eq!(fill("{delta} ago", &[("delta", "3 days")]), "3 days ago");
/// assert_eq!(fill("{a}-{b}", &[("a", "{b}"), ("b", "x")]), "{b}-x");
/// ```
pub fn fill(template: &str, args: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let found = tail.find('}').and_then(|close| {
            let name = &tail[..close];
            args.iter()
                .find(|(arg, _)| *arg == name)
                .map(|(_, value)| (*value, close + 1))
        });
        match found {
            Some((value, consumed)) => {
                result.push_str(value);
                rest = &tail[consumed..];
            }
            None => {
                result.push('{');
                rest = tail;
            }
        }
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_catalog() {
        let en = Catalog::english();
        assert_eq!(en.decimal_separator(), '.');
        assert_eq!(en.thousands_separator(), ',');
        assert_eq!(en.text("a minute"), "a minute");
        assert_eq!(en.plural("seconds", 1.0), "{n} second");
        assert_eq!(en.plural("seconds", 2.0), "{n} seconds");
        assert_eq!(en.plural_with("days", 3.0, "3"), "3 days");
    }

    #[test]
    fn test_fill_substitutes_once() {
        assert_eq!(fill("{n} days", &[("n", "3")]), "3 days");
        assert_eq!(fill("{n} and {n}", &[("n", "1")]), "1 and 1");
        assert_eq!(
            fill("{head}, and {last}", &[("head", "{last}, b"), ("last", "c")]),
            "{last}, b, and c"
        );
        assert_eq!(fill("{unknown} {n", &[("n", "1")]), "{unknown} {n");
        assert_eq!(fill("", &[("n", "1")]), "");
    }

    #[test]
    fn test_builtin_catalogs_parse() {
        for tag in Catalog::builtin_tags() {
            let locale = Locale::parse(tag).unwrap();
            let catalog = Catalog::builtin(&locale).unwrap().unwrap();
            assert_eq!(catalog.name(), tag);
            assert!(catalog.has("a moment"), "{} lacks 'a moment'", tag);
        }
    }

    #[test]
    fn test_builtin_language_match() {
        let austria = Locale::parse("de_AT").unwrap();
        let catalog = Catalog::builtin(&austria).unwrap().unwrap();
        assert_eq!(catalog.name(), "de_DE");

        let klingon = Locale::parse("tlh").unwrap();
        assert!(Catalog::builtin(&klingon).unwrap().is_none());
    }

    #[test]
    fn test_missing_key_falls_back() {
        let catalog = Catalog::from_json("xx", r#"{"messages": {"today": "hoy"}}"#).unwrap();
        assert_eq!(catalog.text("today"), "hoy");
        assert_eq!(catalog.text("tomorrow"), "tomorrow");
        assert_eq!(catalog.text("no.such.key"), "no.such.key");
        assert_eq!(catalog.plural("hours", 5.0), "{n} hours");
    }

    #[test]
    fn test_plural_forms_and_nested_keys() {
        let json = r#"{
            "decimal_separator": ",",
            "thousands_separator": " ",
            "plural_rule": "ru",
            "messages": {
                "days": { "one": "{n} день", "few": "{n} дня", "many": "{n} дней" },
                "ordinal": { "male": "-й" }
            }
        }"#;
        let catalog = Catalog::from_json("ru_RU", json).unwrap();
        assert_eq!(catalog.decimal_separator(), ',');
        assert_eq!(catalog.thousands_separator(), ' ');
        assert_eq!(catalog.plural_with("days", 21.0, "21"), "21 день");
        assert_eq!(catalog.plural_with("days", 3.0, "3"), "3 дня");
        assert_eq!(catalog.plural_with("days", 5.0, "5"), "5 дней");
        // No "other" form: English takes over
        assert_eq!(catalog.plural_with("days", 1.5, "1,5"), "1,5 days");
        assert_eq!(catalog.text("ordinal.male"), "-й");
    }

    #[test]
    fn test_rejects_bad_messages() {
        assert!(Catalog::from_json("xx", r#"{"messages": {"now": 3}}"#).is_err());
        assert!(Catalog::from_json("xx", "not json").is_err());
    }

    #[test]
    fn test_fill() {
        assert_eq!(
            fill("{head} and {last}", &[("head", "a, b"), ("last", "c")]),
            "a, b and c"
        );
        assert_eq!(fill("no placeholders", &[("n", "1")]), "no placeholders");
    }
}
