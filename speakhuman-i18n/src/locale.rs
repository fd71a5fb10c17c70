//! Locale tags
//!
//! Parses the tags callers pass to `activate` (`"ru_RU"`, `"pt-BR"`, `"de"`)
//! and derives the file names catalogs are stored under.

use crate::{I18nError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A language with optional script and region.
///
/// # Examples
///
/// ```
/// use speakhuman_i18n::Locale;
///
/// let locale = Locale::parse("pt_br").unwrap();
/// assert_eq!(locale.tag(), "pt-BR");
/// assert_eq!(locale.posix(), "pt_BR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    /// Language code (ISO 639-1, e.g., "en", "fr", "de")
    pub language: String,
    /// Optional region code (ISO 3166-1, e.g., "US", "GB", "FR")
    pub region: Option<String>,
    /// Optional script (e.g., "Latn", "Cyrl")
    pub script: Option<String>,
}

impl Locale {
    /// Create a new locale.
    pub fn new(language: impl Into<String>, region: Option<impl Into<String>>) -> Self {
        Self {
            language: language.into().to_lowercase(),
            region: region.map(|r| r.into().to_uppercase()),
            script: None,
        }
    }

    /// Parse a BCP 47 or POSIX tag (`"en-US"`, `"sr_Latn_RS"`, `"de_DE.UTF-8"`).
    ///
    /// A POSIX codeset or modifier suffix is ignored.
    pub fn parse(tag: &str) -> Result<Self> {
        let base = tag
            .split(|c: char| c == '.' || c == '@')
            .next()
            .unwrap_or_default()
            .trim();
        let parts: Vec<&str> = base.split(|c: char| c == '-' || c == '_').collect();

        let language = parts[0].to_lowercase();
        if language.len() < 2 || language.len() > 3 || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(I18nError::InvalidLocale(tag.to_string()));
        }

        let mut script = None;
        let mut region = None;

        for part in parts.iter().skip(1) {
            if part.len() == 4 && part.chars().all(|c| c.is_ascii_alphabetic()) {
                let mut chars = part.chars();
                script = chars
                    .next()
                    .map(|first| first.to_ascii_uppercase().to_string() + &chars.as_str().to_lowercase());
            } else if part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()) {
                region = Some(part.to_uppercase());
            } else if part.len() == 3 && part.chars().all(|c| c.is_ascii_digit()) {
                // UN M.49 area code
                region = Some(part.to_string());
            } else {
                return Err(I18nError::InvalidLocale(tag.to_string()));
            }
        }

        Ok(Self {
            language,
            script,
            region,
        })
    }

    /// BCP 47 form, e.g. `"zh-Hans-CN"`.
    pub fn tag(&self) -> String {
        self.joined('-')
    }

    /// POSIX form used for catalog file names, e.g. `"ru_RU"`.
    pub fn posix(&self) -> String {
        self.joined('_')
    }

    fn joined(&self, sep: char) -> String {
        let mut tag = self.language.clone();
        for part in [&self.script, &self.region].into_iter().flatten() {
            tag.push(sep);
            tag.push_str(part);
        }
        tag
    }

    /// Get language-only locale (strips script and region).
    pub fn language_only(&self) -> Self {
        Self {
            language: self.language.clone(),
            script: None,
            region: None,
        }
    }

    /// English locales use the built-in default catalog.
    pub fn is_english(&self) -> bool {
        self.language == "en"
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self> {
        Locale::parse(s)
    }
}
