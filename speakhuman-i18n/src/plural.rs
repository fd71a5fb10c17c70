//! Pluralization Rules
//!
//! CLDR plural rules for the languages catalogs are commonly written in.
//! English has two forms (one, other), Russian three, Arabic six.

use crate::{I18nError, Result};
use serde::{Deserialize, Serialize};

/// CLDR plural categories.
///
/// Not all languages use all categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    /// Zero items (Arabic, Welsh)
    Zero,
    /// One item (most languages)
    One,
    /// Two items (Arabic, Welsh)
    Two,
    /// Few items (Slavic languages)
    Few,
    /// Many items (Slavic languages, Arabic)
    Many,
    /// All other cases
    Other,
}

impl PluralCategory {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "zero" => Ok(Self::Zero),
            "one" => Ok(Self::One),
            "two" => Ok(Self::Two),
            "few" => Ok(Self::Few),
            "many" => Ok(Self::Many),
            "other" => Ok(Self::Other),
            _ => Err(I18nError::InvalidPluralCategory(s.to_string())),
        }
    }

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Plural rule of one language family.
///
/// Fractional counts select `Other` except where a rule says otherwise, so
/// "1.5 seconds" stays plural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PluralRule {
    /// 1 = one, else other (English, German, Spanish, ...)
    #[default]
    Default,
    /// A single form (Japanese, Chinese, Korean, ...)
    None,
    /// 0 and 1 = one, else other
    French,
    /// one / few / many by last digits (Russian, Ukrainian, Belarusian)
    Russian,
    /// 1 = one, few by last digits, else many
    Polish,
    /// 1 = one, 2-4 = few, fractions = many, else other (Czech, Slovak)
    Czech,
    /// zero / one / two / few (3) / many (6) / other
    Welsh,
    /// zero / one / two / few (3-10) / many (11-99) / other, by n mod 100
    Arabic,
}

impl PluralRule {
    /// Rule for a language code. Unknown languages get the English-like rule.
    ///
    /// # Example
    ///
    /// ```
    /// use speakhuman_i18n::{PluralCategory, PluralRule};
    ///
    /// let ru = PluralRule::for_language("ru");
    /// assert_eq!(ru.select(1.0), PluralCategory::One);
    /// assert_eq!(ru.select(3.0), PluralCategory::Few);
    /// assert_eq!(ru.select(7.0), PluralCategory::Many);
    /// ```
    pub fn for_language(language: &str) -> Self {
        match language.to_lowercase().as_str() {
            "ja" | "ko" | "zh" | "vi" | "th" | "id" | "ms" => Self::None,
            "fr" => Self::French,
            "ru" | "uk" | "be" => Self::Russian,
            "pl" => Self::Polish,
            "cs" | "sk" => Self::Czech,
            "cy" => Self::Welsh,
            "ar" => Self::Arabic,
            _ => Self::Default,
        }
    }

    /// Select the category for a count.
    pub fn select(&self, n: f64) -> PluralCategory {
        let whole = n.fract() == 0.0;
        let i = n.abs() as u64;
        let mod10 = i % 10;
        let mod100 = i % 100;

        match self {
            Self::Default if whole && i == 1 => PluralCategory::One,
            Self::Default => PluralCategory::Other,

            Self::None => PluralCategory::Other,

            Self::French if i <= 1 => PluralCategory::One,
            Self::French => PluralCategory::Other,

            Self::Russian if !whole => PluralCategory::Other,
            Self::Russian if mod10 == 1 && mod100 != 11 => PluralCategory::One,
            Self::Russian if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) => {
                PluralCategory::Few
            }
            Self::Russian => PluralCategory::Many,

            Self::Polish if !whole => PluralCategory::Other,
            Self::Polish if i == 1 => PluralCategory::One,
            Self::Polish if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) => {
                PluralCategory::Few
            }
            Self::Polish => PluralCategory::Many,

            Self::Czech if !whole => PluralCategory::Many,
            Self::Czech => match i {
                1 => PluralCategory::One,
                2..=4 => PluralCategory::Few,
                _ => PluralCategory::Other,
            },

            Self::Welsh if !whole => PluralCategory::Other,
            Self::Welsh => match i {
                0 => PluralCategory::Zero,
                1 => PluralCategory::One,
                2 => PluralCategory::Two,
                3 => PluralCategory::Few,
                6 => PluralCategory::Many,
                _ => PluralCategory::Other,
            },

            Self::Arabic if !whole => PluralCategory::Other,
            Self::Arabic => match i {
                0 => PluralCategory::Zero,
                1 => PluralCategory::One,
                2 => PluralCategory::Two,
                _ if (3..=10).contains(&mod100) => PluralCategory::Few,
                _ if (11..=99).contains(&mod100) => PluralCategory::Many,
                _ => PluralCategory::Other,
            },
        }
    }

    /// Categories this rule can produce.
    pub fn categories(&self) -> &'static [PluralCategory] {
        use PluralCategory::*;
        match self {
            Self::Default | Self::French => &[One, Other],
            Self::None => &[Other],
            Self::Russian | Self::Polish => &[One, Few, Many, Other],
            Self::Czech => &[One, Few, Many, Other],
            Self::Welsh | Self::Arabic => &[Zero, One, Two, Few, Many, Other],
        }
    }
}
