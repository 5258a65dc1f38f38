//! Site languages and bilingual text resolution.
//!
//! Every content table stores a Portuguese/English pair per text field with
//! no parity requirement. Readers resolve a pair for one locale, falling
//! back to the other language when the requested one is blank.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A supported site language. Portuguese is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Pt,
    En,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pt => "pt",
            Self::En => "en",
        }
    }

    /// The other supported language.
    pub fn fallback(self) -> Self {
        match self {
            Self::Pt => Self::En,
            Self::En => Self::Pt,
        }
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pt" => Ok(Self::Pt),
            "en" => Ok(Self::En),
            other => Err(CoreError::Validation(format!(
                "Unsupported locale '{other}'. Must be one of: pt, en"
            ))),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Borrowed view over one Portuguese/English text pair.
#[derive(Debug, Clone, Copy)]
pub struct Bilingual<'a> {
    pub pt: Option<&'a str>,
    pub en: Option<&'a str>,
}

impl<'a> Bilingual<'a> {
    pub fn new(pt: Option<&'a str>, en: Option<&'a str>) -> Self {
        Self { pt, en }
    }

    fn get(&self, locale: Locale) -> Option<&'a str> {
        let text = match locale {
            Locale::Pt => self.pt,
            Locale::En => self.en,
        };
        text.filter(|s| !s.trim().is_empty())
    }

    /// Text for `locale`, or the other language's text when blank.
    pub fn resolve(&self, locale: Locale) -> Option<&'a str> {
        self.get(locale).or_else(|| self.get(locale.fallback()))
    }
}
