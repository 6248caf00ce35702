//! Display languages and per-language text.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::CoreError;

/// The three display languages of the network.  Arabic is the default and
/// the only right-to-left one.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    #[default]
    Ar,
    Fr,
    En,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Ar, Language::Fr, Language::En];

    #[inline]
    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }

    /// ISO 639-1 code.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::Fr => "fr",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" => Ok(Language::Ar),
            "fr" => Ok(Language::Fr),
            "en" => Ok(Language::En),
            other => Err(CoreError::Parse(format!(
                "unknown language {other:?}: expected \"ar\", \"fr\", or \"en\""
            ))),
        }
    }
}

/// One string per [`Language`].
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalizedText {
    pub ar: String,
    pub fr: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(ar: impl Into<String>, fr: impl Into<String>, en: impl Into<String>) -> Self {
        Self { ar: ar.into(), fr: fr.into(), en: en.into() }
    }

    #[inline]
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Ar => &self.ar,
            Language::Fr => &self.fr,
            Language::En => &self.en,
        }
    }
}

impl Index<Language> for LocalizedText {
    type Output = str;

    #[inline]
    fn index(&self, lang: Language) -> &str {
        self.get(lang)
    }
}
