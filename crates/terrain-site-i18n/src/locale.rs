//! Supported locales and the active language tag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported locale codes for the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Japanese.
    Ja,
    /// English.
    En,
}

impl Locale {
    #[must_use]
    /// All supported locales in toggle order.
    pub const fn all() -> [Self; 2] {
        [Self::Ja, Self::En]
    }

    /// Two-letter code used in storage, markup and the document `lang` attribute.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ja => "ja",
            Self::En => "en",
        }
    }

    /// Human-friendly label for toggle buttons.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ja => "日本語",
            Self::En => "English",
        }
    }

    /// Map an arbitrary language tag (`en-US`, `JA`) to a supported locale, falling back to None.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.code() == base)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Fallback locale when no usable preference is stored.
pub const DEFAULT_LOCALE: Locale = Locale::Ja;

/// Identifier of the language currently driving rendered text.
///
/// Unlike [`Locale`] this may name a language the table does not carry: a
/// toggle declaring an unknown language is still honoured, it just matches no
/// translations.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Normalise a raw identifier (trimmed, lowercased).
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_ascii_lowercase())
    }

    /// The normalised identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Supported locale named by this tag, if any. Only exact codes resolve.
    #[must_use]
    pub fn locale(&self) -> Option<Locale> {
        Locale::all()
            .into_iter()
            .find(|locale| locale.code() == self.0)
    }
}

impl From<Locale> for LanguageTag {
    fn from(locale: Locale) -> Self {
        Self(locale.code().to_string())
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
