//! Locale tags.
//!
//! A [`Locale`] is a normalized BCP-47-ish tag (`en`, `ru`, `pt-br`). Only the
//! primary language subtag matters for label lookup and translation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-readable names accepted by `/language`, mapped to their tags.
const KNOWN_NAMES: &[(&str, &str)] = &[
    ("english", "en"),
    ("russian", "ru"),
    ("\u{0440}\u{0443}\u{0441}\u{0441}\u{043a}\u{0438}\u{0439}", "ru"),
    ("ukrainian", "uk"),
    ("\u{0443}\u{043a}\u{0440}\u{0430}\u{0457}\u{043d}\u{0441}\u{044c}\u{043a}\u{0430}", "uk"),
    ("german", "de"),
    ("deutsch", "de"),
    ("french", "fr"),
    ("fran\u{00e7}ais", "fr"),
    ("spanish", "es"),
    ("espa\u{00f1}ol", "es"),
    ("italian", "it"),
    ("portuguese", "pt"),
    ("polish", "pl"),
];

/// A normalized locale tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Build a locale from a tag, normalizing case and separators.
    pub fn new(tag: &str) -> Self {
        Self(tag.trim().to_lowercase().replace('_', "-"))
    }

    /// Parse user input: either a language name ("Russian", "русский") or a tag ("ru", "pt-BR").
    pub fn parse(input: &str) -> Option<Self> {
        let lowered = input.trim().to_lowercase();
        if lowered.is_empty() {
            return None;
        }
        if let Some((_, tag)) = KNOWN_NAMES.iter().find(|(name, _)| *name == lowered) {
            return Some(Self::new(tag));
        }
        let normalized = lowered.replace('_', "-");
        let mut parts = normalized.split('-');
        let primary = parts.next().unwrap_or_default();
        let primary_ok =
            (2..=3).contains(&primary.len()) && primary.chars().all(|c| c.is_ascii_alphabetic());
        let rest_ok = parts.all(|p| {
            (2..=8).contains(&p.len()) && p.chars().all(|c| c.is_ascii_alphanumeric())
        });
        (primary_ok && rest_ok).then(|| Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag (`pt-br` → `pt`).
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// Whether two locales share a primary language.
    pub fn same_language(&self, other: &Locale) -> bool {
        self.language() == other.language()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Locale {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<&str> for Locale {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<Locale> for String {
    fn from(value: Locale) -> Self {
        value.0
    }
}
