//! Curated, load-time translation table.
//!
//! Entries are authoritative and never change after construction. The
//! table's JSON shape is `{locale: {category: {source text: translation}}}`.

use crate::category::TextCategory;
use holocron_core::locale::Locale;
use serde_json::Value;
use std::collections::HashMap;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct DictKey {
    language: String,
    category: TextCategory,
    text: String,
}

/// Static dictionary keyed by `(locale, category, text)`.
#[derive(Debug, Clone, Default)]
pub struct StaticDictionary {
    entries: HashMap<DictKey, String>,
    /// Case-folded localized unit name → canonical name.
    reverse_names: HashMap<String, String>,
}

impl StaticDictionary {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from `(locale, category, source, translation)` tuples.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, TextCategory, S, S)>,
        S: Into<String>,
    {
        let mut dict = Self::default();
        for (locale, category, source, translation) in entries {
            let locale: String = locale.into();
            dict.insert(
                &Locale::new(&locale),
                category,
                source.into(),
                translation.into(),
            );
        }
        dict
    }

    /// Build from the localization table, skipping malformed sections.
    pub fn from_value(value: &Value) -> Self {
        let mut dict = Self::default();
        let Some(locales) = value.as_object() else {
            warn!("localization table is not an object; static dictionary is empty");
            return dict;
        };
        for (locale_tag, categories) in locales {
            let locale = Locale::new(locale_tag);
            let Some(categories) = categories.as_object() else {
                warn!("localization for '{locale_tag}' is not an object; skipping");
                continue;
            };
            for (category_key, terms) in categories {
                let Some(category) = TextCategory::parse(category_key) else {
                    warn!("unknown localization category '{category_key}' for '{locale_tag}'");
                    continue;
                };
                let Some(terms) = terms.as_object() else {
                    warn!("localization '{locale_tag}.{category_key}' is not an object");
                    continue;
                };
                for (source, translation) in terms {
                    match translation.as_str() {
                        Some(t) => dict.insert(&locale, category, source.clone(), t.to_string()),
                        None => warn!(
                            "skipping non-string translation for '{source}' in {locale_tag}.{category_key}"
                        ),
                    }
                }
            }
        }
        dict
    }

    fn insert(&mut self, locale: &Locale, category: TextCategory, source: String, translation: String) {
        if category == TextCategory::UnitName {
            self.reverse_names
                .entry(translation.to_lowercase())
                .or_insert_with(|| source.clone());
        }
        self.entries
            .entry(DictKey {
                language: locale.language().to_string(),
                category,
                text: source,
            })
            .or_insert(translation);
    }

    /// Curated translation of `text` into `locale`.
    pub fn lookup(&self, locale: &Locale, category: TextCategory, text: &str) -> Option<&str> {
        self.entries
            .get(&DictKey {
                language: locale.language().to_string(),
                category,
                text: text.to_string(),
            })
            .map(String::as_str)
    }

    /// Canonical unit name for a localized name in any locale.
    pub fn canonical_unit_name(&self, localized: &str) -> Option<&str> {
        self.reverse_names
            .get(&localized.trim().to_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_and_lookup() {
        let dict = StaticDictionary::from_value(&json!({
            "ru": {
                "unit_names": {"Darth Revan": "\u{0414}\u{0430}\u{0440}\u{0442} \u{0420}\u{0435}\u{0432}\u{0430}\u{043d}"},
                "gear_materials": {"Carbanti": "\u{041a}\u{0430}\u{0440}\u{0431}\u{0430}\u{043d}\u{0442}\u{0438}", "Bad": 5},
                "bogus": {"x": "y"}
            },
            "de": "not an object"
        }));
        assert_eq!(dict.len(), 2);
        let ru = Locale::new("ru");
        assert_eq!(
            dict.lookup(&ru, TextCategory::GearMaterial, "Carbanti"),
            Some("\u{041a}\u{0430}\u{0440}\u{0431}\u{0430}\u{043d}\u{0442}\u{0438}")
        );
        // Category is part of the key.
        assert_eq!(dict.lookup(&ru, TextCategory::UnitName, "Carbanti"), None);
        // Regional variants share the primary language.
        assert!(dict
            .lookup(&Locale::new("ru-RU"), TextCategory::UnitName, "Darth Revan")
            .is_some());
    }

    #[test]
    fn test_reverse_unit_names() {
        let dict = StaticDictionary::from_entries([(
            "ru",
            TextCategory::UnitName,
            "Darth Revan",
            "\u{0414}\u{0430}\u{0440}\u{0442} \u{0420}\u{0435}\u{0432}\u{0430}\u{043d}",
        )]);
        assert_eq!(
            dict.canonical_unit_name(" \u{0434}\u{0430}\u{0440}\u{0442} \u{0440}\u{0435}\u{0432}\u{0430}\u{043d} "),
            Some("Darth Revan")
        );
        assert_eq!(dict.canonical_unit_name("nobody"), None);
    }

    #[test]
    fn test_non_object_table_is_empty() {
        assert!(StaticDictionary::from_value(&json!([1, 2])).is_empty());
    }
}
