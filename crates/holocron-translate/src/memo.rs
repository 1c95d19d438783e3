//! Process-lifetime memo of computed translations.
//!
//! Append-only: entries are never evicted or overwritten. The first value
//! stored for a key wins; a concurrent duplicate computation is discarded.

use crate::category::TextCategory;
use holocron_core::locale::Locale;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MemoKey {
    locale: Locale,
    category: TextCategory,
    text: String,
}

/// Shared, cloneable memo. Clones see the same entries.
#[derive(Debug, Clone, Default)]
pub struct TranslationMemo {
    entries: Arc<RwLock<HashMap<MemoKey, String>>>,
}

impl TranslationMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, locale: &Locale, category: TextCategory, text: &str) -> Option<String> {
        let key = MemoKey {
            locale: locale.clone(),
            category,
            text: text.to_string(),
        };
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
    }

    /// Store `value` unless the key is already present. Returns the stored value.
    pub fn insert(
        &self,
        locale: &Locale,
        category: TextCategory,
        text: &str,
        value: String,
    ) -> String {
        let key = MemoKey {
            locale: locale.clone(),
            category,
            text: text.to_string(),
        };
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert(value)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_write_wins() {
        let memo = TranslationMemo::new();
        let ru = Locale::new("ru");
        assert_eq!(
            memo.insert(&ru, TextCategory::GearMaterial, "Stun Gun", "A".into()),
            "A"
        );
        assert_eq!(
            memo.insert(&ru, TextCategory::GearMaterial, "Stun Gun", "B".into()),
            "A"
        );
        assert_eq!(
            memo.get(&ru, TextCategory::GearMaterial, "Stun Gun").as_deref(),
            Some("A")
        );
        assert_eq!(memo.len(), 1);
    }

    #[test]
    fn test_keys_are_scoped_by_locale_and_category() {
        let memo = TranslationMemo::new();
        memo.insert(&Locale::new("ru"), TextCategory::GearMaterial, "x", "1".into());
        assert!(memo.get(&Locale::new("de"), TextCategory::GearMaterial, "x").is_none());
        assert!(memo.get(&Locale::new("ru"), TextCategory::UnitName, "x").is_none());
    }

    #[test]
    fn test_clones_share_entries() {
        let memo = TranslationMemo::new();
        let other = memo.clone();
        other.insert(&Locale::new("ru"), TextCategory::Label, "Tier", "T".into());
        assert_eq!(memo.len(), 1);
    }
}
