//! The layered translation cache.
//!
//! `localize` short-circuits on the first hit:
//! 1. target locale is the native locale → text unchanged
//! 2. static dictionary
//! 3. runtime memo
//! 4. external translator (bounded by a timeout); success is memoized,
//!    failure returns the text unchanged and memoizes nothing.


use crate::category::TextCategory;
use crate::dictionary::StaticDictionary;
use crate::memo::TranslationMemo;
use holocron_core::{locale::Locale, traits::Translator};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Highest code point treated as Latin script (end of Latin Extended-B).
const LATIN_MAX: char = '\u{024F}';

/// Shared translation cache. Cheap to share behind an `Arc`.
pub struct TranslationCache {
    native: Locale,
    dictionary: StaticDictionary,
    memo: TranslationMemo,
    translator: Option<Arc<dyn Translator>>,
    timeout: Duration,
}

impl TranslationCache {
    /// `translator = None` disables external calls entirely.
    pub fn new(
        native: Locale,
        dictionary: StaticDictionary,
        memo: TranslationMemo,
        translator: Option<Arc<dyn Translator>>,
        timeout: Duration,
    ) -> Self {
        Self {
            native,
            dictionary,
            memo,
            translator,
            timeout,
        }
    }

    pub fn native_locale(&self) -> &Locale {
        &self.native
    }

    pub fn dictionary(&self) -> &StaticDictionary {
        &self.dictionary
    }

    pub fn memo(&self) -> &TranslationMemo {
        &self.memo
    }

    /// Name of the external translator, if one is configured.
    pub fn translator_name(&self) -> Option<&str> {
        self.translator.as_deref().map(|t| t.name())
    }

    /// Localize catalog text (authored in the native locale) into `locale`.
    pub async fn localize(&self, text: &str, locale: &Locale, category: TextCategory) -> String {
        if locale.same_language(&self.native) || text.trim().is_empty() {
            return text.to_string();
        }
        if let Some(curated) = self.dictionary.lookup(locale, category, text) {
            return curated.to_string();
        }
        if let Some(memoized) = self.memo.get(locale, category, text) {
            return memoized;
        }
        match self
            .call_translator(text, self.native.language(), locale.language())
            .await
        {
            Some(translated) => self.memo.insert(locale, category, text, translated),
            None => text.to_string(),
        }
    }

    /// Bring a free-text search query into the native locale.
    ///
    /// Latin-script input is returned unchanged. Otherwise the query is
    /// matched against curated localized unit names, then the memo, then
    /// the external translator.
    pub async fn to_native(&self, query: &str) -> String {
        if !needs_transliteration(query) {
            return query.to_string();
        }
        if let Some(canonical) = self.dictionary.canonical_unit_name(query) {
            return canonical.to_string();
        }
        let category = TextCategory::SearchQuery;
        if let Some(memoized) = self.memo.get(&self.native, category, query) {
            return memoized;
        }
        match self
            .call_translator(query, "auto", self.native.language())
            .await
        {
            Some(translated) => self.memo.insert(&self.native, category, query, translated),
            None => query.to_string(),
        }
    }

    /// One bounded external call. `None` on any failure.
    async fn call_translator(&self, text: &str, source: &str, target: &str) -> Option<String> {
        let translator = self.translator.as_ref()?;
        match tokio::time::timeout(self.timeout, translator.translate(text, source, target)).await
        {
            Ok(Ok(translated)) if !translated.trim().is_empty() => {
                debug!("translated via {} ({source} → {target})", translator.name());
                Some(translated)
            }
            Ok(Ok(_)) => {
                warn!("{} returned an empty translation; using source text", translator.name());
                None
            }
            Ok(Err(e)) => {
                warn!("translation unavailable, using source text: {e}");
                None
            }
            Err(_) => {
                warn!(
                    "{} timed out after {:?}; using source text",
                    translator.name(),
                    self.timeout
                );
                None
            }
        }
    }
}

/// Whether any letter falls outside the Latin script.
fn needs_transliteration(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic() && c > LATIN_MAX)
}
