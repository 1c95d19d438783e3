//! # holocron-translate
//!
//! Localization for catalog text. Lookups go through, in order: the native
//! locale identity path, a curated static dictionary, a process-lifetime
//! memo, and finally an external [`Translator`](holocron_core::traits::Translator).

pub mod cache;
pub mod category;
pub mod dictionary;
pub mod google;
pub mod memo;

pub use cache::TranslationCache;
pub use category::TextCategory;
pub use dictionary::StaticDictionary;
pub use google::GoogleTranslator;
pub use memo::TranslationMemo;
