//! Internationalization: localized strings for bot command responses.
//!
//! Uses a simple `t(key, lang)` function for static strings and
//! `format_*`-style helpers for strings with interpolation.
//! `lang` is a primary language subtag. Supported: English (fallback), Russian.

mod format;
mod strings;


pub use format::*;

/// Return a localized static string for `key` in the given `lang`.
/// Falls back to English for unsupported languages and "???" for unknown keys.
pub fn t(key: &str, lang: &str) -> &'static str {
    strings::lookup(key, lang)
        .or_else(|| strings::lookup(key, "en"))
        .unwrap_or("???")
}
