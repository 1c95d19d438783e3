//! /language: show or set the requester's locale.

use crate::i18n;
use holocron_core::locale::Locale;
use holocron_memory::SessionStore;

pub(super) async fn handle_language(
    sessions: &SessionStore,
    sender_id: &str,
    text: &str,
    current: &Locale,
) -> String {
    let lang = current.language();
    let arg = text
        .split_whitespace()
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ");
    if arg.is_empty() {
        return i18n::language_show(lang, current.as_str());
    }

    let Some(locale) = Locale::parse(&arg) else {
        return format!(
            "{}\n{}",
            i18n::t("language_invalid", lang),
            i18n::t("language_usage", lang)
        );
    };

    // Confirm in the newly chosen language.
    let reply = i18n::language_set(locale.language(), locale.as_str());
    // The store logs persistence failures; the choice still applies for now.
    match sessions.set(sender_id, locale.clone()).await {
        Ok(()) => reply,
        Err(_) => format!("{reply}\n{}", i18n::t("language_save_failed", locale.language())),
    }
}
