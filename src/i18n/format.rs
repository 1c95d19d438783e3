//! Format helpers for strings with interpolation.

use super::t;

/// Greeting shown by /start.
pub fn welcome(lang: &str, bot_name: &str) -> String {
    let greeting = match lang {
        "ru" => format!("\u{041f}\u{0440}\u{0438}\u{0432}\u{0435}\u{0442}! \u{042f} {bot_name}. \u{041d}\u{0430}\u{043f}\u{0438}\u{0448}\u{0438} \u{0438}\u{043c}\u{044f} \u{043f}\u{0435}\u{0440}\u{0441}\u{043e}\u{043d}\u{0430}\u{0436}\u{0430}, \u{0438} \u{044f} \u{043f}\u{043e}\u{043a}\u{0430}\u{0436}\u{0443} \u{0435}\u{0433}\u{043e} \u{0441}\u{043d}\u{0430}\u{0440}\u{044f}\u{0436}\u{0435}\u{043d}\u{0438}\u{0435}."),
        _ => format!("Hi! I'm {bot_name}. Send me a character name and I'll show its gear."),
    };
    format!("{greeting}\n\n{}", help(lang))
}

/// Usage examples plus the command list.
pub fn help(lang: &str) -> String {
    format!(
        "{}\n\u{2022} {}\n\u{2022} {}\n\u{2022} {}\n\n{}\n{}\n{}\n{}",
        t("help_header", lang),
        t("help_name", lang),
        t("help_tier", lang),
        t("help_relic", lang),
        t("commands_header", lang),
        t("cmd_language", lang),
        t("cmd_status", lang),
        t("cmd_help", lang),
    )
}

/// Format the language set confirmation.
pub fn language_set(lang: &str, tag: &str) -> String {
    match lang {
        "ru" => format!("\u{042f}\u{0437}\u{044b}\u{043a} \u{0443}\u{0441}\u{0442}\u{0430}\u{043d}\u{043e}\u{0432}\u{043b}\u{0435}\u{043d}: {tag}"),
        _ => format!("Language set to: {tag}"),
    }
}

/// Format language show with usage hint.
pub fn language_show(lang: &str, current: &str) -> String {
    format!(
        "{} {current}\n{}",
        t("language_label", lang),
        t("language_usage", lang)
    )
}

/// Format an uptime as `1h 2m 3s`.
pub fn uptime(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let secs = secs % 60;
    format!("{hours}h {minutes}m {secs}s")
}
