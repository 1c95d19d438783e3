//! Static command-response strings.

pub(super) fn lookup(key: &str, lang: &str) -> Option<&'static str> {
    let value = match (key, lang) {
        ("help_header", "en") => "How to look up a character:",
        ("help_header", "ru") => "\u{041a}\u{0430}\u{043a} \u{043d}\u{0430}\u{0439}\u{0442}\u{0438} \u{043f}\u{0435}\u{0440}\u{0441}\u{043e}\u{043d}\u{0430}\u{0436}\u{0430}:",
        ("help_name", "en") => "Darth Revan \u{2014} every gear tier",
        ("help_name", "ru") => "Darth Revan \u{2014} \u{0432}\u{0441}\u{0435} \u{0442}\u{0438}\u{0440}\u{044b} \u{0441}\u{043d}\u{0430}\u{0440}\u{044f}\u{0436}\u{0435}\u{043d}\u{0438}\u{044f}",
        ("help_tier", "en") => "Darth Revan 7 \u{2014} gear tier 7 only",
        ("help_tier", "ru") => "Darth Revan 7 \u{2014} \u{0442}\u{043e}\u{043b}\u{044c}\u{043a}\u{043e} \u{0442}\u{0438}\u{0440} 7",
        ("help_relic", "en") => "Darth Revan R5 \u{2014} relic level 5 resources",
        ("help_relic", "ru") => "Darth Revan R5 \u{2014} \u{0440}\u{0435}\u{0441}\u{0443}\u{0440}\u{0441}\u{044b} \u{0440}\u{0435}\u{043b}\u{0438}\u{043a}\u{0442}\u{0430} 5",
        ("commands_header", "en") => "Commands:",
        ("commands_header", "ru") => "\u{041a}\u{043e}\u{043c}\u{0430}\u{043d}\u{0434}\u{044b}:",
        ("cmd_language", "en") => "/language [code] \u{2014} show or set your language",
        ("cmd_language", "ru") => "/language [\u{043a}\u{043e}\u{0434}] \u{2014} \u{043f}\u{043e}\u{043a}\u{0430}\u{0437}\u{0430}\u{0442}\u{044c} \u{0438}\u{043b}\u{0438} \u{0441}\u{043c}\u{0435}\u{043d}\u{0438}\u{0442}\u{044c} \u{044f}\u{0437}\u{044b}\u{043a}",
        ("cmd_status", "en") => "/status \u{2014} catalog and translation status",
        ("cmd_status", "ru") => "/status \u{2014} \u{0441}\u{043e}\u{0441}\u{0442}\u{043e}\u{044f}\u{043d}\u{0438}\u{0435} \u{043a}\u{0430}\u{0442}\u{0430}\u{043b}\u{043e}\u{0433}\u{0430} \u{0438} \u{043f}\u{0435}\u{0440}\u{0435}\u{0432}\u{043e}\u{0434}\u{0430}",
        ("cmd_help", "en") => "/help \u{2014} this message",
        ("cmd_help", "ru") => "/help \u{2014} \u{044d}\u{0442}\u{043e} \u{0441}\u{043e}\u{043e}\u{0431}\u{0449}\u{0435}\u{043d}\u{0438}\u{0435}",
        ("language_label", "en") => "Language:",
        ("language_label", "ru") => "\u{042f}\u{0437}\u{044b}\u{043a}:",
        ("language_usage", "en") => "Usage: /language <code or name>, e.g. /language ru",
        ("language_usage", "ru") => "\u{0418}\u{0441}\u{043f}\u{043e}\u{043b}\u{044c}\u{0437}\u{043e}\u{0432}\u{0430}\u{043d}\u{0438}\u{0435}: /language <\u{043a}\u{043e}\u{0434} \u{0438}\u{043b}\u{0438} \u{043d}\u{0430}\u{0437}\u{0432}\u{0430}\u{043d}\u{0438}\u{0435}>, \u{043d}\u{0430}\u{043f}\u{0440}\u{0438}\u{043c}\u{0435}\u{0440} /language en",
        ("language_invalid", "en") => "Unrecognized language.",
        ("language_invalid", "ru") => "\u{041d}\u{0435}\u{0438}\u{0437}\u{0432}\u{0435}\u{0441}\u{0442}\u{043d}\u{044b}\u{0439} \u{044f}\u{0437}\u{044b}\u{043a}.",
        ("language_save_failed", "en") => "Language set for now, but it could not be saved.",
        ("language_save_failed", "ru") => "\u{042f}\u{0437}\u{044b}\u{043a} \u{0443}\u{0441}\u{0442}\u{0430}\u{043d}\u{043e}\u{0432}\u{043b}\u{0435}\u{043d}, \u{043d}\u{043e} \u{043d}\u{0435} \u{0441}\u{043e}\u{0445}\u{0440}\u{0430}\u{043d}\u{0451}\u{043d}.",
        ("status_header", "en") => "Status",
        ("status_header", "ru") => "\u{0421}\u{043e}\u{0441}\u{0442}\u{043e}\u{044f}\u{043d}\u{0438}\u{0435}",
        ("uptime", "en") => "Uptime:",
        ("uptime", "ru") => "\u{0410}\u{043f}\u{0442}\u{0430}\u{0439}\u{043c}:",
        ("units", "en") => "Characters:",
        ("units", "ru") => "\u{041f}\u{0435}\u{0440}\u{0441}\u{043e}\u{043d}\u{0430}\u{0436}\u{0438}:",
        ("gear_items", "en") => "Gear items:",
        ("gear_items", "ru") => "\u{0421}\u{043d}\u{0430}\u{0440}\u{044f}\u{0436}\u{0435}\u{043d}\u{0438}\u{0435}:",
        ("relic_levels", "en") => "Relic levels:",
        ("relic_levels", "ru") => "\u{0423}\u{0440}\u{043e}\u{0432}\u{043d}\u{0438} \u{0440}\u{0435}\u{043b}\u{0438}\u{043a}\u{0442}\u{043e}\u{0432}:",
        ("translator", "en") => "Translator:",
        ("translator", "ru") => "\u{041f}\u{0435}\u{0440}\u{0435}\u{0432}\u{043e}\u{0434}\u{0447}\u{0438}\u{043a}:",
        ("translator_off", "en") => "off",
        ("translator_off", "ru") => "\u{0432}\u{044b}\u{043a}\u{043b}",
        ("cached_translations", "en") => "Cached translations:",
        ("cached_translations", "ru") => "\u{041a}\u{044d}\u{0448} \u{043f}\u{0435}\u{0440}\u{0435}\u{0432}\u{043e}\u{0434}\u{043e}\u{0432}:",
        ("catalog_empty", "en") => "The catalog is empty; lookups will find nothing.",
        ("catalog_empty", "ru") => "\u{041a}\u{0430}\u{0442}\u{0430}\u{043b}\u{043e}\u{0433} \u{043f}\u{0443}\u{0441}\u{0442}; \u{043f}\u{043e}\u{0438}\u{0441}\u{043a} \u{043d}\u{0438}\u{0447}\u{0435}\u{0433}\u{043e} \u{043d}\u{0435} \u{043d}\u{0430}\u{0439}\u{0434}\u{0451}\u{0442}.",
        _ => return None,
    };
    Some(value)
}
