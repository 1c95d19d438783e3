//! Built-in report labels.
//!
//! English and Russian ship with the bot. Other locales fall back to the
//! English label passed through the translation cache.

/// Localized label for `key`, if built in for `lang`.
pub fn builtin(key: &str, lang: &str) -> Option<&'static str> {
    let value = match (key, lang) {
        ("tier", "ru") => "\u{0422}\u{0438}\u{0440}",
        ("tier", _) => "Tier",
        ("relic", "ru") => "\u{0420}\u{0435}\u{043b}\u{0438}\u{043a}\u{0442}",
        ("relic", _) => "Relic",
        ("no_gear_data", "ru") => "\u{041d}\u{0435}\u{0442} \u{0434}\u{0430}\u{043d}\u{043d}\u{044b}\u{0445} \u{043e} \u{0441}\u{043d}\u{0430}\u{0440}\u{044f}\u{0436}\u{0435}\u{043d}\u{0438}\u{0438}",
        ("no_gear_data", _) => "No gear data",
        ("no_relic_data", "ru") => "\u{041d}\u{0435}\u{0442} \u{0434}\u{0430}\u{043d}\u{043d}\u{044b}\u{0445} \u{043e} \u{0440}\u{0435}\u{043b}\u{0438}\u{043a}\u{0442}\u{0430}\u{0445}",
        ("no_relic_data", _) => "No relic data",
        ("no_extra_resources", "ru") => "\u{0411}\u{0435}\u{0437} \u{0434}\u{043e}\u{043f}\u{043e}\u{043b}\u{043d}\u{0438}\u{0442}\u{0435}\u{043b}\u{044c}\u{043d}\u{044b}\u{0445} \u{0440}\u{0435}\u{0441}\u{0443}\u{0440}\u{0441}\u{043e}\u{0432}",
        ("no_extra_resources", _) => "No additional resources",
        ("alignment_light", "ru") => "\u{0421}\u{0432}\u{0435}\u{0442}\u{043b}\u{0430}\u{044f} \u{0441}\u{0442}\u{043e}\u{0440}\u{043e}\u{043d}\u{0430}",
        ("alignment_light", _) => "Light Side",
        ("alignment_dark", "ru") => "\u{0422}\u{0451}\u{043c}\u{043d}\u{0430}\u{044f} \u{0441}\u{0442}\u{043e}\u{0440}\u{043e}\u{043d}\u{0430}",
        ("alignment_dark", _) => "Dark Side",
        ("alignment_neutral", "ru") => "\u{041d}\u{0435}\u{0439}\u{0442}\u{0440}\u{0430}\u{043b}",
        ("alignment_neutral", _) => "Neutral",
        ("role_attacker", "ru") => "\u{0410}\u{0442}\u{0430}\u{043a}\u{0443}\u{044e}\u{0449}\u{0438}\u{0439}",
        ("role_attacker", _) => "Attacker",
        ("role_tank", "ru") => "\u{0422}\u{0430}\u{043d}\u{043a}",
        ("role_tank", _) => "Tank",
        ("role_support", "ru") => "\u{041f}\u{043e}\u{0434}\u{0434}\u{0435}\u{0440}\u{0436}\u{043a}\u{0430}",
        ("role_support", _) => "Support",
        ("role_healer", "ru") => "\u{041b}\u{0435}\u{043a}\u{0430}\u{0440}\u{044c}",
        ("role_healer", _) => "Healer",
        ("role_leader", "ru") => "\u{041b}\u{0438}\u{0434}\u{0435}\u{0440}",
        ("role_leader", _) => "Leader",
        ("not_found", "ru") => "\u{041f}\u{0435}\u{0440}\u{0441}\u{043e}\u{043d}\u{0430}\u{0436} \u{043d}\u{0435} \u{043d}\u{0430}\u{0439}\u{0434}\u{0435}\u{043d}",
        ("not_found", _) => "Character not found",
        ("did_you_mean", "ru") => "\u{0412}\u{043e}\u{0437}\u{043c}\u{043e}\u{0436}\u{043d}\u{043e}, \u{0432}\u{044b} \u{0438}\u{043c}\u{0435}\u{043b}\u{0438} \u{0432}\u{0432}\u{0438}\u{0434}\u{0443}:",
        ("did_you_mean", _) => "Did you mean:",
        ("pick_hint", "ru") => "\u{041e}\u{0442}\u{043f}\u{0440}\u{0430}\u{0432}\u{044c}\u{0442}\u{0435} \u{043d}\u{043e}\u{043c}\u{0435}\u{0440}, \u{0447}\u{0442}\u{043e}\u{0431}\u{044b} \u{0432}\u{044b}\u{0431}\u{0440}\u{0430}\u{0442}\u{044c}.",
        ("pick_hint", _) => "Reply with a number to pick one.",
        ("usage", "ru") => "\u{0412}\u{0432}\u{0435}\u{0434}\u{0438}\u{0442}\u{0435} \u{0438}\u{043c}\u{044f} \u{043f}\u{0435}\u{0440}\u{0441}\u{043e}\u{043d}\u{0430}\u{0436}\u{0430}, \u{043d}\u{0430}\u{043f}\u{0440}\u{0438}\u{043c}\u{0435}\u{0440}: Darth Revan 7 \u{0438}\u{043b}\u{0438} Rey R5",
        ("usage", _) => "Type a character name, e.g. Darth Revan 7 or Rey R5",
        _ => return None,
    };
    if lang == "ru" || lang == "en" {
        Some(value)
    } else {
        None
    }
}

/// English label, the source text for translated fallbacks.
pub fn english(key: &str) -> &'static str {
    builtin(key, "en").unwrap_or("???")
}

/// Label key for a role keyword, if it is a known role.
pub fn role_key(role: &str) -> Option<&'static str> {
    match role.trim().to_lowercase().as_str() {
        "attacker" => Some("role_attacker"),
        "tank" => Some("role_tank"),
        "support" => Some("role_support"),
        "healer" => Some("role_healer"),
        "leader" => Some("role_leader"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: &[&str] = &[
        "tier",
        "relic",
        "no_gear_data",
        "no_relic_data",
        "no_extra_resources",
        "alignment_light",
        "alignment_dark",
        "alignment_neutral",
        "role_attacker",
        "role_tank",
        "role_support",
        "role_healer",
        "role_leader",
        "not_found",
        "did_you_mean",
        "pick_hint",
        "usage",
    ];

    #[test]
    fn test_all_keys_have_english_and_russian() {
        for key in KEYS {
            assert!(builtin(key, "en").is_some(), "missing en label: {key}");
            assert!(builtin(key, "ru").is_some(), "missing ru label: {key}");
            assert_ne!(builtin(key, "en"), builtin(key, "ru"), "ru label equals en: {key}");
        }
    }

    #[test]
    fn test_other_languages_are_not_builtin() {
        assert_eq!(builtin("tier", "de"), None);
        assert_eq!(english("tier"), "Tier");
        assert_eq!(english("bogus"), "???");
    }

    #[test]
    fn test_role_keys() {
        assert_eq!(role_key(" Tank "), Some("role_tank"));
        assert_eq!(role_key("Fleet Commander"), None);
    }
}
