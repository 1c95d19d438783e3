use super::*;
use crate::testutil::sample_lookup;
use holocron_core::locale::Locale;

async fn run(lookup: &Lookup, sender_id: &str, text: &str) -> String {
    let cmd = Command::parse(text).unwrap();
    let uptime = Instant::now();
    let ctx = CommandContext {
        lookup,
        sender_id,
        text,
        uptime: &uptime,
        bot_name: "Holocron",
    };
    handle(cmd, &ctx).await
}

#[test]
fn test_parse_all_commands() {
    assert_eq!(Command::parse("/start"), Some(Command::Start));
    assert_eq!(Command::parse("/help"), Some(Command::Help));
    assert_eq!(Command::parse("/language ru"), Some(Command::Language));
    assert_eq!(Command::parse("/lang"), Some(Command::Language));
    assert_eq!(Command::parse("/status"), Some(Command::Status));
}

#[test]
fn test_parse_strips_bot_suffix() {
    assert_eq!(Command::parse("/help@holocron_bot"), Some(Command::Help));
    assert_eq!(
        Command::parse("/language@holocron_bot de"),
        Some(Command::Language)
    );
}

#[test]
fn test_parse_non_commands() {
    assert_eq!(Command::parse("darth revan 7"), None);
    assert_eq!(Command::parse("/unknown"), None);
    assert_eq!(Command::parse(""), None);
    assert_eq!(Command::parse("   "), None);
}

#[tokio::test]
async fn test_start_and_help() {
    let lookup = sample_lookup();
    let start = run(&lookup, "u1", "/start").await;
    assert!(start.starts_with("Hi! I'm Holocron."));
    let help = run(&lookup, "u1", "/help").await;
    assert_eq!(help, crate::i18n::help("en"));
}

#[tokio::test]
async fn test_language_show_set_and_reject() {
    let lookup = sample_lookup();

    let shown = run(&lookup, "u1", "/language").await;
    assert!(shown.starts_with("Language: en\n"));

    let set = run(&lookup, "u1", "/language Russian").await;
    assert_eq!(
        set,
        "\u{042f}\u{0437}\u{044b}\u{043a} \u{0443}\u{0441}\u{0442}\u{0430}\u{043d}\u{043e}\u{0432}\u{043b}\u{0435}\u{043d}: ru"
    );
    assert_eq!(lookup.sessions().get("u1"), Locale::new("ru"));
    assert_eq!(lookup.sessions().get("u2"), Locale::new("en"));

    let rejected = run(&lookup, "u2", "/language klingon").await;
    assert!(rejected.starts_with("Unrecognized language."));
    assert_eq!(lookup.sessions().get("u2"), Locale::new("en"));
}

#[tokio::test]
async fn test_replies_follow_session_language() {
    let lookup = sample_lookup();
    lookup.sessions().set("u1", Locale::new("ru")).await.unwrap();
    let help = run(&lookup, "u1", "/help").await;
    assert_eq!(help, crate::i18n::help("ru"));
}

#[tokio::test]
async fn test_status_reports_catalog_counts() {
    let lookup = sample_lookup();
    let status = run(&lookup, "u1", "/status").await;
    assert!(status.starts_with("Status\n"));
    assert!(status.contains("Characters: 2"));
    assert!(status.contains("Gear items: 1"));
    assert!(status.contains("Relic levels: 0"));
    assert!(status.contains("Translator: off"));
    assert!(!status.contains("catalog is empty"));
}
