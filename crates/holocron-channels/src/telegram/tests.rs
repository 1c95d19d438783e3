//! Tests for the Telegram channel module.

use super::polling::to_incoming;
use super::send::{commands_body, message_body, photo_body, BOT_COMMANDS};
use super::types::*;
use crate::utils::split_message;
use holocron_core::markup::MarkupMode;

fn message(json: &str) -> TgMessage {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_split_short_message() {
    let chunks = split_message("hello", 4096);
    assert_eq!(chunks, vec!["hello"]);
}

#[test]
fn test_split_long_message_prefers_newlines() {
    let text = "ab\n".repeat(3000);
    let chunks = split_message(&text, 4096);
    assert!(chunks.len() >= 2);
    for chunk in &chunks {
        assert!(chunk.chars().count() <= 4096);
        assert!(chunk.ends_with('\n'));
    }
    assert_eq!(chunks.concat(), text);
}

#[test]
fn test_split_counts_characters_not_bytes() {
    // 3000 Cyrillic chars = 6000 bytes, still one message.
    let text = "\u{0436}".repeat(3000);
    assert_eq!(split_message(&text, 4096).len(), 1);

    let long = "\u{0436}".repeat(5000);
    let chunks = split_message(&long, 4096);
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].chars().count(), 4096);
    assert_eq!(chunks.concat(), long);
}

#[test]
fn test_text_message_becomes_incoming() {
    let msg = message(
        r#"{
            "message_id": 1,
            "from": {"id": 42, "first_name": "Ahsoka", "username": "snips"},
            "chat": {"id": 100, "type": "private"},
            "text": "darth revan 7"
        }"#,
    );
    let incoming = to_incoming(msg, &[]).unwrap();
    assert_eq!(incoming.channel, "telegram");
    assert_eq!(incoming.sender_id, "42");
    assert_eq!(incoming.sender_name.as_deref(), Some("@snips"));
    assert_eq!(incoming.text, "darth revan 7");
    assert_eq!(incoming.reply_target.as_deref(), Some("100"));
}

#[test]
fn test_group_messages_are_accepted() {
    let msg = message(
        r#"{
            "message_id": 2,
            "from": {"id": 42, "first_name": "Ahsoka", "last_name": "Tano"},
            "chat": {"id": -100123, "type": "supergroup"},
            "text": "/help@holocron_bot"
        }"#,
    );
    let incoming = to_incoming(msg, &[]).unwrap();
    assert_eq!(incoming.sender_name.as_deref(), Some("Ahsoka Tano"));
    assert_eq!(incoming.reply_target.as_deref(), Some("-100123"));
}

#[test]
fn test_non_text_and_anonymous_messages_are_dropped() {
    let photo = message(
        r#"{
            "message_id": 3,
            "from": {"id": 42, "first_name": "Ahsoka"},
            "chat": {"id": 100, "type": "private"},
            "photo": [{"file_id": "x", "width": 90, "height": 90}]
        }"#,
    );
    assert!(to_incoming(photo, &[]).is_none());

    let channel_post = message(r#"{"message_id": 4, "chat": {"id": 100}, "text": "hi"}"#);
    assert!(to_incoming(channel_post, &[]).is_none());
}

#[test]
fn test_allowed_users_filter() {
    let json = r#"{
        "message_id": 5,
        "from": {"id": 42, "first_name": "Ahsoka"},
        "chat": {"id": 100},
        "text": "rex"
    }"#;
    assert!(to_incoming(message(json), &[7]).is_none());
    assert!(to_incoming(message(json), &[7, 42]).is_some());
}

#[test]
fn test_message_body_sets_parse_mode_for_html_only() {
    let html = message_body(100, "<b>Rex</b>", MarkupMode::Html);
    assert_eq!(html["parse_mode"], "HTML");
    assert_eq!(html["text"], "<b>Rex</b>");
    assert_eq!(html["chat_id"], 100);

    let plain = message_body(100, "Rex", MarkupMode::Plain);
    assert!(plain.get("parse_mode").is_none());
}

#[test]
fn test_photo_body_references_url() {
    let body = photo_body(
        100,
        "https://img.example/rex.png",
        "<b>Rex</b>",
        MarkupMode::Html,
    );
    assert_eq!(body["photo"], "https://img.example/rex.png");
    assert_eq!(body["caption"], "<b>Rex</b>");
    assert_eq!(body["parse_mode"], "HTML");

    let bare = photo_body(100, "https://img.example/rex.png", "", MarkupMode::Html);
    assert!(bare.get("caption").is_none());
    assert!(bare.get("parse_mode").is_none());
}

#[test]
fn test_commands_body_lists_every_command() {
    let body = commands_body();
    let commands = body["commands"].as_array().unwrap();
    assert_eq!(commands.len(), BOT_COMMANDS.len());
    let names: Vec<&str> = commands
        .iter()
        .map(|c| c["command"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["start", "help", "language", "status"]);
}

#[test]
fn test_update_response_parses() {
    let body: TgResponse<Vec<TgUpdate>> = serde_json::from_str(
        r#"{"ok": true, "result": [
            {"update_id": 10, "message": {"message_id": 1, "chat": {"id": 5}, "text": "x"}},
            {"update_id": 11}
        ]}"#,
    )
    .unwrap();
    assert!(body.ok);
    let updates = body.result.unwrap();
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[1].update_id, 11);
    assert!(updates[1].message.is_none());
}
