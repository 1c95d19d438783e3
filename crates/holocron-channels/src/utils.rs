//! Shared utilities for channel implementations.

/// Split text into chunks of at most `max_chars` characters.
///
/// Prefers breaking right after a newline. Boundaries always fall on char
/// boundaries, so multi-byte content (Cyrillic, emoji) is safe.
pub fn split_message(text: &str, max_chars: usize) -> Vec<&str> {
    if max_chars == 0 || text.chars().count() <= max_chars {
        return vec![text];
    }

    let mut chunks = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let end = rest
            .char_indices()
            .nth(max_chars)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let break_at = if end < rest.len() {
            rest[..end].rfind('\n').map(|i| i + 1).unwrap_or(end)
        } else {
            end
        };
        chunks.push(&rest[..break_at]);
        rest = &rest[break_at..];
    }
    chunks
}
