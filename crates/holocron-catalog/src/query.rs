//! Query tokenization: split a trailing tier/relic selector from the unit name.

use crate::model::RELIC_MAX;

/// Progression axis selected by a trailing token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Gear tier number, as typed (may be out of range).
    Gear(i64),
    /// Relic level, as typed (may be out of range).
    Relic(i64),
}

impl Selector {
    /// Clamp a requested tier into `1..=tier_count`. `tier_count` must be non-zero.
    pub fn clamp_tier(requested: i64, tier_count: usize) -> usize {
        let max = i64::try_from(tier_count).unwrap_or(i64::MAX).max(1);
        requested.clamp(1, max) as usize
    }

    /// Clamp a requested relic level into `0..=10`.
    pub fn clamp_relic(requested: i64) -> u8 {
        requested.clamp(0, i64::from(RELIC_MAX)) as u8
    }
}

/// A parsed lookup request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Free-text unit name, whitespace-normalized.
    pub name: String,
    pub selector: Option<Selector>,
}

impl Query {
    /// Parse raw input. The last token is a selector when it is all digits
    /// (gear tier) or `R<digits>` (relic level) and at least one name token
    /// precedes it.
    pub fn parse(raw: &str) -> Self {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        if let Some((last, rest)) = tokens.split_last() {
            if !rest.is_empty() {
                if let Some(selector) = parse_selector(last) {
                    return Self {
                        name: rest.join(" "),
                        selector: Some(selector),
                    };
                }
            }
        }
        Self {
            name: tokens.join(" "),
            selector: None,
        }
    }
}

fn parse_selector(token: &str) -> Option<Selector> {
    if let Some(n) = parse_digits(token) {
        return Some(Selector::Gear(n));
    }
    let digits = token
        .strip_prefix('R')
        .or_else(|| token.strip_prefix('r'))?;
    parse_digits(digits).map(Selector::Relic)
}

/// Parse a non-empty all-ASCII-digit token, saturating on overflow.
fn parse_digits(token: &str) -> Option<i64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(token.parse::<i64>().unwrap_or(i64::MAX))
}
