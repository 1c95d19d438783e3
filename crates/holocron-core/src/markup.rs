//! Output markup modes and per-field escaping.
//!
//! Escaping is applied to individual rendered fields (names, roles, item
//! names). Structural markup produced by [`MarkupMode::bold`] and
//! [`MarkupMode::italic`] is never passed back through [`MarkupMode::escape`].

use serde::{Deserialize, Serialize};

/// How rendered text is interpreted by the transport.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupMode {
    /// Telegram-style HTML subset (`<b>`, `<i>`).
    #[default]
    Html,
    /// No markup at all.
    Plain,
}

impl MarkupMode {
    /// Escape markup metacharacters in a single field.
    pub fn escape(&self, field: &str) -> String {
        match self {
            Self::Plain => field.to_string(),
            Self::Html => {
                let mut out = String::with_capacity(field.len());
                for c in field.chars() {
                    match c {
                        '&' => out.push_str("&amp;"),
                        '<' => out.push_str("&lt;"),
                        '>' => out.push_str("&gt;"),
                        '"' => out.push_str("&quot;"),
                        _ => out.push(c),
                    }
                }
                out
            }
        }
    }

    /// Wrap an already-escaped field in bold markup.
    pub fn bold(&self, escaped: &str) -> String {
        match self {
            Self::Html => format!("<b>{escaped}</b>"),
            Self::Plain => escaped.to_string(),
        }
    }

    /// Wrap an already-escaped field in italic markup.
    pub fn italic(&self, escaped: &str) -> String {
        match self {
            Self::Html => format!("<i>{escaped}</i>"),
            Self::Plain => escaped.to_string(),
        }
    }

    /// Value for the transport's `parse_mode` parameter, if any.
    pub fn parse_mode(&self) -> Option<&'static str> {
        match self {
            Self::Html => Some("HTML"),
            Self::Plain => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape_metacharacters() {
        let escaped = MarkupMode::Html.escape("Mk 3 <Carbanti> & \"Sensor\"");
        assert_eq!(escaped, "Mk 3 &lt;Carbanti&gt; &amp; &quot;Sensor&quot;");
    }

    #[test]
    fn test_plain_is_untouched() {
        assert_eq!(MarkupMode::Plain.escape("a < b & c"), "a < b & c");
        assert_eq!(MarkupMode::Plain.bold("x"), "x");
    }

    #[test]
    fn test_structural_markup_wraps_escaped_field() {
        let mode = MarkupMode::Html;
        let out = mode.bold(&mode.escape("R&D"));
        assert_eq!(out, "<b>R&amp;D</b>");
        assert_eq!(mode.parse_mode(), Some("HTML"));
        assert_eq!(MarkupMode::Plain.parse_mode(), None);
    }
}
