//! Built-in bot commands: instant responses, no lookup.

mod settings;
mod status;

#[cfg(test)]
mod tests;

use holocron_report::Lookup;
use std::time::Instant;

/// Grouped context for command execution.
pub struct CommandContext<'a> {
    pub lookup: &'a Lookup,
    pub sender_id: &'a str,
    pub text: &'a str,
    pub uptime: &'a Instant,
    pub bot_name: &'a str,
}

/// Known bot commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Language,
    Status,
}

impl Command {
    /// Parse a command from message text. Returns `None` for plain text and
    /// unknown `/` prefixes (which go to the lookup).
    pub fn parse(text: &str) -> Option<Self> {
        let first = text.split_whitespace().next()?;
        // Strip @botname suffix (e.g. "/help@holocron_bot" → "/help").
        let cmd = first.split('@').next().unwrap_or(first);
        match cmd {
            "/start" => Some(Self::Start),
            "/help" => Some(Self::Help),
            "/language" | "/lang" => Some(Self::Language),
            "/status" => Some(Self::Status),
            _ => None,
        }
    }
}

/// Handle a command and return the response text.
pub async fn handle(cmd: Command, ctx: &CommandContext<'_>) -> String {
    let locale = ctx.lookup.sessions().get(ctx.sender_id);
    let lang = locale.language();
    match cmd {
        Command::Start => crate::i18n::welcome(lang, ctx.bot_name),
        Command::Help => crate::i18n::help(lang),
        Command::Language => {
            settings::handle_language(ctx.lookup.sessions(), ctx.sender_id, ctx.text, &locale)
                .await
        }
        Command::Status => status::handle_status(ctx.lookup, ctx.uptime, lang),
    }
}
