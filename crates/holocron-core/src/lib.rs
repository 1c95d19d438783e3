//! # holocron-core
//!
//! Core types, traits, configuration, and error handling for the Holocron bot.

pub mod config;
pub mod error;
pub mod locale;
pub mod markup;
pub mod message;
pub mod traits;

pub use config::shellexpand;
