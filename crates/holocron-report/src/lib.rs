//! # holocron-report
//!
//! Turns a resolved unit into size-bounded output blocks, and wires the
//! resolver, translation cache, and session state into a single
//! `resolve_and_render` entry point for transports.

pub mod chunk;
pub mod labels;
pub mod lookup;
pub mod render;

#[cfg(test)]
mod testutil;

pub use chunk::{chunk_report, reassemble};
pub use lookup::Lookup;
pub use render::{Renderer, Report};
