//! # holocron-memory
//!
//! Per-requester locale preferences. The in-memory map is the source of
//! truth at runtime; an optional SQLite store persists it across restarts.

pub mod session;
pub mod store;

pub use session::SessionStore;
pub use store::PreferenceStore;
