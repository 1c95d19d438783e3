//! # holocron-catalog
//!
//! Immutable game-data catalog (units, gear, relic requirements), the
//! data-source boundary that maps raw JSON into typed entities, and the
//! fuzzy resolver that turns free text into a unit.

pub mod catalog;
pub mod model;
pub mod query;
pub mod resolver;
pub mod similarity;
pub mod source;

#[cfg(test)]
mod testutil;

pub use catalog::Catalog;
pub use model::{Alignment, GearItem, GearTier, RelicRequirement, RelicTable, Unit};
pub use query::{Query, Selector};
pub use resolver::{Candidate, Resolution, Resolver};
pub use source::{DataSource, JsonFileSource, RawData};
