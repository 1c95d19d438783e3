//! Typed catalog entities.
//!
//! Raw records are mapped into these types once, at load time. Nothing
//! downstream touches untyped JSON.

use std::collections::BTreeMap;

/// Highest relic level.
pub const RELIC_MAX: u8 = 10;

/// Which side of the Force a unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    Light,
    Dark,
    Neutral,
}

impl Alignment {
    /// Parse the catalog's alignment field ("Light Side", "dark", ...).
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        if lowered.contains("light") {
            Self::Light
        } else if lowered.contains("dark") {
            Self::Dark
        } else {
            Self::Neutral
        }
    }

    /// Derive alignment from free-text description when the field is absent.
    pub fn from_description(description: &str) -> Self {
        let lowered = description.to_lowercase();
        if lowered.contains("light side") {
            Self::Light
        } else if lowered.contains("dark side") {
            Self::Dark
        } else {
            Self::Neutral
        }
    }

    /// Stable label key for localized rendering.
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Light => "alignment_light",
            Self::Dark => "alignment_dark",
            Self::Neutral => "alignment_neutral",
        }
    }
}

const ROLE_KEYWORDS: &[&str] = &["Attacker", "Tank", "Support", "Healer", "Leader"];

/// Pick the first role keyword mentioned in a description.
pub fn role_from_description(description: &str) -> Option<String> {
    let lowered = description.to_lowercase();
    ROLE_KEYWORDS
        .iter()
        .map(|kw| (kw, lowered.find(&kw.to_lowercase())))
        .filter_map(|(kw, pos)| pos.map(|p| (p, kw)))
        .min_by_key(|(p, _)| *p)
        .map(|(_, kw)| kw.to_string())
}

/// A gear item (material) identified by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GearItem {
    pub id: String,
    pub name: String,
}

/// One gear-progression stage. Item order is significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GearTier {
    number: u32,
    items: Vec<String>,
}

impl GearTier {
    pub fn new(number: u32, items: Vec<String>) -> Self {
        Self { number, items }
    }

    /// 1-based tier number.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Gear item ids, in loaded order.
    pub fn items(&self) -> &[String] {
        &self.items
    }
}

/// A playable unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub id: String,
    pub name: String,
    pub description: String,
    pub alignment: Alignment,
    pub role: Option<String>,
    /// Absolute image URL.
    pub image: Option<String>,
    tiers: Vec<GearTier>,
}

impl Unit {
    /// Build a unit. Tiers must already be sorted and numbered 1..=N.
    pub(crate) fn new(
        id: String,
        name: String,
        description: String,
        alignment: Alignment,
        role: Option<String>,
        image: Option<String>,
        tiers: Vec<GearTier>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            alignment,
            role,
            image,
            tiers,
        }
    }

    pub fn tiers(&self) -> &[GearTier] {
        &self.tiers
    }

    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }

    /// Tier by 1-based number.
    pub fn tier(&self, number: usize) -> Option<&GearTier> {
        number.checked_sub(1).and_then(|i| self.tiers.get(i))
    }
}

/// Resources required for one relic level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelicRequirement {
    pub level: u8,
    /// Resource name → count. Empty = nothing beyond the base cost.
    pub resources: BTreeMap<String, u32>,
}

/// Relic requirements keyed by level 0..=10.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelicTable {
    levels: BTreeMap<u8, RelicRequirement>,
}

impl RelicTable {
    pub fn new(levels: impl IntoIterator<Item = RelicRequirement>) -> Self {
        Self {
            levels: levels.into_iter().map(|r| (r.level, r)).collect(),
        }
    }

    pub fn requirement(&self, level: u8) -> Option<&RelicRequirement> {
        self.levels.get(&level)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
