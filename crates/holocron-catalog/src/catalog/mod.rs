//! The immutable in-memory catalog.
//!
//! Built once from a [`RawData`] snapshot. Malformed records are quarantined
//! at this boundary with a warning; a source that fails to load entirely
//! yields an empty catalog in which every lookup reports "not found".

#[cfg(test)]
mod tests;

use crate::model::{
    role_from_description, Alignment, GearItem, GearTier, RelicRequirement, RelicTable, Unit,
    RELIC_MAX,
};
use crate::source::{DataSource, RawData};
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use tracing::{error, info, warn};

#[derive(Debug, Deserialize)]
struct UnitRecord {
    base_id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    alignment: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    gear_levels: Vec<GearLevelRecord>,
}

#[derive(Debug, Deserialize)]
struct GearLevelRecord {
    tier: u32,
    #[serde(default)]
    gear: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GearRecord {
    base_id: String,
    name: String,
}

/// Read-only snapshot of units, gear, and relic requirements.
#[derive(Debug, Default)]
pub struct Catalog {
    units: Vec<Unit>,
    unit_index: HashMap<String, usize>,
    unit_names: Vec<String>,
    gear: HashMap<String, GearItem>,
    relics: Option<RelicTable>,
    /// Curated localization table shipped alongside the data, if any.
    localization: Option<Value>,
}

impl Catalog {
    /// A catalog with no data. Every lookup reports "not found".
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load from a data source, degrading to an empty catalog on failure.
    pub fn load(source: &dyn DataSource, image_base_url: &str) -> Self {
        match source.load() {
            Ok(raw) => {
                let catalog = Self::from_raw(&raw, image_base_url);
                info!(
                    "catalog loaded from {}: {} units, {} gear items, relics: {}",
                    source.describe(),
                    catalog.unit_count(),
                    catalog.gear_count(),
                    catalog.relics.as_ref().map_or(0, RelicTable::len)
                );
                catalog
            }
            Err(e) => {
                error!(
                    "catalog load failed from {}: {e}; serving an empty catalog",
                    source.describe()
                );
                Self::empty()
            }
        }
    }

    /// Map raw records into typed entities, skipping malformed ones.
    pub fn from_raw(raw: &RawData, image_base_url: &str) -> Self {
        let mut gear = HashMap::with_capacity(raw.gear.len());
        for record in &raw.gear {
            match GearRecord::deserialize(record) {
                Ok(g) => {
                    gear.entry(g.base_id.clone()).or_insert(GearItem {
                        id: g.base_id,
                        name: g.name,
                    });
                }
                Err(e) => warn!("skipping malformed gear record: {e}"),
            }
        }

        let mut units = Vec::with_capacity(raw.units.len());
        let mut unit_index = HashMap::with_capacity(raw.units.len());
        let mut unit_names = Vec::with_capacity(raw.units.len());
        for record in &raw.units {
            let Some(unit) = map_unit(record, image_base_url) else {
                continue;
            };
            if unit_index.contains_key(&unit.name) {
                warn!("skipping duplicate unit name '{}'", unit.name);
                continue;
            }
            unit_index.insert(unit.name.clone(), units.len());
            unit_names.push(unit.name.clone());
            units.push(unit);
        }

        let relics = raw.relics.as_ref().map(map_relics);

        Self {
            units,
            unit_index,
            unit_names,
            gear,
            relics,
            localization: raw.localization.clone(),
        }
    }

    /// Display name for a gear id, or the id itself when unknown.
    pub fn lookup_gear_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.gear.get(id).map_or(id, |g| g.name.as_str())
    }

    /// Canonical unit names in load order.
    pub fn all_unit_names(&self) -> &[String] {
        &self.unit_names
    }

    /// Exact-name lookup.
    pub fn unit_by_name(&self, name: &str) -> Option<&Unit> {
        self.unit_index.get(name).map(|&i| &self.units[i])
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn relics(&self) -> Option<&RelicTable> {
        self.relics.as_ref()
    }

    pub fn localization(&self) -> Option<&Value> {
        self.localization.as_ref()
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn gear_count(&self) -> usize {
        self.gear.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

fn map_unit(record: &Value, image_base_url: &str) -> Option<Unit> {
    let rec = match UnitRecord::deserialize(record) {
        Ok(r) => r,
        Err(e) => {
            warn!("skipping malformed unit record: {e}");
            return None;
        }
    };

    let mut levels = rec.gear_levels;
    levels.sort_by_key(|l| l.tier);
    let contiguous = levels
        .iter()
        .enumerate()
        .all(|(i, l)| l.tier as usize == i + 1);
    if !contiguous {
        warn!(
            "skipping unit '{}': gear tiers are not numbered 1..={}",
            rec.name,
            levels.len()
        );
        return None;
    }
    let tiers = levels
        .into_iter()
        .map(|l| GearTier::new(l.tier, l.gear))
        .collect();

    let alignment = match rec.alignment.as_deref() {
        Some(a) if !a.trim().is_empty() => Alignment::parse(a),
        _ => Alignment::from_description(&rec.description),
    };
    let role = rec
        .role
        .filter(|r| !r.trim().is_empty())
        .or_else(|| role_from_description(&rec.description));
    let image = rec
        .image
        .as_deref()
        .and_then(|img| resolve_image(img, image_base_url));

    Some(Unit::new(
        rec.base_id,
        rec.name,
        rec.description,
        alignment,
        role,
        image,
        tiers,
    ))
}

fn resolve_image(image: &str, base_url: &str) -> Option<String> {
    let image = image.trim();
    if image.is_empty() {
        None
    } else if image.starts_with("http://") || image.starts_with("https://") {
        Some(image.to_string())
    } else if image.starts_with("//") {
        Some(format!("https:{image}"))
    } else {
        Some(format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            image.trim_start_matches('/')
        ))
    }
}

fn map_relics(value: &Value) -> RelicTable {
    let Some(obj) = value.as_object() else {
        warn!("relic table is not an object; ignoring");
        return RelicTable::default();
    };
    let mut levels = Vec::with_capacity(obj.len());
    for (key, resources) in obj {
        let level = match key.trim_start_matches(['R', 'r']).parse::<u8>() {
            Ok(l) if l <= RELIC_MAX => l,
            _ => {
                warn!("skipping relic level '{key}': expected 0..={RELIC_MAX}");
                continue;
            }
        };
        let mut map = BTreeMap::new();
        if let Some(res) = resources.as_object() {
            for (name, count) in res {
                match count.as_u64().and_then(|c| u32::try_from(c).ok()) {
                    Some(c) => {
                        map.insert(name.clone(), c);
                    }
                    None => warn!("skipping relic {level} resource '{name}': bad count"),
                }
            }
        } else if !resources.is_null() {
            warn!("relic level {level} resources are not an object; treating as empty");
        }
        levels.push(RelicRequirement {
            level,
            resources: map,
        });
    }
    RelicTable::new(levels)
}
