//! Data-source boundary: raw collections read at startup.

use holocron_core::{config::CatalogConfig, error::HolocronError, shellexpand};
use serde_json::Value;
use std::path::PathBuf;
use tracing::info;

/// Raw, loosely-typed collections as read from storage.
#[derive(Debug, Clone, Default)]
pub struct RawData {
    pub units: Vec<Value>,
    pub gear: Vec<Value>,
    /// Object keyed by relic level → `{resource: count}`.
    pub relics: Option<Value>,
    /// Object `{locale: {category: {source: translation}}}`.
    pub localization: Option<Value>,
}

/// Capability that provides the raw catalog collections.
pub trait DataSource: Send + Sync {
    /// Human-readable source description for logs.
    fn describe(&self) -> String;

    /// Read every collection. Called once at startup.
    fn load(&self) -> Result<RawData, HolocronError>;
}

/// Reads the catalog from JSON files on disk.
pub struct JsonFileSource {
    units_path: PathBuf,
    gear_path: PathBuf,
    relics_path: Option<PathBuf>,
    localization_path: Option<PathBuf>,
}

impl JsonFileSource {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            units_path: PathBuf::from(shellexpand(&config.units_path)),
            gear_path: PathBuf::from(shellexpand(&config.gear_path)),
            relics_path: config.relics_path.as_deref().map(|p| shellexpand(p).into()),
            localization_path: config
                .localization_path
                .as_deref()
                .map(|p| shellexpand(p).into()),
        }
    }

    fn read_json(path: &PathBuf) -> Result<Value, HolocronError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            HolocronError::Catalog(format!("failed to read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            HolocronError::Catalog(format!("failed to parse {}: {e}", path.display()))
        })
    }
}

impl DataSource for JsonFileSource {
    fn describe(&self) -> String {
        format!(
            "json files (units: {}, gear: {})",
            self.units_path.display(),
            self.gear_path.display()
        )
    }

    fn load(&self) -> Result<RawData, HolocronError> {
        let units = unwrap_records(Self::read_json(&self.units_path)?)?;
        let gear = unwrap_records(Self::read_json(&self.gear_path)?)?;
        let relics = self
            .relics_path
            .as_ref()
            .map(Self::read_json)
            .transpose()?;
        let localization = self
            .localization_path
            .as_ref()
            .map(Self::read_json)
            .transpose()?;
        info!(
            "read {} unit records and {} gear records",
            units.len(),
            gear.len()
        );
        Ok(RawData {
            units,
            gear,
            relics,
            localization,
        })
    }
}

/// Accept either a bare array or an export envelope `{"text": "<json array>"}`.
pub fn unwrap_records(value: Value) -> Result<Vec<Value>, HolocronError> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(mut obj) => match obj.remove("text") {
            Some(Value::String(inner)) => unwrap_records(serde_json::from_str(&inner)?),
            Some(inner @ Value::Array(_)) => unwrap_records(inner),
            _ => Err(HolocronError::Catalog(
                "expected an array or an object with a \"text\" field".into(),
            )),
        },
        other => Err(HolocronError::Catalog(format!(
            "expected an array of records, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
