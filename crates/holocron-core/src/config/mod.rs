mod channels;
mod defaults;


pub use channels::*;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::HolocronError;
use crate::markup::MarkupMode;
use defaults::*;

/// Top-level Holocron configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub holocron: HolocronConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub memory: MemoryConfig,
    #[serde(default)]
    pub channel: ChannelConfig,
}

/// General bot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolocronConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for HolocronConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Where the static game data lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_units_path")]
    pub units_path: String,
    #[serde(default = "default_gear_path")]
    pub gear_path: String,
    /// Relic requirement table. Absent = relic lookups report no data.
    #[serde(default)]
    pub relics_path: Option<String>,
    /// Curated translation table. Absent = empty static dictionary.
    #[serde(default)]
    pub localization_path: Option<String>,
    /// Prefix for relative image references (e.g. `/static/img/...`).
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            units_path: default_units_path(),
            gear_path: default_gear_path(),
            relics_path: None,
            localization_path: None,
            image_base_url: default_image_base_url(),
        }
    }
}

/// Fuzzy name matching thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Minimum similarity (0.0..=1.0) a match must reach to be accepted.
    #[serde(default = "default_min_score")]
    pub min_score: f64,
    /// How many candidates to offer when nothing clears `min_score`.
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    /// Candidates scoring below this are never offered as suggestions.
    #[serde(default = "default_suggestion_floor")]
    pub suggestion_floor: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
            max_suggestions: default_max_suggestions(),
            suggestion_floor: default_suggestion_floor(),
        }
    }
}

/// Translation cache and external translator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// When false, no external calls are made (dictionary and identity only).
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Locale the catalog is authored in.
    #[serde(default = "default_native_locale")]
    pub native_locale: String,
    /// Locale used for requesters who never picked one.
    #[serde(default = "default_native_locale")]
    pub default_locale: String,
    #[serde(default = "default_translate_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_translate_timeout")]
    pub timeout_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            native_locale: default_native_locale(),
            default_locale: default_native_locale(),
            endpoint: default_translate_endpoint(),
            timeout_secs: default_translate_timeout(),
        }
    }
}

/// What to show when a query carries no tier or relic selector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultView {
    /// Every gear tier.
    #[default]
    All,
    /// Only gear tier 1.
    First,
}

/// Report rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Max characters of a caption block (attached to an image).
    #[serde(default = "default_caption_limit")]
    pub caption_limit: usize,
    /// Max characters of a standalone text block.
    #[serde(default = "default_message_limit")]
    pub message_limit: usize,
    /// Prefix gear items with positional markers.
    #[serde(default = "default_true")]
    pub numbered: bool,
    #[serde(default)]
    pub default_view: DefaultView,
    #[serde(default)]
    pub markup: MarkupMode,
    /// Include the (translated) unit description under the header.
    #[serde(default)]
    pub show_description: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            caption_limit: default_caption_limit(),
            message_limit: default_message_limit(),
            numbered: true,
            default_view: DefaultView::All,
            markup: MarkupMode::Html,
            show_description: false,
        }
    }
}

/// Session preference persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Persist language preferences across restarts.
    #[serde(default = "default_true")]
    pub persist: bool,
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            persist: true,
            db_path: default_db_path(),
        }
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, HolocronError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        HolocronError::Config(format!("failed to read {}: {}", path.display(), e))
    })?;

    parse(&content)
}

/// Parse configuration from TOML text and validate it.
pub fn parse(content: &str) -> Result<Config, HolocronError> {
    let config: Config = toml::from_str(content)
        .map_err(|e| HolocronError::Config(format!("failed to parse config: {}", e)))?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Reject settings no component can honor.
    pub fn validate(&self) -> Result<(), HolocronError> {
        let r = &self.resolver;
        if !(0.0..=1.0).contains(&r.min_score) {
            return Err(HolocronError::Config(format!(
                "resolver.min_score must be within 0.0..=1.0, got {}",
                r.min_score
            )));
        }
        if r.suggestion_floor > r.min_score {
            return Err(HolocronError::Config(
                "resolver.suggestion_floor must not exceed resolver.min_score".into(),
            ));
        }
        let rep = &self.report;
        if rep.caption_limit == 0 || rep.message_limit < rep.caption_limit {
            return Err(HolocronError::Config(format!(
                "report limits invalid: caption_limit={} message_limit={}",
                rep.caption_limit, rep.message_limit
            )));
        }
        if self.translation.timeout_secs == 0 {
            return Err(HolocronError::Config(
                "translation.timeout_secs must be positive".into(),
            ));
        }
        Ok(())
    }
}
