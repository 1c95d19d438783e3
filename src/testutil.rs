//! Shared fixtures for binary-level tests.

use holocron_catalog::{Catalog, RawData, Resolver};
use holocron_core::{
    config::{ReportConfig, ResolverConfig},
    locale::Locale,
    markup::MarkupMode,
};
use holocron_memory::SessionStore;
use holocron_report::{Lookup, Renderer};
use holocron_translate::{StaticDictionary, TranslationCache, TranslationMemo};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

/// A two-unit catalog with no external translator.
pub fn sample_lookup() -> Lookup {
    let raw = RawData {
        units: vec![
            json!({
                "base_id": "CT7567",
                "name": "CT-7567 \"Rex\"",
                "description": "Light Side Support",
                "gear_levels": [{"tier": 1, "gear": ["G1"]}]
            }),
            json!({
                "base_id": "DARTHREVAN",
                "name": "Darth Revan",
                "alignment": "Dark Side",
                "image": "/img/darthrevan.png",
                "gear_levels": [{"tier": 1, "gear": ["G1"]}, {"tier": 2, "gear": ["G1"]}]
            }),
        ],
        gear: vec![json!({"base_id": "G1", "name": "Carbanti"})],
        relics: None,
        localization: None,
    };
    let catalog = Arc::new(Catalog::from_raw(&raw, "https://swgoh.gg"));
    let cache = Arc::new(TranslationCache::new(
        Locale::new("en"),
        StaticDictionary::empty(),
        TranslationMemo::new(),
        None,
        Duration::from_millis(100),
    ));
    let report = ReportConfig {
        markup: MarkupMode::Plain,
        ..Default::default()
    };
    Lookup::new(
        catalog,
        Resolver::new(&ResolverConfig::default()),
        cache.clone(),
        SessionStore::in_memory(Locale::new("en")),
        Renderer::new(report, cache),
    )
}
