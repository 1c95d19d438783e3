//! Shared fixtures for report tests.

use async_trait::async_trait;
use holocron_catalog::{Catalog, RawData};
use holocron_core::{error::HolocronError, locale::Locale, traits::Translator};
use holocron_translate::{StaticDictionary, TranslationCache, TranslationMemo};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Prefixes text with the target locale and counts calls.
#[derive(Default)]
pub(crate) struct TaggingTranslator {
    pub calls: AtomicUsize,
}

impl TaggingTranslator {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for TaggingTranslator {
    fn name(&self) -> &str {
        "tagging"
    }

    async fn translate(
        &self,
        text: &str,
        _source: &str,
        target: &str,
    ) -> Result<String, HolocronError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("{target}:{text}"))
    }
}

pub(crate) struct FailingTranslator;

#[async_trait]
impl Translator for FailingTranslator {
    fn name(&self) -> &str {
        "failing"
    }

    async fn translate(
        &self,
        _text: &str,
        _source: &str,
        _target: &str,
    ) -> Result<String, HolocronError> {
        Err(HolocronError::Translation("network unreachable".into()))
    }
}

pub(crate) fn cache(
    dictionary: StaticDictionary,
    translator: Option<Arc<dyn Translator>>,
) -> Arc<TranslationCache> {
    Arc::new(TranslationCache::new(
        Locale::new("en"),
        dictionary,
        TranslationMemo::new(),
        translator,
        Duration::from_millis(200),
    ))
}

pub(crate) fn sample_raw() -> RawData {
    RawData {
        units: vec![
            json!({
                "base_id": "DARTHREVAN",
                "name": "Darth Revan",
                "description": "Dark Side Attacker that inflicts Fear",
                "alignment": "Dark Side",
                "gear_levels": [
                    {"tier": 1, "gear": ["G1", "G2"]},
                    {"tier": 2, "gear": ["G3"]}
                ]
            }),
            json!({
                "base_id": "JEDIKNIGHTREVAN",
                "name": "Jedi Knight Revan",
                "description": "Light Side Leader",
                "alignment": "Light Side",
                "image": "https://img.example/jkr.png",
                "gear_levels": [{"tier": 1, "gear": ["G2", "MISSING", "G4"]}]
            }),
            json!({
                "base_id": "HOLLOW",
                "name": "Hollow Unit",
                "description": "",
                "gear_levels": []
            }),
        ],
        gear: vec![
            json!({"base_id": "G1", "name": "Carbanti"}),
            json!({"base_id": "G2", "name": "Mk 5 Baradium"}),
            json!({"base_id": "G3", "name": "Holo Array"}),
            json!({"base_id": "G4", "name": "Stun Gun <Prototype> & Co"}),
        ],
        relics: Some(json!({
            "0": {},
            "3": {"Fragmented Signal Data": 20, "Carbonite Circuit Board": 10},
            "10": {"Impulse Detector": 100}
        })),
        localization: None,
    }
}

pub(crate) fn sample_catalog() -> Catalog {
    Catalog::from_raw(&sample_raw(), "https://swgoh.gg")
}

/// A unit with `tiers` tiers of six long-named items each.
pub(crate) fn big_catalog(tiers: u32) -> Catalog {
    let gear: Vec<_> = (0..6)
        .map(|i| json!({"base_id": format!("B{i}"), "name": format!("Mk {i} {}", "Salvage ".repeat(12))}))
        .collect();
    let levels: Vec<_> = (1..=tiers)
        .map(|t| json!({"tier": t, "gear": ["B0", "B1", "B2", "B3", "B4", "B5"]}))
        .collect();
    let raw = RawData {
        units: vec![json!({
            "base_id": "BIG",
            "name": "Big Unit",
            "description": "Light Side Tank",
            "image": "https://img.example/big.png",
            "gear_levels": levels
        })],
        gear,
        relics: None,
        localization: None,
    };
    Catalog::from_raw(&raw, "")
}
