use super::*;
use crate::model::Alignment;
use crate::testutil::sample_catalog;
use holocron_core::error::HolocronError;
use serde_json::json;

struct FailingSource;

impl DataSource for FailingSource {
    fn describe(&self) -> String {
        "failing".into()
    }

    fn load(&self) -> Result<RawData, HolocronError> {
        Err(HolocronError::Catalog("malformed file".into()))
    }
}

struct StaticSource(RawData);

impl DataSource for StaticSource {
    fn describe(&self) -> String {
        "static".into()
    }

    fn load(&self) -> Result<RawData, HolocronError> {
        Ok(self.0.clone())
    }
}

#[test]
fn test_gear_lookup_falls_back_to_id() {
    let catalog = sample_catalog();
    assert_eq!(catalog.lookup_gear_name("G1"), "Carbanti");
    assert_eq!(catalog.lookup_gear_name("G404"), "G404");
}

#[test]
fn test_unit_names_keep_load_order() {
    let catalog = sample_catalog();
    assert_eq!(
        catalog.all_unit_names(),
        &[
            "Darth Revan".to_string(),
            "Jedi Knight Revan".to_string(),
            "CT-7567 \"Rex\"".to_string(),
            "Hollow Unit".to_string(),
        ]
    );
}

#[test]
fn test_tiers_sorted_and_items_preserved() {
    let catalog = sample_catalog();
    let revan = catalog.unit_by_name("Darth Revan").unwrap();
    assert_eq!(revan.tier_count(), 2);
    assert_eq!(revan.tiers()[0].number(), 1);
    assert_eq!(revan.tiers()[0].items(), &["G1".to_string(), "G2".to_string()]);
    assert_eq!(revan.tiers()[1].items(), &["G3".to_string()]);
}

#[test]
fn test_alignment_role_and_image_mapping() {
    let catalog = sample_catalog();
    let revan = catalog.unit_by_name("Darth Revan").unwrap();
    assert_eq!(revan.alignment, Alignment::Dark);
    assert_eq!(revan.role.as_deref(), Some("Attacker"));
    assert_eq!(
        revan.image.as_deref(),
        Some("https://swgoh.gg/static/img/darthrevan.png")
    );

    // Alignment derived from the description when the field is missing.
    let rex = catalog.unit_by_name("CT-7567 \"Rex\"").unwrap();
    assert_eq!(rex.alignment, Alignment::Light);
    assert_eq!(rex.role.as_deref(), Some("Support"));
    assert!(rex.image.is_none());
}

#[test]
fn test_unknown_name_not_found() {
    let catalog = sample_catalog();
    assert!(catalog.unit_by_name("darth revan").is_none());
    assert!(catalog.unit_by_name("Nobody").is_none());
}

#[test]
fn test_relic_table_mapping() {
    let catalog = sample_catalog();
    let relics = catalog.relics().unwrap();
    assert_eq!(relics.len(), 3);
    assert!(relics.requirement(0).unwrap().resources.is_empty());
    assert_eq!(
        relics.requirement(1).unwrap().resources["Fragmented Signal Data"],
        40
    );
    assert!(relics.requirement(7).is_none());
}

#[test]
fn test_malformed_records_are_quarantined() {
    let raw = RawData {
        units: vec![
            json!({"name": "No Id"}),
            json!("not an object"),
            json!({"base_id": "GAP", "name": "Gappy", "gear_levels": [{"tier": 1, "gear": []}, {"tier": 3, "gear": []}]}),
            json!({"base_id": "OK", "name": "Fine", "gear_levels": [{"tier": 1, "gear": ["G1"]}]}),
            json!({"base_id": "OK2", "name": "Fine", "gear_levels": []}),
        ],
        gear: vec![json!({"base_id": "G1"}), json!({"base_id": "G2", "name": "Two"})],
        relics: Some(json!({"11": {}, "x": {}, "2": {"Thing": -1, "Other": 3}})),
        localization: None,
    };
    let catalog = Catalog::from_raw(&raw, "");
    assert_eq!(catalog.all_unit_names(), &["Fine".to_string()]);
    assert_eq!(catalog.unit_by_name("Fine").unwrap().id, "OK");
    assert_eq!(catalog.gear_count(), 1);
    let relics = catalog.relics().unwrap();
    assert_eq!(relics.len(), 1);
    let r2 = relics.requirement(2).unwrap();
    assert_eq!(r2.resources.len(), 1);
    assert_eq!(r2.resources["Other"], 3);
}

#[test]
fn test_failed_load_yields_empty_catalog() {
    let catalog = Catalog::load(&FailingSource, "https://swgoh.gg");
    assert!(catalog.is_empty());
    assert!(catalog.all_unit_names().is_empty());
    assert!(catalog.unit_by_name("Darth Revan").is_none());
    assert_eq!(catalog.lookup_gear_name("G1"), "G1");
    assert!(catalog.relics().is_none());
}

#[test]
fn test_load_from_source() {
    let raw = RawData {
        units: vec![json!({"base_id": "A", "name": "Alpha", "gear_levels": []})],
        gear: vec![],
        relics: None,
        localization: Some(json!({"ru": {"unit_names": {"Alpha": "\u{0410}\u{043b}\u{044c}\u{0444}\u{0430}"}}})),
    };
    let catalog = Catalog::load(&StaticSource(raw), "");
    assert_eq!(catalog.unit_count(), 1);
    assert!(catalog.localization().unwrap().get("ru").is_some());
}

#[test]
fn test_image_resolution_variants() {
    assert_eq!(
        resolve_image("https://cdn/x.png", "https://swgoh.gg").as_deref(),
        Some("https://cdn/x.png")
    );
    assert_eq!(
        resolve_image("//cdn/x.png", "https://swgoh.gg").as_deref(),
        Some("https://cdn/x.png")
    );
    assert_eq!(
        resolve_image("img/x.png", "https://swgoh.gg/").as_deref(),
        Some("https://swgoh.gg/img/x.png")
    );
    assert_eq!(resolve_image("  ", "https://swgoh.gg"), None);
}
