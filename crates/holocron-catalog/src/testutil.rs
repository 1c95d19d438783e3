//! Shared fixtures for catalog tests.

use crate::{Catalog, RawData};
use serde_json::json;

/// A small catalog: Darth Revan (2 tiers), Revan-adjacent names, and a unit without tiers.
pub(crate) fn sample_catalog() -> Catalog {
    let raw = RawData {
        units: vec![
            json!({
                "base_id": "DARTHREVAN",
                "name": "Darth Revan",
                "description": "Dark Side Attacker that inflicts Fear",
                "alignment": "Dark Side",
                "image": "/static/img/darthrevan.png",
                "gear_levels": [
                    {"tier": 2, "gear": ["G3"]},
                    {"tier": 1, "gear": ["G1", "G2"]}
                ]
            }),
            json!({
                "base_id": "JEDIKNIGHTREVAN",
                "name": "Jedi Knight Revan",
                "description": "Light Side Leader with General Skywalker synergy",
                "alignment": "Light Side",
                "gear_levels": [{"tier": 1, "gear": ["G2"]}]
            }),
            json!({
                "base_id": "CT7567",
                "name": "CT-7567 \"Rex\"",
                "description": "Light Side Support",
                "gear_levels": [{"tier": 1, "gear": ["G1"]}]
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
        ],
        relics: Some(json!({
            "0": {},
            "1": {"Fragmented Signal Data": 40},
            "5": {"Carbonite Circuit Board": 25, "Impulse Detector": 15}
        })),
        localization: None,
    };
    Catalog::from_raw(&raw, "https://swgoh.gg")
}
