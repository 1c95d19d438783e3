//! Default value functions used by serde for config deserialization.

pub fn default_name() -> String {
    "Holocron".to_string()
}

pub fn default_data_dir() -> String {
    "~/.holocron".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}

pub fn default_units_path() -> String {
    "~/.holocron/catalog/Swgoh_Characters.json".to_string()
}

pub fn default_gear_path() -> String {
    "~/.holocron/catalog/Swgoh_Gear.json".to_string()
}

pub fn default_image_base_url() -> String {
    "https://swgoh.gg".to_string()
}

pub fn default_min_score() -> f64 {
    0.6
}

pub fn default_max_suggestions() -> usize {
    3
}

pub fn default_suggestion_floor() -> f64 {
    0.35
}

pub fn default_native_locale() -> String {
    "en".to_string()
}

pub fn default_translate_endpoint() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

pub fn default_translate_timeout() -> u64 {
    5
}

pub fn default_caption_limit() -> usize {
    1024
}

pub fn default_message_limit() -> usize {
    4096
}

pub fn default_db_path() -> String {
    "~/.holocron/data/sessions.db".to_string()
}
