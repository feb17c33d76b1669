use chrono::{DateTime, SecondsFormat, Utc};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct LeftoverChefConfig {
    pub storage: StorageConfig,
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub data_dir: String,
    pub saved_items_key: String,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

pub const DEFAULT_SAVED_ITEMS_KEY: &str = "savedContent";

pub fn generate_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// RFC 3339 with millisecond precision and a `Z` suffix, the shape
/// `Date.prototype.toISOString` produces.
pub fn to_iso_string(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
