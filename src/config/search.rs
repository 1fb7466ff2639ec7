use serde::{Deserialize, Serialize};

/// The `search` section of the config file. Credentials are only read from
/// the environment.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub max_results: Option<u8>,
    #[serde(default)]
    pub timeout: Option<u64>,
}

/// Everything needed to reach the search engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    pub api_key: String,
    pub engine_id: String,
    pub endpoint: String,
    pub max_results: u8,
    pub timeout: u64,
}
