mod api;
mod defaults;
mod search;
mod validation;

use crate::cli::Args;
use crate::error::{ChatBuscaError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub use api::ApiConfig;
pub use defaults::{DEFAULT_CHAT_ENDPOINT, DEFAULT_MODEL, DEFAULT_SEARCH_ENDPOINT};
pub use search::{SearchConfig, SearchSettings};
pub use validation::{clamp_max_results, normalize_chat_endpoint, MAX_SEARCH_RESULTS};

use validation::{non_empty, parse_flag};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub default_model: Option<String>,
    #[serde(default)]
    pub temperature: Option<f32>,
}

/// Settings resolved from CLI args, environment and config file.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub request_timeout: u64,
    /// `None` when search credentials are missing; web search is then off.
    pub search: Option<SearchSettings>,
    pub verbose: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Result<Self> {
        let file_config = FileConfig::load()?;
        Self::resolve(args, &file_config, |key| env::var(key).ok())
    }

    /// Precedence is CLI args > environment > config file > defaults.
    pub fn resolve<F>(args: &Args, file_config: &FileConfig, env_var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = non_empty(env_var("OPENAI_API_KEY")).ok_or_else(|| {
            ChatBuscaError::ConfigError("OPENAI_API_KEY environment variable not set".to_string())
        })?;

        let api_endpoint = args
            .api_endpoint
            .clone()
            .or_else(|| non_empty(env_var("CHATBUSCA_API_ENDPOINT")))
            .or(file_config.api.endpoint.clone())
            .map(|endpoint| normalize_chat_endpoint(&endpoint))
            .unwrap_or_else(|| DEFAULT_CHAT_ENDPOINT.to_string());

        let model = args
            .model
            .clone()
            .or_else(|| non_empty(env_var("CHATBUSCA_MODEL")))
            .or(file_config.model.default_model.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let temperature = args
            .temperature
            .or_else(|| env_var("CHATBUSCA_TEMPERATURE").and_then(|s| s.parse::<f32>().ok()))
            .or(file_config.model.temperature)
            .unwrap_or_else(defaults::default_temperature);

        let request_timeout = file_config
            .api
            .timeout
            .unwrap_or_else(defaults::default_request_timeout);

        let verbose = args.verbose
            || env_var("CHATBUSCA_VERBOSE")
                .map(|v| parse_flag(&v))
                .or(file_config.session.verbose)
                .unwrap_or(false);

        let search = Self::resolve_search(&file_config.search, &env_var);

        Ok(Config {
            api_key,
            api_endpoint,
            model,
            temperature,
            request_timeout,
            search,
            verbose,
        })
    }

    fn resolve_search<F>(search_config: &SearchConfig, env_var: &F) -> Option<SearchSettings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = non_empty(env_var("SEARCH_API"))?;
        let engine_id = non_empty(env_var("SEARCH_ID"))?;

        let endpoint = non_empty(env_var("CHATBUSCA_SEARCH_ENDPOINT"))
            .or(search_config.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_SEARCH_ENDPOINT.to_string());

        let max_results = clamp_max_results(
            search_config
                .max_results
                .unwrap_or_else(defaults::default_max_results),
        );

        let timeout = env_var("CHATBUSCA_SEARCH_TIMEOUT")
            .and_then(|s| s.parse::<u64>().ok())
            .or(search_config.timeout)
            .unwrap_or_else(defaults::default_search_timeout);

        Some(SearchSettings {
            api_key,
            engine_id,
            endpoint,
            max_results,
            timeout,
        })
    }
}

impl FileConfig {
    /// First existing config file wins; none at all yields defaults.
    pub fn load() -> Result<Self> {
        for path in Self::get_config_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        Ok(FileConfig::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let is_yaml = matches!(
            path.extension().and_then(|s| s.to_str()),
            Some("yaml") | Some("yml")
        );

        let config = if is_yaml {
            serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse YAML config file: {}", path.display()))?
        } else {
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse JSON config file: {}", path.display()))?
        };

        Ok(config)
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".chatbusca.yaml"),
            PathBuf::from(".chatbusca.yml"),
            PathBuf::from(".chatbusca.json"),
        ];

        if let Some(home_dir) = dirs::home_dir() {
            let config_dir = home_dir.join(".config").join("chatbusca");
            paths.push(config_dir.join("chatbusca.yaml"));
            paths.push(config_dir.join("chatbusca.yml"));
            paths.push(config_dir.join("chatbusca.json"));
        }

        paths
    }
}
