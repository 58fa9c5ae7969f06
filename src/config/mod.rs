//! Configuration management.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API key for the news search service
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the search API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: std::env::var("NEWSLENS_API_KEY").ok(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Check that the configured base URL is a well-formed http(s) URL.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| config::ConfigError::Message(format!("invalid base_url: {}", e)))?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(config::ConfigError::Message(format!(
                "unsupported base_url scheme: {}",
                other
            ))),
        }
    }
}

fn default_base_url() -> String {
    "https://api.worldnewsapi.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Locate the default configuration file, if one exists.
pub fn find_config_file() -> Option<PathBuf> {
    let candidate = dirs::config_dir()?.join("newslens").join("config.toml");
    candidate.exists().then_some(candidate)
}

/// Load configuration from a file, with environment overrides.
pub fn load_config(path: &PathBuf) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path.as_path()))
        .add_source(config::Environment::with_prefix("NEWSLENS"))
        .build()?;

    settings.try_deserialize()
}

/// Get the default configuration (from env vars or defaults)
pub fn get_config() -> Config {
    Config::default()
}
