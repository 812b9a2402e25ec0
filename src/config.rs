use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ReleaseGapError, Result};

/// Represents the complete configuration for release-gap.
///
/// Contains API access settings and the default comparison behavior applied
/// when the command line leaves an option unset.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub github: GithubConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Returns the default API root.
fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

/// Returns the default per-request timeout in seconds.
fn default_request_timeout_secs() -> u64 {
    10
}

/// Configuration for reaching the release listing API.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GithubConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default)]
    pub token: Option<String>,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        GithubConfig {
            api_url: default_api_url(),
            token: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Default comparison options, overridable per invocation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub filter: Option<String>,

    #[serde(default)]
    pub include_prereleases: bool,

    #[serde(default)]
    pub include_drafts: bool,

    #[serde(default)]
    pub verify_release: bool,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasegap.toml` in current directory
/// 3. `~/.config/.releasegap.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./releasegap.toml").exists() {
        fs::read_to_string("./releasegap.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".releasegap.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| ReleaseGapError::config(format!("Invalid configuration: {}", e)))?;
    Ok(config)
}
