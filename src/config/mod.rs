//! Configuration system (layered: defaults < config file < environment).

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::models::GoogleModel;
use crate::provider::google::BASE_URL;
use crate::provider::http::DEFAULT_TIMEOUT;

/// Rough Gemini price per token, in USD.
pub const DEFAULT_COST_PER_TOKEN: f64 = 0.00001;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variables read for the API key, in priority order.
pub const API_KEY_ENV_VARS: [&str; 3] = ["GEMINI_API_KEY", "GOOGLE_API_KEY", "VITE_GEMINI_API_KEY"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Resolved settings for talking to the generation endpoint.
#[derive(Clone, PartialEq)]
pub struct GeneratorConfig {
    pub api_key: Option<String>,
    pub model: GoogleModel,
    pub base_url: String,
    pub request_timeout: Duration,
    pub cost_per_token: f64,
}

impl fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| ".."))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .field("cost_per_token", &self.cost_per_token)
            .finish()
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: GoogleModel::default(),
            base_url: BASE_URL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            cost_per_token: DEFAULT_COST_PER_TOKEN,
        }
    }
}

/// On-disk shape of `config.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    cost_per_token: Option<f64>,
}

impl GeneratorConfig {
    /// Load defaults, then `~/.postcraft/config.toml` (if present), then env.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&default_config_path())
    }

    /// Same as [`GeneratorConfig::load`] with an explicit file path.
    /// A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let mut config = Self::default();
        config.apply_file(path)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    fn apply_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let file: ConfigFile = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(key) = file.api_key {
            self.api_key = Some(key);
        }
        if let Some(model) = file.model {
            self.model = parse_model(&model)?;
        }
        if let Some(url) = file.base_url {
            self.base_url = url;
        }
        if let Some(secs) = file.timeout_secs {
            self.request_timeout = Duration::from_secs(secs);
        }
        if let Some(cost) = file.cost_per_token {
            self.cost_per_token = cost;
        }
        Ok(())
    }

    /// Overlay environment variables read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = API_KEY_ENV_VARS
            .iter()
            .filter_map(|var| lookup(var))
            .find(|value| !value.trim().is_empty())
        {
            self.api_key = Some(key);
        }
        if let Some(model) = lookup("POSTCRAFT_MODEL") {
            self.model = parse_model(&model)?;
        }
        if let Some(url) = lookup("GEMINI_BASE_URL") {
            self.base_url = url;
        }
        if let Some(raw) = lookup("POSTCRAFT_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                key: "POSTCRAFT_TIMEOUT_SECS".to_string(),
                value: raw.clone(),
            })?;
            self.request_timeout = Duration::from_secs(secs);
        }
        Ok(())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

fn parse_model(raw: &str) -> Result<GoogleModel, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidValue {
            key: "model".to_string(),
            value: raw.to_string(),
        });
    }
    // Unknown ids parse as GoogleModel::Custom
    GoogleModel::from_str(trimmed).map_err(|_| ConfigError::InvalidValue {
        key: "model".to_string(),
        value: raw.to_string(),
    })
}

/// `$HOME/.postcraft/config.toml`, or `.postcraft/config.toml` without a home.
pub fn default_config_path() -> PathBuf {
    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().join(".postcraft"))
        .unwrap_or_else(|| PathBuf::from(".postcraft"))
        .join(CONFIG_FILE_NAME)
}
