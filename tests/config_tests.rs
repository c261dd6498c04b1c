//! Tests for layered configuration loading against the real process env.

use std::fs;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use postcraft::config::{default_config_path, ConfigError, GeneratorConfig, API_KEY_ENV_VARS};
use postcraft::models::GoogleModel;
use postcraft::provider::google::BASE_URL;
use tempfile::TempDir;

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const CONFIG_ENV_VARS: [&str; 6] = [
    "GEMINI_API_KEY",
    "GOOGLE_API_KEY",
    "VITE_GEMINI_API_KEY",
    "POSTCRAFT_MODEL",
    "GEMINI_BASE_URL",
    "POSTCRAFT_TIMEOUT_SECS",
];

struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn capture(keys: &[&str]) -> Self {
        let saved = keys
            .iter()
            .map(|key| ((*key).to_string(), std::env::var(key).ok()))
            .collect();
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}

fn env_lock_guard() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn clean_env() -> EnvGuard {
    let guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    for key in CONFIG_ENV_VARS {
        std::env::remove_var(key);
    }
    guard
}

#[test]
fn api_key_variables_cover_gemini_aliases() {
    assert_eq!(API_KEY_ENV_VARS[0], "GEMINI_API_KEY");
    assert!(API_KEY_ENV_VARS.contains(&"VITE_GEMINI_API_KEY"));
}

#[test]
fn load_without_file_or_env_yields_defaults() {
    let _env_lock = env_lock_guard();
    let _env_guard = clean_env();
    let dir = TempDir::new().unwrap();

    let config = GeneratorConfig::load_from(&dir.path().join("config.toml")).unwrap();

    assert!(!config.has_api_key());
    assert_eq!(config.model, GoogleModel::Gemini15FlashLatest);
    assert_eq!(config.base_url, BASE_URL);
    assert_eq!(config.request_timeout, Duration::from_secs(120));
}

#[test]
fn environment_overrides_config_file() {
    let _env_lock = env_lock_guard();
    let _env_guard = clean_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "api_key = \"file-key\"\nmodel = \"gemini-1.5-pro\"\ntimeout_secs = 45\n",
    )
    .unwrap();

    std::env::set_var("GOOGLE_API_KEY", "env-key");
    std::env::set_var("POSTCRAFT_MODEL", "gemini-2.5-pro");

    let config = GeneratorConfig::load_from(&path).unwrap();

    assert_eq!(config.api_key.as_deref(), Some("env-key"));
    assert_eq!(config.model, GoogleModel::Gemini25Pro);
    assert_eq!(config.request_timeout, Duration::from_secs(45));
}

#[test]
fn file_key_is_used_when_env_is_empty() {
    let _env_lock = env_lock_guard();
    let _env_guard = clean_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "api_key = \"file-key\"\n").unwrap();

    std::env::set_var("GEMINI_API_KEY", "");

    let config = GeneratorConfig::load_from(&path).unwrap();
    assert_eq!(config.api_key.as_deref(), Some("file-key"));
    assert!(config.has_api_key());
}

#[test]
fn unknown_model_ids_pass_through() {
    let _env_lock = env_lock_guard();
    let _env_guard = clean_env();
    let dir = TempDir::new().unwrap();

    std::env::set_var("POSTCRAFT_MODEL", "gemini-exp-1206");

    let config = GeneratorConfig::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config.model, GoogleModel::Custom("gemini-exp-1206".to_string()));
    assert_eq!(config.model.to_string(), "gemini-exp-1206");
}

#[test]
fn malformed_file_is_a_parse_error() {
    let _env_lock = env_lock_guard();
    let _env_guard = clean_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "timeout_secs = \"forever\"\n").unwrap();

    let err = GeneratorConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn invalid_timeout_env_is_reported() {
    let _env_lock = env_lock_guard();
    let _env_guard = clean_env();
    let dir = TempDir::new().unwrap();

    std::env::set_var("POSTCRAFT_TIMEOUT_SECS", "-3");

    let err = GeneratorConfig::load_from(&dir.path().join("config.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "POSTCRAFT_TIMEOUT_SECS"));
}

#[test]
fn default_path_lives_under_dot_postcraft() {
    let path = default_config_path();
    assert!(path.ends_with(".postcraft/config.toml"));
}
