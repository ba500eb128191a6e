mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Loads the configuration file named by `CONFIG_PATH` (or `config.yaml` if
/// present), then applies the `OPENROUTER_API_KEY` override.
pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();
    let required = explicit_path.is_some();
    let config_path = explicit_path.unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let mut config = load_from_path(&config_path, required).await?;

    apply_api_key_override(&mut config, env::var(API_KEY_ENV).ok());
    validate(&config)?;

    Ok(config)
}

/// Reads a YAML config file. A missing file is an error only when `required`.
pub async fn load_from_path(config_path: impl AsRef<Path>, required: bool) -> Result<Config> {
    let config_path = config_path.as_ref();
    debug!("Loading configuration from: {}", config_path.display());

    match tokio::fs::read_to_string(config_path).await {
        Ok(config_str) => from_yaml(&config_str),
        Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No {} found, using built-in defaults", config_path.display());
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn from_yaml(config_str: &str) -> Result<Config> {
    // An empty document deserializes to unit, not to a defaulted struct.
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

pub fn apply_api_key_override(config: &mut Config, api_key: Option<String>) {
    if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
        config.upstream.api_key = key;
    }
}

pub fn validate(config: &Config) -> Result<()> {
    if config.upstream.api_key.trim().is_empty() {
        return Err(Error::config(format!(
            "upstream API key is not set (set {} or upstream.api_key)",
            API_KEY_ENV
        )));
    }
    if config.server.max_body_bytes == 0 {
        return Err(Error::config("server.max_body_bytes must be positive"));
    }
    Ok(())
}
