// src/config/app.rs
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use super::defaults::default_data_dir;
use crate::consts::DEFAULT_CONFIG_FILE;
use crate::enums::VaultBackend;
use crate::error::ConfigError;

/// Path of the TOML config file
pub const CONFIG_ENV: &str = "SESAME_CONFIG";
/// Overrides `vault.data_dir`
pub const DATA_DIR_ENV: &str = "SESAME_DATA_DIR";
/// Overrides `vault.backend`
pub const BACKEND_ENV: &str = "SESAME_VAULT_BACKEND";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub vault: VaultConfig,
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    pub backend: VaultBackend,
    pub data_dir: Option<PathBuf>,
    pub file_name: String,
}

impl VaultConfig {
    /// Configured data directory, or the platform's local data dir
    pub fn resolve_data_dir(&self) -> Result<PathBuf, ConfigError> {
        self.data_dir
            .clone()
            .or_else(default_data_dir)
            .ok_or(ConfigError::NoDataDir)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub kes_file: PathBuf,
    pub vrf_file: PathBuf,
    pub cert_file: PathBuf,
    pub pad_count: usize,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Apply `SESAME_DATA_DIR` and `SESAME_VAULT_BACKEND` if set
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            self.vault.data_dir = Some(PathBuf::from(dir));
        }
        if let Ok(backend) = std::env::var(BACKEND_ENV) {
            self.vault.backend = backend.parse().map_err(|reason| ConfigError::Env {
                var: BACKEND_ENV,
                reason,
            })?;
        }
        Ok(())
    }
}

/// Load config at runtime — falls back to defaults if the file is missing
pub fn load() -> Result<Config, ConfigError> {
    let from_env = std::env::var(CONFIG_ENV).ok();
    let config_path = from_env.as_deref().unwrap_or(DEFAULT_CONFIG_FILE);

    let mut conf = if Path::new(config_path).exists() {
        debug!(path = %config_path, "loading config");
        Config::from_path(config_path)?
    } else {
        warn!("{config_path} not found — using built-in defaults");
        Config::default()
    };

    conf.apply_env_overrides()?;
    Ok(conf)
}
