use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::path::Path;
use std::time::Duration;

use log::info;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_VERSION: u32 = 1;

/// Longest accepted post-success redirect delay.
const MAX_REDIRECT_MS: u64 = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the remote authentication API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Delays between a success message and the follow-up view change.
///
/// The pause exists so the success message is visible before the view
/// switch clears it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_login_redirect_ms")]
    pub login_redirect_ms: u64,
    #[serde(default = "default_register_redirect_ms")]
    pub register_redirect_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            login_redirect_ms: default_login_redirect_ms(),
            register_redirect_ms: default_register_redirect_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub timing: TimingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            api: ApiConfig::default(),
            timing: TimingConfig::default(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_base_url() -> String {
    crate::AUTH_API_BASE_URL.to_string()
}
fn default_login_redirect_ms() -> u64 {
    500
}
fn default_register_redirect_ms() -> u64 {
    600
}

impl AppConfig {
    /// Load config from {config_dir}/config.json.
    ///
    /// A missing file yields the defaults; a file that exists but cannot be
    /// read, parsed, or validated is an error the caller decides about.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| ConfigError::ReadError {
                location: ErrorLocation::caller(),
                path: config_path.clone(),
                source: e,
            })?;

        let config: AppConfig =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError {
                location: ErrorLocation::caller(),
                path: config_path.clone(),
                reason: e.to_string(),
            })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Save config to {config_dir}/config.json using atomic write.
    ///
    /// Uses temp file + rename for atomicity (no corruption on crash).
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::caller(),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_dir.join(format!("{}.tmp", CONFIG_FILE_NAME));

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::caller(),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, json).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::caller(),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::caller(),
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::caller(),
                reason: format!(
                    "Invalid version: {} (expected 1-{})",
                    self.version, CONFIG_VERSION
                ),
            });
        }

        if self.api.base_url.is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::caller(),
                reason: "api.base_url cannot be empty".to_string(),
            });
        }

        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://")
        {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::caller(),
                reason: format!("Invalid URL format: {}", self.api.base_url),
            });
        }

        for (name, value) in [
            ("timing.login_redirect_ms", self.timing.login_redirect_ms),
            (
                "timing.register_redirect_ms",
                self.timing.register_redirect_ms,
            ),
        ] {
            if value > MAX_REDIRECT_MS {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::caller(),
                    reason: format!("{name} too large: {value} (maximum {MAX_REDIRECT_MS})"),
                });
            }
        }

        Ok(())
    }

    pub fn login_redirect_delay(&self) -> Duration {
        Duration::from_millis(self.timing.login_redirect_ms)
    }

    pub fn register_redirect_delay(&self) -> Duration {
        Duration::from_millis(self.timing.register_redirect_ms)
    }
}
