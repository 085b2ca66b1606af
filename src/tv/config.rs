use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::time::Duration;

use crate::tv::ircc::DEFAULT_TIMEOUT;

pub const ADDRESS_ENV: &str = "BRAVIA_ADDRESS";
pub const PSK_ENV: &str = "BRAVIA_PSK";

/// TV endpoint settings. Read-only once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Host or host:port of the TV, e.g. "192.168.1.224"
    #[serde(default)]
    pub address: String,
    /// Pre-shared key configured on the TV (sent as X-Auth-PSK)
    #[serde(default, alias = "psk")]
    pub preshared_key: String,
    #[serde(default = "default_url_prefix")]
    pub url_prefix: String,
    #[serde(default = "default_url_suffix")]
    pub url_suffix: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_url_prefix() -> String {
    "http://".to_string()
}
fn default_url_suffix() -> String {
    "/sony/IRCC".to_string()
}
fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT.as_millis() as u64
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            preshared_key: String::new(),
            url_prefix: default_url_prefix(),
            url_suffix: default_url_suffix(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl DeviceConfig {
    pub fn new(address: impl Into<String>, preshared_key: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            preshared_key: preshared_key.into(),
            ..Self::default()
        }
    }

    /// `<prefix><address><suffix>`
    pub fn endpoint_url(&self) -> String {
        format!("{}{}{}", self.url_prefix, self.address, self.url_suffix)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn is_configured(&self) -> bool {
        !self.address.trim().is_empty() && !self.preshared_key.is_empty()
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(address) = std::env::var(ADDRESS_ENV) {
            self.address = address;
        }
        if let Ok(key) = std::env::var(PSK_ENV) {
            self.preshared_key = key;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub device: DeviceConfig,
    /// Directory served under /static when the UI is enabled
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_static_dir() -> String {
    "static".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device: DeviceConfig::default(),
            static_dir: default_static_dir(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self> {
        let raw = fs::read_to_string(path).context("reading config file")?;
        let mut cfg: Config = serde_json::from_str(&raw).context("parsing JSON")?;
        cfg.device.apply_env_overrides();
        Ok(cfg)
    }

    /// Defaults plus `BRAVIA_ADDRESS` / `BRAVIA_PSK`.
    pub fn from_env() -> Self {
        let mut cfg = Config::default();
        cfg.device.apply_env_overrides();
        cfg
    }

    /// Reads `path` if it exists, otherwise falls back to the environment.
    pub fn load(path: &str) -> Result<Self> {
        if std::path::Path::new(path).exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(path, "config file not found, using environment");
            Ok(Self::from_env())
        }
    }
}
