//! Configuration for shield-rs

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, ShieldError};
use crate::scoring::{RuleSet, Thresholds, MAX_RISK_SCORE};

/// Prefix for environment overrides, e.g. `SHIELD_SERVER__LISTEN_ADDR`
pub const ENV_PREFIX: &str = "SHIELD";

/// Main service configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShieldConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Fraud thresholds per analysis type
    pub thresholds: Thresholds,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Rule table overrides
    pub rules: RuleSet,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address (e.g., "0.0.0.0:8000")
    pub listen_addr: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter, overridden by RUST_LOG
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "shield_rs=info,tower_http=info".to_string(),
        }
    }
}

impl ShieldConfig {
    /// Load configuration from an optional TOML file, then apply
    /// `SHIELD_*` environment overrides. Rule lists are given in the
    /// environment as comma-separated strings.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).format(config::FileFormat::Toml));
        }

        let config: ShieldConfig = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ShieldError::Config(format!("Failed to read config file: {}", e)))?;

        let config: ShieldConfig = toml::from_str(&content)
            .map_err(|e| ShieldError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Create a default development configuration
    pub fn development() -> Self {
        Self::default()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.listen_addr.trim().is_empty() {
            return Err(ShieldError::Config("Listen address is empty".to_string()));
        }

        for (name, value) in [
            ("message", self.thresholds.message),
            ("phone", self.thresholds.phone),
            ("url", self.thresholds.url),
        ] {
            if value > MAX_RISK_SCORE {
                return Err(ShieldError::Config(format!(
                    "Threshold '{}' must be between 0 and {}, got {}",
                    name, MAX_RISK_SCORE, value
                )));
            }
        }

        // An empty entry would match every input
        for (name, list) in self.rules.lists() {
            if list.iter().any(|entry| entry.is_empty()) {
                return Err(ShieldError::Config(format!(
                    "Rule list '{}' contains an empty entry",
                    name
                )));
            }
        }

        Ok(())
    }
}
