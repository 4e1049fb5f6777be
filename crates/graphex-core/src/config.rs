//! Configuration for graphex consumers.
//!
//! Layered with figment: built-in defaults, then an optional TOML file, then
//! `GRAPHEX_`-prefixed environment variables (nested keys split on `__`, e.g.
//! `GRAPHEX_LIMITS__MAX_VERTICES=5000`). The library never loads configuration
//! on its own; callers opt in through [`GraphexConfig::load`] and friends.
//!
//! ```toml
//! [logging]
//! level = "debug"
//! format = "json"
//!
//! [limits]
//! max_vertices = 10000
//!
//! [graph]
//! default_weight = 1
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Error;
use crate::graph::DEFAULT_EDGE_WEIGHT;

/// Default config file looked up by [`GraphexConfig::load`].
pub const DEFAULT_CONFIG_FILE: &str = "graphex.toml";

/// Prefix of environment variables read by the loaders.
pub const ENV_PREFIX: &str = "GRAPHEX_";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A provider failed or a value had the wrong type.
    #[error("Failed to load configuration: {0}")]
    Load(String),

    /// A value was well-typed but not acceptable.
    #[error("Invalid configuration value for '{key}': {message}")]
    Invalid {
        /// Dotted key of the offending value.
        key: String,
        /// What is wrong with it.
        message: String,
    },

    /// The effective configuration could not be rendered.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}

/// Output format of log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Plain,
    /// One JSON object per line.
    Json,
}

/// Logging section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level or `EnvFilter` directive (`RUST_LOG` takes precedence).
    pub level: String,
    /// Line format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Plain,
        }
    }
}

/// Resource limits section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Largest vertex count accepted by [`crate::graph::Graph::with_limits`].
    pub max_vertices: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_vertices: 1_000_000,
        }
    }
}

/// Graph construction section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Weight used for edges given without one.
    pub default_weight: i64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            default_weight: DEFAULT_EDGE_WEIGHT,
        }
    }
}

/// Top-level graphex configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphexConfig {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Resource limits.
    pub limits: LimitsConfig,
    /// Graph construction defaults.
    pub graph: GraphConfig,
}

impl GraphexConfig {
    /// Loads defaults, then `graphex.toml` in the working directory if it
    /// exists, then the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a provider fails or validation rejects a value.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::base().merge(Toml::file(DEFAULT_CONFIG_FILE)).merge(Self::env()))
    }

    /// Loads defaults, then the given TOML file (which must exist), then the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing, a provider fails, or
    /// validation rejects a value.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::Load(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        Self::extract(Self::base().merge(Toml::file(path)).merge(Self::env()))
    }

    /// Parses a TOML document on top of the defaults. The environment is not
    /// consulted.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if parsing or validation fails.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::extract(Self::base().merge(Toml::string(toml)))
    }

    /// Checks value ranges that the type system cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first rejected key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.logging.level.trim();
        if level.is_empty() {
            return Err(invalid("logging.level", "must not be empty"));
        }
        // Bare levels are checked; full directives ("graphex=debug") are left to EnvFilter.
        if !level.contains('=') && !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            return Err(invalid(
                "logging.level",
                &format!("unknown level '{level}', expected one of {LOG_LEVELS:?}"),
            ));
        }
        if self.limits.max_vertices == 0 {
            return Err(invalid("limits.max_vertices", "must be at least 1"));
        }
        if self.graph.default_weight < 0 {
            return Err(invalid(
                "graph.default_weight",
                "negative weights are not supported",
            ));
        }
        Ok(())
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if rendering fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    fn base() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
    }

    fn env() -> Env {
        Env::prefixed(ENV_PREFIX).split("__")
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment
            .extract()
            .map_err(|e| ConfigError::Load(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::Invalid {
        key: key.to_string(),
        message: message.to_string(),
    }
}
