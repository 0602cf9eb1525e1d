//! CLI configuration

use std::path::PathBuf;

use serde::Deserialize;

/// Runtime configuration for `register-speaker`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level or `EnvFilter` directive
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
    /// Registration policy file; built-in rules apply when unset
    pub policy_file: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_json: false,
            policy_file: None,
        }
    }
}

impl CliConfig {
    /// Loads configuration from `REGISTER_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_env_with_prefix("REGISTER")
    }

    pub fn from_env_with_prefix(prefix: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix(prefix).try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
