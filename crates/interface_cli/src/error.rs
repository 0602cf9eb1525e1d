//! CLI error types

use thiserror::Error;

use domain_speaker::PolicyError;

/// Failures that stop the CLI before a registration decision is made
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read submission: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to write report: {0}")]
    Output(#[source] std::io::Error),

    #[error("Malformed submission: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
