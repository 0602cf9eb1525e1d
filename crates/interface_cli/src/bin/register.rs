//! Speaker Registration - CLI Binary
//!
//! Registers a single speaker against an in-memory repository and prints the
//! outcome.
//!
//! # Usage
//!
//! ```bash
//! # Read the submission from a file
//! register-speaker speaker.json
//!
//! # Or from stdin, with a custom policy
//! REGISTER_POLICY_FILE=policy.toml register-speaker < speaker.json
//! ```
//!
//! # Environment Variables
//!
//! * `REGISTER_LOG_LEVEL` - Log level or filter directive (default: info)
//! * `REGISTER_LOG_JSON` - Emit JSON log lines (default: false)
//! * `REGISTER_POLICY_FILE` - Registration policy file (TOML, JSON or YAML)
//! * `REGISTRATION_*` - Individual policy overrides, see `RegistrationPolicy`
//!
//! Exits with status 1 when the speaker is not registered.

use std::path::PathBuf;
use std::process::ExitCode;

use interface_cli::{read_submission, run, CliConfig, CliError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env().map_err(CliError::from)?;
    init_tracing(&config);

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let input = read_submission(path.as_deref(), std::io::stdin().lock())?;
    let report = run(&config, &input, &mut std::io::stdout().lock())?;

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Initializes the tracing subscriber, writing to stderr so stdout stays JSON
fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    if config.log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
