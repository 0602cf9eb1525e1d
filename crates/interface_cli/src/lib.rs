//! Speaker Registration CLI
//!
//! Thin shell around `domain_speaker`: reads one speaker submission as JSON,
//! registers it under the configured policy and reports the outcome as JSON.
//!
//! - **command**: the end-to-end flow behind the binary
//! - **config**: `REGISTER_*` environment configuration
//! - **intake**: submission parsing and the printed report
//! - **error**: failures that prevent a registration decision

pub mod command;
pub mod config;
pub mod error;
pub mod intake;

pub use command::{read_submission, run};
pub use config::CliConfig;
pub use error::CliError;
pub use intake::{register_json, RegistrationReport, SpeakerSubmission};
