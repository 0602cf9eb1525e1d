//! The `register-speaker` command flow
//!
//! The binary only wires process state (arguments, stdin, stdout, exit code)
//! into these functions.

use std::io::{Read, Write};
use std::path::Path;

use domain_speaker::{InMemorySpeakerRepository, RegistrationEvaluator, RegistrationPolicy};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::intake::{register_json, RegistrationReport};

/// Reads the submission from `path` when given, otherwise from `stdin`
pub fn read_submission(path: Option<&Path>, mut stdin: impl Read) -> Result<String, CliError> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut input = String::new();
            stdin.read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

/// Registers one submission under the configured policy and writes the report
///
/// The report is returned as well so the caller can pick an exit status.
pub fn run(
    config: &CliConfig,
    input: &str,
    out: &mut impl Write,
) -> Result<RegistrationReport, CliError> {
    let policy = RegistrationPolicy::load(config.policy_file.as_deref())?;
    tracing::debug!(policy_file = ?config.policy_file, "Registration policy loaded");

    let evaluator = RegistrationEvaluator::new(policy);
    let repository = InMemorySpeakerRepository::new();
    let report = register_json(input, &evaluator, &repository)?;

    serde_json::to_writer_pretty(&mut *out, &report).map_err(|e| CliError::Output(e.into()))?;
    writeln!(out).map_err(CliError::Output)?;
    Ok(report)
}
