//! Speaker domain errors
//!
//! Registration failures are expected business outcomes and are returned as
//! [`RegisterError`] values. The rule variants are listed in the order the
//! evaluator checks them; only the first violation is ever reported.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use core_kernel::{CoreError, PortError};

/// Why a registration attempt did not produce a speaker id
#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("First name is required")]
    FirstNameRequired,

    #[error("Last name is required")]
    LastNameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("At least one session must be provided")]
    NoSessionsProvided,

    /// Neither exceptional nor free of red flags
    #[error("Speaker does not meet our standards")]
    SpeakerDoesNotMeetStandards,

    /// Every submitted session was about old technology
    #[error("No sessions were approved")]
    NoSessionsApproved,

    /// The repository rejected or failed to store an otherwise valid speaker
    #[error("Failed to persist speaker: {0}")]
    PersistenceFailed(#[from] PortError),
}

impl RegisterError {
    /// Returns the payload-free kind of this error
    pub fn kind(&self) -> RegisterErrorKind {
        match self {
            RegisterError::FirstNameRequired => RegisterErrorKind::FirstNameRequired,
            RegisterError::LastNameRequired => RegisterErrorKind::LastNameRequired,
            RegisterError::EmailRequired => RegisterErrorKind::EmailRequired,
            RegisterError::NoSessionsProvided => RegisterErrorKind::NoSessionsProvided,
            RegisterError::SpeakerDoesNotMeetStandards => {
                RegisterErrorKind::SpeakerDoesNotMeetStandards
            }
            RegisterError::NoSessionsApproved => RegisterErrorKind::NoSessionsApproved,
            RegisterError::PersistenceFailed(_) => RegisterErrorKind::PersistenceFailed,
        }
    }

    /// True for rule violations, false for collaborator faults
    pub fn is_business_rule(&self) -> bool {
        !matches!(self, RegisterError::PersistenceFailed(_))
    }
}

/// Serializable discriminant of [`RegisterError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegisterErrorKind {
    FirstNameRequired,
    LastNameRequired,
    EmailRequired,
    NoSessionsProvided,
    SpeakerDoesNotMeetStandards,
    NoSessionsApproved,
    PersistenceFailed,
}

/// Errors raised while loading a [`RegistrationPolicy`](crate::policy::RegistrationPolicy)
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Failed to load registration policy: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid registration policy: {0}")]
    Invalid(#[from] CoreError),
}
