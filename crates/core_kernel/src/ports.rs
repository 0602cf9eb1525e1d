//! Ports and Adapters Infrastructure
//!
//! Domain crates describe what they need from the outside world as port
//! traits; adapters (an in-memory store for tests, a database or a remote
//! service in a deployment) implement them.
//!
//! ```text
//!   RegistrationEvaluator ──► SpeakerRepository (port, domain_speaker)
//!                                    ▲
//!                     ┌──────────────┴──────────────┐
//!              InMemorySpeakerRepository      any external store
//! ```
//!
//! Every port operation reports failure as a [`PortError`]. The domain never
//! retries; whether an error is worth retrying is exposed through
//! [`PortError::is_transient`] for the caller to decide.

use thiserror::Error;

/// Error type for port operations
#[derive(Debug, Error)]
pub enum PortError {
    /// The operation conflicts with existing data
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    #[error("Timeout after {duration_ms}ms: {operation}")]
    Timeout {
        operation: String,
        duration_ms: u64,
    },

    #[error("Service unavailable: {service}")]
    ServiceUnavailable {
        service: String,
    },

    #[error("Internal error: {message}")]
    Internal {
        message: String,
    },
}

impl PortError {
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PortError::Timeout { .. } | PortError::ServiceUnavailable { .. }
        )
    }
}

/// Marker trait for all domain ports
///
/// Ports are shared by reference between the caller and the evaluator, so
/// implementations must be thread-safe even though registration itself is
/// synchronous.
pub trait DomainPort: Send + Sync + 'static {}
