//! Speaker Domain Ports
//!
//! Registration needs exactly one thing from the outside world: somewhere to
//! store an approved speaker. [`SpeakerRepository`] is that port. It is
//! synchronous; an adapter backed by a remote store performs a single blocking
//! call and owns any retry policy itself.
//!
//! ```rust,ignore
//! struct PostgresSpeakerRepository { /* pool */ }
//!
//! impl DomainPort for PostgresSpeakerRepository {}
//!
//! impl SpeakerRepository for PostgresSpeakerRepository {
//!     fn save_speaker(&self, speaker: &Speaker) -> Result<SpeakerId, PortError> {
//!         // INSERT ... RETURNING id
//!     }
//! }
//! ```

use core_kernel::{DomainPort, PortError, SpeakerId};

use crate::speaker::Speaker;

/// Persistence port for approved speakers
pub trait SpeakerRepository: DomainPort {
    /// Stores the speaker and returns the identifier it was assigned
    ///
    /// Called at most once per registration attempt, and only after every
    /// rule has passed.
    fn save_speaker(&self, speaker: &Speaker) -> Result<SpeakerId, PortError>;
}

/// In-memory adapter for tests and local runs
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::RwLock;

    /// How a failing repository fails
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum FailureMode {
        Unavailable,
        Timeout,
        Internal,
    }

    impl FailureMode {
        fn to_error(self) -> PortError {
            match self {
                FailureMode::Unavailable => PortError::ServiceUnavailable {
                    service: "in-memory-speaker-store".to_string(),
                },
                FailureMode::Timeout => PortError::Timeout {
                    operation: "save_speaker".to_string(),
                    duration_ms: 0,
                },
                FailureMode::Internal => PortError::internal("simulated storage fault"),
            }
        }
    }

    /// Stores speakers in a map keyed by assigned id
    ///
    /// Emails are unique: saving a second speaker with an email that is
    /// already stored fails with a conflict.
    #[derive(Debug, Default)]
    pub struct InMemorySpeakerRepository {
        speakers: RwLock<HashMap<SpeakerId, Speaker>>,
        save_calls: AtomicUsize,
        failure: Option<FailureMode>,
    }

    impl InMemorySpeakerRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// A repository whose every save fails with `mode`
        pub fn failing(mode: FailureMode) -> Self {
            Self {
                failure: Some(mode),
                ..Self::default()
            }
        }

        /// Number of `save_speaker` calls, successful or not
        pub fn save_count(&self) -> usize {
            self.save_calls.load(Ordering::SeqCst)
        }

        pub fn get(&self, id: SpeakerId) -> Option<Speaker> {
            self.speakers.read().ok()?.get(&id).cloned()
        }

        pub fn find_by_email(&self, email: &str) -> Option<Speaker> {
            self.speakers
                .read()
                .ok()?
                .values()
                .find(|s| s.email == email)
                .cloned()
        }

        pub fn len(&self) -> usize {
            self.speakers.read().map(|s| s.len()).unwrap_or(0)
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    impl DomainPort for InMemorySpeakerRepository {}

    impl SpeakerRepository for InMemorySpeakerRepository {
        fn save_speaker(&self, speaker: &Speaker) -> Result<SpeakerId, PortError> {
            self.save_calls.fetch_add(1, Ordering::SeqCst);

            if let Some(mode) = self.failure {
                return Err(mode.to_error());
            }

            let mut speakers = self
                .speakers
                .write()
                .map_err(|_| PortError::internal("speaker store lock poisoned"))?;

            if speakers.values().any(|s| s.email == speaker.email) {
                return Err(PortError::conflict(format!(
                    "{} is already registered",
                    speaker.email
                )));
            }

            let id = SpeakerId::new();
            let mut stored = speaker.clone();
            stored.id = Some(id);
            speakers.insert(id, stored);
            Ok(id)
        }
    }
}
