//! Speaker aggregate
//!
//! A speaker carries everything the registration rules look at plus the two
//! values registration produces: the fee and the identifier assigned by the
//! repository.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::SpeakerId;

use crate::browser::WebBrowser;
use crate::error::RegisterError;
use crate::ports::SpeakerRepository;
use crate::registration::RegistrationEvaluator;
use crate::session::Session;

/// A conference speaker applying to present one or more sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Speaker {
    /// Assigned by the repository on successful registration
    #[serde(skip_deserializing)]
    pub id: Option<SpeakerId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Unknown experience is allowed and prices at the default fee
    #[serde(default)]
    pub years_experience: Option<u32>,
    #[serde(default)]
    pub has_blog: bool,
    #[serde(default)]
    pub blog_url: Option<String>,
    #[serde(default)]
    pub employer: Option<String>,
    #[serde(default)]
    pub browser: WebBrowser,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub sessions: Vec<Session>,
    /// Computed during registration
    #[serde(skip_deserializing)]
    pub registration_fee: Decimal,
}

impl Speaker {
    /// Creates an unregistered speaker with no sessions
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            years_experience: None,
            has_blog: false,
            blog_url: None,
            employer: None,
            browser: WebBrowser::default(),
            certifications: Vec::new(),
            sessions: Vec::new(),
            registration_fee: Decimal::ZERO,
        }
    }

    /// Full name for display
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    /// Everything after the last `@`, or the whole address when there is none
    pub fn email_domain(&self) -> &str {
        self.email
            .rsplit_once('@')
            .map(|(_, domain)| domain)
            .unwrap_or(&self.email)
    }

    pub fn add_session(&mut self, session: Session) {
        self.sessions.push(session);
    }

    pub fn approved_sessions(&self) -> impl Iterator<Item = &Session> {
        self.sessions.iter().filter(|s| s.is_approved())
    }

    pub fn is_registered(&self) -> bool {
        self.id.is_some()
    }

    /// Registers the speaker under the default [`RegistrationPolicy`](crate::policy::RegistrationPolicy)
    ///
    /// On success the fee and the identifier returned by `repository` are
    /// stored on the speaker. See [`RegistrationEvaluator::register`] for the
    /// order in which rules are checked.
    pub fn register(
        &mut self,
        repository: &dyn SpeakerRepository,
    ) -> Result<SpeakerId, RegisterError> {
        RegistrationEvaluator::default().register(self, repository)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_domain_uses_last_at() {
        let speaker = Speaker::new("Ada", "Lovelace", "ada@aol.com");
        assert_eq!(speaker.email_domain(), "aol.com");

        let speaker = Speaker::new("Ada", "Lovelace", "\"odd@name\"@prodigy.com");
        assert_eq!(speaker.email_domain(), "prodigy.com");
    }

    #[test]
    fn test_email_domain_without_at() {
        let speaker = Speaker::new("Ada", "Lovelace", "compuserve.com");
        assert_eq!(speaker.email_domain(), "compuserve.com");
    }

    #[test]
    fn test_new_speaker_is_unregistered() {
        let speaker = Speaker::new("Ada", "Lovelace", "ada@example.com");
        assert!(!speaker.is_registered());
        assert_eq!(speaker.registration_fee, Decimal::ZERO);
        assert_eq!(speaker.approved_sessions().count(), 0);
    }

    #[test]
    fn test_display_name() {
        let speaker = Speaker::new(" Ada ", "Lovelace", "ada@example.com");
        assert_eq!(speaker.display_name(), "Ada Lovelace");
    }
}
