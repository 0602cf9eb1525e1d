//! Registration decision procedure
//!
//! [`RegistrationEvaluator::register`] runs a single linear pipeline and stops
//! at the first failure:
//!
//! ```text
//! required fields ─► qualification ─► session approval ─► fee ─► persist
//!       │                 │                  │                      │
//!  *Required       DoesNotMeetStandards  NoSessionsApproved  PersistenceFailed
//! ```
//!
//! Sessions are only touched once the speaker has qualified, and the
//! repository is only called once every rule has passed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use core_kernel::SpeakerId;

use crate::error::{RegisterError, RegisterErrorKind};
use crate::policy::RegistrationPolicy;
use crate::ports::SpeakerRepository;
use crate::speaker::Speaker;

/// Why a speaker counts as exceptional
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExceptionalReason {
    SeniorExperience(u32),
    Blogger,
    Certified(usize),
    PreferredEmployer(String),
}

/// A screening concern that disqualifies a non-exceptional speaker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RedFlag {
    AncientEmailDomain(String),
    OutdatedBrowser { major_version: u32 },
}

/// Outcome of the qualification check
///
/// Red flags are only looked for when the speaker has no exceptional
/// reason, so an exceptional speaker always reports an empty `red_flags`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualificationAssessment {
    pub exceptional_reasons: Vec<ExceptionalReason>,
    pub red_flags: Vec<RedFlag>,
}

impl QualificationAssessment {
    pub fn appears_exceptional(&self) -> bool {
        !self.exceptional_reasons.is_empty()
    }

    pub fn has_red_flags(&self) -> bool {
        !self.red_flags.is_empty()
    }

    pub fn is_qualified(&self) -> bool {
        self.appears_exceptional() || !self.has_red_flags()
    }
}

/// Applies a [`RegistrationPolicy`] to speakers
#[derive(Debug, Clone, Default)]
pub struct RegistrationEvaluator {
    policy: RegistrationPolicy,
}

impl RegistrationEvaluator {
    pub fn new(policy: RegistrationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &RegistrationPolicy {
        &self.policy
    }

    /// Registers a speaker
    ///
    /// This method:
    /// 1. Checks first name, last name, email and that sessions were submitted
    /// 2. Checks the speaker is exceptional or free of red flags
    /// 3. Approves every session not about old technology
    /// 4. Prices the registration from years of experience
    /// 5. Saves the speaker and records the returned id on it
    ///
    /// # Errors
    ///
    /// The first violated rule as a [`RegisterError`], or
    /// [`RegisterError::PersistenceFailed`] when the repository fails. The
    /// repository error is passed through untouched and never retried.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let evaluator = RegistrationEvaluator::default();
    /// match evaluator.register(&mut speaker, &repository) {
    ///     Ok(id) => println!("registered {} for {}", id, speaker.registration_fee),
    ///     Err(e) if e.is_business_rule() => println!("rejected: {}", e),
    ///     Err(e) => return Err(e.into()),
    /// }
    /// ```
    #[instrument(skip_all, fields(email_domain = %speaker.email_domain()))]
    pub fn register(
        &self,
        speaker: &mut Speaker,
        repository: &dyn SpeakerRepository,
    ) -> Result<SpeakerId, RegisterError> {
        if let Err(e) = self.validate_data(speaker) {
            debug!(error = ?e.kind(), "Registration rejected: missing data");
            return Err(e);
        }

        let assessment = self.assess_qualification(speaker);
        if !assessment.is_qualified() {
            info!(red_flags = ?assessment.red_flags, "Speaker does not meet standards");
            return Err(RegisterError::SpeakerDoesNotMeetStandards);
        }

        let approved = self.approve_sessions(speaker);
        if approved == 0 {
            info!(submitted = speaker.sessions.len(), "No sessions approved");
            return Err(RegisterError::NoSessionsApproved);
        }

        speaker.registration_fee = self.registration_fee(speaker);

        let id = repository.save_speaker(speaker).map_err(|e| {
            warn!(error = %e, transient = e.is_transient(), "Failed to persist speaker");
            RegisterError::from(e)
        })?;
        speaker.id = Some(id);

        info!(
            speaker_id = %id,
            approved_sessions = approved,
            fee = %speaker.registration_fee,
            "Speaker registered"
        );
        Ok(id)
    }

    /// Checks the required fields in order
    ///
    /// Blank and whitespace-only values count as missing.
    pub fn validate_data(&self, speaker: &Speaker) -> Result<(), RegisterError> {
        if is_blank(&speaker.first_name) {
            return Err(RegisterError::FirstNameRequired);
        }
        if is_blank(&speaker.last_name) {
            return Err(RegisterError::LastNameRequired);
        }
        if is_blank(&speaker.email) {
            return Err(RegisterError::EmailRequired);
        }
        if speaker.sessions.is_empty() {
            return Err(RegisterError::NoSessionsProvided);
        }
        Ok(())
    }

    /// Determines whether the speaker qualifies to present
    pub fn assess_qualification(&self, speaker: &Speaker) -> QualificationAssessment {
        let policy = &self.policy;
        let mut assessment = QualificationAssessment::default();

        if let Some(years) = speaker
            .years_experience
            .filter(|&years| policy.is_exceptional_experience(Some(years)))
        {
            assessment
                .exceptional_reasons
                .push(ExceptionalReason::SeniorExperience(years));
        }
        if speaker.has_blog {
            assessment.exceptional_reasons.push(ExceptionalReason::Blogger);
        }
        if policy.is_exceptional_certification_count(speaker.certifications.len()) {
            assessment
                .exceptional_reasons
                .push(ExceptionalReason::Certified(speaker.certifications.len()));
        }
        if let Some(employer) = speaker
            .employer
            .as_deref()
            .filter(|employer| policy.is_preferred_employer(Some(*employer)))
        {
            assessment
                .exceptional_reasons
                .push(ExceptionalReason::PreferredEmployer(employer.to_string()));
        }

        if assessment.appears_exceptional() {
            return assessment;
        }

        let domain = speaker.email_domain();
        if policy.is_ancient_email_domain(domain) {
            assessment
                .red_flags
                .push(RedFlag::AncientEmailDomain(domain.to_string()));
        }
        if policy.is_outdated_browser(&speaker.browser) {
            assessment.red_flags.push(RedFlag::OutdatedBrowser {
                major_version: speaker.browser.major_version,
            });
        }

        assessment
    }

    /// Sets every session's approval flag and returns how many were approved
    pub fn approve_sessions(&self, speaker: &mut Speaker) -> usize {
        let mut approved = 0;
        for session in &mut speaker.sessions {
            match self.policy.old_technology_in(session) {
                Some(term) => {
                    debug!(session_id = %session.id, term, "Session rejected as old technology");
                    session.set_approved(false);
                }
                None => {
                    session.set_approved(true);
                    approved += 1;
                }
            }
        }
        approved
    }

    pub fn registration_fee(&self, speaker: &Speaker) -> Decimal {
        self.policy.fee_schedule.fee_for(speaker.years_experience)
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Serializable summary of a registration attempt
///
/// Exactly one of `speaker_id` and `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker_id: Option<SpeakerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RegisterErrorKind>,
}

impl RegisterResponse {
    pub fn success(speaker_id: SpeakerId) -> Self {
        Self {
            speaker_id: Some(speaker_id),
            error: None,
        }
    }

    pub fn failure(error: RegisterErrorKind) -> Self {
        Self {
            speaker_id: None,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.speaker_id.is_some()
    }
}

impl From<&Result<SpeakerId, RegisterError>> for RegisterResponse {
    fn from(result: &Result<SpeakerId, RegisterError>) -> Self {
        match result {
            Ok(id) => Self::success(*id),
            Err(e) => Self::failure(e.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::WebBrowser;
    use crate::ports::mock::InMemorySpeakerRepository;
    use crate::session::Session;

    fn approvable_speaker() -> Speaker {
        let mut speaker = Speaker::new("First", "Last", "example@domain.com");
        speaker.employer = Some("Example Employer".to_string());
        speaker.has_blog = true;
        speaker.browser = WebBrowser::new("test", 1);
        speaker.years_experience = Some(1);
        speaker.blog_url = Some(String::new());
        speaker.add_session(Session::new("test title", "test description"));
        speaker
    }

    #[test]
    fn test_whitespace_names_are_missing() {
        let evaluator = RegistrationEvaluator::default();
        let mut speaker = approvable_speaker();
        speaker.first_name = "   ".to_string();

        let err = evaluator.validate_data(&speaker).unwrap_err();
        assert_eq!(err.kind(), RegisterErrorKind::FirstNameRequired);
    }

    #[test]
    fn test_exceptional_speaker_skips_red_flag_screening() {
        let evaluator = RegistrationEvaluator::default();
        let mut speaker = approvable_speaker();
        speaker.email = "tom@aol.com".to_string();

        let assessment = evaluator.assess_qualification(&speaker);

        assert_eq!(assessment.exceptional_reasons, vec![ExceptionalReason::Blogger]);
        assert!(assessment.red_flags.is_empty());
        assert!(assessment.is_qualified());
    }

    #[test]
    fn test_red_flags_collected_for_ordinary_speaker() {
        let evaluator = RegistrationEvaluator::default();
        let mut speaker = approvable_speaker();
        speaker.has_blog = false;
        speaker.email = "tom@aol.com".to_string();
        speaker.browser = WebBrowser::new("IE", 6);

        let assessment = evaluator.assess_qualification(&speaker);

        assert_eq!(
            assessment.red_flags,
            vec![
                RedFlag::AncientEmailDomain("aol.com".to_string()),
                RedFlag::OutdatedBrowser { major_version: 6 },
            ]
        );
        assert!(!assessment.is_qualified());
    }

    #[test]
    fn test_approve_sessions_sets_every_flag() {
        let evaluator = RegistrationEvaluator::default();
        let mut speaker = approvable_speaker();
        speaker.add_session(Session::new("Punch Cards revisited", "A history"));

        let approved = evaluator.approve_sessions(&mut speaker);

        assert_eq!(approved, 1);
        assert!(speaker.sessions[0].is_approved());
        assert!(!speaker.sessions[1].is_approved());
    }

    #[test]
    fn test_register_records_fee_and_id() {
        let repository = InMemorySpeakerRepository::new();
        let mut speaker = approvable_speaker();

        let id = RegistrationEvaluator::default()
            .register(&mut speaker, &repository)
            .unwrap();

        assert_eq!(speaker.id, Some(id));
        assert_eq!(speaker.registration_fee, Decimal::from(500));
        assert_eq!(repository.save_count(), 1);
    }

    #[test]
    fn test_response_from_result() {
        let id = SpeakerId::new();
        let ok: Result<SpeakerId, RegisterError> = Ok(id);
        let err: Result<SpeakerId, RegisterError> = Err(RegisterError::NoSessionsApproved);

        assert_eq!(RegisterResponse::from(&ok), RegisterResponse::success(id));
        assert_eq!(
            RegisterResponse::from(&err).error,
            Some(RegisterErrorKind::NoSessionsApproved)
        );
    }
}
