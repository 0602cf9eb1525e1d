//! Custom Test Assertions
//!
//! Provides assertion helpers for registration outcomes that give more
//! meaningful failure messages than matching on results by hand.

use core_kernel::SpeakerId;
use domain_speaker::{
    InMemorySpeakerRepository, RegisterError, RegisterErrorKind, Speaker,
};
use rust_decimal::Decimal;

/// Asserts that registration failed with the given kind
///
/// # Panics
///
/// Panics if registration succeeded or failed for a different reason
pub fn assert_rejected(result: &Result<SpeakerId, RegisterError>, expected: RegisterErrorKind) {
    match result {
        Ok(id) => panic!("Expected {:?}, but speaker was registered as {}", expected, id),
        Err(e) => assert_eq!(
            e.kind(),
            expected,
            "Expected {:?}, got {:?} ({})",
            expected,
            e.kind(),
            e
        ),
    }
}

/// Asserts that registration succeeded and the id was recorded on the speaker
///
/// Returns the assigned id.
pub fn assert_registered(result: &Result<SpeakerId, RegisterError>, speaker: &Speaker) -> SpeakerId {
    match result {
        Ok(id) => {
            assert_eq!(speaker.id, Some(*id), "Speaker id not recorded after registration");
            *id
        }
        Err(e) => panic!("Expected registration to succeed, got {:?} ({})", e.kind(), e),
    }
}

/// Asserts the repository was never asked to save anything
pub fn assert_not_persisted(repository: &InMemorySpeakerRepository) {
    assert_eq!(
        repository.save_count(),
        0,
        "Repository was called {} time(s) for a rejected speaker",
        repository.save_count()
    );
    assert!(repository.is_empty(), "Repository holds {} speaker(s)", repository.len());
}

/// Asserts no session has been approved
pub fn assert_no_session_approved(speaker: &Speaker) {
    let approved: Vec<_> = speaker
        .approved_sessions()
        .map(|s| s.title.as_str())
        .collect();
    assert!(approved.is_empty(), "Unexpectedly approved sessions: {:?}", approved);
}

/// Asserts the fee computed during registration
pub fn assert_fee(speaker: &Speaker, expected: Decimal) {
    assert_eq!(
        speaker.registration_fee, expected,
        "Fee for {:?} years of experience: expected {}, got {}",
        speaker.years_experience, expected, speaker.registration_fee
    );
}
