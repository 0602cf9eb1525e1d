//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating speakers and field values
//! that exercise the registration rules.

use domain_speaker::{Speaker, WebBrowser};
use proptest::prelude::*;

use crate::builders::SpeakerBuilder;

/// Strategy for strings that are empty or whitespace only
pub fn blank_string_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[ \t\n]{1,8}",
    ]
}

/// Strategy for non-blank names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,12}"
}

/// Strategy for emails at domains that are not red flags
pub fn modern_email_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{1,10}", prop_oneof![
        Just("example.com"),
        Just("domain.com"),
        Just("mail.org"),
    ])
        .prop_map(|(local, domain)| format!("{}@{}", local, domain))
}

/// Strategy for emails at the legacy domains of the default policy
pub fn ancient_email_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{1,10}", prop_oneof![
        Just("aol.com"),
        Just("prodigy.com"),
        Just("compuserve.com"),
    ])
        .prop_map(|(local, domain)| format!("{}@{}", local, domain))
}

/// Strategy for years of experience, including unknown
pub fn years_experience_strategy() -> impl Strategy<Value = Option<u32>> {
    prop_oneof![
        1 => Just(None),
        9 => (0u32..40u32).prop_map(Some),
    ]
}

/// Strategy for raw browser names, user-agent fragments included
pub fn raw_browser_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("IE".to_string()),
        Just("MSIE 6.0".to_string()),
        Just("Firefox/121.0".to_string()),
        Just("Chrome/120.0 Safari/537.36".to_string()),
        Just("Chrome/120.0 Safari/537.36 Edg/120.0".to_string()),
        Just("Konqueror".to_string()),
        ".{0,24}",
    ]
}

/// Strategy for browsers that are not Internet Explorer
pub fn modern_browser_strategy() -> impl Strategy<Value = WebBrowser> {
    (prop_oneof![Just("Firefox"), Just("Chrome"), Just("Safari")], 1u32..130u32)
        .prop_map(|(name, version)| WebBrowser::new(name, version))
}

/// Strategy for speakers that always pass qualification and have a modern session
pub fn approvable_speaker_strategy() -> impl Strategy<Value = Speaker> {
    (
        name_strategy(),
        name_strategy(),
        modern_email_strategy(),
        years_experience_strategy(),
        modern_browser_strategy(),
    )
        .prop_map(|(first, last, email, years, browser)| {
            let mut speaker = SpeakerBuilder::new()
                .with_first_name(first)
                .with_last_name(last)
                .with_email(email)
                .with_years_experience(years)
                .build();
            speaker.browser = browser;
            speaker
        })
}
