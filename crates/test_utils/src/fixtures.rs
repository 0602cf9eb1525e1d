//! Pre-built Test Fixtures
//!
//! Provides ready-to-use speakers for the registration scenarios exercised
//! across the test suite.

use domain_speaker::Speaker;

use crate::builders::SpeakerBuilder;

/// Fixture for string field values
pub struct StringFixtures;

impl StringFixtures {
    pub fn first_name() -> &'static str {
        "First"
    }

    pub fn last_name() -> &'static str {
        "Last"
    }

    pub fn email() -> &'static str {
        "example@domain.com"
    }

    pub fn employer() -> &'static str {
        "Example Employer"
    }

    pub fn session_title() -> &'static str {
        "test title"
    }

    pub fn session_description() -> &'static str {
        "test description"
    }
}

/// Fixture for whole speakers
pub struct SpeakerFixtures;

impl SpeakerFixtures {
    /// A speaker the default policy approves at the 500 fee
    pub fn approvable() -> Speaker {
        SpeakerBuilder::new().build()
    }

    /// A blogger with an aol.com address browsing with IE 6
    ///
    /// Still approvable: the blog makes the speaker exceptional.
    pub fn with_red_flags() -> Speaker {
        SpeakerBuilder::new().with_red_flags().build()
    }

    /// An ordinary speaker with red flags, rejected by the default policy
    pub fn below_standards() -> Speaker {
        SpeakerBuilder::new().unremarkable().with_red_flags().build()
    }

    /// A speaker whose only session is about Cobol
    pub fn legacy_topics_only() -> Speaker {
        SpeakerBuilder::new()
            .with_sessions([("Cobol for dummies", "Intro to Cobol")])
            .build()
    }
}
