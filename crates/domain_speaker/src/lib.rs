//! Speaker Registration Domain
//!
//! This crate decides whether a conference speaker may register, prices the
//! registration and hands approved speakers to a repository port.
//!
//! # Registration Pipeline
//!
//! ```text
//! FirstName / LastName / Email / Sessions present?
//!         └─► exceptional OR no red flags?
//!                 └─► at least one session not about old technology?
//!                         └─► fee from experience ─► SpeakerRepository::save_speaker
//! ```
//!
//! Every step either passes or yields a [`RegisterError`]; nothing panics and
//! repository faults surface as [`RegisterError::PersistenceFailed`].
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_speaker::{InMemorySpeakerRepository, Session, Speaker, WebBrowser};
//!
//! let repository = InMemorySpeakerRepository::new();
//!
//! let mut speaker = Speaker::new("First", "Last", "example@domain.com");
//! speaker.has_blog = true;
//! speaker.years_experience = Some(1);
//! speaker.browser = WebBrowser::new("test", 1);
//! speaker.add_session(Session::new("test title", "test description"));
//!
//! let id = speaker.register(&repository).expect("speaker qualifies");
//! assert_eq!(speaker.id, Some(id));
//! ```

pub mod browser;
pub mod error;
pub mod fee;
pub mod policy;
pub mod ports;
pub mod registration;
pub mod session;
pub mod speaker;

pub use browser::{BrowserName, WebBrowser};
pub use error::{PolicyError, RegisterError, RegisterErrorKind};
pub use fee::{FeeBand, FeeSchedule};
pub use policy::RegistrationPolicy;
pub use ports::SpeakerRepository;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::{FailureMode, InMemorySpeakerRepository};
pub use registration::{
    ExceptionalReason, QualificationAssessment, RedFlag, RegisterResponse,
    RegistrationEvaluator,
};
pub use session::Session;
pub use speaker::Speaker;
