//! Speaker submissions as they arrive on the wire
//!
//! Submissions are deliberately lenient: missing names or emails parse as
//! empty strings so the registration rules, not the JSON parser, report
//! what is missing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::SpeakerId;
use domain_speaker::{
    RegisterError, RegisterResponse, RegistrationEvaluator, Session, Speaker,
    SpeakerRepository, WebBrowser,
};

/// Browser as reported by the client
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BrowserSubmission {
    pub name: String,
    pub major_version: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionSubmission {
    pub title: String,
    pub description: String,
}

/// A registration request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SpeakerSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub years_experience: Option<u32>,
    pub has_blog: bool,
    pub blog_url: Option<String>,
    pub employer: Option<String>,
    pub browser: BrowserSubmission,
    pub certifications: Vec<String>,
    pub sessions: Vec<SessionSubmission>,
}

impl SpeakerSubmission {
    pub fn into_speaker(self) -> Speaker {
        let mut speaker = Speaker::new(self.first_name, self.last_name, self.email);
        speaker.years_experience = self.years_experience;
        speaker.has_blog = self.has_blog;
        speaker.blog_url = self.blog_url;
        speaker.employer = self.employer;
        speaker.browser = WebBrowser::new(&self.browser.name, self.browser.major_version);
        speaker.certifications = self.certifications;
        speaker.sessions = self
            .sessions
            .into_iter()
            .map(|s| Session::new(s.title, s.description))
            .collect();
        speaker
    }
}

/// What the CLI prints after a registration attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationReport {
    #[serde(flatten)]
    pub response: RegisterResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_fee: Option<Decimal>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub approved_sessions: Vec<String>,
}

impl RegistrationReport {
    fn new(result: &Result<SpeakerId, RegisterError>, speaker: &Speaker) -> Self {
        let response = RegisterResponse::from(result);
        match result {
            Ok(_) => Self {
                response,
                message: None,
                registration_fee: Some(speaker.registration_fee),
                approved_sessions: speaker
                    .approved_sessions()
                    .map(|s| s.title.clone())
                    .collect(),
            },
            Err(e) => Self {
                response,
                message: Some(e.to_string()),
                registration_fee: None,
                approved_sessions: Vec::new(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.response.is_success()
    }
}

/// Parses a JSON submission and runs it through the evaluator
pub fn register_json(
    json: &str,
    evaluator: &RegistrationEvaluator,
    repository: &dyn SpeakerRepository,
) -> Result<RegistrationReport, serde_json::Error> {
    let submission: SpeakerSubmission = serde_json::from_str(json)?;
    let mut speaker = submission.into_speaker();
    let result = evaluator.register(&mut speaker, repository);
    Ok(RegistrationReport::new(&result, &speaker))
}
