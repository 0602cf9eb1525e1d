//! Test Data Builders
//!
//! Provides a builder for speakers so tests specify only the fields they
//! care about. The defaults describe a speaker the default policy approves.

use domain_speaker::{Session, Speaker, WebBrowser};

use crate::fixtures::StringFixtures;

/// Builder for constructing test speakers
pub struct SpeakerBuilder {
    speaker: Speaker,
}

impl Default for SpeakerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeakerBuilder {
    /// Starts from a blogger with one year of experience and one modern session
    pub fn new() -> Self {
        let mut speaker = Speaker::new(
            StringFixtures::first_name(),
            StringFixtures::last_name(),
            StringFixtures::email(),
        );
        speaker.employer = Some(StringFixtures::employer().to_string());
        speaker.has_blog = true;
        speaker.blog_url = Some(String::new());
        speaker.browser = WebBrowser::new("test", 1);
        speaker.years_experience = Some(1);
        speaker.add_session(Session::new(
            StringFixtures::session_title(),
            StringFixtures::session_description(),
        ));
        Self { speaker }
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.speaker.first_name = first_name.into();
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.speaker.last_name = last_name.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.speaker.email = email.into();
        self
    }

    pub fn with_years_experience(mut self, years: Option<u32>) -> Self {
        self.speaker.years_experience = years;
        self
    }

    pub fn with_blog(mut self, has_blog: bool) -> Self {
        self.speaker.has_blog = has_blog;
        self
    }

    pub fn with_employer(mut self, employer: impl Into<String>) -> Self {
        self.speaker.employer = Some(employer.into());
        self
    }

    pub fn without_employer(mut self) -> Self {
        self.speaker.employer = None;
        self
    }

    /// Sets the browser from a raw name, as a client would report it
    pub fn with_browser(mut self, raw_name: &str, major_version: u32) -> Self {
        self.speaker.browser = WebBrowser::new(raw_name, major_version);
        self
    }

    pub fn with_certifications<I, S>(mut self, certifications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.speaker.certifications = certifications.into_iter().map(Into::into).collect();
        self
    }

    /// Adds `count` distinct certifications
    pub fn with_certification_count(self, count: usize) -> Self {
        self.with_certifications((1..=count).map(|n| format!("cert{}", n)))
    }

    /// Replaces all sessions
    pub fn with_sessions<I>(mut self, sessions: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        self.speaker.sessions = sessions
            .into_iter()
            .map(|(title, description)| Session::new(title, description))
            .collect();
        self
    }

    pub fn add_session(mut self, title: &str, description: &str) -> Self {
        self.speaker.add_session(Session::new(title, description));
        self
    }

    pub fn without_sessions(mut self) -> Self {
        self.speaker.sessions.clear();
        self
    }

    /// Turns the speaker into an ordinary one: no blog, no certifications,
    /// a non-preferred employer and ten years of experience
    pub fn unremarkable(self) -> Self {
        self.with_blog(false)
            .with_certifications(Vec::<String>::new())
            .with_employer(StringFixtures::employer())
            .with_years_experience(Some(10))
    }

    /// Adds both red flags: an aol.com email and Internet Explorer 6
    pub fn with_red_flags(self) -> Self {
        self.with_email("tom@aol.com").with_browser("IE", 6)
    }

    pub fn build(self) -> Speaker {
        self.speaker
    }
}
