//! Registration policy
//!
//! Every constant the evaluator relies on lives here so a conference can tune
//! its screening without touching the decision procedure. The defaults are the
//! house rules:
//!
//! - more than 10 years of experience, a blog, more than 3 certifications or
//!   a preferred employer makes a speaker exceptional
//! - an email at aol.com, prodigy.com or compuserve.com, or Internet Explorer
//!   older than version 9, is a red flag
//! - sessions mentioning Cobol, Punch Cards, Commodore or VBScript are rejected
//!
//! # Loading
//!
//! [`RegistrationPolicy::load`] reads an optional policy file (TOML, JSON or
//! YAML by extension) and then `REGISTRATION_*` environment variables, the
//! environment winning. Keys missing from both keep their defaults; a list
//! that is given replaces the default list entirely. Nested keys use a double
//! underscore, e.g. `REGISTRATION_FEE_SCHEDULE__DEFAULT_FEE=25`, and list keys
//! accept comma-separated values.

use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use core_kernel::CoreError;

use crate::browser::WebBrowser;
use crate::error::PolicyError;
use crate::fee::FeeSchedule;
use crate::session::Session;

const ENV_PREFIX: &str = "REGISTRATION";

const LIST_KEYS: &[&str] = &[
    "preferred_employers",
    "ancient_email_domains",
    "old_technologies",
];

/// Tunable screening and pricing rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationPolicy {
    /// Strictly more years than this makes a speaker exceptional
    pub exceptional_experience_years: u32,
    /// Strictly more certifications than this makes a speaker exceptional
    pub exceptional_certification_count: usize,
    /// Exact, case-sensitive employer names
    pub preferred_employers: Vec<String>,
    /// Exact domains following the last `@` of an email
    pub ancient_email_domains: Vec<String>,
    /// Internet Explorer below this major version is a red flag
    pub minimum_ie_version: u32,
    /// Case-sensitive terms that disqualify a session
    pub old_technologies: Vec<String>,
    pub fee_schedule: FeeSchedule,
}

impl Default for RegistrationPolicy {
    fn default() -> Self {
        Self {
            exceptional_experience_years: 10,
            exceptional_certification_count: 3,
            preferred_employers: to_strings(&["Pluralsight", "Microsoft", "Google"]),
            ancient_email_domains: to_strings(&["aol.com", "prodigy.com", "compuserve.com"]),
            minimum_ie_version: 9,
            old_technologies: to_strings(&["Cobol", "Punch Cards", "Commodore", "VBScript"]),
            fee_schedule: FeeSchedule::default(),
        }
    }
}

impl RegistrationPolicy {
    /// Loads the policy from defaults, an optional file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self, PolicyError> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    /// Same as [`load`](Self::load) with a custom environment prefix
    pub fn load_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self, PolicyError> {
        let mut environment = Environment::with_prefix(env_prefix)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",");
        for key in LIST_KEYS {
            environment = environment.with_list_parse_key(key);
        }

        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let policy: Self = builder.add_source(environment).build()?.try_deserialize()?;
        policy.validate()?;
        Ok(policy)
    }

    /// Rejects policies the evaluator cannot apply consistently
    ///
    /// Blank list entries are refused: an empty old-technology term matches
    /// every session, and a trailing comma in an environment list yields one.
    pub fn validate(&self) -> Result<(), CoreError> {
        let lists = [
            ("preferred_employers", &self.preferred_employers),
            ("ancient_email_domains", &self.ancient_email_domains),
            ("old_technologies", &self.old_technologies),
        ];
        for (key, entries) in lists {
            if let Some(position) = entries.iter().position(|e| e.trim().is_empty()) {
                return Err(CoreError::configuration(format!(
                    "{} entry {} is blank",
                    key, position
                )));
            }
        }
        self.fee_schedule.validate()
    }

    pub fn is_exceptional_experience(&self, years_experience: Option<u32>) -> bool {
        years_experience.is_some_and(|years| years > self.exceptional_experience_years)
    }

    pub fn is_exceptional_certification_count(&self, count: usize) -> bool {
        count > self.exceptional_certification_count
    }

    pub fn is_preferred_employer(&self, employer: Option<&str>) -> bool {
        employer.is_some_and(|employer| self.preferred_employers.iter().any(|p| p == employer))
    }

    pub fn is_ancient_email_domain(&self, domain: &str) -> bool {
        self.ancient_email_domains.iter().any(|d| d == domain)
    }

    pub fn is_outdated_browser(&self, browser: &WebBrowser) -> bool {
        browser.is_internet_explorer() && browser.major_version < self.minimum_ie_version
    }

    /// Returns the first old-technology term the session mentions
    pub fn old_technology_in<'a>(&'a self, session: &Session) -> Option<&'a str> {
        self.old_technologies
            .iter()
            .map(String::as_str)
            .find(|term| session.mentions(term))
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
