//! Conference sessions submitted by a speaker

use serde::{Deserialize, Serialize};

use core_kernel::SessionId;

/// A single talk proposal
///
/// The approval flag is written by the registration evaluator only; callers
/// can read it but never set it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub title: String,
    pub description: String,
    #[serde(skip_deserializing)]
    approved: bool,
}

impl Session {
    /// Creates an unapproved session
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: SessionId::new(),
            title: title.into(),
            description: description.into(),
            approved: false,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.approved
    }

    /// True if the title or the description contains `term` verbatim
    pub fn mentions(&self, term: &str) -> bool {
        self.title.contains(term) || self.description.contains(term)
    }

    pub(crate) fn set_approved(&mut self, approved: bool) {
        self.approved = approved;
    }
}
