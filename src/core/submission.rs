//! # Submissions
//!
//! One `Submission` is a single end-user form entry. The id and creation
//! timestamp are assigned by the store and never change afterwards; edits
//! go through `SubmissionPatch`, which cannot name either.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Field values collected from the public form, before an id and
/// timestamp exist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// A partial edit. `None` fields are left untouched by
/// `SubmissionStore::update`; id and created_at are not expressible here.
#[derive(Debug, Clone, Default)]
pub struct SubmissionPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl Submission {
    /// Case-insensitive substring match over all four text fields.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.email.to_lowercase().contains(&term)
            || self.phone.to_lowercase().contains(&term)
            || self.message.to_lowercase().contains(&term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Submission {
        Submission {
            id: "1".to_string(),
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            phone: "5551234567".to_string(),
            message: "Hello there".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_matches_any_field_case_insensitive() {
        let s = sample();
        assert!(s.matches("ALICE"));
        assert!(s.matches("x.com"));
        assert!(s.matches("555"));
        assert!(s.matches("hello"));
        assert!(!s.matches("bob"));
    }

    #[test]
    fn test_matches_empty_term() {
        // Empty search term matches everything (no filter applied)
        assert!(sample().matches(""));
    }
}
