//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::{TimeZone, Utc};

use crate::core::persist::InMemory;
use crate::core::state::App;
use crate::core::submission::Submission;

/// Creates a test App backed by in-memory snapshots.
pub fn test_app() -> App {
    App::new(Box::new(InMemory::new()), Box::new(InMemory::new()))
}

/// A submission with a fixed timestamp for deterministic assertions.
pub fn test_submission(name: &str) -> Submission {
    Submission {
        id: format!("id-{}", name.to_lowercase()),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "5551234567".to_string(),
        message: format!("Message from {}", name),
        created_at: Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap(),
    }
}
