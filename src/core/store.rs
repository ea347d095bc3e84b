//! # Submission Store
//!
//! In-memory collection of submissions, ordered most-recent-first, mirrored
//! to a `Snapshot` on every mutation. Persistence failures are logged and
//! otherwise ignored; the collection in memory is the source of truth for
//! the rest of the session.

use chrono::Utc;
use log::{debug, warn};

use crate::core::persist::Snapshot;
use crate::core::submission::{Submission, SubmissionDraft, SubmissionPatch};

pub struct SubmissionStore {
    submissions: Vec<Submission>,
    snapshot: Box<dyn Snapshot>,
}

impl SubmissionStore {
    /// Rehydrate from the snapshot. A missing or unreadable snapshot yields
    /// an empty store (corrupt data is logged, not fatal).
    pub fn new(snapshot: Box<dyn Snapshot>) -> Self {
        let submissions = match snapshot.load() {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(list) => list,
                Err(e) => {
                    warn!("Discarding unreadable submission snapshot: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to load submission snapshot: {}", e);
                Vec::new()
            }
        };
        debug!("Submission store loaded with {} records", submissions.len());
        Self {
            submissions,
            snapshot,
        }
    }

    /// Assign an id and creation timestamp, prepend the record
    /// (most-recent-first), and persist. Always succeeds.
    pub fn add(&mut self, draft: SubmissionDraft) -> &Submission {
        let submission = Submission {
            id: uuid::Uuid::new_v4().to_string(),
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            message: draft.message,
            created_at: Utc::now(),
        };
        self.submissions.insert(0, submission);
        self.persist();
        &self.submissions[0]
    }

    /// Merge the given fields into the matching record. Id and created_at
    /// are immutable and not expressible in the patch. No-op if absent.
    pub fn update(&mut self, id: &str, patch: SubmissionPatch) {
        let Some(submission) = self.submissions.iter_mut().find(|s| s.id == id) else {
            return;
        };
        if let Some(name) = patch.name {
            submission.name = name;
        }
        if let Some(email) = patch.email {
            submission.email = email;
        }
        if let Some(phone) = patch.phone {
            submission.phone = phone;
        }
        if let Some(message) = patch.message {
            submission.message = message;
        }
        self.persist();
    }

    /// Remove the matching record. No-op if absent.
    pub fn delete(&mut self, id: &str) {
        let before = self.submissions.len();
        self.submissions.retain(|s| s.id != id);
        if self.submissions.len() != before {
            self.persist();
        }
    }

    pub fn get(&self, id: &str) -> Option<&Submission> {
        self.submissions.iter().find(|s| s.id == id)
    }

    /// Full collection, insertion order (most recent first).
    pub fn list(&self) -> &[Submission] {
        &self.submissions
    }

    /// Records whose name, email, phone or message contains `term`
    /// (case-insensitive). Empty term returns everything.
    pub fn filter(&self, term: &str) -> Vec<&Submission> {
        self.submissions.iter().filter(|s| s.matches(term)).collect()
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }

    fn persist(&self) {
        let json = match serde_json::to_string_pretty(&self.submissions) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize submissions: {}", e);
                return;
            }
        };
        if let Err(e) = self.snapshot.save(&json) {
            warn!("Failed to persist submissions: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persist::InMemory;

    fn draft(name: &str) -> SubmissionDraft {
        SubmissionDraft {
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            phone: "5551234567".to_string(),
            message: format!("Message from {}", name),
        }
    }

    fn empty_store() -> SubmissionStore {
        SubmissionStore::new(Box::new(InMemory::new()))
    }

    #[test]
    fn test_add_prepends_and_assigns_identity() {
        let mut store = empty_store();
        let first_id = store.add(draft("Alice")).id.clone();
        let second_id = store.add(draft("Bob")).id.clone();

        assert_ne!(first_id, second_id);
        let names: Vec<&str> = store.list().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Bob", "Alice"]); // most recent first
    }

    #[test]
    fn test_update_merges_and_preserves_identity() {
        let mut store = empty_store();
        let added = store.add(draft("Alice"));
        let (id, created_at) = (added.id.clone(), added.created_at);

        store.update(
            &id,
            SubmissionPatch {
                name: Some("Beatrice".to_string()),
                ..Default::default()
            },
        );

        let updated = store.get(&id).unwrap();
        assert_eq!(updated.name, "Beatrice");
        assert_eq!(updated.email, "alice@x.com"); // untouched
        assert_eq!(updated.created_at, created_at);
        assert_eq!(updated.id, id);
    }

    #[test]
    fn test_update_absent_id_is_noop() {
        let mut store = empty_store();
        store.add(draft("Alice"));
        store.update(
            "no-such-id",
            SubmissionPatch {
                name: Some("X".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(store.list()[0].name, "Alice");
    }

    #[test]
    fn test_delete_then_get_returns_none() {
        let mut store = empty_store();
        let id = store.add(draft("Alice")).id.clone();
        store.delete(&id);
        assert!(store.get(&id).is_none());
        assert!(store.is_empty());
        // Deleting again is a no-op
        store.delete(&id);
    }

    #[test]
    fn test_filter_case_insensitive_any_field() {
        let mut store = empty_store();
        store.add(draft("Alice"));
        store.add(draft("Bob"));

        let hits = store.filter("alice");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Alice");

        // Matches the email domain of both
        assert_eq!(store.filter("x.com").len(), 2);
        assert_eq!(store.filter("ALICE").len(), 1);
        assert!(store.filter("nothing").is_empty());
    }

    #[test]
    fn test_mutations_persist_full_collection() {
        use std::rc::Rc;

        let backing = Rc::new(InMemory::new());
        let mut store = SubmissionStore::new(Box::new(backing.clone()));
        let id = store.add(draft("Alice")).id.clone();
        store.add(draft("Bob"));
        store.delete(&id);

        // A fresh store rehydrated from the same snapshot sees the survivors
        let reloaded = SubmissionStore::new(Box::new(backing));
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.list()[0].name, "Bob");
    }

    #[test]
    fn test_corrupt_snapshot_yields_empty_store() {
        let store = SubmissionStore::new(Box::new(InMemory::with_contents("not json")));
        assert!(store.is_empty());
    }
}
