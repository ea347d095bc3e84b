//! End-to-end persistence tests: file-backed stores writing real JSON
//! snapshots under a temp directory, reloaded by fresh store instances.

use std::fs;
use std::path::Path;

use intake::core::config_store::{FieldConfigStore, FieldPatch, FieldSpec};
use intake::core::field::FieldType;
use intake::core::persist::JsonFile;
use intake::core::store::SubmissionStore;
use intake::core::submission::{SubmissionDraft, SubmissionPatch};

// ============================================================================
// Helper Functions
// ============================================================================

fn submission_store(dir: &Path) -> SubmissionStore {
    SubmissionStore::new(Box::new(JsonFile::new(dir.join("submissions.json"))))
}

fn field_store(dir: &Path) -> FieldConfigStore {
    FieldConfigStore::new(Box::new(JsonFile::new(dir.join("fields.json"))))
}

fn draft(name: &str) -> SubmissionDraft {
    SubmissionDraft {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "555-123-4567".to_string(),
        message: format!("Hello from {}", name),
    }
}

// ============================================================================
// Submission Store
// ============================================================================

#[test]
fn test_submissions_survive_reload() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = submission_store(dir.path());
    store.add(draft("Alice"));
    let bob_id = store.add(draft("Bob")).id.clone();
    drop(store);

    let reloaded = submission_store(dir.path());
    assert_eq!(reloaded.len(), 2);
    // Newest first, and full round-trip of every field
    assert_eq!(reloaded.list()[0].name, "Bob");
    let bob = reloaded.get(&bob_id).unwrap();
    assert_eq!(bob.email, "bob@example.com");
    assert_eq!(bob.message, "Hello from Bob");
}

#[test]
fn test_update_and_delete_are_durable() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = submission_store(dir.path());
    let alice_id = store.add(draft("Alice")).id.clone();
    let bob_id = store.add(draft("Bob")).id.clone();
    store.update(
        &alice_id,
        SubmissionPatch {
            message: Some("Edited message".to_string()),
            ..Default::default()
        },
    );
    store.delete(&bob_id);
    drop(store);

    let reloaded = submission_store(dir.path());
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.get(&alice_id).unwrap().message, "Edited message");
    assert!(reloaded.get(&bob_id).is_none());
}

#[test]
fn test_missing_snapshot_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = submission_store(dir.path());
    assert!(store.is_empty());
    // Loading alone must not create the file
    assert!(!dir.path().join("submissions.json").exists());
}

#[test]
fn test_corrupt_snapshot_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("submissions.json"), "not json {").unwrap();
    let store = submission_store(dir.path());
    assert!(store.is_empty());
}

#[test]
fn test_snapshot_is_readable_json() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = submission_store(dir.path());
    store.add(draft("Alice"));

    let raw = fs::read_to_string(dir.path().join("submissions.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed[0]["name"], "Alice");
    assert!(parsed[0]["createdAt"].is_string());
}

// ============================================================================
// Field-Configuration Store
// ============================================================================

#[test]
fn test_field_customizations_survive_reload() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = field_store(dir.path());
    let company_id = store
        .add_field(FieldSpec {
            name: "company".to_string(),
            label: "Company".to_string(),
            field_type: FieldType::Text,
            required: false,
            placeholder: Some("Where do you work?".to_string()),
            options: None,
        })
        .id
        .clone();
    store.update_field(
        "email",
        FieldPatch {
            label: Some("Work Email".to_string()),
            ..Default::default()
        },
    );
    store.delete_field("phone");
    drop(store);

    let reloaded = field_store(dir.path());
    assert_eq!(reloaded.len(), 4);
    assert_eq!(reloaded.get("email").unwrap().label, "Work Email");
    assert!(reloaded.get("phone").is_none());
    let company = reloaded.get(&company_id).unwrap();
    assert_eq!(company.placeholder.as_deref(), Some("Where do you work?"));
    // Dense orders after the delete
    let mut orders: Vec<u32> = reloaded.fields().iter().map(|f| f.order).collect();
    orders.sort_unstable();
    assert_eq!(orders, [0, 1, 2, 3]);
}

#[test]
fn test_field_type_round_trips_through_snapshot() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = field_store(dir.path());
    let id = store
        .add_field(FieldSpec {
            name: "topic".to_string(),
            label: "Topic".to_string(),
            field_type: FieldType::Select,
            required: true,
            placeholder: None,
            options: Some(vec!["Sales".to_string(), "Support".to_string()]),
        })
        .id
        .clone();
    drop(store);

    let raw = fs::read_to_string(dir.path().join("fields.json")).unwrap();
    assert!(raw.contains("\"type\": \"select\""));

    let reloaded = field_store(dir.path());
    let topic = reloaded.get(&id).unwrap();
    assert_eq!(topic.field_type, FieldType::Select);
    assert_eq!(
        topic.options.as_deref(),
        Some(["Sales".to_string(), "Support".to_string()].as_slice())
    );
}

#[test]
fn test_corrupt_field_snapshot_reseeds_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("fields.json"), "[{\"broken\":").unwrap();
    let store = field_store(dir.path());
    assert_eq!(store.len(), 4);
    assert_eq!(store.fields()[0].name, "name");
}

// ============================================================================
// Independence
// ============================================================================

#[test]
fn test_the_two_snapshots_are_independent_documents() {
    let dir = tempfile::tempdir().unwrap();

    let mut submissions = submission_store(dir.path());
    let mut fields = field_store(dir.path());
    submissions.add(draft("Alice"));
    fields.delete_field("message");

    let submission_raw = fs::read_to_string(dir.path().join("submissions.json")).unwrap();
    let field_raw = fs::read_to_string(dir.path().join("fields.json")).unwrap();
    assert!(submission_raw.contains("Alice"));
    assert!(!submission_raw.contains("\"type\""));
    assert!(!field_raw.contains("Alice"));
}
