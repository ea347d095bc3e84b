//! # Validation Rules
//!
//! Pure field-level checks for the fixed public form. Each rule maps a
//! candidate value to `None` (valid) or a human-readable error message.
//! The form is submittable exactly when `validate_draft` returns an empty
//! map.
//!
//! These rules apply only to the fixed four built-in fields; dynamically
//! configured fields get nothing richer than their `required` flag.

use std::collections::BTreeMap;

use crate::core::submission::SubmissionDraft;

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PHONE: &str = "phone";
pub const FIELD_MESSAGE: &str = "message";

/// Name must be non-empty after trimming.
pub fn validate_name(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some("Name is required".to_string())
    } else {
        None
    }
}

/// Email must be non-empty and shaped like `local@domain.tld`:
/// a run of non-whitespace non-`@` characters, one `@`, another such run,
/// a `.`, and a final such run.
pub fn validate_email(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("Email is required".to_string());
    }
    if is_valid_email(value) {
        None
    } else {
        Some("Please enter a valid email".to_string())
    }
}

/// Phone must be non-empty; after stripping hyphens, parentheses and
/// whitespace, the remainder must be an optional `+` followed by 10-15
/// digits.
pub fn validate_phone(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("Phone number is required".to_string());
    }
    if is_valid_phone(value) {
        None
    } else {
        Some("Please enter a valid phone number".to_string())
    }
}

/// Message must be non-empty after trimming.
pub fn validate_message(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some("Message is required".to_string())
    } else {
        None
    }
}

/// Run all four rules and collect failures keyed by field name.
pub fn validate_draft(draft: &SubmissionDraft) -> BTreeMap<&'static str, String> {
    let mut errors = BTreeMap::new();
    if let Some(e) = validate_name(&draft.name) {
        errors.insert(FIELD_NAME, e);
    }
    if let Some(e) = validate_email(&draft.email) {
        errors.insert(FIELD_EMAIL, e);
    }
    if let Some(e) = validate_phone(&draft.phone) {
        errors.insert(FIELD_PHONE, e);
    }
    if let Some(e) = validate_message(&draft.message) {
        errors.insert(FIELD_MESSAGE, e);
    }
    errors
}

/// Equivalent of `^[^\s@]+@[^\s@]+\.[^\s@]+$` without a regex dependency.
fn is_valid_email(value: &str) -> bool {
    let ok_char = |c: char| !c.is_whitespace() && c != '@';

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || !local.chars().all(ok_char) {
        return false;
    }
    // Domain needs a dot with valid runs on both sides. `rsplit_once`
    // mirrors the greedy regex: only the final dot must have a non-empty tld.
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty() && domain.chars().all(ok_char)
}

/// Equivalent of `^\+?[0-9]{10,15}$` after stripping `-`, `(`, `)` and
/// whitespace.
fn is_valid_phone(value: &str) -> bool {
    let stripped: String = value
        .chars()
        .filter(|c| !matches!(c, '-' | '(' | ')') && !c.is_whitespace())
        .collect();
    let digits = stripped.strip_prefix('+').unwrap_or(&stripped);
    (10..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}
