//! # Share Payloads
//!
//! Builds the plain-text share block for a submission plus `mailto:` and
//! `sms:` compose URLs. The TUI copies these to the system clipboard; no
//! external program is launched.

use crate::core::submission::Submission;

/// The canonical share block:
/// `Name: <n>\nEmail: <e>\nPhone: <p>\nMessage: <m>` (trimmed).
pub fn share_text(submission: &Submission) -> String {
    format!(
        "Name: {}\nEmail: {}\nPhone: {}\nMessage: {}",
        submission.name, submission.email, submission.phone, submission.message
    )
    .trim()
    .to_string()
}

/// `mailto:` compose URL with subject `Submission from <name>` and the
/// share block as body.
pub fn mailto_url(submission: &Submission) -> String {
    format!(
        "mailto:?subject={}&body={}",
        percent_encode(&format!("Submission from {}", submission.name)),
        percent_encode(&share_text(submission))
    )
}

/// `sms:` compose URL with the share block as body.
pub fn sms_url(submission: &Submission) -> String {
    format!("sms:?body={}", percent_encode(&share_text(submission)))
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
