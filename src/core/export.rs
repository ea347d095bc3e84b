//! # CSV Export
//!
//! Serializes the submission collection to CSV and writes it as
//! `submissions-<ISO-date>.csv`. This is the one externally consumed
//! artifact with a bit-exact contract: header `Name,Email,Phone,Message,Date`,
//! every value double-quoted with internal quotes doubled, rows in store
//! order (most-recent-first), Date in local time.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Local, Utc};
use log::info;

use crate::core::submission::Submission;

#[derive(Debug)]
pub enum ExportError {
    /// Export is refused when there is nothing to export.
    Empty,
    Io(io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Empty => write!(f, "there are no submissions to export"),
            ExportError::Io(e) => write!(f, "export I/O error: {e}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<io::Error> for ExportError {
    fn from(e: io::Error) -> Self {
        ExportError::Io(e)
    }
}

/// Render the full collection as a CSV document (no trailing newline).
pub fn to_csv(submissions: &[Submission]) -> String {
    let mut lines = Vec::with_capacity(submissions.len() + 1);
    lines.push("Name,Email,Phone,Message,Date".to_string());
    for submission in submissions {
        let date = submission
            .created_at
            .with_timezone(&Local)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string();
        let row = [
            submission.name.as_str(),
            submission.email.as_str(),
            submission.phone.as_str(),
            submission.message.as_str(),
            date.as_str(),
        ]
        .map(quote)
        .join(",");
        lines.push(row);
    }
    lines.join("\n")
}

/// The export filename for today: `submissions-YYYY-MM-DD.csv` (UTC date).
pub fn export_filename() -> String {
    format!("submissions-{}.csv", Utc::now().format("%Y-%m-%d"))
}

/// Write the collection to `<dir>/submissions-<date>.csv`.
/// Refuses an empty collection with `ExportError::Empty`.
pub fn export_csv(submissions: &[Submission], dir: &Path) -> Result<PathBuf, ExportError> {
    if submissions.is_empty() {
        return Err(ExportError::Empty);
    }
    let path = dir.join(export_filename());
    fs::write(&path, to_csv(submissions))?;
    info!(
        "Exported {} submissions to {}",
        submissions.len(),
        path.display()
    );
    Ok(path)
}

/// Double-quote a value, doubling internal quotes (`"` becomes `""`).
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(name: &str, message: &str) -> Submission {
        Submission {
            id: "1".to_string(),
            name: name.to_string(),
            email: "a@x.com".to_string(),
            phone: "5551234567".to_string(),
            message: message.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_header_row() {
        let csv = to_csv(&[]);
        assert_eq!(csv, "Name,Email,Phone,Message,Date");
    }

    #[test]
    fn test_every_field_quoted() {
        let csv = to_csv(&[sample("Alice", "Hello")]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("\"Alice\",\"a@x.com\",\"5551234567\",\"Hello\","));
        // Date field is quoted too
        assert!(row.ends_with('"'));
    }

    #[test]
    fn test_internal_quotes_doubled() {
        let csv = to_csv(&[sample("Alice", "She said \"hi\"")]);
        assert!(csv.contains("\"She said \"\"hi\"\"\""));
    }

    #[test]
    fn test_rows_preserve_store_order() {
        let csv = to_csv(&[sample("Newest", "a"), sample("Oldest", "b")]);
        let lines: Vec<&str> = csv.lines().collect();
        assert!(lines[1].contains("Newest"));
        assert!(lines[2].contains("Oldest"));
    }

    #[test]
    fn test_export_refuses_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let err = export_csv(&[], dir.path()).unwrap_err();
        assert!(matches!(err, ExportError::Empty));
        // Nothing written
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_export_writes_dated_filename() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_csv(&[sample("Alice", "Hello")], dir.path()).unwrap();
        let filename = path.file_name().unwrap().to_string_lossy();
        assert!(filename.starts_with("submissions-"));
        assert!(filename.ends_with(".csv"));
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Name,Email,Phone,Message,Date\n"));
        assert!(contents.contains("Alice"));
    }
}
