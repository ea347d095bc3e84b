//! # Application State
//!
//! Core business state for Intake. This module contains domain state only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── submissions: SubmissionStore   // record store (persisted)
//! ├── fields: FieldConfigStore       // field-configuration store (persisted)
//! ├── status_message: String         // status bar text (toast equivalent)
//! └── is_submitting: bool            // simulated submit delay in flight
//! ```

use crate::core::config::ResolvedConfig;
use crate::core::config_store::FieldConfigStore;
use crate::core::persist::{JsonFile, Snapshot};
use crate::core::store::SubmissionStore;

pub struct App {
    pub submissions: SubmissionStore,
    pub fields: FieldConfigStore,
    pub status_message: String,
    pub is_submitting: bool,
    pub submit_delay_ms: u64,
    pub export_dir: std::path::PathBuf,
}

impl App {
    pub fn new(
        submission_snapshot: Box<dyn Snapshot>,
        field_snapshot: Box<dyn Snapshot>,
    ) -> Self {
        Self {
            submissions: SubmissionStore::new(submission_snapshot),
            fields: FieldConfigStore::new(field_snapshot),
            status_message: String::from("Welcome to Intake!"),
            is_submitting: false,
            submit_delay_ms: crate::core::config::DEFAULT_SUBMIT_DELAY_MS,
            export_dir: std::path::PathBuf::from("."),
        }
    }

    /// Build the app from a resolved config, wiring file-backed snapshots
    /// under the configured data directory.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new(
            Box::new(JsonFile::new(config.data_dir.join("submissions.json"))),
            Box::new(JsonFile::new(config.data_dir.join("fields.json"))),
        );
        app.submit_delay_ms = config.submit_delay_ms;
        app.export_dir = config.export_dir.clone();
        app
    }

    /// Set the transient status notice shown in the title bar.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }
}
