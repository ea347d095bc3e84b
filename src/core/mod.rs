//! # Core Application Logic
//!
//! This module contains Intake's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • stores (CRUD)        │
//!                    │  • validation rules     │
//!                    │  • snapshot persistence │
//!                    │  • CSV export / share   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                        ┌────────────┐
//!                        │    TUI     │
//!                        │  Adapter   │
//!                        │ (ratatui)  │
//!                        └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, domain state in one place
//! - [`store`]: Submission record store
//! - [`config_store`]: Form-field configuration store
//! - [`validate`]: Field validation rules for the public form
//! - [`persist`]: Snapshot persistence behind a trait
//! - [`export`]: CSV serialization and file export
//! - [`share`]: Share text and compose URLs
//! - [`config`]: `~/.intake/config.toml` loading and resolution

pub mod config;
pub mod config_store;
pub mod export;
pub mod field;
pub mod persist;
pub mod share;
pub mod state;
pub mod store;
pub mod submission;
pub mod validate;
