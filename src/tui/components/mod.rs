//! # TUI Components
//!
//! Each component file is self-contained: state type, event type,
//! event handling, rendering, and tests live together.
//!
//! Two patterns:
//!
//! - **Stateless (props-based)**: display components that receive all
//!   data as parameters, e.g. `TitleBar`.
//! - **Stateful (event-driven)**: components with persistent state that
//!   emit events for the event loop to act on, e.g. `UserFormState`,
//!   `SubmissionListState`, `FieldListState`.
//!
//! Stateful components split into a persistent `*State` struct (owned by
//! `TuiState` across frames) and a transient render wrapper constructed
//! each frame with whatever props the draw needs. Components never touch
//! the stores directly; they emit events and the event loop mutates state.

pub mod confirm_dialog;
pub mod dynamic_form;
pub mod edit_modal;
pub mod field_editor;
pub mod field_list;
pub mod share_modal;
pub mod submission_list;
pub mod text_field;
pub mod title_bar;
pub mod user_form;

pub use confirm_dialog::{ConfirmDialog, ConfirmDialogState, ConfirmEvent};
pub use dynamic_form::{CollectedValue, DynamicForm, DynamicFormEvent, DynamicFormState};
pub use edit_modal::{EditEvent, EditModal, EditModalState};
pub use field_editor::{FieldEditor, FieldEditorEvent, FieldEditorState};
pub use field_list::{BuilderEvent, FieldList, FieldListState};
pub use share_modal::{ShareEvent, ShareModal, ShareModalState};
pub use submission_list::{AdminEvent, SubmissionList, SubmissionListState};
pub use title_bar::TitleBar;
pub use user_form::{UserForm, UserFormEvent, UserFormState};
