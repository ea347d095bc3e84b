//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! routes keyboard events to the active screen or modal. This is the only
//! module that knows about ratatui and crossterm; `core` stays free of
//! presentation types.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (submit spinner in flight): draws every ~80ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! ## Event Routing
//!
//! Ctrl+C always quits. While a modal is open it captures every other
//! event; otherwise F1/F2/F3 switch screens and the rest goes to the
//! active screen's component. Components emit typed events and this loop
//! is the only place that mutates `App`.

mod component;
mod components;
mod event;
mod ui;

use std::io::stdout;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use log::{info, warn};

use crate::Screen;
use crate::core::export::{self, ExportError};
use crate::core::state::App;
use crate::core::submission::SubmissionDraft;
use crate::core::{config::ResolvedConfig, field::FormField};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    AdminEvent, BuilderEvent, CollectedValue, ConfirmDialogState, ConfirmEvent, DynamicFormEvent,
    DynamicFormState, EditEvent, EditModalState, FieldEditorEvent, FieldEditorState,
    FieldListState, ShareEvent, ShareModalState, SubmissionListState, UserFormEvent,
    UserFormState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// The store mutation a confirm dialog is guarding.
pub enum PendingAction {
    DeleteSubmission(String),
    DeleteField(String),
    ResetFields,
}

/// Full-screen overlay capturing all input while open.
pub enum Modal {
    Edit(EditModalState),
    Share(ShareModalState),
    FieldEditor(FieldEditorState),
    Preview(DynamicFormState),
    Confirm(ConfirmDialogState, PendingAction),
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub screen: Screen,
    // Persistent component states
    pub user_form: UserFormState,
    pub admin: SubmissionListState,
    pub builder: FieldListState,
    // Active overlay (None = no modal)
    pub modal: Option<Modal>,
}

impl TuiState {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            user_form: UserFormState::new(),
            admin: SubmissionListState::new(),
            builder: FieldListState::new(),
            modal: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // SteadyBlock: continuous redraws reset the blink timer, which makes
        // a blinking cursor look erratic
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(config.screen);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for the simulated-delay submit task
    let (tx, rx) = mpsc::channel::<SubmissionDraft>();
    let mut pending_submit: Option<tokio::task::AbortHandle> = None;

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync component props with App state
        tui.user_form.submitting = app.is_submitting;

        // A finished submit delay delivers the draft here
        while let Ok(draft) = rx.try_recv() {
            pending_submit = None;
            app.is_submitting = false;
            app.submissions.add(draft);
            tui.user_form.reset();
            app.notify("Your form has been submitted successfully.");
            tui.user_form.submitting = false;
            needs_redraw = true;
        }

        let animating = app.is_submitting;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Short poll while animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain everything pending before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            if matches!(event, TuiEvent::ForceQuit) {
                should_quit = true;
                continue;
            }

            // An open modal captures everything else
            if tui.modal.is_some() {
                handle_modal_event(&mut app, &mut tui, &event);
                continue;
            }

            // Screen switching
            match event {
                TuiEvent::ShowForm => {
                    tui.screen = Screen::Form;
                    continue;
                }
                TuiEvent::ShowAdmin => {
                    tui.screen = Screen::Admin;
                    continue;
                }
                TuiEvent::ShowBuilder => {
                    tui.screen = Screen::Builder;
                    continue;
                }
                _ => {}
            }

            match tui.screen {
                Screen::Form => {
                    // Esc while the delay is running cancels the submit
                    if matches!(event, TuiEvent::Escape) && app.is_submitting {
                        if let Some(handle) = pending_submit.take() {
                            handle.abort();
                        }
                        app.is_submitting = false;
                        app.notify("Submission cancelled");
                        continue;
                    }
                    if let Some(UserFormEvent::Submit(draft)) =
                        tui.user_form.handle_event(&event)
                    {
                        app.is_submitting = true;
                        pending_submit = Some(spawn_submit_delay(
                            draft,
                            app.submit_delay_ms,
                            tx.clone(),
                        ));
                    }
                }
                Screen::Admin => {
                    let visible_ids: Vec<String> = app
                        .submissions
                        .filter(tui.admin.search_term())
                        .iter()
                        .map(|s| s.id.clone())
                        .collect();
                    if let Some(admin_event) = tui.admin.handle_event(&event, &visible_ids) {
                        handle_admin_event(&mut app, &mut tui, admin_event);
                    }
                }
                Screen::Builder => {
                    let sorted = app.fields.sorted_fields();
                    if let Some(builder_event) = tui.builder.handle_event(&event, &sorted) {
                        handle_builder_event(&mut app, &mut tui, builder_event, sorted);
                    }
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    info!("Intake shut down cleanly");
    Ok(())
}

/// Run the simulated network delay off the event loop; the draft comes
/// back over the channel once the delay elapses. Aborting the task is how
/// Esc cancels an in-flight submit.
fn spawn_submit_delay(
    draft: SubmissionDraft,
    delay_ms: u64,
    tx: mpsc::Sender<SubmissionDraft>,
) -> tokio::task::AbortHandle {
    let handle = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        let _ = tx.send(draft);
    });
    handle.abort_handle()
}

fn handle_admin_event(app: &mut App, tui: &mut TuiState, event: AdminEvent) {
    match event {
        AdminEvent::Edit(id) => {
            if let Some(submission) = app.submissions.get(&id) {
                tui.modal = Some(Modal::Edit(EditModalState::new(submission)));
            }
        }
        AdminEvent::Share(id) => {
            if let Some(submission) = app.submissions.get(&id) {
                tui.modal = Some(Modal::Share(ShareModalState::new(submission.clone())));
            }
        }
        AdminEvent::DeleteRequest(id) => {
            tui.modal = Some(Modal::Confirm(
                ConfirmDialogState::new(
                    "Confirm Deletion",
                    "Are you sure you want to delete this submission? This action cannot be undone.",
                ),
                PendingAction::DeleteSubmission(id),
            ));
        }
        AdminEvent::Export => {
            match export::export_csv(app.submissions.list(), &app.export_dir) {
                Ok(path) => {
                    let count = app.submissions.len();
                    let noun = if count == 1 { "submission" } else { "submissions" };
                    app.notify(format!("Exported {} {} to {}", count, noun, path.display()));
                }
                Err(ExportError::Empty) => {
                    app.notify("No submissions to export");
                }
                Err(e) => {
                    warn!("CSV export failed: {}", e);
                    app.notify(format!("Export failed: {}", e));
                }
            }
        }
    }
}

fn handle_builder_event(
    app: &mut App,
    tui: &mut TuiState,
    event: BuilderEvent,
    sorted: Vec<FormField>,
) {
    match event {
        BuilderEvent::Add => {
            tui.modal = Some(Modal::FieldEditor(FieldEditorState::add()));
        }
        BuilderEvent::Edit(id) => {
            if let Some(field) = app.fields.get(&id) {
                tui.modal = Some(Modal::FieldEditor(FieldEditorState::edit(field)));
            }
        }
        BuilderEvent::DeleteRequest(id) => {
            tui.modal = Some(Modal::Confirm(
                ConfirmDialogState::new(
                    "Confirm Deletion",
                    "Delete this field from the form? This action cannot be undone.",
                ),
                PendingAction::DeleteField(id),
            ));
        }
        BuilderEvent::ResetRequest => {
            tui.modal = Some(Modal::Confirm(
                ConfirmDialogState::new(
                    "Reset Fields",
                    "Reset all fields to the defaults? Custom fields will be removed.",
                ),
                PendingAction::ResetFields,
            ));
        }
        BuilderEvent::Preview => {
            tui.modal = Some(Modal::Preview(DynamicFormState::new(sorted, true)));
        }
        BuilderEvent::MoveUp(id) => move_field(app, tui, sorted, &id, -1),
        BuilderEvent::MoveDown(id) => move_field(app, tui, sorted, &id, 1),
    }
}

/// Swap a field with its neighbor in render order, renumber densely, and
/// hand the whole ordered list back to the store. The selection follows
/// the moved field.
fn move_field(app: &mut App, tui: &mut TuiState, mut sorted: Vec<FormField>, id: &str, delta: i32) {
    let Some(index) = sorted.iter().position(|f| f.id == id) else {
        return;
    };
    let target = index as i32 + delta;
    if target < 0 || target as usize >= sorted.len() {
        return;
    }
    sorted.swap(index, target as usize);
    for (order, field) in sorted.iter_mut().enumerate() {
        field.order = order as u32;
    }
    app.fields.reorder(sorted);
    tui.builder.selected = target as usize;
}

fn handle_modal_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) {
    let Some(mut modal) = tui.modal.take() else {
        return;
    };

    let keep_open = match &mut modal {
        Modal::Edit(state) => match state.handle_event(event) {
            Some(EditEvent::Save(id, patch)) => {
                app.submissions.update(&id, patch);
                app.notify("Submission updated");
                false
            }
            Some(EditEvent::Dismiss) => false,
            None => true,
        },
        Modal::Share(state) => match state.handle_event(event) {
            Some(ShareEvent::Dismiss) => false,
            Some(share_event) => {
                let label = match share_event {
                    ShareEvent::CopyText => "text",
                    ShareEvent::CopyMailto => "mailto",
                    ShareEvent::CopySms => "sms",
                    ShareEvent::Dismiss => unreachable!(),
                };
                if let Some(payload) = state.payload(&share_event) {
                    match copy_to_clipboard(&payload) {
                        Ok(()) => state.copied = Some(label),
                        Err(e) => {
                            warn!("Clipboard copy failed: {}", e);
                            app.notify("Could not access the clipboard");
                        }
                    }
                }
                true
            }
            None => true,
        },
        Modal::FieldEditor(state) => match state.handle_event(event) {
            Some(FieldEditorEvent::Add(spec)) => {
                app.fields.add_field(spec);
                app.notify("Field added");
                false
            }
            Some(FieldEditorEvent::Update(id, patch)) => {
                app.fields.update_field(&id, patch);
                app.notify("Field updated");
                false
            }
            Some(FieldEditorEvent::Dismiss) => false,
            None => true,
        },
        Modal::Preview(state) => handle_preview_event(app, state, event),
        Modal::Confirm(state, action) => match state.handle_event(event) {
            Some(ConfirmEvent::Confirm) => {
                match action {
                    PendingAction::DeleteSubmission(id) => {
                        app.submissions.delete(id);
                        app.notify("Submission deleted");
                    }
                    PendingAction::DeleteField(id) => {
                        app.fields.delete_field(id);
                        app.notify("Field deleted");
                    }
                    PendingAction::ResetFields => {
                        app.fields.reset_to_default();
                        app.notify("Fields reset to defaults");
                    }
                }
                false
            }
            Some(ConfirmEvent::Cancel) => false,
            None => true,
        },
    };

    if keep_open {
        tui.modal = Some(modal);
    }
}

/// Preview modal routing. `t` switches preview to live; Esc steps live
/// back to preview, or closes the modal from preview. A live submit is
/// logged and acknowledged but never written to any store.
fn handle_preview_event(app: &mut App, state: &mut DynamicFormState, event: &TuiEvent) -> bool {
    if matches!(event, TuiEvent::Escape) {
        if state.preview {
            return false;
        }
        state.preview = true;
        return true;
    }
    if state.preview {
        if matches!(event, TuiEvent::InputChar('t')) {
            state.preview = false;
        }
        return true;
    }
    if let Some(DynamicFormEvent::Submitted(payload)) = state.handle_event(event) {
        info!("Live preview submission: {}", format_payload(&payload));
        app.notify("Form submitted (preview only, nothing saved)");
        state.preview = true;
    }
    true
}

fn format_payload(payload: &std::collections::BTreeMap<String, CollectedValue>) -> String {
    payload
        .iter()
        .map(|(name, value)| match value {
            CollectedValue::Text(text) => format!("{}={:?}", name, text),
            CollectedValue::Bool(checked) => format!("{}={}", name, checked),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    arboard::Clipboard::new()?.set_text(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_app, test_submission};

    fn draft(name: &str) -> SubmissionDraft {
        SubmissionDraft {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "5551234567".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_admin_edit_opens_modal_for_existing_record() {
        let mut app = test_app();
        let id = app.submissions.add(draft("Alice")).id.clone();
        let mut tui = TuiState::new(Screen::Admin);

        handle_admin_event(&mut app, &mut tui, AdminEvent::Edit(id));
        assert!(matches!(tui.modal, Some(Modal::Edit(_))));

        tui.modal = None;
        handle_admin_event(&mut app, &mut tui, AdminEvent::Edit("missing".to_string()));
        assert!(tui.modal.is_none());
    }

    #[test]
    fn test_export_with_no_submissions_sets_notice() {
        let mut app = test_app();
        let mut tui = TuiState::new(Screen::Admin);
        handle_admin_event(&mut app, &mut tui, AdminEvent::Export);
        assert_eq!(app.status_message, "No submissions to export");
    }

    #[test]
    fn test_confirm_delete_submission() {
        let mut app = test_app();
        let id = app.submissions.add(draft("Alice")).id.clone();
        let mut tui = TuiState::new(Screen::Admin);
        tui.modal = Some(Modal::Confirm(
            ConfirmDialogState::new("Confirm Deletion", "Sure?"),
            PendingAction::DeleteSubmission(id),
        ));

        handle_modal_event(&mut app, &mut tui, &TuiEvent::InputChar('y'));
        assert!(tui.modal.is_none());
        assert!(app.submissions.is_empty());
        assert_eq!(app.status_message, "Submission deleted");
    }

    #[test]
    fn test_confirm_cancel_keeps_record() {
        let mut app = test_app();
        let id = app.submissions.add(draft("Alice")).id.clone();
        let mut tui = TuiState::new(Screen::Admin);
        tui.modal = Some(Modal::Confirm(
            ConfirmDialogState::new("Confirm Deletion", "Sure?"),
            PendingAction::DeleteSubmission(id),
        ));

        handle_modal_event(&mut app, &mut tui, &TuiEvent::Escape);
        assert!(tui.modal.is_none());
        assert_eq!(app.submissions.len(), 1);
    }

    #[test]
    fn test_edit_modal_save_updates_store() {
        let mut app = test_app();
        let id = app.submissions.add(draft("Alice")).id.clone();
        let mut tui = TuiState::new(Screen::Admin);
        let submission = app.submissions.get(&id).unwrap().clone();
        tui.modal = Some(Modal::Edit(EditModalState::new(&submission)));

        // Append to the name, then save
        handle_modal_event(&mut app, &mut tui, &TuiEvent::End);
        handle_modal_event(&mut app, &mut tui, &TuiEvent::InputChar('!'));
        handle_modal_event(&mut app, &mut tui, &TuiEvent::Submit);

        assert!(tui.modal.is_none());
        assert_eq!(app.submissions.get(&id).unwrap().name, "Alice!");
        assert_eq!(app.status_message, "Submission updated");
    }

    #[test]
    fn test_move_field_swaps_and_renumbers() {
        let mut app = test_app();
        let mut tui = TuiState::new(Screen::Builder);
        let sorted = app.fields.sorted_fields();

        // Move "email" (index 1) up
        move_field(&mut app, &mut tui, sorted, "email", -1);
        let after = app.fields.sorted_fields();
        assert_eq!(after[0].id, "email");
        assert_eq!(after[1].id, "name");
        let orders: Vec<u32> = after.iter().map(|f| f.order).collect();
        assert_eq!(orders, vec![0, 1, 2, 3]);
        assert_eq!(tui.builder.selected, 0);
    }

    #[test]
    fn test_move_field_at_edge_is_noop() {
        let mut app = test_app();
        let mut tui = TuiState::new(Screen::Builder);
        let before = app.fields.sorted_fields();
        move_field(&mut app, &mut tui, before.clone(), "name", -1);
        assert_eq!(app.fields.sorted_fields(), before);
    }

    #[test]
    fn test_field_editor_add_flow() {
        let mut app = test_app();
        let mut tui = TuiState::new(Screen::Builder);
        handle_builder_event(&mut app, &mut tui, BuilderEvent::Add, vec![]);
        assert!(matches!(tui.modal, Some(Modal::FieldEditor(_))));

        for c in "Company".chars() {
            handle_modal_event(&mut app, &mut tui, &TuiEvent::InputChar(c));
        }
        handle_modal_event(&mut app, &mut tui, &TuiEvent::Tab);
        for c in "company".chars() {
            handle_modal_event(&mut app, &mut tui, &TuiEvent::InputChar(c));
        }
        handle_modal_event(&mut app, &mut tui, &TuiEvent::Submit);

        assert!(tui.modal.is_none());
        assert_eq!(app.fields.len(), 5);
        assert_eq!(app.fields.sorted_fields()[4].name, "company");
        assert_eq!(app.status_message, "Field added");
    }

    #[test]
    fn test_preview_toggles_and_live_submit_persists_nothing() {
        let mut app = test_app();
        // Only optional fields so a bare submit goes through
        for field in app.fields.sorted_fields() {
            app.fields.update_field(
                &field.id,
                crate::core::config_store::FieldPatch {
                    required: Some(false),
                    ..Default::default()
                },
            );
        }
        let mut state = DynamicFormState::new(app.fields.sorted_fields(), true);

        assert!(handle_preview_event(&mut app, &mut state, &TuiEvent::InputChar('t')));
        assert!(!state.preview);

        assert!(handle_preview_event(&mut app, &mut state, &TuiEvent::Submit));
        assert!(state.preview); // back to preview after submit
        assert!(app.submissions.is_empty());
        assert_eq!(
            app.status_message,
            "Form submitted (preview only, nothing saved)"
        );

        // Esc from preview closes
        assert!(!handle_preview_event(&mut app, &mut state, &TuiEvent::Escape));
    }

    #[test]
    fn test_share_dismiss_closes_modal() {
        let mut app = test_app();
        let mut tui = TuiState::new(Screen::Admin);
        tui.modal = Some(Modal::Share(ShareModalState::new(test_submission("Alice"))));
        handle_modal_event(&mut app, &mut tui, &TuiEvent::Escape);
        assert!(tui.modal.is_none());
    }
}
