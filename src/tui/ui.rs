//! Frame composition: title bar, the active screen, then any open modal
//! drawn on top. All data flows in as props from `App` and `TuiState`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::Screen;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    ConfirmDialog, DynamicForm, EditModal, FieldEditor, FieldList, ShareModal, SubmissionList,
    TitleBar, UserForm,
};
use crate::tui::{Modal, TuiState};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let [title_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    let mut title_bar = TitleBar::new(tui.screen, app.status_message.clone());
    title_bar.render(frame, title_area);

    match tui.screen {
        Screen::Form => {
            UserForm::new(&tui.user_form, spinner_frame).render(frame, main_area);
        }
        Screen::Admin => {
            let rows = app.submissions.filter(tui.admin.search_term());
            SubmissionList::new(&mut tui.admin, &rows, app.submissions.len())
                .render(frame, main_area);
        }
        Screen::Builder => {
            let sorted = app.fields.sorted_fields();
            FieldList::new(&mut tui.builder, &sorted).render(frame, main_area);
        }
    }

    // Modals draw last so they sit on top of the screen content
    match &tui.modal {
        Some(Modal::Edit(state)) => EditModal::new(state).render(frame, main_area),
        Some(Modal::Share(state)) => ShareModal::new(state).render(frame, main_area),
        Some(Modal::FieldEditor(state)) => FieldEditor::new(state).render(frame, main_area),
        Some(Modal::Preview(state)) => DynamicForm::new(state).render(frame, main_area),
        Some(Modal::Confirm(state, _)) => ConfirmDialog::new(state).render(frame, main_area),
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_app, test_submission};
    use crate::tui::PendingAction;
    use crate::tui::components::{
        ConfirmDialogState, DynamicFormState, EditModalState, FieldEditorState, ShareModalState,
    };
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_form_screen_renders() {
        let app = test_app();
        let mut tui = TuiState::new(Screen::Form);
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Submit your information"));
        assert!(text.contains("Welcome to Intake!"));
    }

    #[test]
    fn test_admin_screen_renders_rows() {
        let mut app = test_app();
        app.submissions
            .add(crate::core::submission::SubmissionDraft {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                phone: "5551234567".to_string(),
                message: "Hello".to_string(),
            });
        let mut tui = TuiState::new(Screen::Admin);
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("1 submission found"));
        assert!(text.contains("Alice"));
    }

    #[test]
    fn test_builder_screen_renders_default_fields() {
        let app = test_app();
        let mut tui = TuiState::new(Screen::Builder);
        let text = render_to_text(&app, &mut tui);
        assert!(text.contains("Form Fields"));
        assert!(text.contains("Email"));
    }

    #[test]
    fn test_modals_render_on_top() {
        let app = test_app();
        let mut tui = TuiState::new(Screen::Admin);

        tui.modal = Some(Modal::Edit(EditModalState::new(&test_submission("Alice"))));
        assert!(render_to_text(&app, &mut tui).contains("Edit Submission"));

        tui.modal = Some(Modal::Share(ShareModalState::new(test_submission("Alice"))));
        assert!(render_to_text(&app, &mut tui).contains("Share Submission"));

        tui.modal = Some(Modal::FieldEditor(FieldEditorState::add()));
        assert!(render_to_text(&app, &mut tui).contains("Add Field"));

        tui.modal = Some(Modal::Preview(DynamicFormState::new(
            app.fields.sorted_fields(),
            true,
        )));
        assert!(render_to_text(&app, &mut tui).contains("Form Preview"));

        tui.modal = Some(Modal::Confirm(
            ConfirmDialogState::new("Confirm Deletion", "Are you sure?"),
            PendingAction::ResetFields,
        ));
        assert!(render_to_text(&app, &mut tui).contains("Confirm Deletion"));
    }
}
