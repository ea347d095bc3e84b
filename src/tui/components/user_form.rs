//! # UserForm Component
//!
//! The fixed public submission form: name, email, phone, message. Enter
//! runs the validation rules; failures render inline under each field and
//! the form is only submitted when all four pass. Typing into a field
//! clears its existing error immediately (re-validation waits for the
//! next submit attempt).

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::core::submission::SubmissionDraft;
use crate::core::validate;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

use super::text_field::TextField;

const FIELD_COUNT: usize = 4;

pub struct UserFormState {
    name: TextField,
    email: TextField,
    phone: TextField,
    message: TextField,
    focused: usize,
    /// Prop mirrored from `App::is_submitting`; dims the form and drives
    /// the spinner label.
    pub submitting: bool,
}

pub enum UserFormEvent {
    /// All validation rules passed; the draft is ready for the store.
    Submit(SubmissionDraft),
}

impl UserFormState {
    pub fn new() -> Self {
        Self {
            name: TextField::new("Name", "Enter your name"),
            email: TextField::new("Email", "Enter your email"),
            phone: TextField::new("Phone", "Enter your phone number"),
            message: TextField::new("Message", "Enter your message").multiline(),
            focused: 0,
            submitting: false,
        }
    }

    pub fn draft(&self) -> SubmissionDraft {
        SubmissionDraft {
            name: self.name.text().to_string(),
            email: self.email.text().to_string(),
            phone: self.phone.text().to_string(),
            message: self.message.text().to_string(),
        }
    }

    /// Clear all inputs and errors after a successful submission.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.message.clear();
        self.focused = 0;
    }

    fn field_mut(&mut self, index: usize) -> &mut TextField {
        match index {
            0 => &mut self.name,
            1 => &mut self.email,
            2 => &mut self.phone,
            _ => &mut self.message,
        }
    }

    fn apply_errors(&mut self, errors: &std::collections::BTreeMap<&'static str, String>) {
        self.name.error = errors.get(validate::FIELD_NAME).cloned();
        self.email.error = errors.get(validate::FIELD_EMAIL).cloned();
        self.phone.error = errors.get(validate::FIELD_PHONE).cloned();
        self.message.error = errors.get(validate::FIELD_MESSAGE).cloned();
    }
}

impl EventHandler for UserFormState {
    type Event = UserFormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<UserFormEvent> {
        if self.submitting {
            return None;
        }
        match event {
            TuiEvent::Tab | TuiEvent::CursorDown => {
                self.focused = (self.focused + 1) % FIELD_COUNT;
                None
            }
            TuiEvent::BackTab | TuiEvent::CursorUp => {
                self.focused = (self.focused + FIELD_COUNT - 1) % FIELD_COUNT;
                None
            }
            TuiEvent::Submit => {
                let draft = self.draft();
                let errors = validate::validate_draft(&draft);
                self.apply_errors(&errors);
                if errors.is_empty() {
                    Some(UserFormEvent::Submit(draft))
                } else {
                    None
                }
            }
            other => {
                let focused = self.focused;
                if self.field_mut(focused).handle_event(other) {
                    // Clear error when user types
                    self.field_mut(focused).error = None;
                }
                None
            }
        }
    }
}

/// Transient render wrapper.
pub struct UserForm<'a> {
    state: &'a UserFormState,
    spinner_frame: usize,
}

impl<'a> UserForm<'a> {
    pub fn new(state: &'a UserFormState, spinner_frame: usize) -> Self {
        Self {
            state,
            spinner_frame,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        // Center a form column (max 60 wide)
        let width = area.width.min(60);
        let x = area.x + (area.width - width) / 2;
        let column = Rect::new(x, area.y, width, area.height);

        let fields = [
            &self.state.name,
            &self.state.email,
            &self.state.phone,
            &self.state.message,
        ];
        let mut constraints: Vec<Constraint> = vec![Constraint::Length(1)];
        constraints.extend(fields.iter().map(|f| Constraint::Length(f.height())));
        constraints.push(Constraint::Length(1)); // submit hint
        constraints.push(Constraint::Min(0));

        let areas = Layout::vertical(constraints).split(column);

        let heading = Paragraph::new("Submit your information")
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(heading, areas[0]);

        for (i, field) in fields.iter().enumerate() {
            let focused = !self.state.submitting && self.state.focused == i;
            field.render(frame, areas[i + 1], focused);
        }

        let hint = if self.state.submitting {
            const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];
            Paragraph::new(format!(
                "{} Submitting...",
                SPINNER[self.spinner_frame % SPINNER.len()]
            ))
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
        } else {
            Paragraph::new("Enter Submit  Tab Next field  Ctrl+J Newline in message")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
        };
        frame.render_widget(hint, areas[FIELD_COUNT + 1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(form: &mut UserFormState, text: &str) {
        for c in text.chars() {
            form.handle_event(&TuiEvent::InputChar(c));
        }
    }

    fn fill_valid(form: &mut UserFormState) {
        type_text(form, "Alice");
        form.handle_event(&TuiEvent::Tab);
        type_text(form, "a@b.co");
        form.handle_event(&TuiEvent::Tab);
        type_text(form, "+1 (555) 123-4567");
        form.handle_event(&TuiEvent::Tab);
        type_text(form, "Hello there");
    }

    #[test]
    fn test_valid_form_submits_draft() {
        let mut form = UserFormState::new();
        fill_valid(&mut form);
        let Some(UserFormEvent::Submit(draft)) = form.handle_event(&TuiEvent::Submit) else {
            panic!("expected submit event");
        };
        assert_eq!(draft.name, "Alice");
        assert_eq!(draft.email, "a@b.co");
    }

    #[test]
    fn test_invalid_form_blocks_and_sets_errors() {
        let mut form = UserFormState::new();
        type_text(&mut form, "Alice"); // only the name
        assert!(form.handle_event(&TuiEvent::Submit).is_none());
        assert!(form.name.error.is_none());
        assert_eq!(form.email.error.as_deref(), Some("Email is required"));
        assert_eq!(
            form.phone.error.as_deref(),
            Some("Phone number is required")
        );
        assert_eq!(form.message.error.as_deref(), Some("Message is required"));
    }

    #[test]
    fn test_typing_clears_field_error() {
        let mut form = UserFormState::new();
        form.handle_event(&TuiEvent::Submit); // everything errors
        assert!(form.name.error.is_some());
        form.handle_event(&TuiEvent::InputChar('A'));
        assert!(form.name.error.is_none());
        // Other fields keep their errors until touched
        assert!(form.email.error.is_some());
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = UserFormState::new();
        form.handle_event(&TuiEvent::BackTab);
        assert_eq!(form.focused, 3);
        form.handle_event(&TuiEvent::Tab);
        assert_eq!(form.focused, 0);
    }

    #[test]
    fn test_submitting_ignores_input() {
        let mut form = UserFormState::new();
        form.submitting = true;
        form.handle_event(&TuiEvent::InputChar('x'));
        assert_eq!(form.name.text(), "");
        assert!(form.handle_event(&TuiEvent::Submit).is_none());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = UserFormState::new();
        fill_valid(&mut form);
        form.handle_event(&TuiEvent::Submit);
        form.reset();
        assert_eq!(form.draft(), SubmissionDraft::default());
        assert_eq!(form.focused, 0);
    }
}
