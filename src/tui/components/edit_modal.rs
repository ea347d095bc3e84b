//! # Edit Modal
//!
//! Overlay for editing an existing submission. Prefilled with the current
//! values; Enter re-runs the validation rules and only emits a save when
//! they all pass. Id and creation timestamp are not editable.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding};

use crate::core::submission::{Submission, SubmissionPatch};
use crate::core::validate;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

use super::confirm_dialog::centered_rect;
use super::text_field::TextField;

const FIELD_COUNT: usize = 4;

pub struct EditModalState {
    id: String,
    name: TextField,
    email: TextField,
    phone: TextField,
    message: TextField,
    focused: usize,
}

pub enum EditEvent {
    Save(String, SubmissionPatch),
    Dismiss,
}

impl EditModalState {
    pub fn new(submission: &Submission) -> Self {
        let mut name = TextField::new("Name", "");
        name.set_text(&submission.name);
        let mut email = TextField::new("Email", "");
        email.set_text(&submission.email);
        let mut phone = TextField::new("Phone", "");
        phone.set_text(&submission.phone);
        let mut message = TextField::new("Message", "").multiline();
        message.set_text(&submission.message);
        Self {
            id: submission.id.clone(),
            name,
            email,
            phone,
            message,
            focused: 0,
        }
    }

    fn field_mut(&mut self, index: usize) -> &mut TextField {
        match index {
            0 => &mut self.name,
            1 => &mut self.email,
            2 => &mut self.phone,
            _ => &mut self.message,
        }
    }
}

impl EventHandler for EditModalState {
    type Event = EditEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<EditEvent> {
        match event {
            TuiEvent::Escape => Some(EditEvent::Dismiss),
            TuiEvent::Tab | TuiEvent::CursorDown => {
                self.focused = (self.focused + 1) % FIELD_COUNT;
                None
            }
            TuiEvent::BackTab | TuiEvent::CursorUp => {
                self.focused = (self.focused + FIELD_COUNT - 1) % FIELD_COUNT;
                None
            }
            TuiEvent::Submit => {
                let draft = crate::core::submission::SubmissionDraft {
                    name: self.name.text().to_string(),
                    email: self.email.text().to_string(),
                    phone: self.phone.text().to_string(),
                    message: self.message.text().to_string(),
                };
                let errors = validate::validate_draft(&draft);
                self.name.error = errors.get(validate::FIELD_NAME).cloned();
                self.email.error = errors.get(validate::FIELD_EMAIL).cloned();
                self.phone.error = errors.get(validate::FIELD_PHONE).cloned();
                self.message.error = errors.get(validate::FIELD_MESSAGE).cloned();
                if !errors.is_empty() {
                    return None;
                }
                Some(EditEvent::Save(
                    self.id.clone(),
                    SubmissionPatch {
                        name: Some(draft.name),
                        email: Some(draft.email),
                        phone: Some(draft.phone),
                        message: Some(draft.message),
                    },
                ))
            }
            other => {
                let focused = self.focused;
                if self.field_mut(focused).handle_event(other) {
                    self.field_mut(focused).error = None;
                }
                None
            }
        }
    }
}

/// Transient render wrapper.
pub struct EditModal<'a> {
    state: &'a EditModalState,
}

impl<'a> EditModal<'a> {
    pub fn new(state: &'a EditModalState) -> Self {
        Self { state }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 80, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Edit Submission ")
            .title_bottom(Line::from(" Enter Save  Tab Next field  Esc Cancel ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let fields = [
            &self.state.name,
            &self.state.email,
            &self.state.phone,
            &self.state.message,
        ];
        let mut constraints: Vec<Constraint> =
            fields.iter().map(|f| Constraint::Length(f.height())).collect();
        constraints.push(Constraint::Min(0));
        let areas = Layout::vertical(constraints).split(inner);

        for (i, field) in fields.iter().enumerate() {
            field.render(frame, areas[i], self.state.focused == i);
        }
    }
}
