//! # Field Editor Modal
//!
//! Add/edit overlay for one form field. Label, name, placeholder and the
//! comma-separated options are text inputs; the type row cycles with
//! Left/Right; the required row toggles with Space. Enter saves after
//! checking the structural rules: label and name must be non-empty, and
//! choice types (select/radio) need at least one option.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::config_store::{FieldPatch, FieldSpec};
use crate::core::field::{FieldType, FormField};
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

use super::confirm_dialog::centered_rect;
use super::text_field::TextField;

/// Focusable rows, top to bottom.
const ROW_LABEL: usize = 0;
const ROW_NAME: usize = 1;
const ROW_PLACEHOLDER: usize = 2;
const ROW_TYPE: usize = 3;
const ROW_REQUIRED: usize = 4;
const ROW_OPTIONS: usize = 5;
const ROW_COUNT: usize = 6;

pub struct FieldEditorState {
    /// `Some(id)` when editing an existing field, `None` when adding.
    editing_id: Option<String>,
    label: TextField,
    name: TextField,
    placeholder: TextField,
    options: TextField,
    field_type: FieldType,
    required: bool,
    focused: usize,
    error: Option<String>,
}

pub enum FieldEditorEvent {
    Add(FieldSpec),
    Update(String, FieldPatch),
    Dismiss,
}

impl FieldEditorState {
    pub fn add() -> Self {
        Self {
            editing_id: None,
            label: TextField::new("Label", "Display text"),
            name: TextField::new("Name", "machine_key"),
            placeholder: TextField::new("Placeholder", "Optional hint text"),
            options: TextField::new("Options", "Comma-separated choices"),
            field_type: FieldType::Text,
            required: false,
            focused: ROW_LABEL,
            error: None,
        }
    }

    pub fn edit(field: &FormField) -> Self {
        let mut state = Self::add();
        state.editing_id = Some(field.id.clone());
        state.label.set_text(&field.label);
        state.name.set_text(&field.name);
        state
            .placeholder
            .set_text(field.placeholder.clone().unwrap_or_default());
        state
            .options
            .set_text(field.options.clone().unwrap_or_default().join(", "));
        state.field_type = field.field_type;
        state.required = field.required;
        state
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    fn parsed_options(&self) -> Option<Vec<String>> {
        let options: Vec<String> = self
            .options
            .text()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if options.is_empty() { None } else { Some(options) }
    }

    fn parsed_placeholder(&self) -> Option<String> {
        let text = self.placeholder.text().trim().to_string();
        if text.is_empty() { None } else { Some(text) }
    }

    /// Structural checks before save. Returns the first problem found.
    fn validate(&self) -> Option<String> {
        if self.label.text().trim().is_empty() {
            return Some("Label is required".to_string());
        }
        if self.name.text().trim().is_empty() {
            return Some("Name is required".to_string());
        }
        if self.field_type.is_choice() && self.parsed_options().is_none() {
            return Some("Select and radio fields need at least one option".to_string());
        }
        None
    }

    fn save_event(&self) -> FieldEditorEvent {
        match &self.editing_id {
            Some(id) => FieldEditorEvent::Update(
                id.clone(),
                FieldPatch {
                    name: Some(self.name.text().trim().to_string()),
                    label: Some(self.label.text().trim().to_string()),
                    field_type: Some(self.field_type),
                    required: Some(self.required),
                    placeholder: Some(self.parsed_placeholder()),
                    options: Some(self.parsed_options()),
                    order: None,
                },
            ),
            None => FieldEditorEvent::Add(FieldSpec {
                name: self.name.text().trim().to_string(),
                label: self.label.text().trim().to_string(),
                field_type: self.field_type,
                required: self.required,
                placeholder: self.parsed_placeholder(),
                options: self.parsed_options(),
            }),
        }
    }
}

impl EventHandler for FieldEditorState {
    type Event = FieldEditorEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FieldEditorEvent> {
        match event {
            TuiEvent::Escape => Some(FieldEditorEvent::Dismiss),
            TuiEvent::Tab | TuiEvent::CursorDown => {
                self.focused = (self.focused + 1) % ROW_COUNT;
                None
            }
            TuiEvent::BackTab | TuiEvent::CursorUp => {
                self.focused = (self.focused + ROW_COUNT - 1) % ROW_COUNT;
                None
            }
            TuiEvent::Submit => match self.validate() {
                Some(error) => {
                    self.error = Some(error);
                    None
                }
                None => Some(self.save_event()),
            },
            TuiEvent::CursorLeft if self.focused == ROW_TYPE => {
                self.field_type = self.field_type.prev();
                self.error = None;
                None
            }
            TuiEvent::CursorRight if self.focused == ROW_TYPE => {
                self.field_type = self.field_type.next();
                self.error = None;
                None
            }
            TuiEvent::InputChar(' ') if self.focused == ROW_REQUIRED => {
                self.required = !self.required;
                None
            }
            other => {
                let changed = match self.focused {
                    ROW_LABEL => self.label.handle_event(other),
                    ROW_NAME => self.name.handle_event(other),
                    ROW_PLACEHOLDER => self.placeholder.handle_event(other),
                    ROW_OPTIONS => self.options.handle_event(other),
                    _ => false,
                };
                if changed {
                    self.error = None;
                }
                None
            }
        }
    }
}

/// Transient render wrapper.
pub struct FieldEditor<'a> {
    state: &'a FieldEditorState,
}

impl<'a> FieldEditor<'a> {
    pub fn new(state: &'a FieldEditorState) -> Self {
        Self { state }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 90, area);
        frame.render_widget(Clear, overlay);

        let title = if self.state.is_editing() {
            " Edit Field "
        } else {
            " Add Field "
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title)
            .title_bottom(Line::from(" Enter Save  Tab Next  Esc Cancel ").centered())
            .padding(Padding::horizontal(1));
        if let Some(ref error) = self.state.error {
            block = block.title_bottom(
                Line::from(format!(" {} ", error))
                    .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            );
        }
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let s = self.state;
        let areas = Layout::vertical([
            Constraint::Length(s.label.height()),
            Constraint::Length(s.name.height()),
            Constraint::Length(s.placeholder.height()),
            Constraint::Length(1), // type
            Constraint::Length(1), // required
            Constraint::Length(s.options.height()),
            Constraint::Min(0),
        ])
        .split(inner);

        s.label.render(frame, areas[0], s.focused == ROW_LABEL);
        s.name.render(frame, areas[1], s.focused == ROW_NAME);
        s.placeholder
            .render(frame, areas[2], s.focused == ROW_PLACEHOLDER);

        let type_line = Line::from(vec![
            Span::raw(" Type:      "),
            Span::styled(
                format!("< {} >", s.field_type.label()),
                row_style(s.focused == ROW_TYPE),
            ),
        ]);
        frame.render_widget(Paragraph::new(type_line), areas[3]);

        let required_line = Line::from(vec![
            Span::raw(" Required:  "),
            Span::styled(
                if s.required { "[x]" } else { "[ ]" },
                row_style(s.focused == ROW_REQUIRED),
            ),
        ]);
        frame.render_widget(Paragraph::new(required_line), areas[4]);

        // Options row only matters for choice types; dim it otherwise
        if s.field_type.is_choice() {
            s.options.render(frame, areas[5], s.focused == ROW_OPTIONS);
        } else {
            let ignored = Paragraph::new(" Options: (ignored for this type)")
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM));
            frame.render_widget(ignored, areas[5]);
        }
    }
}

fn row_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(Color::Gray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::default_fields;

    fn type_text(editor: &mut FieldEditorState, text: &str) {
        for c in text.chars() {
            editor.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_add_requires_label_and_name() {
        let mut editor = FieldEditorState::add();
        assert!(editor.handle_event(&TuiEvent::Submit).is_none());
        assert_eq!(editor.error.as_deref(), Some("Label is required"));

        type_text(&mut editor, "Company");
        assert!(editor.handle_event(&TuiEvent::Submit).is_none());
        assert_eq!(editor.error.as_deref(), Some("Name is required"));
    }

    #[test]
    fn test_add_emits_spec() {
        let mut editor = FieldEditorState::add();
        type_text(&mut editor, "Company");
        editor.handle_event(&TuiEvent::Tab);
        type_text(&mut editor, "company");
        let Some(FieldEditorEvent::Add(spec)) = editor.handle_event(&TuiEvent::Submit) else {
            panic!("expected add event");
        };
        assert_eq!(spec.label, "Company");
        assert_eq!(spec.name, "company");
        assert_eq!(spec.field_type, FieldType::Text);
        assert!(spec.options.is_none());
    }

    #[test]
    fn test_choice_type_needs_options() {
        let mut editor = FieldEditorState::add();
        type_text(&mut editor, "Topic");
        editor.handle_event(&TuiEvent::Tab);
        type_text(&mut editor, "topic");
        // Move to the type row and cycle to select
        editor.focused = ROW_TYPE;
        while editor.field_type != FieldType::Select {
            editor.handle_event(&TuiEvent::CursorRight);
        }
        assert!(editor.handle_event(&TuiEvent::Submit).is_none());
        assert!(editor.error.as_deref().unwrap().contains("option"));

        editor.focused = ROW_OPTIONS;
        type_text(&mut editor, "Sales, Support , ,Billing");
        let Some(FieldEditorEvent::Add(spec)) = editor.handle_event(&TuiEvent::Submit) else {
            panic!("expected add event");
        };
        assert_eq!(
            spec.options.unwrap(),
            vec!["Sales".to_string(), "Support".to_string(), "Billing".to_string()]
        );
    }

    #[test]
    fn test_required_toggle() {
        let mut editor = FieldEditorState::add();
        editor.focused = ROW_REQUIRED;
        editor.handle_event(&TuiEvent::InputChar(' '));
        assert!(editor.required);
        editor.handle_event(&TuiEvent::InputChar(' '));
        assert!(!editor.required);
    }

    #[test]
    fn test_edit_prefills_and_emits_update() {
        let field = &default_fields()[1]; // email
        let mut editor = FieldEditorState::edit(field);
        assert!(editor.is_editing());
        assert_eq!(editor.label.text(), "Email");

        let Some(FieldEditorEvent::Update(id, patch)) = editor.handle_event(&TuiEvent::Submit)
        else {
            panic!("expected update event");
        };
        assert_eq!(id, "email");
        assert_eq!(patch.label.as_deref(), Some("Email"));
        assert_eq!(patch.order, None); // never touches ordering
    }
}
