//! # DynamicForm Component
//!
//! Renders the configured field list as a working form, one control per
//! `FieldType` variant (the match is exhaustive, so a new variant breaks
//! the build here until it can render).
//!
//! Two modes:
//! - **Preview**: every control drawn but disabled; no events are
//!   consumed and nothing can be submitted.
//! - **Live**: controls are editable and Enter collects a payload keyed
//!   by field name. Only the `required` flag is enforced; the richer
//!   validation rules belong to the fixed public form. The collected
//!   payload is not written to any store; it is returned to the caller,
//!   which logs it.

use std::collections::BTreeMap;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::field::{FieldType, FormField};
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

use super::confirm_dialog::centered_rect;
use super::text_field::TextField;

/// A value collected from one rendered control.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectedValue {
    Text(String),
    Bool(bool),
}

/// Per-field input state, parallel to the field list.
enum FieldInput {
    Text(TextField),
    /// Index into the field's options, `None` until a choice is made.
    Choice(Option<usize>),
    Bool(bool),
}

pub struct DynamicFormState {
    fields: Vec<FormField>,
    inputs: Vec<FieldInput>,
    focused: usize,
    pub preview: bool,
    /// Transient message shown when a required field blocks submit.
    notice: Option<String>,
}

pub enum DynamicFormEvent {
    /// Live submit: the payload keyed by field name.
    Submitted(BTreeMap<String, CollectedValue>),
}

impl DynamicFormState {
    /// Build from fields already sorted by `order`.
    pub fn new(sorted_fields: Vec<FormField>, preview: bool) -> Self {
        let inputs = sorted_fields
            .iter()
            .map(|field| match field.field_type {
                FieldType::Text | FieldType::Email | FieldType::Phone => FieldInput::Text(
                    TextField::new(
                        field_label(field),
                        field.placeholder.clone().unwrap_or_default(),
                    ),
                ),
                FieldType::Textarea => FieldInput::Text(
                    TextField::new(
                        field_label(field),
                        field.placeholder.clone().unwrap_or_default(),
                    )
                    .multiline(),
                ),
                FieldType::Select | FieldType::Radio => FieldInput::Choice(None),
                FieldType::Checkbox => FieldInput::Bool(false),
            })
            .collect();
        Self {
            fields: sorted_fields,
            inputs,
            focused: 0,
            preview,
            notice: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Collect the current value of every rendered field, keyed by name.
    pub fn payload(&self) -> BTreeMap<String, CollectedValue> {
        self.fields
            .iter()
            .zip(&self.inputs)
            .map(|(field, input)| {
                let value = match input {
                    FieldInput::Text(text) => CollectedValue::Text(text.text().to_string()),
                    FieldInput::Choice(choice) => CollectedValue::Text(
                        choice
                            .and_then(|i| field.options.as_ref()?.get(i).cloned())
                            .unwrap_or_default(),
                    ),
                    FieldInput::Bool(checked) => CollectedValue::Bool(*checked),
                };
                (field.name.clone(), value)
            })
            .collect()
    }

    /// True when every `required` field has an answer.
    fn required_satisfied(&self) -> bool {
        self.fields.iter().zip(&self.inputs).all(|(field, input)| {
            if !field.required {
                return true;
            }
            match input {
                FieldInput::Text(text) => !text.text().trim().is_empty(),
                FieldInput::Choice(choice) => choice.is_some(),
                FieldInput::Bool(checked) => *checked,
            }
        })
    }

    fn option_count(&self, index: usize) -> usize {
        self.fields[index]
            .options
            .as_ref()
            .map(|o| o.len())
            .unwrap_or(0)
    }
}

impl EventHandler for DynamicFormState {
    type Event = DynamicFormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DynamicFormEvent> {
        if self.preview || self.fields.is_empty() {
            return None;
        }
        let count = self.fields.len();
        match event {
            TuiEvent::Tab | TuiEvent::CursorDown => {
                self.focused = (self.focused + 1) % count;
                None
            }
            TuiEvent::BackTab | TuiEvent::CursorUp => {
                self.focused = (self.focused + count - 1) % count;
                None
            }
            TuiEvent::Submit => {
                if self.required_satisfied() {
                    self.notice = None;
                    Some(DynamicFormEvent::Submitted(self.payload()))
                } else {
                    self.notice = Some("Please fill in the required fields".to_string());
                    None
                }
            }
            other => {
                let focused = self.focused;
                let options = self.option_count(focused);
                match &mut self.inputs[focused] {
                    FieldInput::Text(text) => {
                        if text.handle_event(other) {
                            self.notice = None;
                        }
                    }
                    FieldInput::Choice(choice) => match other {
                        TuiEvent::CursorRight if options > 0 => {
                            *choice = Some(choice.map_or(0, |i| (i + 1) % options));
                            self.notice = None;
                        }
                        TuiEvent::CursorLeft if options > 0 => {
                            *choice = Some(choice.map_or(options - 1, |i| (i + options - 1) % options));
                            self.notice = None;
                        }
                        _ => {}
                    },
                    FieldInput::Bool(checked) => {
                        if matches!(other, TuiEvent::InputChar(' ')) {
                            *checked = !*checked;
                            self.notice = None;
                        }
                    }
                }
                None
            }
        }
    }
}

fn field_label(field: &FormField) -> String {
    if field.required {
        format!("{} *", field.label)
    } else {
        field.label.clone()
    }
}

/// Transient render wrapper: the preview/try-out overlay.
pub struct DynamicForm<'a> {
    state: &'a DynamicFormState,
}

impl<'a> DynamicForm<'a> {
    pub fn new(state: &'a DynamicFormState) -> Self {
        Self { state }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 90, area);
        frame.render_widget(Clear, overlay);

        let (title, help) = if self.state.preview {
            (" Form Preview ", " t Try it live  Esc Close ")
        } else {
            (" Form Preview (live) ", " Enter Submit  Tab Next  Esc Back to preview ")
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title)
            .title_bottom(Line::from(help).centered())
            .padding(Padding::horizontal(1));
        if let Some(ref notice) = self.state.notice {
            block = block.title_bottom(
                Line::from(format!(" {} ", notice))
                    .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            );
        }
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        if self.state.is_empty() {
            let empty = Paragraph::new("No fields configured.")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, inner);
            return;
        }

        let mut constraints: Vec<Constraint> = self
            .state
            .fields
            .iter()
            .zip(&self.state.inputs)
            .map(|(field, input)| Constraint::Length(control_height(field, input)))
            .collect();
        constraints.push(Constraint::Min(0));
        let areas = Layout::vertical(constraints).split(inner);

        for (i, (field, input)) in self
            .state
            .fields
            .iter()
            .zip(&self.state.inputs)
            .enumerate()
        {
            let focused = !self.state.preview && self.state.focused == i;
            self.render_control(frame, areas[i], field, input, focused);
        }
    }

    fn render_control(
        &self,
        frame: &mut Frame,
        area: Rect,
        field: &FormField,
        input: &FieldInput,
        focused: bool,
    ) {
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else if self.state.preview {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::Gray)
        };

        match input {
            FieldInput::Text(text) => text.render(frame, area, focused),
            FieldInput::Choice(choice) => {
                let options = field.options.as_deref().unwrap_or(&[]);
                let mut lines = vec![Line::from(Span::styled(field_label(field), label_style))];
                match field.field_type {
                    FieldType::Select => {
                        let current = choice
                            .and_then(|i| options.get(i).map(String::as_str))
                            .unwrap_or("Select...");
                        lines.push(Line::from(Span::styled(
                            format!("  < {} >", current),
                            label_style,
                        )));
                    }
                    _ => {
                        // Radio: one row per option
                        for (i, option) in options.iter().enumerate() {
                            let marker = if *choice == Some(i) { "(x)" } else { "( )" };
                            lines.push(Line::from(Span::styled(
                                format!("  {} {}", marker, option),
                                label_style,
                            )));
                        }
                    }
                }
                frame.render_widget(Paragraph::new(lines), area);
            }
            FieldInput::Bool(checked) => {
                let marker = if *checked { "[x]" } else { "[ ]" };
                let text = field
                    .placeholder
                    .clone()
                    .unwrap_or_else(|| field.label.clone());
                let line = Line::from(Span::styled(format!("{} {}", marker, text), label_style));
                frame.render_widget(Paragraph::new(line), area);
            }
        }
    }
}

fn control_height(field: &FormField, input: &FieldInput) -> u16 {
    match input {
        FieldInput::Text(text) => text.height(),
        FieldInput::Choice(_) => match field.field_type {
            FieldType::Select => 2,
            _ => 1 + field.options.as_ref().map(|o| o.len() as u16).unwrap_or(0),
        },
        FieldInput::Bool(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::default_fields;

    fn choice_field(name: &str, field_type: FieldType, required: bool) -> FormField {
        FormField {
            id: name.to_string(),
            name: name.to_string(),
            label: name.to_uppercase(),
            field_type,
            required,
            placeholder: None,
            options: Some(vec!["One".to_string(), "Two".to_string()]),
            order: 0,
        }
    }

    #[test]
    fn test_preview_mode_consumes_nothing() {
        let mut form = DynamicFormState::new(default_fields(), true);
        form.handle_event(&TuiEvent::InputChar('x'));
        form.handle_event(&TuiEvent::Submit);
        let payload = form.payload();
        assert_eq!(payload["name"], CollectedValue::Text(String::new()));
    }

    #[test]
    fn test_live_submit_blocked_by_required() {
        let mut form = DynamicFormState::new(default_fields(), false);
        assert!(form.handle_event(&TuiEvent::Submit).is_none());
        assert!(form.notice.is_some());
    }

    #[test]
    fn test_live_submit_collects_payload_by_name() {
        let fields = vec![
            FormField {
                required: false,
                ..default_fields()[0].clone()
            },
            choice_field("topic", FieldType::Select, false),
            FormField {
                id: "subscribed".to_string(),
                name: "subscribed".to_string(),
                label: "Subscribe".to_string(),
                field_type: FieldType::Checkbox,
                required: false,
                placeholder: None,
                options: None,
                order: 2,
            },
        ];
        let mut form = DynamicFormState::new(fields, false);
        form.handle_event(&TuiEvent::InputChar('A'));
        form.handle_event(&TuiEvent::Tab);
        form.handle_event(&TuiEvent::CursorRight); // select "One"
        form.handle_event(&TuiEvent::Tab);
        form.handle_event(&TuiEvent::InputChar(' ')); // check

        let Some(DynamicFormEvent::Submitted(payload)) = form.handle_event(&TuiEvent::Submit)
        else {
            panic!("expected submit");
        };
        assert_eq!(payload["name"], CollectedValue::Text("A".to_string()));
        assert_eq!(payload["topic"], CollectedValue::Text("One".to_string()));
        assert_eq!(payload["subscribed"], CollectedValue::Bool(true));
    }

    #[test]
    fn test_required_checkbox_must_be_checked() {
        let fields = vec![FormField {
            id: "terms".to_string(),
            name: "terms".to_string(),
            label: "Accept terms".to_string(),
            field_type: FieldType::Checkbox,
            required: true,
            placeholder: None,
            options: None,
            order: 0,
        }];
        let mut form = DynamicFormState::new(fields, false);
        assert!(form.handle_event(&TuiEvent::Submit).is_none());
        form.handle_event(&TuiEvent::InputChar(' '));
        assert!(form.handle_event(&TuiEvent::Submit).is_some());
    }

    #[test]
    fn test_choice_cycling_wraps() {
        let mut form = DynamicFormState::new(
            vec![choice_field("topic", FieldType::Radio, true)],
            false,
        );
        form.handle_event(&TuiEvent::CursorLeft); // None -> last
        let payload = form.payload();
        assert_eq!(payload["topic"], CollectedValue::Text("Two".to_string()));
        form.handle_event(&TuiEvent::CursorRight); // wrap to first
        assert_eq!(form.payload()["topic"], CollectedValue::Text("One".to_string()));
    }

    #[test]
    fn test_unanswered_choice_collects_empty() {
        let form = DynamicFormState::new(
            vec![choice_field("topic", FieldType::Select, false)],
            false,
        );
        assert_eq!(form.payload()["topic"], CollectedValue::Text(String::new()));
    }
}
