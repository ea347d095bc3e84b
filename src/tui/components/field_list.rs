//! # FieldList Component
//!
//! The Builder screen: the configured form fields in render order, with
//! keys for add/edit/delete/reorder/reset/preview. Reordering emits the
//! id to move; the event loop rebuilds the full ordered list and hands it
//! to the store wholesale.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::core::field::FormField;
use crate::tui::event::TuiEvent;

pub struct FieldListState {
    pub selected: usize,
    pub list_state: ListState,
}

pub enum BuilderEvent {
    Add,
    Edit(String),
    DeleteRequest(String),
    ResetRequest,
    Preview,
    MoveUp(String),
    MoveDown(String),
}

impl FieldListState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            list_state: ListState::default(),
        }
    }

    pub fn clamp_selection(&mut self, field_count: usize) {
        if field_count == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(field_count - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    /// Handle an event given the fields in their current render order.
    pub fn handle_event(
        &mut self,
        event: &TuiEvent,
        sorted: &[FormField],
    ) -> Option<BuilderEvent> {
        let selected_id = sorted.get(self.selected).map(|f| f.id.clone());
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                if !sorted.is_empty() {
                    self.selected = (self.selected + 1).min(sorted.len() - 1);
                }
                None
            }
            TuiEvent::InputChar('a') => Some(BuilderEvent::Add),
            TuiEvent::InputChar('e') => selected_id.map(BuilderEvent::Edit),
            TuiEvent::InputChar('d') => selected_id.map(BuilderEvent::DeleteRequest),
            TuiEvent::InputChar('r') => Some(BuilderEvent::ResetRequest),
            TuiEvent::InputChar('p') => Some(BuilderEvent::Preview),
            TuiEvent::MoveUp => selected_id.map(BuilderEvent::MoveUp),
            TuiEvent::MoveDown => selected_id.map(BuilderEvent::MoveDown),
            _ => None,
        }
    }
}

/// Transient render wrapper over the sorted fields.
pub struct FieldList<'a> {
    state: &'a mut FieldListState,
    fields: &'a [FormField],
}

impl<'a> FieldList<'a> {
    pub fn new(state: &'a mut FieldListState, fields: &'a [FormField]) -> Self {
        Self { state, fields }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Form Fields ")
            .title_bottom(
                Line::from(
                    " a Add  e Edit  d Delete  Shift+↑/↓ Move  p Preview  r Reset ",
                )
                .centered(),
            );

        if self.fields.is_empty() {
            let empty = Paragraph::new("No fields configured.\nPress a to add your first field.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.state.clamp_selection(self.fields.len());

        let items: Vec<ListItem> = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let required = if field.required { "  required" } else { "" };
                let options = match &field.options {
                    Some(options) => format!("  [{}]", options.join(", ")),
                    None => String::new(),
                };
                ListItem::new(Line::from(vec![Span::styled(
                    format!(
                        " {}  {} ({}){}{}",
                        field.order,
                        field.label,
                        field.field_type.label(),
                        required,
                        options
                    ),
                    style,
                )]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
