//! # SubmissionList Component
//!
//! The Admin screen: a searchable list of submissions with per-record
//! actions. Two input modes, mirroring the rest of the app's modal
//! keyboard handling:
//!
//! - **List** (default): Up/Down select, `e` edit, `s` share, `d` delete,
//!   Ctrl+E export, `/` jumps into the search box.
//! - **Search**: characters edit the filter; Esc or Enter drops back to
//!   the list.
//!
//! The component never touches the store. It is handed the already
//! filtered rows each frame and reports which record an action targets.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use chrono::Local;

use crate::core::submission::Submission;
use crate::tui::event::TuiEvent;

use super::text_field::TextField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminMode {
    List,
    Search,
}

pub struct SubmissionListState {
    pub search: TextField,
    pub mode: AdminMode,
    pub selected: usize,
    pub list_state: ListState,
}

pub enum AdminEvent {
    Edit(String),
    Share(String),
    DeleteRequest(String),
    Export,
}

impl SubmissionListState {
    pub fn new() -> Self {
        Self {
            search: TextField::new("Search", "Search submissions..."),
            mode: AdminMode::List,
            selected: 0,
            list_state: ListState::default(),
        }
    }

    pub fn search_term(&self) -> &str {
        self.search.text()
    }

    /// Keep the selection within the (possibly shrunken) filtered list.
    pub fn clamp_selection(&mut self, row_count: usize) {
        if row_count == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(row_count - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    /// Handle an event given the ids of the currently visible rows.
    pub fn handle_event(&mut self, event: &TuiEvent, visible_ids: &[String]) -> Option<AdminEvent> {
        if matches!(event, TuiEvent::Export) {
            return Some(AdminEvent::Export);
        }

        match self.mode {
            AdminMode::Search => match event {
                TuiEvent::Escape | TuiEvent::Submit => {
                    self.mode = AdminMode::List;
                    None
                }
                other => {
                    if self.search.handle_event(other) {
                        self.selected = 0;
                    }
                    None
                }
            },
            AdminMode::List => {
                let selected = self.selected;
                let selected_id = || visible_ids.get(selected).cloned();
                match event {
                    TuiEvent::InputChar('/') => {
                        self.mode = AdminMode::Search;
                        None
                    }
                    TuiEvent::CursorUp => {
                        self.selected = self.selected.saturating_sub(1);
                        None
                    }
                    TuiEvent::CursorDown => {
                        if !visible_ids.is_empty() {
                            self.selected = (self.selected + 1).min(visible_ids.len() - 1);
                        }
                        None
                    }
                    TuiEvent::InputChar('e') => selected_id().map(AdminEvent::Edit),
                    TuiEvent::InputChar('s') => selected_id().map(AdminEvent::Share),
                    TuiEvent::InputChar('d') => selected_id().map(AdminEvent::DeleteRequest),
                    _ => None,
                }
            }
        }
    }
}

/// Transient render wrapper over the filtered rows.
pub struct SubmissionList<'a> {
    state: &'a mut SubmissionListState,
    rows: &'a [&'a Submission],
    total: usize,
}

impl<'a> SubmissionList<'a> {
    pub fn new(state: &'a mut SubmissionListState, rows: &'a [&'a Submission], total: usize) -> Self {
        Self { state, rows, total }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [search_area, count_area, list_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        self.state
            .search
            .render(frame, search_area, self.state.mode == AdminMode::Search);

        let noun = if self.rows.len() == 1 {
            "submission"
        } else {
            "submissions"
        };
        let count = Paragraph::new(format!(" {} {} found", self.rows.len(), noun))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(count, count_area);

        let help = if self.state.mode == AdminMode::Search {
            " Esc Done searching "
        } else {
            " / Search  e Edit  s Share  d Delete  Ctrl+E Export "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Submissions ")
            .title_bottom(Line::from(help).centered());

        if self.rows.is_empty() {
            let message = if self.state.search_term().is_empty() {
                "No submissions yet.\nSubmissions will appear here once users complete the form."
                    .to_string()
            } else {
                format!(
                    "No matching submissions.\nNothing matches \"{}\"",
                    self.state.search_term()
                )
            };
            let empty = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, list_area);
            return;
        }

        self.state.clamp_selection(self.rows.len());

        let inner_width = list_area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, submission)| {
                let style = if i == self.state.selected && self.state.mode == AdminMode::List {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(vec![Span::styled(
                    row_text(submission, inner_width),
                    style,
                )]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);
    }
}

/// One list row: date, name, email, phone, then as much of the message as fits.
fn row_text(submission: &Submission, width: usize) -> String {
    let date = submission
        .created_at
        .with_timezone(&Local)
        .format("%b %d %H:%M");
    let head = format!(
        " {}  {}  {}  {}  ",
        date, submission.name, submission.email, submission.phone
    );
    let message = submission.message.replace('\n', " ");
    let remaining = width.saturating_sub(head.chars().count());
    format!("{}{}", head, truncate_str(&message, remaining))
}

/// Truncate a string to fit within `max_width` chars, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    let len = s.chars().count();
    if len <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        ".".repeat(max_width)
    } else {
        let cut: String = s.chars().take(max_width - 3).collect();
        format!("{}...", cut)
    }
}
