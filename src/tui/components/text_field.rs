//! # TextField Component
//!
//! Single- or multi-line text input used by every form in the app.
//!
//! Holds the buffer and a byte-offset cursor; emits nothing itself.
//! Parents route events in and read `text()` back out. An attached
//! validation error renders in red along the bottom border and is cleared
//! by the parent when the user types.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::event::TuiEvent;

const SINGLE_LINE_ROWS: u16 = 1;
const MULTI_LINE_ROWS: u16 = 4;

pub struct TextField {
    pub label: String,
    pub placeholder: String,
    /// Validation error shown under the field.
    pub error: Option<String>,
    buffer: String,
    /// Byte offset into `buffer`, always on a char boundary.
    cursor: usize,
    multiline: bool,
}

impl TextField {
    pub fn new(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            error: None,
            buffer: String::new(),
            cursor: 0,
            multiline: false,
        }
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.error = None;
    }

    /// Rendered height including borders.
    pub fn height(&self) -> u16 {
        let rows = if self.multiline {
            MULTI_LINE_ROWS
        } else {
            SINGLE_LINE_ROWS
        };
        rows + 2
    }

    /// Apply an editing event. Returns true if the buffer changed
    /// (parents use this to clear the field's validation error).
    pub fn handle_event(&mut self, event: &TuiEvent) -> bool {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                true
            }
            TuiEvent::Paste(data) => {
                let cleaned: String = if self.multiline {
                    data.clone()
                } else {
                    data.replace('\n', " ")
                };
                self.buffer.insert_str(self.cursor, &cleaned);
                self.cursor += cleaned.len();
                true
            }
            TuiEvent::NewLine if self.multiline => {
                self.buffer.insert(self.cursor, '\n');
                self.cursor += 1;
                true
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.replace_range(prev..self.cursor, "");
                    self.cursor = prev;
                    true
                } else {
                    false
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.replace_range(self.cursor..next, "");
                    true
                } else {
                    false
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                }
                false
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                }
                false
            }
            TuiEvent::Home => {
                self.cursor = 0;
                false
            }
            TuiEvent::End => {
                self.cursor = self.buffer.len();
                false
            }
            _ => false,
        }
    }

    /// Render the field; a focused field gets a highlighted border and the
    /// terminal cursor placed at the edit position.
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", self.label));

        if let Some(ref error) = self.error {
            block = block.title_bottom(
                Line::from(format!(" {} ", error))
                    .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            );
        }

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(self.placeholder.as_str())
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM))
                .block(block)
        } else {
            Paragraph::new(self.buffer.as_str()).block(block)
        };
        frame.render_widget(paragraph, area);

        if focused {
            let (row, col) = self.cursor_row_col();
            let inner_w = area.width.saturating_sub(2);
            let x = area.x + 1 + (col as u16).min(inner_w.saturating_sub(1));
            let y = area.y + 1 + (row as u16).min(area.height.saturating_sub(3));
            frame.set_cursor_position(Position::new(x, y));
        }
    }

    /// (row, display column) of the cursor within the buffer.
    fn cursor_row_col(&self) -> (usize, usize) {
        let before = &self.buffer[..self.cursor];
        let row = before.matches('\n').count();
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let col = before[line_start..].width();
        (row, col)
    }
}

fn prev_char_boundary(s: &str, from: usize) -> usize {
    let mut idx = from.saturating_sub(1);
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

fn next_char_boundary(s: &str, from: usize) -> usize {
    let mut idx = from + 1;
    while idx < s.len() && !s.is_char_boundary(idx) {
        idx += 1;
    }
    idx.min(s.len())
}
