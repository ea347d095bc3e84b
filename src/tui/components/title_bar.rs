//! # TitleBar Component
//!
//! Top bar showing the screen tabs and the current status notice. Status
//! notices are this app's toast equivalent: "Submission deleted",
//! "Exported 3 submissions to ./submissions-2024-03-15.csv", etc.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::Screen;
use crate::tui::component::Component;

/// Stateless: all fields are props from `App`/`TuiState`.
pub struct TitleBar {
    pub screen: Screen,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(screen: Screen, status_message: String) -> Self {
        Self {
            screen,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            " intake ",
            Style::default().add_modifier(Modifier::BOLD),
        )];

        for (key, screen) in [
            ("F1", Screen::Form),
            ("F2", Screen::Admin),
            ("F3", Screen::Builder),
        ] {
            let style = if screen == self.screen {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} {} ", key, screen.title()), style));
            spans.push(Span::raw(" "));
        }

        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!("| {}", self.status_message),
                Style::default().fg(Color::Yellow),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
