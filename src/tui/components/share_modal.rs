//! # Share Modal
//!
//! Overlay showing one submission's details with share options. Each
//! option copies something to the system clipboard: the plain-text block,
//! a `mailto:` compose URL, or an `sms:` compose URL. The copy itself is
//! performed by the event loop (it owns the clipboard handle); this
//! component just reports which payload was requested.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::share;
use crate::core::submission::Submission;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

use super::confirm_dialog::centered_rect;

pub struct ShareModalState {
    pub submission: Submission,
    /// Label of the last copied payload, shown as feedback.
    pub copied: Option<&'static str>,
}

pub enum ShareEvent {
    CopyText,
    CopyMailto,
    CopySms,
    Dismiss,
}

impl ShareModalState {
    pub fn new(submission: Submission) -> Self {
        Self {
            submission,
            copied: None,
        }
    }

    /// The payload for a given share event, ready for the clipboard.
    pub fn payload(&self, event: &ShareEvent) -> Option<String> {
        match event {
            ShareEvent::CopyText => Some(share::share_text(&self.submission)),
            ShareEvent::CopyMailto => Some(share::mailto_url(&self.submission)),
            ShareEvent::CopySms => Some(share::sms_url(&self.submission)),
            ShareEvent::Dismiss => None,
        }
    }
}

impl EventHandler for ShareModalState {
    type Event = ShareEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ShareEvent> {
        match event {
            TuiEvent::Escape => Some(ShareEvent::Dismiss),
            TuiEvent::InputChar('c') => Some(ShareEvent::CopyText),
            TuiEvent::InputChar('m') => Some(ShareEvent::CopyMailto),
            TuiEvent::InputChar('t') => Some(ShareEvent::CopySms),
            _ => None,
        }
    }
}

/// Transient render wrapper.
pub struct ShareModal<'a> {
    state: &'a ShareModalState,
}

impl<'a> ShareModal<'a> {
    pub fn new(state: &'a ShareModalState) -> Self {
        Self { state }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 70, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Share Submission ")
            .title_bottom(Line::from(" Esc Close ").centered())
            .padding(Padding::uniform(1));

        let s = &self.state.submission;
        let mut lines = vec![
            Line::from(Span::styled(
                "Submission Details",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("Name: {}", s.name)),
            Line::from(format!("Email: {}", s.email)),
            Line::from(format!("Phone: {}", s.phone)),
            Line::from(format!("Message: {}", s.message.replace('\n', " "))),
            Line::from(""),
            Line::from(Span::styled(
                "Share Options",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            option_line('c', "Copy text", self.state.copied == Some("text")),
            option_line('m', "Copy email (mailto:) link", self.state.copied == Some("mailto")),
            option_line('t', "Copy SMS link", self.state.copied == Some("sms")),
        ];

        if self.state.copied.is_some() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Copied to clipboard",
                Style::default().fg(Color::Green),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
        frame.render_widget(paragraph, overlay);
    }
}

fn option_line(key: char, label: &str, copied: bool) -> Line<'static> {
    let style = if copied {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(vec![
        Span::styled(format!(" {} ", key), Style::default().fg(Color::Cyan)),
        Span::styled(label.to_string(), style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_submission;

    #[test]
    fn test_share_keys_map_to_payloads() {
        let mut modal = ShareModalState::new(test_submission("Alice"));

        let event = modal.handle_event(&TuiEvent::InputChar('c')).unwrap();
        let payload = modal.payload(&event).unwrap();
        assert!(payload.starts_with("Name: Alice\n"));

        let event = modal.handle_event(&TuiEvent::InputChar('m')).unwrap();
        assert!(modal.payload(&event).unwrap().starts_with("mailto:?subject="));

        let event = modal.handle_event(&TuiEvent::InputChar('t')).unwrap();
        assert!(modal.payload(&event).unwrap().starts_with("sms:?body="));
    }

    #[test]
    fn test_dismiss_has_no_payload() {
        let mut modal = ShareModalState::new(test_submission("Alice"));
        let event = modal.handle_event(&TuiEvent::Escape).unwrap();
        assert!(matches!(event, ShareEvent::Dismiss));
        assert!(modal.payload(&event).is_none());
    }
}
