//! Crossterm → `TuiEvent` translation.
//!
//! The event loop polls with a timeout, then drains everything pending
//! before the next draw. Ctrl+C is always `ForceQuit` regardless of what
//! has focus.

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    /// Ctrl+C - quit regardless of mode
    ForceQuit,
    Escape,
    /// Enter
    Submit,
    InputChar(char),
    /// Bracketed paste - preserves newlines
    Paste(String),
    /// Ctrl+J - newline in multi-line fields
    NewLine,
    Backspace,
    Delete,
    Tab,
    BackTab,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    Home,
    End,
    /// Shift+Up - move selected field up (Builder)
    MoveUp,
    /// Shift+Down - move selected field down (Builder)
    MoveDown,
    /// F1
    ShowForm,
    /// F2
    ShowAdmin,
    /// F3
    ShowBuilder,
    /// Ctrl+E - CSV export (Admin)
    Export,
    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    translate(event::read().ok()?)
}

/// Poll for an event without blocking (returns immediately).
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key) if key.is_press() => {
            match (key.modifiers, key.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (KeyModifiers::CONTROL, KeyCode::Char('e')) => Some(TuiEvent::Export),
                // Ctrl+J inserts newline (ASCII LF; Ctrl+Enter sends this in most terminals)
                (KeyModifiers::CONTROL, KeyCode::Char('j')) => Some(TuiEvent::NewLine),
                (KeyModifiers::SHIFT, KeyCode::Up) => Some(TuiEvent::MoveUp),
                (KeyModifiers::SHIFT, KeyCode::Down) => Some(TuiEvent::MoveDown),
                (_, KeyCode::F(1)) => Some(TuiEvent::ShowForm),
                (_, KeyCode::F(2)) => Some(TuiEvent::ShowAdmin),
                (_, KeyCode::F(3)) => Some(TuiEvent::ShowBuilder),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Delete) => Some(TuiEvent::Delete),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Tab) => Some(TuiEvent::Tab),
                (_, KeyCode::BackTab) => Some(TuiEvent::BackTab),
                (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                (_, KeyCode::Home) => Some(TuiEvent::Home),
                (_, KeyCode::End) => Some(TuiEvent::End),
                _ => None,
            }
        }
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
