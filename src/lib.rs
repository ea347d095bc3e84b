//! Intake library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// The three top-level screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Screen {
    /// Public submission form
    #[default]
    Form,
    /// Submission administration
    Admin,
    /// Form-field configuration
    Builder,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Form => "Form",
            Screen::Admin => "Admin",
            Screen::Builder => "Builder",
        }
    }
}
