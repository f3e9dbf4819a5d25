use std::io::IsTerminal;

use crossterm::style::Stylize;

/// Which visual emphasis a piece of report text carries.
///
/// Renderers tag text with an emphasis; only [`Styler`] decides what that
/// looks like on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// Daily maximum temperatures.
    High,
    /// Daily minimum temperatures.
    Low,
}

/// Resolves [`Emphasis`] into terminal colors, or into nothing at all.
#[derive(Debug, Clone, Copy)]
pub struct Styler {
    enabled: bool,
}

impl Styler {
    /// Resolve the `--color` choice: `always` and `never` force the outcome,
    /// anything else enables colors only when stdout is a terminal.
    pub fn from_choice(choice: &str) -> Self {
        let enabled = match choice {
            "always" => true,
            "never" => false,
            _ => std::io::stdout().is_terminal(),
        };
        Self { enabled }
    }

    /// Build a styler with colors explicitly on or off, bypassing terminal
    /// detection. Used by callers that already know their sink.
    pub fn colored(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Apply `emphasis` to `text`. With colors disabled the text passes
    /// through untouched.
    pub fn paint(&self, text: &str, emphasis: Emphasis) -> String {
        if !self.enabled {
            return text.to_string();
        }
        match emphasis {
            Emphasis::High => text.red().to_string(),
            Emphasis::Low => text.blue().to_string(),
        }
    }
}
