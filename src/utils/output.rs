use colored::*;
use std::io::IsTerminal;

/// Terminal styling for user-facing messages.
///
/// Styling is switched off for anything that is not an interactive
/// terminal, so captured output is always plain text.
#[derive(Debug, Clone, Copy)]
pub struct OutputStyle {
    enabled: bool,
}

impl OutputStyle {
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    /// Style for messages written to stderr
    pub fn stderr() -> Self {
        Self {
            enabled: std::io::stderr().is_terminal(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, |t| t.red())
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }

    fn paint(&self, text: &str, color_fn: impl Fn(&str) -> ColoredString) -> String {
        if self.enabled {
            color_fn(text).to_string()
        } else {
            text.to_string()
        }
    }
}
