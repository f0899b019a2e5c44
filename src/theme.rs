//! ANSI color helpers for CLI output.

use clap::builder::styling::{AnsiColor, Effects, Styles};

/// ANSI color codes for CLI output
pub mod ansi {
    /// Gray color (ANSI 37) - used for regular messages
    pub const GRAY: &str = "\x1b[37m";
    /// Green color (ANSI 32) - used for accent/success
    pub const GREEN: &str = "\x1b[32m";
    /// Red color (ANSI 31) - used for errors
    pub const RED: &str = "\x1b[31m";
    /// Reset color
    pub const RESET: &str = "\x1b[0m";
}

/// Build clap styles using our theme colors.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

/// Colors for messages printed to stderr.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    colored: bool,
}

impl Theme {
    /// Colored when stderr is a terminal and `NO_COLOR` is unset.
    /// `FORCE_COLOR` turns colors on regardless.
    pub fn detect() -> Self {
        let colored = if std::env::var_os("FORCE_COLOR").is_some() {
            true
        } else {
            std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stderr)
        };
        Self { colored }
    }

    /// Never colored.
    pub fn plain() -> Self {
        Self { colored: false }
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.colored {
            format!("{}{}{}", color, text, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    pub fn primary_text(&self, text: &str) -> String {
        self.paint(ansi::GRAY, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        self.paint(ansi::GREEN, text)
    }

    pub fn error_text(&self, text: &str) -> String {
        self.paint(ansi::RED, text)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
