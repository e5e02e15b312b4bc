// ABOUTME: Centralized CLI output utilities for consistent user-facing messages
// ABOUTME: Provides standardized formatting for errors, hints, warnings and info on stderr

use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// Diagnostics go to stderr so stdout carries only the rendered image
pub struct CliOutput {
    use_color: bool,
}

impl CliOutput {
    /// Color only when allowed and stderr is a terminal
    pub fn new(allow_color: bool) -> Self {
        Self {
            use_color: allow_color && std::io::stderr().is_terminal(),
        }
    }

    /// Create CLI output utility with explicit color setting
    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }

    pub fn error(&self, message: &str) {
        eprintln!("{}", self.format_error(message));
    }

    pub fn hint(&self, message: &str) {
        eprintln!("{}", self.format_hint(message));
    }

    pub fn warning(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "warning:".yellow().bold(), message);
        } else {
            eprintln!("warning: {}", message);
        }
    }

    pub fn info(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "info:".blue().bold(), message);
        } else {
            eprintln!("info: {}", message);
        }
    }

    fn format_error(&self, message: &str) -> String {
        if self.use_color {
            format!("{} {}", "error:".red().bold(), message)
        } else {
            format!("error: {}", message)
        }
    }

    fn format_hint(&self, message: &str) -> String {
        if self.use_color {
            format!("{}", message.dimmed())
        } else {
            message.to_string()
        }
    }
}

impl Default for CliOutput {
    fn default() -> Self {
        Self::new(true)
    }
}
