//! User-visible notifications and the diagnostic log.
//!
//! Every message shown to the user is also appended to a plain-text log as
//! `[MM-DD HH:MM:SS] message`, so failed pastes can be looked at later.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::theme::Theme;

/// Timestamp format of diagnostic log lines.
const LOG_TIME_FORMAT: &str = "%m-%d %H:%M:%S";

/// How a notification is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// Receives the terminal outcome of an operation.
pub trait Notifier {
    fn notify(&self, severity: Severity, message: &str);

    fn info(&self, message: &str) {
        self.notify(Severity::Info, message);
    }

    fn error(&self, message: &str) {
        self.notify(Severity::Error, message);
    }
}

/// Append-only diagnostic log file.
#[derive(Debug, Clone)]
pub struct DiagnosticLog {
    path: PathBuf,
}

impl DiagnosticLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one timestamped line.
    pub fn append(&self, message: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", format_log_line(message))
    }
}

/// Render `message` the way it is stored in the diagnostic log.
pub fn format_log_line(message: &str) -> String {
    format!("[{}] {}", Local::now().format(LOG_TIME_FORMAT), message)
}

/// Prints notifications to stderr and records them in the diagnostic log.
///
/// Stdout stays free for command output such as `--print` and `--json`.
pub struct ConsoleNotifier {
    theme: Theme,
    log: Option<DiagnosticLog>,
}

impl ConsoleNotifier {
    pub fn new(theme: Theme, log: Option<DiagnosticLog>) -> Self {
        Self { theme, log }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => {
                tracing::info!("{}", message);
                eprintln!("{}", self.theme.primary_text(message));
            }
            Severity::Error => {
                tracing::error!("{}", message);
                eprintln!("{}", self.theme.error_text(message));
            }
        }

        if let Some(log) = &self.log {
            if let Err(e) = log.append(message) {
                tracing::warn!(path = %log.path().display(), error = %e, "diagnostic log unavailable");
            }
        }
    }
}
