//! Test helper utilities

#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use mdpaste::{ExportOutcome, ImageExporter, Notifier, Severity};

/// Bytes written by [`FakeExporter`] for a saved image.
pub const FAKE_PNG: &[u8] = b"\x89PNG\r\n\x1a\nfake";

/// Exporter that returns a canned outcome and remembers its targets.
pub struct FakeExporter {
    outcome: ExportOutcome,
    calls: RefCell<Vec<PathBuf>>,
}

impl FakeExporter {
    /// Writes a fake PNG to the target and reports it saved.
    pub fn saving() -> Self {
        Self::returning(ExportOutcome::Saved(PathBuf::new()))
    }

    /// Writes a fake PNG to the target but reports `path` as saved.
    pub fn reporting(path: impl Into<PathBuf>) -> Self {
        Self::returning(ExportOutcome::Saved(path.into()))
    }

    pub fn returning(outcome: ExportOutcome) -> Self {
        Self {
            outcome,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.borrow().clone()
    }
}

impl ImageExporter for FakeExporter {
    async fn export(&self, target: &Path) -> ExportOutcome {
        self.calls.borrow_mut().push(target.to_path_buf());
        match &self.outcome {
            ExportOutcome::Saved(reported) => {
                fs::write(target, FAKE_PNG).expect("Failed to write fake image");
                if reported.as_os_str().is_empty() {
                    ExportOutcome::Saved(target.to_path_buf())
                } else {
                    ExportOutcome::Saved(reported.clone())
                }
            }
            other => other.clone(),
        }
    }
}

/// Notifier that keeps every message.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<(Severity, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        self.messages
            .borrow_mut()
            .push((severity, message.to_string()));
    }
}

/// Entries of `dir`, sorted, as file names.
pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read dir")
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
