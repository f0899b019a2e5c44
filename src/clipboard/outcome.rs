//! Classification of what a clipboard script reported.
//!
//! The scripts talk over stdout with a tiny line protocol: the saved path on
//! success, or a sentinel string. The sentinels are matched exactly, after
//! trimming, and must stay in sync with the files under `scripts/`.

use std::path::PathBuf;
use std::process::Output;

/// Printed by every script when the clipboard holds no image.
pub const NO_IMAGE: &str = "no image";

/// A script-specific sentinel meaning a helper tool is not installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingTool {
    /// Exact stdout text, e.g. `no xclip`.
    pub sentinel: &'static str,
    /// Tool to report, e.g. `xclip`.
    pub tool: &'static str,
}

/// Result of a single export attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The script reports it wrote the image to this path.
    Saved(PathBuf),
    /// The clipboard did not contain an image.
    NoImage,
    /// A required program (interpreter or helper) is not installed.
    ToolMissing(String),
    /// The script could not be run or reported nothing usable.
    ExecutionError(String),
}

impl ExportOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, ExportOutcome::Saved(_))
    }
}

/// Classify a script's stdout.
///
/// `missing_tool` is the extra sentinel the running strategy understands;
/// other platforms never see `no xclip`, so for them it is just text.
pub fn classify(stdout: &str, missing_tool: Option<MissingTool>) -> ExportOutcome {
    let reported = stdout.trim();

    if reported.is_empty() {
        return ExportOutcome::ExecutionError("clipboard script produced no output".to_string());
    }
    if reported == NO_IMAGE {
        return ExportOutcome::NoImage;
    }
    if let Some(missing) = missing_tool {
        if reported == missing.sentinel {
            return ExportOutcome::ToolMissing(missing.tool.to_string());
        }
    }

    ExportOutcome::Saved(PathBuf::from(reported))
}

/// Whether the script kept to a single line of output.
///
/// Extra lines are not an error: the whole text is still classified, so a
/// chatty script can turn a sentinel into a bogus saved path.
pub fn is_single_line(stdout: &str) -> bool {
    stdout.trim().lines().count() <= 1
}

/// Classify a finished child process.
///
/// The exit status is not consulted for the outcome; it only enriches the
/// message when the script printed nothing.
pub fn classify_output(output: &Output, missing_tool: Option<MissingTool>) -> ExportOutcome {
    let stdout = String::from_utf8_lossy(&output.stdout);
    match classify(&stdout, missing_tool) {
        ExportOutcome::ExecutionError(message) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            if stderr.is_empty() {
                ExportOutcome::ExecutionError(format!("{} ({})", message, output.status))
            } else {
                ExportOutcome::ExecutionError(stderr.to_string())
            }
        }
        outcome => outcome,
    }
}
