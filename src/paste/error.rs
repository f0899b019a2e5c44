//! Reasons a paste stops before inserting anything.

use std::path::PathBuf;

use crate::document::DocumentError;
use crate::notify::Severity;

/// Terminal failures of a paste. None of them is retried.
#[derive(Debug, thiserror::Error)]
pub enum PasteError {
    #[error("Before pasting the image, you need to save current file first.")]
    UntitledDocument,

    #[error("Failed to create '{folder_name}' folder: {source}")]
    FolderCreationFailed {
        folder_name: String,
        folder: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}", missing_tool_message(.tool))]
    ToolMissing { tool: String },

    #[error("There is not an image in the clipboard.")]
    NoImageInClipboard,

    #[error("Failed to run the clipboard script: {message}")]
    ProcessSpawnFailed { message: String },

    #[error(transparent)]
    Insert(#[from] DocumentError),
}

fn missing_tool_message(tool: &str) -> String {
    match tool {
        "xclip" => "You need to install xclip command first.".to_string(),
        other => format!(
            "The {} command is not in your PATH environment variable. Please add it and retry.",
            other
        ),
    }
}

impl PasteError {
    /// How the failure is presented: expected situations are informational,
    /// broken environments are errors.
    pub fn severity(&self) -> Severity {
        match self {
            PasteError::UntitledDocument
            | PasteError::NoImageInClipboard
            | PasteError::ToolMissing { .. } => Severity::Info,
            PasteError::FolderCreationFailed { .. }
            | PasteError::ProcessSpawnFailed { .. }
            | PasteError::Insert(_) => Severity::Error,
        }
    }
}
