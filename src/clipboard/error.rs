//! Clipboard script errors.

use std::path::PathBuf;

/// Errors while locating or writing the platform scripts.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Clipboard script not found: {path}")]
    Missing { path: PathBuf },

    #[error("Failed to write clipboard script {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
