//! Command handlers for the mdpaste CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod config;
pub mod paste;
pub mod scripts;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Make `path` absolute against the current directory.
///
/// Unlike `canonicalize`, the path does not have to exist and symlinks are
/// kept as given.
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("Could not determine current directory")?;
    Ok(cwd.join(path))
}
