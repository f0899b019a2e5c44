//! Platform scripts that read the clipboard image.
//!
//! The scripts are compiled into the binary and written to disk the first
//! time a paste needs them. Users who want their own versions point
//! `[scripts].directory` at a folder holding files with the same names.

use std::path::{Path, PathBuf};

use super::error::ScriptError;

pub const POWERSHELL_SCRIPT: &str = include_str!("../../scripts/pc.ps1");
pub const APPLESCRIPT_SCRIPT: &str = include_str!("../../scripts/mac.applescript");
pub const SHELL_SCRIPT: &str = include_str!("../../scripts/linux.sh");

/// One of the bundled clipboard scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    PowerShell,
    AppleScript,
    Shell,
}

impl Script {
    pub const ALL: [Script; 3] = [Script::PowerShell, Script::AppleScript, Script::Shell];

    /// File name on disk.
    pub fn file_name(self) -> &'static str {
        match self {
            Script::PowerShell => "pc.ps1",
            Script::AppleScript => "mac.applescript",
            Script::Shell => "linux.sh",
        }
    }

    /// Bundled script source.
    pub fn contents(self) -> &'static str {
        match self {
            Script::PowerShell => POWERSHELL_SCRIPT,
            Script::AppleScript => APPLESCRIPT_SCRIPT,
            Script::Shell => SHELL_SCRIPT,
        }
    }
}

/// Where scripts are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStore {
    /// Bundled scripts, written into this directory on demand.
    Bundled(PathBuf),
    /// User-maintained scripts, used as found.
    ///
    /// They must print exactly one line: the path they wrote, `no image`,
    /// or `no xclip` for the shell script. Anything longer is taken as a
    /// saved path.
    Custom(PathBuf),
}

impl ScriptStore {
    /// Default location for bundled scripts.
    pub fn default_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("mdpaste")
            .join("scripts")
    }

    pub fn directory(&self) -> &Path {
        match self {
            ScriptStore::Bundled(dir) | ScriptStore::Custom(dir) => dir,
        }
    }

    /// Path of `script`, writing the bundled copy first if needed.
    pub async fn prepare(&self, script: Script) -> Result<PathBuf, ScriptError> {
        let path = self.directory().join(script.file_name());
        match self {
            ScriptStore::Bundled(_) => {
                write_if_stale(&path, script.contents()).await?;
                Ok(path)
            }
            ScriptStore::Custom(_) => {
                if tokio::fs::metadata(&path).await.is_ok() {
                    Ok(path)
                } else {
                    Err(ScriptError::Missing { path })
                }
            }
        }
    }
}

/// Write every bundled script into `dir`, overwriting older copies.
pub async fn install_scripts(dir: &Path) -> Result<Vec<PathBuf>, ScriptError> {
    let mut written = Vec::with_capacity(Script::ALL.len());
    for script in Script::ALL {
        let path = dir.join(script.file_name());
        write_if_stale(&path, script.contents()).await?;
        written.push(path);
    }
    Ok(written)
}

async fn write_if_stale(path: &Path, contents: &str) -> Result<(), ScriptError> {
    if let Ok(existing) = tokio::fs::read_to_string(path).await {
        if existing == contents {
            return Ok(());
        }
    }

    let write_err = |source| ScriptError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
    }
    tokio::fs::write(path, contents).await.map_err(write_err)?;
    tracing::debug!(path = %path.display(), "wrote clipboard script");
    Ok(())
}
