//! Platform export strategy abstraction.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::outcome::MissingTool;
use super::scripts::Script;

/// Operating system family, as far as clipboard export is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    /// Linux, the BSDs and anything else with a POSIX shell.
    Unix,
}

impl Platform {
    /// Map a `std::env::consts::OS` identifier to a platform family.
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Platform::Windows,
            "macos" => Platform::MacOs,
            _ => Platform::Unix,
        }
    }

    /// The platform this binary runs on.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }
}

/// A way of saving the clipboard image on one platform.
///
/// Implementations only describe the child process; running it and
/// interpreting its output is shared.
pub trait ClipboardExportStrategy: Send + Sync {
    /// Interpreter name, reported when it cannot be launched.
    fn name(&self) -> &'static str;

    /// Script this strategy runs.
    fn script(&self) -> Script;

    /// Program to launch.
    fn program(&self) -> PathBuf;

    /// Arguments: whatever the interpreter needs, then script and target.
    fn args(&self, script: &Path, target: &Path) -> Vec<OsString>;

    /// Extra sentinel this platform's script may print.
    fn missing_tool(&self) -> Option<MissingTool> {
        None
    }
}
