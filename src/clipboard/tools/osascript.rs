//! macOS AppleScript clipboard strategy.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::clipboard::scripts::Script;
use crate::clipboard::tool::ClipboardExportStrategy;

/// Runs `mac.applescript` with `osascript`.
pub struct OsaScript;

impl OsaScript {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardExportStrategy for OsaScript {
    fn name(&self) -> &'static str {
        "osascript"
    }

    fn script(&self) -> Script {
        Script::AppleScript
    }

    fn program(&self) -> PathBuf {
        PathBuf::from("osascript")
    }

    fn args(&self, script: &Path, target: &Path) -> Vec<OsString> {
        vec![script.into(), target.into()]
    }
}

impl Default for OsaScript {
    fn default() -> Self {
        Self::new()
    }
}
