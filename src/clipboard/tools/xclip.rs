//! Unix shell clipboard strategy backed by xclip.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::clipboard::outcome::MissingTool;
use crate::clipboard::scripts::Script;
use crate::clipboard::tool::ClipboardExportStrategy;

/// Printed by `linux.sh` when `xclip` is not installed.
pub const NO_XCLIP: MissingTool = MissingTool {
    sentinel: "no xclip",
    tool: "xclip",
};

/// Runs `linux.sh` with `sh`. The script itself needs `xclip`.
pub struct XclipShell;

impl XclipShell {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardExportStrategy for XclipShell {
    fn name(&self) -> &'static str {
        "sh"
    }

    fn script(&self) -> Script {
        Script::Shell
    }

    fn program(&self) -> PathBuf {
        PathBuf::from("sh")
    }

    fn args(&self, script: &Path, target: &Path) -> Vec<OsString> {
        vec![script.into(), target.into()]
    }

    fn missing_tool(&self) -> Option<MissingTool> {
        Some(NO_XCLIP)
    }
}

impl Default for XclipShell {
    fn default() -> Self {
        Self::new()
    }
}
