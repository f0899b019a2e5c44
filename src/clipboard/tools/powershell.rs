//! Windows PowerShell clipboard strategy.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::clipboard::scripts::Script;
use crate::clipboard::tool::ClipboardExportStrategy;

/// Stock location of Windows PowerShell.
pub const DEFAULT_POWERSHELL: &str =
    r"C:\Windows\System32\WindowsPowerShell\v1.0\powershell.exe";

/// Fallback resolved through PATH.
const PATH_POWERSHELL: &str = "powershell";

/// Runs `pc.ps1` with PowerShell.
///
/// Prefers the interpreter at a well-known path and falls back to whatever
/// `powershell` resolves to on PATH when that file is absent.
pub struct PowerShell {
    preferred: PathBuf,
}

impl PowerShell {
    pub fn new() -> Self {
        Self::with_interpreter(DEFAULT_POWERSHELL)
    }

    pub fn with_interpreter(preferred: impl Into<PathBuf>) -> Self {
        Self {
            preferred: preferred.into(),
        }
    }
}

impl ClipboardExportStrategy for PowerShell {
    fn name(&self) -> &'static str {
        PATH_POWERSHELL
    }

    fn script(&self) -> Script {
        Script::PowerShell
    }

    fn program(&self) -> PathBuf {
        if self.preferred.exists() {
            self.preferred.clone()
        } else {
            PathBuf::from(PATH_POWERSHELL)
        }
    }

    fn args(&self, script: &Path, target: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = [
            "-noprofile",
            "-noninteractive",
            "-nologo",
            "-sta",
            "-executionpolicy",
            "unrestricted",
            "-windowstyle",
            "hidden",
            "-file",
        ]
        .into_iter()
        .map(OsString::from)
        .collect();
        args.push(script.into());
        args.push(target.into());
        args
    }
}

impl Default for PowerShell {
    fn default() -> Self {
        Self::new()
    }
}
