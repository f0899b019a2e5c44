//! Per-platform export strategies.

pub mod osascript;
pub mod powershell;
pub mod xclip;

pub use osascript::OsaScript;
pub use powershell::{PowerShell, DEFAULT_POWERSHELL};
pub use xclip::XclipShell;

use std::path::Path;

use super::tool::{ClipboardExportStrategy, Platform};

/// Pick the strategy for `platform`.
///
/// `powershell` is the preferred interpreter path on Windows; other
/// platforms ignore it.
pub fn select_strategy(
    platform: Platform,
    powershell: &Path,
) -> Box<dyn ClipboardExportStrategy> {
    match platform {
        Platform::Windows => Box::new(PowerShell::with_interpreter(powershell)),
        Platform::MacOs => Box::new(OsaScript::new()),
        Platform::Unix => Box::new(XclipShell::new()),
    }
}
