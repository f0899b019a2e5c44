//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::clipboard::DEFAULT_POWERSHELL;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scripts: ScriptsConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Clipboard script configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptsConfig {
    /// Directory with user-maintained scripts; bundled scripts are used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    /// Preferred PowerShell interpreter on Windows
    #[serde(default = "default_powershell")]
    pub powershell: String,
}

pub fn default_powershell() -> String {
    DEFAULT_POWERSHELL.to_string()
}

impl Default for ScriptsConfig {
    fn default() -> Self {
        Self {
            directory: None,
            powershell: default_powershell(),
        }
    }
}

/// Diagnostic log configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_enabled")]
    pub enabled: bool,
    /// Log file; defaults to the platform data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

pub fn default_log_enabled() -> bool {
    true
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: default_log_enabled(),
            file: None,
        }
    }
}
