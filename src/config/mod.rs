//! Configuration management for mdpaste

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::clipboard::ScriptStore;
use crate::notify::DiagnosticLog;

impl Config {
    /// Get the config file path (~/.config/mdpaste/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/mdpaste)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load_from(&io::config_path()?)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        io::save_to(self, &io::config_path()?)
    }

    /// Where clipboard scripts come from.
    pub fn script_store(&self) -> ScriptStore {
        match &self.scripts.directory {
            Some(dir) => ScriptStore::Custom(expand_home(dir)),
            None => ScriptStore::Bundled(ScriptStore::default_dir()),
        }
    }

    /// Preferred PowerShell interpreter.
    pub fn powershell_path(&self) -> PathBuf {
        expand_home(&self.scripts.powershell)
    }

    /// Diagnostic log, if enabled.
    pub fn diagnostic_log(&self) -> Option<DiagnosticLog> {
        if !self.log.enabled {
            return None;
        }
        let path = match &self.log.file {
            Some(file) => expand_home(file),
            None => default_log_path(),
        };
        Some(DiagnosticLog::new(path))
    }
}

/// Default diagnostic log location.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("mdpaste")
        .join("paste.log")
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    Path::new(path).to_path_buf()
}
