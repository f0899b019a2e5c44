//! Helpers for running the mdpaste binary in isolation

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway home directory with its own config and data dirs.
pub struct Sandbox {
    pub home: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("Failed to create temp home"),
        }
    }

    pub fn path(&self) -> &Path {
        self.home.path()
    }

    /// Write `~/.config/mdpaste/config.toml`.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let dir = self.path().join(".config").join("mdpaste");
        fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.toml");
        fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Write a file relative to the sandbox home.
    pub fn write_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// `mdpaste` with HOME pointing into the sandbox and colors off.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("mdpaste").expect("Failed to find mdpaste binary");
        cmd.env("HOME", self.path())
            .env("USERPROFILE", self.path())
            .env_remove("XDG_CONFIG_HOME")
            .env_remove("XDG_DATA_HOME")
            .env_remove("RUST_LOG")
            .env_remove("FORCE_COLOR")
            .env("NO_COLOR", "1")
            .current_dir(self.path());
        cmd
    }
}
