//! Clipboard image export.
//!
//! Reading an image off the system clipboard is delegated to a small script
//! per platform: PowerShell on Windows, AppleScript on macOS and a shell
//! script driving `xclip` elsewhere. Each script receives the destination
//! path and answers on stdout with that path, `no image`, or (shell only)
//! `no xclip`.
//!
//! # Example
//!
//! ```ignore
//! use mdpaste::clipboard::{
//!     select_strategy, ClipboardImageExporter, ImageExporter, Platform, ScriptStore, DEFAULT_POWERSHELL,
//! };
//! use std::path::Path;
//!
//! let strategy = select_strategy(Platform::current(), Path::new(DEFAULT_POWERSHELL));
//! let exporter = ClipboardImageExporter::new(strategy, ScriptStore::Bundled(ScriptStore::default_dir()));
//! let outcome = exporter.export(Path::new("/notes/2024-03-01-todo/a.png")).await;
//! ```

mod error;
pub mod export;
pub mod outcome;
pub mod scripts;
pub mod tool;
pub mod tools;

pub use error::ScriptError;
pub use export::{ClipboardImageExporter, ImageExporter};
pub use outcome::{classify, ExportOutcome, MissingTool, NO_IMAGE};
pub use scripts::{install_scripts, Script, ScriptStore};
pub use tool::{ClipboardExportStrategy, Platform};
pub use tools::{select_strategy, DEFAULT_POWERSHELL};
