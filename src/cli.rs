//! CLI definitions for mdpaste
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for man page generation.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

use crate::document::InsertionPoint;
use crate::theme::build_cli_styles;

#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "mdpaste")]
#[command(about = "Paste clipboard images into markdown documents")]
#[command(
    long_about = "mdpaste - Paste clipboard images into markdown documents.

The image on the clipboard is saved as <YYYY-MM-DD>-<document>/<uuid>.png
next to the document, and a markdown reference to it is inserted at the
cursor. Editors call mdpaste with the current file and cursor position and
reload the buffer afterwards.

QUICK START:
    mdpaste paste notes.md                  Append the image reference
    mdpaste paste notes.md -l 12 -c 4       Insert at line 12, column 4
    mdpaste paste notes.md --print          Print the reference instead

Clipboard access uses PowerShell on Windows, osascript on macOS and xclip
on Linux."
)]
#[command(version = VERSION)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Paste the clipboard image into a markdown file
    #[command(long_about = "Paste the clipboard image into a markdown file.

The image is written to <dir>/<YYYY-MM-DD>-<name>/<uuid>.png, where <dir>
and <name> come from FILE, and ![<uuid>](<uuid>.png) is inserted at the
given position. Nothing is inserted when the clipboard holds no image.

Without FILE the document counts as unsaved and nothing happens.

EXAMPLES:
    mdpaste paste notes.md                  Append at the end of notes.md
    mdpaste paste notes.md -l 3 -c 1        Insert at the start of line 3
    mdpaste paste notes.md --print          Print the reference, leave notes.md alone
    mdpaste paste notes.md --json           Describe the result as JSON")]
    Paste(PasteArgs),

    /// Configuration management
    #[command(
        subcommand,
        long_about = "View and edit the mdpaste configuration file.

Configuration is stored in ~/.config/mdpaste/config.toml and controls
where clipboard scripts come from and the diagnostic log.

EXAMPLES:
    mdpaste config show          Display current configuration
    mdpaste config edit          Open config in $EDITOR"
    )]
    Config(ConfigCommands),

    /// Manage the clipboard scripts
    #[command(subcommand)]
    Scripts(ScriptsCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Args)]
pub struct PasteArgs {
    /// Markdown file to paste into
    pub file: Option<PathBuf>,

    /// Cursor line (1-based); defaults to the end of the file
    #[arg(long, short, value_parser = clap::value_parser!(u64).range(1..))]
    pub line: Option<u64>,

    /// Cursor column in characters (1-based)
    #[arg(long, short, requires = "line", value_parser = clap::value_parser!(u64).range(1..))]
    pub column: Option<u64>,

    /// Print the markdown reference to stdout instead of editing FILE
    #[arg(long)]
    pub print: bool,

    /// Print the paste result as JSON
    #[arg(long, conflicts_with = "print")]
    pub json: bool,
}

impl PasteArgs {
    /// Zero-based cursor position from the 1-based flags.
    pub fn insertion_point(&self) -> InsertionPoint {
        match self.line {
            Some(line) => InsertionPoint::At {
                line: (line - 1) as usize,
                column: self.column.map(|c| (c - 1) as usize).unwrap_or(0),
            },
            None => InsertionPoint::End,
        }
    }
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Open configuration in editor
    Edit,
}

#[derive(Subcommand)]
pub enum ScriptsCommands {
    /// Write the bundled scripts to a directory for customization
    #[command(long_about = "Write the bundled clipboard scripts to a directory.

Point [scripts].directory in the config at that directory to make mdpaste
use your edited copies.

EXAMPLES:
    mdpaste scripts install                 Install to the default location
    mdpaste scripts install --dir ~/bin     Install somewhere else")]
    Install {
        /// Target directory (default: the directory mdpaste reads from)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Print the directory scripts are read from
    Path,
}
