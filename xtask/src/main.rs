//! xtask - Build tasks for mdpaste
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-man: Generate man pages from the CLI definitions

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Command, CommandFactory, Parser, Subcommand};

use mdpaste::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for mdpaste")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate man pages from CLI definitions
    #[command(name = "gen-man")]
    GenMan {
        /// Output directory (default: docs/man)
        #[arg(long, short, default_value = "docs/man")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenMan { output } => generate_man_pages(&output)?,
    }

    Ok(())
}

/// Generate man pages using clap_mangen
fn generate_man_pages(man_dir: &Path) -> Result<()> {
    fs::create_dir_all(man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command();
    render_page(&cmd, &man_dir.join("mdpaste.1"))?;

    for subcommand in cmd.get_subcommands() {
        if subcommand.is_hide_set() {
            continue;
        }
        let name = subcommand.get_name();
        render_page(subcommand, &man_dir.join(format!("mdpaste-{}.1", name)))?;

        for nested in subcommand.get_subcommands() {
            if nested.is_hide_set() {
                continue;
            }
            let file = format!("mdpaste-{}-{}.1", name, nested.get_name());
            render_page(nested, &man_dir.join(file))?;
        }
    }

    println!("Man pages generated in {}", man_dir.display());
    Ok(())
}

fn render_page(cmd: &Command, path: &Path) -> Result<()> {
    let man = clap_mangen::Man::new(cmd.clone());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());
    Ok(())
}
