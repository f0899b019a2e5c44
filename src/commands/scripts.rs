//! Scripts subcommands handler

use anyhow::{Context, Result};
use std::path::Path;

use mdpaste::clipboard::install_scripts;
use mdpaste::theme::Theme;
use mdpaste::Config;

use super::absolute_path;

/// Write the bundled scripts to `dir`, or to the configured location.
#[cfg(not(tarpaulin_include))]
pub async fn handle_install(dir: Option<&Path>) -> Result<()> {
    let target = match dir {
        Some(dir) => absolute_path(dir)?,
        None => Config::load()?.script_store().directory().to_path_buf(),
    };

    let written = install_scripts(&target)
        .await
        .with_context(|| format!("Failed to install scripts into {}", target.display()))?;

    let theme = Theme::detect();
    for path in &written {
        eprintln!("{}", theme.success_text(&format!("Wrote {}", path.display())));
    }
    Ok(())
}

/// Print the directory scripts are read from.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    let config = Config::load()?;
    println!("{}", config.script_store().directory().display());
    Ok(())
}
