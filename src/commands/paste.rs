//! Paste command handler

use anyhow::{bail, Result};
use std::process::ExitCode;

use mdpaste::cli::PasteArgs;
use mdpaste::clipboard::{select_strategy, ClipboardImageExporter, Platform};
use mdpaste::{Buffer, Config, MarkdownFile, Notifier, Paster};

use super::absolute_path;

/// Paste the clipboard image into the file named on the command line.
///
/// The outcome has already been reported through `notifier` when this
/// returns `Ok`; the exit code tells callers whether text was inserted.
#[cfg(not(tarpaulin_include))]
pub async fn handle<N: Notifier>(args: &PasteArgs, config: &Config, notifier: &N) -> Result<ExitCode> {
    let strategy = select_strategy(Platform::current(), &config.powershell_path());
    let exporter = ClipboardImageExporter::new(strategy, config.script_store());
    let paster = Paster::new(exporter);
    let at = args.insertion_point();

    let result = match &args.file {
        None => {
            let mut untitled = Buffer::untitled("");
            paster.run(&mut untitled, at, notifier).await
        }
        Some(file) if args.print => {
            let mut buffer = Buffer::named(absolute_path(file)?, "");
            let result = paster.run(&mut buffer, at, notifier).await;
            if result.is_ok() {
                println!("{}", buffer.text());
            }
            result
        }
        Some(file) => {
            let path = absolute_path(file)?;
            if !path.is_file() {
                bail!("File not found: {}", file.display());
            }
            let mut document = MarkdownFile::new(path);
            paster.run(&mut document, at, notifier).await
        }
    };

    match result {
        Ok(report) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(_) => Ok(ExitCode::FAILURE),
    }
}
