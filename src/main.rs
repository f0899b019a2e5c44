//! mdpaste - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use mdpaste::cli::{Cli, Commands, ConfigCommands, ScriptsCommands};
use mdpaste::theme::Theme;
use mdpaste::{Config, ConsoleNotifier, Notifier};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // A broken config file must not hide the error report itself.
    let config = Config::load();
    let log = config.as_ref().ok().and_then(Config::diagnostic_log);
    let notifier = ConsoleNotifier::new(Theme::detect(), log);

    match run(cli.command, config, &notifier).await {
        Ok(code) => code,
        Err(e) => {
            notifier.error(&format!("Error: {:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run(
    command: Commands,
    config: Result<Config>,
    notifier: &ConsoleNotifier,
) -> Result<ExitCode> {
    match command {
        Commands::Paste(args) => commands::paste::handle(&args, &config?, notifier).await,
        Commands::Config(cmd) => {
            match cmd {
                ConfigCommands::Show => commands::config::handle_show()?,
                ConfigCommands::Edit => commands::config::handle_edit()?,
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Scripts(cmd) => {
            match cmd {
                ScriptsCommands::Install { dir } => {
                    commands::scripts::handle_install(dir.as_deref()).await?
                }
                ScriptsCommands::Path => commands::scripts::handle_path()?,
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Completions { shell } => {
            commands::completions::handle::<Cli>(shell)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    // Notifications already reach stderr through ConsoleNotifier.
    let filter = if verbose {
        "debug"
    } else {
        "warn,mdpaste::notify=off"
    };
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
