//! logsift -- command-line front end for the log parsing engine.

mod cli;
mod commands;
mod error;
mod logging;
mod output;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use logsift_core::config::{GeneralConfig, LogsiftConfig};

use crate::cli::{Cli, Commands};
use crate::error::CliError;
use crate::output::OutputWriter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config_path = commands::resolve_config_path(cli.config.as_deref());
    let writer = OutputWriter::new(cli.output);

    match run(cli, config_path.as_deref(), &writer).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli, config_path: Option<&Path>, writer: &OutputWriter) -> Result<(), CliError> {
    let log_level = cli.log_level.as_deref();

    match cli.command {
        Commands::Validate(args) => {
            let config = prepare(config_path, log_level).await?;
            commands::validate::execute(args, &config, writer).await
        }
        Commands::Parse(args) => {
            let config = prepare(config_path, log_level).await?;
            commands::parse::execute(args, &config, writer).await
        }
        Commands::Request(args) => {
            let config = prepare(config_path, log_level).await?;
            commands::request::execute(args, &config, writer).await
        }
        Commands::Example => commands::example::execute(writer),
        Commands::Config(args) => {
            // a broken file must still be reported, so log with defaults
            init_logging(&GeneralConfig::default(), log_level)?;
            commands::config::execute(args, config_path, writer).await
        }
    }
}

/// Load the configuration and initialize logging from its `[general]` section.
async fn prepare(
    config_path: Option<&Path>,
    log_level: Option<&str>,
) -> Result<LogsiftConfig, CliError> {
    let config = commands::load_config(config_path).await?;
    init_logging(&config.general, log_level)?;

    tracing::debug!(
        config = %commands::config_source_label(config_path),
        "configuration loaded"
    );

    Ok(config)
}

fn init_logging(general: &GeneralConfig, level_override: Option<&str>) -> Result<(), CliError> {
    logging::init_tracing(general, level_override).map_err(|e| CliError::Config(e.to_string()))
}
