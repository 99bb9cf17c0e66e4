//! CLI argument parsing using clap derive API
//!
//! This module defines the command-line interface structure using clap's derive macros.
//! It is purely declarative with no side effects or I/O.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// logsift -- turn raw application logs into deduplicated error groups.
///
/// Use `logsift <COMMAND> --help` for subcommand details.
#[derive(Parser, Debug)]
#[command(name = "logsift", version, about, long_about = None)]
pub struct Cli {
    /// Path to the logsift.toml configuration file.
    ///
    /// When omitted, `logsift.toml` in the working directory is used if it
    /// exists, otherwise built-in defaults.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output format.
    #[arg(long, global = true, default_value = "text")]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table / text output.
    Text,
    /// Machine-readable JSON.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether input looks like log output.
    Validate(ValidateArgs),

    /// Parse logs into error groups and level counts.
    Parse(ParseArgs),

    /// Build an analysis request payload from logs.
    Request(RequestArgs),

    /// Print the bundled example log.
    Example,

    /// Manage configuration.
    Config(ConfigArgs),
}

// ---- validate ----

/// Validate log input without parsing it.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Log file to read, or `-` for stdin.
    #[arg(default_value = "-")]
    pub input: PathBuf,
}

// ---- parse ----

/// Parse log input into a structured error model.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Log file to read, or `-` for stdin.
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Show only the N most frequent error groups.
    #[arg(long)]
    pub top: Option<usize>,
}

// ---- request ----

/// Build an analysis request from log input.
#[derive(Args, Debug)]
pub struct RequestArgs {
    /// Log file to read, or `-` for stdin.
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Service identifier (overrides `analysis.service_id`).
    #[arg(long)]
    pub service: Option<String>,

    /// Directory holding the source files named in stack frames.
    ///
    /// Each location is read as `<DIR>/<file>`; no directory scanning is done.
    #[arg(long)]
    pub source_root: Option<PathBuf>,
}

// ---- config ----

/// Manage logsift configuration.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate the configuration file and report errors.
    Validate,
    /// Show the effective configuration (file + env overrides + defaults).
    Show {
        /// Show only a specific section (general, engine, analysis).
        #[arg(long)]
        section: Option<String>,
    },
}
