//! Command handlers -- one module per subcommand, plus shared input and config helpers

pub mod config;
pub mod example;
pub mod parse;
pub mod request;
pub mod validate;

use std::path::{Path, PathBuf};

use tokio::io::AsyncReadExt;
use tracing::debug;

use logsift_core::config::LogsiftConfig;
use logsift_engine::{EngineConfig, LogEngine};

use crate::error::CliError;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_PATH: &str = "logsift.toml";

/// Input path that means "read from stdin".
const STDIN_MARKER: &str = "-";

/// Resolve which config file to load.
///
/// An explicit `--config` always wins. Otherwise `logsift.toml` is used only
/// if it exists, and `None` means built-in defaults.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_PATH);
            default.is_file().then_some(default)
        }
    }
}

/// Load the effective configuration.
///
/// Without a file, defaults plus `LOGSIFT_*` environment overrides are used.
pub async fn load_config(path: Option<&Path>) -> Result<LogsiftConfig, CliError> {
    match path {
        Some(path) => Ok(LogsiftConfig::load(path).await?),
        None => {
            let mut config = LogsiftConfig::default();
            config.apply_env_overrides();
            config.validate()?;
            Ok(config)
        }
    }
}

/// Human-readable name of a config source.
pub fn config_source_label(path: Option<&Path>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "<defaults>".to_owned(),
    }
}

/// Build a parsing engine from the `[engine]` section.
pub fn build_engine(config: &LogsiftConfig) -> Result<LogEngine, CliError> {
    let engine_config = EngineConfig::from_core(&config.engine);
    engine_config.validate()?;
    Ok(LogEngine::new(engine_config))
}

/// Read the whole log input from a file or stdin.
pub async fn read_input(path: &Path) -> Result<String, CliError> {
    if path.as_os_str() == STDIN_MARKER {
        let mut text = String::new();
        tokio::io::stdin().read_to_string(&mut text).await?;
        debug!(bytes = text.len(), "read log input from stdin");
        return Ok(text);
    }

    let text = tokio::fs::read_to_string(path).await?;
    debug!(path = %path.display(), bytes = text.len(), "read log input");
    Ok(text)
}

/// Human-readable name of an input source.
pub fn input_label(path: &Path) -> String {
    if path.as_os_str() == STDIN_MARKER {
        "<stdin>".to_owned()
    } else {
        path.display().to_string()
    }
}
