//! Command implementations

pub mod create;
pub mod latest;
pub mod name;
pub mod tail;

use anyhow::{Context, Result};
use std::path::Path;
use taglog_core::{constants::CONFIG_FILES, Identity, LogConfig};
use taglog_files::LogFiles;
use tracing::debug;

use crate::cli::Cli;

/// Build the log file creator from config files and command-line flags.
///
/// An explicit `--config` must load; otherwise the first config file found in
/// the working directory is used, falling back to defaults.
pub fn log_files(cli: &Cli) -> Result<LogFiles> {
    let mut config = match &cli.config {
        Some(path) => LogConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => discover_config(Path::new("."))?,
    };

    if let Some(dir) = &cli.dir {
        config.dir = dir.clone();
    }

    let mut identity = Identity::detect();
    if let Some(program) = &cli.program {
        identity = identity.with_program(program.as_str());
    }

    debug!("Using log directory {}", config.dir.display());
    Ok(LogFiles::new(config, identity))
}

fn discover_config(dir: &Path) -> Result<LogConfig> {
    if !CONFIG_FILES.iter().any(|name| dir.join(name).exists()) {
        return Ok(LogConfig::default());
    }
    let (config, path) = LogConfig::find_and_load(dir)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}
