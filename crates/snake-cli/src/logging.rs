use std::{fs::File, path::PathBuf};

use anyhow::Context as _;
use simplelog::{Config, LevelFilter, WriteLogger};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct LogArg {
    /// Write log messages to this file (the terminal itself is taken by the game)
    #[clap(long)]
    log_file: Option<PathBuf>,
    /// Minimum level of messages written to the log file
    #[clap(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

/// Installs a file logger when `--log-file` is given; logging stays off otherwise.
pub(crate) fn init(arg: &LogArg) -> anyhow::Result<()> {
    let LogArg {
        log_file,
        log_level,
    } = arg;

    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    WriteLogger::init(*log_level, Config::default(), file)
        .context("failed to initialize logger")?;
    log::info!("logging to {} at level {log_level}", path.display());
    Ok(())
}
