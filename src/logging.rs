use std::fs::{self, File};
use std::str::FromStr;
use std::sync::Mutex;

use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing::Level;

use crate::config::LoggingConfig;

/// Sends `tracing` output to the configured log file. The terminal belongs
/// to the dashboard, so nothing is ever written to stdout or stderr.
pub fn init_file_logging(config: &LoggingConfig) -> Result<()> {
    let Some(path) = config.file_path() else {
        return Err(eyre!("no log file configured and no cache directory found"));
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }
    let file =
        File::create(&path).wrap_err_with(|| format!("failed to create {}", path.display()))?;
    let level = Level::from_str(&config.level).unwrap_or(Level::INFO);

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(level)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| eyre!("failed to set tracing subscriber: {e}"))
}
