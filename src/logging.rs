//! Log subscriber setup.
//!
//! While the terminal interface owns the screen, log lines go to the file named by
//! [`Config::log_file`]; in headless mode they go to stderr. The filter is read from `RUST_LOG`
//! and falls back to [`DEFAULT_FILTER`].

use std::{fs::File, io, sync::Mutex};

use color_eyre::eyre::{eyre, Result, WrapErr as _};
use tracing_subscriber::{fmt::writer::BoxMakeWriter, EnvFilter};

use crate::config::Config;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "mazebot=info";

/// Installs the global log subscriber.
///
/// # Errors
///
/// This function may return errors if the log file cannot be created or a global subscriber is
/// already installed.
pub fn init(config: &Config) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let writer = if config.headless {
        BoxMakeWriter::new(io::stderr)
    } else {
        let file = File::create(&config.log_file).wrap_err_with(|| {
            format!("failed to create log file {}", config.log_file.display())
        })?;
        BoxMakeWriter::new(Mutex::new(file))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))
}
