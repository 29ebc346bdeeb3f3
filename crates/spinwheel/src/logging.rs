//! Tracing subscriber setup.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Where log records are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    /// Appended to a file (`--log-file`).
    File(PathBuf),
    /// Standard error, for headless runs.
    Stderr,
    /// Dropped; the terminal UI owns the screen.
    Discard,
}

impl LogDestination {
    #[must_use]
    pub fn for_config(config: &AppConfig) -> Self {
        match &config.log_file {
            Some(path) => Self::File(path.clone()),
            None if config.headless => Self::Stderr,
            None => Self::Discard,
        }
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` directives apply on top of the level chosen by `--verbose`.
pub fn init(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(config.log_level().into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match LogDestination::for_config(config) {
        LogDestination::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        LogDestination::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogDestination::Discard => builder.with_writer(std::io::sink).try_init(),
    };
    installed.map_err(|err| anyhow::anyhow!("{err}"))
}
