//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;
use spinwheel_core::RandomPicker;
use tracing::Level;

/// Spin a wheel of fortune in the terminal.
#[derive(Parser, Debug)]
#[command(name = "spinwheel", version, about)]
pub struct AppConfig {
    /// Spin once without the terminal UI and print the result.
    #[arg(long)]
    pub headless: bool,

    /// Print the outcome as JSON (headless only).
    #[arg(long, requires = "headless")]
    pub json: bool,

    /// Only print the result line.
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output and debug logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Seed for the segment choice, for reproducible spins.
    #[arg(long, env = "SPINWHEEL_SEED")]
    pub seed: Option<u64>,

    /// Write the final frame as a PNG image (headless only).
    #[arg(long, value_name = "PATH", requires = "headless")]
    pub snapshot: Option<PathBuf>,

    /// Append logs to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Most verbose level that is logged.
    #[must_use]
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }

    /// Segment picker honouring `--seed`.
    #[must_use]
    pub fn picker(&self) -> RandomPicker {
        self.seed
            .map_or_else(RandomPicker::from_entropy, RandomPicker::seeded)
    }
}
