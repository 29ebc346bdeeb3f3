//! Application logic behind the `spinwheel` binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod logging;
