//! # spinwheel-cli
//!
//! Headless spin runner, result output, progress display, and shell
//! completion.

pub mod completion;
pub mod headless;
pub mod output;
pub mod presenter;
pub mod progress;
pub mod ui;

pub use headless::run_spin;
pub use presenter::CLIResultPresenter;
pub use progress::ProgressBarObserver;
