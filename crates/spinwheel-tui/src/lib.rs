//! # spinwheel-tui
//!
//! Interactive terminal front end for the spin wheel, built on ratatui
//! with an Elm-style model/update/view loop.

pub mod bridge;
pub mod chart;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod logs;
pub mod messages;
pub mod model;
pub mod sparkline;
pub mod styles;
pub mod wheel_view;

pub use bridge::TuiBridgeObserver;
pub use keymap::KeyAction;
pub use logs::LogScrollState;
pub use messages::TuiMessage;
pub use model::TuiApp;
pub use sparkline::SpeedHistory;
