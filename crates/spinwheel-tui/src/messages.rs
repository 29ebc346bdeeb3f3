//! TUI message types (Elm Messages).

use spinwheel_core::{SpinOutcome, WheelState};

use crate::keymap::KeyAction;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum TuiMessage {
    /// Spin trigger enabled or disabled.
    TriggerEnabled(bool),
    /// New status line.
    Status(String),
    /// The wheel was redrawn at this state.
    Frame(WheelState),
    /// Spin progress in `[0, 1]`.
    Progress(f64),
    /// A spin settled.
    Complete(SpinOutcome),
    /// Non-fatal problem reported by the animator.
    Notice(String),
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Key press event forwarded from the event loop.
    KeyPress(KeyAction),
}
