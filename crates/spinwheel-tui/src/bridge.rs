//! Bridge between the spin animator and TUI messages.

use crossbeam_channel::Sender;
use spinwheel_core::{SpinObserver, SpinOutcome, WheelError, WheelState};

use crate::messages::TuiMessage;

/// Forwards animator callbacks to the TUI channel without blocking.
///
/// The model drains the channel once per loop iteration, so observers never
/// touch UI state directly.
pub struct TuiBridgeObserver {
    tx: Sender<TuiMessage>,
}

impl TuiBridgeObserver {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>) -> Self {
        Self { tx }
    }
}

impl SpinObserver for TuiBridgeObserver {
    fn on_trigger_enabled(&self, enabled: bool) {
        let _ = self.tx.try_send(TuiMessage::TriggerEnabled(enabled));
    }

    fn on_status(&self, text: &str) {
        let _ = self.tx.try_send(TuiMessage::Status(text.to_string()));
    }

    fn on_frame(&self, state: &WheelState) -> Result<(), WheelError> {
        self.tx
            .try_send(TuiMessage::Frame(*state))
            .map_err(|err| WheelError::Render(format!("frame not delivered: {err}")))
    }

    fn on_progress(&self, progress: f64) {
        let _ = self.tx.try_send(TuiMessage::Progress(progress));
    }

    fn on_spin_complete(&self, outcome: &SpinOutcome) {
        let _ = self.tx.try_send(TuiMessage::Complete(outcome.clone()));
    }

    fn on_notice(&self, message: &str) {
        let _ = self.tx.try_send(TuiMessage::Notice(message.to_string()));
    }
}
