//! Observer that redraws the raster frame on every animation tick.

use std::cell::{Ref, RefCell};

use spinwheel_core::{SpinObserver, WheelError, WheelState};

use crate::renderer::WheelRenderer;

/// Renders each frame the animator reports.
///
/// Trigger and status callbacks are ignored; pair it with another observer
/// through `ObserverSet` when a front end needs them.
pub struct RenderObserver {
    renderer: RefCell<WheelRenderer>,
}

impl RenderObserver {
    #[must_use]
    pub fn new(renderer: WheelRenderer) -> Self {
        Self {
            renderer: RefCell::new(renderer),
        }
    }

    /// Borrow the renderer (e.g. to save the last frame).
    #[must_use]
    pub fn renderer(&self) -> Ref<'_, WheelRenderer> {
        self.renderer.borrow()
    }

    #[must_use]
    pub fn into_inner(self) -> WheelRenderer {
        self.renderer.into_inner()
    }
}

impl SpinObserver for RenderObserver {
    fn on_trigger_enabled(&self, _enabled: bool) {}

    fn on_status(&self, _text: &str) {}

    fn on_frame(&self, state: &WheelState) -> Result<(), WheelError> {
        let mut renderer = self
            .renderer
            .try_borrow_mut()
            .map_err(|_| WheelError::Render("renderer busy".into()))?;
        renderer.render(state).map(|_| ())
    }
}
