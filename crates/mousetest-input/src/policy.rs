//! Position-mode switching driven by the left button and an explicit toggle.

use mousetest_core::PositionMode;
use tracing::debug;

use crate::button_state::ButtonState;
use crate::source::InputSource;

/// Decides which position mode the input source should be in next.
///
/// Pressing the left button requests relative mode and releasing it
/// requests absolute mode (click-and-drag to look). A toggle may also be
/// requested at any time; its target is the opposite of the mode observed
/// before the request, and it is latched until the next
/// [`apply`](Self::apply). When a left-button edge and a latched toggle land
/// in the same frame, the edge wins and the toggle is dropped.
#[derive(Debug, Clone, Default)]
pub struct ModeSwitchPolicy {
    last_mode: PositionMode,
    /// Mode a pending toggle will request.
    toggle_target: Option<PositionMode>,
}

impl ModeSwitchPolicy {
    /// Create a policy that assumes absolute mode until told otherwise.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the mode reported by this frame's sample.
    pub fn observe(&mut self, mode: PositionMode) {
        self.last_mode = mode;
    }

    /// Latch a toggle away from the last observed mode.
    ///
    /// The target is fixed now; samples observed before the next
    /// [`apply`](Self::apply) do not change it.
    pub fn request_toggle(&mut self) {
        self.toggle_target = Some(self.last_mode.toggled());
    }

    /// Resolve this frame's mode request from the left button's state.
    ///
    /// Clears any latched toggle. At most one mode is returned.
    pub fn decide(&mut self, left: ButtonState) -> Option<PositionMode> {
        let toggle = self.toggle_target.take();
        match left {
            ButtonState::Pressed => {
                if toggle.is_some() {
                    debug!("Toggle discarded: left button pressed this frame");
                }
                Some(PositionMode::Relative)
            }
            ButtonState::Released => {
                if toggle.is_some() {
                    debug!("Toggle discarded: left button released this frame");
                }
                Some(PositionMode::Absolute)
            }
            ButtonState::Held | ButtonState::Up => toggle,
        }
    }

    /// Resolve this frame's request and send it to the source.
    pub fn apply<S: InputSource + ?Sized>(
        &mut self,
        left: ButtonState,
        source: &mut S,
    ) -> Option<PositionMode> {
        let request = self.decide(left);
        if let Some(mode) = request {
            debug!("Requesting {mode} mode");
            source.set_mode(mode);
        }
        request
    }

    /// Zero the source's scroll wheel accumulator, whatever the mode.
    pub fn reset_scroll<S: InputSource + ?Sized>(&self, source: &mut S) {
        debug!("Resetting scroll wheel value");
        source.reset_scroll_wheel_value();
    }
}
