//! Press/release edge detection across consecutive samples.

use std::fmt;

use mousetest_core::{MouseButton, RawInputSample};

use crate::button_state::ButtonState;

/// Direction of a button edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Pressed,
    Released,
}

/// A single button edge observed during one [`ButtonStateTracker::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonEdge {
    pub button: MouseButton,
    pub kind: EdgeKind,
}

impl fmt::Display for ButtonEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.kind {
            EdgeKind::Pressed => "pressed",
            EdgeKind::Released => "released",
        };
        write!(f, "{} was {verb}", self.button.label())
    }
}

/// Derives per-button [`ButtonState`]s from successive samples.
///
/// The public fields report the states computed by the last `update`.
/// History is the previous sample's five held flags; after [`reset`](Self::reset)
/// every button is treated as previously up.
#[derive(Debug, Clone, Default)]
pub struct ButtonStateTracker {
    pub left_button: ButtonState,
    pub right_button: ButtonState,
    pub middle_button: ButtonState,
    pub x_button1: ButtonState,
    pub x_button2: ButtonState,
    previous: [bool; 5],
}

impl ButtonStateTracker {
    /// Create a tracker with every button up.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a new sample into the tracker.
    ///
    /// Returns the highest-priority edge of this frame, if any: buttons are
    /// checked in [`MouseButton::ALL`] order, pressed before released.
    pub fn update(&mut self, sample: &RawInputSample) -> Option<ButtonEdge> {
        let mut edge = None;

        for (index, button) in MouseButton::ALL.into_iter().enumerate() {
            let current = sample.button(button);
            let state = ButtonState::from_transition(self.previous[index], current);
            self.previous[index] = current;
            *self.state_mut(button) = state;

            if edge.is_none() && state.is_edge() {
                let kind = if state.is_down() {
                    EdgeKind::Pressed
                } else {
                    EdgeKind::Released
                };
                edge = Some(ButtonEdge { button, kind });
            }
        }

        edge
    }

    /// Forget history so the next update sees every button as previously up.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// State of one button for the last processed frame.
    #[must_use]
    pub const fn state(&self, button: MouseButton) -> ButtonState {
        match button {
            MouseButton::Left => self.left_button,
            MouseButton::Right => self.right_button,
            MouseButton::Middle => self.middle_button,
            MouseButton::X1 => self.x_button1,
            MouseButton::X2 => self.x_button2,
        }
    }

    fn state_mut(&mut self, button: MouseButton) -> &mut ButtonState {
        match button {
            MouseButton::Left => &mut self.left_button,
            MouseButton::Right => &mut self.right_button,
            MouseButton::Middle => &mut self.middle_button,
            MouseButton::X1 => &mut self.x_button1,
            MouseButton::X2 => &mut self.x_button2,
        }
    }
}
