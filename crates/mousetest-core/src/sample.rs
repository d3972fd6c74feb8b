//! Per-frame mouse snapshots.

use std::fmt;

/// How the `x`/`y` fields of a [`RawInputSample`] are to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PositionMode {
    /// Pixel coordinates relative to the window origin.
    #[default]
    Absolute,
    /// Motion delta since the previous sample.
    Relative,
}

impl PositionMode {
    /// The opposite mode.
    #[inline]
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Absolute => Self::Relative,
            Self::Relative => Self::Absolute,
        }
    }

    /// Overlay label for the mode.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Absolute => "Absolute",
            Self::Relative => "Relative",
        }
    }
}

impl fmt::Display for PositionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Physical mouse button.
///
/// Declaration order is the priority order used when several buttons
/// change in the same frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    X1,
    X2,
}

impl MouseButton {
    /// All buttons, in priority order.
    pub const ALL: [Self; 5] = [Self::Left, Self::Right, Self::Middle, Self::X1, Self::X2];

    /// Overlay label for the button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Left => "LeftButton",
            Self::Right => "RightButton",
            Self::Middle => "MiddleButton",
            Self::X1 => "XButton1",
            Self::X2 => "XButton2",
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One frame's worth of mouse state, as reported by an input source.
///
/// `x`/`y` are pixel coordinates in [`PositionMode::Absolute`] and motion
/// deltas in [`PositionMode::Relative`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct RawInputSample {
    pub x: i32,
    pub y: i32,
    /// Accumulated wheel movement, reset only on request.
    pub scroll_wheel_value: i32,
    pub position_mode: PositionMode,
    pub left_button: bool,
    pub right_button: bool,
    pub middle_button: bool,
    pub x_button1: bool,
    pub x_button2: bool,
}

impl RawInputSample {
    /// A sample at an absolute cursor position with no buttons down.
    #[must_use]
    pub fn absolute(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// A relative-mode sample carrying a motion delta.
    #[must_use]
    pub fn relative(dx: i32, dy: i32) -> Self {
        Self {
            x: dx,
            y: dy,
            position_mode: PositionMode::Relative,
            ..Self::default()
        }
    }

    /// Set one button's held flag.
    #[must_use]
    pub fn with_button(mut self, button: MouseButton, held: bool) -> Self {
        *self.button_mut(button) = held;
        self
    }

    /// Set the scroll wheel accumulator.
    #[must_use]
    pub const fn with_scroll(mut self, value: i32) -> Self {
        self.scroll_wheel_value = value;
        self
    }

    /// Whether a button is held in this sample.
    #[must_use]
    pub const fn button(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left_button,
            MouseButton::Right => self.right_button,
            MouseButton::Middle => self.middle_button,
            MouseButton::X1 => self.x_button1,
            MouseButton::X2 => self.x_button2,
        }
    }

    /// Mutable access to a button's held flag.
    pub fn button_mut(&mut self, button: MouseButton) -> &mut bool {
        match button {
            MouseButton::Left => &mut self.left_button,
            MouseButton::Right => &mut self.right_button,
            MouseButton::Middle => &mut self.middle_button,
            MouseButton::X1 => &mut self.x_button1,
            MouseButton::X2 => &mut self.x_button2,
        }
    }

    /// Returns `true` in relative mode.
    #[inline]
    #[must_use]
    pub fn is_relative(&self) -> bool {
        self.position_mode == PositionMode::Relative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_flips_mode() {
        assert_eq!(PositionMode::Absolute.toggled(), PositionMode::Relative);
        assert_eq!(PositionMode::Relative.toggled(), PositionMode::Absolute);
    }

    #[test]
    fn with_button_sets_only_that_button() {
        let sample = RawInputSample::absolute(10, 20).with_button(MouseButton::X1, true);
        assert!(sample.x_button1);
        for button in [MouseButton::Left, MouseButton::Right, MouseButton::Middle, MouseButton::X2] {
            assert!(!sample.button(button), "{button} should be up");
        }
        assert_eq!((sample.x, sample.y), (10, 20));
        assert_eq!(sample.position_mode, PositionMode::Absolute);
    }

    #[test]
    fn relative_constructor() {
        let sample = RawInputSample::relative(-3, 7);
        assert!(sample.is_relative());
        assert_eq!((sample.x, sample.y), (-3, 7));
    }
}
