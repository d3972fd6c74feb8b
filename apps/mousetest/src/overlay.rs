//! Diagnostic overlay built from the retained frame state.

use std::fmt;

use glam::Vec3;
use mousetest_core::{MouseButton, PositionMode};

use crate::frame_loop::FrameLoop;

/// Read-only view of one frame for the draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    /// Each button with its held flag, in display order.
    pub buttons: [(MouseButton, bool); 5],
    pub scroll_wheel_value: i32,
    pub mode: PositionMode,
    /// Description of the last button edge, kept until a newer one happens.
    pub last_edge: Option<String>,
    /// Cursor position; only meaningful in absolute mode.
    pub cursor: Option<(i32, i32)>,
    pub look_direction: Vec3,
}

impl Overlay {
    /// Capture the overlay for the frame just processed.
    #[must_use]
    pub fn capture(frames: &FrameLoop) -> Self {
        let sample = frames.sample();
        Self {
            buttons: MouseButton::ALL.map(|button| (button, sample.button(button))),
            scroll_wheel_value: sample.scroll_wheel_value,
            mode: sample.position_mode,
            last_edge: frames.last_edge().map(|edge| edge.to_string()),
            cursor: (sample.position_mode == PositionMode::Absolute).then_some((sample.x, sample.y)),
            look_direction: frames.orientation().look_direction(),
        }
    }
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (button, held)) in self.buttons.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if *held {
                write!(f, "[{button}]")?;
            } else {
                write!(f, "{button}")?;
            }
        }

        write!(f, " | {} | {}", self.scroll_wheel_value, self.mode)?;
        if let Some((x, y)) = self.cursor {
            write!(f, " ({x}, {y})")?;
        }
        if let Some(edge) = &self.last_edge {
            write!(f, " | {edge}")?;
        }

        let d = self.look_direction;
        write!(f, " | look ({:.2}, {:.2}, {:.2})", d.x, d.y, d.z)
    }
}

/// Presents the overlay as the window title.
#[derive(Debug, Default)]
pub struct TitlePresenter {
    prefix: String,
    current: String,
}

impl TitlePresenter {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            current: String::new(),
        }
    }

    /// Title for this overlay, or `None` if it matches what is shown.
    pub fn refresh(&mut self, overlay: &Overlay) -> Option<&str> {
        let title = format!("{} | {overlay}", self.prefix);
        if title == self.current {
            return None;
        }
        self.current = title;
        Some(&self.current)
    }
}
