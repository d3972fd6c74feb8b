//! Per-button state derived from consecutive samples.

/// State of a mouse button for one frame.
///
/// `Pressed` and `Released` are one-frame edges; `Held` and `Up` are the
/// steady states in between.
///
/// ```text
/// Up ──down──> Pressed ──down──> Held
///  ^                              │
///  └──up─── Released <────up──────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Button is not down and was not down last frame.
    #[default]
    Up,
    /// Button is down and was down last frame.
    Held,
    /// Button went down this frame.
    Pressed,
    /// Button came up this frame.
    Released,
}

impl ButtonState {
    /// Classify a button from its previous and current held flags.
    #[inline]
    #[must_use]
    pub const fn from_transition(previous: bool, current: bool) -> Self {
        match (previous, current) {
            (false, true) => Self::Pressed,
            (true, false) => Self::Released,
            (true, true) => Self::Held,
            (false, false) => Self::Up,
        }
    }

    /// Returns `true` if the button is down this frame (including just pressed).
    #[inline]
    #[must_use]
    pub const fn is_down(self) -> bool {
        matches!(self, Self::Pressed | Self::Held)
    }

    /// Returns `true` for the one-frame `Pressed`/`Released` states.
    #[inline]
    #[must_use]
    pub const fn is_edge(self) -> bool {
        matches!(self, Self::Pressed | Self::Released)
    }
}
