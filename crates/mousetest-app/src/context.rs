//! Application context.

use std::sync::Arc;

use winit::window::Window;

use crate::timer::StepTimer;

/// Application context shared across all app methods.
///
/// Owns the window handle and the frame timer.
pub struct AppContext {
    /// The window handle.
    pub window: Arc<Window>,
    /// Frame timer.
    pub timer: StepTimer,
}

impl AppContext {
    pub(crate) fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            timer: StepTimer::new(),
        }
    }

    /// Display scale factor of the window.
    pub fn scale_factor(&self) -> f64 {
        self.window.scale_factor()
    }

    /// Number of updates run so far.
    pub const fn frame_count(&self) -> u64 {
        self.timer.frame_count()
    }
}
