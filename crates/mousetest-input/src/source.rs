//! The input source seam and its DPI capability.

use mousetest_core::{PositionMode, RawInputSample};

/// Provider of per-frame mouse samples.
///
/// One source is constructed by the application root and lent to whatever
/// needs it; nothing reaches a source through global state.
pub trait InputSource {
    /// Snapshot the current mouse state.
    ///
    /// In relative mode this drains the motion accumulated since the
    /// previous call.
    fn state(&mut self) -> RawInputSample;

    /// Switch how subsequent samples report position.
    fn set_mode(&mut self, mode: PositionMode);

    /// Zero the scroll wheel accumulator.
    fn reset_scroll_wheel_value(&mut self);

    /// Forward a new display scale to the source's DPI capability.
    fn set_dpi(&mut self, scale_factor: f64);
}

/// How a platform maps physical cursor coordinates to reported ones.
///
/// Implementations are chosen when the input source is built.
pub trait DpiScaling: std::fmt::Debug {
    /// Record a new display scale factor.
    fn set_scale_factor(&mut self, scale_factor: f64);

    /// Convert a physical cursor coordinate to the reported one.
    fn to_reported(&self, physical: f64) -> f64;
}

/// Reports physical pixels unchanged and ignores scale changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDpiScaling;

impl DpiScaling for NoDpiScaling {
    fn set_scale_factor(&mut self, _scale_factor: f64) {}

    fn to_reported(&self, physical: f64) -> f64 {
        physical
    }
}

/// Reports logical pixels at the current display scale.
#[derive(Debug, Clone, Copy)]
pub struct LogicalDpiScaling {
    scale_factor: f64,
}

impl LogicalDpiScaling {
    /// Create with an initial scale factor. Non-positive values fall back to 1.0.
    #[must_use]
    pub fn new(scale_factor: f64) -> Self {
        let mut scaling = Self { scale_factor: 1.0 };
        scaling.set_scale_factor(scale_factor);
        scaling
    }
}

impl Default for LogicalDpiScaling {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl DpiScaling for LogicalDpiScaling {
    fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor.is_finite() && scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        } else {
            tracing::warn!("Ignoring invalid scale factor {scale_factor}");
        }
    }

    fn to_reported(&self, physical: f64) -> f64 {
        physical / self.scale_factor
    }
}
