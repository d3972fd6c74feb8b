//! Input source backed by winit window and device events.

use std::sync::Arc;

use mousetest_core::{MouseButton, PositionMode, RawInputSample};
use winit::event::{
    DeviceEvent, ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent,
};
use winit::window::{CursorGrabMode, Window};

use crate::source::{DpiScaling, InputSource, NoDpiScaling};

/// Scroll units reported per wheel notch.
pub const WHEEL_DELTA: i32 = 120;

fn map_button(button: WinitMouseButton) -> Option<MouseButton> {
    match button {
        WinitMouseButton::Left => Some(MouseButton::Left),
        WinitMouseButton::Right => Some(MouseButton::Right),
        WinitMouseButton::Middle => Some(MouseButton::Middle),
        WinitMouseButton::Back => Some(MouseButton::X1),
        WinitMouseButton::Forward => Some(MouseButton::X2),
        WinitMouseButton::Other(_) => None,
    }
}

/// Mouse input source fed by winit events.
///
/// Events accumulate between calls to [`InputSource::state`]. In relative
/// mode the sample carries the raw device motion gathered since the last
/// call; fractional motion is carried over rather than dropped.
#[derive(Debug)]
pub struct WinitMouse {
    /// Window that receives cursor grab changes.
    window: Option<Arc<Window>>,
    /// Current position mode.
    mode: PositionMode,
    /// Last cursor position in physical pixels.
    position: (f64, f64),
    /// Raw motion not yet reported.
    pending_motion: (f64, f64),
    /// Wheel accumulator.
    scroll_wheel_value: i32,
    /// Fractional pixel scroll not yet reported.
    pending_scroll: f64,
    /// Held flags in [`MouseButton::ALL`] order.
    buttons: [bool; 5],
    /// Platform DPI capability.
    dpi: Box<dyn DpiScaling>,
}

impl Default for WinitMouse {
    fn default() -> Self {
        Self::new(Box::new(NoDpiScaling))
    }
}

impl WinitMouse {
    /// Create a source with the given DPI capability.
    #[must_use]
    pub fn new(dpi: Box<dyn DpiScaling>) -> Self {
        Self {
            window: None,
            mode: PositionMode::Absolute,
            position: (0.0, 0.0),
            pending_motion: (0.0, 0.0),
            scroll_wheel_value: 0,
            pending_scroll: 0.0,
            buttons: [false; 5],
            dpi,
        }
    }

    /// Attach the window whose cursor follows the position mode.
    pub fn set_window(&mut self, window: Arc<Window>) {
        self.dpi.set_scale_factor(window.scale_factor());
        self.window = Some(window);
        self.apply_cursor_mode();
    }

    /// Current position mode.
    #[must_use]
    pub const fn mode(&self) -> PositionMode {
        self.mode
    }

    /// Process a window event.
    ///
    /// Returns `true` if the event was consumed.
    pub fn process_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.set_position(position.x, position.y);
                true
            }
            WindowEvent::MouseInput { button, state, .. } => {
                self.process_button(*button, *state);
                true
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.process_scroll(*delta);
                true
            }
            _ => false,
        }
    }

    /// Process a device event (raw motion for relative mode).
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.add_raw_motion(delta.0, delta.1);
        }
    }

    /// Process cursor position update in physical pixels.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.position = (x, y);
    }

    /// Process raw mouse motion. Ignored outside relative mode.
    pub fn add_raw_motion(&mut self, delta_x: f64, delta_y: f64) {
        if self.mode == PositionMode::Relative {
            self.pending_motion.0 += delta_x;
            self.pending_motion.1 += delta_y;
        }
    }

    /// Process mouse button event.
    pub fn process_button(&mut self, button: WinitMouseButton, state: ElementState) {
        let Some(button) = map_button(button) else {
            return;
        };
        self.buttons[button as usize] = state == ElementState::Pressed;
    }

    /// Process scroll wheel event.
    ///
    /// The accumulator wraps on overflow.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn process_scroll(&mut self, delta: MouseScrollDelta) {
        match delta {
            MouseScrollDelta::LineDelta(_, y) => {
                let notches = (y * WHEEL_DELTA as f32).round() as i32;
                self.scroll_wheel_value = self.scroll_wheel_value.wrapping_add(notches);
            }
            MouseScrollDelta::PixelDelta(pos) => {
                self.pending_scroll += pos.y;
                let whole = self.pending_scroll.trunc();
                self.pending_scroll -= whole;
                self.scroll_wheel_value = self.scroll_wheel_value.wrapping_add(whole as i32);
            }
        }
    }

    /// Mark every button as up.
    ///
    /// Call when the window loses focus; release events are not delivered
    /// to unfocused windows.
    pub fn release_all_buttons(&mut self) {
        self.buttons = [false; 5];
    }

    fn apply_cursor_mode(&self) {
        let Some(window) = &self.window else {
            return;
        };

        let (grab_mode, visible) = match self.mode {
            PositionMode::Absolute => (CursorGrabMode::None, true),
            PositionMode::Relative => (CursorGrabMode::Locked, false),
        };

        if let Err(e) = window.set_cursor_grab(grab_mode) {
            // Fall back to confining where locking is unsupported
            if grab_mode == CursorGrabMode::Locked {
                if let Err(e2) = window.set_cursor_grab(CursorGrabMode::Confined) {
                    tracing::warn!("Failed to confine cursor: {e2}");
                }
            } else {
                tracing::warn!("Failed to set cursor grab mode: {e}");
            }
        }

        window.set_cursor_visible(visible);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn drain_motion(&mut self) -> (i32, i32) {
        let dx = self.pending_motion.0.trunc();
        let dy = self.pending_motion.1.trunc();
        self.pending_motion.0 -= dx;
        self.pending_motion.1 -= dy;
        (dx as i32, dy as i32)
    }
}

impl InputSource for WinitMouse {
    #[allow(clippy::cast_possible_truncation)]
    fn state(&mut self) -> RawInputSample {
        let (x, y) = match self.mode {
            PositionMode::Absolute => (
                self.dpi.to_reported(self.position.0) as i32,
                self.dpi.to_reported(self.position.1) as i32,
            ),
            PositionMode::Relative => self.drain_motion(),
        };

        let mut sample = RawInputSample {
            x,
            y,
            scroll_wheel_value: self.scroll_wheel_value,
            position_mode: self.mode,
            ..RawInputSample::default()
        };
        for button in MouseButton::ALL {
            *sample.button_mut(button) = self.buttons[button as usize];
        }
        sample
    }

    fn set_mode(&mut self, mode: PositionMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.pending_motion = (0.0, 0.0);
        self.apply_cursor_mode();
    }

    fn reset_scroll_wheel_value(&mut self) {
        self.scroll_wheel_value = 0;
        self.pending_scroll = 0.0;
    }

    fn set_dpi(&mut self, scale_factor: f64) {
        self.dpi.set_scale_factor(scale_factor);
    }
}
