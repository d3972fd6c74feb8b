//! Core types and math for the mouse test harness.
//!
//! This crate provides the pieces shared by every other crate:
//! - The workspace error type
//! - The per-frame mouse sample and its enums
//! - Camera orientation and the relative-mode look controller
//! - Harness-wide constants

pub mod camera;
pub mod error;
pub mod sample;

pub use camera::{wrap_yaw, CameraController, CameraOrientation};
pub use error::{Error, Result};
pub use sample::{MouseButton, PositionMode, RawInputSample};

/// Harness-wide constants
pub mod constants {
    /// Look sensitivity in radians per pixel of relative motion, per axis.
    pub const ROTATION_GAIN: f32 = 0.004;
    /// Largest absolute pitch the camera may reach.
    pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;
    /// Fixed eye position of the camera inside the room.
    pub const START_POSITION: [f32; 3] = [0.0, -1.5, 0.0];
}
