//! Camera orientation driven by relative mouse motion.

use std::f32::consts::{PI, TAU};

use glam::{Mat4, Vec3};

use crate::constants::{PITCH_LIMIT, ROTATION_GAIN, START_POSITION};
use crate::sample::RawInputSample;

/// Look orientation in radians.
///
/// `pitch` stays within `[-PITCH_LIMIT, PITCH_LIMIT]` and `yaw` within
/// `(-PI, PI]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraOrientation {
    pub pitch: f32,
    pub yaw: f32,
}

impl CameraOrientation {
    /// Unit look direction.
    ///
    /// Pitch lifts the vector out of the horizontal plane, yaw rotates it
    /// about the vertical axis starting from `+Z`.
    #[must_use]
    pub fn look_direction(&self) -> Vec3 {
        let y = self.pitch.sin();
        let r = self.pitch.cos();
        let z = r * self.yaw.cos();
        let x = r * self.yaw.sin();
        Vec3::new(x, y, z)
    }

    /// Right-handed view matrix looking from `eye` along [`Self::look_direction`].
    #[must_use]
    pub fn view_matrix(&self, eye: Vec3) -> Mat4 {
        Mat4::look_at_rh(eye, eye + self.look_direction(), Vec3::Y)
    }
}

/// Wrap an angle into `(-PI, PI]`.
#[must_use]
pub fn wrap_yaw(yaw: f32) -> f32 {
    if yaw > -PI && yaw <= PI {
        return yaw;
    }
    let wrapped = (yaw + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Integrates relative-mode mouse deltas into a [`CameraOrientation`].
///
/// Each update adds to the current orientation; nothing is ever
/// overwritten, so the orientation drifts with the session and survives
/// position-mode switches.
#[derive(Debug, Clone)]
pub struct CameraController {
    orientation: CameraOrientation,
    eye: Vec3,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController {
    /// Create a controller at the starting eye position, looking down `+Z`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            orientation: CameraOrientation::default(),
            eye: Vec3::from_array(START_POSITION),
        }
    }

    /// Current orientation.
    #[must_use]
    pub const fn orientation(&self) -> CameraOrientation {
        self.orientation
    }

    /// Eye position the camera looks from.
    #[must_use]
    pub const fn eye(&self) -> Vec3 {
        self.eye
    }

    /// View matrix for the current orientation.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.orientation.view_matrix(self.eye)
    }

    /// Apply one sample. Does nothing unless the sample is relative.
    pub fn update(&mut self, sample: &RawInputSample) {
        if !sample.is_relative() {
            return;
        }
        self.apply_delta(sample.x, sample.y);
    }

    /// Integrate a pixel delta.
    ///
    /// Moving the mouse up (negative `dy`) raises the pitch.
    #[allow(clippy::cast_precision_loss)]
    pub fn apply_delta(&mut self, dx: i32, dy: i32) {
        let delta_yaw = dx as f32 * ROTATION_GAIN;
        let delta_pitch = dy as f32 * ROTATION_GAIN;

        self.orientation.pitch =
            (self.orientation.pitch - delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.orientation.yaw = wrap_yaw(self.orientation.yaw - delta_yaw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn facing(pitch: f32, yaw: f32) -> CameraController {
        CameraController {
            orientation: CameraOrientation { pitch, yaw },
            ..CameraController::new()
        }
    }

    #[test]
    fn absolute_samples_are_ignored() {
        let mut camera = CameraController::new();
        camera.update(&RawInputSample::absolute(400, -300));
        assert_eq!(camera.orientation(), CameraOrientation::default());
    }

    #[test]
    fn relative_delta_scales_by_gain() {
        let mut camera = CameraController::new();
        camera.update(&RawInputSample::relative(10, -25));
        let o = camera.orientation();
        assert_relative_eq!(o.yaw, -0.04, epsilon = 1e-6);
        assert_relative_eq!(o.pitch, 0.1, epsilon = 1e-6);
    }

    #[test]
    fn deltas_accumulate() {
        let mut camera = CameraController::new();
        for _ in 0..5 {
            camera.update(&RawInputSample::relative(1, 1));
        }
        let o = camera.orientation();
        assert_relative_eq!(o.yaw, -0.02, epsilon = 1e-6);
        assert_relative_eq!(o.pitch, -0.02, epsilon = 1e-6);
    }

    #[test]
    fn pitch_clamped_for_extreme_delta() {
        let mut camera = CameraController::new();
        camera.update(&RawInputSample::relative(0, -100_000));
        assert_relative_eq!(camera.orientation().pitch, PITCH_LIMIT);

        camera.update(&RawInputSample::relative(0, 100_000));
        assert_relative_eq!(camera.orientation().pitch, -PITCH_LIMIT);
    }

    #[test]
    fn pitch_never_exceeds_limit() {
        let mut camera = CameraController::new();
        for dy in [-700, 300, -90_000, 12, 45_000, -1, 1_000_000, -3] {
            camera.update(&RawInputSample::relative(0, dy));
            let pitch = camera.orientation().pitch;
            assert!(pitch.abs() <= PITCH_LIMIT, "pitch {pitch} out of range");
        }
    }

    #[test]
    fn yaw_wraps_past_pi() {
        let mut camera = facing(0.0, 3.0);
        // -75 px * 0.004 = -0.3 rad, subtracted from yaw
        camera.update(&RawInputSample::relative(-75, 0));
        assert_relative_eq!(camera.orientation().yaw, 3.3 - TAU, epsilon = 1e-4);
    }

    #[test]
    fn yaw_wraps_past_negative_pi() {
        let mut camera = facing(0.0, -3.0);
        camera.update(&RawInputSample::relative(75, 0));
        assert_relative_eq!(camera.orientation().yaw, -3.3 + TAU, epsilon = 1e-4);
    }

    #[test]
    fn yaw_stays_in_range_for_huge_deltas() {
        let mut camera = CameraController::new();
        for dx in [100_000, -3_000_000, 785, -786, 7_777_777] {
            camera.update(&RawInputSample::relative(dx, 0));
            let yaw = camera.orientation().yaw;
            assert!(yaw > -PI && yaw <= PI, "yaw {yaw} out of range");
        }
    }

    #[test]
    fn wrap_yaw_maps_negative_pi_to_pi() {
        assert_relative_eq!(wrap_yaw(-PI), PI);
        assert_relative_eq!(wrap_yaw(PI), PI);
        assert_relative_eq!(wrap_yaw(0.5), 0.5);
    }

    #[test]
    fn look_direction_defaults_to_forward() {
        let dir = CameraOrientation::default().look_direction();
        assert_relative_eq!(dir.z, 1.0);
        assert_relative_eq!(dir.x, 0.0);
        assert_relative_eq!(dir.y, 0.0);
    }

    #[test]
    fn view_matrix_looks_along_direction() {
        let camera = facing(0.3, 1.2);
        let view = camera.view_matrix();
        let ahead = camera.eye() + camera.orientation().look_direction();
        let in_view = view.transform_point3(ahead);
        // Right-handed view space looks down -Z
        assert_relative_eq!(in_view.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(in_view.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(in_view.z, -1.0, epsilon = 1e-5);
    }

    #[test]
    fn look_direction_is_unit_length() {
        let o = CameraOrientation {
            pitch: 0.7,
            yaw: -2.1,
        };
        assert_relative_eq!(o.look_direction().length(), 1.0, epsilon = 1e-6);
    }
}
