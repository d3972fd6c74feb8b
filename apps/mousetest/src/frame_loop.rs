//! Per-frame orchestration of input, camera and mode switching.

use mousetest_core::{CameraController, CameraOrientation, PositionMode, RawInputSample};
use mousetest_input::{ButtonEdge, ButtonStateTracker, InputSource, ModeSwitchPolicy};

/// What a single [`FrameLoop::tick`] produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// Highest-priority button edge of this frame.
    pub edge: Option<ButtonEdge>,
    /// Mode requested from the input source during this frame.
    pub mode_request: Option<PositionMode>,
}

/// Input-side state of the harness, advanced once per frame.
///
/// Everything here is owned by the frame loop; the input source is lent to
/// each call and never stored.
#[derive(Debug)]
pub struct FrameLoop {
    tracker: ButtonStateTracker,
    camera: CameraController,
    policy: ModeSwitchPolicy,
    /// Sticky description source for the overlay.
    last_edge: Option<ButtonEdge>,
    /// Sample retained for the draw pass.
    sample: RawInputSample,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tracker: ButtonStateTracker::new(),
            camera: CameraController::new(),
            policy: ModeSwitchPolicy::new(),
            last_edge: None,
            sample: RawInputSample::default(),
        }
    }

    /// Run one frame: poll, look, track edges, switch mode, retain.
    pub fn tick<S: InputSource + ?Sized>(&mut self, source: &mut S) -> FrameReport {
        let sample = source.state();
        self.policy.observe(sample.position_mode);

        if sample.is_relative() {
            self.camera.update(&sample);
        }

        let edge = self.tracker.update(&sample);
        if edge.is_some() {
            self.last_edge = edge;
        }

        let mode_request = self.policy.apply(self.tracker.left_button, source);

        self.sample = sample;

        FrameReport { edge, mode_request }
    }

    /// Ask for the position mode to flip on the next tick.
    pub fn request_toggle(&mut self) {
        self.policy.request_toggle();
    }

    /// Zero the source's scroll wheel accumulator.
    pub fn reset_scroll<S: InputSource + ?Sized>(&self, source: &mut S) {
        self.policy.reset_scroll(source);
    }

    /// Forget button history after a suspend.
    ///
    /// Camera orientation, mode and the last edge description are kept.
    pub fn on_resuming(&mut self) {
        self.tracker.reset();
    }

    /// Sample retained from the last tick.
    #[must_use]
    pub const fn sample(&self) -> &RawInputSample {
        &self.sample
    }

    /// Most recent button edge seen by any tick.
    #[must_use]
    pub const fn last_edge(&self) -> Option<ButtonEdge> {
        self.last_edge
    }

    #[must_use]
    pub const fn orientation(&self) -> CameraOrientation {
        self.camera.orientation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mousetest_core::constants::ROTATION_GAIN;
    use mousetest_core::MouseButton;
    use mousetest_input::{ButtonState, EdgeKind};
    use mousetest_test::{ScriptedSource, SourceRequest};

    fn left(held: bool) -> RawInputSample {
        RawInputSample::absolute(0, 0).with_button(MouseButton::Left, held)
    }

    #[test]
    fn left_press_requests_relative_and_release_absolute() {
        let mut source = ScriptedSource::new();
        source.extend([left(false), left(true), left(true), left(false), left(false)]);
        let mut frames = FrameLoop::new();

        let reports: Vec<_> = (0..5).map(|_| frames.tick(&mut source)).collect();

        assert_eq!(reports[0].mode_request, None);
        assert_eq!(reports[1].mode_request, Some(PositionMode::Relative));
        assert_eq!(reports[2].mode_request, None);
        assert_eq!(reports[3].mode_request, Some(PositionMode::Absolute));
        assert_eq!(reports[4].mode_request, None);
        assert_eq!(
            source.mode_requests(),
            [PositionMode::Relative, PositionMode::Absolute]
        );
    }

    #[test]
    fn other_buttons_never_request_modes() {
        let mut source = ScriptedSource::new();
        for button in [MouseButton::Right, MouseButton::Middle, MouseButton::X1, MouseButton::X2] {
            source.push(RawInputSample::default().with_button(button, true));
            source.push(RawInputSample::default());
        }
        let mut frames = FrameLoop::new();
        for _ in 0..8 {
            frames.tick(&mut source);
        }
        assert!(source.mode_requests().is_empty());
    }

    #[test]
    fn camera_moves_only_in_relative_mode() {
        let mut source = ScriptedSource::new();
        source.push(RawInputSample::absolute(100, 100));
        let mut frames = FrameLoop::new();

        frames.tick(&mut source);
        assert_eq!(frames.orientation(), CameraOrientation::default());

        source.set_mode(PositionMode::Relative);
        source.push(RawInputSample::relative(10, 20));
        frames.tick(&mut source);

        let o = frames.orientation();
        assert_relative_eq!(o.yaw, -10.0 * ROTATION_GAIN, epsilon = 1e-6);
        assert_relative_eq!(o.pitch, -20.0 * ROTATION_GAIN, epsilon = 1e-6);
    }

    #[test]
    fn drag_to_look_applies_from_next_frame() {
        let mut source = ScriptedSource::new();
        source.extend([
            RawInputSample::relative(50, 0).with_button(MouseButton::Left, true),
            RawInputSample::relative(50, 0).with_button(MouseButton::Left, true),
        ]);
        let mut frames = FrameLoop::new();

        // Press frame is still reported in absolute mode
        frames.tick(&mut source);
        assert_eq!(frames.orientation(), CameraOrientation::default());
        assert_eq!(source.mode(), PositionMode::Relative);

        frames.tick(&mut source);
        assert_relative_eq!(frames.orientation().yaw, -50.0 * ROTATION_GAIN, epsilon = 1e-6);
    }

    #[test]
    fn last_edge_is_sticky() {
        let mut source = ScriptedSource::new();
        source.extend([
            RawInputSample::default().with_button(MouseButton::Right, true),
            RawInputSample::default().with_button(MouseButton::Right, true),
            RawInputSample::default().with_button(MouseButton::Right, true),
        ]);
        let mut frames = FrameLoop::new();
        assert_eq!(frames.last_edge(), None);

        let first = frames.tick(&mut source);
        assert!(first.edge.is_some());
        for _ in 0..2 {
            let report = frames.tick(&mut source);
            assert_eq!(report.edge, None);
        }

        let edge = frames.last_edge().unwrap();
        assert_eq!(edge.button, MouseButton::Right);
        assert_eq!(edge.kind, EdgeKind::Pressed);
        assert_eq!(edge.to_string(), "RightButton was pressed");
    }

    #[test]
    fn toggle_flips_mode_observed_before_request() {
        let mut source = ScriptedSource::new();
        source.push(RawInputSample::default());
        let mut frames = FrameLoop::new();

        frames.request_toggle();
        let report = frames.tick(&mut source);
        assert_eq!(report.mode_request, Some(PositionMode::Relative));

        // The next frame reports the new mode; toggling after it goes back
        frames.tick(&mut source);
        frames.request_toggle();
        let report = frames.tick(&mut source);
        assert_eq!(report.mode_request, Some(PositionMode::Absolute));

        let report = frames.tick(&mut source);
        assert_eq!(report.mode_request, None);
    }

    #[test]
    fn toggle_right_after_drag_starts_uses_pre_switch_mode() {
        let mut source = ScriptedSource::new();
        source.extend([left(true), left(true)]);
        let mut frames = FrameLoop::new();

        // Press frame still reports absolute, then asks for relative
        let report = frames.tick(&mut source);
        assert_eq!(report.mode_request, Some(PositionMode::Relative));

        // End before the next frame flips the absolute mode last observed
        frames.request_toggle();
        let report = frames.tick(&mut source);
        assert_eq!(frames.sample().position_mode, PositionMode::Relative);
        assert_eq!(report.mode_request, Some(PositionMode::Relative));
        assert_eq!(
            source.mode_requests(),
            [PositionMode::Relative, PositionMode::Relative]
        );
    }

    #[test]
    fn left_edge_wins_over_toggle() {
        let mut source = ScriptedSource::new();
        source.push(left(true));
        let mut frames = FrameLoop::new();

        frames.request_toggle();
        let report = frames.tick(&mut source);
        assert_eq!(report.mode_request, Some(PositionMode::Relative));
        assert_eq!(source.mode_requests(), [PositionMode::Relative]);

        // The discarded toggle does not resurface
        let report = frames.tick(&mut source);
        assert_eq!(report.mode_request, None);
    }

    #[test]
    fn resume_resets_tracker_but_keeps_camera_and_mode() {
        let mut source = ScriptedSource::with_mode(PositionMode::Relative);
        source.push(RawInputSample::relative(25, 25).with_button(MouseButton::Middle, true));
        let mut frames = FrameLoop::new();

        frames.tick(&mut source);
        frames.tick(&mut source);
        assert_eq!(frames.tracker.middle_button, ButtonState::Held);
        let orientation = frames.orientation();

        frames.on_resuming();
        source.push(RawInputSample::relative(0, 0).with_button(MouseButton::Middle, true));
        frames.tick(&mut source);

        assert_eq!(frames.tracker.middle_button, ButtonState::Pressed);
        assert_eq!(frames.orientation(), orientation);
        assert_eq!(source.mode(), PositionMode::Relative);
    }

    #[test]
    fn retains_sample_for_draw_pass() {
        let mut source = ScriptedSource::new();
        let sample = RawInputSample::absolute(320, 240)
            .with_button(MouseButton::X1, true)
            .with_scroll(-360);
        source.push(sample);
        let mut frames = FrameLoop::new();

        frames.tick(&mut source);
        assert_eq!(*frames.sample(), sample);
    }

    #[test]
    fn scroll_reset_reaches_source() {
        let mut source = ScriptedSource::new();
        source.push(RawInputSample::default().with_scroll(480));
        let mut frames = FrameLoop::new();
        frames.tick(&mut source);

        frames.reset_scroll(&mut source);
        frames.tick(&mut source);

        assert_eq!(frames.sample().scroll_wheel_value, 0);
        assert!(source.requests().contains(&SourceRequest::ResetScrollWheel));
    }
}
