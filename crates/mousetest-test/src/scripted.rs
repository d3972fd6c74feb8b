//! Scripted input source that replays queued samples.

use std::collections::VecDeque;

use mousetest_core::{PositionMode, RawInputSample};
use mousetest_input::InputSource;

/// A request made of a [`ScriptedSource`], in call order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SourceRequest {
    SetMode(PositionMode),
    ResetScrollWheel,
    SetDpi(f64),
}

/// Input source that hands out queued samples and records every request.
///
/// Samples are stamped with the source's current mode and scroll
/// accumulator, so mode requests show up in the following frame the way a
/// real device would report them. Once the queue is empty the last sample
/// is repeated.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    queue: VecDeque<RawInputSample>,
    last: RawInputSample,
    mode: PositionMode,
    scroll_offset: i32,
    requests: Vec<SourceRequest>,
}

impl ScriptedSource {
    /// Create an empty source in absolute mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source that starts in the given mode.
    #[must_use]
    pub fn with_mode(mode: PositionMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Queue a sample for a later `state()` call.
    pub fn push(&mut self, sample: RawInputSample) -> &mut Self {
        self.queue.push_back(sample);
        self
    }

    /// Queue several samples.
    pub fn extend(&mut self, samples: impl IntoIterator<Item = RawInputSample>) -> &mut Self {
        self.queue.extend(samples);
        self
    }

    /// Current position mode.
    #[must_use]
    pub const fn mode(&self) -> PositionMode {
        self.mode
    }

    /// Every request received so far.
    #[must_use]
    pub fn requests(&self) -> &[SourceRequest] {
        &self.requests
    }

    /// Only the mode requests received so far.
    #[must_use]
    pub fn mode_requests(&self) -> Vec<PositionMode> {
        self.requests
            .iter()
            .filter_map(|request| match request {
                SourceRequest::SetMode(mode) => Some(*mode),
                _ => None,
            })
            .collect()
    }
}

impl InputSource for ScriptedSource {
    fn state(&mut self) -> RawInputSample {
        if let Some(next) = self.queue.pop_front() {
            self.last = next;
        }
        RawInputSample {
            position_mode: self.mode,
            scroll_wheel_value: self.last.scroll_wheel_value - self.scroll_offset,
            ..self.last
        }
    }

    fn set_mode(&mut self, mode: PositionMode) {
        tracing::trace!("scripted source: set_mode({mode})");
        self.mode = mode;
        self.requests.push(SourceRequest::SetMode(mode));
    }

    fn reset_scroll_wheel_value(&mut self) {
        self.scroll_offset = self.last.scroll_wheel_value;
        self.requests.push(SourceRequest::ResetScrollWheel);
    }

    fn set_dpi(&mut self, scale_factor: f64) {
        self.requests.push(SourceRequest::SetDpi(scale_factor));
    }
}
