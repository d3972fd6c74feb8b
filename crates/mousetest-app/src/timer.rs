//! Frame timing.

use std::time::{Duration, Instant};

/// Variable-step frame timer.
///
/// Measures the time between ticks, counts frames and samples the frame
/// rate once per second.
#[derive(Debug, Clone)]
pub struct StepTimer {
    last_time: Instant,
    elapsed: Duration,
    total: Duration,
    frame_count: u64,
    frames_this_second: u32,
    second_counter: Duration,
    fps: u32,
}

impl Default for StepTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl StepTimer {
    /// Create a timer starting now.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a timer whose first tick is measured from `start`.
    #[must_use]
    pub const fn starting_at(start: Instant) -> Self {
        Self {
            last_time: start,
            elapsed: Duration::ZERO,
            total: Duration::ZERO,
            frame_count: 0,
            frames_this_second: 0,
            second_counter: Duration::ZERO,
            fps: 0,
        }
    }

    /// Advance the timer to now. Returns the elapsed seconds.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Advance the timer to `now`. Returns the elapsed seconds.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        self.elapsed = now.saturating_duration_since(self.last_time);
        self.last_time = now;
        self.total += self.elapsed;
        self.frame_count += 1;

        self.frames_this_second += 1;
        self.second_counter += self.elapsed;
        if self.second_counter >= Duration::from_secs(1) {
            self.fps = self.frames_this_second;
            self.frames_this_second = 0;
            self.second_counter = Duration::from_nanos(
                u64::try_from(self.second_counter.as_nanos() % 1_000_000_000).unwrap_or(0),
            );
        }

        self.elapsed.as_secs_f32()
    }

    /// Discard time accumulated between the last tick and `now`.
    ///
    /// Call after a long pause (suspend, modal loop) so the next tick does
    /// not report one huge step.
    pub fn reset_elapsed_time(&mut self, now: Instant) {
        self.last_time = now;
        self.frames_this_second = 0;
        self.second_counter = Duration::ZERO;
    }

    /// Seconds accumulated over all ticks.
    #[must_use]
    pub fn total_seconds(&self) -> f64 {
        self.total.as_secs_f64()
    }

    /// Number of ticks so far.
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Frames counted during the last full second.
    #[must_use]
    pub const fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn tick_measures_elapsed() {
        let start = Instant::now();
        let mut timer = StepTimer::starting_at(start);

        let dt = timer.tick_at(start + Duration::from_millis(16));
        assert_relative_eq!(dt, 0.016, epsilon = 1e-6);
        assert_eq!(timer.frame_count(), 1);

        let dt = timer.tick_at(start + Duration::from_millis(48));
        assert_relative_eq!(dt, 0.032, epsilon = 1e-6);
        assert_relative_eq!(timer.total_seconds(), 0.048, epsilon = 1e-9);
        assert_eq!(timer.frame_count(), 2);
    }

    #[test]
    fn fps_sampled_each_second() {
        let start = Instant::now();
        let mut timer = StepTimer::starting_at(start);
        for i in 1..=60 {
            timer.tick_at(start + Duration::from_millis(i * 1000 / 60));
        }
        assert_eq!(timer.fps(), 60);
    }

    #[test]
    fn reset_elapsed_time_skips_pause() {
        let start = Instant::now();
        let mut timer = StepTimer::starting_at(start);
        timer.tick_at(start + Duration::from_millis(10));

        // Ten-second suspend
        let resumed = start + Duration::from_secs(10);
        timer.reset_elapsed_time(resumed);
        let dt = timer.tick_at(resumed + Duration::from_millis(16));

        assert_relative_eq!(dt, 0.016, epsilon = 1e-6);
        assert!(timer.total_seconds() < 0.03);
        assert_eq!(timer.frame_count(), 2);
    }
}
