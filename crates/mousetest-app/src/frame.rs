//! Per-frame context for the draw pass.

/// Context for the frame being presented.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    /// Delta time since last frame in seconds.
    pub dt: f32,
    /// Number of updates run so far, this frame's included.
    pub frame_number: u64,
    /// Frames per second over the last full second.
    pub fps: u32,
}

impl FrameContext {
    /// Create a new frame context.
    pub(crate) const fn new(dt: f32, frame_number: u64, fps: u32) -> Self {
        Self {
            dt,
            frame_number,
            fps,
        }
    }
}
