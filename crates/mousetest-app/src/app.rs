//! `HarnessApp` trait definition.

use crate::context::AppContext;
use crate::frame::FrameContext;
use winit::event::{DeviceEvent, DeviceId, WindowEvent};

/// Trait for applications driven by the harness runner.
///
/// The runner owns the window and the event loop; the application owns its
/// state and reacts to per-frame ticks and lifecycle notifications.
pub trait HarnessApp: Sized {
    /// Startup options handed to [`init`](Self::init).
    type Params;

    /// Initialize the application.
    ///
    /// Called once, after the window has been created, with the params
    /// given to [`run_app`](crate::run_app).
    fn init(ctx: &mut AppContext, params: Self::Params) -> anyhow::Result<Self>;

    /// Update application state.
    ///
    /// Called once per frame, always before [`render`](Self::render).
    ///
    /// # Arguments
    /// * `ctx` - Application context with window and timer access
    /// * `dt` - Delta time in seconds since last frame
    fn update(&mut self, ctx: &AppContext, dt: f32);

    /// Present the frame that was just updated.
    fn render(&mut self, ctx: &AppContext, frame: &FrameContext) -> anyhow::Result<()>;

    /// Handle window resize.
    ///
    /// Default implementation does nothing.
    #[allow(unused_variables)]
    fn on_resize(&mut self, ctx: &mut AppContext, width: u32, height: u32) -> anyhow::Result<()> {
        Ok(())
    }

    /// Handle window events.
    ///
    /// Called for each window event. Return `true` if the event was
    /// handled and should not be processed further.
    ///
    /// Default implementation does nothing and returns `false`.
    #[allow(unused_variables)]
    fn on_event(&mut self, event: &WindowEvent) -> bool {
        false
    }

    /// Handle device events (raw input).
    ///
    /// Default implementation does nothing.
    #[allow(unused_variables)]
    fn on_device_event(&mut self, device_id: DeviceId, event: &DeviceEvent) {}

    /// The window gained focus.
    fn on_activated(&mut self) {}

    /// The window lost focus.
    fn on_deactivated(&mut self) {}

    /// The application is about to be suspended.
    fn on_suspending(&mut self) {}

    /// The application resumed after a suspend.
    ///
    /// The runner has already reset the timer's elapsed time.
    fn on_resuming(&mut self) {}

    /// The window's display scale factor changed.
    #[allow(unused_variables)]
    fn on_dpi_changed(&mut self, scale_factor: f64) {}

    /// Return `true` to stop the event loop after this frame.
    fn should_exit(&self) -> bool {
        false
    }

    /// Cleanup before shutdown.
    ///
    /// Default implementation does nothing.
    #[allow(unused_variables)]
    fn cleanup(&mut self, ctx: &mut AppContext) {}
}
