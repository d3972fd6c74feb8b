//! Application runner and event loop.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use mousetest_core::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::app::HarnessApp;
use crate::context::AppContext;
use crate::frame::FrameContext;
use crate::timer::StepTimer;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Window title.
    pub title: String,
    /// Initial window width.
    pub width: u32,
    /// Initial window height.
    pub height: u32,
    /// Target frames per second (None for unlimited).
    pub target_fps: Option<u32>,
    /// Whether the window can be resized.
    pub resizable: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "MouseTest".to_string(),
            width: 1024,
            height: 768,
            target_fps: Some(60),
            resizable: true,
        }
    }
}

impl AppConfig {
    /// Create a new config with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the window dimensions.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }

    /// Set the target FPS. Zero means unlimited.
    #[must_use]
    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.target_fps = (fps > 0).then_some(fps);
        self
    }

    /// Allow or forbid window resizing.
    #[must_use]
    pub const fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Time budget of one frame when a target FPS is set.
    #[must_use]
    pub fn target_frame_time(&self) -> Option<Duration> {
        self.target_fps
            .map(|fps| Duration::from_nanos(1_000_000_000 / u64::from(fps.max(1))))
    }
}

/// Initialize `tracing` output, honouring `RUST_LOG`.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

/// Run a `HarnessApp` with the given configuration.
///
/// This function initializes logging, creates the window and runs the
/// event loop until the application exits. `params` is passed to
/// [`HarnessApp::init`] once the window exists.
pub fn run_app<A: HarnessApp + 'static>(
    config: AppConfig,
    params: A::Params,
) -> anyhow::Result<()> {
    init_logging();

    info!("{} starting...", config.title);

    let event_loop = EventLoop::new().map_err(|e| Error::EventLoop(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut runner = AppRunner::<A> {
        config,
        params: Some(params),
        state: None,
    };

    event_loop
        .run_app(&mut runner)
        .map_err(|e| Error::EventLoop(e.to_string()))?;

    Ok(())
}

/// Internal application runner that implements winit's `ApplicationHandler`.
///
/// `state` is `None` until the first resume creates the window, then stays
/// populated until the window closes. `params` is consumed by that first
/// resume.
struct AppRunner<A: HarnessApp> {
    config: AppConfig,
    params: Option<A::Params>,
    state: Option<AppState<A>>,
}

/// Internal application state.
struct AppState<A: HarnessApp> {
    ctx: AppContext,
    app: A,
    target_frame_time: Option<Duration>,
}

impl<A: HarnessApp + 'static> ApplicationHandler for AppRunner<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(state) = &mut self.state {
            info!("Resuming");
            resume(&mut state.ctx.timer, &mut state.app, Instant::now());
            return;
        }

        info!("Creating application state...");

        match self.create_state(event_loop) {
            Ok(state) => {
                self.state = Some(state);
                info!("Application ready!");
            }
            Err(e) => {
                error!("Failed to initialize application: {e}");
                event_loop.exit();
            }
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &mut self.state {
            info!("Suspending");
            state.app.on_suspending();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        // Let the app handle the event first
        if let Some(state) = &mut self.state {
            if state.app.on_event(&event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested");
                if let Some(mut state) = self.state.take() {
                    state.cleanup();
                }
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                let exit = self.state.as_mut().is_some_and(|state| {
                    if let Err(e) = state.run_frame() {
                        error!("Frame error: {e}");
                    }
                    state.app.should_exit()
                });
                if exit {
                    info!("Exit requested");
                    if let Some(mut state) = self.state.take() {
                        state.cleanup();
                    }
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(state) = &mut self.state {
                    if let Err(e) = state.handle_resize(size.width, size.height) {
                        error!("Resize error: {e}");
                    }
                }
            }
            WindowEvent::Focused(focused) => {
                if let Some(state) = &mut self.state {
                    if focused {
                        info!("Window activated");
                        state.app.on_activated();
                    } else {
                        info!("Window deactivated");
                        state.app.on_deactivated();
                    }
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(state) = &mut self.state {
                    info!("Scale factor changed to {scale_factor}");
                    state.app.on_dpi_changed(scale_factor);
                }
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let Some(state) = &mut self.state {
            state.app.on_device_event(device_id, &event);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.ctx.window.request_redraw();
        }
    }
}

impl<A: HarnessApp + 'static> AppRunner<A> {
    fn create_state(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<AppState<A>> {
        let params = self
            .params
            .take()
            .ok_or_else(|| anyhow::anyhow!("application params already consumed"))?;

        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_resizable(self.config.resizable)
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));

        let window = event_loop
            .create_window(window_attrs)
            .map_err(|e| Error::WindowCreation(e.to_string()))?;

        let mut ctx = AppContext::new(Arc::new(window));
        let app = A::init(&mut ctx, params)?;

        Ok(AppState {
            ctx,
            app,
            target_frame_time: self.config.target_frame_time(),
        })
    }
}

impl<A: HarnessApp> AppState<A> {
    fn run_frame(&mut self) -> anyhow::Result<()> {
        let frame_start = Instant::now();

        let dt = self.ctx.timer.tick();
        self.app.update(&self.ctx, dt);

        let frame = FrameContext::new(dt, self.ctx.frame_count(), self.ctx.timer.fps());
        self.app.render(&self.ctx, &frame)?;

        // Frame pacing
        if let Some(target) = self.target_frame_time {
            let elapsed = frame_start.elapsed();
            if elapsed < target {
                thread::sleep(target - elapsed);
            }
        }

        Ok(())
    }

    fn handle_resize(&mut self, width: u32, height: u32) -> anyhow::Result<()> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.app.on_resize(&mut self.ctx, width, height)?;

        info!("Resized to {}x{}", width, height);
        Ok(())
    }

    fn cleanup(&mut self) {
        if self.ctx.frame_count() > 0 {
            info!("Frame statistics:");
            info!("  Total frames: {}", self.ctx.frame_count());
            info!("  Total time: {:.1}s", self.ctx.timer.total_seconds());
            info!("  Last FPS: {}", self.ctx.timer.fps());
        }

        info!("Starting cleanup...");
        self.app.cleanup(&mut self.ctx);
        info!("Cleanup complete");
    }
}

/// Discard the time spent suspended, then tell the app it is back.
fn resume<A: HarnessApp>(timer: &mut StepTimer, app: &mut A, now: Instant) {
    timer.reset_elapsed_time(now);
    app.on_resuming();
}
