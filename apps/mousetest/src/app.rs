//! Harness application wiring the mouse to the frame loop and overlay.

use tracing::{debug, info};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use mousetest_app::{AppContext, DeviceEvent, DeviceId, FrameContext, HarnessApp, WindowEvent};
use mousetest_input::{DpiScaling, InputSource, LogicalDpiScaling, NoDpiScaling, WinitMouse};

use crate::frame_loop::FrameLoop;
use crate::overlay::{Overlay, TitlePresenter};
use crate::params::HarnessParams;

/// Keyboard-driven harness actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Zero the scroll wheel value.
    ResetScroll,
    /// Flip between absolute and relative mode.
    ToggleMode,
    Exit,
}

impl Trigger {
    /// Trigger bound to a key, if any.
    #[must_use]
    pub const fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Home => Some(Self::ResetScroll),
            KeyCode::End => Some(Self::ToggleMode),
            KeyCode::Escape => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The mouse test harness.
pub struct MouseTest {
    /// The one mouse the harness owns.
    mouse: WinitMouse,
    frames: FrameLoop,
    presenter: TitlePresenter,
    should_exit: bool,
}

impl HarnessApp for MouseTest {
    type Params = HarnessParams;

    fn init(ctx: &mut AppContext, params: HarnessParams) -> anyhow::Result<Self> {
        let dpi: Box<dyn DpiScaling> = if params.dpi_aware {
            info!("Reporting cursor in logical pixels");
            Box::new(LogicalDpiScaling::new(ctx.scale_factor()))
        } else {
            Box::new(NoDpiScaling)
        };

        let mut mouse = WinitMouse::new(dpi);
        mouse.set_window(ctx.window.clone());
        mouse.set_mode(params.initial_mode);
        info!("Mouse starting in {} mode", params.initial_mode);

        Ok(Self {
            mouse,
            frames: FrameLoop::new(),
            presenter: TitlePresenter::new("MouseTest"),
            should_exit: false,
        })
    }

    fn update(&mut self, _ctx: &AppContext, _dt: f32) {
        let report = self.frames.tick(&mut self.mouse);
        if let Some(edge) = report.edge {
            debug!("{edge}");
        }
        if let Some(mode) = report.mode_request {
            debug!("Switched to {mode} mode");
        }
    }

    fn render(&mut self, ctx: &AppContext, frame: &FrameContext) -> anyhow::Result<()> {
        let overlay = Overlay::capture(&self.frames);
        if let Some(title) = self.presenter.refresh(&overlay) {
            debug!(frame = frame.frame_number, fps = frame.fps, "{title}");
            ctx.window.set_title(title);
        }
        Ok(())
    }

    fn on_event(&mut self, event: &WindowEvent) -> bool {
        if let WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key: PhysicalKey::Code(code),
                    state: ElementState::Pressed,
                    repeat: false,
                    ..
                },
            ..
        } = event
        {
            if let Some(trigger) = Trigger::from_key(*code) {
                self.fire(trigger);
                return true;
            }
        }
        self.mouse.process_window_event(event)
    }

    fn on_device_event(&mut self, _device_id: DeviceId, event: &DeviceEvent) {
        self.mouse.process_device_event(event);
    }

    fn on_deactivated(&mut self) {
        self.mouse.release_all_buttons();
    }

    fn on_resuming(&mut self) {
        self.frames.on_resuming();
    }

    fn on_dpi_changed(&mut self, scale_factor: f64) {
        self.mouse.set_dpi(scale_factor);
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }
}

impl MouseTest {
    fn fire(&mut self, trigger: Trigger) {
        debug!("Trigger: {trigger:?}");
        match trigger {
            Trigger::ResetScroll => self.frames.reset_scroll(&mut self.mouse),
            Trigger::ToggleMode => self.frames.request_toggle(),
            Trigger::Exit => self.should_exit = true,
        }
    }
}
