//! Application framework for the mouse test harness.
//!
//! This crate provides a trait-based application framework that handles
//! common boilerplate like:
//! - Logging initialization
//! - Window creation and management
//! - Frame timing and pacing
//! - Lifecycle notifications (focus, suspend/resume, resize, DPI)
//! - Event loop handling
//!
//! # Example
//!
//! ```no_run
//! use mousetest_app::{AppConfig, AppContext, FrameContext, HarnessApp, run_app};
//!
//! struct MyApp {
//!     // Application state
//! }
//!
//! impl HarnessApp for MyApp {
//!     type Params = ();
//!
//!     fn init(ctx: &mut AppContext, params: ()) -> anyhow::Result<Self> {
//!         Ok(MyApp {})
//!     }
//!
//!     fn update(&mut self, ctx: &AppContext, dt: f32) {
//!         // Update logic
//!     }
//!
//!     fn render(&mut self, ctx: &AppContext, frame: &FrameContext) -> anyhow::Result<()> {
//!         // Presentation
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     run_app::<MyApp>(AppConfig::default(), ())
//! }
//! ```

mod app;
mod context;
mod frame;
mod runner;
mod timer;

pub use app::HarnessApp;
pub use context::AppContext;
pub use frame::FrameContext;
pub use runner::{init_logging, run_app, AppConfig};
pub use timer::StepTimer;

// Re-export commonly used types for convenience
pub use winit::event::{DeviceEvent, DeviceId, WindowEvent};
