//! Mouse input handling for the mouse test harness.
//!
//! This crate turns raw mouse state into the discrete signals the harness
//! displays and reacts to.
//!
//! # Core Types
//!
//! - [`InputSource`]: Seam over anything that produces [`RawInputSample`]s
//! - [`WinitMouse`]: Input source fed by winit window and device events
//! - [`ButtonStateTracker`]: Press/release edge detection per button
//! - [`ModeSwitchPolicy`]: Absolute/relative switching from the left button
//!   and an explicit toggle
//! - [`DpiScaling`]: Capability chosen at composition time for reporting
//!   cursor coordinates
//!
//! # Usage
//!
//! ```ignore
//! use mousetest_input::{ButtonStateTracker, InputSource, ModeSwitchPolicy, WinitMouse};
//!
//! let mut mouse = WinitMouse::default();
//! let mut tracker = ButtonStateTracker::new();
//! let mut policy = ModeSwitchPolicy::new();
//!
//! // Once per frame
//! let sample = mouse.state();
//! policy.observe(sample.position_mode);
//! if let Some(edge) = tracker.update(&sample) {
//!     println!("{edge}");
//! }
//! policy.apply(tracker.left_button, &mut mouse);
//! ```

mod button_state;
mod policy;
mod source;
mod tracker;
mod winit_mouse;

pub use button_state::ButtonState;
pub use policy::ModeSwitchPolicy;
pub use source::{DpiScaling, InputSource, LogicalDpiScaling, NoDpiScaling};
pub use tracker::{ButtonEdge, ButtonStateTracker, EdgeKind};
pub use winit_mouse::{WinitMouse, WHEEL_DELTA};

pub use mousetest_core::{MouseButton, PositionMode, RawInputSample};

// Re-export winit types commonly used with input
pub use winit::event::{DeviceEvent, WindowEvent};
pub use winit::keyboard::KeyCode;
