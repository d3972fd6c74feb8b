//! Test support for the mouse test harness.
//!
//! Provides a scripted input source so frame orchestration can be driven
//! without a window or a physical mouse.

pub mod scripted;

pub use scripted::{ScriptedSource, SourceRequest};
