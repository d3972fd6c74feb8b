//! Error types for the harness.

use thiserror::Error;

/// Harness-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Window creation failed
    #[error("Window creation failed: {0}")]
    WindowCreation(String),

    /// Event loop error
    #[error("Event loop error: {0}")]
    EventLoop(String),

    /// Invalid command line or configuration value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
