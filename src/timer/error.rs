//! Timer error types.

use thiserror::Error;

/// Errors that can occur when setting up a clock
#[derive(Debug, Error)]
pub enum TimerError {
    /// A tokio clock was requested outside of a runtime
    #[error("No tokio runtime is running in this context")]
    NoRuntime,
}
