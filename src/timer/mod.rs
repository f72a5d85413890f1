//! Countdown timers.
//!
//! - **Clock**: the `schedule_repeating` / `cancel` abstraction the quiz
//!   consumes from its environment
//! - **ManualClock**: virtual time for tests and headless drivers
//! - **TokioClock**: real time, one tokio task per timer
//! - **TimerDriver**: keeps at most one live timer and drops stale ticks

mod clock;
mod driver;
mod error;
mod manual;
mod tokio_clock;

pub use clock::{Clock, TickCallback, TimerHandle, MIN_INTERVAL};
pub use driver::TimerDriver;
pub use error::TimerError;
pub use manual::ManualClock;
pub use tokio_clock::TokioClock;
