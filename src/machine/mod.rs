//! The quiz state machine.
//!
//! - **Transition function**: `apply` is a pure mapping from
//!   `(questions, config, state, event)` to a new state and a `TimerCommand`
//! - **QuizMachine**: owns the current state and records every accepted event
//!
//! Nothing here schedules or cancels timers; the session shell does that
//! synchronously with each step.

mod error;
mod state_machine;
mod transition;

pub use error::QuizError;
pub use state_machine::QuizMachine;
pub use transition::{apply, Step, TimerCommand};
