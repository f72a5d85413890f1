//! Core quiz types and logic.
//!
//! This module contains the pure data of the quiz:
//! - Questions, answers and the immutable question set
//! - The `QuizState` snapshot and its `Phase`
//! - Events, guard predicates and immutable transition history
//!
//! Nothing in this module performs I/O or touches a clock.

mod event;
mod guard;
mod history;
mod question;
mod state;

pub use event::QuizEvent;
pub use guard::Guard;
pub use history::{TransitionHistory, TransitionRecord};
pub use question::{Answer, Question, QuestionKind, QuestionSet};
pub use state::{Phase, QuizState, DEFAULT_SECONDS_PER_QUESTION, MAX_SECONDS_PER_QUESTION};
