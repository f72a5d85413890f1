//! Quizmind: a quiz progression state machine with a countdown driver
//!
//! Quizmind follows a "pure core, imperative shell" split. The quiz state
//! machine is a pure transition function over an immutable question set;
//! the only effect in the system, the per-question countdown, lives in a
//! session shell that keeps exactly one live timer.
//!
//! # Core Concepts
//!
//! - **QuestionSet**: immutable questions injected at construction
//! - **QuizState**: index, score, answer history and countdown
//! - **Transitions**: `SelectAnswer`, `Tick`, `AdvanceQuestion`, `EndQuiz`
//! - **Clock**: the `schedule_repeating` / `cancel` abstraction timers run on
//! - **QuizSession**: wires machine and timer together behind `dispatch`
//!
//! # Example
//!
//! ```rust
//! use quizmind::{ManualClock, QuestionSet, QuizEvent, QuizSession};
//! use std::time::Duration;
//!
//! let mut session = QuizSession::new(QuestionSet::builtin(), ManualClock::new()).unwrap();
//!
//! // Answer the first question correctly and move on.
//! session.dispatch(QuizEvent::SelectAnswer { answer: 0 }).unwrap();
//! session.dispatch(QuizEvent::AdvanceQuestion).unwrap();
//!
//! // Let the second question time out.
//! session.advance_clock(Duration::from_secs(30)).unwrap();
//! assert_eq!(session.state().current_index(), 2);
//! assert_eq!(session.state().answer_history(), &[true, false]);
//!
//! session.dispatch(QuizEvent::EndQuiz).unwrap();
//! let review = session.review().unwrap();
//! assert_eq!(review.score, 1);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;
pub mod review;
pub mod session;
pub mod timer;
pub mod validation;

// Re-export commonly used types
pub use config::{QuizConfig, QuizDefinition};
pub use core::{Answer, Phase, Question, QuestionKind, QuestionSet, QuizEvent, QuizState};
pub use machine::{QuizError, QuizMachine, TimerCommand};
pub use review::{Outcome, QuizReview};
pub use session::QuizSession;
pub use timer::{Clock, ManualClock, TokioClock};
