//! Events accepted by the quiz state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Input to the transition function.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuizEvent {
    /// The user picked the answer at `answer` for the current question.
    SelectAnswer { answer: usize },
    /// One second of the countdown elapsed.
    Tick,
    /// Move on to the next question, or to the results after the last one.
    AdvanceQuestion,
    /// Administrative override: jump straight to the results.
    EndQuiz,
}

impl QuizEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectAnswer { .. } => "SelectAnswer",
            Self::Tick => "Tick",
            Self::AdvanceQuestion => "AdvanceQuestion",
            Self::EndQuiz => "EndQuiz",
        }
    }
}

impl fmt::Display for QuizEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectAnswer { answer } => write!(f, "SelectAnswer({answer})"),
            other => f.write_str(other.name()),
        }
    }
}
