//! Quiz progression state.
//!
//! `Phase` is the coarse position of the quiz (`InProgress` or `Finished`);
//! `QuizState` carries everything the presentation layer reads: index, score,
//! answer history, countdown and the locked-in answer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest countdown a question may start with.
pub const MAX_SECONDS_PER_QUESTION: u32 = 30;

/// Seconds on the clock for each freshly presented question unless configured otherwise.
pub const DEFAULT_SECONDS_PER_QUESTION: u32 = MAX_SECONDS_PER_QUESTION;

/// Coarse position of a quiz.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// A question is on screen, accepting an answer or counting down.
    InProgress,
    /// Terminal: results are shown, nothing but reads is accepted.
    Finished,
}

impl Phase {
    /// Name used in logs and error messages.
    ///
    /// ```rust
    /// use quizmind::core::Phase;
    ///
    /// assert_eq!(Phase::InProgress.name(), "InProgress");
    /// assert!(Phase::Finished.is_final());
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            Self::InProgress => "InProgress",
            Self::Finished => "Finished",
        }
    }

    /// Terminal phases accept no further events.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Snapshot of a running (or finished) quiz.
///
/// Fields are only mutated by the transition function in [`crate::machine`];
/// callers get a read-only view through the accessors.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct QuizState {
    pub(crate) current_index: usize,
    pub(crate) score: usize,
    pub(crate) phase: Phase,
    pub(crate) answer_history: Vec<bool>,
    pub(crate) remaining_seconds: u32,
    pub(crate) selected_answer: Option<usize>,
}

impl Default for QuizState {
    fn default() -> Self {
        Self::new(DEFAULT_SECONDS_PER_QUESTION)
    }
}

impl QuizState {
    /// Fresh state positioned on the first question with a full countdown.
    pub fn new(seconds_per_question: u32) -> Self {
        Self {
            current_index: 0,
            score: 0,
            phase: Phase::InProgress,
            answer_history: Vec::new(),
            remaining_seconds: seconds_per_question,
            selected_answer: None,
        }
    }

    /// Zero-based index of the question currently presented.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once results should be shown.
    pub fn is_finished(&self) -> bool {
        self.phase.is_final()
    }

    /// Correctness of each committed answer, in question order.
    pub fn answer_history(&self) -> &[bool] {
        &self.answer_history
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Index of the answer chosen for the current question, if any.
    pub fn selected_answer(&self) -> Option<usize> {
        self.selected_answer
    }

    /// True while an answer is locked in and the question awaits advance.
    pub fn is_answer_locked(&self) -> bool {
        self.selected_answer.is_some()
    }

    /// Correctness of the locked-in answer for the current question.
    pub fn pending_answer_correct(&self) -> Option<bool> {
        self.selected_answer?;
        self.answer_history.get(self.current_index).copied()
    }

    /// True while the countdown for the current question has not run out.
    pub fn has_time_left(&self) -> bool {
        self.remaining_seconds > 0
    }
}
