//! Errors returned by the quiz state machine.

use crate::core::Phase;
use thiserror::Error;

/// Errors that can occur when applying an event.
///
/// All variants are local and non-fatal: the state that rejected the event
/// is left exactly as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("{event} is not valid in phase {phase}: {reason}")]
    InvalidTransition {
        event: &'static str,
        phase: Phase,
        reason: String,
    },

    #[error("Question index {index} is out of range (total: {total})")]
    OutOfRangeIndex { index: usize, total: usize },

    #[error("Question set is empty; a quiz needs at least one question")]
    EmptyQuestionSet,

    #[error("Invalid quiz settings: {reason}")]
    InvalidConfig { reason: String },
}

impl QuizError {
    /// True for the "event not valid here" class of rejections.
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }
}
