//! Build errors for question and question-set builders.

use thiserror::Error;

/// Errors that can occur when building questions and question sets.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Question text not specified. Call .text(prompt) before .build()")]
    MissingText,

    #[error("Question '{text}' has no answers. Add at least one with .answer()")]
    NoAnswers { text: String },

    #[error("No questions defined. Add at least one question")]
    NoQuestions,
}
