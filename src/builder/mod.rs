//! Builder API for ergonomic question set construction.
//!
//! This module provides fluent builders and shorthand constructors for
//! questions with minimal boilerplate.

pub mod error;
pub mod question;

pub use error::BuildError;
pub use question::{QuestionBuilder, QuestionSetBuilder};

use crate::core::{Answer, Question, QuestionKind};

fn with_distractors(
    kind: QuestionKind,
    text: &str,
    correct: &str,
    distractors: &[&str],
) -> Question {
    let answers = std::iter::once(Answer::new(correct, true))
        .chain(distractors.iter().map(|d| Answer::new(*d, false)))
        .collect();

    Question {
        text: text.to_string(),
        answers,
        kind,
    }
}

/// Create a multiple-choice question; the correct answer is listed first.
///
/// # Example
///
/// ```
/// use quizmind::builder::multiple_choice;
///
/// let question = multiple_choice("What is the square root of 64?", "8", &["6", "7"]);
/// assert_eq!(question.answers.len(), 3);
/// assert_eq!(question.correct_answer_index(), Some(0));
/// ```
pub fn multiple_choice(text: &str, correct: &str, distractors: &[&str]) -> Question {
    with_distractors(QuestionKind::MultipleChoice, text, correct, distractors)
}

/// Create a two-option question with the incorrect option listed first.
pub fn true_false(text: &str, correct: &str, incorrect: &str) -> Question {
    Question {
        text: text.to_string(),
        answers: vec![Answer::new(incorrect, false), Answer::new(correct, true)],
        kind: QuestionKind::TrueFalse,
    }
}

pub fn fill_in_the_blank(text: &str, correct: &str, distractors: &[&str]) -> Question {
    with_distractors(QuestionKind::FillInTheBlank, text, correct, distractors)
}
