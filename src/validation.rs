//! Question set validation that accumulates every issue.
//!
//! Following the "don't stop at the first error" approach, each check
//! contributes a `Validation` and all failures are collected with
//! `Validation::all_vec`. The state machine never enforces these; sessions
//! only log them.

use crate::core::{Question, QuestionSet};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Problems a question set can have.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuestionIssue {
    #[error("Question set is empty")]
    EmptyQuestionSet,

    #[error("Question {index} has an empty prompt")]
    EmptyPrompt { index: usize },

    #[error("Question {index} has no answers")]
    NoAnswers { index: usize },

    #[error("Question {index} has no correct answer")]
    NoCorrectAnswer { index: usize },

    #[error("Question {index} has {count} correct answers, expected exactly one")]
    MultipleCorrectAnswers { index: usize, count: usize },

    #[error("Question {index} lists the answer '{text}' more than once")]
    DuplicateAnswer { index: usize, text: String },
}

fn check(ok: bool, issue: impl FnOnce() -> QuestionIssue) -> Validation<(), NonEmptyVec<QuestionIssue>> {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(issue())
    }
}

/// Validate a single question, accumulating all of its issues.
pub fn validate_question(
    index: usize,
    question: &Question,
) -> Validation<(), NonEmptyVec<QuestionIssue>> {
    let mut checks = vec![
        check(!question.text.trim().is_empty(), || QuestionIssue::EmptyPrompt { index }),
        check(!question.answers.is_empty(), || QuestionIssue::NoAnswers { index }),
    ];

    if !question.answers.is_empty() {
        let count = question.answers.iter().filter(|a| a.is_correct).count();
        checks.push(check(count > 0, || QuestionIssue::NoCorrectAnswer { index }));
        checks.push(check(count <= 1, || QuestionIssue::MultipleCorrectAnswers {
            index,
            count,
        }));
    }

    let mut seen = HashSet::new();
    for answer in &question.answers {
        if !seen.insert(answer.text.trim()) {
            checks.push(Validation::fail(QuestionIssue::DuplicateAnswer {
                index,
                text: answer.text.clone(),
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Validate a whole set.
///
/// # Example
///
/// ```rust
/// use quizmind::core::QuestionSet;
/// use quizmind::validation::validate_question_set;
///
/// assert!(validate_question_set(&QuestionSet::builtin()).is_success());
/// assert!(validate_question_set(&QuestionSet::new(vec![])).is_failure());
/// ```
pub fn validate_question_set(questions: &QuestionSet) -> Validation<(), NonEmptyVec<QuestionIssue>> {
    if questions.is_empty() {
        return Validation::fail(QuestionIssue::EmptyQuestionSet);
    }

    let checks: Vec<_> = questions
        .iter()
        .enumerate()
        .map(|(index, question)| validate_question(index, question))
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

/// Flattened list of issues; empty when the set is well formed.
pub fn issues(questions: &QuestionSet) -> Vec<QuestionIssue> {
    match validate_question_set(questions) {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}
