//! Scored review of a finished quiz.

use crate::core::{QuestionSet, QuizState, TransitionHistory};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// How a single question ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    Correct,
    Incorrect,
    /// No entry in the answer history, e.g. after the quiz was ended early.
    Unanswered,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Correct => "Correct",
            Self::Incorrect => "Incorrect",
            Self::Unanswered => "Unanswered",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewEntry {
    pub index: usize,
    pub question: String,
    pub outcome: Outcome,
}

/// Final score plus a per-question breakdown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizReview {
    pub score: usize,
    pub total: usize,
    pub entries: Vec<ReviewEntry>,
    /// True if the quiz was closed with `EndQuiz`.
    pub ended_early: bool,
    /// Time between the first and last recorded event.
    pub elapsed: Option<Duration>,
}

impl QuizReview {
    /// Build the review; `None` while the quiz is still in progress.
    pub fn from_state(
        questions: &QuestionSet,
        state: &QuizState,
        history: &TransitionHistory,
    ) -> Option<Self> {
        if !state.is_finished() {
            return None;
        }

        let entries = questions
            .iter()
            .enumerate()
            .map(|(index, question)| ReviewEntry {
                index,
                question: question.text.clone(),
                outcome: match state.answer_history().get(index) {
                    Some(true) => Outcome::Correct,
                    Some(false) => Outcome::Incorrect,
                    None => Outcome::Unanswered,
                },
            })
            .collect();

        Some(Self {
            score: state.score(),
            total: questions.len(),
            entries,
            ended_early: history.ended_early(),
            elapsed: history.duration(),
        })
    }

    /// Score as a percentage of the total, 0 for an empty quiz.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.score as f64 * 100.0 / self.total as f64
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.entries.iter().filter(|e| e.outcome == outcome).count()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for QuizReview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Your Score: {}/{}", self.score, self.total)?;
        for entry in &self.entries {
            writeln!(f, "{}. {} - {}", entry.index + 1, entry.question, entry.outcome)?;
        }
        Ok(())
    }
}
