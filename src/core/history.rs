//! Transition history tracking.
//!
//! Every accepted event is recorded as an immutable `TransitionRecord`;
//! rejected events never reach the history.

use super::event::QuizEvent;
use super::state::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single accepted event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The event that was applied
    pub event: QuizEvent,
    /// Phase before the event
    pub from: Phase,
    /// Phase after the event
    pub to: Phase,
    /// Question on screen when the event arrived
    pub question_index: usize,
    /// When the event was applied
    pub timestamp: DateTime<Utc>,
}

impl TransitionRecord {
    /// True when this record moved the quiz into a terminal phase.
    pub fn is_finishing(&self) -> bool {
        self.from != self.to && self.to == Phase::Finished
    }
}

/// Ordered history of accepted events.
///
/// History is immutable - `record` returns a new history with the record
/// appended.
///
/// # Example
///
/// ```rust
/// use quizmind::core::{Phase, QuizEvent, TransitionHistory, TransitionRecord};
/// use chrono::Utc;
///
/// let history = TransitionHistory::new();
/// let history = history.record(TransitionRecord {
///     event: QuizEvent::EndQuiz,
///     from: Phase::InProgress,
///     to: Phase::Finished,
///     question_index: 3,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path(), vec![&Phase::InProgress, &Phase::Finished]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionHistory {
    transitions: Vec<TransitionRecord>,
}

impl TransitionHistory {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: TransitionRecord) -> Self {
        let mut next = self.clone();
        next.push(transition);
        next
    }

    /// Append a transition in place.
    pub fn push(&mut self, transition: TransitionRecord) {
        self.transitions.push(transition);
    }

    /// Phases traversed: the first record's `from`, then every `to` that
    /// differs from the previous entry.
    pub fn get_path(&self) -> Vec<&Phase> {
        let mut path: Vec<&Phase> = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            if path.last() != Some(&&transition.to) {
                path.push(&transition.to);
            }
        }
        path
    }

    /// Duration from the first to the last recorded event.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Number of recorded events matching `event`.
    pub fn count(&self, event: QuizEvent) -> usize {
        self.transitions.iter().filter(|t| t.event == event).count()
    }

    /// True if the quiz was finished by `EndQuiz` rather than by running out
    /// of questions.
    pub fn ended_early(&self) -> bool {
        self.transitions
            .iter()
            .any(|t| t.event == QuizEvent::EndQuiz && t.is_finishing())
    }

    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(event: QuizEvent, from: Phase, to: Phase, index: usize) -> TransitionRecord {
        TransitionRecord {
            event,
            from,
            to,
            question_index: index,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = TransitionHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = TransitionHistory::new();
        let new_history =
            history.record(record(QuizEvent::Tick, Phase::InProgress, Phase::InProgress, 0));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn push_appends_in_order() {
        let mut history = TransitionHistory::new();
        for index in 0..3 {
            history.push(record(QuizEvent::Tick, Phase::InProgress, Phase::InProgress, index));
        }

        let indices: Vec<_> = history.transitions().iter().map(|t| t.question_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn get_path_collapses_repeated_phases() {
        let history = TransitionHistory::new()
            .record(record(QuizEvent::Tick, Phase::InProgress, Phase::InProgress, 0))
            .record(record(
                QuizEvent::AdvanceQuestion,
                Phase::InProgress,
                Phase::InProgress,
                0,
            ))
            .record(record(
                QuizEvent::AdvanceQuestion,
                Phase::InProgress,
                Phase::Finished,
                1,
            ));

        assert_eq!(
            history.get_path(),
            vec![&Phase::InProgress, &Phase::Finished]
        );
    }

    #[test]
    fn counts_and_early_end() {
        let history = TransitionHistory::new()
            .record(record(QuizEvent::Tick, Phase::InProgress, Phase::InProgress, 0))
            .record(record(QuizEvent::Tick, Phase::InProgress, Phase::InProgress, 0))
            .record(record(QuizEvent::EndQuiz, Phase::InProgress, Phase::Finished, 0));

        assert_eq!(history.count(QuizEvent::Tick), 2);
        assert!(history.ended_early());
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let history = TransitionHistory::new()
            .record(TransitionRecord {
                timestamp: start,
                ..record(QuizEvent::Tick, Phase::InProgress, Phase::InProgress, 0)
            })
            .record(TransitionRecord {
                timestamp: start + chrono::Duration::milliseconds(250),
                ..record(QuizEvent::EndQuiz, Phase::InProgress, Phase::Finished, 0)
            });

        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = TransitionHistory::new().record(record(
            QuizEvent::SelectAnswer { answer: 1 },
            Phase::InProgress,
            Phase::InProgress,
            0,
        ));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: TransitionHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
