//! State machine that owns the quiz state and records history.

use crate::config::QuizConfig;
use crate::core::{
    Question, QuestionSet, QuizEvent, QuizState, TransitionHistory, TransitionRecord,
};
use crate::machine::error::QuizError;
use crate::machine::transition::{apply, Step, TimerCommand};
use chrono::Utc;
use tracing::{debug, info, warn};

/// State machine over a fixed question set.
///
/// Holds no timers: every step reports a [`TimerCommand`] and the caller
/// decides how to honour it.
#[derive(Clone, Debug)]
pub struct QuizMachine {
    questions: QuestionSet,
    config: QuizConfig,
    current: QuizState,
    history: TransitionHistory,
}

impl QuizMachine {
    /// Create a machine positioned on the first question.
    pub fn new(questions: QuestionSet, config: QuizConfig) -> Self {
        let current = QuizState::new(config.seconds_per_question);
        Self {
            questions,
            config,
            current,
            history: TransitionHistory::new(),
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &QuizState {
        &self.current
    }

    /// Check if machine is in a final state (pure)
    pub fn is_final(&self) -> bool {
        self.current.phase().is_final()
    }

    /// Get transition history (pure)
    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// The question on screen, or `None` once finished.
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_final() {
            return None;
        }
        self.questions.get(self.current.current_index())
    }

    /// Compute the step `event` would produce without applying it.
    pub fn step(&self, event: QuizEvent) -> Result<Step, QuizError> {
        apply(&self.questions, &self.config, &self.current, event)
    }

    /// Apply a step computed by [`QuizMachine::step`] and record it.
    pub fn apply_step(&mut self, event: QuizEvent, step: Step) -> TimerCommand {
        let record = TransitionRecord {
            event,
            from: self.current.phase(),
            to: step.state.phase(),
            question_index: self.current.current_index(),
            timestamp: Utc::now(),
        };
        self.history.push(record);
        self.current = step.state;
        step.timer
    }

    /// Apply `event`, returning what the timer must do next.
    ///
    /// Rejected events leave state and history untouched.
    pub fn dispatch(&mut self, event: QuizEvent) -> Result<TimerCommand, QuizError> {
        let step = self.step(event).inspect_err(|error| {
            warn!(%event, %error, "event rejected");
        })?;

        let before = self.current.current_index();
        let command = self.apply_step(event, step);
        let state = &self.current;

        debug!(
            %event,
            from_question = before,
            question = state.current_index(),
            score = state.score(),
            remaining = state.remaining_seconds(),
            ?command,
            "event applied"
        );

        if command == TimerCommand::Stop {
            info!(
                score = state.score(),
                total = self.questions.len(),
                "quiz finished"
            );
        }

        Ok(command)
    }
}
