//! Quiz session: the imperative shell around the pure state machine.
//!
//! A session owns the question set, the machine and the timer driver. Every
//! `dispatch` applies the machine's timer command before returning, so the
//! old countdown is cancelled in the same step that leaves its question.

use crate::config::{QuizConfig, QuizDefinition};
use crate::core::{Question, QuestionSet, QuizEvent, QuizState, TransitionHistory};
use crate::machine::{QuizError, QuizMachine};
use crate::review::QuizReview;
use crate::timer::{Clock, ManualClock, TimerDriver};
use crate::validation;
use std::time::Duration;
use tracing::{info, info_span, warn, Span};
use uuid::Uuid;

/// One run through a question set.
///
/// # Example
///
/// ```rust
/// use quizmind::core::{QuestionSet, QuizEvent};
/// use quizmind::session::QuizSession;
/// use quizmind::timer::ManualClock;
/// use std::time::Duration;
///
/// let mut session = QuizSession::new(QuestionSet::builtin(), ManualClock::new()).unwrap();
///
/// session.dispatch(QuizEvent::SelectAnswer { answer: 0 }).unwrap();
/// session.advance_clock(Duration::from_secs(5)).unwrap();
/// assert_eq!(session.state().remaining_seconds(), 25);
///
/// let state = session.dispatch(QuizEvent::AdvanceQuestion).unwrap();
/// assert_eq!(state.current_index(), 1);
/// assert_eq!(state.remaining_seconds(), 30);
/// ```
#[derive(Debug)]
pub struct QuizSession<C: Clock> {
    id: Uuid,
    machine: QuizMachine,
    timer: TimerDriver<C>,
    span: Span,
}

impl<C: Clock> QuizSession<C> {
    /// Start a quiz with default settings.
    pub fn new(questions: QuestionSet, clock: C) -> Result<Self, QuizError> {
        Self::with_config(questions, QuizConfig::default(), clock)
    }

    /// Start a quiz and present the first question.
    ///
    /// Fails with `EmptyQuestionSet` or `InvalidConfig` before any timer is
    /// scheduled.
    pub fn with_config(
        questions: QuestionSet,
        config: QuizConfig,
        clock: C,
    ) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyQuestionSet);
        }
        config
            .validate()
            .map_err(|error| QuizError::InvalidConfig {
                reason: error.to_string(),
            })?;

        let id = Uuid::new_v4();
        let span = info_span!("quiz_session", session = %id);

        let timer = span.in_scope(|| {
            for issue in validation::issues(&questions) {
                warn!(%issue, "question set issue");
            }

            let mut timer = TimerDriver::new(clock, config.tick_interval());
            timer.restart();

            info!(
                questions = questions.len(),
                seconds_per_question = config.seconds_per_question,
                "quiz started"
            );
            timer
        });

        Ok(Self {
            id,
            machine: QuizMachine::new(questions, config),
            timer,
            span,
        })
    }

    pub fn from_definition(definition: QuizDefinition, clock: C) -> Result<Self, QuizError> {
        Self::with_config(definition.questions, definition.settings, clock)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &QuizState {
        self.machine.current_state()
    }

    /// Apply an event. On error the state is unchanged.
    pub fn dispatch(&mut self, event: QuizEvent) -> Result<&QuizState, QuizError> {
        let _entered = self.span.enter();
        let command = self.machine.dispatch(event)?;
        self.timer.apply(command);
        Ok(self.machine.current_state())
    }

    /// Apply every tick the active timer has queued so far. Returns how many
    /// ticks were applied.
    pub fn process_ticks(&mut self) -> Result<usize, QuizError> {
        let mut applied = 0;
        while !self.machine.is_final() && self.timer.try_next_tick() {
            self.dispatch(QuizEvent::Tick)?;
            applied += 1;
        }
        Ok(applied)
    }

    /// Wait for the next tick of the active timer and apply it. Returns
    /// `false` once the quiz is finished.
    pub async fn wait_tick(&mut self) -> Result<bool, QuizError> {
        if self.machine.is_final() || !self.timer.next_tick().await {
            return Ok(false);
        }
        self.dispatch(QuizEvent::Tick)?;
        Ok(true)
    }

    /// Let the clock run until every remaining question has timed out.
    pub async fn run_out_clock(&mut self) -> Result<&QuizState, QuizError> {
        while self.wait_tick().await? {}
        Ok(self.machine.current_state())
    }

    /// The question on screen, or `None` once finished.
    pub fn current_question(&self) -> Option<&Question> {
        self.machine.current_question()
    }

    pub fn questions(&self) -> &QuestionSet {
        self.machine.questions()
    }

    pub fn config(&self) -> &QuizConfig {
        self.machine.config()
    }

    pub fn history(&self) -> &TransitionHistory {
        self.machine.history()
    }

    pub fn is_finished(&self) -> bool {
        self.machine.is_final()
    }

    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Scored review; `None` until the quiz is finished.
    pub fn review(&self) -> Option<QuizReview> {
        QuizReview::from_state(
            self.machine.questions(),
            self.machine.current_state(),
            self.machine.history(),
        )
    }

    pub fn clock(&self) -> &C {
        self.timer.clock()
    }

    pub fn clock_mut(&mut self) -> &mut C {
        self.timer.clock_mut()
    }
}

impl QuizSession<ManualClock> {
    /// Advance virtual time, applying each tick before the next one fires.
    /// Returns how many ticks were applied.
    pub fn advance_clock(&mut self, by: Duration) -> Result<usize, QuizError> {
        let target = self.clock().now() + by;
        let mut applied = 0;

        while let Some(due) = self.clock().next_due().filter(|due| *due <= target) {
            let step = due.saturating_sub(self.clock().now());
            self.clock_mut().advance(step);
            applied += self.process_ticks()?;
        }

        let rest = target.saturating_sub(self.clock().now());
        self.clock_mut().advance(rest);
        Ok(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::multiple_choice;

    fn session(questions: usize) -> QuizSession<ManualClock> {
        let set = (0..questions)
            .map(|i| multiple_choice(&format!("question {i}"), "right", &["wrong"]))
            .collect::<Vec<_>>();
        QuizSession::new(QuestionSet::new(set), ManualClock::new()).unwrap()
    }

    #[test]
    fn empty_question_set_is_rejected() {
        let result = QuizSession::new(QuestionSet::new(vec![]), ManualClock::new());
        assert!(matches!(result, Err(QuizError::EmptyQuestionSet)));
    }

    #[test]
    fn zero_countdown_is_rejected_before_scheduling() {
        let config = QuizConfig {
            seconds_per_question: 0,
            ..QuizConfig::default()
        };

        let result = QuizSession::with_config(QuestionSet::builtin(), config, ManualClock::new());

        assert!(matches!(result, Err(QuizError::InvalidConfig { .. })));
    }

    #[test]
    fn zero_tick_interval_is_rejected() {
        let config = QuizConfig {
            tick_interval_ms: 0,
            ..QuizConfig::default()
        };

        let result = QuizSession::with_config(QuestionSet::builtin(), config, ManualClock::new());

        assert!(matches!(result, Err(QuizError::InvalidConfig { .. })));
    }

    #[test]
    fn starts_with_timer_running() {
        let session = session(2);

        assert!(session.is_timer_running());
        assert_eq!(session.clock().active_timers(), 1);
        assert_eq!(
            session.current_question().map(|q| q.text.as_str()),
            Some("question 0")
        );
    }

    #[test]
    fn advance_replaces_timer() {
        let mut session = session(3);
        session.advance_clock(Duration::from_secs(10)).unwrap();

        session.dispatch(QuizEvent::AdvanceQuestion).unwrap();

        assert_eq!(session.clock().active_timers(), 1);
        assert_eq!(session.state().remaining_seconds(), 30);

        session.advance_clock(Duration::from_secs(1)).unwrap();
        assert_eq!(session.state().remaining_seconds(), 29);
    }

    #[test]
    fn finishing_stops_timer() {
        let mut session = session(1);

        session.dispatch(QuizEvent::EndQuiz).unwrap();

        assert!(!session.is_timer_running());
        assert_eq!(session.clock().active_timers(), 0);
        assert_eq!(session.advance_clock(Duration::from_secs(60)).unwrap(), 0);
    }

    #[test]
    fn advance_clock_walks_through_expiries() {
        let mut session = session(2);

        let applied = session.advance_clock(Duration::from_secs(45)).unwrap();

        assert_eq!(applied, 45);
        assert_eq!(session.state().current_index(), 1);
        assert_eq!(session.state().remaining_seconds(), 15);
        assert_eq!(session.clock().now(), Duration::from_secs(45));
    }

    #[test]
    fn rejected_dispatch_keeps_timer() {
        let mut session = session(2);
        session.dispatch(QuizEvent::SelectAnswer { answer: 0 }).unwrap();
        let handle_count = session.clock().active_timers();

        let result = session.dispatch(QuizEvent::SelectAnswer { answer: 1 });

        assert!(result.is_err());
        assert_eq!(session.clock().active_timers(), handle_count);
        assert_eq!(session.state().score(), 1);
    }

    #[test]
    fn review_available_after_finish() {
        let mut session = session(2);
        assert!(session.review().is_none());

        session.dispatch(QuizEvent::SelectAnswer { answer: 0 }).unwrap();
        session.dispatch(QuizEvent::EndQuiz).unwrap();

        let review = session.review().unwrap();
        assert_eq!(review.score, 1);
        assert!(review.ended_early);
    }

    #[test]
    fn sessions_are_independent() {
        let questions = QuestionSet::builtin();
        let mut first = QuizSession::new(questions.clone(), ManualClock::new()).unwrap();
        let second = QuizSession::new(questions, ManualClock::new()).unwrap();

        first.dispatch(QuizEvent::SelectAnswer { answer: 0 }).unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(first.state().score(), 1);
        assert_eq!(second.state().score(), 0);
    }
}
