//! The pure transition function.
//!
//! `apply` maps `(questions, config, state, event)` to either a new state plus
//! a timer command, or a `QuizError`. It never mutates its inputs.

use crate::config::QuizConfig;
use crate::core::{Guard, Phase, QuestionSet, QuizEvent, QuizState};
use crate::machine::error::QuizError;
use std::sync::LazyLock;

/// What the timer driver must do after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerCommand {
    /// The same question is still on screen; leave the countdown alone.
    Keep,
    /// A new question was presented; cancel the old timer and start a fresh one.
    Restart,
    /// The quiz finished; cancel the timer.
    Stop,
}

/// Result of applying one event.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub state: QuizState,
    pub timer: TimerCommand,
}

impl Step {
    fn keep(state: QuizState) -> Self {
        Self {
            state,
            timer: TimerCommand::Keep,
        }
    }
}

static IN_PROGRESS: LazyLock<Guard<QuizState>> =
    LazyLock::new(|| Guard::new("quiz has already finished", |s: &QuizState| !s.is_finished()));

static NOT_YET_ANSWERED: LazyLock<Guard<QuizState>> = LazyLock::new(|| {
    Guard::new("an answer is already locked in for this question", |s: &QuizState| {
        !s.is_answer_locked()
    })
});

static TIME_LEFT: LazyLock<Guard<QuizState>> =
    LazyLock::new(|| Guard::new("time for this question has expired", |s: &QuizState| {
        s.has_time_left()
    }));

fn require(
    guard: &Guard<QuizState>,
    state: &QuizState,
    event: QuizEvent,
) -> Result<(), QuizError> {
    if guard.check(state) {
        Ok(())
    } else {
        Err(QuizError::InvalidTransition {
            event: event.name(),
            phase: state.phase,
            reason: guard.description().to_string(),
        })
    }
}

/// Apply `event` to `state`.
///
/// # Example
///
/// ```rust
/// use quizmind::config::QuizConfig;
/// use quizmind::core::{QuestionSet, QuizEvent, QuizState};
/// use quizmind::machine::{apply, TimerCommand};
///
/// let questions = QuestionSet::builtin();
/// let config = QuizConfig::default();
/// let state = QuizState::default();
///
/// let step = apply(&questions, &config, &state, QuizEvent::SelectAnswer { answer: 0 }).unwrap();
/// assert_eq!(step.state.score(), 1);
/// assert_eq!(step.timer, TimerCommand::Keep);
/// assert_eq!(state.score(), 0); // input untouched
/// ```
pub fn apply(
    questions: &QuestionSet,
    config: &QuizConfig,
    state: &QuizState,
    event: QuizEvent,
) -> Result<Step, QuizError> {
    require(&IN_PROGRESS, state, event)?;

    match event {
        QuizEvent::SelectAnswer { answer } => select_answer(questions, state, answer, event),
        QuizEvent::Tick => Ok(tick(questions, config, state)),
        QuizEvent::AdvanceQuestion => Ok(advance(questions, config, state.clone())),
        QuizEvent::EndQuiz => Ok(end_quiz(state)),
    }
}

fn select_answer(
    questions: &QuestionSet,
    state: &QuizState,
    answer: usize,
    event: QuizEvent,
) -> Result<Step, QuizError> {
    require(&NOT_YET_ANSWERED, state, event)?;
    require(&TIME_LEFT, state, event)?;

    let index = state.current_index;
    let question = questions.get(index).ok_or(QuizError::OutOfRangeIndex {
        index,
        total: questions.len(),
    })?;

    let chosen = question
        .answer(answer)
        .ok_or_else(|| QuizError::InvalidTransition {
            event: event.name(),
            phase: state.phase,
            reason: format!(
                "answer {answer} does not belong to question {index} ({} answers)",
                question.answers.len()
            ),
        })?;

    let mut next = state.clone();
    next.answer_history.push(chosen.is_correct);
    if chosen.is_correct {
        next.score += 1;
    }
    next.selected_answer = Some(answer);

    Ok(Step::keep(next))
}

fn tick(questions: &QuestionSet, config: &QuizConfig, state: &QuizState) -> Step {
    if state.remaining_seconds == 0 {
        return Step::keep(state.clone());
    }

    let mut next = state.clone();
    next.remaining_seconds -= 1;

    if next.remaining_seconds == 0 {
        advance(questions, config, next)
    } else {
        Step::keep(next)
    }
}

fn advance(questions: &QuestionSet, config: &QuizConfig, mut next: QuizState) -> Step {
    let total = questions.len();

    // Unanswered questions count as incorrect.
    let recorded = next.answer_history.len();
    if next.selected_answer.is_none() && recorded <= next.current_index && recorded < total {
        next.answer_history.push(false);
    }
    next.selected_answer = None;

    if next.current_index + 1 >= total {
        next.current_index = next.current_index.min(total.saturating_sub(1));
        next.phase = Phase::Finished;
        return Step {
            state: next,
            timer: TimerCommand::Stop,
        };
    }

    next.current_index += 1;
    next.remaining_seconds = config.seconds_per_question;
    Step {
        state: next,
        timer: TimerCommand::Restart,
    }
}

fn end_quiz(state: &QuizState) -> Step {
    let mut next = state.clone();
    next.phase = Phase::Finished;
    Step {
        state: next,
        timer: TimerCommand::Stop,
    }
}
