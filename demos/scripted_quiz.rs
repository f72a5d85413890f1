//! Scripted Quiz
//!
//! This example plays through the built-in question set on a virtual clock.
//!
//! Key concepts:
//! - Dispatching events into a `QuizSession`
//! - Letting a question time out by advancing the clock
//! - Ending early and printing the review
//!
//! Run with: RUST_LOG=quizmind=debug cargo run --example scripted_quiz

use quizmind::core::{QuestionSet, QuizEvent};
use quizmind::timer::ManualClock;
use quizmind::{QuizError, QuizSession};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    println!("=== Scripted Quiz ===\n");

    let mut session = QuizSession::new(QuestionSet::builtin(), ManualClock::new())?;

    // Answer the first four questions, getting the third one wrong.
    for round in 0..4 {
        let Some(question) = session.current_question() else {
            break;
        };
        let correct = question.correct_answer_index().unwrap_or(0);
        let answer = if round == 2 { correct + 1 } else { correct };
        let text = question.text.clone();

        session.advance_clock(Duration::from_secs(4))?;
        let state = session.dispatch(QuizEvent::SelectAnswer { answer })?;
        println!(
            "Q{}: {} -> picked {} (score {})",
            round + 1,
            text,
            answer,
            state.score()
        );
        session.dispatch(QuizEvent::AdvanceQuestion)?;
    }

    // Nobody answers question five.
    println!("\nWaiting out question {}...", session.state().current_index() + 1);
    let ticks = session.advance_clock(Duration::from_secs(30))?;
    println!("  {ticks} ticks, now on question {}", session.state().current_index() + 1);

    // A second answer to the same question is refused.
    session.dispatch(QuizEvent::SelectAnswer { answer: 0 })?;
    match session.dispatch(QuizEvent::SelectAnswer { answer: 1 }) {
        Err(err @ QuizError::InvalidTransition { .. }) => println!("  rejected: {err}"),
        other => println!("  unexpected: {other:?}"),
    }

    session.dispatch(QuizEvent::EndQuiz)?;

    if let Some(review) = session.review() {
        println!("\n{review}");
        println!("{:.0}% correct", review.percentage());
        println!("\n{}", review.to_json()?);
    }

    println!("\nPath: {:?}", session.history().get_path());

    Ok(())
}
