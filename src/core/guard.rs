//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions that determine whether an event may be
//! applied to the current state. Each guard carries a short description that
//! becomes the reason of the rejection when it fails.

use std::fmt;

/// Named pure predicate over a state value.
///
/// # Example
///
/// ```rust
/// use quizmind::core::{Guard, QuizState};
///
/// let has_time_left = Guard::new("time left on the clock", |s: &QuizState| s.has_time_left());
///
/// assert!(has_time_left.check(&QuizState::default()));
/// assert!(!has_time_left.check(&QuizState::new(0)));
/// assert_eq!(has_time_left.description(), "time left on the clock");
/// ```
pub struct Guard<S> {
    description: &'static str,
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(description: &'static str, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            description,
            predicate: Box::new(predicate),
        }
    }

    /// Check if the guard allows a transition from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }

    pub fn description(&self) -> &'static str {
        self.description
    }
}

impl<S> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
