//! Guard predicates for controlling state transitions.
//!
//! A guard is one condition that must hold for a transition to be permitted.
//! Guards receive the subject and the requested goal state and answer yes or no.

use super::state::State;
use super::subject::Subject;
use std::fmt;
use std::sync::Arc;

type Predicate<S> = dyn Fn(&dyn Subject<S>, &S) -> bool + Send + Sync;

/// Predicate that decides whether a transition attempt is currently authorized.
///
/// Guards of one transition run concurrently on separate threads, and a guard
/// may keep running after its answer no longer matters. A guard must therefore
/// be safe to call concurrently, must not assume it will be cancelled, and must
/// not mutate the subject.
///
/// Cloning a guard is cheap: the predicate is shared.
///
/// # Example
///
/// ```rust
/// use fsm_rules::core::{Guard, StateCell, Subject};
///
/// let below_ten = Guard::new(|subject: &dyn Subject<u32>, goal: &u32| {
///     subject.current_state() < 10 && *goal < 10
/// });
///
/// let cell = StateCell::new(3);
/// assert!(below_ten.check(&cell, &4));
/// assert!(!below_ten.check(&cell, &12));
/// ```
pub struct Guard<S: State> {
    predicate: Arc<Predicate<S>>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a predicate over `(subject, goal)`.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&dyn Subject<S>, &S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Guard that only looks at the subject's current state.
    ///
    /// ```rust
    /// use fsm_rules::core::{Guard, StateCell};
    ///
    /// let not_zero = Guard::when_current(|s: &i32| *s != 0);
    /// assert!(not_zero.check(&StateCell::new(1), &5));
    /// assert!(!not_zero.check(&StateCell::new(0), &5));
    /// ```
    pub fn when_current<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Self::new(move |subject, _goal| predicate(&subject.current_state()))
    }

    /// The default guard attached by `RuleSet::add_transition`: the subject's
    /// current state must equal `origin`.
    pub fn origin_is(origin: S) -> Self {
        Self::new(move |subject, _goal| subject.current_state() == origin)
    }

    /// Evaluate the guard for a subject and a goal state.
    pub fn check(&self, subject: &dyn Subject<S>, goal: &S) -> bool {
        (self.predicate)(subject, goal)
    }
}

impl<S: State> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
