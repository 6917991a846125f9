//! The contract a caller's domain object satisfies to be driven by a machine.

use super::state::State;
use std::sync::{PoisonError, RwLock};

/// An entity that reports and accepts its current state.
///
/// Guards observe the subject from worker threads while a transition is being
/// decided, so both methods take `&self`; implementors provide their own
/// interior mutability.
///
/// `set_state` is unconditional. A subject must never reject a new state:
/// all validation belongs in guards.
///
/// # Example
///
/// ```rust
/// use fsm_rules::core::Subject;
/// use std::sync::atomic::{AtomicU8, Ordering};
///
/// struct Door {
///     state: AtomicU8,
/// }
///
/// impl Subject<u8> for Door {
///     fn current_state(&self) -> u8 {
///         self.state.load(Ordering::SeqCst)
///     }
///
///     fn set_state(&self, state: u8) {
///         self.state.store(state, Ordering::SeqCst);
///     }
/// }
///
/// let door = Door { state: AtomicU8::new(0) };
/// door.set_state(1);
/// assert_eq!(door.current_state(), 1);
/// ```
pub trait Subject<S: State>: Send + Sync {
    /// The state the subject is in right now.
    fn current_state(&self) -> S;

    /// Move the subject to `state`. Must not fail.
    fn set_state(&self, state: S);
}

/// A minimal subject that only holds a state value.
///
/// Useful when the state itself is the whole domain object, and in tests.
#[derive(Debug, Default)]
pub struct StateCell<S> {
    state: RwLock<S>,
}

impl<S: State> StateCell<S> {
    pub fn new(initial: S) -> Self {
        Self {
            state: RwLock::new(initial),
        }
    }
}

impl<S: State> Subject<S> for StateCell<S> {
    fn current_state(&self) -> S {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_state(&self, state: S) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = state;
    }
}
