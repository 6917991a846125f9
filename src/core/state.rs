//! State identifiers for the machine.
//!
//! States are opaque: the engine only compares and hashes them. Meaning is
//! assigned entirely by the caller.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// Any value that is cheaply cloneable, comparable by equality, hashable and
/// thread-safe is a state. The trait is blanket-implemented, so integers and
/// fieldless enums work out of the box.
///
/// # Required Traits
///
/// - `Clone`: states are copied into transition keys and handed to guards
/// - `Eq` + `Hash`: states form the rule set's lookup key
/// - `Debug`: states appear in errors and log fields
/// - `Send` + `Sync` + `'static`: guards observe states from worker threads
///
/// # Example
///
/// ```rust
/// use fsm_rules::core::State;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Phase {
///     Idle,
///     Running,
/// }
///
/// fn assert_state<S: State>(_: &S) {}
///
/// assert_state(&Phase::Idle);
/// assert_state(&42u32);
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T> State for T where T: Clone + Eq + Hash + Debug + Send + Sync + 'static {}
