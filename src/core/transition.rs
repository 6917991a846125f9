//! Transition keys.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered `(origin, exit)` pair of states.
///
/// Transitions are immutable values used as rule set keys. Equality and
/// hashing are structural over both fields.
///
/// # Example
///
/// ```rust
/// use fsm_rules::core::Transition;
///
/// let t = Transition::new(0, 1);
/// assert_eq!(t.origin(), &0);
/// assert_eq!(t.exit(), &1);
/// assert_eq!(t, Transition::from((0, 1)));
/// assert_ne!(t, Transition::new(1, 0));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Transition<S> {
    origin: S,
    exit: S,
}

impl<S: State> Transition<S> {
    pub fn new(origin: S, exit: S) -> Self {
        Self { origin, exit }
    }

    /// The state the transition starts from.
    pub fn origin(&self) -> &S {
        &self.origin
    }

    /// The state the transition leads to.
    pub fn exit(&self) -> &S {
        &self.exit
    }

    /// Split the transition back into its `(origin, exit)` parts.
    pub fn into_parts(self) -> (S, S) {
        (self.origin, self.exit)
    }
}

impl<S: State> From<(S, S)> for Transition<S> {
    fn from((origin, exit): (S, S)) -> Self {
        Self::new(origin, exit)
    }
}

impl<S: State> fmt::Display for Transition<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -> {:?}", self.origin, self.exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::collections::HashMap;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Running,
        Stopped,
    }

    #[test]
    fn equality_compares_both_fields() {
        let a = Transition::new(TestState::Idle, TestState::Running);

        assert_eq!(a, Transition::new(TestState::Idle, TestState::Running));
        assert_ne!(a, Transition::new(TestState::Idle, TestState::Stopped));
        assert_ne!(a, Transition::new(TestState::Running, TestState::Idle));
    }

    #[test]
    fn structurally_equal_keys_share_a_map_slot() {
        let mut map = HashMap::new();
        map.insert(Transition::new(1, 2), "first");
        map.insert(Transition::from((1, 2)), "second");

        assert_eq!(map.len(), 1);
        assert_eq!(map[&Transition::new(1, 2)], "second");
    }

    #[test]
    fn into_parts_returns_origin_then_exit() {
        let t = Transition::new(TestState::Running, TestState::Stopped);
        assert_eq!(t.into_parts(), (TestState::Running, TestState::Stopped));
    }

    #[test]
    fn display_shows_direction() {
        let t = Transition::new(TestState::Idle, TestState::Running);
        assert_eq!(t.to_string(), "Idle -> Running");
    }

    #[test]
    fn transition_serializes_correctly() {
        let t = Transition::new(TestState::Idle, TestState::Running);
        let json = serde_json::to_string(&t).unwrap();
        let deserialized: Transition<TestState> = serde_json::from_str(&json).unwrap();
        assert_eq!(t, deserialized);
    }
}
