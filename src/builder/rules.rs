//! Builder for constructing rule sets.

use crate::core::{Guard, State, Subject, Transition};
use crate::rules::RuleSet;

/// Builder for constructing rule sets with a fluent API.
pub struct RuleSetBuilder<S: State> {
    rules: RuleSet<S>,
}

impl<S: State> RuleSetBuilder<S> {
    /// Create a new builder around an empty rule set.
    pub fn new() -> Self {
        Self {
            rules: RuleSet::new(),
        }
    }

    /// Allow `from -> to` with the default origin guard.
    pub fn transition(self, from: S, to: S) -> Self {
        self.rules.add_transition(Transition::new(from, to));
        self
    }

    /// Allow each of `transitions` with the default origin guard.
    pub fn transitions<I>(self, transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition<S>>,
    {
        for transition in transitions {
            self.rules.add_transition(transition);
        }
        self
    }

    /// Allow `from -> to` with the default origin guard plus `predicate`.
    pub fn when<F>(self, from: S, to: S, predicate: F) -> Self
    where
        F: Fn(&dyn Subject<S>, &S) -> bool + Send + Sync + 'static,
    {
        let transition = Transition::new(from, to);
        self.rules.add_transition(transition.clone());
        self.rules.add_rule(transition, [Guard::new(predicate)]);
        self
    }

    /// Append raw guards to `transition`, without the default origin guard.
    pub fn rule<I>(self, transition: Transition<S>, guards: I) -> Self
    where
        I: IntoIterator<Item = Guard<S>>,
    {
        self.rules.add_rule(transition, guards);
        self
    }

    /// Finish building.
    pub fn build(self) -> RuleSet<S> {
        self.rules
    }
}

impl<S: State> Default for RuleSetBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateCell;
    use std::sync::Arc;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Initial,
        Processing,
        Complete,
        Failed,
    }

    fn at(state: TestState) -> Arc<dyn Subject<TestState>> {
        Arc::new(StateCell::new(state))
    }

    #[test]
    fn empty_builder_builds_empty_rule_set() {
        let rules = RuleSetBuilder::<TestState>::new().build();
        assert!(rules.is_empty());
    }

    #[test]
    fn transition_registers_default_guard() {
        let rules = RuleSetBuilder::new()
            .transition(TestState::Initial, TestState::Processing)
            .build();

        let t = Transition::new(TestState::Initial, TestState::Processing);
        assert_eq!(rules.guard_count(&t), Some(1));
        assert!(rules.permitted(&at(TestState::Initial), &TestState::Processing));
    }

    #[test]
    fn transitions_registers_each() {
        let rules = RuleSetBuilder::new()
            .transitions([
                Transition::new(TestState::Initial, TestState::Processing),
                Transition::new(TestState::Processing, TestState::Complete),
            ])
            .build();

        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn when_adds_predicate_on_top_of_origin_guard() {
        let rules = RuleSetBuilder::new()
            .when(
                TestState::Processing,
                TestState::Failed,
                |_: &dyn Subject<TestState>, goal: &TestState| *goal == TestState::Failed,
            )
            .build();

        let t = Transition::new(TestState::Processing, TestState::Failed);
        assert_eq!(rules.guard_count(&t), Some(2));
        assert!(rules.permitted(&at(TestState::Processing), &TestState::Failed));
    }

    #[test]
    fn rejecting_predicate_blocks_transition() {
        let rules = RuleSetBuilder::new()
            .when(
                TestState::Processing,
                TestState::Complete,
                |_: &dyn Subject<TestState>, _: &TestState| false,
            )
            .build();

        assert!(!rules.permitted(&at(TestState::Processing), &TestState::Complete));
    }

    #[test]
    fn rule_skips_default_guard() {
        let t = Transition::new(TestState::Complete, TestState::Initial);
        let rules = RuleSetBuilder::new().rule(t, []).build();

        assert_eq!(rules.guard_count(&t), Some(0));
        assert!(rules.permitted(&at(TestState::Complete), &TestState::Initial));
    }
}
