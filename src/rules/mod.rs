//! Rule sets: which transitions exist and which guards protect them.
//!
//! A `RuleSet` maps a `Transition` key to the ordered list of guards that must
//! all pass for that transition to be permitted. A transition without an entry
//! is always denied.
//!
//! The map is a concurrent `DashMap`, so rules may be registered through a
//! shared reference even while other threads are deciding transitions. Guards
//! are copied out of the map before they run, so no lock is held while guard
//! code executes.
//!
//! # Example
//!
//! ```rust
//! use fsm_rules::core::{StateCell, Subject, Transition};
//! use fsm_rules::rules::create_rule_set;
//! use std::sync::Arc;
//!
//! const IDLE: u8 = 0;
//! const RUNNING: u8 = 1;
//!
//! let rules = create_rule_set([Transition::new(IDLE, RUNNING)]);
//!
//! let idle: Arc<dyn Subject<u8>> = Arc::new(StateCell::new(IDLE));
//! assert!(rules.permitted(&idle, &RUNNING));
//!
//! let running: Arc<dyn Subject<u8>> = Arc::new(StateCell::new(RUNNING));
//! assert!(!rules.permitted(&running, &RUNNING));
//! ```

mod evaluate;

use crate::core::{Guard, State, Subject, Transition};
use dashmap::DashMap;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Registry mapping transitions to their guards.
pub struct RuleSet<S: State> {
    rules: DashMap<Transition<S>, Vec<Guard<S>>>,
}

impl<S: State> RuleSet<S> {
    /// Create an empty rule set. Every transition is denied until registered.
    pub fn new() -> Self {
        Self {
            rules: DashMap::new(),
        }
    }

    /// Build a rule set with a default rule for each transition.
    ///
    /// Equivalent to calling [`RuleSet::add_transition`] for every item on a
    /// fresh rule set.
    pub fn from_transitions<I>(transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition<S>>,
    {
        let rules = Self::new();
        for transition in transitions {
            rules.add_transition(transition);
        }
        rules
    }

    /// Append guards to the list registered for `transition`.
    ///
    /// The entry is created if absent, even when `guards` is empty. A present
    /// entry with no guards permits the transition unconditionally.
    pub fn add_rule<I>(&self, transition: Transition<S>, guards: I)
    where
        I: IntoIterator<Item = Guard<S>>,
    {
        self.rules.entry(transition).or_default().extend(guards);
    }

    /// Register `transition` with the default guard: the subject's current
    /// state must equal the transition's origin.
    pub fn add_transition(&self, transition: Transition<S>) {
        let guard = Guard::origin_is(transition.origin().clone());
        self.add_rule(transition, [guard]);
    }

    /// Decide whether `subject` may move to `goal`.
    ///
    /// The lookup key is `(subject.current_state(), goal)`. With no matching
    /// entry the answer is `false`. Otherwise all guards of the entry run
    /// concurrently and the answer is `true` only if every guard returns
    /// `true`. The call returns as soon as one guard returns `false`; guards
    /// still running at that point are not stopped.
    pub fn permitted(&self, subject: &Arc<dyn Subject<S>>, goal: &S) -> bool {
        let attempt = Transition::new(subject.current_state(), goal.clone());
        self.permits(&attempt, subject)
    }

    /// Evaluate a fully formed attempt. `attempt.origin()` must be the state
    /// the subject was observed in.
    pub(crate) fn permits(&self, attempt: &Transition<S>, subject: &Arc<dyn Subject<S>>) -> bool {
        let guards = match self.rules.get(attempt) {
            Some(entry) => entry.value().clone(),
            None => {
                trace!(from = ?attempt.origin(), to = ?attempt.exit(), "no rule registered");
                return false;
            }
        };

        trace!(
            from = ?attempt.origin(),
            to = ?attempt.exit(),
            guards = guards.len(),
            "evaluating guards"
        );
        evaluate::all_guards_pass(guards, subject, attempt.exit())
    }

    /// Whether an entry exists for `transition`, regardless of its guards.
    pub fn contains(&self, transition: &Transition<S>) -> bool {
        self.rules.contains_key(transition)
    }

    /// Number of guards registered for `transition`, or `None` without an entry.
    pub fn guard_count(&self, transition: &Transition<S>) -> Option<usize> {
        self.rules.get(transition).map(|guards| guards.len())
    }

    /// Number of registered transitions.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Snapshot of the registered transitions, in no particular order.
    pub fn transitions(&self) -> Vec<Transition<S>> {
        self.rules.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Exit states registered for `origin`, in no particular order.
    pub fn exits_from(&self, origin: &S) -> Vec<S> {
        self.rules
            .iter()
            .filter(|entry| entry.key().origin() == origin)
            .map(|entry| entry.key().exit().clone())
            .collect()
    }
}

/// Create a rule set with a default rule for each of `transitions`.
pub fn create_rule_set<S, I>(transitions: I) -> RuleSet<S>
where
    S: State,
    I: IntoIterator<Item = Transition<S>>,
{
    RuleSet::from_transitions(transitions)
}

impl<S: State> Default for RuleSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> Clone for RuleSet<S> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<S: State> fmt::Debug for RuleSet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("transitions", &self.transitions())
            .finish()
    }
}

impl<S: State> FromIterator<Transition<S>> for RuleSet<S> {
    fn from_iter<I: IntoIterator<Item = Transition<S>>>(iter: I) -> Self {
        Self::from_transitions(iter)
    }
}

impl<S: State> Extend<Transition<S>> for RuleSet<S> {
    fn extend<I: IntoIterator<Item = Transition<S>>>(&mut self, iter: I) {
        for transition in iter {
            self.add_transition(transition);
        }
    }
}
