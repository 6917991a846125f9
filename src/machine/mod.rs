//! The machine: a rule set bound to a subject.
//!
//! A `Machine` holds no state of its own. Every call to
//! [`Machine::transition`] reads the subject's current state, asks the rule set
//! whether the move is permitted, and only then writes the goal state back.
//!
//! Both halves are replaceable between attempts with [`Machine::set_rules`] and
//! [`Machine::set_subject`]. Those take `&mut self`, so a machine cannot be
//! rebound while one of its own transitions is in flight.
//!
//! A subject shared by several machines (or several clones of one machine) is
//! not protected: two concurrent transitions from the same origin to two
//! permitted goals can both succeed, and the last write wins. Callers that need
//! exclusivity must synchronize around `transition` themselves.

mod error;

pub use error::MachineError;

use crate::core::{State, Subject, Transition};
use crate::rules::RuleSet;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A pairing of rules and a subject.
///
/// # Example
///
/// ```rust
/// use fsm_rules::core::{StateCell, Subject, Transition};
/// use fsm_rules::machine::Machine;
/// use fsm_rules::rules::create_rule_set;
/// use std::sync::Arc;
///
/// let rules = create_rule_set([Transition::new(0u8, 1), Transition::new(1, 2)]);
/// let light = Arc::new(StateCell::new(0u8));
/// let machine = Machine::new(rules, light.clone());
///
/// machine.transition(1).unwrap();
/// assert!(machine.transition(0).is_err());
/// assert_eq!(light.current_state(), 1);
/// ```
pub struct Machine<S: State> {
    rules: Arc<RuleSet<S>>,
    subject: Arc<dyn Subject<S>>,
}

impl<S: State> Machine<S> {
    /// Bind `rules` to `subject`. The subject's initial state is not checked
    /// against the rules.
    pub fn new(rules: impl Into<Arc<RuleSet<S>>>, subject: Arc<dyn Subject<S>>) -> Self {
        Self {
            rules: rules.into(),
            subject,
        }
    }

    /// Attempt to move the subject to `goal`.
    ///
    /// The subject is written only if the rule set permits the move; a denied
    /// attempt leaves it untouched.
    pub fn transition(&self, goal: S) -> Result<(), MachineError<S>> {
        let attempt = Transition::new(self.subject.current_state(), goal);

        if !self.rules.permits(&attempt, &self.subject) {
            debug!(from = ?attempt.origin(), to = ?attempt.exit(), "transition denied");
            let (from, to) = attempt.into_parts();
            return Err(MachineError::InvalidTransition { from, to });
        }

        debug!(from = ?attempt.origin(), to = ?attempt.exit(), "transition applied");
        let (_, goal) = attempt.into_parts();
        self.subject.set_state(goal);
        Ok(())
    }

    /// Whether a transition to `goal` would currently be permitted.
    ///
    /// Guards run exactly as they would for [`Machine::transition`], but the
    /// subject is never written.
    pub fn can_transition(&self, goal: &S) -> bool {
        self.rules.permitted(&self.subject, goal)
    }

    /// The subject's current state.
    pub fn current_state(&self) -> S {
        self.subject.current_state()
    }

    pub fn rules(&self) -> &Arc<RuleSet<S>> {
        &self.rules
    }

    /// Replace the rule set used by later attempts.
    pub fn set_rules(&mut self, rules: impl Into<Arc<RuleSet<S>>>) {
        self.rules = rules.into();
    }

    pub fn subject(&self) -> &Arc<dyn Subject<S>> {
        &self.subject
    }

    /// Rebind the machine to a different subject.
    pub fn set_subject(&mut self, subject: Arc<dyn Subject<S>>) {
        self.subject = subject;
    }
}

impl<S: State> Clone for Machine<S> {
    fn clone(&self) -> Self {
        Self {
            rules: Arc::clone(&self.rules),
            subject: Arc::clone(&self.subject),
        }
    }
}

impl<S: State> fmt::Debug for Machine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("rules", &self.rules)
            .field("current_state", &self.subject.current_state())
            .finish()
    }
}
