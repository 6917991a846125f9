//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::core::{State, Subject};
use crate::machine::Machine;
use crate::rules::RuleSet;
use std::sync::Arc;

/// Builder for constructing machines with a fluent API.
pub struct MachineBuilder<S: State> {
    rules: Option<Arc<RuleSet<S>>>,
    subject: Option<Arc<dyn Subject<S>>>,
}

impl<S: State> MachineBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            rules: None,
            subject: None,
        }
    }

    /// Set the rule set (required).
    pub fn rules(mut self, rules: impl Into<Arc<RuleSet<S>>>) -> Self {
        self.rules = Some(rules.into());
        self
    }

    /// Set the subject (required).
    pub fn subject(mut self, subject: Arc<dyn Subject<S>>) -> Self {
        self.subject = Some(subject);
        self
    }

    /// Build the machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Machine<S>, BuildError> {
        let rules = self.rules.ok_or(BuildError::MissingRules)?;
        let subject = self.subject.ok_or(BuildError::MissingSubject)?;

        Ok(Machine::new(rules, subject))
    }
}

impl<S: State> Default for MachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
