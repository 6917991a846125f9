//! Build errors for the machine builder.

use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Rule set not specified. Call .rules(rule_set) before .build()")]
    MissingRules,

    #[error("Subject not specified. Call .subject(subject) before .build()")]
    MissingSubject,
}
