//! Machine error types.

use crate::core::State;
use thiserror::Error;

/// Errors returned by [`Machine::transition`](super::Machine::transition).
///
/// There is a single failure kind: a missing rule and a rejecting guard both
/// surface as `InvalidTransition`. The states are carried for diagnostics only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError<S: State> {
    #[error("invalid transition from {from:?} to {to:?}")]
    InvalidTransition { from: S, to: S },
}

impl<S: State> MachineError<S> {
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }
}
