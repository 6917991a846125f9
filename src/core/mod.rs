//! Core state machine types.
//!
//! This module contains the leaf vocabulary of the engine:
//! - State identifiers via the `State` trait
//! - `Transition` keys pairing an origin with an exit state
//! - `Guard` predicates that authorize transition attempts
//! - The `Subject` contract a caller's domain object implements

mod guard;
mod state;
mod subject;
mod transition;

pub use guard::Guard;
pub use state::State;
pub use subject::{StateCell, Subject};
pub use transition::Transition;
