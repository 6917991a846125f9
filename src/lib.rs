//! fsm-rules: a rule-driven finite state machine
//!
//! A machine decides whether a subject may move from its current state to a
//! goal state by looking up the guards registered for that `(origin, goal)`
//! pair and evaluating all of them concurrently. The subject is only written
//! when every guard agrees.
//!
//! # Core Concepts
//!
//! - **State**: any comparable, hashable identifier (integers, fieldless enums)
//! - **Transition**: an `(origin, exit)` pair used as a lookup key
//! - **Guard**: a predicate over `(subject, goal)`; all guards of a transition must pass
//! - **RuleSet**: transitions mapped to their guards; unknown transitions are denied
//! - **Subject**: the caller's object that reports and accepts its state
//! - **Machine**: a rule set bound to a subject, applying permitted transitions
//!
//! # Guard evaluation
//!
//! Each guard runs on its own thread. A decision is returned as soon as one
//! guard says no; guards still running at that point are not cancelled and
//! finish in the background. Guards have no timeout, so a guard that never
//! returns blocks the transition forever.
//!
//! # Example
//!
//! ```rust
//! use fsm_rules::core::{Guard, StateCell, Subject, Transition};
//! use fsm_rules::machine::Machine;
//! use fsm_rules::rules::create_rule_set;
//! use std::sync::Arc;
//!
//! const IDLE: u32 = 0;
//! const RUNNING: u32 = 1;
//! const STOPPED: u32 = 2;
//!
//! let rules = create_rule_set([
//!     Transition::new(IDLE, RUNNING),
//!     Transition::new(RUNNING, STOPPED),
//! ]);
//! rules.add_rule(
//!     Transition::new(RUNNING, STOPPED),
//!     [Guard::new(|_: &dyn Subject<u32>, goal: &u32| *goal == STOPPED)],
//! );
//!
//! let subject = Arc::new(StateCell::new(IDLE));
//! let machine = Machine::new(rules, subject.clone());
//!
//! assert!(machine.transition(STOPPED).is_err());
//! machine.transition(RUNNING).unwrap();
//! machine.transition(STOPPED).unwrap();
//! assert_eq!(subject.current_state(), STOPPED);
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Guard, State, StateCell, Subject, Transition};
pub use machine::{Machine, MachineError};
pub use rules::{create_rule_set, RuleSet};
