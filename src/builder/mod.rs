//! Builder API for ergonomic rule set and machine construction.
//!
//! This module provides fluent builders and a macro for declaring states, so a
//! whole machine can be described in one expression.
//!
//! # Example
//!
//! ```
//! use fsm_rules::builder::{MachineBuilder, RuleSetBuilder};
//! use fsm_rules::core::{StateCell, Subject};
//! use fsm_rules::state_enum;
//! use std::sync::Arc;
//!
//! state_enum! {
//!     enum Door {
//!         Closed,
//!         Open,
//!         Locked,
//!     }
//! }
//!
//! let door = Arc::new(StateCell::new(Door::Closed));
//! let machine = MachineBuilder::new()
//!     .rules(
//!         RuleSetBuilder::new()
//!             .transition(Door::Closed, Door::Open)
//!             .transition(Door::Open, Door::Closed)
//!             .transition(Door::Closed, Door::Locked)
//!             .build(),
//!     )
//!     .subject(door.clone())
//!     .build()
//!     .unwrap();
//!
//! machine.transition(Door::Locked).unwrap();
//! assert!(machine.transition(Door::Open).is_err());
//! assert_eq!(door.current_state(), Door::Locked);
//! ```

pub mod error;
pub mod machine;
pub mod macros;
pub mod rules;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use rules::RuleSetBuilder;
