//! Concurrent guard evaluation.
//!
//! Every guard of a matched transition runs on its own detached thread. The
//! caller blocks on the result channel until one guard answers `false` or all
//! guards answered `true`.
//!
//! Guards are never cancelled. After an early `false` the remaining threads run
//! to completion and their answers are dropped on the floor, because the
//! receiving end of the channel no longer exists.

use crate::core::{Guard, State, Subject};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use tracing::{trace, warn};

/// Evaluate `guards` in parallel and fold the answers with logical AND.
///
/// An empty guard list is vacuously true. A guard thread that panics (or could
/// not be spawned) never reports; once every other thread has finished the
/// channel disconnects and the attempt is denied.
pub(crate) fn all_guards_pass<S: State>(
    guards: Vec<Guard<S>>,
    subject: &Arc<dyn Subject<S>>,
    goal: &S,
) -> bool {
    let launched = guards.len();
    let (outcome_tx, outcome_rx) = mpsc::channel();

    for guard in guards {
        let outcome_tx = outcome_tx.clone();
        let subject = Arc::clone(subject);
        let goal = goal.clone();

        let spawned = thread::Builder::new()
            .name("fsm-guard".to_string())
            .spawn(move || {
                let outcome = guard.check(&*subject, &goal);
                // Err means the decision was already made without us.
                let _ = outcome_tx.send(outcome);
            });

        if let Err(err) = spawned {
            warn!(error = %err, "failed to spawn guard thread, treating guard as rejected");
        }
    }

    // Only the guard threads may keep the channel open.
    drop(outcome_tx);

    for received in 0..launched {
        match outcome_rx.recv() {
            Ok(true) => {}
            Ok(false) => {
                trace!(
                    still_running = launched - received - 1,
                    "guard rejected, not waiting for the rest"
                );
                return false;
            }
            Err(_) => {
                warn!(
                    missing = launched - received,
                    "guard finished without reporting an outcome"
                );
                return false;
            }
        }
    }

    true
}
