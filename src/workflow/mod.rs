//! Deterministic traversal of an FSM.
//!
//! The workflow is a depth-first pre-order walk from the start state. At each
//! state, successors are taken in ascending name order, and a state reached a
//! second time is skipped ("first path wins"). States unreachable from the
//! start are not part of the workflow.
//!
//! The result is the canonical state order for every listing, graph and
//! issue board, and depends only on the graph, never on the order of the
//! transitions it was built from.

use crate::core::{Fsm, State, StructuralError};
use std::collections::HashSet;
use tracing::trace;

/// Walk `fsm` from its start state.
///
/// Fails with [`StructuralError::NoStates`] on an empty FSM, or with whatever
/// invariant the FSM no longer satisfies.
///
/// # Example
///
/// ```rust
/// use statewalk::builder::build;
/// use statewalk::workflow::workflow;
///
/// let fsm = build([
///     ("to do", "doing"),
///     ("to do", "on hold"),
///     ("doing", "done"),
///     ("doing", "failed"),
///     ("doing", "on hold"),
///     ("on hold", "doing"),
/// ])
/// .unwrap();
///
/// let names: Vec<&str> = workflow(&fsm).unwrap().iter().map(|s| s.name()).collect();
/// assert_eq!(names, ["to do", "doing", "done", "failed", "on hold"]);
/// ```
pub fn workflow(fsm: &Fsm) -> Result<Vec<&State>, StructuralError> {
    fsm.check()?;
    let start = fsm.start_state().ok_or(StructuralError::MissingStartState)?;

    let mut visited: HashSet<&str> = HashSet::with_capacity(fsm.len());
    let mut order: Vec<&State> = Vec::with_capacity(fsm.len());
    let mut stack: Vec<&State> = vec![start];

    while let Some(state) = stack.pop() {
        if !visited.insert(state.name()) {
            continue;
        }
        trace!(state = state.name(), depth = stack.len(), "visit");
        order.push(state);

        // Reverse so the smallest name is popped first.
        for next in state.next_states().into_iter().rev() {
            if visited.contains(next) {
                continue;
            }
            if let Some(next_state) = fsm.state(next) {
                stack.push(next_state);
            }
        }
    }

    Ok(order)
}
