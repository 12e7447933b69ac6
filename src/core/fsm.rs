//! The FSM graph: states in first-seen order plus a name index.

use super::state::State;
use super::validation::StructuralError;
use serde::Serialize;
use std::collections::HashMap;

/// A validated, read-only finite state machine.
///
/// An `Fsm` is produced by [`build`](crate::builder::build) and never changes
/// afterwards; rebuilding means constructing a new one. It can be shared
/// freely between readers.
///
/// States are kept in the order they were first encountered among the
/// transitions. That order carries no meaning; use
/// [`workflow`](Fsm::workflow) for the canonical ordering.
///
/// # Example
///
/// ```rust
/// use statewalk::builder::build;
///
/// let fsm = build([("A", "B")]).unwrap();
///
/// assert_eq!(fsm.len(), 2);
/// assert_eq!(fsm.start_state().map(|s| s.name()), Some("A"));
/// assert!(fsm.state("B").is_some_and(|s| s.is_end()));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Fsm {
    states: Vec<State>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Fsm {
    pub(crate) fn from_parts(states: Vec<State>, index: HashMap<String, usize>) -> Self {
        Self { states, index }
    }

    /// All states, first-seen order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Look a state up by its exact name.
    pub fn state(&self, name: &str) -> Option<&State> {
        self.index.get(name).map(|&i| &self.states[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The start state, if the FSM has one.
    ///
    /// A built FSM always has exactly one.
    pub fn start_state(&self) -> Option<&State> {
        self.states.iter().find(|s| s.is_start())
    }

    pub fn end_states(&self) -> impl Iterator<Item = &State> {
        self.states.iter().filter(|s| s.is_end())
    }

    /// Total number of events across all states.
    pub fn event_count(&self) -> usize {
        self.states.iter().map(|s| s.events().len()).sum()
    }

    /// Deterministic depth-first ordering of the reachable states.
    ///
    /// See [`crate::workflow::workflow`].
    pub fn workflow(&self) -> Result<Vec<&State>, StructuralError> {
        crate::workflow::workflow(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::build;

    #[test]
    fn lookup_by_name() {
        let fsm = build([("to do", "doing"), ("to do", "on hold")]).unwrap();

        assert!(fsm.contains("doing"));
        assert!(!fsm.contains("done"));
        assert_eq!(fsm.state("on hold").map(|s| s.name()), Some("on hold"));
        assert!(fsm.state("On Hold").is_none());
    }

    #[test]
    fn states_keep_first_seen_order() {
        let fsm = build([("to do", "doing"), ("doing", "done")]).unwrap();
        let names: Vec<&str> = fsm.states().iter().map(|s| s.name()).collect();

        // the destination of a transition is discovered before its source
        assert_eq!(names, vec!["doing", "to do", "done"]);
    }

    #[test]
    fn end_states_are_the_leaves() {
        let fsm = build([("to do", "doing"), ("to do", "on hold")]).unwrap();
        let mut ends: Vec<&str> = fsm.end_states().map(|s| s.name()).collect();
        ends.sort_unstable();

        assert_eq!(ends, vec!["doing", "on hold"]);
    }

    #[test]
    fn default_fsm_is_empty() {
        let fsm = crate::core::Fsm::default();
        assert!(fsm.is_empty());
        assert!(fsm.start_state().is_none());
    }

    #[test]
    fn serializes_states_without_index() {
        let fsm = build([("A", "B")]).unwrap();
        let json = serde_json::to_value(&fsm).unwrap();

        assert_eq!(json["states"].as_array().map(Vec::len), Some(2));
        assert!(json.get("index").is_none());
    }
}
