//! Named FSM states and their start/end flags.
//!
//! A state is identified by its case-sensitive name. Two states are the same
//! entity exactly when their names are equal.

use super::event::Event;
use serde::Serialize;

/// A node of the FSM graph.
///
/// States are only created by the builder: every state is discovered through
/// some transition, starts out both start- and end-eligible, and loses those
/// flags as it is reached or left. Once the owning [`Fsm`](super::Fsm) is
/// built, a state is read-only.
///
/// # Example
///
/// ```rust
/// use statewalk::builder::build;
///
/// let fsm = build([("to do", "doing"), ("to do", "on hold")]).unwrap();
/// let todo = fsm.state("to do").unwrap();
///
/// assert!(todo.is_start());
/// assert!(!todo.is_end());
/// assert_eq!(todo.next_states(), vec!["doing", "on hold"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct State {
    name: String,
    events: Vec<Event>,
    is_start: bool,
    is_end: bool,
}

impl State {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            events: Vec::new(),
            is_start: true,
            is_end: true,
        }
    }

    /// Unique name of the state.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outgoing events in insertion order. Duplicates are kept.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Whether this is the (single) entry state.
    pub fn is_start(&self) -> bool {
        self.is_start
    }

    /// Whether this state has no outgoing events.
    pub fn is_end(&self) -> bool {
        self.is_end
    }

    /// Destination names sorted ascending, one entry per event.
    pub fn next_states(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.events.iter().map(Event::next_state).collect();
        names.sort_unstable();
        names
    }

    pub(crate) fn reached(&mut self) {
        self.is_start = false;
    }

    pub(crate) fn leave_to(&mut self, event: Event) {
        self.is_end = false;
        self.events.push(event);
    }
}
