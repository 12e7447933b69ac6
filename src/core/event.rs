//! Outgoing edges of a state.

use serde::{Deserialize, Serialize};

/// A directed edge owned by its source [`State`](super::State).
///
/// The destination is held by name and resolved through the owning
/// [`Fsm`](super::Fsm).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Trigger label, absent for plain transitions
    pub enter: Option<String>,
    /// Name of the destination state
    pub next_state: String,
}

impl Event {
    pub fn new(next_state: impl Into<String>) -> Self {
        Self {
            enter: None,
            next_state: next_state.into(),
        }
    }

    pub fn next_state(&self) -> &str {
        &self.next_state
    }
}
