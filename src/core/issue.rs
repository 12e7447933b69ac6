//! Work items tagged with a state name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An external work item pinned to one state.
///
/// The state is a free-form name. Nothing requires it to exist in any FSM;
/// a mismatch only matters to presentation code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub title: String,
    pub state: String,
}

impl Issue {
    pub fn new(title: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            state: state.into(),
        }
    }

    pub fn is_in(&self, state: &str) -> bool {
        self.state == state
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.state)
    }
}
