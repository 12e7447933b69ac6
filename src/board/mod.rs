//! Issues grouped by state, in workflow order.

use crate::core::{Fsm, Issue, State, StructuralError};
use tracing::warn;

/// One workflow state and the issues currently in it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column<'a> {
    pub state: &'a State,
    pub issues: Vec<&'a Issue>,
}

impl Column<'_> {
    pub fn name(&self) -> &str {
        self.state.name()
    }
}

/// A board view: one column per workflow state.
///
/// Issues whose state is unknown to the FSM, or unreachable from its start
/// state, do not appear in any column. They are kept in
/// [`unplaced`](Board::unplaced) and logged as warnings; they never cause an
/// error.
///
/// # Example
///
/// ```rust
/// use statewalk::board::Board;
/// use statewalk::builder::build;
/// use statewalk::core::Issue;
///
/// let fsm = build([("to do", "doing"), ("to do", "on hold")]).unwrap();
/// let issues = vec![
///     Issue::new("write docs", "doing"),
///     Issue::new("ship it", "released"),
/// ];
///
/// let board = Board::new(&fsm, &issues).unwrap();
/// assert_eq!(board.column("doing").map(|c| c.issues.len()), Some(1));
/// assert_eq!(board.unplaced().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board<'a> {
    columns: Vec<Column<'a>>,
    unplaced: Vec<&'a Issue>,
}

impl<'a> Board<'a> {
    pub fn new(fsm: &'a Fsm, issues: &'a [Issue]) -> Result<Self, StructuralError> {
        let mut columns: Vec<Column<'a>> = fsm
            .workflow()?
            .into_iter()
            .map(|state| Column {
                state,
                issues: Vec::new(),
            })
            .collect();

        let mut unplaced = Vec::new();
        for issue in issues {
            match columns.iter_mut().find(|c| issue.is_in(c.name())) {
                Some(column) => column.issues.push(issue),
                None => {
                    if fsm.contains(&issue.state) {
                        warn!(title = %issue.title, state = %issue.state, "issue is in a state unreachable from the start state");
                    } else {
                        warn!(title = %issue.title, state = %issue.state, "issue references an unknown state");
                    }
                    unplaced.push(issue);
                }
            }
        }

        Ok(Self { columns, unplaced })
    }

    pub fn columns(&self) -> &[Column<'a>] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column<'a>> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Issues that fit no column.
    pub fn unplaced(&self) -> &[&'a Issue] {
        &self.unplaced
    }

    /// Number of placed issues.
    pub fn issue_count(&self) -> usize {
        self.columns.iter().map(|c| c.issues.len()).sum()
    }
}
