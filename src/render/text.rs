//! Plain-text listings.

use crate::board::Board;
use crate::core::{Fsm, State, StructuralError};
use std::fmt;

/// Legend printed after an FSM listing.
pub const LEGEND: &str = "(S) ... state is a start state\n(E) ... state is an end state\n";

/// Workflow-ordered listing of states with their successors and flags.
///
/// ```text
///   (*) to do (-> doing, -> on hold) (S)
///   (*) doing (-) (E)
/// ```
pub struct FsmListing<'a> {
    states: Vec<&'a State>,
}

impl<'a> FsmListing<'a> {
    pub fn new(fsm: &'a Fsm) -> Result<Self, StructuralError> {
        Ok(Self {
            states: fsm.workflow()?,
        })
    }
}

impl fmt::Display for FsmListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for state in &self.states {
            let next = state.next_states();
            let next = if next.is_empty() {
                "-".to_string()
            } else {
                next.iter()
                    .map(|n| format!("-> {n}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            write!(f, "  (*) {} ({next})", state.name())?;
            if state.is_start() {
                write!(f, " (S)")?;
            }
            if state.is_end() {
                write!(f, " (E)")?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        write!(f, "{LEGEND}")
    }
}

/// Workflow-ordered listing of states and the issues in each.
pub struct BoardListing<'b, 'a> {
    board: &'b Board<'a>,
}

impl<'b, 'a> BoardListing<'b, 'a> {
    pub fn new(board: &'b Board<'a>) -> Self {
        Self { board }
    }
}

impl fmt::Display for BoardListing<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for column in self.board.columns() {
            writeln!(f, "  (*) {}", column.name())?;
            for issue in &column.issues {
                writeln!(f, "    (-) {}", issue.title)?;
            }
        }
        writeln!(f)
    }
}

pub fn fsm(fsm: &Fsm) -> Result<String, StructuralError> {
    Ok(FsmListing::new(fsm)?.to_string())
}

pub fn board(board: &Board<'_>) -> String {
    BoardListing::new(board).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build;
    use crate::core::Issue;

    #[test]
    fn fsm_listing_marks_start_and_end() {
        let fsm = build([("to do", "on hold"), ("to do", "doing")]).unwrap();
        let expected = "\n  (*) to do (-> doing, -> on hold) (S)\n  (*) doing (-) (E)\n  (*) on hold (-) (E)\n\n";

        assert_eq!(fsm_text(&fsm), format!("{expected}{LEGEND}"));
    }

    fn fsm_text(f: &Fsm) -> String {
        fsm(f).unwrap()
    }

    #[test]
    fn fsm_listing_shows_back_edges() {
        let fsm = build([("A", "B"), ("B", "C"), ("B", "A2"), ("A2", "B")]).unwrap();
        let text = fsm_text(&fsm);

        assert!(text.contains("  (*) B (-> A2, -> C)\n"));
        assert!(text.contains("  (*) A2 (-> B)\n"));
    }

    #[test]
    fn board_listing_nests_issues_under_states() {
        let fsm = build([("to do", "doing")]).unwrap();
        let issues = vec![Issue::new("write docs", "doing"), Issue::new("plan", "to do")];
        let board = Board::new(&fsm, &issues).unwrap();

        assert_eq!(
            super::board(&board),
            "\n  (*) to do\n    (-) plan\n  (*) doing\n    (-) write docs\n\n"
        );
    }

    #[test]
    fn empty_fsm_cannot_be_listed() {
        assert_eq!(fsm(&Fsm::default()), Err(StructuralError::NoStates));
    }
}
