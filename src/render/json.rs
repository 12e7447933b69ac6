//! JSON output for tooling.

use super::RenderError;
use crate::board::Board;
use crate::core::Fsm;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct WorkflowEntry<'a> {
    name: &'a str,
    is_start: bool,
    is_end: bool,
    next_states: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
struct BoardEntry<'a> {
    state: &'a str,
    issues: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
struct BoardDocument<'a> {
    columns: Vec<BoardEntry<'a>>,
    unplaced: Vec<&'a crate::core::Issue>,
}

/// Pretty-printed array of workflow states.
pub fn workflow(fsm: &Fsm) -> Result<String, RenderError> {
    let entries: Vec<WorkflowEntry<'_>> = fsm
        .workflow()?
        .into_iter()
        .map(|state| WorkflowEntry {
            name: state.name(),
            is_start: state.is_start(),
            is_end: state.is_end(),
            next_states: state.next_states(),
        })
        .collect();

    Ok(serde_json::to_string_pretty(&entries)?)
}

/// Pretty-printed board: columns with issue titles, plus unplaced issues.
pub fn board(board: &Board<'_>) -> Result<String, RenderError> {
    let document = BoardDocument {
        columns: board
            .columns()
            .iter()
            .map(|c| BoardEntry {
                state: c.name(),
                issues: c.issues.iter().map(|i| i.title.as_str()).collect(),
            })
            .collect(),
        unplaced: board.unplaced().to_vec(),
    };

    Ok(serde_json::to_string_pretty(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build;
    use crate::core::Issue;
    use serde_json::{json, Value};

    #[test]
    fn workflow_lists_flags_and_successors() {
        let fsm = build([("A", "C"), ("A", "B")]).unwrap();
        let value: Value = serde_json::from_str(&workflow(&fsm).unwrap()).unwrap();

        assert_eq!(
            value,
            json!([
                { "name": "A", "is_start": true, "is_end": false, "next_states": ["B", "C"] },
                { "name": "B", "is_start": false, "is_end": true, "next_states": [] },
                { "name": "C", "is_start": false, "is_end": true, "next_states": [] },
            ])
        );
    }

    #[test]
    fn board_includes_unplaced_issues() {
        let fsm = build([("A", "B")]).unwrap();
        let issues = vec![Issue::new("t1", "B"), Issue::new("t2", "nowhere")];
        let board = Board::new(&fsm, &issues).unwrap();
        let value: Value = serde_json::from_str(&super::board(&board).unwrap()).unwrap();

        assert_eq!(value["columns"][1], json!({ "state": "B", "issues": ["t1"] }));
        assert_eq!(value["unplaced"], json!([{ "title": "t2", "state": "nowhere" }]));
    }

    #[test]
    fn empty_fsm_is_rejected() {
        assert!(matches!(
            workflow(&Fsm::default()),
            Err(RenderError::Structural(_))
        ));
    }
}
