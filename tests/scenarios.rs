//! End-to-end scenarios: build, validate, walk.

use statewalk::builder::{build, build_from_value, FsmError};
use statewalk::core::{Fsm, StructuralError};

fn workflow_names(fsm: &Fsm) -> Vec<&str> {
    fsm.workflow().unwrap().iter().map(|s| s.name()).collect()
}

#[test]
fn two_branches_from_to_do() {
    let fsm = build([("to do", "doing"), ("to do", "on hold")]).unwrap();

    assert_eq!(fsm.len(), 3);
    assert_eq!(fsm.start_state().map(|s| s.name()), Some("to do"));

    let mut ends: Vec<&str> = fsm.end_states().map(|s| s.name()).collect();
    ends.sort_unstable();
    assert_eq!(ends, vec!["doing", "on hold"]);

    assert_eq!(workflow_names(&fsm), vec!["to do", "doing", "on hold"]);
}

#[test]
fn pure_cycle_has_no_start_state() {
    assert_eq!(
        build([("A", "B"), ("B", "C"), ("C", "A")]),
        Err(StructuralError::MissingStartState)
    );
}

#[test]
fn cycle_after_start_has_no_end_state() {
    assert_eq!(
        build([("A", "B"), ("B", "C"), ("C", "B")]),
        Err(StructuralError::MissingEndState)
    );
}

#[test]
fn two_sources_into_one_state_are_two_starts() {
    let err = build([("A", "B"), ("C", "B")]).unwrap_err();
    assert!(matches!(err, StructuralError::MultipleStartStates(_)));
    assert!(err.to_string().starts_with("multiple start states"));
}

#[test]
fn disconnected_pairs_are_two_starts() {
    assert!(matches!(
        build([("A", "B"), ("C", "D")]),
        Err(StructuralError::MultipleStartStates(_))
    ));
}

#[test]
fn two_state_loop_is_rejected() {
    assert_eq!(
        build([("A", "B"), ("B", "A")]),
        Err(StructuralError::MissingStartState)
    );
}

#[test]
fn single_transition() {
    let fsm = build([("A", "B")]).unwrap();

    assert_eq!(fsm.len(), 2);
    assert!(fsm.state("A").unwrap().is_start());
    assert!(fsm.state("B").unwrap().is_end());
    assert_eq!(workflow_names(&fsm), vec!["A", "B"]);
}

#[test]
fn branching_chain_with_back_edge() {
    let fsm = build([
        ("to do", "doing"),
        ("to do", "on hold"),
        ("doing", "done"),
        ("doing", "failed"),
        ("doing", "on hold"),
        ("on hold", "doing"),
    ])
    .unwrap();

    assert_eq!(
        workflow_names(&fsm),
        vec!["to do", "doing", "done", "failed", "on hold"]
    );
}

#[test]
fn branching_order_is_by_name() {
    let fsm = build([("S", "B"), ("S", "A")]).unwrap();
    let order = workflow_names(&fsm);

    let a = order.iter().position(|n| *n == "A").unwrap();
    let b = order.iter().position(|n| *n == "B").unwrap();
    assert!(a < b);
}

#[test]
fn raw_records_round_trip_through_yaml() {
    let value: serde_yaml::Value = serde_yaml::from_str(
        "
- from: to do
  to: doing
- from: doing
  to: done
",
    )
    .unwrap();

    let fsm = build_from_value(&value).unwrap();
    assert_eq!(workflow_names(&fsm), vec!["to do", "doing", "done"]);
}

#[test]
fn raw_records_from_json_are_accepted() {
    let value: serde_yaml::Value =
        serde_yaml::from_str(r#"[{"from": "A", "to": "B"}]"#).unwrap();
    assert!(build_from_value(&value).is_ok());
}

#[test]
fn malformed_records_fail_before_building() {
    let value: serde_yaml::Value = serde_yaml::from_str("transitions: oops").unwrap();
    assert!(matches!(
        build_from_value(&value),
        Err(FsmError::Malformed(_))
    ));
}
