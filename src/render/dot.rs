//! Graphviz DOT source.
//!
//! The start state is drawn as a double circle and end states as circles.
//! Every event becomes one edge, so duplicate transitions show as parallel
//! edges.

use crate::core::{Event, Fsm, StructuralError};
use std::fmt::Write;

pub fn fsm(fsm: &Fsm) -> Result<String, StructuralError> {
    let states = fsm.workflow()?;
    let mut out = String::from("digraph FSM {\n    rankdir=LR;\n");

    for state in &states {
        let name = quote(state.name());
        let shape = if state.is_start() {
            ", shape=doublecircle"
        } else if state.is_end() {
            ", shape=circle"
        } else {
            ""
        };
        // Writing into a String cannot fail.
        let _ = writeln!(out, "    {name} [label={name}{shape}];");
    }

    for state in &states {
        let mut events: Vec<&Event> = state.events().iter().collect();
        events.sort_by(|a, b| a.next_state.cmp(&b.next_state));
        for event in events {
            let _ = write!(
                out,
                "    {} -> {}",
                quote(state.name()),
                quote(&event.next_state)
            );
            match &event.enter {
                Some(label) => {
                    let _ = writeln!(out, " [label={}];", quote(label));
                }
                None => out.push_str(";\n"),
            }
        }
    }

    out.push_str("}\n");
    Ok(out)
}

fn quote(id: &str) -> String {
    let mut quoted = String::with_capacity(id.len() + 2);
    quoted.push('"');
    for c in id.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
