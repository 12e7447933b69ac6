//! FSM construction from transition records.

use crate::builder::error::{FsmError, MalformedInputError};
use crate::core::{Event, Fsm, State, StructuralError, Transition};
use serde_yaml::Value;
use std::collections::HashMap;
use tracing::debug;

/// Build and validate an FSM from typed transitions.
///
/// States are discovered in input order (destination before source), every
/// destination loses its start flag and every source its end flag. Identical
/// transitions produce identical, separate events.
///
/// # Example
///
/// ```rust
/// use statewalk::builder::build;
/// use statewalk::core::StructuralError;
///
/// let fsm = build([("to do", "doing"), ("to do", "on hold")]).unwrap();
/// assert_eq!(fsm.len(), 3);
///
/// let err = build([("A", "B"), ("C", "B")]).unwrap_err();
/// assert!(matches!(err, StructuralError::MultipleStartStates(_)));
/// ```
pub fn build<I, T>(transitions: I) -> Result<Fsm, StructuralError>
where
    I: IntoIterator<Item = T>,
    T: Into<Transition>,
{
    let transitions: Vec<Transition> = transitions.into_iter().map(Into::into).collect();
    let fsm = assemble(&transitions);
    fsm.check()?;

    debug!(
        states = fsm.len(),
        transitions = transitions.len(),
        events = fsm.event_count(),
        "built FSM"
    );
    Ok(fsm)
}

/// Decode raw transition records without creating any state.
///
/// `value` must be a sequence of mappings with string `from` and `to` keys
/// and an optional string `input`.
pub fn parse_transitions(value: &Value) -> Result<Vec<Transition>, MalformedInputError> {
    let records = value
        .as_sequence()
        .ok_or(MalformedInputError::NotAList {
            found: kind_of(value),
        })?;

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            serde_yaml::from_value(record.clone()).map_err(|e| {
                MalformedInputError::InvalidRecord {
                    index,
                    reason: e.to_string(),
                }
            })
        })
        .collect()
}

/// Parse raw records, then build. Nothing is built if parsing fails.
pub fn build_from_value(value: &Value) -> Result<Fsm, FsmError> {
    let transitions = parse_transitions(value)?;
    Ok(build(transitions)?)
}

/// Fluent collector of transitions.
///
/// # Example
///
/// ```rust
/// use statewalk::builder::FsmBuilder;
///
/// let fsm = FsmBuilder::new()
///     .transition("to do", "doing")
///     .transition("doing", "done")
///     .build()
///     .unwrap();
///
/// assert_eq!(fsm.start_state().map(|s| s.name()), Some("to do"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FsmBuilder {
    transitions: Vec<Transition>,
}

impl FsmBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `from -> to` transition.
    pub fn transition(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.transitions.push(Transition::new(from, to));
        self
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions<I, T>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Transition>,
    {
        self.transitions
            .extend(transitions.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Result<Fsm, StructuralError> {
        build(self.transitions)
    }
}

fn assemble(transitions: &[Transition]) -> Fsm {
    let mut states: Vec<State> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    // Discovery: every name gets a start+end eligible state.
    let mut intern = |name: &str| -> usize {
        *index.entry(name.to_string()).or_insert_with(|| {
            states.push(State::new(name));
            states.len() - 1
        })
    };
    let edges: Vec<(usize, usize)> = transitions
        .iter()
        .map(|t| {
            let to = intern(&t.to);
            let from = intern(&t.from);
            (from, to)
        })
        .collect();

    // Fold: clear flags and attach events.
    for ((from, to), t) in edges.into_iter().zip(transitions) {
        states[to].reached();
        states[from].leave_to(Event {
            enter: t.input.clone(),
            next_state: t.to.clone(),
        });
    }

    Fsm::from_parts(states, index)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
