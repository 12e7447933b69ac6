//! Structural invariants of an FSM.
//!
//! A well-formed FSM has exactly one start state and at least one end state.
//! Violations are accumulated with `Validation` so callers can see all of
//! them; [`Fsm::check`] reports the first.

use super::fsm::Fsm;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A broken structural invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("no states")]
    NoStates,

    #[error("missing start state")]
    MissingStartState,

    #[error("multiple start states: {}", .0.join(", "))]
    MultipleStartStates(Vec<String>),

    #[error("missing end state")]
    MissingEndState,
}

impl Fsm {
    /// Check every invariant, accumulating ALL violations.
    ///
    /// Order of reported violations: empty graph, start count, end count.
    /// An empty graph reports only [`StructuralError::NoStates`].
    pub fn violations(&self) -> Validation<(), NonEmptyVec<StructuralError>> {
        if self.is_empty() {
            return Validation::fail(StructuralError::NoStates);
        }

        let starts: Vec<String> = self
            .states()
            .iter()
            .filter(|s| s.is_start())
            .map(|s| s.name().to_string())
            .collect();

        let start_check = match starts.len() {
            0 => Validation::fail(StructuralError::MissingStartState),
            1 => Validation::success(()),
            _ => Validation::fail(StructuralError::MultipleStartStates(starts)),
        };

        let end_check = if self.end_states().next().is_some() {
            Validation::success(())
        } else {
            Validation::fail(StructuralError::MissingEndState)
        };

        Validation::all_vec(vec![start_check, end_check]).map(|_| ())
    }

    /// Fail-fast form of [`violations`](Fsm::violations).
    pub fn check(&self) -> Result<(), StructuralError> {
        match self.violations() {
            Validation::Success(()) => Ok(()),
            Validation::Failure(errors) => Err(errors.head().clone()),
        }
    }
}
