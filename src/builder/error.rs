//! Errors raised while turning raw records into an FSM.

use crate::core::StructuralError;
use thiserror::Error;

/// The transition source is not a list of `from`/`to` records.
///
/// Raised before any state is created.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInputError {
    #[error("transitions must be a list of records, found {found}")]
    NotAList { found: &'static str },

    #[error("transition #{index} is not a valid from/to record: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

/// Any failure of [`build_from_value`](super::build_from_value).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsmError {
    #[error("malformed input: {0}")]
    Malformed(#[from] MalformedInputError),

    #[error("invalid FSM: {0}")]
    Structural(#[from] StructuralError),
}
