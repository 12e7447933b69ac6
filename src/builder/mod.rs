//! Construction of validated FSMs.
//!
//! Two entry points:
//! - [`build`] for typed transitions, failing with a `StructuralError`
//! - [`build_from_value`] for raw records decoded from YAML or JSON, which
//!   additionally fails with a `MalformedInputError` before any state exists

pub mod error;
mod fsm;

pub use error::{FsmError, MalformedInputError};
pub use fsm::{build, build_from_value, parse_transitions, FsmBuilder};
