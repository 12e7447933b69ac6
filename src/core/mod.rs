//! Core FSM data model.
//!
//! This module contains the read-only model produced by the builder:
//! - `Transition` input records
//! - `State`s and their outgoing `Event`s
//! - the `Fsm` graph and its structural validation
//! - `Issue`s, which reference states by name only
//!
//! Nothing here performs I/O.

mod event;
mod fsm;
mod issue;
mod state;
mod transition;
mod validation;

pub use event::Event;
pub use fsm::Fsm;
pub use issue::Issue;
pub use state::State;
pub use transition::Transition;
pub use validation::StructuralError;
