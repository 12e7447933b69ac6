//! Statewalk: declarative finite state machines for issue boards
//!
//! Statewalk turns an unordered list of `from -> to` transitions into a
//! validated FSM, walks it in a deterministic order, and groups tagged work
//! items ("issues") by state in that order.
//!
//! The core is pure: building and walking perform no I/O and keep no shared
//! mutable state. Loading files and rendering text live at the edges.
//!
//! # Core Concepts
//!
//! - **FSM**: named states connected by events; exactly one start state and
//!   at least one end state
//! - **Workflow**: depth-first pre-order walk from the start state, taking
//!   successors in name order
//! - **Board**: issues grouped under the workflow's states
//!
//! # Example
//!
//! ```rust
//! use statewalk::board::Board;
//! use statewalk::builder::build;
//! use statewalk::core::Issue;
//!
//! let fsm = build([
//!     ("to do", "doing"),
//!     ("to do", "on hold"),
//!     ("doing", "done"),
//! ])
//! .unwrap();
//!
//! let order: Vec<&str> = fsm.workflow().unwrap().iter().map(|s| s.name()).collect();
//! assert_eq!(order, ["to do", "doing", "done", "on hold"]);
//!
//! let issues = vec![Issue::new("write docs", "doing")];
//! let board = Board::new(&fsm, &issues).unwrap();
//! assert_eq!(board.issue_count(), 1);
//! ```

pub mod board;
pub mod builder;
pub mod core;
pub mod loader;
pub mod render;
pub mod workflow;

// Re-export commonly used types
pub use builder::{build, build_from_value, FsmBuilder, FsmError, MalformedInputError};
pub use core::{Event, Fsm, Issue, State, StructuralError, Transition};
pub use workflow::workflow;
