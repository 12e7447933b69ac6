//! Loading FSMs and issues from YAML files.
//!
//! A [`Document`] is one parsed file; a [`Session`] accumulates several.
//! File format concerns stay here; the builder only sees transition records.

mod document;
pub mod error;
mod session;

pub use document::Document;
pub use error::{LoadError, SessionError};
pub use session::Session;
