//! Presentation of FSMs and boards.
//!
//! Every renderer walks states in workflow order.
//! - `text`: human-readable listings
//! - `dot`: Graphviz source
//! - `json`: machine-readable output

pub mod dot;
pub mod json;
pub mod text;

use crate::core::StructuralError;
use thiserror::Error;

/// Errors raised while rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
