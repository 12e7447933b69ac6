//! Loader and session errors.

use crate::builder::FsmError;
use crate::core::StructuralError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse {} as YAML: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("cannot load from {}: top level must be a mapping", .path.display())]
    NotAMapping { path: PathBuf },

    #[error("invalid issues in {}: {source}", .path.display())]
    Issues {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("invalid data in {}: {source}", .path.display())]
    Fsm { path: PathBuf, source: FsmError },

    #[error("{} contains neither transitions nor issues", .path.display())]
    Empty { path: PathBuf },
}

/// Errors that can occur when using what a session holds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no FSM loaded")]
    NoFsm,

    #[error("no issues loaded")]
    NoIssues,

    #[error(transparent)]
    Structural(#[from] StructuralError),
}
