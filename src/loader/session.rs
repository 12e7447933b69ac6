//! Accumulating state across several loaded files.

use super::document::Document;
use super::error::{LoadError, SessionError};
use crate::board::Board;
use crate::core::{Fsm, Issue};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// The FSM and issues most recently loaded, and where they came from.
///
/// Each file may supply an FSM, issues, or both; whatever it supplies
/// replaces what the session held before. This lets an FSM and its issues
/// live in separate files.
#[derive(Clone, Debug, Default)]
pub struct Session {
    fsm: Option<Fsm>,
    issues: Option<Vec<Issue>>,
    loaded_from: Vec<PathBuf>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load one file into the session.
    ///
    /// A file supplying neither transitions nor issues is rejected with
    /// [`LoadError::Empty`] and not recorded. On any error the session is
    /// left unchanged.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let path = path.as_ref();
        let document = Document::from_path(path)?;
        self.apply(document, path)
    }

    /// Merge an already parsed document attributed to `origin`.
    pub fn apply(&mut self, document: Document, origin: impl Into<PathBuf>) -> Result<(), LoadError> {
        let origin = origin.into();
        if document.is_empty() {
            return Err(LoadError::Empty { path: origin });
        }

        if let Some(fsm) = document.fsm {
            info!(path = %origin.display(), states = fsm.len(), "loaded FSM");
            self.fsm = Some(fsm);
        }
        if let Some(issues) = document.issues {
            info!(path = %origin.display(), issues = issues.len(), "loaded issues");
            self.issues = Some(issues);
        }
        self.loaded_from.push(origin);

        for issue in self.unknown_issues() {
            warn!(title = %issue.title, state = %issue.state, "issue references a state the FSM does not have");
        }
        Ok(())
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn fsm(&self) -> Result<&Fsm, SessionError> {
        self.fsm.as_ref().ok_or(SessionError::NoFsm)
    }

    pub fn issues(&self) -> Result<&[Issue], SessionError> {
        self.issues.as_deref().ok_or(SessionError::NoIssues)
    }

    /// Group the loaded issues by the loaded FSM's workflow.
    pub fn board(&self) -> Result<Board<'_>, SessionError> {
        let fsm = self.fsm()?;
        let issues = self.issues()?;
        Ok(Board::new(fsm, issues)?)
    }

    /// Files that contributed to the session, sorted.
    pub fn loaded_from(&self) -> Vec<&Path> {
        let mut paths: Vec<&Path> = self.loaded_from.iter().map(PathBuf::as_path).collect();
        paths.sort();
        paths
    }

    /// Issues whose state the loaded FSM does not know.
    ///
    /// Empty when either part is missing.
    pub fn unknown_issues(&self) -> Vec<&Issue> {
        match (&self.fsm, &self.issues) {
            (Some(fsm), Some(issues)) => issues.iter().filter(|i| !fsm.contains(&i.state)).collect(),
            _ => Vec::new(),
        }
    }
}
