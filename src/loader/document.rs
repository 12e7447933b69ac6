//! Single YAML documents.

use super::error::LoadError;
use crate::builder::build_from_value;
use crate::core::{Fsm, Issue};
use serde_yaml::Value;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The contents of one file: an FSM, a list of issues, or both.
///
/// ```yaml
/// transitions:
///   - { from: to do, to: doing }
///   - { from: doing, to: done }
/// issues:
///   - { title: write docs, state: doing }
/// ```
///
/// An absent or empty `transitions` list yields no FSM, and an absent or
/// empty `issues` list yields no issues. Other top-level keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    pub fsm: Option<Fsm>,
    pub issues: Option<Vec<Issue>>,
}

impl Document {
    /// Parse `text`, attributing errors to `origin`.
    pub fn parse(text: &str, origin: impl Into<PathBuf>) -> Result<Self, LoadError> {
        let path = origin.into();
        let value: Value = serde_yaml::from_str(text).map_err(|source| LoadError::Yaml {
            path: path.clone(),
            source,
        })?;

        let Value::Mapping(mapping) = value else {
            return Err(LoadError::NotAMapping { path });
        };

        let fsm = match mapping.get("transitions") {
            None | Some(Value::Null) => None,
            Some(Value::Sequence(records)) if records.is_empty() => None,
            Some(raw) => Some(
                build_from_value(raw).map_err(|source| LoadError::Fsm {
                    path: path.clone(),
                    source,
                })?,
            ),
        };

        let issues = match mapping.get("issues") {
            None | Some(Value::Null) => None,
            Some(raw) => {
                let issues: Vec<Issue> =
                    serde_yaml::from_value(raw.clone()).map_err(|source| LoadError::Issues {
                        path: path.clone(),
                        source,
                    })?;
                (!issues.is_empty()).then_some(issues)
            }
        };

        Ok(Self { fsm, issues })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    pub fn is_empty(&self) -> bool {
        self.fsm.is_none() && self.issues.is_none()
    }
}

impl FromStr for Document {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, "<inline>")
    }
}
