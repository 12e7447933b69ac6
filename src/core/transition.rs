//! Transition records, the raw input of an FSM build.

use serde::{Deserialize, Serialize};

/// A directed `from -> to` record.
///
/// Transitions are consumed once while building an [`Fsm`](super::Fsm) and
/// are not retained by it. The optional `input` is reserved for trigger
/// semantics; when present it becomes the label of the resulting event.
///
/// # Example
///
/// ```rust
/// use statewalk::core::Transition;
///
/// let t = Transition::from(("to do", "doing"));
/// assert_eq!(t.from, "to do");
/// assert_eq!(t.to, "doing");
/// assert!(t.input.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Transition {
    /// Name of the source state
    pub from: String,
    /// Name of the destination state
    pub to: String,
    /// Reserved trigger label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
}

impl Transition {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            input: None,
        }
    }

    /// Attach a trigger label.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// True when the transition points back at its own source.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl<A, B> From<(A, B)> for Transition
where
    A: Into<String>,
    B: Into<String>,
{
    fn from((from, to): (A, B)) -> Self {
        Self::new(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_conversion_keeps_direction() {
        let t: Transition = ("A", "B").into();
        assert_eq!(t, Transition::new("A", "B"));
    }

    #[test]
    fn self_loop_is_detected() {
        assert!(Transition::new("A", "A").is_self_loop());
        assert!(!Transition::new("A", "B").is_self_loop());
    }

    #[test]
    fn deserializes_from_and_to_keys() {
        let t: Transition = serde_yaml::from_str("{ from: to do, to: doing }").unwrap();
        assert_eq!(t, Transition::new("to do", "doing"));
    }

    #[test]
    fn deserializes_optional_input() {
        let t: Transition = serde_yaml::from_str("{ from: A, to: B, input: go }").unwrap();
        assert_eq!(t.input.as_deref(), Some("go"));
    }

    #[test]
    fn rejects_unknown_keys() {
        let result: Result<Transition, _> = serde_yaml::from_str("{ from: A, to: B, guard: x }");
        assert!(result.is_err());
    }

    #[test]
    fn rejects_missing_destination() {
        let result: Result<Transition, _> = serde_yaml::from_str("{ from: A }");
        assert!(result.is_err());
    }
}
