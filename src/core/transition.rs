//! Transition rules.

use super::label::Label;
use serde::{Deserialize, Serialize};

/// One legal move: in state `from`, event `event` leads to `to`, running
/// `action` on the way.
///
/// Transitions are immutable values. An absent action means a pure state
/// change; no handler callback runs for it.
///
/// # Example
///
/// ```rust
/// use stateless_fsm::core::Transition;
///
/// let check = Transition::new("Locked", "Coin", "Unlocked", "check");
/// assert_eq!(check.action(), Some(&"check"));
///
/// // An empty action label means "no action".
/// let relabel = Transition::new("Locked", "Reset", "Locked", "");
/// assert!(relabel.action().is_none());
/// assert!(relabel.is_self_transition());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition<S, E, A> {
    /// The state the rule applies in
    pub from: S,
    /// The event that fires the rule
    pub event: E,
    /// The state the rule leads to
    pub to: S,
    /// Business logic to run, if any
    pub action: Option<A>,
}

impl<S: Label, E: Label, A: Label> Transition<S, E, A> {
    /// Create a transition. A blank action label normalizes to `None`.
    pub fn new(from: S, event: E, to: S, action: A) -> Self {
        let action = Some(action).filter(|a| !a.is_blank());
        Self {
            from,
            event,
            to,
            action,
        }
    }

    /// Create a transition that only relabels the state.
    pub fn without_action(from: S, event: E, to: S) -> Self {
        Self {
            from,
            event,
            to,
            action: None,
        }
    }

    /// Whether this rule fires for the given state and event (pure).
    pub fn matches(&self, from: &S, event: &E) -> bool {
        self.from == *from && self.event == *event
    }

    /// Rules with `from == to` never run exit/enter hooks.
    pub fn is_self_transition(&self) -> bool {
        self.from == self.to
    }

    /// The action to run. A blank label counts as absent, however the rule
    /// was built or loaded.
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref().filter(|a| !a.is_blank())
    }

    /// Name of the action for logs and diagrams; empty when absent.
    pub fn action_name(&self) -> &str {
        self.action().map_or("", |a| a.name())
    }
}
