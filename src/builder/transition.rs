//! Builder for constructing transition rules.

use crate::builder::error::BuildError;
use crate::core::{Label, Transition};

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<S, E, A> {
    from: Option<S>,
    event: Option<E>,
    to: Option<S>,
    action: Option<A>,
}

impl<S: Label, E: Label, A: Label> TransitionBuilder<S, E, A> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            event: None,
            to: None,
            action: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: E) -> Self {
        self.event = Some(event);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Set the action label (optional). A blank label means no action.
    pub fn action(mut self, action: A) -> Self {
        self.action = Some(action).filter(|a| !a.is_blank());
        self
    }

    /// Stay in the source state; requires `.from()` first.
    pub fn stay(mut self) -> Self {
        self.to = self.from.clone();
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S, E, A>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition {
            from,
            event,
            to,
            action: self.action,
        })
    }
}

impl<S: Label, E: Label, A: Label> Default for TransitionBuilder<S, E, A> {
    fn default() -> Self {
        Self::new()
    }
}
