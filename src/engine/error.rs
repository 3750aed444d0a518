//! Errors produced by `StateMachine::trigger`.

use crate::core::Label;
use thiserror::Error;

/// No rule matches the caller's current state and event.
///
/// This is the only error the engine raises by itself. It is always
/// recoverable; the caller decides whether to ignore, log or escalate it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error(
    "cannot find transition for event [{}] when in state [{}]",
    .bad_event.name(),
    .current_state.name()
)]
pub struct NoTransition<S: Label, E: Label> {
    bad_event: E,
    current_state: S,
}

impl<S: Label, E: Label> NoTransition<S, E> {
    pub fn new(bad_event: E, current_state: S) -> Self {
        Self {
            bad_event,
            current_state,
        }
    }

    /// The event that had no matching rule.
    pub fn bad_event(&self) -> &E {
        &self.bad_event
    }

    /// The state the caller claimed the entity was in.
    pub fn current_state(&self) -> &S {
        &self.current_state
    }
}

/// Errors that can occur while triggering an event.
///
/// `HE` is the handler's own error type, passed through unchanged.
#[derive(Debug, Error)]
pub enum TriggerError<S, E, HE>
where
    S: Label,
    E: Label,
    HE: std::error::Error + 'static,
{
    #[error(transparent)]
    NoTransition(NoTransition<S, E>),

    #[error("transition action failed: {0}")]
    ActionFailed(#[source] HE),
}

impl<S, E, HE> TriggerError<S, E, HE>
where
    S: Label,
    E: Label,
    HE: std::error::Error + 'static,
{
    pub fn is_no_transition(&self) -> bool {
        matches!(self, Self::NoTransition(_))
    }

    /// Event of a no-match error; `None` for action failures.
    pub fn bad_event(&self) -> Option<&E> {
        match self {
            Self::NoTransition(err) => Some(err.bad_event()),
            Self::ActionFailed(_) => None,
        }
    }

    /// State of a no-match error; `None` for action failures.
    pub fn current_state(&self) -> Option<&S> {
        match self {
            Self::NoTransition(err) => Some(err.current_state()),
            Self::ActionFailed(_) => None,
        }
    }

    pub fn action_error(&self) -> Option<&HE> {
        match self {
            Self::ActionFailed(err) => Some(err),
            Self::NoTransition(_) => None,
        }
    }

    pub fn into_action_error(self) -> Option<HE> {
        match self {
            Self::ActionFailed(err) => Some(err),
            Self::NoTransition(_) => None,
        }
    }
}

impl<S, E, HE> From<NoTransition<S, E>> for TriggerError<S, E, HE>
where
    S: Label,
    E: Label,
    HE: std::error::Error + 'static,
{
    fn from(err: NoTransition<S, E>) -> Self {
        Self::NoTransition(err)
    }
}
