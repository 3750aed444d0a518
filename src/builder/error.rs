//! Build errors for state machine and transition builders.

use thiserror::Error;

/// Errors that can occur when building state machines and transitions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition event not specified. Call .on(event)")]
    MissingEvent,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Handler not specified. Call .handler(handler) before .build()")]
    MissingHandler,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error(
        "Transition {duplicate} repeats state '{from}' and event '{event}' of transition {first}"
    )]
    DuplicateTransition {
        from: String,
        event: String,
        first: usize,
        duplicate: usize,
    },

    #[error("Transition {index} has a blank {field} label")]
    BlankLabel { index: usize, field: &'static str },

    #[error("Invalid rule set ({} problems): {}", .0.len(), join(.0))]
    Invalid(Vec<BuildError>),
}

fn join(errors: &[BuildError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
