//! Transition dispatch.
//!
//! This module is the imperative shell around the pure rule table: it
//! resolves a transition for the caller's current state and event, then
//! runs the caller's handler for it.
//!
//! # Key Concepts
//!
//! - **StateMachine**: resolves rules and dispatches to one shared handler
//! - **Handler**: the delegate that performs a transition's side effects
//! - **EventProcessor** + **PhasedHandler**: the exit/action/enter protocol
//! - **TriggerError**: no matching rule, or the action's own error

mod error;
mod handler;
mod machine;

pub use error::{NoTransition, TriggerError};
pub use handler::{EventProcessor, FnHandler, Handler, Phase, PhasedHandler};
pub use machine::StateMachine;
