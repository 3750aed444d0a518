//! Stateless FSM: a table-driven state machine shared by many entities
//!
//! One machine instance processes transitions for any number of entities
//! without storing any entity's state. Callers pass the entity's current
//! state and an event; the machine finds the first matching rule and hands
//! it to a pluggable handler that performs the side effects, including
//! recording the entity's new state.
//!
//! # Core Concepts
//!
//! - **Label**: opaque, comparable token for states, events and actions
//! - **TransitionTable**: ordered rules with first-match lookup
//! - **StateMachine**: resolves rules and dispatches them to one handler
//! - **EventProcessor**: exit/action/enter hooks, run by `PhasedHandler`
//!
//! # Example
//!
//! ```rust
//! use stateless_fsm::builder::StateMachineBuilder;
//! use stateless_fsm::engine::{EventProcessor, PhasedHandler};
//! use std::convert::Infallible;
//!
//! struct Turnstile {
//!     state: &'static str,
//!     passes: u32,
//! }
//!
//! struct TurnstileProcessor;
//!
//! impl EventProcessor<&'static str, &'static str, Turnstile> for TurnstileProcessor {
//!     type Error = Infallible;
//!
//!     fn action(
//!         &self,
//!         action: &&'static str,
//!         _from: &&'static str,
//!         _to: &&'static str,
//!         turnstile: &mut Turnstile,
//!     ) -> Result<(), Infallible> {
//!         if *action == "pass" {
//!             turnstile.passes += 1;
//!         }
//!         Ok(())
//!     }
//!
//!     fn on_enter(&self, to: &&'static str, turnstile: &mut Turnstile) {
//!         turnstile.state = *to;
//!     }
//! }
//!
//! let machine = StateMachineBuilder::new()
//!     .handler(PhasedHandler::new(TurnstileProcessor))
//!     .rule("Locked", "Coin", "Unlocked", "check")
//!     .rule("Unlocked", "Push", "Locked", "pass")
//!     .build()
//!     .unwrap();
//!
//! let mut turnstile = Turnstile { state: "Locked", passes: 0 };
//! for event in ["Coin", "Push"] {
//!     let current = turnstile.state;
//!     machine.trigger(&current, &event, &mut turnstile).unwrap();
//! }
//!
//! assert_eq!(turnstile.state, "Locked");
//! assert_eq!(turnstile.passes, 1);
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod export;
pub mod snapshot;

// Re-export commonly used types
pub use builder::{BuildError, DuplicatePolicy, StateMachineBuilder};
pub use crate::core::{Label, Transition, TransitionTable};
pub use engine::{EventProcessor, Handler, PhasedHandler, StateMachine, TriggerError};
