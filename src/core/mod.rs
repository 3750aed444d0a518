//! Core rule types.
//!
//! This module contains the pure part of the engine:
//! - Labels for states, events and actions via the `Label` trait
//! - Immutable transition rules
//! - The ordered, read-only transition table and its first-match lookup
//!
//! Nothing in this module performs side effects or holds entity state.

mod label;
mod table;
mod transition;

pub use label::Label;
pub use table::TransitionTable;
pub use transition::Transition;
