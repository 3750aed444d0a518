//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders, rule-set validation and the
//! `label_enum!` macro for creating state machines with minimal
//! boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;
pub mod validate;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;
pub use validate::{validate_rules, DuplicatePolicy};

use crate::core::{Label, Transition, TransitionTable};

/// Create a table from `(from, event, to, action)` tuples, keeping order.
///
/// # Example
///
/// ```
/// use stateless_fsm::builder::rule_table;
///
/// let table = rule_table([
///     ("Locked", "Coin", "Unlocked", "check"),
///     ("Unlocked", "Push", "Locked", "pass"),
/// ]);
///
/// assert_eq!(table.len(), 2);
/// ```
pub fn rule_table<S, E, A, I>(rules: I) -> TransitionTable<S, E, A>
where
    S: Label,
    E: Label,
    A: Label,
    I: IntoIterator<Item = (S, E, S, A)>,
{
    rules
        .into_iter()
        .map(|(from, event, to, action)| Transition::new(from, event, to, action))
        .collect()
}
