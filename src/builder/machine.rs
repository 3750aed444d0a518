//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::builder::validate::{into_result, validate_rules, DuplicatePolicy};
use crate::core::{Label, Transition, TransitionTable};
use crate::engine::StateMachine;
use std::sync::Arc;

/// Builder for constructing state machines with a fluent API.
///
/// Unlike [`StateMachine::new`], `build` validates the rule set and reports
/// every problem it finds. Duplicate `(from, event)` pairs are rejected
/// unless [`DuplicatePolicy::FirstWins`] is selected.
///
/// # Example
///
/// ```rust
/// use stateless_fsm::builder::StateMachineBuilder;
/// use stateless_fsm::engine::FnHandler;
/// use std::convert::Infallible;
///
/// let handler = FnHandler::new(|_: &&str, _: &&str, _: &&str, _: &mut ()| Ok::<(), Infallible>(()));
///
/// let machine = StateMachineBuilder::new()
///     .handler(handler)
///     .rule("Locked", "Coin", "Unlocked", "check")
///     .rule("Unlocked", "Push", "Locked", "pass")
///     .build()
///     .unwrap();
///
/// assert!(machine.trigger(&"Locked", &"Coin", &mut ()).is_ok());
/// ```
pub struct StateMachineBuilder<S, E, A, H: ?Sized> {
    handler: Option<Arc<H>>,
    transitions: Vec<Transition<S, E, A>>,
    duplicates: DuplicatePolicy,
}

impl<S: Label, E: Label, A: Label, H: ?Sized> StateMachineBuilder<S, E, A, H> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            handler: None,
            transitions: Vec::new(),
            duplicates: DuplicatePolicy::default(),
        }
    }

    /// Set the handler (required).
    pub fn handler(self, handler: H) -> Self
    where
        H: Sized,
    {
        self.shared_handler(Arc::new(handler))
    }

    /// Set a handler the caller keeps a reference to.
    pub fn shared_handler(mut self, handler: Arc<H>) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S, E, A>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, E, A>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add a rule from its parts; a blank action means no action.
    pub fn rule(self, from: S, event: E, to: S, action: A) -> Self {
        self.add_transition(Transition::new(from, event, to, action))
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition<S, E, A>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Choose how duplicate `(from, event)` pairs are treated.
    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Build the state machine.
    /// Returns an error if the handler is missing or the rules are invalid.
    pub fn build(self) -> Result<StateMachine<S, E, A, H>, BuildError> {
        let handler = self.handler.ok_or(BuildError::MissingHandler)?;
        let table = TransitionTable::new(self.transitions);
        into_result(validate_rules(&table, self.duplicates))?;

        tracing::debug!(
            transitions = table.len(),
            states = table.states().len(),
            duplicates = ?self.duplicates,
            "state machine built"
        );

        Ok(StateMachine::from_table(handler, table))
    }
}

impl<S: Label, E: Label, A: Label, H: ?Sized> Default for StateMachineBuilder<S, E, A, H> {
    fn default() -> Self {
        Self::new()
    }
}
