//! Stateless state machine that dispatches transitions to a shared handler.

use crate::core::{Label, Transition, TransitionTable};
use crate::engine::error::{NoTransition, TriggerError};
use crate::engine::handler::Handler;
use std::sync::Arc;

/// Table-driven state machine shared by any number of entities.
///
/// The machine stores no entity state. Every call to [`trigger`](Self::trigger)
/// receives the entity's current state from the caller, resolves the rule
/// and hands it to the handler; recording the new state is the handler's
/// job (typically in its enter hook).
///
/// Rules and handler are fixed at construction, so the machine is safe to
/// share across threads whenever the handler is.
pub struct StateMachine<S, E, A, H: ?Sized> {
    table: TransitionTable<S, E, A>,
    handler: Arc<H>,
}

impl<S: Label, E: Label, A: Label, H: ?Sized> StateMachine<S, E, A, H> {
    /// Create a machine from a handler and an ordered rule list.
    ///
    /// No validation is performed; duplicate `(from, event)` pairs resolve
    /// to the first rule. Use `StateMachineBuilder` for validated rule sets.
    pub fn new(handler: Arc<H>, transitions: Vec<Transition<S, E, A>>) -> Self {
        Self::from_table(handler, TransitionTable::new(transitions))
    }

    pub fn from_table(handler: Arc<H>, table: TransitionTable<S, E, A>) -> Self {
        Self { table, handler }
    }

    pub fn table(&self) -> &TransitionTable<S, E, A> {
        &self.table
    }

    /// Configured rules in insertion order.
    pub fn transitions(&self) -> &[Transition<S, E, A>] {
        self.table.transitions()
    }

    pub fn handler(&self) -> &Arc<H> {
        &self.handler
    }

    /// Rule that would fire for `current_state` and `event` (pure).
    pub fn lookup(&self, current_state: &S, event: &E) -> Option<&Transition<S, E, A>> {
        self.table.lookup(current_state, event)
    }

    pub fn can_trigger(&self, current_state: &S, event: &E) -> bool {
        self.lookup(current_state, event).is_some()
    }

    /// Fire `event` for an entity currently in `current_state`.
    ///
    /// `ctx` is forwarded untouched to the handler. Returns
    /// [`TriggerError::NoTransition`] when no rule matches (no handler call is
    /// made) and [`TriggerError::ActionFailed`] with the handler's error when
    /// the action fails. Rules without an action succeed immediately.
    pub fn trigger<C: ?Sized>(
        &self,
        current_state: &S,
        event: &E,
        ctx: &mut C,
    ) -> Result<(), TriggerError<S, E, <H as Handler<S, A, C>>::Error>>
    where
        H: Handler<S, A, C>,
    {
        let Some(transition) = self.table.lookup(current_state, event) else {
            tracing::debug!(
                state = current_state.name(),
                event = event.name(),
                "no transition matches"
            );
            return Err(NoTransition::new(event.clone(), current_state.clone()).into());
        };

        let Some(action) = transition.action() else {
            tracing::trace!(
                from = current_state.name(),
                event = event.name(),
                to = transition.to.name(),
                "transition has no action"
            );
            return Ok(());
        };

        tracing::trace!(
            from = current_state.name(),
            event = event.name(),
            to = transition.to.name(),
            action = action.name(),
            "dispatching transition"
        );

        self.handler
            .handle_event(action, current_state, &transition.to, ctx)
            .map_err(|error| {
                tracing::debug!(
                    from = current_state.name(),
                    event = event.name(),
                    to = transition.to.name(),
                    action = action.name(),
                    error = %error,
                    "transition action failed"
                );
                TriggerError::ActionFailed(error)
            })
    }
}

impl<S: Label, E: Label, A: Label, H: ?Sized> Clone for StateMachine<S, E, A, H> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            handler: Arc::clone(&self.handler),
        }
    }
}
