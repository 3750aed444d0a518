//! Handler contract and the three-phase callback protocol.
//!
//! A [`Handler`] receives every transition that carries an action. Most
//! callers do not implement it directly: they implement [`EventProcessor`]
//! and wrap it in a [`PhasedHandler`], which splits each transition into
//! exit, action and enter hooks.
//!
//! # Protocol
//!
//! For one handled transition the phases run strictly in order:
//!
//! 1. `on_exit(from)` when `from != to`
//! 2. `action(action, from, to)`
//! 3. `on_enter(to)` when `from != to` and the action succeeded
//!
//! A failed action calls `on_action_failure` and skips `on_enter`, so the
//! entity is left logically in `from`. Self-transitions run only the action.
//!
//! Processors choose their style freely: Moore-style logic lives in the
//! enter/exit hooks with a trivial action, Mealy-style logic lives in the
//! action alone, and UML-style processors use all three.

use crate::core::Label;

/// Delegate invoked by the engine for transitions with an action.
///
/// `C` is the caller's context, forwarded untouched from `trigger`. One
/// handler instance is shared by every call, possibly from several threads
/// at once; any shared state it mutates must be synchronized by the handler.
pub trait Handler<S, A, C: ?Sized> {
    /// Error returned when the transition's business logic fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Handle one resolved transition.
    fn handle_event(&self, action: &A, from: &S, to: &S, ctx: &mut C) -> Result<(), Self::Error>;
}

impl<S, A, C, T> Handler<S, A, C> for std::sync::Arc<T>
where
    C: ?Sized,
    T: Handler<S, A, C> + ?Sized,
{
    type Error = T::Error;

    fn handle_event(&self, action: &A, from: &S, to: &S, ctx: &mut C) -> Result<(), Self::Error> {
        (**self).handle_event(action, from, to, ctx)
    }
}

impl<S, A, C, T> Handler<S, A, C> for &T
where
    C: ?Sized,
    T: Handler<S, A, C> + ?Sized,
{
    type Error = T::Error;

    fn handle_event(&self, action: &A, from: &S, to: &S, ctx: &mut C) -> Result<(), Self::Error> {
        (**self).handle_event(action, from, to, ctx)
    }
}

/// The four hooks of the three-phase protocol.
///
/// Only `action` is required; the others default to no-ops.
///
/// # Example
///
/// ```rust
/// use stateless_fsm::engine::EventProcessor;
/// use std::convert::Infallible;
///
/// struct Door {
///     state: &'static str,
///     opened: u32,
/// }
///
/// struct DoorProcessor;
///
/// impl EventProcessor<&'static str, &'static str, Door> for DoorProcessor {
///     type Error = Infallible;
///
///     fn action(
///         &self,
///         action: &&'static str,
///         _from: &&'static str,
///         _to: &&'static str,
///         door: &mut Door,
///     ) -> Result<(), Infallible> {
///         if *action == "open" {
///             door.opened += 1;
///         }
///         Ok(())
///     }
///
///     fn on_enter(&self, to: &&'static str, door: &mut Door) {
///         door.state = *to;
///     }
/// }
/// ```
pub trait EventProcessor<S, A, C: ?Sized> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Leaving `from`. Not called for self-transitions.
    fn on_exit(&self, _from: &S, _ctx: &mut C) {}

    /// Business logic of the transition.
    fn action(&self, action: &A, from: &S, to: &S, ctx: &mut C) -> Result<(), Self::Error>;

    /// Observes a failed action before the error reaches the caller.
    fn on_action_failure(
        &self,
        _action: &A,
        _from: &S,
        _to: &S,
        _ctx: &mut C,
        _error: &Self::Error,
    ) {
    }

    /// Entering `to`; the place to record the entity's new state.
    /// Not called for self-transitions or after a failed action.
    fn on_enter(&self, _to: &S, _ctx: &mut C) {}
}

/// Position within one handled transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing has run yet
    Idle,
    /// The exit hook runs next (skipped for self-transitions)
    ExitPending,
    /// The action runs next
    ActionPending,
    /// The enter hook runs next (skipped for self-transitions)
    EnterPending,
    /// All phases completed
    Done,
    /// The action failed; the enter hook was skipped
    Failed,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

/// Default delegate: runs an [`EventProcessor`] through the three phases.
#[derive(Clone, Debug, Default)]
pub struct PhasedHandler<P> {
    processor: P,
}

impl<P> PhasedHandler<P> {
    pub fn new(processor: P) -> Self {
        Self { processor }
    }

    pub fn processor(&self) -> &P {
        &self.processor
    }

    pub fn into_inner(self) -> P {
        self.processor
    }
}

impl<S, A, C, P> Handler<S, A, C> for PhasedHandler<P>
where
    S: Label,
    A: Label,
    C: ?Sized,
    P: EventProcessor<S, A, C>,
{
    type Error = P::Error;

    fn handle_event(&self, action: &A, from: &S, to: &S, ctx: &mut C) -> Result<(), Self::Error> {
        let changes_state = from != to;
        let mut failure = None;
        let mut phase = Phase::Idle;

        while !phase.is_terminal() {
            phase = match phase {
                Phase::Idle => Phase::ExitPending,
                Phase::ExitPending => {
                    if changes_state {
                        self.processor.on_exit(from, ctx);
                    }
                    Phase::ActionPending
                }
                Phase::ActionPending => match self.processor.action(action, from, to, ctx) {
                    Ok(()) => Phase::EnterPending,
                    Err(error) => {
                        self.processor.on_action_failure(action, from, to, ctx, &error);
                        failure = Some(error);
                        Phase::Failed
                    }
                },
                Phase::EnterPending => {
                    if changes_state {
                        self.processor.on_enter(to, ctx);
                    }
                    Phase::Done
                }
                Phase::Done | Phase::Failed => phase,
            };

            tracing::trace!(
                phase = ?phase,
                action = action.name(),
                from = from.name(),
                to = to.name(),
                "handler phase"
            );
        }

        match failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Handler backed by a closure, for callers that only need an action.
///
/// ```rust
/// use stateless_fsm::engine::{FnHandler, Handler};
/// use std::convert::Infallible;
///
/// let handler = FnHandler::new(|action: &&str, _from: &&str, _to: &&str, log: &mut Vec<String>| {
///     log.push(action.to_string());
///     Ok::<(), Infallible>(())
/// });
///
/// let mut log = Vec::new();
/// handler.handle_event(&"pass", &"Unlocked", &"Locked", &mut log).unwrap();
/// assert_eq!(log, vec!["pass".to_string()]);
/// ```
pub struct FnHandler<F> {
    action: F,
}

impl<F> FnHandler<F> {
    pub fn new(action: F) -> Self {
        Self { action }
    }
}

impl<S, A, C, F, Err> Handler<S, A, C> for FnHandler<F>
where
    C: ?Sized,
    F: Fn(&A, &S, &S, &mut C) -> Result<(), Err>,
    Err: std::error::Error + Send + Sync + 'static,
{
    type Error = Err;

    fn handle_event(&self, action: &A, from: &S, to: &S, ctx: &mut C) -> Result<(), Self::Error> {
        (self.action)(action, from, to, ctx)
    }
}
