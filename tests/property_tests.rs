//! Property-based tests for lookup and dispatch.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated rule tables.

use proptest::prelude::*;
use stateless_fsm::engine::{EventProcessor, PhasedHandler, StateMachine};
use stateless_fsm::{Transition, TransitionTable};
use std::collections::HashSet;
use std::sync::Mutex;
use thiserror::Error;

const STATES: [&str; 4] = ["Idle", "Running", "Paused", "Stopped"];
const EVENTS: [&str; 3] = ["start", "pause", "stop"];
const ACTIONS: [&str; 3] = ["", "work", "fail"];

type Rule = Transition<&'static str, &'static str, &'static str>;

prop_compose! {
    fn arbitrary_rule()(
        from in 0..STATES.len(),
        event in 0..EVENTS.len(),
        to in 0..STATES.len(),
        action in 0..ACTIONS.len(),
    ) -> Rule {
        Transition::new(STATES[from], EVENTS[event], STATES[to], ACTIONS[action])
    }
}

prop_compose! {
    fn arbitrary_state()(index in 0..STATES.len()) -> &'static str {
        STATES[index]
    }
}

prop_compose! {
    fn arbitrary_event()(index in 0..EVENTS.len()) -> &'static str {
        EVENTS[index]
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("action {0} failed")]
struct ActionFailed(String);

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Exit(&'static str),
    Action(&'static str),
    Failure(&'static str),
    Enter(&'static str),
}

/// Records hook calls; the "fail" action always errors.
#[derive(Default)]
struct Recorder {
    calls: Mutex<Vec<Call>>,
}

impl Recorder {
    fn push(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn take(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }
}

impl EventProcessor<&'static str, &'static str, ()> for Recorder {
    type Error = ActionFailed;

    fn on_exit(&self, from: &&'static str, _ctx: &mut ()) {
        self.push(Call::Exit(*from));
    }

    fn action(
        &self,
        action: &&'static str,
        _from: &&'static str,
        _to: &&'static str,
        _ctx: &mut (),
    ) -> Result<(), ActionFailed> {
        self.push(Call::Action(*action));
        if *action == "fail" {
            Err(ActionFailed(action.to_string()))
        } else {
            Ok(())
        }
    }

    fn on_action_failure(
        &self,
        action: &&'static str,
        _from: &&'static str,
        _to: &&'static str,
        _ctx: &mut (),
        _error: &ActionFailed,
    ) {
        self.push(Call::Failure(*action));
    }

    fn on_enter(&self, to: &&'static str, _ctx: &mut ()) {
        self.push(Call::Enter(*to));
    }
}

type Machine = StateMachine<&'static str, &'static str, &'static str, PhasedHandler<Recorder>>;

fn machine(rules: Vec<Rule>) -> Machine {
    StateMachine::new(
        std::sync::Arc::new(PhasedHandler::new(Recorder::default())),
        rules,
    )
}

/// The hook sequence a single trigger of `rule` must produce.
fn expected_calls(rule: &Rule) -> Vec<Call> {
    let Some(action) = rule.action().copied() else {
        return Vec::new();
    };
    let changes_state = rule.from != rule.to;
    let mut calls = Vec::new();
    if changes_state {
        calls.push(Call::Exit(rule.from));
    }
    calls.push(Call::Action(action));
    if action == "fail" {
        calls.push(Call::Failure(action));
    } else if changes_state {
        calls.push(Call::Enter(rule.to));
    }
    calls
}

proptest! {
    #[test]
    fn lookup_returns_first_match(
        rules in prop::collection::vec(arbitrary_rule(), 0..12),
        state in arbitrary_state(),
        event in arbitrary_event(),
    ) {
        let table = TransitionTable::new(rules.clone());
        let expected = rules.iter().find(|r| r.from == state && r.event == event);
        prop_assert_eq!(table.lookup(&state, &event), expected);
    }

    #[test]
    fn duplicates_never_selected(rules in prop::collection::vec(arbitrary_rule(), 0..12)) {
        let table = TransitionTable::new(rules.clone());
        for (first, shadowed) in table.duplicates() {
            prop_assert!(first < shadowed);
            let rule = &rules[shadowed];
            let selected = table.lookup(&rule.from, &rule.event).unwrap();
            prop_assert!(std::ptr::eq(selected, &table.transitions()[first]));
        }
    }

    #[test]
    fn trigger_runs_expected_hooks(
        rules in prop::collection::vec(arbitrary_rule(), 1..12),
        state in arbitrary_state(),
        event in arbitrary_event(),
    ) {
        let machine = machine(rules);
        let result = machine.trigger(&state, &event, &mut ());
        let calls = machine.handler().processor().take();

        match machine.lookup(&state, &event).cloned() {
            None => {
                let err = result.unwrap_err();
                prop_assert_eq!(err.bad_event(), Some(&event));
                prop_assert_eq!(err.current_state(), Some(&state));
                prop_assert!(calls.is_empty());
            }
            Some(rule) => {
                prop_assert_eq!(calls, expected_calls(&rule));
                if rule.action() == Some(&"fail") {
                    let err = result.unwrap_err();
                    prop_assert_eq!(err.into_action_error(), Some(ActionFailed("fail".to_string())));
                } else {
                    prop_assert!(result.is_ok());
                }
            }
        }
    }

    #[test]
    fn self_transitions_never_exit_or_enter(
        state in arbitrary_state(),
        event in arbitrary_event(),
        action in 1..ACTIONS.len(),
    ) {
        let machine = machine(vec![Transition::new(state, event, state, ACTIONS[action])]);
        let _ = machine.trigger(&state, &event, &mut ());
        let calls = machine.handler().processor().take();

        prop_assert!(calls.iter().all(|c| !matches!(c, Call::Exit(_) | Call::Enter(_))));
        prop_assert_eq!(calls.first(), Some(&Call::Action(ACTIONS[action])));
    }

    #[test]
    fn empty_action_never_calls_handler(
        from in arbitrary_state(),
        to in arbitrary_state(),
        event in arbitrary_event(),
    ) {
        let machine = machine(vec![Transition::new(from, event, to, "")]);
        prop_assert!(machine.trigger(&from, &event, &mut ()).is_ok());
        prop_assert!(machine.handler().processor().take().is_empty());
    }

    #[test]
    fn failed_action_never_enters(
        from in arbitrary_state(),
        to in arbitrary_state(),
        event in arbitrary_event(),
    ) {
        let machine = machine(vec![Transition::new(from, event, to, "fail")]);
        let err = machine.trigger(&from, &event, &mut ()).unwrap_err();
        let calls = machine.handler().processor().take();

        prop_assert!(!calls.iter().any(|c| matches!(c, Call::Enter(_))));
        prop_assert_eq!(calls.last(), Some(&Call::Failure("fail")));
        prop_assert_eq!(err.action_error(), Some(&ActionFailed("fail".to_string())));
    }

    #[test]
    fn exit_precedes_action_precedes_enter(
        from in arbitrary_state(),
        to in arbitrary_state(),
        event in arbitrary_event(),
    ) {
        prop_assume!(from != to);
        let machine = machine(vec![Transition::new(from, event, to, "work")]);
        machine.trigger(&from, &event, &mut ()).unwrap();

        prop_assert_eq!(
            machine.handler().processor().take(),
            vec![Call::Exit(from), Call::Action("work"), Call::Enter(to)]
        );
    }

    #[test]
    fn unknown_pairs_report_event_and_state(
        rules in prop::collection::vec(arbitrary_rule(), 0..12),
        state in arbitrary_state(),
    ) {
        let known: HashSet<_> = rules.iter().map(|r| (r.from, r.event)).collect();
        let machine = machine(rules);
        let event = "teleport";
        prop_assert!(!known.contains(&(state, event)));

        let err = machine.trigger(&state, &event, &mut ()).unwrap_err();
        prop_assert!(err.is_no_transition());
        prop_assert_eq!(err.bad_event(), Some(&"teleport"));
        prop_assert_eq!(err.current_state(), Some(&state));
        prop_assert!(machine.handler().processor().take().is_empty());
    }
}
