//! Ordered transition table.
//!
//! The table is populated once and read-only afterwards, so it can be read
//! from any number of threads without synchronization.

use super::label::Label;
use super::transition::Transition;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Ordered collection of transition rules.
///
/// Lookup scans in insertion order and returns the first rule whose `from`
/// and `event` both match. When two rules share a `(from, event)` pair the
/// earlier one wins and the later one is shadowed.
///
/// # Example
///
/// ```rust
/// use stateless_fsm::core::{Transition, TransitionTable};
///
/// let table = TransitionTable::new(vec![
///     Transition::new("Locked", "Coin", "Unlocked", "check"),
///     Transition::new("Unlocked", "Push", "Locked", "pass"),
/// ]);
///
/// let rule = table.lookup(&"Locked", &"Coin").unwrap();
/// assert_eq!(rule.to, "Unlocked");
/// assert!(table.lookup(&"Locked", &"Teleport").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionTable<S, E, A> {
    transitions: Vec<Transition<S, E, A>>,
}

impl<S: Label, E: Label, A: Label> TransitionTable<S, E, A> {
    /// Create a table. Rules keep the order they are given in.
    pub fn new(transitions: Vec<Transition<S, E, A>>) -> Self {
        Self { transitions }
    }

    /// First rule matching `from` and `event`, or `None`.
    pub fn lookup(&self, from: &S, event: &E) -> Option<&Transition<S, E, A>> {
        self.transitions.iter().find(|t| t.matches(from, event))
    }

    /// All rules in insertion order.
    pub fn transitions(&self) -> &[Transition<S, E, A>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Distinct states named by any rule, in order of first appearance.
    pub fn states(&self) -> Vec<&S> {
        let mut states: Vec<&S> = Vec::new();
        for t in &self.transitions {
            for s in [&t.from, &t.to] {
                if !states.contains(&s) {
                    states.push(s);
                }
            }
        }
        states
    }

    /// Events accepted in `state`, in rule order, shadowed duplicates omitted.
    pub fn events_from(&self, state: &S) -> Vec<&E> {
        let mut events: Vec<&E> = Vec::new();
        for t in self.transitions.iter().filter(|t| t.from == *state) {
            if !events.contains(&&t.event) {
                events.push(&t.event);
            }
        }
        events
    }

    /// Pairs of `(first, shadowed)` rule indices sharing a `(from, event)`.
    ///
    /// The shadowed rule can never be selected by [`lookup`](Self::lookup).
    pub fn duplicates(&self) -> Vec<(usize, usize)> {
        let mut seen: HashMap<(&S, &E), usize> = HashMap::new();
        let mut duplicates = Vec::new();
        for (index, t) in self.transitions.iter().enumerate() {
            match seen.entry((&t.from, &t.event)) {
                Entry::Occupied(first) => duplicates.push((*first.get(), index)),
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
            }
        }
        duplicates
    }
}

impl<S: Label, E: Label, A: Label> From<Vec<Transition<S, E, A>>> for TransitionTable<S, E, A> {
    fn from(transitions: Vec<Transition<S, E, A>>) -> Self {
        Self::new(transitions)
    }
}

impl<S: Label, E: Label, A: Label> FromIterator<Transition<S, E, A>> for TransitionTable<S, E, A> {
    fn from_iter<I: IntoIterator<Item = Transition<S, E, A>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
