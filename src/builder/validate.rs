//! Rule-set validation using Validation.
//!
//! Every problem in a rule set is reported at once instead of stopping at
//! the first one.

use crate::builder::error::BuildError;
use crate::core::{Label, Transition, TransitionTable};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of validating a rule set.
pub type RuleValidation = Validation<(), NonEmptyVec<BuildError>>;

/// How a builder treats several rules sharing a `(from, event)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Refuse to build; each shadowed rule is reported
    #[default]
    Reject,

    /// Keep all rules; lookup selects the first inserted one
    FirstWins,
}

/// Check a rule set, accumulating ALL problems.
///
/// Reports an empty rule set, blank state/event labels, and (under
/// [`DuplicatePolicy::Reject`]) every rule shadowed by an earlier one.
pub fn validate_rules<S: Label, E: Label, A: Label>(
    table: &TransitionTable<S, E, A>,
    policy: DuplicatePolicy,
) -> RuleValidation {
    let mut checks: Vec<RuleValidation> = Vec::new();

    if table.is_empty() {
        checks.push(Validation::fail(BuildError::NoTransitions));
    }

    for (index, transition) in table.transitions().iter().enumerate() {
        checks.extend(blank_labels(index, transition));
    }

    if policy == DuplicatePolicy::Reject {
        let rules = table.transitions();
        for (first, duplicate) in table.duplicates() {
            checks.push(Validation::fail(BuildError::DuplicateTransition {
                from: rules[duplicate].from.name().to_string(),
                event: rules[duplicate].event.name().to_string(),
                first,
                duplicate,
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

fn blank_labels<S: Label, E: Label, A: Label>(
    index: usize,
    transition: &Transition<S, E, A>,
) -> Vec<RuleValidation> {
    let fields = [
        ("from", transition.from.is_blank()),
        ("event", transition.event.is_blank()),
        ("to", transition.to.is_blank()),
    ];

    fields
        .into_iter()
        .filter(|(_, blank)| *blank)
        .map(|(field, _)| Validation::fail(BuildError::BlankLabel { index, field }))
        .collect()
}

/// Collapse a validation into a `Result`; several problems become
/// [`BuildError::Invalid`].
pub fn into_result(validation: RuleValidation) -> Result<(), BuildError> {
    match validation {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => {
            let mut errors: Vec<BuildError> = errors.iter().cloned().collect();
            if errors.len() == 1 {
                Err(errors.remove(0))
            } else {
                Err(BuildError::Invalid(errors))
            }
        }
    }
}
