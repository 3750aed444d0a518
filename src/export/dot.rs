//! Graphviz DOT rendering of a rule set.

use crate::core::{Label, TransitionTable};
use std::fmt::Write;

/// Render the rules as a DOT digraph.
///
/// Nodes are states; every rule becomes one edge labeled `event | action`
/// (the action part is empty for rules without one). Edges keep rule order.
///
/// # Example
///
/// ```
/// use stateless_fsm::builder::rule_table;
/// use stateless_fsm::export::to_dot;
///
/// let table = rule_table([("Locked", "Coin", "Unlocked", "check")]);
/// let dot = to_dot(&table);
///
/// assert!(dot.contains(r#""Locked" -> "Unlocked" [label="Coin | check"];"#));
/// ```
pub fn to_dot<S: Label, E: Label, A: Label>(table: &TransitionTable<S, E, A>) -> String {
    let mut dot = String::from("digraph StateMachine {\n");
    dot.push_str("    rankdir=LR;\n");
    dot.push_str(
        "    node [width=1 fixedsize=true shape=circle style=filled fillcolor=\"darkorchid1\"];\n",
    );
    dot.push('\n');

    for state in table.states() {
        let _ = writeln!(dot, "    {};", quote(state.name()));
    }
    dot.push('\n');

    for t in table.transitions() {
        let label = format!("{} | {}", t.event.name(), t.action_name());
        let _ = writeln!(
            dot,
            "    {} -> {} [label={}];",
            quote(t.from.name()),
            quote(t.to.name()),
            quote(&label)
        );
    }

    dot.push_str("}\n");
    dot
}

/// Quote a DOT identifier, escaping embedded quotes and backslashes.
fn quote(id: &str) -> String {
    let mut quoted = String::with_capacity(id.len() + 2);
    quoted.push('"');
    for c in id.chars() {
        match c {
            '"' | '\\' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
