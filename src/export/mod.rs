//! State diagram export.
//!
//! Turns a rule set into a Graphviz graph description and optionally hands
//! it to an external renderer. Failures here have their own error type and
//! never affect triggering events.

mod dot;
mod render;

pub use dot::to_dot;
pub use render::{export, render, ExportError, ExportOptions};
