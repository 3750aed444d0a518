//! Label trait for states, events and action names.
//!
//! The engine never interprets a label. Equality is the only operation it
//! performs on them; `name` exists for logs and diagrams.

use std::fmt::Debug;
use std::hash::Hash;

/// Opaque, comparable token used for states, events and action labels.
///
/// # Required Traits
///
/// - `Clone`: labels are copied into errors and snapshots
/// - `Eq` + `Hash`: rule matching and duplicate detection
/// - `Debug`: labels must be debuggable for diagnostics
/// - `Send` + `Sync` + `'static`: one machine is shared across threads
///
/// # Example
///
/// ```rust
/// use stateless_fsm::core::Label;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl Label for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// assert_eq!("Locked".name(), "Locked");
/// ```
pub trait Label: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Human readable name for logging and export.
    fn name(&self) -> &str;

    /// A label with an empty name is treated as absent where absence has
    /// meaning, e.g. a transition's action.
    fn is_blank(&self) -> bool {
        self.name().is_empty()
    }
}

impl Label for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl Label for &'static str {
    fn name(&self) -> &str {
        self
    }
}
