//! Macros for ergonomic label definitions.

/// Generate a `Label` implementation for a simple enum.
///
/// The enum gets `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Debug` and
/// serde derives; each variant's name is its identifier.
///
/// # Example
///
/// ```
/// use stateless_fsm::label_enum;
/// use stateless_fsm::core::Label;
///
/// label_enum! {
///     pub enum TurnstileState {
///         Locked,
///         Unlocked,
///     }
/// }
///
/// assert_eq!(TurnstileState::Locked.name(), "Locked");
/// ```
#[macro_export]
macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Label for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::Label::name(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Label;

    label_enum! {
        enum TestState {
            Locked,
            Unlocked,
        }
    }

    #[test]
    fn label_enum_macro_generates_trait() {
        assert_eq!(TestState::Locked.name(), "Locked");
        assert_eq!(TestState::Unlocked.name(), "Unlocked");
        assert!(!TestState::Locked.is_blank());
    }

    #[test]
    fn label_enum_displays_name() {
        assert_eq!(TestState::Unlocked.to_string(), "Unlocked");
    }

    #[test]
    fn label_enum_supports_visibility_and_attributes() {
        label_enum! {
            /// Events accepted by a turnstile.
            pub enum PublicEvent {
                Coin,
                #[allow(dead_code)]
                Push,
            }
        }

        let event = PublicEvent::Coin;
        assert_eq!(event, PublicEvent::Coin);
        assert_eq!(event.name(), "Coin");
    }

    #[test]
    fn label_enum_serializes_by_variant_name() {
        let json = serde_json::to_string(&TestState::Locked).unwrap();
        assert_eq!(json, "\"Locked\"");
        let back: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TestState::Locked);
    }
}
