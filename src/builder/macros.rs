//! Macros for ergonomic state declaration.

/// Declare a fieldless state enum with everything a machine needs.
///
/// The enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Debug` and the
/// serde traits, and gains `ALL` (every variant in declaration order) and
/// `name()`. Explicit discriminants are allowed.
///
/// # Example
///
/// ```
/// use fsm_rules::state_enum;
///
/// state_enum! {
///     pub enum Phase {
///         Idle = 0,
///         Running = 1,
///     }
/// }
///
/// assert_eq!(Phase::ALL, &[Phase::Idle, Phase::Running]);
/// assert_eq!(Phase::Running.name(), "Running");
/// assert_eq!(Phase::Running as i32, 1);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $value:expr)?
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
                $variant $(= $value)?
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// The variant's name.
            #[allow(dead_code)]
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
