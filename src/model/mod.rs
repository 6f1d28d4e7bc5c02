//! Data transfer objects exchanged over the HTTP API.
//!
//! Everything in this module is plain serde data with an OpenAPI schema. Enums shared
//! between the API and the domain layer live here as well so both sides agree on the
//! wire spelling, which is also the spelling stored in the database.

/// Declares a fieldless enum that round-trips through its variant name.
///
/// Generates `as_str`, `FromStr` and `Display` so the same spelling is used for JSON,
/// database columns and log output.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(
            serde::Serialize, serde::Deserialize, utoipa::ToSchema,
            Debug, Clone, Copy, PartialEq, Eq, Hash,
        )]
        pub enum $name { $($variant),+ }

        impl $name {
            /// All variants in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $(stringify!($variant) => Ok($name::$variant),)+
                    other => Err(format!(
                        "Unknown {} '{}'",
                        stringify!($name),
                        other
                    )),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use string_enum;

pub mod api;
pub mod customer;
pub mod location;
pub mod notification;
pub mod payment;
pub mod pricing;
pub mod reservation;
pub mod vehicle;
