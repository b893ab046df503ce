//! Strongly typed entity identifiers.
//!
//! Every aggregate is keyed by a UUID wrapped in its own newtype so a shop id
//! can never be passed where a product id is expected. Identifiers serialise
//! as their canonical hyphenated string.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Error raised when an identifier string is not a canonical UUID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} must be a valid UUID")]
pub struct IdParseError {
    kind: &'static str,
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(Uuid);

        impl $name {
            /// Parse an identifier from its string form.
            pub fn new(id: impl AsRef<str>) -> Result<Self, IdParseError> {
                let raw = id.as_ref();
                if raw.trim() != raw {
                    return Err(IdParseError { kind: $kind });
                }
                Uuid::parse_str(raw)
                    .map(Self)
                    .map_err(|_| IdParseError { kind: $kind })
            }

            /// Generate a fresh random identifier.
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Access the underlying UUID.
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0.to_string()
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdParseError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

define_id!(
    /// Stable user identifier.
    UserId,
    "user id"
);
define_id!(
    /// Shop identifier.
    ShopId,
    "shop id"
);
define_id!(CategoryId, "category id");
define_id!(
    /// Product identifier.
    ProductId,
    "product id"
);
define_id!(CartId, "cart id");
define_id!(
    /// Order identifier. One order is produced per shop at checkout.
    OrderId,
    "order id"
);
define_id!(ShipmentId, "shipment id");
define_id!(PaymentId, "payment id");
