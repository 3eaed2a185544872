//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing identifiers from different entity types. All PostShip
//! identifiers are short random strings, so the wrappers hold a `String`.
//! Generation lives server-side (the core crate stays pure).

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>`, and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use postship_core::define_id;
/// define_id!(WarehouseId);
/// define_id!(CarrierId);
///
/// let warehouse = WarehouseId::new("wh_01");
/// let carrier = CarrierId::new("wh_01");
///
/// // These are different types, so this won't compile:
/// // let _: WarehouseId = carrier;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the underlying `String`.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ShipmentId);
define_id!(TrackingEventId);
define_id!(PaymentIntentId);

// The public-facing shipment identifier, distinct from the internal
// `ShipmentId`. Unique and immutable once assigned.
define_id!(TrackingNumber);

impl TrackingNumber {
    /// Carrier prefix every tracking number starts with.
    pub const PREFIX: &'static str = "PS";
}
