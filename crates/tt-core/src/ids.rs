//! Strongly typed string identifier wrappers.
//!
//! Route, stop, and bus identifiers are human-readable strings in the
//! catalog (`"r_11"`, `"s_bahia"`, `"bus_11_1"`).  Wrapping them keeps a
//! `RouteId` from being passed where a `BusId` is expected.  All IDs are
//! `Ord + Hash` so they work as map keys without ceremony.

use std::borrow::Borrow;
use std::fmt;

/// Generate a typed ID wrapper around a `String`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub String);

        impl $name {
            #[inline]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl Borrow<str> for $name {
            #[inline]
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

typed_id! {
    /// Identifier of a route (bus line) in the catalog, e.g. `"r_11"`.
    pub struct RouteId;
}

typed_id! {
    /// Identifier of a stop, e.g. `"s_bahia"`.
    pub struct StopId;
}

typed_id! {
    /// Identifier of a simulated bus, `bus_<route code>_<ordinal>`.
    pub struct BusId;
}

impl BusId {
    /// The id of the `ordinal`-th bus (1-based) seeded on the route with
    /// display code `route_code`.
    pub fn for_route(route_code: &str, ordinal: u32) -> Self {
        Self(format!("bus_{route_code}_{ordinal}"))
    }
}
