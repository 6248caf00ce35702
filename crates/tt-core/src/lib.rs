//! `tt-core` — foundational types for the `transit_twin` bus simulator.
//!
//! This crate is a dependency of every other `tt-*` crate.  It has no `tt-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `RouteId`, `StopId`, `BusId`                          |
//! | [`geo`]         | `Coordinate`, haversine distance, heading bearing     |
//! | [`lang`]        | `Language`, `LocalizedText`                           |
//! | [`line`]        | `LineType` enum                                       |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `BusRng` (per-bus speed draws)                        |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod lang;
pub mod line;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{Coordinate, bearing_deg, distance_m};
pub use ids::{BusId, RouteId, StopId};
pub use lang::{Language, LocalizedText};
pub use line::LineType;
pub use rng::BusRng;
pub use time::{SimClock, SimConfig, Tick};
