//! `tt-fleet` — the simulated buses and the rules that move them.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`bus`]      | `Bus` — one simulated vehicle                              |
//! | [`init`]     | `generate_initial_fleet` — two buses per route             |
//! | [`movement`] | `advance_tick` — one movement step for the whole fleet     |
//! | [`view`]     | `RouteSelection` — which buses/stops a consumer shows      |
//!
//! # Movement model (nearest-vertex chase)
//!
//! Each tick, every bus independently:
//!
//! 1. finds the nearest vertex of its route's path (first minimum wins),
//! 2. targets the vertex after it, wrapping to the first vertex at the end,
//! 3. moves 10 % of the remaining lat/lng delta toward that target,
//! 4. takes its heading from the old position toward the target,
//! 5. estimates its ETA to the target from its constant speed.
//!
//! The fleet is a plain `Vec<Bus>` value: `advance_tick` borrows the old
//! fleet and returns a new one with the same buses in the same order.

pub mod bus;
pub mod init;
pub mod movement;
pub mod view;


pub use bus::Bus;
pub use init::{MAX_SPEED_KMH, MIN_SPEED_KMH, generate_initial_fleet};
pub use movement::{STEP_FRACTION, TickReport, advance_bus, advance_tick, advance_tick_with_report};
pub use view::{RouteSelection, buses_on_route};
