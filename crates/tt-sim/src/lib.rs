//! `tt-sim` — drives the fleet forward one tick at a time.
//!
//! # Tick loop
//!
//! ```text
//! on_fleet_loaded(initial fleet)
//! for tick in 0..config.total_ticks:
//!   on_tick_start(tick)
//!   fleet = advance_tick(fleet, catalog)     (parallel with `parallel`)
//!   on_tick_end(tick, report)
//!   on_snapshot(tick, fleet, catalog)        every output_interval_ticks
//! on_sim_end(final tick)
//! ```
//!
//! [`Sim`] runs as fast as it can and is fully synchronous.  With the
//! `realtime` feature, [`Ticker`] runs the same step on a tokio task paced by
//! the wall clock and publishes each complete fleet through a watch channel.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Advances buses on Rayon's thread pool.                  |
//! | `fx-hash`  | FxHash for the catalog's route-id index.                |
//! | `realtime` | Enables [`Ticker`] (tokio).                             |
//!
//! The ticker tests are compiled only with `realtime`.  Run them with
//! `cargo test -p tt-sim --features realtime`; a plain `cargo test -p tt-sim`
//! covers the batch loop alone.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tt_core::SimConfig;
//! use tt_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), Arc::new(catalog)).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
#[cfg(feature = "realtime")]
pub mod ticker;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
#[cfg(feature = "realtime")]
pub use ticker::{FleetSnapshot, Ticker, TickerHandle};
