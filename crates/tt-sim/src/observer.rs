//! Simulation observer trait for progress reporting and data collection.

use tt_core::Tick;
use tt_fleet::{Bus, TickReport};
use tt_network::RouteCatalog;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, report: TickReport) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: moved {} buses", report.advanced);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once, before the first tick is processed, with the fleet as
    /// generated (or supplied to the builder).
    fn on_fleet_loaded(&mut self, _tick: Tick, _fleet: &[Bus], _catalog: &RouteCatalog) {}

    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the number of buses moved and the
    /// number carried over because their route is not in the catalog.
    fn on_tick_end(&mut self, _tick: Tick, _report: TickReport) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks` ticks).
    ///
    /// `fleet` is the complete fleet after this tick's movement step.
    fn on_snapshot(&mut self, _tick: Tick, _fleet: &[Bus], _catalog: &RouteCatalog) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
