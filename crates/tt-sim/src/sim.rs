//! The `Sim` struct and its tick loop.

use std::sync::Arc;

use tracing::{debug, info};

use tt_core::{SimClock, SimConfig, Tick};
use tt_fleet::{Bus, TickReport, advance_tick_with_report};
use tt_network::RouteCatalog;

use crate::{SimObserver, SimResult};

/// The batch simulation runner.
///
/// `Sim` owns the fleet.  Each tick it replaces the fleet with the result of
/// one movement step over the shared catalog; nothing else changes.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (total ticks, seed, tick duration, …).
    pub config: SimConfig,

    /// Simulation clock. Tracks the current tick and maps to wall time.
    pub clock: SimClock,

    /// Read-only route catalog, shared with any other consumers.
    pub catalog: Arc<RouteCatalog>,

    /// The current fleet, in seeding order.
    pub fleet: Vec<Bus>,

    pub(crate) fleet_reported: bool,

    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        self.report_fleet(observer);
        while self.clock.current_tick < self.config.end_tick() {
            self.observed_tick(observer);
        }
        let end = self.clock.current_tick;
        info!(final_tick = %end, buses = self.fleet.len(), "simulation finished");
        observer.on_sim_end(end);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        self.report_fleet(observer);
        for _ in 0..n {
            self.observed_tick(observer);
        }
        Ok(())
    }

    /// Advance exactly one tick without observers.
    pub fn step(&mut self) -> TickReport {
        let report = self.process_tick(self.clock.current_tick);
        self.clock.advance();
        report
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn report_fleet<O: SimObserver>(&mut self, observer: &mut O) {
        if !self.fleet_reported {
            observer.on_fleet_loaded(self.clock.current_tick, &self.fleet, &self.catalog);
            self.fleet_reported = true;
        }
    }

    fn observed_tick<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let report = self.process_tick(now);
        observer.on_tick_end(now, report);
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.fleet, &self.catalog);
        }
        self.clock.advance();
    }

    fn process_tick(&mut self, now: Tick) -> TickReport {
        let catalog = &*self.catalog;
        let fleet = self.fleet.as_slice();

        #[cfg(feature = "parallel")]
        let (next, report) = match &self.pool {
            Some(pool) => pool.install(|| advance_tick_with_report(fleet, catalog)),
            None => advance_tick_with_report(fleet, catalog),
        };

        #[cfg(not(feature = "parallel"))]
        let (next, report) = advance_tick_with_report(fleet, catalog);

        debug!(tick = %now, advanced = report.advanced, unresolved = report.unresolved, "tick");
        self.fleet = next;
        report
    }
}
