//! Wall-clock driver: one fleet update per `tick_period_ms`, published as a
//! whole over a `tokio::sync::watch` channel.
//!
//! The ticker task is the only writer.  Every value a reader sees is a
//! complete [`FleetSnapshot`] behind an `Arc`, so readers never observe a
//! fleet that is half-way through a tick.

use std::sync::Arc;

use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use tt_core::{SimConfig, Tick};
use tt_fleet::{Bus, advance_tick_with_report, generate_initial_fleet};
use tt_network::RouteCatalog;

use crate::{SimError, SimResult};

/// A complete fleet as of one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetSnapshot {
    /// Movement steps applied so far.  The freshly seeded fleet is tick 0.
    pub tick: Tick,
    /// Simulated Unix time of this snapshot.
    pub unix_time_secs: i64,
    pub fleet: Vec<Bus>,
}

/// Receiver side of the snapshot channel.  `None` until the initial load
/// delay has elapsed and the fleet has been seeded.
pub type SnapshotReceiver = watch::Receiver<Option<Arc<FleetSnapshot>>>;

/// Spawns the real-time ticker task.
pub struct Ticker;

impl Ticker {
    /// Validate `config` and start ticking on the current tokio runtime.
    ///
    /// The task sleeps `initial_load_delay_ms`, seeds the fleet from
    /// `catalog` and `config.seed`, publishes it, then advances and
    /// publishes once every `tick_period_ms`.  A period that overruns is
    /// followed by a full period, not a burst of catch-up ticks.
    pub fn spawn(config: SimConfig, catalog: Arc<RouteCatalog>) -> SimResult<TickerHandle> {
        config.validate()?;

        let (tx, rx) = watch::channel(None);
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let task = tokio::spawn(run_ticker(config, catalog, tx, shutdown_rx));

        Ok(TickerHandle {
            rx,
            shutdown: Some(shutdown_tx),
            task:     Some(task),
        })
    }
}

/// Owner of a running ticker.  Dropping it stops the ticker.
pub struct TickerHandle {
    rx:       SnapshotReceiver,
    shutdown: Option<oneshot::Sender<()>>,
    task:     Option<JoinHandle<()>>,
}

impl TickerHandle {
    /// A new receiver.  It reports a change on every publish; the channel
    /// closes once the ticker stops.
    pub fn subscribe(&self) -> SnapshotReceiver {
        self.rx.clone()
    }

    /// The most recently published snapshot, if any.
    pub fn latest(&self) -> Option<Arc<FleetSnapshot>> {
        self.rx.borrow().clone()
    }

    /// Stop ticking.  No further snapshots are published.  Idempotent.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }

    /// Cancel and wait for the task to exit.
    pub async fn shutdown(mut self) -> SimResult<()> {
        self.cancel();
        if let Some(task) = self.task.take() {
            task.await.map_err(|e| SimError::Realtime(e.to_string()))?;
        }
        Ok(())
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn run_ticker(
    config:       SimConfig,
    catalog:      Arc<RouteCatalog>,
    tx:           watch::Sender<Option<Arc<FleetSnapshot>>>,
    mut shutdown: oneshot::Receiver<()>,
) {
    // A dropped sender resolves `shutdown` too, so losing the handle stops us.
    tokio::select! {
        _ = tokio::time::sleep(config.initial_load_delay()) => {}
        _ = &mut shutdown => return,
    }

    let mut clock = config.make_clock();
    let fleet = generate_initial_fleet(catalog.routes(), config.seed);
    info!(buses = fleet.len(), routes = catalog.route_count(), "real-time fleet loaded");

    let mut current = Arc::new(FleetSnapshot {
        tick:           clock.current_tick,
        unix_time_secs: clock.current_unix_secs(),
        fleet,
    });
    tx.send_replace(Some(Arc::clone(&current)));

    let period = config.tick_period();
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = interval.tick() => {}
            _ = &mut shutdown => break,
        }

        let (fleet, report) = advance_tick_with_report(&current.fleet, &catalog);
        clock.advance();
        debug!(tick = %clock.current_tick, advanced = report.advanced, unresolved = report.unresolved, "real-time tick");

        current = Arc::new(FleetSnapshot {
            tick:           clock.current_tick,
            unix_time_secs: clock.current_unix_secs(),
            fleet,
        });
        tx.send_replace(Some(Arc::clone(&current)));
    }

    info!(tick = %clock.current_tick, "real-time ticker stopped");
}
