//! oran — live bus tracker simulation for Oran, Algeria.
//!
//! Seeds two buses on each of the city's 26 lines and moves them along their
//! routes.  Batch mode runs `--ticks` steps as fast as possible and writes
//! CSV output; `--realtime` paces ticks by the wall clock and prints the
//! fleet board after every update.

mod catalog;


use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;

use tt_core::{Language, RouteId, SimConfig, Tick};
use tt_fleet::{Bus, RouteSelection, TickReport};
use tt_network::{RouteCatalog, load_catalog_dir};
use tt_output::{CsvWriter, FleetBoard, SimOutputObserver};
use tt_sim::{SimBuilder, SimObserver, Ticker};

use catalog::{ORAN_CENTER, build_catalog};

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Oran bus fleet simulator
#[derive(Parser, Debug)]
#[command(name = "oran")]
#[command(about = "Simulate the Oran bus fleet in batch or real time")]
struct Args {
    /// JSON file with SimConfig fields; missing fields take defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory with routes.csv, route_points.csv, stops.csv (default: built-in network)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Ticks to run (batch) or updates to show (real time)
    #[arg(long)]
    ticks: Option<u64>,

    /// RNG seed for bus speeds
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory for batch CSV files
    #[arg(long, default_value = "output/oran")]
    output: PathBuf,

    /// Pace ticks by the wall clock instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Display language: ar, fr, or en
    #[arg(long, default_value = "ar")]
    language: Language,

    /// Only show buses on this route id (e.g. r_11)
    #[arg(long)]
    route: Option<String>,

    /// List routes whose code or name contains this text, then exit
    #[arg(long)]
    search: Option<String>,
}

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Forwards every hook to two observers and counts rows written.
struct Tee<A: SimObserver, B: SimObserver> {
    first:         A,
    second:        B,
    snapshot_rows: usize,
    summary_rows:  usize,
    unresolved:    usize,
}

impl<A: SimObserver, B: SimObserver> Tee<A, B> {
    fn new(first: A, second: B) -> Self {
        Self { first, second, snapshot_rows: 0, summary_rows: 0, unresolved: 0 }
    }
}

impl<A: SimObserver, B: SimObserver> SimObserver for Tee<A, B> {
    fn on_fleet_loaded(&mut self, tick: Tick, fleet: &[Bus], catalog: &RouteCatalog) {
        self.first.on_fleet_loaded(tick, fleet, catalog);
        self.second.on_fleet_loaded(tick, fleet, catalog);
    }
    fn on_tick_start(&mut self, tick: Tick) {
        self.first.on_tick_start(tick);
        self.second.on_tick_start(tick);
    }
    fn on_tick_end(&mut self, tick: Tick, report: TickReport) {
        self.summary_rows += 1;
        self.unresolved += report.unresolved;
        self.first.on_tick_end(tick, report);
        self.second.on_tick_end(tick, report);
    }
    fn on_snapshot(&mut self, tick: Tick, fleet: &[Bus], catalog: &RouteCatalog) {
        self.snapshot_rows += fleet.len();
        self.first.on_snapshot(tick, fleet, catalog);
        self.second.on_snapshot(tick, fleet, catalog);
    }
    fn on_sim_end(&mut self, final_tick: Tick) {
        self.first.on_sim_end(final_tick);
        self.second.on_sim_end(final_tick);
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<SimConfig>(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => SimConfig {
            start_unix_secs: SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64,
            ..SimConfig::default()
        },
    };
    if let Some(ticks) = args.ticks {
        config.total_ticks = ticks;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.validate()?;
    Ok(config)
}

fn load_catalog(dir: Option<&Path>) -> Result<RouteCatalog> {
    Ok(match dir {
        Some(dir) => load_catalog_dir(dir).with_context(|| format!("loading catalog from {}", dir.display()))?,
        None => build_catalog()?,
    })
}

fn selection_for(route: Option<&str>, catalog: &RouteCatalog) -> Result<RouteSelection> {
    let mut selection = RouteSelection::new();
    if let Some(id) = route {
        if catalog.route(id).is_none() {
            bail!("unknown route {id:?}");
        }
        selection.select(RouteId::from(id));
    }
    Ok(selection)
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let catalog = Arc::new(load_catalog(args.catalog.as_deref())?);
    info!(
        routes = catalog.route_count(),
        stops  = catalog.stop_count(),
        center = %ORAN_CENTER,
        "catalog loaded"
    );

    if let Some(query) = &args.search {
        for route in catalog.search(query, args.language) {
            println!("{:<8} {:<10} {}", route.code, route.line_type, route.name.get(args.language));
        }
        return Ok(());
    }

    let selection = selection_for(args.route.as_deref(), &catalog)?;
    let board = FleetBoard::new(&config, args.language).with_selection(selection);

    if args.realtime {
        run_realtime(config, catalog, board)
    } else {
        run_batch(config, catalog, board, &args.output)
    }
}

fn run_batch(config: SimConfig, catalog: Arc<RouteCatalog>, board: FleetBoard, out: &Path) -> Result<()> {
    println!(
        "Sim: {} ticks × {} s, snapshot every {} ticks",
        config.total_ticks, config.tick_duration_secs, config.output_interval_ticks
    );

    let mut sim = SimBuilder::new(config.clone(), catalog).build()?;

    std::fs::create_dir_all(out)?;
    let writer = CsvWriter::new(out)?;
    let mut obs = Tee::new(SimOutputObserver::new(writer, &config), board);

    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.first.take_error() {
        eprintln!("output error: {e}");
    }
    extra_writers(&config, &sim.fleet, out)?;

    println!("Simulation complete in {:.3} s ({})", elapsed.as_secs_f64(), sim.clock);
    println!("  bus_snapshots.csv  : {} rows", obs.snapshot_rows);
    println!("  tick_summaries.csv : {} rows", obs.summary_rows);
    if obs.unresolved > 0 {
        println!("  unresolved buses   : {}", obs.unresolved);
    }
    println!();

    println!("{:<12} {:<8} {:>7} {:>8}  {}", "Bus", "Route", "km/h", "Heading", "Nearest stop");
    println!("{}", "-".repeat(60));
    for bus in &sim.fleet {
        let stop = sim
            .catalog
            .nearest_stop(bus.location)
            .map(|s| s.name.get(obs.second.language()))
            .unwrap_or("-");
        println!(
            "{:<12} {:<8} {:>7.1} {:>8.1}  {}",
            bus.id, bus.route_id, bus.speed_kmh, bus.heading, stop
        );
    }

    Ok(())
}

/// Final-fleet copies in the feature-gated formats.
#[cfg(any(feature = "sqlite", feature = "parquet"))]
fn extra_writers(config: &SimConfig, fleet: &[Bus], out: &Path) -> Result<()> {
    use tt_output::{BusSnapshotRow, OutputWriter};

    let mut writers: Vec<Box<dyn OutputWriter>> = Vec::new();

    #[cfg(feature = "sqlite")]
    writers.push(Box::new(tt_output::SqliteWriter::new(out)?));

    #[cfg(feature = "parquet")]
    writers.push(Box::new(tt_output::ParquetWriter::new(out)?));

    let tick = config.end_tick();
    let rows: Vec<_> = fleet.iter().map(|b| BusSnapshotRow::from_bus(tick, b)).collect();
    for w in &mut writers {
        w.write_snapshots(&rows)?;
        w.finish()?;
    }
    Ok(())
}

#[cfg(not(any(feature = "sqlite", feature = "parquet")))]
fn extra_writers(_config: &SimConfig, _fleet: &[Bus], _out: &Path) -> Result<()> {
    Ok(())
}

fn run_realtime(config: SimConfig, catalog: Arc<RouteCatalog>, board: FleetBoard) -> Result<()> {
    let updates = config.total_ticks;
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    rt.block_on(async move {
        println!(
            "Real time: first fleet after {} ms, then every {} ms ({} updates)",
            config.initial_load_delay_ms, config.tick_period_ms, updates
        );
        let handle = Ticker::spawn(config, Arc::clone(&catalog))?;
        let mut rx = handle.subscribe();

        let mut shown = 0;
        while shown <= updates {
            rx.changed().await?;
            let Some(snapshot) = rx.borrow_and_update().clone() else {
                continue;
            };
            println!("── {} ─────────────────────────────", snapshot.tick);
            for line in board.lines(&snapshot.fleet, &catalog, snapshot.unix_time_secs) {
                println!("{line}");
            }
            shown += 1;
        }

        handle.shutdown().await?;
        Ok::<(), anyhow::Error>(())
    })
}
