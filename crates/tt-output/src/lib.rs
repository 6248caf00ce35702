//! `tt-output` — fleet snapshot writers and console presentation.
//!
//! Three backends are provided behind Cargo features:
//!
//! | Feature   | Backend     | Files created                                         |
//! |-----------|-------------|-------------------------------------------------------|
//! | *(none)*  | CSV         | `bus_snapshots.csv`, `tick_summaries.csv`             |
//! | `sqlite`  | SQLite      | `output.db`                                           |
//! | `parquet` | Parquet     | `bus_snapshots.parquet`, `tick_summaries.parquet`     |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `tt_sim::SimObserver`.
//!
//! [`FleetBoard`] is a second observer that logs a human-readable line per
//! visible bus, with ETA text from [`format_eta`] in the chosen language.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tt_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer, &config);
//! sim.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod board;
pub mod csv;
pub mod error;
pub mod eta;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;

#[cfg(test)]
mod tests;

pub use board::FleetBoard;
pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use eta::{arrival_clock, format_eta};
pub use observer::SimOutputObserver;
pub use row::{BusSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;
