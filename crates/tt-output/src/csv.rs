//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `bus_snapshots.csv`
//! - `tick_summaries.csv`
//!
//! A bus with no ETA yet gets an empty `eta_seconds` field.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{BusSnapshotRow, OutputResult, TickSummaryRow};
use crate::writer::OutputWriter;

/// Writes fleet output to two CSV files.
pub struct CsvWriter {
    snapshots:  Writer<File>,
    summaries:  Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("bus_snapshots.csv"))?;
        snapshots.write_record([
            "tick", "bus_id", "route_id", "lat", "lng",
            "speed_kmh", "heading", "eta_seconds", "is_off_route",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "unix_time_secs", "advanced_buses", "unresolved_buses"])?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[BusSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.bus_id.clone(),
                row.route_id.clone(),
                row.lat.to_string(),
                row.lng.to_string(),
                row.speed_kmh.to_string(),
                row.heading.to_string(),
                row.eta_seconds.map(|s| s.to_string()).unwrap_or_default(),
                (row.is_off_route as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.unix_time_secs.to_string(),
            row.advanced_buses.to_string(),
            row.unresolved_buses.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
