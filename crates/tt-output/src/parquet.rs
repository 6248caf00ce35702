//! Parquet output backend (feature `parquet`).
//!
//! Creates two files in the configured output directory:
//! - `bus_snapshots.parquet`
//! - `tick_summaries.parquet`

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{
    BooleanBuilder, Float64Builder, Int64Builder, StringBuilder, UInt32Builder, UInt64Builder,
};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::OutputWriter;
use crate::{BusSnapshotRow, OutputResult, TickSummaryRow};

fn snapshot_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("tick",         DataType::UInt64,  false),
        Field::new("bus_id",       DataType::Utf8,    false),
        Field::new("route_id",     DataType::Utf8,    false),
        Field::new("lat",          DataType::Float64, false),
        Field::new("lng",          DataType::Float64, false),
        Field::new("speed_kmh",    DataType::Float64, false),
        Field::new("heading",      DataType::Float64, false),
        Field::new("eta_seconds",  DataType::UInt32,  true),
        Field::new("is_off_route", DataType::Boolean, false),
    ]))
}

fn summary_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("tick",             DataType::UInt64, false),
        Field::new("unix_time_secs",   DataType::Int64,  false),
        Field::new("advanced_buses",   DataType::UInt64, false),
        Field::new("unresolved_buses", DataType::UInt64, false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// Writes fleet output to two Parquet files.
///
/// `finish()` **must** be called to write the Parquet file footer; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetWriter {
    snapshots:   Option<ArrowWriter<File>>,
    summaries:   Option<ArrowWriter<File>>,
    snap_schema: Arc<Schema>,
    summ_schema: Arc<Schema>,
}

impl ParquetWriter {
    /// Create both Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let snap_schema = snapshot_schema();
        let summ_schema = summary_schema();

        let snap_file = File::create(dir.join("bus_snapshots.parquet"))?;
        let snapshots = ArrowWriter::try_new(
            snap_file,
            Arc::clone(&snap_schema),
            Some(snappy_props()),
        )?;

        let summ_file = File::create(dir.join("tick_summaries.parquet"))?;
        let summaries = ArrowWriter::try_new(
            summ_file,
            Arc::clone(&summ_schema),
            Some(snappy_props()),
        )?;

        Ok(Self {
            snapshots: Some(snapshots),
            summaries: Some(summaries),
            snap_schema,
            summ_schema,
        })
    }
}

impl OutputWriter for ParquetWriter {
    fn write_snapshots(&mut self, rows: &[BusSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.snapshots.as_mut() else {
            return Ok(());
        };

        let mut ticks     = UInt64Builder::new();
        let mut bus_ids   = StringBuilder::new();
        let mut route_ids = StringBuilder::new();
        let mut lats      = Float64Builder::new();
        let mut lngs      = Float64Builder::new();
        let mut speeds    = Float64Builder::new();
        let mut headings  = Float64Builder::new();
        let mut etas      = UInt32Builder::new();
        let mut off_route = BooleanBuilder::new();

        for row in rows {
            ticks.append_value(row.tick);
            bus_ids.append_value(&row.bus_id);
            route_ids.append_value(&row.route_id);
            lats.append_value(row.lat);
            lngs.append_value(row.lng);
            speeds.append_value(row.speed_kmh);
            headings.append_value(row.heading);
            etas.append_option(row.eta_seconds);
            off_route.append_value(row.is_off_route);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.snap_schema),
            vec![
                Arc::new(ticks.finish()),
                Arc::new(bus_ids.finish()),
                Arc::new(route_ids.finish()),
                Arc::new(lats.finish()),
                Arc::new(lngs.finish()),
                Arc::new(speeds.finish()),
                Arc::new(headings.finish()),
                Arc::new(etas.finish()),
                Arc::new(off_route.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        let Some(writer) = self.summaries.as_mut() else {
            return Ok(());
        };

        let mut ticks      = UInt64Builder::new();
        let mut unix_times = Int64Builder::new();
        let mut advanced   = UInt64Builder::new();
        let mut unresolved = UInt64Builder::new();

        ticks.append_value(row.tick);
        unix_times.append_value(row.unix_time_secs);
        advanced.append_value(row.advanced_buses);
        unresolved.append_value(row.unresolved_buses);

        let batch = RecordBatch::try_new(
            Arc::clone(&self.summ_schema),
            vec![
                Arc::new(ticks.finish()),
                Arc::new(unix_times.finish()),
                Arc::new(advanced.finish()),
                Arc::new(unresolved.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(w) = self.snapshots.take() {
            w.close()?;
        }
        if let Some(w) = self.summaries.take() {
            w.close()?;
        }
        Ok(())
    }
}
