//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `bus_snapshots` and `tick_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::{BusSnapshotRow, OutputResult, TickSummaryRow};
use crate::writer::OutputWriter;

/// Writes fleet output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS bus_snapshots (
                 tick         INTEGER NOT NULL,
                 bus_id       TEXT    NOT NULL,
                 route_id     TEXT    NOT NULL,
                 lat          REAL    NOT NULL,
                 lng          REAL    NOT NULL,
                 speed_kmh    REAL    NOT NULL,
                 heading      REAL    NOT NULL,
                 eta_seconds  INTEGER,
                 is_off_route INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 tick             INTEGER PRIMARY KEY,
                 unix_time_secs   INTEGER NOT NULL,
                 advanced_buses   INTEGER NOT NULL,
                 unresolved_buses INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_snapshots(&mut self, rows: &[BusSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO bus_snapshots \
                 (tick, bus_id, route_id, lat, lng, speed_kmh, heading, eta_seconds, is_off_route) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.tick,
                    row.bus_id,
                    row.route_id,
                    row.lat,
                    row.lng,
                    row.speed_kmh,
                    row.heading,
                    row.eta_seconds,
                    row.is_off_route as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_summaries (tick, unix_time_secs, advanced_buses, unresolved_buses) \
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![row.tick, row.unix_time_secs, row.advanced_buses, row.unresolved_buses],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
