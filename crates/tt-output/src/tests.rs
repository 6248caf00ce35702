//! Integration tests for tt-output.

#[cfg(test)]
mod csv_tests {
    use std::sync::Arc;

    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{BusSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(n: u32, tick: u64, eta: Option<u32>) -> BusSnapshotRow {
        BusSnapshotRow {
            tick,
            bus_id:       format!("bus_11_{n}"),
            route_id:     "r_11".into(),
            lat:          35.7,
            lng:          -0.63,
            speed_kmh:    30.5,
            heading:      90.0,
            eta_seconds:  eta,
            is_off_route: false,
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow { tick, unix_time_secs: tick as i64 * 5, advanced_buses: 52, unresolved_buses: 1 }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("bus_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("bus_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, [
            "tick", "bus_id", "route_id", "lat", "lng",
            "speed_kmh", "heading", "eta_seconds", "is_off_route",
        ]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "unix_time_secs", "advanced_buses", "unresolved_buses"]);
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![snap_row(1, 5, Some(42)), snap_row(2, 5, None)];
        w.write_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("bus_snapshots.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 2);
        assert_eq!(&read_rows[0][0], "5");        // tick
        assert_eq!(&read_rows[0][1], "bus_11_1");
        assert_eq!(&read_rows[0][2], "r_11");
        assert_eq!(&read_rows[0][7], "42");       // eta_seconds
        assert_eq!(&read_rows[0][8], "0");        // is_off_route
        assert_eq!(&read_rows[1][7], "");         // no ETA yet
        assert_eq!(read_rows[0][3].parse::<f64>().unwrap(), 35.7);
    }

    #[test]
    fn csv_tick_summary_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "3");
        assert_eq!(&read_rows[0][1], "15");
        assert_eq!(&read_rows[0][2], "52");
        assert_eq!(&read_rows[0][3], "1");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }

    #[test]
    fn csv_missing_dir_errors() {
        assert!(CsvWriter::new(std::path::Path::new("/nonexistent/out")).is_err());
    }

    #[test]
    fn integration_csv() {
        use tt_core::{Coordinate, SimConfig};
        use tt_network::{Route, RouteCatalogBuilder};
        use tt_sim::SimBuilder;

        use crate::observer::SimOutputObserver;

        let config = SimConfig {
            start_unix_secs:       1_000,
            tick_duration_secs:    5,
            total_ticks:           6,
            seed:                  1,
            num_threads:           Some(1),
            output_interval_ticks: 2,
            ..SimConfig::default()
        };

        let c = Coordinate::new;
        let catalog = RouteCatalogBuilder::new()
            .add_route(Route::new("r_a", "A", vec![c(0.0, 0.0), c(0.0, 1.0)]))
            .add_route(Route::new("r_b", "B", vec![c(1.0, 0.0), c(1.0, 1.0), c(2.0, 1.0)]))
            .build()
            .unwrap();
        let mut sim = SimBuilder::new(config.clone(), Arc::new(catalog)).build().unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, &config);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // output_interval = 2 → snapshots at ticks 0, 2, 4 (3 ticks × 4 buses = 12 rows)
        let mut rdr = csv::Reader::from_path(dir.path().join("bus_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 12, "expected 3 ticks × 4 buses = 12 snapshot rows, got {}", rows.len());
        assert!(rows.iter().all(|r| !r[7].is_empty()), "every snapshot is after a move");

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(&rows[5][1], "1025"); // 1000 + 5 * 5
        assert_eq!(&rows[5][2], "4");
    }
}

// ── Observer error handling ───────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use tt_core::{SimConfig, Tick};
    use tt_fleet::TickReport;
    use tt_sim::SimObserver;

    use crate::observer::SimOutputObserver;
    use crate::row::{BusSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    /// Fails every summary write, counting calls.
    #[derive(Default)]
    struct FailingWriter {
        attempts: usize,
        finished: usize,
    }

    impl OutputWriter for FailingWriter {
        fn write_snapshots(&mut self, _rows: &[BusSnapshotRow]) -> OutputResult<()> {
            Ok(())
        }
        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            self.attempts += 1;
            Err(OutputError::Io(std::io::Error::other(format!("disk full #{}", self.attempts))))
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn keeps_first_error_and_keeps_going() {
        let mut obs = SimOutputObserver::new(FailingWriter::default(), &SimConfig::default());
        for t in 0..3 {
            obs.on_tick_end(Tick(t), TickReport { advanced: 2, unresolved: 0 });
        }
        obs.on_sim_end(Tick(3));

        let err = obs.take_error().expect("error stored");
        assert!(err.to_string().contains("#1"), "got {err}");
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        assert_eq!(writer.attempts, 3);
        assert_eq!(writer.finished, 1);
    }
}

// ── ETA formatting ────────────────────────────────────────────────────────────

#[cfg(test)]
mod eta_tests {
    use tt_core::Language;

    use crate::eta::{arrival_clock, format_eta};

    #[test]
    fn under_a_minute() {
        assert_eq!(format_eta(0, Language::En), "0 sec");
        assert_eq!(format_eta(59, Language::En), "59 sec");
    }

    #[test]
    fn whole_minutes_drop_seconds() {
        assert_eq!(format_eta(60, Language::En), "1 min");
        assert_eq!(format_eta(600, Language::Fr), "10 min");
    }

    #[test]
    fn minutes_and_seconds() {
        assert_eq!(format_eta(61, Language::En), "1 min 1 sec");
        assert_eq!(format_eta(10_008, Language::En), "166 min 48 sec");
        assert_eq!(format_eta(125, Language::Fr), "2 min 5 s");
    }

    #[test]
    fn arabic_labels() {
        assert_eq!(format_eta(30, Language::Ar), "30 ثانية");
        assert_eq!(format_eta(90, Language::Ar), "1 دقيقة 30 ثانية");
    }

    #[test]
    fn clock_formatting() {
        assert_eq!(arrival_clock(0, 0), "00:00");
        assert_eq!(arrival_clock(0, 59), "00:00");
        assert_eq!(arrival_clock(0, 3_660), "01:01");
        // 2023-11-14 22:13:20 UTC + 1 h
        assert_eq!(arrival_clock(1_700_000_000, 3_600), "23:13");
    }

    #[test]
    fn clock_wraps_past_midnight() {
        assert_eq!(arrival_clock(86_399, 2), "00:00");
        assert_eq!(arrival_clock(-60, 0), "23:59");
    }
}

// ── Fleet board ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod board_tests {
    use tt_core::{BusId, Coordinate, Language, LocalizedText, RouteId, SimConfig};
    use tt_fleet::{Bus, RouteSelection};
    use tt_network::{Route, RouteCatalog, RouteCatalogBuilder};

    use crate::board::FleetBoard;

    fn catalog() -> RouteCatalog {
        let c = Coordinate::new;
        RouteCatalogBuilder::new()
            .add_route(
                Route::new("r_11", "11", vec![c(35.70, -0.65), c(35.71, -0.62)])
                    .with_name(LocalizedText::new("المدينة الجديدة", "Medina Jdida", "New Medina")),
            )
            .add_route(Route::new("r_8", "8", vec![c(35.69, -0.64)]))
            .build()
            .unwrap()
    }

    fn bus(id: &str, route: &str, eta: Option<u32>) -> Bus {
        let mut b = Bus::new(BusId::from(id), RouteId::from(route), Coordinate::new(35.7, -0.64), 34.6);
        b.heading = 90.2;
        b.eta_seconds = eta;
        b
    }

    #[test]
    fn line_with_eta() {
        let board = FleetBoard::new(&SimConfig::default(), Language::En);
        let line = board.line(&bus("bus_11_1", "r_11", Some(125)), &catalog(), 0);
        assert_eq!(line, "11 New Medina | 35 km/h | 90° | 2 min 5 sec (00:02)");
    }

    #[test]
    fn line_in_french_without_eta() {
        let board = FleetBoard::new(&SimConfig::default(), Language::Fr);
        let line = board.line(&bus("bus_11_1", "r_11", None), &catalog(), 0);
        assert_eq!(line, "11 Medina Jdida | 35 km/h | 90° | -");
    }

    #[test]
    fn unknown_route_shows_id() {
        let board = FleetBoard::new(&SimConfig::default(), Language::En);
        let line = board.line(&bus("bus_x_1", "r_gone", Some(5)), &catalog(), 0);
        assert!(line.starts_with("r_gone "), "got {line}");
    }

    #[test]
    fn selection_limits_lines() {
        let fleet = vec![
            bus("bus_11_1", "r_11", Some(10)),
            bus("bus_8_1", "r_8", Some(0)),
            bus("bus_11_2", "r_11", Some(20)),
        ];
        let cat = catalog();

        let mut board = FleetBoard::new(&SimConfig::default(), Language::En);
        assert_eq!(board.lines(&fleet, &cat, 0).len(), 3);

        board.selection_mut().toggle(RouteId::from("r_8"));
        let lines = board.lines(&fleet, &cat, 0);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("8 "));

        let mut sel = RouteSelection::new();
        sel.select(RouteId::from("r_11"));
        let board = FleetBoard::new(&SimConfig::default(), Language::Ar).with_selection(sel);
        assert_eq!(board.lines(&fleet, &cat, 0).len(), 2);
        assert_eq!(board.language(), Language::Ar);
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use crate::row::{BusSnapshotRow, TickSummaryRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn row(bus_id: &str, eta: Option<u32>) -> BusSnapshotRow {
        BusSnapshotRow {
            tick:         1,
            bus_id:       bus_id.into(),
            route_id:     "r_11".into(),
            lat:          35.7,
            lng:          -0.6,
            speed_kmh:    25.0,
            heading:      180.0,
            eta_seconds:  eta,
            is_off_route: false,
        }
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_snapshot_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[row("a", Some(1)), row("b", Some(2)), row("c", None)]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM bus_snapshots", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_missing_eta_is_null() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[row("a", None)]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let eta: Option<i64> = conn.query_row(
            "SELECT eta_seconds FROM bus_snapshots WHERE bus_id = 'a'", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(eta, None);
    }

    #[test]
    fn sqlite_tick_summary() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow {
            tick: 7, unix_time_secs: 35, advanced_buses: 52, unresolved_buses: 0,
        }).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (tick, unix_time, advanced): (i64, i64, i64) = conn.query_row(
            "SELECT tick, unix_time_secs, advanced_buses FROM tick_summaries WHERE tick = 7",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        ).unwrap();
        assert_eq!(tick, 7);
        assert_eq!(unix_time, 35);
        assert_eq!(advanced, 52);
    }
}

// ── Parquet tests ─────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "parquet"))]
mod parquet_tests {
    use tempfile::TempDir;

    use arrow::datatypes::DataType;
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

    use crate::parquet::ParquetWriter;
    use crate::row::BusSnapshotRow;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn row(eta: Option<u32>) -> BusSnapshotRow {
        BusSnapshotRow {
            tick:         2,
            bus_id:       "bus_11_1".into(),
            route_id:     "r_11".into(),
            lat:          35.7,
            lng:          -0.6,
            speed_kmh:    25.0,
            heading:      45.0,
            eta_seconds:  eta,
            is_off_route: false,
        }
    }

    #[test]
    fn parquet_files_created() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert!(dir.path().join("bus_snapshots.parquet").exists());
        assert!(dir.path().join("tick_summaries.parquet").exists());
    }

    #[test]
    fn parquet_snapshot_rows_and_schema() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[row(Some(30)), row(None)]).unwrap();
        w.finish().unwrap();

        let file = std::fs::File::open(dir.path().join("bus_snapshots.parquet")).unwrap();
        let builder = ParquetRecordBatchReaderBuilder::try_new(file).unwrap();
        let schema = builder.schema().clone();
        let reader = builder.build().unwrap();

        let batches: Vec<_> = reader.map(|b| b.unwrap()).collect();
        let total_rows: usize = batches.iter().map(|b| b.num_rows()).sum();
        assert_eq!(total_rows, 2);

        let field_names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(field_names, [
            "tick", "bus_id", "route_id", "lat", "lng",
            "speed_kmh", "heading", "eta_seconds", "is_off_route",
        ]);

        let eta = schema.field_with_name("eta_seconds").unwrap();
        assert!(eta.is_nullable());
        assert_eq!(*eta.data_type(), DataType::UInt32);
        assert_eq!(batches[0].column(7).null_count(), 1);
    }

    #[test]
    fn parquet_finish_required() {
        let dir = tmp();
        {
            let mut w = ParquetWriter::new(dir.path()).unwrap();
            w.write_snapshots(&[row(Some(1))]).unwrap();
        }

        let file = std::fs::File::open(dir.path().join("bus_snapshots.parquet")).unwrap();
        let result = ParquetRecordBatchReaderBuilder::try_new(file);
        assert!(result.is_err(), "file without Parquet footer should fail to open");
    }
}
