//! CSV catalog loader.
//!
//! # CSV format
//!
//! Three files, one row per route, per waypoint, and per stop:
//!
//! ```csv
//! # routes.csv
//! route_id,code,name_ar,name_fr,name_en,color,line_type
//! r_11,11,المدينة الجديدة - حي الصباح,Medina Jedida - Hai Sabah,Medina Jedida - Hai Sabah,#ef4444,URBAN
//!
//! # route_points.csv
//! route_id,seq,lat,lng
//! r_11,0,35.7020,-0.6480
//! r_11,1,35.7080,-0.6250
//!
//! # stops.csv
//! stop_id,name_ar,name_fr,name_en,lat,lng,route_ids
//! s_usto,جامعة إيسطو,Université USTO,USTO University,35.6850,-0.6000,r_11;r_G52
//! ```
//!
//! Waypoints are ordered by `seq` within each route; rows may appear in any
//! order.  `route_ids` is a `;`-separated list.  A `route_id` repeated in
//! `routes.csv` is rejected as a duplicate route.  Routes keep the order of
//! `routes.csv`, which becomes the catalog order.

use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use tt_core::{Coordinate, LineType, LocalizedText, RouteId, StopId};

use crate::catalog::{Route, RouteCatalog, RouteCatalogBuilder, Stop};
use crate::{NetworkError, NetworkResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RouteRecord {
    route_id:  String,
    code:      String,
    name_ar:   String,
    name_fr:   String,
    name_en:   String,
    color:     String,
    line_type: String,
}

#[derive(Deserialize)]
struct PointRecord {
    route_id: String,
    seq:      u32,
    lat:      f64,
    lng:      f64,
}

#[derive(Deserialize)]
struct StopRecord {
    stop_id:   String,
    name_ar:   String,
    name_fr:   String,
    name_en:   String,
    lat:       f64,
    lng:       f64,
    route_ids: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a catalog from `routes.csv`, `route_points.csv`, and `stops.csv` in
/// `dir`.
pub fn load_catalog_dir(dir: &Path) -> NetworkResult<RouteCatalog> {
    let routes = std::fs::File::open(dir.join("routes.csv"))?;
    let points = std::fs::File::open(dir.join("route_points.csv"))?;
    let stops = std::fs::File::open(dir.join("stops.csv"))?;
    load_catalog_readers(routes, points, stops)
}

/// Like [`load_catalog_dir`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`) or for catalogs embedded in
/// the binary.
pub fn load_catalog_readers<R1: Read, R2: Read, R3: Read>(
    routes: R1,
    points: R2,
    stops:  R3,
) -> NetworkResult<RouteCatalog> {
    // ── Waypoints, grouped by route ───────────────────────────────────────
    let mut by_route: HashMap<String, Vec<PointRecord>> = HashMap::new();
    for result in csv::Reader::from_reader(points).deserialize::<PointRecord>() {
        let row = result?;
        by_route.entry(row.route_id.clone()).or_default().push(row);
    }

    // ── Routes, in file order ─────────────────────────────────────────────
    let mut builder = RouteCatalogBuilder::new();
    let mut seen: HashSet<String> = HashSet::new();
    for result in csv::Reader::from_reader(routes).deserialize::<RouteRecord>() {
        let row = result?;
        if !seen.insert(row.route_id.clone()) {
            return Err(NetworkError::DuplicateRoute(RouteId::new(row.route_id)));
        }
        let mut pts = by_route.remove(&row.route_id).unwrap_or_default();
        pts.sort_by_key(|p| p.seq);

        let route = Route {
            id:        RouteId::new(row.route_id),
            code:      row.code,
            name:      LocalizedText::new(row.name_ar, row.name_fr, row.name_en),
            color:     row.color,
            line_type: row.line_type.parse::<LineType>()?,
            path:      pts.into_iter().map(|p| Coordinate::new(p.lat, p.lng)).collect(),
        };
        builder = builder.add_route(route);
    }

    if let Some(orphan) = by_route.keys().next() {
        return Err(NetworkError::Parse(format!(
            "route_points.csv references route {orphan:?} missing from routes.csv"
        )));
    }

    // ── Stops ─────────────────────────────────────────────────────────────
    let mut stop_count = 0usize;
    for result in csv::Reader::from_reader(stops).deserialize::<StopRecord>() {
        let row = result?;
        builder = builder.add_stop(Stop {
            id:        StopId::new(row.stop_id),
            name:      LocalizedText::new(row.name_ar, row.name_fr, row.name_en),
            location:  Coordinate::new(row.lat, row.lng),
            route_ids: parse_route_ids(&row.route_ids),
        });
        stop_count += 1;
    }

    debug!(routes = seen.len(), stops = stop_count, "parsed catalog CSV");
    builder.build()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_route_ids(s: &str) -> Vec<RouteId> {
    s.split(';')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(RouteId::from)
        .collect()
}
