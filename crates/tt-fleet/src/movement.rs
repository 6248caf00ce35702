//! One movement step for every bus in the fleet.

use tt_core::{Coordinate, bearing_deg, distance_m};
use tt_network::{Route, RouteCatalog};

use crate::Bus;

/// Fraction of the remaining lat/lng delta covered per tick.
pub const STEP_FRACTION: f64 = 0.1;

/// ETA reported for a bus that is not moving.
const STALLED_ETA_SECS: u32 = 60;

/// Counts for one call to [`advance_tick_with_report`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Buses whose route was found and which were moved.
    pub advanced: usize,
    /// Buses whose `route_id` is not in the catalog, carried over untouched.
    pub unresolved: usize,
}

/// Advance the whole fleet by one tick.
///
/// Returns a new fleet of the same length and order.  Buses are processed
/// independently; a bus whose route is missing from `catalog` is cloned
/// unchanged.
pub fn advance_tick(fleet: &[Bus], catalog: &RouteCatalog) -> Vec<Bus> {
    let step = |bus: &Bus| match catalog.route(bus.route_id.as_str()) {
        Some(route) => advance_bus(bus, route),
        None => bus.clone(),
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        fleet.par_iter().map(step).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        fleet.iter().map(step).collect()
    }
}

/// [`advance_tick`] plus counts of advanced and unresolved buses.
pub fn advance_tick_with_report(fleet: &[Bus], catalog: &RouteCatalog) -> (Vec<Bus>, TickReport) {
    let unresolved = fleet
        .iter()
        .filter(|b| catalog.route(b.route_id.as_str()).is_none())
        .count();
    let report = TickReport {
        advanced: fleet.len() - unresolved,
        unresolved,
    };
    (advance_tick(fleet, catalog), report)
}

/// Move one bus one tick along `route`.
///
/// `route.path` is treated as a closed loop.  An empty path leaves the bus
/// unchanged.
pub fn advance_bus(bus: &Bus, route: &Route) -> Bus {
    let path = &route.path;
    let Some(closest) = nearest_vertex(path, bus.location) else {
        return bus.clone();
    };
    let target = path[(closest + 1) % path.len()];

    let location = bus.location.lerp(target, STEP_FRACTION);
    // Heading is taken from where the bus *was*, not where it lands.
    let heading = bearing_deg(bus.location, target);
    let eta = eta_seconds(distance_m(location, target), bus.speed_mps());

    Bus {
        location,
        heading,
        eta_seconds: Some(eta),
        is_off_route: false,
        ..bus.clone()
    }
}

/// Index of the path vertex closest to `location`.
///
/// Strict `<` keeps the first of several equidistant vertices.  `None` only
/// for an empty path.
fn nearest_vertex(path: &[Coordinate], location: Coordinate) -> Option<usize> {
    if path.is_empty() {
        return None;
    }
    let mut closest = 0;
    let mut min = f64::INFINITY;
    for (i, &p) in path.iter().enumerate() {
        let d = distance_m(location, p);
        if d < min {
            min = d;
            closest = i;
        }
    }
    Some(closest)
}

fn eta_seconds(dist_m: f64, speed_mps: f64) -> u32 {
    if speed_mps > 0.0 {
        (dist_m / speed_mps).round() as u32
    } else {
        STALLED_ETA_SECS
    }
}
