//! Plain data row types written by output backends.

use tt_core::Tick;
use tt_fleet::Bus;

/// One bus's state at a given tick.
#[derive(Debug, Clone, PartialEq)]
pub struct BusSnapshotRow {
    pub tick:         u64,
    pub bus_id:       String,
    pub route_id:     String,
    pub lat:          f64,
    pub lng:          f64,
    pub speed_kmh:    f64,
    pub heading:      f64,
    /// `None` for a bus that has not yet moved.
    pub eta_seconds:  Option<u32>,
    pub is_off_route: bool,
}

impl BusSnapshotRow {
    pub fn from_bus(tick: Tick, bus: &Bus) -> Self {
        Self {
            tick:         tick.0,
            bus_id:       bus.id.to_string(),
            route_id:     bus.route_id.to_string(),
            lat:          bus.location.lat,
            lng:          bus.location.lng,
            speed_kmh:    bus.speed_kmh,
            heading:      bus.heading,
            eta_seconds:  bus.eta_seconds,
            is_off_route: bus.is_off_route,
        }
    }
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:             u64,
    pub unix_time_secs:   i64,
    pub advanced_buses:   u64,
    /// Buses carried over unchanged because their route is not in the catalog.
    pub unresolved_buses: u64,
}
