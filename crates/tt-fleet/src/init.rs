//! Initial fleet seeding.

use tracing::warn;

use tt_core::{BusId, BusRng};
use tt_network::Route;

use crate::Bus;

/// Lower bound (inclusive) of the random cruising speed.
pub const MIN_SPEED_KMH: f64 = 20.0;

/// Upper bound (exclusive) of the random cruising speed.
pub const MAX_SPEED_KMH: f64 = 50.0;

/// Buses seeded per route.
const BUSES_PER_ROUTE: u64 = 2;

/// Seed two buses per route, in route order.
///
/// For each route the output gets `bus_<code>_1` at the first waypoint and
/// `bus_<code>_2` at waypoint `len / 2` (the same point as bus 1 on a
/// single-vertex path).  Each bus draws its speed from its own [`BusRng`]
/// keyed by `seed` and the bus's slot (`2 * route_index + n - 1`), so the
/// same seed always reproduces the same speeds.
///
/// Routes with an empty path cannot come out of a built `RouteCatalog`; if
/// one is passed in anyway it is skipped.
pub fn generate_initial_fleet(routes: &[Route], seed: u64) -> Vec<Bus> {
    let mut buses = Vec::with_capacity(routes.len() * BUSES_PER_ROUTE as usize);

    for (route_index, route) in routes.iter().enumerate() {
        let (Some(&start), Some(&mid)) = (route.path.first(), route.path.get(route.path.len() / 2)) else {
            warn!(route = %route.id, "route has no waypoints; no buses seeded");
            continue;
        };

        let slot = route_index as u64 * BUSES_PER_ROUTE;
        buses.push(Bus::new(
            BusId::for_route(&route.code, 1),
            route.id.clone(),
            start,
            draw_speed(seed, slot),
        ));
        buses.push(Bus::new(
            BusId::for_route(&route.code, 2),
            route.id.clone(),
            mid,
            draw_speed(seed, slot + 1),
        ));
    }

    buses
}

fn draw_speed(seed: u64, slot: u64) -> f64 {
    BusRng::new(seed, slot).gen_range(MIN_SPEED_KMH..MAX_SPEED_KMH)
}
