//! Per-bus simulation state.

use tt_core::{BusId, Coordinate, RouteId};

/// One simulated bus.
///
/// Only `location`, `heading`, `eta_seconds`, and `is_off_route` change from
/// tick to tick; `id`, `route_id`, and `speed_kmh` are fixed at creation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bus {
    pub id: BusId,

    /// The route this bus follows.  A bus whose route is missing from the
    /// catalog is carried through every tick untouched.
    pub route_id: RouteId,

    pub location: Coordinate,

    /// Constant cruising speed, drawn once from `[20, 50)` km/h.
    pub speed_kmh: f64,

    /// Compass heading in `[0, 360)`.
    pub heading: f64,

    /// Seconds to reach the current target vertex.  `None` until the first
    /// tick.
    pub eta_seconds: Option<u32>,

    /// Reserved for geofencing; never set to `true`.
    pub is_off_route: bool,
}

impl Bus {
    /// A bus at rest: heading 0, no ETA yet, on route.
    pub fn new(id: BusId, route_id: RouteId, location: Coordinate, speed_kmh: f64) -> Self {
        Self {
            id,
            route_id,
            location,
            speed_kmh,
            heading: 0.0,
            eta_seconds: None,
            is_off_route: false,
        }
    }

    /// Speed in metres per second.
    #[inline]
    pub fn speed_mps(&self) -> f64 {
        self.speed_kmh * 1000.0 / 3600.0
    }
}
