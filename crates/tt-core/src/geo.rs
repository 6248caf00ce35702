//! Geographic coordinate type and the two geodesic primitives the movement
//! model is built on: haversine distance and compass heading.
//!
//! `Coordinate` uses `f64` latitude/longitude.  Snapshot output and the
//! symmetry guarantees on `distance_m` are compared at 1e-9 relative
//! tolerance, which `f32` cannot hold at city scale.

use std::f64::consts::PI;

/// Mean Earth radius in metres used by [`distance_m`].
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    #[inline]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Haversine great-circle distance in metres.  See [`distance_m`].
    #[inline]
    pub fn distance_m(self, other: Coordinate) -> f64 {
        distance_m(self, other)
    }

    /// Compass heading from `self` toward `other`.  See [`bearing_deg`].
    #[inline]
    pub fn bearing_deg(self, other: Coordinate) -> f64 {
        bearing_deg(self, other)
    }

    /// Move `fraction` of the way toward `target` in raw degree space.
    ///
    /// This is a planar blend of lat/lng, not a geodesic one.
    #[inline]
    pub fn lerp(self, target: Coordinate, fraction: f64) -> Coordinate {
        Coordinate {
            lat: self.lat + (target.lat - self.lat) * fraction,
            lng: self.lng + (target.lng - self.lng) * fraction,
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

/// Haversine great-circle distance in metres between `p1` and `p2`.
///
/// Symmetric and zero for identical points.  Inputs are not range-checked;
/// out-of-range latitudes simply flow through the trigonometry.
pub fn distance_m(p1: Coordinate, p2: Coordinate) -> f64 {
    let phi1 = p1.lat * PI / 180.0;
    let phi2 = p2.lat * PI / 180.0;
    let d_phi = (p2.lat - p1.lat) * PI / 180.0;
    let d_lambda = (p2.lng - p1.lng) * PI / 180.0;

    let a = (d_phi / 2.0).sin() * (d_phi / 2.0).sin()
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin() * (d_lambda / 2.0).sin();
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Heading in degrees `[0, 360)` from `from` toward `to`, 0° = north,
/// clockwise.
///
/// Uses the forward-azimuth structure
///
/// ```text
/// y = sin(Δlng) · cos(lat2)
/// x = cos(lat1) · sin(lat2) − sin(lat1) · cos(lat2) · cos(Δlng)
/// ```
///
/// with the trigonometric functions applied directly to the degree values.
/// Marker rotation downstream is calibrated against exactly this
/// approximation, so the inputs are deliberately not converted to radians.
/// Identical points yield `0.0`.
pub fn bearing_deg(from: Coordinate, to: Coordinate) -> f64 {
    if from == to {
        return 0.0;
    }
    let d_lng = to.lng - from.lng;
    let y = d_lng.sin() * to.lat.cos();
    let x = from.lat.cos() * to.lat.sin() - from.lat.sin() * to.lat.cos() * d_lng.cos();
    let theta = y.atan2(x);

    (theta * 180.0 / PI + 360.0) % 360.0
}
