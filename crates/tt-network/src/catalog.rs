//! Route/stop catalog and its builder.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lat, lng)` to the nearest stop.  Used to
//! answer "which stop is closest to me" for a user-supplied location.

use std::collections::HashSet;

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use tt_core::{Coordinate, LineType, LocalizedText, RouteId, StopId};

use crate::{NetworkError, NetworkResult};

#[cfg(feature = "fx-hash")]
type IdIndex = rustc_hash::FxHashMap<RouteId, usize>;
#[cfg(not(feature = "fx-hash"))]
type IdIndex = std::collections::HashMap<RouteId, usize>;

// ── Route / Stop ──────────────────────────────────────────────────────────────

/// One bus line: a display code, localized name, and the ordered polyline
/// the buses follow.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub id: RouteId,
    /// Short label shown on the route badge, e.g. `"11"`, `"G52"`, `"U"`.
    pub code: String,
    pub name: LocalizedText,
    /// CSS colour of the line, e.g. `"#ef4444"`.
    pub color: String,
    pub line_type: LineType,
    /// Ordered waypoints.  Non-empty in any built catalog.
    pub path: Vec<Coordinate>,
}

impl Route {
    /// A route with an empty name, no colour, and `LineType::Urban`.
    pub fn new(id: impl Into<RouteId>, code: impl Into<String>, path: Vec<Coordinate>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            name: LocalizedText::default(),
            color: String::new(),
            line_type: LineType::default(),
            path,
        }
    }

    pub fn with_name(mut self, name: LocalizedText) -> Self {
        self.name = name;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_line_type(mut self, line_type: LineType) -> Self {
        self.line_type = line_type;
        self
    }
}

/// A stop served by one or more routes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub id: StopId,
    pub name: LocalizedText,
    pub location: Coordinate,
    pub route_ids: Vec<RouteId>,
}

impl Stop {
    #[inline]
    pub fn serves(&self, route: &RouteId) -> bool {
        self.route_ids.contains(route)
    }
}

// ── R-tree stop entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[lat, lng]` point with
/// the index of the stop in `RouteCatalog::stops`.
#[derive(Clone)]
struct StopEntry {
    point: [f64; 2],
    index: usize,
}

impl RTreeObject for StopEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for StopEntry {
    /// Squared Euclidean distance in lat/lng space.  Good enough to rank
    /// stops within one city.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlng = self.point[1] - point[1];
        dlat * dlat + dlng * dlng
    }
}

// ── RouteCatalog ──────────────────────────────────────────────────────────────

/// The validated, read-only route and stop catalog.
///
/// Routes and stops keep the order in which they were added; that order is
/// the "catalog order" the fleet initializer and search results follow.
/// Construct with [`RouteCatalogBuilder`].
pub struct RouteCatalog {
    routes: Vec<Route>,
    stops: Vec<Stop>,
    route_index: IdIndex,
    stop_idx: RTree<StopEntry>,
}

impl RouteCatalog {
    /// A catalog with no routes and no stops.
    pub fn empty() -> Self {
        Self {
            routes: Vec::new(),
            stops: Vec::new(),
            route_index: IdIndex::default(),
            stop_idx: RTree::new(),
        }
    }

    #[inline]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    #[inline]
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Look up a route by id.
    #[inline]
    pub fn route(&self, id: &str) -> Option<&Route> {
        self.route_index.get(id).map(|&i| &self.routes[i])
    }

    /// Stops whose `route_ids` include `route`, in catalog order.
    pub fn stops_for_route<'a>(&'a self, route: &'a RouteId) -> impl Iterator<Item = &'a Stop> + 'a {
        self.stops.iter().filter(move |s| s.serves(route))
    }

    /// The stop nearest to `location`, or `None` if the catalog has no stops.
    pub fn nearest_stop(&self, location: Coordinate) -> Option<&Stop> {
        self.stop_idx
            .nearest_neighbor(&[location.lat, location.lng])
            .map(|e| &self.stops[e.index])
    }
}

// ── RouteCatalogBuilder ───────────────────────────────────────────────────────

/// Collects routes and stops, then validates them into a [`RouteCatalog`].
///
/// # Example
///
/// ```rust
/// use tt_core::Coordinate;
/// use tt_network::{Route, RouteCatalogBuilder};
///
/// let catalog = RouteCatalogBuilder::new()
///     .add_route(Route::new("r_1", "1", vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0)]))
///     .build()
///     .unwrap();
/// assert_eq!(catalog.route_count(), 1);
/// ```
#[derive(Default)]
pub struct RouteCatalogBuilder {
    routes: Vec<Route>,
    stops: Vec<Stop>,
}

impl RouteCatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    pub fn add_stop(mut self, stop: Stop) -> Self {
        self.stops.push(stop);
        self
    }

    pub fn routes(mut self, routes: impl IntoIterator<Item = Route>) -> Self {
        self.routes.extend(routes);
        self
    }

    pub fn stops(mut self, stops: impl IntoIterator<Item = Stop>) -> Self {
        self.stops.extend(stops);
        self
    }

    /// Validate and index.
    ///
    /// Fails on an empty route path, a repeated route or stop id, or a stop
    /// that names a route missing from the catalog.
    pub fn build(self) -> NetworkResult<RouteCatalog> {
        let mut route_index = IdIndex::default();
        for (i, route) in self.routes.iter().enumerate() {
            if route.path.is_empty() {
                return Err(NetworkError::EmptyPath(route.id.clone()));
            }
            if route_index.insert(route.id.clone(), i).is_some() {
                return Err(NetworkError::DuplicateRoute(route.id.clone()));
            }
        }

        let mut seen_stops = HashSet::with_capacity(self.stops.len());
        for stop in &self.stops {
            if !seen_stops.insert(&stop.id) {
                return Err(NetworkError::DuplicateStop(stop.id.clone()));
            }
            if let Some(missing) = stop.route_ids.iter().find(|r| !route_index.contains_key(r.as_str())) {
                return Err(NetworkError::UnknownRoute {
                    stop:  stop.id.clone(),
                    route: missing.clone(),
                });
            }
        }

        let entries = self
            .stops
            .iter()
            .enumerate()
            .map(|(index, s)| StopEntry { point: [s.location.lat, s.location.lng], index })
            .collect();

        Ok(RouteCatalog {
            routes: self.routes,
            stops: self.stops,
            route_index,
            stop_idx: RTree::bulk_load(entries),
        })
    }
}
