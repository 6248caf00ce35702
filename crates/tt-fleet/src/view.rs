//! Route selection: narrowing what a consumer displays to one line.

use tt_core::RouteId;
use tt_network::{Route, RouteCatalog, Stop};

use crate::Bus;

/// Buses assigned to `route`, in fleet order.
pub fn buses_on_route<'a>(fleet: &'a [Bus], route: &'a RouteId) -> impl Iterator<Item = &'a Bus> + 'a {
    fleet.iter().filter(move |b| &b.route_id == route)
}

/// The currently selected route, if any.
///
/// With nothing selected every bus is shown and no stops are; with a route
/// selected only that route's buses and stops are shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteSelection {
    selected: Option<RouteId>,
}

impl RouteSelection {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn selected(&self) -> Option<&RouteId> {
        self.selected.as_ref()
    }

    pub fn select(&mut self, route: RouteId) {
        self.selected = Some(route);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Select `route`, or clear the selection if `route` is already selected.
    pub fn toggle(&mut self, route: RouteId) {
        if self.selected.as_ref() == Some(&route) {
            self.selected = None;
        } else {
            self.selected = Some(route);
        }
    }

    /// The selected route's catalog entry.
    pub fn route<'a>(&self, catalog: &'a RouteCatalog) -> Option<&'a Route> {
        self.selected.as_ref().and_then(|id| catalog.route(id.as_str()))
    }

    /// Buses to display: all of them, or those on the selected route.
    pub fn visible_buses<'a>(&self, fleet: &'a [Bus]) -> Vec<&'a Bus> {
        match &self.selected {
            None => fleet.iter().collect(),
            Some(id) => fleet.iter().filter(|b| &b.route_id == id).collect(),
        }
    }

    /// Stops to display: none, or those serving the selected route.
    pub fn visible_stops<'a>(&self, catalog: &'a RouteCatalog) -> Vec<&'a Stop> {
        match &self.selected {
            None => Vec::new(),
            Some(id) => catalog.stops().iter().filter(|s| s.serves(id)).collect(),
        }
    }
}
