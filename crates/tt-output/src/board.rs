//! Console fleet board: one log line per visible bus per snapshot.

use tracing::info;

use tt_core::{Language, SimConfig, Tick};
use tt_fleet::{Bus, RouteSelection};
use tt_network::RouteCatalog;
use tt_sim::SimObserver;

use crate::eta::{arrival_clock, format_eta};

/// A [`SimObserver`] that logs the visible part of the fleet at `info`.
///
/// Which buses are visible follows [`RouteSelection`]: all of them with no
/// selection, otherwise only the selected route's.  Route names and ETA text
/// use the board's [`Language`].
pub struct FleetBoard {
    language:           Language,
    selection:          RouteSelection,
    start_unix_secs:    i64,
    tick_duration_secs: u32,
}

impl FleetBoard {
    pub fn new(config: &SimConfig, language: Language) -> Self {
        Self {
            language,
            selection:          RouteSelection::new(),
            start_unix_secs:    config.start_unix_secs,
            tick_duration_secs: config.tick_duration_secs,
        }
    }

    pub fn with_selection(mut self, selection: RouteSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn selection_mut(&mut self) -> &mut RouteSelection {
        &mut self.selection
    }

    #[inline]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Board text for `fleet`, one line per visible bus, as of `now_unix_secs`.
    pub fn lines(&self, fleet: &[Bus], catalog: &RouteCatalog, now_unix_secs: i64) -> Vec<String> {
        self.selection
            .visible_buses(fleet)
            .into_iter()
            .map(|bus| self.line(bus, catalog, now_unix_secs))
            .collect()
    }

    /// `"<code> <name> | <speed> km/h | <heading>° | <eta> (<HH:MM>)"`.
    ///
    /// A bus whose route is not in the catalog shows its route id in place of
    /// the code, and a bus that has not moved yet shows `-` for the ETA.
    pub fn line(&self, bus: &Bus, catalog: &RouteCatalog, now_unix_secs: i64) -> String {
        let (code, name) = match catalog.route(bus.route_id.as_str()) {
            Some(r) => (r.code.as_str(), r.name.get(self.language)),
            None => (bus.route_id.as_str(), ""),
        };
        let eta = match bus.eta_seconds {
            Some(s) => format!("{} ({})", format_eta(s, self.language), arrival_clock(now_unix_secs, s)),
            None => "-".to_owned(),
        };
        format!(
            "{code} {name} | {:.0} km/h | {:.0}° | {eta}",
            bus.speed_kmh.round(),
            bus.heading,
        )
    }

    fn unix_time(&self, tick: Tick) -> i64 {
        self.start_unix_secs + tick.0 as i64 * self.tick_duration_secs as i64
    }
}

impl SimObserver for FleetBoard {
    fn on_fleet_loaded(&mut self, _tick: Tick, fleet: &[Bus], catalog: &RouteCatalog) {
        info!(buses = fleet.len(), routes = catalog.route_count(), lang = %self.language, "board ready");
    }

    fn on_snapshot(&mut self, tick: Tick, fleet: &[Bus], catalog: &RouteCatalog) {
        let now = self.unix_time(tick);
        for (bus, line) in self
            .selection
            .visible_buses(fleet)
            .into_iter()
            .map(|b| (b, self.line(b, catalog, now)))
        {
            info!(tick = %tick, bus = %bus.id, "{line}");
        }
    }
}
