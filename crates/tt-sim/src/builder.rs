//! Fluent builder for constructing a [`Sim`].

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use tt_core::SimConfig;
use tt_fleet::{Bus, generate_initial_fleet};
use tt_network::{RouteCatalog, load_catalog_dir};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, seed, tick duration, …
/// - `Arc<RouteCatalog>` — the routes buses follow
///
/// # Optional inputs (have defaults)
///
/// | Method       | Default                                          |
/// |--------------|--------------------------------------------------|
/// | `.fleet(v)`  | `generate_initial_fleet(catalog, config.seed)`   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, Arc::new(catalog))
///     .fleet(buses)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:  SimConfig,
    catalog: Arc<RouteCatalog>,
    fleet:   Option<Vec<Bus>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, catalog: Arc<RouteCatalog>) -> Self {
        Self { config, catalog, fleet: None }
    }

    /// Load the catalog from `routes.csv`, `route_points.csv`, and
    /// `stops.csv` in `dir`.
    pub fn from_catalog_dir(config: SimConfig, dir: &Path) -> SimResult<Self> {
        let catalog = load_catalog_dir(dir)?;
        Ok(Self::new(config, Arc::new(catalog)))
    }

    /// Start from this fleet instead of seeding two buses per route.
    ///
    /// Buses may reference routes missing from the catalog; they are carried
    /// through every tick unchanged.
    pub fn fleet(mut self, fleet: Vec<Bus>) -> Self {
        self.fleet = Some(fleet);
        self
    }

    /// Validate inputs, seed the fleet if none was supplied, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let fleet = match self.fleet {
            Some(f) => {
                let mut seen = HashSet::with_capacity(f.len());
                if let Some(dup) = f.iter().find(|b| !seen.insert(&b.id)) {
                    return Err(SimError::DuplicateBus(dup.id.clone()));
                }
                f
            }
            None => generate_initial_fleet(self.catalog.routes(), self.config.seed),
        };

        #[cfg(feature = "parallel")]
        let pool = match self.config.num_threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| SimError::Config(e.to_string()))?,
            ),
            None => None,
        };

        info!(
            routes = self.catalog.route_count(),
            stops  = self.catalog.stop_count(),
            buses  = fleet.len(),
            "fleet ready"
        );

        Ok(Sim {
            clock:          self.config.make_clock(),
            config:         self.config,
            catalog:        self.catalog,
            fleet,
            fleet_reported: false,
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
