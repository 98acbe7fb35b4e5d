//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::CatalogueService;
use crate::domain::ports::{
    CampgroundRepository, FixtureCampgroundRepository, FixtureProviderRepository,
    FixtureRecreationAreaRepository, FixtureSearchRepository, ProviderRepository,
    RecreationAreaRepository, SearchRepository,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    /// Provider lookups.
    pub providers: Arc<dyn ProviderRepository>,
    /// Recreation area lookups.
    pub recreation_areas: Arc<dyn RecreationAreaRepository>,
    /// Campground lookups.
    pub campgrounds: Arc<dyn CampgroundRepository>,
    /// Type-ahead search.
    pub search: Arc<dyn SearchRepository>,
}

impl HttpStatePorts {
    /// Use one adapter for every catalogue port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use camply_backend::inbound::http::state::{HttpState, HttpStatePorts};
    /// use camply_backend::outbound::memory::InMemoryCatalogue;
    ///
    /// let catalogue = Arc::new(InMemoryCatalogue::default());
    /// let state = HttpState::new(HttpStatePorts::from_adapter(catalogue));
    /// # let _ = state;
    /// ```
    pub fn from_adapter<A>(adapter: Arc<A>) -> Self
    where
        A: ProviderRepository
            + RecreationAreaRepository
            + CampgroundRepository
            + SearchRepository
            + 'static,
    {
        Self {
            providers: adapter.clone(),
            recreation_areas: adapter.clone(),
            campgrounds: adapter.clone(),
            search: adapter,
        }
    }
}

impl Default for HttpStatePorts {
    fn default() -> Self {
        Self {
            providers: Arc::new(FixtureProviderRepository),
            recreation_areas: Arc::new(FixtureRecreationAreaRepository),
            campgrounds: Arc::new(FixtureCampgroundRepository),
            search: Arc::new(FixtureSearchRepository),
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Use cases behind every catalogue route.
    pub catalogue: CatalogueService,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            providers,
            recreation_areas,
            campgrounds,
            search,
        } = ports;
        Self {
            catalogue: CatalogueService::new(providers, recreation_areas, campgrounds, search),
        }
    }
}
