//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod campground_repository;
mod provider_repository;
mod recreation_area_repository;
mod search_repository;

#[cfg(test)]
pub use campground_repository::MockCampgroundRepository;
pub use campground_repository::{
    CampgroundRepository, CampgroundRepositoryError, FixtureCampgroundRepository,
};
#[cfg(test)]
pub use provider_repository::MockProviderRepository;
pub use provider_repository::{
    FixtureProviderRepository, ProviderRepository, ProviderRepositoryError,
};
#[cfg(test)]
pub use recreation_area_repository::MockRecreationAreaRepository;
pub use recreation_area_repository::{
    FixtureRecreationAreaRepository, RecreationAreaRepository, RecreationAreaRepositoryError,
};
#[cfg(test)]
pub use search_repository::MockSearchRepository;
pub use search_repository::{FixtureSearchRepository, SearchRepository, SearchRepositoryError};
