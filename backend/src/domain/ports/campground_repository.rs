//! Read-side port for campgrounds.

use async_trait::async_trait;

use crate::domain::{Campground, ProviderId};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading campgrounds.
    pub enum CampgroundRepositoryError {
        /// Repository connection could not be established.
        Connection => "campground read connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query => "campground read query failed: {message}",
    }
}

/// Port for reading campgrounds.
///
/// Adapters return rows regardless of `reservable`; filtering is a domain
/// rule applied by [`crate::domain::CatalogueService`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampgroundRepository: Send + Sync {
    /// Look up a campground by its provider-scoped identity.
    async fn find(
        &self,
        provider_id: ProviderId,
        id: &str,
    ) -> Result<Option<Campground>, CampgroundRepositoryError>;

    /// Campgrounds attached to a recreation area, ordered by name then id.
    async fn list_for_recreation_area(
        &self,
        provider_id: ProviderId,
        recreation_area_id: &str,
    ) -> Result<Vec<Campground>, CampgroundRepositoryError>;
}

/// Fixture implementation for tests that do not exercise campgrounds.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCampgroundRepository;

#[async_trait]
impl CampgroundRepository for FixtureCampgroundRepository {
    async fn find(
        &self,
        _provider_id: ProviderId,
        _id: &str,
    ) -> Result<Option<Campground>, CampgroundRepositoryError> {
        Ok(None)
    }

    async fn list_for_recreation_area(
        &self,
        _provider_id: ProviderId,
        _recreation_area_id: &str,
    ) -> Result<Vec<Campground>, CampgroundRepositoryError> {
        Ok(Vec::new())
    }
}
