//! Catalogue read service.
//!
//! Wraps the catalogue ports with the domain rules shared by every inbound
//! adapter: search input validation, not-found handling, hiding
//! non-reservable campgrounds from direct lookups and port error
//! translation.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::domain::ports::{
    CampgroundRepository, CampgroundRepositoryError, ProviderRepository, ProviderRepositoryError,
    RecreationAreaRepository, RecreationAreaRepositoryError, SearchRepository,
    SearchRepositoryError,
};
use crate::domain::{
    Campground, Error, Provider, ProviderId, RecreationArea, SearchRequest, SearchResult,
};

/// Read service over providers, recreation areas, campgrounds and search.
#[derive(Clone)]
pub struct CatalogueService {
    providers: Arc<dyn ProviderRepository>,
    recreation_areas: Arc<dyn RecreationAreaRepository>,
    campgrounds: Arc<dyn CampgroundRepository>,
    search: Arc<dyn SearchRepository>,
}

impl CatalogueService {
    /// Create a service over the given ports.
    pub fn new(
        providers: Arc<dyn ProviderRepository>,
        recreation_areas: Arc<dyn RecreationAreaRepository>,
        campgrounds: Arc<dyn CampgroundRepository>,
        search: Arc<dyn SearchRepository>,
    ) -> Self {
        Self {
            providers,
            recreation_areas,
            campgrounds,
            search,
        }
    }

    /// Run a type-ahead search.
    ///
    /// Blank queries short-circuit to an empty list.
    ///
    /// # Errors
    /// `invalid_request` for an out-of-range limit, otherwise the mapped
    /// port error.
    pub async fn search(
        &self,
        query: &str,
        limit: Option<u32>,
    ) -> Result<Vec<SearchResult>, Error> {
        let request = SearchRequest::new(query, limit)?;
        if request.is_blank() {
            debug!("blank search query; skipping index lookup");
            return Ok(Vec::new());
        }
        self.search
            .search(&request)
            .await
            .map_err(map_search_error)
    }

    /// List every provider.
    ///
    /// # Errors
    /// Returns the mapped port error.
    pub async fn providers(&self) -> Result<Vec<Provider>, Error> {
        self.providers.list().await.map_err(map_provider_error)
    }

    /// Fetch one provider.
    ///
    /// # Errors
    /// `not_found` when absent, otherwise the mapped port error.
    pub async fn provider(&self, id: ProviderId) -> Result<Provider, Error> {
        self.providers
            .find_by_id(id)
            .await
            .map_err(map_provider_error)?
            .ok_or_else(|| {
                Error::not_found(format!("provider {id} not found"))
                    .with_details(json!({ "provider_id": id.get() }))
            })
    }

    /// Fetch one recreation area.
    ///
    /// # Errors
    /// `not_found` when absent, otherwise the mapped port error.
    pub async fn recreation_area(
        &self,
        provider_id: ProviderId,
        id: &str,
    ) -> Result<RecreationArea, Error> {
        self.recreation_areas
            .find(provider_id, id)
            .await
            .map_err(map_recreation_area_error)?
            .ok_or_else(|| not_found("recreation area", provider_id, id))
    }

    /// List every campground filed under a recreation area.
    ///
    /// An unknown area simply has no campgrounds. Non-reservable sites are
    /// listed too; only the single-campground lookup hides them.
    ///
    /// # Errors
    /// Returns the mapped port error.
    pub async fn recreation_area_campgrounds(
        &self,
        provider_id: ProviderId,
        recreation_area_id: &str,
    ) -> Result<Vec<Campground>, Error> {
        self.campgrounds
            .list_for_recreation_area(provider_id, recreation_area_id)
            .await
            .map_err(map_campground_error)
    }

    /// Fetch one reservable campground.
    ///
    /// # Errors
    /// `not_found` when absent or not reservable, otherwise the mapped port
    /// error.
    pub async fn campground(&self, provider_id: ProviderId, id: &str) -> Result<Campground, Error> {
        self.campgrounds
            .find(provider_id, id)
            .await
            .map_err(map_campground_error)?
            .filter(Campground::reservable)
            .ok_or_else(|| not_found("campground", provider_id, id))
    }
}

fn not_found(kind: &str, provider_id: ProviderId, id: &str) -> Error {
    Error::not_found(format!("{kind} {provider_id}/{id} not found"))
        .with_details(json!({ "provider_id": provider_id.get(), "id": id }))
}

fn map_provider_error(error: ProviderRepositoryError) -> Error {
    match error {
        ProviderRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("provider repository unavailable: {message}"))
        }
        ProviderRepositoryError::Query { message } => {
            Error::internal(format!("provider repository error: {message}"))
        }
    }
}

fn map_recreation_area_error(error: RecreationAreaRepositoryError) -> Error {
    match error {
        RecreationAreaRepositoryError::Connection { message } => Error::service_unavailable(
            format!("recreation area repository unavailable: {message}"),
        ),
        RecreationAreaRepositoryError::Query { message } => {
            Error::internal(format!("recreation area repository error: {message}"))
        }
    }
}

fn map_campground_error(error: CampgroundRepositoryError) -> Error {
    match error {
        CampgroundRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("campground repository unavailable: {message}"))
        }
        CampgroundRepositoryError::Query { message } => {
            Error::internal(format!("campground repository error: {message}"))
        }
    }
}

fn map_search_error(error: SearchRepositoryError) -> Error {
    match error {
        SearchRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("search index unavailable: {message}"))
        }
        SearchRepositoryError::Query { message } => {
            Error::internal(format!("search index error: {message}"))
        }
    }
}

#[cfg(test)]
#[path = "catalogue_service_tests.rs"]
mod tests;
