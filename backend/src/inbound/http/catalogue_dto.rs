//! Response payloads for catalogue endpoints.
//!
//! Field names are snake_case and absent values serialise as `null` so the
//! web client can mirror these shapes one-to-one.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Campground, EntityType, Provider, RecreationArea, SearchResult};

/// Booking provider.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProviderResponse {
    /// Numeric provider id.
    #[schema(example = 1)]
    pub id: i32,
    /// Display name.
    #[schema(example = "RecreationDotGov")]
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Provider home page.
    #[schema(example = "https://www.recreation.gov")]
    pub url: String,
    /// Whether the provider is active.
    pub enabled: bool,
}

impl From<Provider> for ProviderResponse {
    fn from(provider: Provider) -> Self {
        Self {
            id: provider.id().get(),
            name: provider.name().to_owned(),
            description: provider.description().map(str::to_owned),
            url: provider.url().to_owned(),
            enabled: provider.enabled(),
        }
    }
}

/// Recreation area, such as a national park or forest.
#[derive(Debug, Serialize, ToSchema)]
pub struct RecreationAreaResponse {
    /// Provider-scoped identifier.
    #[schema(example = "2991")]
    pub id: String,
    /// Owning provider.
    #[schema(example = 1)]
    pub provider_id: i32,
    /// Display name.
    #[schema(example = "Yosemite National Park")]
    pub name: String,
    /// Upstream description; may contain HTML.
    pub description: Option<String>,
    /// Country code.
    pub country: Option<String>,
    /// State or province code.
    pub state: Option<String>,
    /// Longitude in degrees.
    pub longitude: Option<f64>,
    /// Latitude in degrees.
    pub latitude: Option<f64>,
    /// Whether the site takes bookings.
    pub reservable: bool,
    /// Whether the record is active.
    pub enabled: bool,
    /// Public page on the provider's site.
    pub url: Option<String>,
}

impl From<RecreationArea> for RecreationAreaResponse {
    fn from(area: RecreationArea) -> Self {
        let url = area.url();
        let location = area.location();
        Self {
            id: area.id().to_owned(),
            provider_id: area.provider_id().get(),
            name: area.name().to_owned(),
            description: area.description().map(str::to_owned),
            country: location.country().map(str::to_owned),
            state: location.state().map(str::to_owned),
            longitude: location.longitude(),
            latitude: location.latitude(),
            reservable: area.reservable(),
            enabled: area.enabled(),
            url,
        }
    }
}

/// Bookable campground.
#[derive(Debug, Serialize, ToSchema)]
pub struct CampgroundResponse {
    /// Provider-scoped identifier.
    #[schema(example = "232447")]
    pub id: String,
    /// Owning provider.
    #[schema(example = 1)]
    pub provider_id: i32,
    /// Parent recreation area, if any.
    #[schema(example = "2991")]
    pub recreation_area_id: Option<String>,
    /// Display name.
    #[schema(example = "Upper Pines")]
    pub name: String,
    /// Upstream description; may contain HTML.
    pub description: Option<String>,
    /// Country code.
    pub country: Option<String>,
    /// State or province code.
    pub state: Option<String>,
    /// Longitude in degrees.
    pub longitude: Option<f64>,
    /// Latitude in degrees.
    pub latitude: Option<f64>,
    /// Whether the site takes bookings.
    pub reservable: bool,
    /// Whether the record is active.
    pub enabled: bool,
    /// Booking page on the provider's site.
    pub url: Option<String>,
}

impl From<Campground> for CampgroundResponse {
    fn from(campground: Campground) -> Self {
        let url = campground.url();
        let location = campground.location();
        Self {
            id: campground.id().to_owned(),
            provider_id: campground.provider_id().get(),
            recreation_area_id: campground.recreation_area_id().map(str::to_owned),
            name: campground.name().to_owned(),
            description: campground.description().map(str::to_owned),
            country: location.country().map(str::to_owned),
            state: location.state().map(str::to_owned),
            longitude: location.longitude(),
            latitude: location.latitude(),
            reservable: campground.reservable(),
            enabled: campground.enabled(),
            url,
        }
    }
}

/// Discriminant of a search row.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub enum EntityTypeSchema {
    /// Row indexes a recreation area.
    RecreationArea,
    /// Row indexes a campground.
    Campground,
}

impl From<EntityType> for EntityTypeSchema {
    fn from(value: EntityType) -> Self {
        match value {
            EntityType::RecreationArea => Self::RecreationArea,
            EntityType::Campground => Self::Campground,
        }
    }
}

/// One type-ahead search hit.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResultResponse {
    /// Row key, unique across providers.
    #[schema(example = "1:campground:232447")]
    pub id: String,
    /// Kind of entity the row indexes.
    pub entity_type: EntityTypeSchema,
    /// Owning provider.
    #[schema(example = 1)]
    pub provider_id: i32,
    /// Provider display name.
    #[schema(example = "RecreationDotGov")]
    pub provider_name: String,
    /// Area id; set for area rows and attached campgrounds.
    pub recreation_area_id: Option<String>,
    /// Area display name.
    pub recreation_area_name: Option<String>,
    /// Campground id; set for campground rows only.
    pub campground_id: Option<String>,
    /// Campground display name.
    pub campground_name: Option<String>,
}

impl From<SearchResult> for SearchResultResponse {
    fn from(row: SearchResult) -> Self {
        Self {
            id: row.id,
            entity_type: row.entity_type.into(),
            provider_id: row.provider_id.get(),
            provider_name: row.provider_name,
            recreation_area_id: row.recreation_area_id,
            recreation_area_name: row.recreation_area_name,
            campground_id: row.campground_id,
            campground_name: row.campground_name,
        }
    }
}
