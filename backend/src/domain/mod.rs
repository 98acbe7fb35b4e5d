//! Domain primitives and aggregates.
//!
//! Purpose: Define strongly typed domain entities used by the API and
//! persistence layers. Keep types immutable and document invariants in each
//! type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - Catalogue entities: Provider, RecreationArea, Campground.
//! - SearchRequest / SearchResult — type-ahead search input and rows.
//! - CatalogueService — read service shared by inbound adapters.

pub mod catalogue;
mod catalogue_seed;
mod catalogue_service;
pub mod error;
mod health;
pub mod ports;
mod search;
mod trace_id;

pub use self::catalogue::{
    BookingPlatform, Campground, CampgroundDraft, CatalogueValidationError, Location, Provider,
    ProviderDraft, ProviderId, RecreationArea, RecreationAreaDraft,
};
pub use self::catalogue_seed::{CatalogueSeed, CatalogueSeedError};
pub use self::catalogue_service::CatalogueService;
pub use self::error::{Error, ErrorCode};
pub use self::health::{HealthStatus, HealthStatusError};
pub use self::search::{
    DEFAULT_SEARCH_LIMIT, EntityType, MAX_SEARCH_LIMIT, SearchRequest, SearchResult,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use camply_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("no such campground"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
