//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every catalogue, search and health endpoint together
//! with the response schemas. Domain types stay free of utoipa derives; the
//! error payload is described by [`ErrorSchema`] and [`ErrorCodeSchema`].
//!
//! The document is served by Swagger UI in debug builds and exported with
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::catalogue_dto::{
    CampgroundResponse, EntityTypeSchema, ProviderResponse, RecreationAreaResponse,
    SearchResultResponse,
};
use crate::inbound::http::health::HealthResponse;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Camply API",
        description = "Read-only catalogue of campsite providers, recreation areas and campgrounds, with type-ahead search.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::catalogue::list_providers,
        crate::inbound::http::catalogue::get_provider,
        crate::inbound::http::catalogue::get_recreation_area,
        crate::inbound::http::catalogue::list_recreation_area_campgrounds,
        crate::inbound::http::catalogue::get_campground,
        crate::inbound::http::search::search,
        crate::inbound::http::health::api_health,
        crate::inbound::http::health::ping,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ProviderResponse,
        RecreationAreaResponse,
        CampgroundResponse,
        EntityTypeSchema,
        SearchResultResponse,
        HealthResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "catalogue", description = "Providers, recreation areas and campgrounds"),
        (name = "search", description = "Type-ahead search"),
        (name = "health", description = "Status and health-check endpoints")
    )
)]
pub struct ApiDoc;
