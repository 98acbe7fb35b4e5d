//! Catalogue read endpoints.
//!
//! ```text
//! GET /api/provider
//! GET /api/provider/{provider_id}
//! GET /api/rec-area/{provider_id}/{rec_area_id}
//! GET /api/rec-area/{provider_id}/{rec_area_id}/campgrounds
//! GET /api/campground/{provider_id}/{campground_id}
//! ```

use actix_web::{HttpResponse, get, web};

use crate::domain::ProviderId;
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::public_catalogue_header;
use crate::inbound::http::catalogue_dto::{
    CampgroundResponse, ProviderResponse, RecreationAreaResponse,
};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// List booking providers.
#[utoipa::path(
    get,
    path = "/api/provider",
    responses(
        (
            status = 200,
            description = "All providers",
            headers(("Cache-Control" = String, description = "Cache control header")),
            body = [ProviderResponse]
        ),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["catalogue"],
    operation_id = "listProviders"
)]
#[get("/provider")]
pub async fn list_providers(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let providers = state.catalogue.providers().await?;
    let body: Vec<ProviderResponse> = providers.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok()
        .insert_header(public_catalogue_header())
        .json(body))
}

/// Fetch one booking provider.
#[utoipa::path(
    get,
    path = "/api/provider/{provider_id}",
    params(("provider_id" = i32, Path, description = "Provider identifier")),
    responses(
        (status = 200, description = "Provider", body = ProviderResponse),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Unknown provider", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["catalogue"],
    operation_id = "getProvider"
)]
#[get("/provider/{provider_id}")]
pub async fn get_provider(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let provider_id = ProviderId::new(path.into_inner());
    let provider = state.catalogue.provider(provider_id).await?;
    Ok(HttpResponse::Ok()
        .insert_header(public_catalogue_header())
        .json(ProviderResponse::from(provider)))
}

/// Fetch one recreation area.
#[utoipa::path(
    get,
    path = "/api/rec-area/{provider_id}/{rec_area_id}",
    params(
        ("provider_id" = i32, Path, description = "Provider identifier"),
        ("rec_area_id" = String, Path, description = "Recreation area identifier")
    ),
    responses(
        (status = 200, description = "Recreation area", body = RecreationAreaResponse),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Unknown recreation area", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["catalogue"],
    operation_id = "getRecreationArea"
)]
#[get("/rec-area/{provider_id}/{rec_area_id}")]
pub async fn get_recreation_area(
    state: web::Data<HttpState>,
    path: web::Path<(i32, String)>,
) -> ApiResult<HttpResponse> {
    let (provider_id, rec_area_id) = path.into_inner();
    let area = state
        .catalogue
        .recreation_area(ProviderId::new(provider_id), &rec_area_id)
        .await?;
    Ok(HttpResponse::Ok()
        .insert_header(public_catalogue_header())
        .json(RecreationAreaResponse::from(area)))
}

/// List the campgrounds filed under a recreation area.
///
/// Unknown areas answer with an empty array.
#[utoipa::path(
    get,
    path = "/api/rec-area/{provider_id}/{rec_area_id}/campgrounds",
    params(
        ("provider_id" = i32, Path, description = "Provider identifier"),
        ("rec_area_id" = String, Path, description = "Recreation area identifier")
    ),
    responses(
        (status = 200, description = "Campgrounds", body = [CampgroundResponse]),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["catalogue"],
    operation_id = "listRecreationAreaCampgrounds"
)]
#[get("/rec-area/{provider_id}/{rec_area_id}/campgrounds")]
pub async fn list_recreation_area_campgrounds(
    state: web::Data<HttpState>,
    path: web::Path<(i32, String)>,
) -> ApiResult<HttpResponse> {
    let (provider_id, rec_area_id) = path.into_inner();
    let campgrounds = state
        .catalogue
        .recreation_area_campgrounds(ProviderId::new(provider_id), &rec_area_id)
        .await?;
    let body: Vec<CampgroundResponse> = campgrounds.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok()
        .insert_header(public_catalogue_header())
        .json(body))
}

/// Fetch one reservable campground.
#[utoipa::path(
    get,
    path = "/api/campground/{provider_id}/{campground_id}",
    params(
        ("provider_id" = i32, Path, description = "Provider identifier"),
        ("campground_id" = String, Path, description = "Campground identifier")
    ),
    responses(
        (status = 200, description = "Campground", body = CampgroundResponse),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Unknown or non-reservable campground", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["catalogue"],
    operation_id = "getCampground"
)]
#[get("/campground/{provider_id}/{campground_id}")]
pub async fn get_campground(
    state: web::Data<HttpState>,
    path: web::Path<(i32, String)>,
) -> ApiResult<HttpResponse> {
    let (provider_id, campground_id) = path.into_inner();
    let campground = state
        .catalogue
        .campground(ProviderId::new(provider_id), &campground_id)
        .await?;
    Ok(HttpResponse::Ok()
        .insert_header(public_catalogue_header())
        .json(CampgroundResponse::from(campground)))
}

#[cfg(test)]
#[path = "catalogue_tests.rs"]
mod tests;
