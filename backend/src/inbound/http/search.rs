//! Type-ahead search endpoint.
//!
//! ```text
//! GET /api/search?query=yose&limit=10
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::public_catalogue_header;
use crate::inbound::http::catalogue_dto::SearchResultResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Query string accepted by [`search`].
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Free text matched against recreation area and campground names.
    pub query: String,
    /// Maximum rows, 1 to 100; defaults to 20.
    pub limit: Option<u32>,
}

/// Search recreation areas and campgrounds by name.
#[utoipa::path(
    get,
    path = "/api/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Ranked matches; empty for a blank query", body = [SearchResultResponse]),
        (status = 400, description = "Missing query or limit out of range", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["search"],
    operation_id = "search"
)]
#[get("/search")]
pub async fn search(
    state: web::Data<HttpState>,
    params: web::Query<SearchParams>,
) -> ApiResult<HttpResponse> {
    let SearchParams { query, limit } = params.into_inner();
    let rows = state.catalogue.search(&query, limit).await?;
    debug!(query = %query, hits = rows.len(), "search served");
    let body: Vec<SearchResultResponse> = rows.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok()
        .insert_header(public_catalogue_header())
        .json(body))
}
