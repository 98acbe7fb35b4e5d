//! HTTP inbound adapter exposing REST endpoints.

pub mod cache_control;
pub mod catalogue;
pub mod catalogue_dto;
pub mod error;
pub mod health;
pub mod schemas;
pub mod search;
pub mod state;
pub mod validation;

pub use error::ApiResult;

use actix_web::{Scope, web};

/// Catalogue, search and status routes mounted under `/api`.
///
/// Path and query extractor failures inside the scope are reported as
/// `invalid_request` errors. Handlers expect `web::Data<HttpState>` to be
/// registered on the application.
pub fn api_scope() -> Scope {
    web::scope("/api")
        .app_data(validation::path_config())
        .app_data(validation::query_config())
        .service(catalogue::list_providers)
        .service(catalogue::get_provider)
        .service(catalogue::get_recreation_area)
        .service(catalogue::list_recreation_area_campgrounds)
        .service(catalogue::get_campground)
        .service(search::search)
        .service(health::api_health)
        .service(health::ping)
}
