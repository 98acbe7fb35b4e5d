//! Extractor configuration turning malformed requests into domain errors.
//!
//! Actix rejects unparsable path segments and query strings with plain-text
//! bodies by default; these handlers keep the JSON error contract instead.

use actix_web::error::{PathError, QueryPayloadError};
use actix_web::{HttpRequest, web};
use serde_json::json;

use crate::domain::Error;

/// Path extractor settings returning `invalid_request` on parse failures.
#[must_use]
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error)
}

/// Query extractor settings returning `invalid_request` on parse failures.
#[must_use]
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error)
}

fn path_error(err: PathError, req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("invalid path parameter: {err}"))
        .with_details(json!({ "code": "invalid_path", "path": req.path() }))
        .into()
}

fn query_error(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("invalid query parameter: {err}"))
        .with_details(json!({ "code": "invalid_query", "query": req.query_string() }))
        .into()
}
