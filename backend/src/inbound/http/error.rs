//! JSON error responses for domain failures.
//!
//! Status follows [`ErrorCode`]. Error responses are never cacheable, echo
//! the trace id header, and hide internal messages and details from
//! clients while logging them server-side.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use tracing::{debug, error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};
use crate::inbound::http::cache_control::no_store_header;

pub use crate::domain::ApiResult;

/// Message returned in place of any internal error text.
pub const REDACTED_MESSAGE: &str = "Internal server error";

const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Client-facing copy of `error`.
fn public_payload(error: &Error) -> Error {
    if error.code() != ErrorCode::InternalError {
        return error.clone();
    }
    let redacted = Error::internal(REDACTED_MESSAGE);
    match error.trace_id() {
        Some(id) => redacted.with_trace_id(id),
        None => redacted,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let trace_id = self.trace_id().unwrap_or("-");
        match self.code() {
            ErrorCode::InternalError => {
                error!(
                    trace_id,
                    detail = self.message(),
                    details = ?self.details(),
                    "internal error"
                );
            }
            ErrorCode::ServiceUnavailable => {
                warn!(trace_id, detail = self.message(), "catalogue store unavailable");
            }
            ErrorCode::InvalidRequest | ErrorCode::NotFound => {
                debug!(trace_id, code = ?self.code(), detail = self.message(), "request rejected");
            }
        }

        let mut builder = HttpResponse::build(self.status_code());
        builder.insert_header(no_store_header());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(public_payload(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "framework error surfaced to a handler");
        Self::internal(REDACTED_MESSAGE)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
