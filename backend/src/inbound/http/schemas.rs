//! utoipa descriptions of the error envelope.
//!
//! [`crate::domain::Error`] carries no utoipa derives, so the document
//! registers these mirrors under the public names `ApiError` and
//! `ApiErrorCode`. Handlers reference [`ErrorSchema`] in their
//! `responses(...)` blocks.

use utoipa::ToSchema;

/// Failure category reported in the `code` field.
#[derive(ToSchema)]
#[schema(as = ApiErrorCode, rename_all = "snake_case")]
pub enum ErrorCodeSchema {
    /// Path or query parameters were rejected, for example `limit=0`.
    InvalidRequest,
    /// No provider, recreation area or campground matched the path.
    NotFound,
    /// The catalogue store could not be reached.
    ServiceUnavailable,
    /// Anything else. The message is always redacted.
    InternalError,
}

/// JSON body returned with every 4xx and 5xx response.
#[derive(ToSchema)]
#[schema(as = ApiError)]
#[expect(dead_code, reason = "only read by the OpenAPI derive")]
pub struct ErrorSchema {
    code: ErrorCodeSchema,
    #[schema(example = "campground 1/232447 not found")]
    message: String,
    /// Same value as the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Field-level context for `invalid_request` errors.
    #[schema(value_type = Option<Object>, example = json!({"field": "limit"}))]
    details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use utoipa::PartialSchema;

    use super::*;
    use crate::domain::ErrorCode;

    #[rstest]
    fn envelope_is_published_as_api_error() {
        assert_eq!(ErrorSchema::name(), "ApiError");
        let json = serde_json::to_string(&ErrorSchema::schema()).expect("schema json");
        for field in ["code", "message", "trace_id", "details"] {
            assert!(json.contains(field), "missing {field}");
        }
    }

    #[rstest]
    #[case(ErrorCode::InvalidRequest)]
    #[case(ErrorCode::NotFound)]
    #[case(ErrorCode::ServiceUnavailable)]
    #[case(ErrorCode::InternalError)]
    fn documented_codes_follow_the_wire_format(#[case] code: ErrorCode) {
        let wire = serde_json::to_value(code).expect("code json");
        let wire = wire.as_str().expect("string code");
        let schema = serde_json::to_string(&ErrorCodeSchema::schema()).expect("schema json");
        assert!(schema.contains(&format!("\"{wire}\"")), "missing {wire}");
    }
}
