//! API error types and responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::types::StoreError;

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body or path could not be decoded.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The store rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            Self::BadRequest(msg) => {
                tracing::warn!(error = %msg, "rejected malformed request");
                (StatusCode::BAD_REQUEST, "bad_request", msg.clone())
            }
            // Every store failure is a 500; the code still names the kind.
            Self::Store(err) => {
                tracing::warn!(error = %err, code = err.code(), "store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.code(), err.to_string())
            }
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::bad_request(ApiError::BadRequest("eof".into()), StatusCode::BAD_REQUEST)]
    #[case::not_present(
        ApiError::from(StoreError::account_not_present(1)),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    #[case::not_allowed(
        ApiError::from(StoreError::operation_not_allowed(9)),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    #[case::not_initialized(
        ApiError::from(StoreError::StoreNotInitialized),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    fn test_status_mapping(#[case] error: ApiError, #[case] expected: StatusCode) {
        assert_eq!(error.into_response().status(), expected);
    }

    #[test]
    fn test_store_error_display_is_transparent() {
        let error = ApiError::from(StoreError::account_not_present(3));
        assert_eq!(error.to_string(), "account 3 not present in store");
    }
}
