//! Client-facing error responses.
//!
//! Every failure maps to a `{"error": "<message>"}` body; the message
//! strings and status codes below are part of the API contract and must not
//! drift.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use campusnav_lib::RouteError;
use serde::Serialize;

/// Fixed message for a dataset that failed to load or parse.
pub const DATASET_UNAVAILABLE: &str = "GeoJSON file not found or invalid";

/// An API error: status code plus a single message string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 500 for a dataset that never became available.
    pub fn dataset_unavailable() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, DATASET_UNAVAILABLE)
    }
}

impl From<RouteError> for ApiError {
    fn from(err: RouteError) -> Self {
        match err {
            RouteError::BadFormat => Self::new(
                StatusCode::BAD_REQUEST,
                "Invalid route format. Use: source_id-to-destination_id",
            ),
            RouteError::EmptyId => Self::new(
                StatusCode::BAD_REQUEST,
                "Source and destination IDs cannot be empty",
            ),
            RouteError::SameEndpoint => Self::new(
                StatusCode::BAD_REQUEST,
                "Source and destination cannot be the same",
            ),
            RouteError::SourceNotFound { id } => Self::new(
                StatusCode::NOT_FOUND,
                format!("Source location '{id}' not found"),
            ),
            RouteError::DestNotFound { id } => Self::new(
                StatusCode::NOT_FOUND,
                format!("Destination location '{id}' not found"),
            ),
            RouteError::Internal { message } => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Server error: {message}"),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: &self.message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_format_maps_to_400_with_usage_hint() {
        let err = ApiError::from(RouteError::BadFormat);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            err.message,
            "Invalid route format. Use: source_id-to-destination_id"
        );
    }

    #[test]
    fn not_found_messages_quote_the_id() {
        let err = ApiError::from(RouteError::SourceNotFound {
            id: "gate".to_string(),
        });
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Source location 'gate' not found");

        let err = ApiError::from(RouteError::DestNotFound {
            id: "library".to_string(),
        });
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Destination location 'library' not found");
    }

    #[test]
    fn internal_errors_get_the_server_error_prefix() {
        let err = ApiError::from(RouteError::Internal {
            message: "boom".to_string(),
        });
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Server error: boom");
    }

    #[test]
    fn dataset_unavailable_uses_the_fixed_message() {
        let err = ApiError::dataset_unavailable();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, DATASET_UNAVAILABLE);
    }

    #[test]
    fn body_is_a_single_error_field() {
        let body = serde_json::to_string(&ErrorBody { error: "nope" }).unwrap();
        assert_eq!(body, r#"{"error":"nope"}"#);
    }
}
