pub mod codes;
pub mod handlers;
pub mod messages;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::outcome::InvalidArgument;

/// Wire format of every failed response.
///
/// # JSON Example
///
/// ```json
/// {
///   "errors": ["CPF invalid", "Email invalid"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable messages, in the order the failures were found
    pub errors: Vec<String>,
}

impl ErrorResponse {
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    pub fn single(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
        }
    }
}

/// Infrastructure and programming errors that can be converted to HTTP responses.
///
/// Domain failures (not found, conflicts, validation) travel as
/// [`crate::Outcome`] failures instead; `AppError` covers what happens around
/// them. Server-side variants never expose their detail to the client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] InvalidArgument),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query string error: {0}")]
    QueryRejection(#[from] QueryRejection),

    #[error("Bad Request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, code) = match self {
            AppError::Database(e) => map_db_error(&e),
            AppError::InvalidResponse(e) => {
                tracing::error!(
                    error_code = ErrorCode::InvalidResponseShape.code(),
                    "Handler built an invalid response: {}",
                    e
                );
                internal(ErrorCode::InvalidResponseShape)
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                (e.status(), e.body_text(), ErrorCode::JsonExtraction)
            }
            AppError::QueryRejection(e) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidQuery.code(),
                    "Query string error: {:?}",
                    e
                );
                (e.status(), e.body_text(), ErrorCode::InvalidQuery)
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = ErrorCode::BadRequest.code(), "Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg, ErrorCode::BadRequest)
            }
        };

        error_response(status, message, code)
    }
}

fn internal(code: ErrorCode) -> (StatusCode, String, ErrorCode) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        code.default_message().to_string(),
        code,
    )
}

/// Maps a SeaORM error to response components, logging the detail.
fn map_db_error(error: &DbErr) -> (StatusCode, String, ErrorCode) {
    match error {
        DbErr::RecordNotFound(detail) => {
            tracing::info!(
                error_code = ErrorCode::DatabaseNotFound.code(),
                "Database record not found: {}",
                detail
            );
            (
                StatusCode::NOT_FOUND,
                ErrorCode::DatabaseNotFound.default_message().to_string(),
                ErrorCode::DatabaseNotFound,
            )
        }
        DbErr::ConnectionAcquire(e) => {
            tracing::warn!(
                error_code = ErrorCode::DatabaseConnection.code(),
                "Database connection could not be acquired: {:?}",
                e
            );
            (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorCode::DatabaseConnection.default_message().to_string(),
                ErrorCode::DatabaseConnection,
            )
        }
        _ => {
            tracing::error!(
                error_code = ErrorCode::DatabaseError.code(),
                "Database error: {:?}",
                error
            );
            internal(ErrorCode::DatabaseError)
        }
    }
}

/// Builds an `{"errors": [message]}` response.
///
/// # Example
///
/// ```rust,ignore
/// use axum_helpers::errors::{error_response, ErrorCode};
/// use axum::http::StatusCode;
///
/// let response = error_response(
///     StatusCode::BAD_REQUEST,
///     "Invalid input".to_string(),
///     ErrorCode::BadRequest,
/// );
/// ```
pub fn error_response(status: StatusCode, message: String, error_code: ErrorCode) -> Response {
    let mut response = (status, Json(ErrorResponse::single(message))).into_response();
    response.extensions_mut().insert(error_code);
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_error_response_json_shape() {
        let body = ErrorResponse::new(vec!["CPF invalid".into(), "Email invalid".into()]);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"errors": ["CPF invalid", "Email invalid"]})
        );
    }

    #[tokio::test]
    async fn test_bad_request_keeps_message() {
        let response = AppError::BadRequest("Missing path parameter".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.extensions().get::<ErrorCode>(),
            Some(&ErrorCode::BadRequest)
        );
        assert_eq!(body_of(response).await.errors, vec!["Missing path parameter"]);
    }

    #[tokio::test]
    async fn test_connection_pool_exhaustion_is_503() {
        let err = DbErr::ConnectionAcquire(sea_orm::ConnAcquireErr::Timeout);
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_of(response).await.errors, vec![messages::SERVICE_UNAVAILABLE]);
    }

    #[tokio::test]
    async fn test_database_record_not_found_maps_to_404() {
        let response = AppError::from(DbErr::RecordNotFound("pets".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_database_failure_hides_detail() {
        let response = AppError::from(DbErr::Custom("syntax error at or near".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await.errors, vec![messages::INTERNAL_ERROR]);
    }

    #[tokio::test]
    async fn test_invalid_argument_is_a_server_error() {
        let response = AppError::from(InvalidArgument::MissingLocation(201)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await.errors, vec![messages::INTERNAL_ERROR]);
    }
}
