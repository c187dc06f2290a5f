use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{ErrorResponse, messages};

/// Fallback handler for unknown routes.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::single(messages::NOT_FOUND_RESOURCE)),
    )
        .into_response()
}

/// Fallback handler for known routes called with the wrong method.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::single(messages::METHOD_NOT_ALLOWED)),
    )
        .into_response()
}
