use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, InvalidArgument};
use sea_orm::DbErr;
use thiserror::Error;

/// Failures that are not part of the catalogue's business rules.
///
/// Rule violations (unknown product, duplicate SKU, negative stock) travel as
/// `Outcome` failures; these are what is left.
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] InvalidArgument),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Database(e) => AppError::Database(e),
            ProductError::InvalidResponse(e) => AppError::InvalidResponse(e),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
