use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, InvalidArgument};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Infrastructure failures of the customers domain.
///
/// Registration rules (invalid CPF, e-mail or CPF already registered, unknown
/// customer) are reported through `Outcome` failures.
#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] InvalidArgument),
}

pub type CustomerResult<T> = Result<T, CustomerError>;

impl CustomerError {
    /// A unique index rejected the write.
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            CustomerError::Database(e)
                if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
        )
    }
}

impl From<CustomerError> for AppError {
    fn from(err: CustomerError) -> Self {
        match err {
            CustomerError::Database(e) => AppError::Database(e),
            CustomerError::InvalidResponse(e) => AppError::InvalidResponse(e),
        }
    }
}

impl IntoResponse for CustomerError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
