//! Type-safe error codes for logging and monitoring.
//!
//! Clients only ever see the `{"errors": [...]}` body; the integer code is
//! attached to log events as the `error_code` field so dashboards can group
//! failures without parsing messages.
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! ```

use serde::Serialize;

use super::messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1099)
    ValidationError,
    InvalidUuid,
    JsonExtraction,
    InvalidQuery,
    BadRequest,

    // Server errors (1100-1999)
    /// A handler built a response with an unsupported status code
    InvalidResponseShape,
    /// A handler returned an outcome without any response shape
    MissingResponseShape,

    // Database errors (2000-2999)
    DatabaseError,
    DatabaseNotFound,
    DatabaseConnection,
}

impl ErrorCode {
    pub const fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidUuid => 1002,
            Self::JsonExtraction => 1003,
            Self::InvalidQuery => 1004,
            Self::BadRequest => 1005,
            Self::InvalidResponseShape => 1102,
            Self::MissingResponseShape => 1103,
            Self::DatabaseError => 2001,
            Self::DatabaseNotFound => 2002,
            Self::DatabaseConnection => 2003,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidUuid => "INVALID_UUID",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidResponseShape => "INVALID_RESPONSE_SHAPE",
            Self::MissingResponseShape => "MISSING_RESPONSE_SHAPE",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::DatabaseNotFound => "DATABASE_NOT_FOUND",
            Self::DatabaseConnection => "DATABASE_CONNECTION",
        }
    }

    /// Message sent to clients when the underlying detail must stay internal.
    pub const fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => messages::VALIDATION_FAILED,
            Self::InvalidUuid => messages::INVALID_UUID,
            Self::JsonExtraction => messages::INVALID_JSON,
            Self::InvalidQuery => messages::INVALID_QUERY,
            Self::BadRequest => messages::BAD_REQUEST,
            Self::DatabaseNotFound => messages::NOT_FOUND_RESOURCE,
            Self::DatabaseConnection => messages::SERVICE_UNAVAILABLE,
            Self::MissingResponseShape => messages::NO_VALID_RESPONSE,
            Self::InvalidResponseShape | Self::DatabaseError => messages::INTERNAL_ERROR,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_grouped_by_range() {
        assert!((1000..1100).contains(&ErrorCode::InvalidUuid.code()));
        assert!((1100..2000).contains(&ErrorCode::MissingResponseShape.code()));
        assert!((2000..3000).contains(&ErrorCode::DatabaseError.code()));
    }

    #[test]
    fn test_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorCode::InvalidUuid).unwrap();
        assert_eq!(json, "\"INVALID_UUID\"");
        assert_eq!(ErrorCode::InvalidUuid.to_string(), "INVALID_UUID");
    }

    #[test]
    fn test_internal_codes_share_generic_message() {
        assert_eq!(
            ErrorCode::DatabaseError.default_message(),
            ErrorCode::InvalidResponseShape.default_message()
        );
        assert_eq!(
            ErrorCode::MissingResponseShape.default_message(),
            messages::NO_VALID_RESPONSE
        );
    }
}
