//! Custom extractors for Axum handlers.
//!
//! Rejections render as `{"errors": [...]}` bodies like every other failure.

pub mod query_params;
pub mod uuid_path;
pub mod validated_json;

pub use query_params::QueryParams;
pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;
