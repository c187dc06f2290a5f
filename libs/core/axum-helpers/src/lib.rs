//! # Axum Helpers
//!
//! Shared HTTP plumbing for the pet-shop services.
//!
//! ## Modules
//!
//! - **[`outcome`]**: success-or-failure results annotated with the HTTP response they render as
//! - **[`paginated`]**: `X-Pagination` header for paged list responses
//! - **[`errors`]**: `{"errors": [...]}` bodies, infrastructure errors and error codes
//! - **[`extractors`]**: Custom extractors (UUID path, validated JSON, query params)
//! - **[`server`]**: Router assembly, health checks, graceful shutdown
//! - **[`http`]**: CORS and security headers
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::{Router, routing::get};
//! use axum_helpers::{Outcome, server::{create_app, create_router}};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! async fn hello() -> Outcome<&'static str> {
//!     Outcome::success("woof")
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     let router = create_router::<ApiDoc>(Router::new().route("/hello", get(hello)), &config)?;
//!     create_app(router, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod outcome;
pub mod paginated;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use extractors::{QueryParams, UuidPath, ValidatedJson};
pub use outcome::{Fault, InvalidArgument, Outcome, ResponseShape};
pub use paginated::Paginated;
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_app,
    create_production_app, create_router, health_router, run_health_checks, shutdown_signal,
};
