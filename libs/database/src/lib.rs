//! PostgreSQL connectivity for the pet-shop services.
//!
//! # Example
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::{RetryConfig, postgres};
//! use migration::Migrator;
//!
//! let config = postgres::PostgresConfig::from_env()?;
//! let db = postgres::connect_with_retry(config, RetryConfig::default()).await?;
//! postgres::run_migrations::<Migrator>(&db, "petshop_api").await?;
//! ```

pub mod error;
pub mod postgres;
pub mod retry;

pub use error::{DatabaseError, DatabaseResult};
pub use retry::{RetryConfig, retry_with_backoff};
