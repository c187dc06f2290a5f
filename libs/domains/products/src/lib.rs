//! Products Domain
//!
//! The pet-supply catalogue, stored in PostgreSQL through SeaORM.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, render Outcome / Paginated
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Catalogue rules, annotates each Outcome
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + PostgreSQL implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, PgProductRepository, ProductService};
//! use sea_orm::DatabaseConnection;
//!
//! fn products_router(db: DatabaseConnection) -> axum::Router {
//!     let service = ProductService::new(PgProductRepository::new(db));
//!     handlers::router(service)
//! }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateProduct, Product, ProductCategory, ProductFilter, Species, StockAdjustment,
    UpdateProduct,
};
pub use postgres::PgProductRepository;
pub use repository::ProductRepository;
pub use service::{ProductService, product_location};
