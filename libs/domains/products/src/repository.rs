use async_trait::async_trait;
use pagination::PageParams;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductFilter, UpdateProduct};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// One page of the products matching `filter`, ordered by name, plus the
    /// number of matches before paging
    async fn list(&self, filter: ProductFilter, page: PageParams)
    -> ProductResult<(Vec<Product>, u64)>;

    /// Apply the present fields of `input`, `None` when the product is unknown
    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Add `quantity` to the stock in a single statement, unless the result
    /// would be negative. `None` when the product is unknown or its stock is
    /// too low.
    async fn adjust_stock(&self, id: Uuid, quantity: i32) -> ProductResult<Option<Product>>;

    /// Delete a product, `false` when nothing was deleted
    async fn delete(&self, id: Uuid) -> ProductResult<bool>;

    /// Whether another product than `exclude` already uses `sku`
    async fn sku_taken(&self, sku: &str, exclude: Option<Uuid>) -> ProductResult<bool>;
}
