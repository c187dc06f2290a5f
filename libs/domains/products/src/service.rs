//! Product Service - catalogue rules on top of the repository

use axum_helpers::Outcome;
use pagination::{PageParams, PagedSlice};
use sea_orm::SqlErr;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{
    CreateProduct, Product, ProductFilter, StockAdjustment, UpdateProduct, normalize_sku,
};
use crate::repository::ProductRepository;

/// Product service providing the catalogue operations.
///
/// Every operation answers with an [`Outcome`] already annotated with the
/// HTTP response it maps to. `Err` is reserved for infrastructure failures.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

pub fn product_location(id: Uuid) -> String {
    format!("/api/products/{}", id)
}

fn not_found(id: Uuid) -> String {
    format!("Product {} not found", id)
}

fn duplicate_sku(sku: &str) -> String {
    format!("Product with SKU '{}' already exists", sku)
}

fn is_unique_violation(err: &ProductError) -> bool {
    matches!(
        err,
        ProductError::Database(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
    )
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a product: 201 with its location, 409 on a duplicate SKU.
    #[instrument(skip(self, input), fields(sku = %input.sku))]
    pub async fn create_product(&self, mut input: CreateProduct) -> ProductResult<Outcome<Product>> {
        input.sku = normalize_sku(&input.sku);

        if self.repository.sku_taken(&input.sku, None).await? {
            return Ok(Outcome::conflict(duplicate_sku(&input.sku)));
        }

        let sku = input.sku.clone();
        let product = match self.repository.create(input).await {
            Ok(product) => product,
            // Lost a race with a concurrent insert of the same SKU
            Err(e) if is_unique_violation(&e) => return Ok(Outcome::conflict(duplicate_sku(&sku))),
            Err(e) => return Err(e),
        };

        let location = product_location(product.id);
        Ok(Outcome::created(product, &location)?)
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Outcome<Product>> {
        match self.repository.get_by_id(id).await? {
            Some(product) => Ok(Outcome::ok(product)?),
            None => Ok(Outcome::not_found(not_found(id))),
        }
    }

    /// One page of the catalogue; the repository pages in the database.
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        filter: ProductFilter,
        page: PageParams,
    ) -> ProductResult<Outcome<PagedSlice<Product>>> {
        let (items, total) = self.repository.list(filter, page).await?;
        let slice = PagedSlice::new(items, total, page.page_number(), page.page_size());

        Ok(Outcome::ok(slice)?)
    }

    /// Update a product: 200, 404 when unknown, 409 when the new SKU is taken.
    #[instrument(skip(self, input))]
    pub async fn update_product(
        &self,
        id: Uuid,
        mut input: UpdateProduct,
    ) -> ProductResult<Outcome<Product>> {
        if let Some(sku) = input.sku.as_deref() {
            let sku = normalize_sku(sku);
            if self.repository.sku_taken(&sku, Some(id)).await? {
                return Ok(Outcome::conflict(duplicate_sku(&sku)));
            }
            input.sku = Some(sku);
        }

        let sku = input.sku.clone();
        match self.repository.update(id, input).await {
            Ok(Some(product)) => Ok(Outcome::ok(product)?),
            Ok(None) => Ok(Outcome::not_found(not_found(id))),
            Err(e) if is_unique_violation(&e) => Ok(Outcome::conflict(duplicate_sku(
                sku.as_deref().unwrap_or_default(),
            ))),
            Err(e) => Err(e),
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<Outcome<()>> {
        if self.repository.delete(id).await? {
            Ok(Outcome::no_content())
        } else {
            Ok(Outcome::not_found(not_found(id)))
        }
    }

    /// Add or remove units: 200, 404 when unknown, 422 when stock would go
    /// below zero.
    ///
    /// The change is applied by the database in one guarded update, so
    /// concurrent adjustments never overwrite each other.
    #[instrument(skip(self, adjustment), fields(quantity = adjustment.quantity))]
    pub async fn adjust_stock(
        &self,
        id: Uuid,
        adjustment: StockAdjustment,
    ) -> ProductResult<Outcome<Product>> {
        if let Some(product) = self.repository.adjust_stock(id, adjustment.quantity).await? {
            tracing::info!(
                product_id = %id,
                stock = product.stock,
                reason = %adjustment.reason,
                "Adjusted stock"
            );
            return Ok(Outcome::ok(product)?);
        }

        // Nothing matched: tell an unknown product from a short stock
        match self.repository.get_by_id(id).await? {
            Some(product) => Ok(Outcome::unprocessable(format!(
                "Insufficient stock: {} available, {} requested",
                product.stock,
                adjustment.quantity.unsigned_abs()
            ))),
            None => Ok(Outcome::not_found(not_found(id))),
        }
    }
}
