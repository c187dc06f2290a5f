use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CustomerResult;
use crate::models::{CreateCustomer, Customer, UpdateCustomer};

/// Repository trait for Customer persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert a customer whose fields are already normalized
    async fn create(&self, input: CreateCustomer) -> CustomerResult<Customer>;

    async fn get_by_id(&self, id: Uuid) -> CustomerResult<Option<Customer>>;

    /// Every customer, ordered by name then ID
    async fn list_all(&self) -> CustomerResult<Vec<Customer>>;

    /// Apply the present fields, `None` when the customer is unknown
    async fn update(&self, id: Uuid, input: UpdateCustomer) -> CustomerResult<Option<Customer>>;

    /// Delete a customer, `false` when nothing was deleted
    async fn delete(&self, id: Uuid) -> CustomerResult<bool>;

    /// Whether a customer other than `exclude` uses `email`
    async fn email_taken(&self, email: &str, exclude: Option<Uuid>) -> CustomerResult<bool>;

    /// Whether any customer uses the digits-only `cpf`
    async fn cpf_taken(&self, cpf: &str) -> CustomerResult<bool>;
}
