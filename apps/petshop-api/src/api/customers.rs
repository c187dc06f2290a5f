//! Customers API routes

use axum::Router;
use domain_customers::{CustomerService, PgCustomerRepository, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = PgCustomerRepository::new(state.db.clone());
    let service = CustomerService::new(repository);
    handlers::router(service)
}
