//! Customers Domain
//!
//! Customer registration for the pet shop. A customer is identified by an
//! e-mail address and a Brazilian CPF, both unique.
//!
//! Registration runs its checks independently and merges the results, so a
//! client learns about an invalid CPF and an e-mail conflict in one response:
//!
//! ```text
//! POST /api/customers  {"cpf": "111.111.111-11", "email": "taken@pets.com", ..}
//! 400 {"errors": ["CPF invalid", "Email already registered"]}
//! ```
//!
//! Listing loads the ordered customer set and pages it in memory.

pub mod cpf;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{CustomerError, CustomerResult};
pub use handlers::ApiDoc;
pub use models::{CreateCustomer, Customer, UpdateCustomer};
pub use postgres::PgCustomerRepository;
pub use repository::CustomerRepository;
pub use service::{CustomerService, customer_location};
