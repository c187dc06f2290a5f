//! HTTP handlers for customers

use axum::{Router, extract::State, routing::get};
use axum_helpers::{
    Outcome, Paginated, QueryParams, UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, ConflictResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use pagination::PageParams;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::CustomerResult;
use crate::models::{CreateCustomer, Customer, UpdateCustomer};
use crate::repository::CustomerRepository;
use crate::service::CustomerService;

#[derive(OpenApi)]
#[openapi(
    paths(
        list_customers,
        register_customer,
        get_customer,
        update_customer,
        delete_customer,
    ),
    components(
        schemas(Customer, CreateCustomer, UpdateCustomer),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "Customer registration")
    )
)]
pub struct ApiDoc;

pub fn router<R: CustomerRepository + 'static>(service: CustomerService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_customers).post(register_customer))
        .route(
            "/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .with_state(shared_service)
}

/// List customers ordered by name
#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    params(PageParams),
    responses(
        (status = 200, description = "One page of customers", body = Vec<Customer>,
            headers(("X-Pagination" = String, description = "JSON-encoded PaginationMetadata"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_customers<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    QueryParams(page): QueryParams<PageParams>,
) -> CustomerResult<Paginated<Customer>> {
    Ok(Paginated(service.list_customers(page).await?))
}

/// Register a customer
///
/// An invalid CPF and e-mail or CPF conflicts are reported together.
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = CreateCustomer,
    responses(
        (status = 201, description = "Customer registered", body = Customer,
            headers(("Location" = String, description = "URL of the new customer"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn register_customer<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateCustomer>,
) -> CustomerResult<Outcome<Customer>> {
    service.register_customer(input).await
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = Uuid, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer found", body = Customer),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_customer<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    UuidPath(id): UuidPath,
) -> CustomerResult<Outcome<Customer>> {
    service.get_customer(id).await
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = Uuid, Path, description = "Customer ID")
    ),
    request_body = UpdateCustomer,
    responses(
        (status = 200, description = "Customer updated", body = Customer),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_customer<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateCustomer>,
) -> CustomerResult<Outcome<Customer>> {
    service.update_customer(id, input).await
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = Uuid, Path, description = "Customer ID")
    ),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_customer<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    UuidPath(id): UuidPath,
) -> CustomerResult<Outcome<()>> {
    service.delete_customer(id).await
}
