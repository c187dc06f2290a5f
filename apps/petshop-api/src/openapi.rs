//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the pet shop API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pet Shop API",
        version = "0.1.0",
        description = "Catalogue and customer registration for the pet shop",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc),
        (path = "/api/customers", api = domain_customers::ApiDoc)
    )
)]
pub struct ApiDoc;
