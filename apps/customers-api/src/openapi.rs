//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Customers API",
        version = "0.1.0",
        description = "REST API for managing customer records (CPF/CNPJ entities) backed by MongoDB",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/customers", api = domain_customers::ApiDoc)
    ),
    tags(
        (name = "Customers", description = "Customer management endpoints")
    )
)]
pub struct ApiDoc;
