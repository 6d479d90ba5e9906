use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{UuidPath, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CustomerResult;
use crate::models::{
    CreateCustomer, CustomerDto, CustomerId, CustomerPage, SearchCustomers, UpdateCustomer,
};
use crate::repository::CustomerRepository;
use crate::service::CustomerService;

/// OpenAPI documentation for the Customers API
#[derive(OpenApi)]
#[openapi(
    paths(
        search_customers,
        create_customer,
        find_customer,
        update_customer,
        delete_customer,
    ),
    components(
        schemas(CreateCustomer, UpdateCustomer, CustomerDto, CustomerId, CustomerPage)
    ),
    tags(
        (name = "Customers", description = "Customer management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the customers router with all HTTP endpoints
pub fn router<R: CustomerRepository + 'static>(service: CustomerService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(search_customers).post(create_customer))
        .route(
            "/{id}",
            get(find_customer)
                .put(update_customer)
                .delete(delete_customer),
        )
        .with_state(shared_service)
}

/// Search customers by keyword with cursor-assisted pagination
#[utoipa::path(
    get,
    path = "",
    tag = "Customers",
    params(SearchCustomers),
    responses(
        (status = 200, description = "Customers found successfully", body = CustomerPage),
        (status = 400, description = "Invalid search parameters"),
        (status = 500, description = "Internal server error")
    )
)]
async fn search_customers<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    Query(query): Query<SearchCustomers>,
) -> CustomerResult<Json<CustomerPage>> {
    let page = service.search_customers(query).await?;
    Ok(Json(page))
}

/// Create a new customer
#[utoipa::path(
    post,
    path = "",
    tag = "Customers",
    request_body = CreateCustomer,
    responses(
        (status = 201, description = "Customer created successfully", body = CustomerId),
        (status = 400, description = "Invalid customer data"),
        (status = 500, description = "Internal server error")
    )
)]
async fn create_customer<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateCustomer>,
) -> CustomerResult<impl IntoResponse> {
    let output = service.create_customer(input).await?;
    Ok((StatusCode::CREATED, Json(output)))
}

/// Get a customer by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Customers",
    params(
        ("id" = Uuid, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer found", body = CustomerDto),
        (status = 400, description = "Invalid customer ID"),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn find_customer<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    UuidPath(id): UuidPath,
) -> CustomerResult<Json<CustomerDto>> {
    let customer = service.find_customer(id).await?;
    Ok(Json(customer))
}

/// Update a customer
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Customers",
    params(
        ("id" = Uuid, Path, description = "Customer ID")
    ),
    request_body = UpdateCustomer,
    responses(
        (status = 200, description = "Customer updated successfully", body = CustomerId),
        (status = 400, description = "Invalid customer data"),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn update_customer<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateCustomer>,
) -> CustomerResult<Json<CustomerId>> {
    let output = service.update_customer(id, input).await?;
    Ok(Json(output))
}

/// Delete a customer
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Customers",
    params(
        ("id" = Uuid, Path, description = "Customer ID")
    ),
    responses(
        (status = 204, description = "Customer deleted successfully"),
        (status = 400, description = "Invalid customer ID"),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal server error")
    )
)]
async fn delete_customer<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    UuidPath(id): UuidPath,
) -> CustomerResult<impl IntoResponse> {
    service.delete_customer(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
