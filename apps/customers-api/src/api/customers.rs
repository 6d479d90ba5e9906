//! Customers API routes
//!
//! This module wires up the customers domain to HTTP routes.

use axum::Router;
use domain_customers::{handlers, CustomerService, MongoCustomerRepository};

use crate::state::AppState;

/// Create customers router
pub fn router(state: &AppState) -> Router {
    // Create the MongoDB repository
    let repository = MongoCustomerRepository::new(state.db.clone());

    // Create the service
    let service = CustomerService::new(repository);

    // Return the domain's router
    handlers::router(service)
}
