//! Customers Domain
//!
//! A complete domain implementation for managing customer records
//! (individual/CPF or legal/CNPJ entities) backed by MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Use-case orchestration
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Domain    │  ← Customer entity, Document value object, validation
//! └─────────────┘
//! ```
//!
//! Domain rules live in [`entity`], [`document`] and [`validation`] and
//! run on every construction and mutation; the service and HTTP layers
//! only orchestrate.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_customers::{handlers, CustomerService, MongoCustomerRepository};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("mydb");
//!
//! let repository = MongoCustomerRepository::new(db);
//! let service = CustomerService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod pagination;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use self::document::{Document, DocumentType};
pub use self::entity::{Customer, CustomerParts, NewCustomer};
pub use self::error::{CustomerError, CustomerResult};
pub use self::handlers::ApiDoc;
pub use self::models::{
    CreateCustomer, CustomerDto, CustomerId, CustomerPage, CustomerType, SearchCustomers,
    UpdateCustomer,
};
pub use self::mongodb::MongoCustomerRepository;
pub use self::pagination::{Page, PageRequest};
pub use self::repository::CustomerRepository;
pub use self::service::CustomerService;
