use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomerError {
    /// A field-schema rule failed on an entity or value object.
    /// Carries the aggregated `field: message` pairs.
    #[error("{0}")]
    Validation(String),

    /// An invariant outside plain field validation was violated.
    #[error("{0}")]
    Domain(String),

    /// A lookup by id returned nothing. Distinct from an empty search
    /// result, which is not an error.
    #[error("{0}")]
    NotFound(String),

    /// Use-case-level input problem (e.g., unknown customer type).
    #[error("{0}")]
    BadRequest(String),

    /// The persistence contract was violated before any data access
    /// (pagination bounds, empty keyword).
    #[error("{0}")]
    Storage(String),

    /// The underlying store rejected the call.
    #[error("Database error: {0}")]
    Database(String),
}

pub type CustomerResult<T> = Result<T, CustomerError>;

/// Convert CustomerError to AppError for standardized error responses
impl From<CustomerError> for AppError {
    fn from(err: CustomerError) -> Self {
        match err {
            CustomerError::Validation(msg) => AppError::BadRequest(msg),
            CustomerError::Domain(msg) => AppError::InternalServerError(msg),
            CustomerError::NotFound(msg) => AppError::NotFound(msg),
            CustomerError::BadRequest(msg) => AppError::BadRequest(msg),
            CustomerError::Storage(msg) => AppError::BadRequest(msg),
            CustomerError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CustomerError {
    fn into_response(self) -> Response {
        // Convert to AppError for the standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for CustomerError {
    fn from(err: mongodb::error::Error) -> Self {
        CustomerError::Database(err.to_string())
    }
}
