use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::entity::Customer;

/// Kind of customer being created or updated.
///
/// Parsed from the request's `customer_type` field; maps to the matching
/// document type (`individual` → CPF, `legal` → CNPJ).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CustomerType {
    Individual,
    Legal,
}

/// DTO for creating a new customer
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCustomer {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    /// Raw document value (11 digits for individual, 14 for legal)
    pub document: String,
    /// "individual" or "legal"
    pub customer_type: String,
}

/// DTO for updating an existing customer. Full replacement: every field
/// is applied to the loaded entity.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateCustomer {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub document: String,
    /// "individual" or "legal"
    pub customer_type: String,
}

/// Flat customer representation returned by find and search
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub document: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Customer> for CustomerDto {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id(),
            name: customer.name().to_string(),
            email: customer.email().to_string(),
            document: customer.document().value().to_string(),
            created_at: customer.created_at(),
            updated_at: customer.updated_at(),
        }
    }
}

/// Identifier-only response for create and update
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct CustomerId {
    pub id: Uuid,
}

/// Query parameters for keyword search
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct SearchCustomers {
    /// Search keyword, matched against name, email, document value and
    /// document type label
    pub keyword: String,
    /// Page number (default 1)
    pub page: Option<u32>,
    /// Items per page (default 10, maximum 20)
    pub per_page: Option<u32>,
    /// Continuation cursor: `last_id` of the previous page
    pub last_id: Option<Uuid>,
}

/// Search response envelope
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerPage {
    pub result: Vec<CustomerDto>,
    /// Count of all matches, independent of page and cursor
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub next: Option<u32>,
    pub prev: Option<u32>,
    pub last_id: Option<Uuid>,
}
