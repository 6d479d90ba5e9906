use async_trait::async_trait;
use uuid::Uuid;

use crate::entity::Customer;
use crate::error::CustomerResult;
use crate::pagination::{Page, PageRequest};

/// Repository trait for Customer persistence
///
/// This trait defines the data access interface for customers.
/// Implementations can use different storage backends (MongoDB, etc.)
/// and must honor the pagination contract in [`crate::pagination`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Persist a new customer
    async fn create(&self, customer: Customer) -> CustomerResult<()>;

    /// Load a customer by id; `Ok(None)` means "not found"
    async fn find_by_id(&self, id: Uuid) -> CustomerResult<Option<Customer>>;

    /// Keyword-filtered, cursor-assisted scan
    async fn find_all(&self, keyword: &str, page: PageRequest) -> CustomerResult<Page<Customer>>;

    /// Overwrite the full record keyed by the customer's id
    async fn update(&self, customer: Customer) -> CustomerResult<()>;

    /// Delete a customer by id
    async fn delete(&self, id: Uuid) -> CustomerResult<()>;
}
