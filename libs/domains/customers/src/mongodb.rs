//! MongoDB implementation of CustomerRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::{
    bson::{doc, to_bson, Bson, Document as BsonDocument},
    Collection, Database,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::document::{Document, DocumentType};
use crate::entity::{Customer, CustomerParts};
use crate::error::{CustomerError, CustomerResult};
use crate::pagination::{Page, PageRequest};
use crate::repository::CustomerRepository;

/// Storage shape of the embedded document value object.
///
/// The type is stored as its label (`INDIVIDUAL`/`LEGAL`) so keyword
/// search can match against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub value: String,
    pub document_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Storage shape of a customer (stored as one document per customer,
/// keyed by `_id`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub document: DocumentRecord,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CustomerRecord {
    fn from_entity(customer: &Customer) -> Self {
        let document = customer.document();
        Self {
            id: customer.id(),
            name: customer.name().to_string(),
            email: customer.email().to_string(),
            document: DocumentRecord {
                value: document.value().to_string(),
                document_type: document.document_type().to_string(),
                created_at: document.created_at(),
                updated_at: document.updated_at(),
            },
            created_at: customer.created_at(),
            updated_at: customer.updated_at(),
        }
    }

    /// Rehydrate the entity, re-running full domain validation so corrupt
    /// stored data surfaces as a validation error instead of leaking out.
    fn into_entity(self) -> CustomerResult<Customer> {
        let document_type = self
            .document
            .document_type
            .parse::<DocumentType>()
            .map_err(|_| {
                CustomerError::Validation(format!(
                    "document: type must be INDIVIDUAL or LEGAL, got {}.",
                    self.document.document_type
                ))
            })?;

        let document = Document::reconstruct(
            self.document.value,
            document_type,
            self.document.created_at,
            self.document.updated_at,
        )?;

        Customer::reconstruct(CustomerParts {
            id: self.id,
            name: self.name,
            email: self.email,
            document,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// MongoDB implementation of the CustomerRepository
pub struct MongoCustomerRepository {
    collection: Collection<CustomerRecord>,
}

impl MongoCustomerRepository {
    /// Create a new MongoCustomerRepository over the `customers` collection
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("mydb");
    /// let repo = MongoCustomerRepository::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<CustomerRecord>("customers");
        Self { collection }
    }

    /// Create a new MongoCustomerRepository with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<CustomerRecord>(collection_name);
        Self { collection }
    }

    fn id_filter(id: Uuid) -> BsonDocument {
        doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) }
    }

    /// Build the keyword filter: a case-insensitive substring match on
    /// name, email, document value and document type label.
    fn keyword_filter(keyword: &str) -> BsonDocument {
        doc! {
            "$or": [
                doc! { "name": { "$regex": keyword, "$options": "i" } },
                doc! { "email": { "$regex": keyword, "$options": "i" } },
                doc! { "document.value": { "$regex": keyword, "$options": "i" } },
                doc! { "document.document_type": { "$regex": keyword, "$options": "i" } },
            ]
        }
    }
}

#[async_trait]
impl CustomerRepository for MongoCustomerRepository {
    #[instrument(skip(self, customer), fields(customer_id = %customer.id()))]
    async fn create(&self, customer: Customer) -> CustomerResult<()> {
        let record = CustomerRecord::from_entity(&customer);

        self.collection.insert_one(&record).await?;

        tracing::info!(customer_id = %record.id, "Customer created successfully");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> CustomerResult<Option<Customer>> {
        let record = self.collection.find_one(Self::id_filter(id)).await?;

        record.map(CustomerRecord::into_entity).transpose()
    }

    #[instrument(skip(self))]
    async fn find_all(&self, keyword: &str, page: PageRequest) -> CustomerResult<Page<Customer>> {
        use futures_util::TryStreamExt;

        page.validate_scan(keyword)?;

        let filter = Self::keyword_filter(keyword);

        // Full count pass, independent of the continuation cursor.
        let total = self.collection.count_documents(filter.clone()).await?;

        if total == 0 {
            return Ok(Page::empty(page.page(), page.per_page()));
        }

        let mut scan = filter;
        if let Some(last_id) = page.last_id {
            scan.insert("_id", doc! { "$gt": to_bson(&last_id).unwrap_or(Bson::Null) });
        }

        // Fetch one extra row to detect a continuation.
        let options = mongodb::options::FindOptions::builder()
            .limit(i64::from(page.per_page()) + 1)
            .sort(doc! { "_id": 1 })
            .build();

        let cursor = self.collection.find(scan).with_options(options).await?;
        let records: Vec<CustomerRecord> = cursor.try_collect().await?;

        let customers = records
            .into_iter()
            .map(CustomerRecord::into_entity)
            .collect::<CustomerResult<Vec<_>>>()?;

        Ok(Page::from_scan(
            customers,
            total,
            page.page(),
            page.per_page(),
            Customer::id,
        ))
    }

    #[instrument(skip(self, customer), fields(customer_id = %customer.id()))]
    async fn update(&self, customer: Customer) -> CustomerResult<()> {
        let record = CustomerRecord::from_entity(&customer);

        self.collection
            .replace_one(Self::id_filter(record.id), &record)
            .await?;

        tracing::info!(customer_id = %record.id, "Customer updated successfully");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> CustomerResult<()> {
        self.collection.delete_one(Self::id_filter(id)).await?;

        tracing::info!(customer_id = %id, "Customer deleted successfully");
        Ok(())
    }
}
