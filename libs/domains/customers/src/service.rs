//! Customer service - use-case orchestration layer
//!
//! Each method is one use case: it constructs or loads the entity,
//! lets the domain validate, calls the repository, and maps the result
//! to a flat output DTO. No domain rule lives here.

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::document::DocumentType;
use crate::entity::{Customer, NewCustomer};
use crate::error::{CustomerError, CustomerResult};
use crate::models::{
    CreateCustomer, CustomerDto, CustomerId, CustomerPage, CustomerType, SearchCustomers,
    UpdateCustomer,
};
use crate::pagination::{PageRequest, DEFAULT_PAGE, DEFAULT_PER_PAGE};
use crate::repository::CustomerRepository;

pub struct CustomerService<R: CustomerRepository> {
    repository: Arc<R>,
}

impl<R: CustomerRepository> CustomerService<R> {
    /// Create a new CustomerService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a customer of the requested type and return its id.
    ///
    /// Fails with a bad-request error, before any repository call, when
    /// `customer_type` is neither "individual" nor "legal".
    #[instrument(skip(self, input), fields(customer_name = %input.name))]
    pub async fn create_customer(&self, input: CreateCustomer) -> CustomerResult<CustomerId> {
        let customer = match input.customer_type.parse::<CustomerType>() {
            Ok(CustomerType::Individual) => Customer::individual(NewCustomer {
                name: input.name,
                email: input.email,
                document: input.document,
            })?,
            Ok(CustomerType::Legal) => Customer::legal(NewCustomer {
                name: input.name,
                email: input.email,
                document: input.document,
            })?,
            Err(_) => {
                return Err(CustomerError::BadRequest(format!(
                    "Customer type {} is not valid while create_customer",
                    input.customer_type
                )));
            }
        };

        let id = customer.id();
        self.repository.create(customer).await?;

        Ok(CustomerId { id })
    }

    /// Load a customer by id and map it to a flat DTO.
    #[instrument(skip(self))]
    pub async fn find_customer(&self, id: Uuid) -> CustomerResult<CustomerDto> {
        let customer = self.repository.find_by_id(id).await?.ok_or_else(|| {
            CustomerError::NotFound(format!(
                "Customer with id {} not found while find_customer",
                id
            ))
        })?;

        Ok(CustomerDto::from(&customer))
    }

    /// Replace name, email and document of an existing customer.
    ///
    /// Each mutation re-validates the whole entity; any failure aborts
    /// before persistence.
    #[instrument(skip(self, input))]
    pub async fn update_customer(
        &self,
        id: Uuid,
        input: UpdateCustomer,
    ) -> CustomerResult<CustomerId> {
        let mut customer = self.repository.find_by_id(id).await?.ok_or_else(|| {
            CustomerError::NotFound(format!(
                "Customer with id {} not found while update_customer",
                id
            ))
        })?;

        let document_type = match input.customer_type.parse::<CustomerType>() {
            Ok(CustomerType::Individual) => DocumentType::Individual,
            Ok(CustomerType::Legal) => DocumentType::Legal,
            Err(_) => {
                return Err(CustomerError::Domain(format!(
                    "Invalid document type {} while updating document for customer {}",
                    input.customer_type, id
                )));
            }
        };

        customer.update_name(input.name)?;
        customer.update_email(input.email)?;
        customer.update_document(input.document, document_type)?;

        self.repository.update(customer).await?;

        Ok(CustomerId { id })
    }

    /// Delete a customer by id.
    #[instrument(skip(self))]
    pub async fn delete_customer(&self, id: Uuid) -> CustomerResult<()> {
        let customer = self.repository.find_by_id(id).await?.ok_or_else(|| {
            CustomerError::NotFound(format!(
                "Customer with id {} not found while delete_customer",
                id
            ))
        })?;

        self.repository.delete(customer.id()).await
    }

    /// Keyword search with cursor-assisted pagination.
    ///
    /// The envelope's metadata is republished unchanged, except `page`,
    /// which echoes the request.
    #[instrument(skip(self, input), fields(keyword = %input.keyword))]
    pub async fn search_customers(&self, input: SearchCustomers) -> CustomerResult<CustomerPage> {
        let page = input.page.unwrap_or(DEFAULT_PAGE);
        let per_page = input.per_page.unwrap_or(DEFAULT_PER_PAGE);

        let result = self
            .repository
            .find_all(
                &input.keyword,
                PageRequest {
                    page: Some(page),
                    per_page: Some(per_page),
                    last_id: input.last_id,
                },
            )
            .await?;

        Ok(CustomerPage {
            result: result.items.iter().map(CustomerDto::from).collect(),
            total: result.total,
            page,
            per_page: result.per_page,
            next: result.next,
            prev: result.prev,
            last_id: result.last_id,
        })
    }
}

impl<R: CustomerRepository> Clone for CustomerService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::Page;
    use crate::repository::MockCustomerRepository;

    const CPF: &str = "12345678901";
    const CNPJ: &str = "12345678000190";

    fn create_input(customer_type: &str) -> CreateCustomer {
        CreateCustomer {
            name: "John Doe".to_string(),
            email: "john@doe.com".to_string(),
            document: CPF.to_string(),
            customer_type: customer_type.to_string(),
        }
    }

    fn stored_customer() -> Customer {
        Customer::individual(NewCustomer {
            name: "John Doe".to_string(),
            email: "john@doe.com".to_string(),
            document: CPF.to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_individual_customer() {
        let mut repository = MockCustomerRepository::new();
        repository
            .expect_create()
            .withf(|customer: &Customer| {
                customer.name() == "John Doe"
                    && customer.document().document_type() == DocumentType::Individual
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = CustomerService::new(repository);
        let output = service.create_customer(create_input("individual")).await;

        assert!(output.is_ok());
    }

    #[tokio::test]
    async fn test_create_legal_customer() {
        let mut repository = MockCustomerRepository::new();
        repository
            .expect_create()
            .withf(|customer: &Customer| {
                customer.document().document_type() == DocumentType::Legal
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = CustomerService::new(repository);
        let input = CreateCustomer {
            document: CNPJ.to_string(),
            ..create_input("legal")
        };

        assert!(service.create_customer(input).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_with_unknown_type_never_reaches_the_repository() {
        let mut repository = MockCustomerRepository::new();
        repository.expect_create().times(0);

        let service = CustomerService::new(repository);
        let err = service
            .create_customer(create_input("corporate"))
            .await
            .unwrap_err();

        assert!(matches!(err, CustomerError::BadRequest(_)));
        assert!(err
            .to_string()
            .contains("Customer type corporate is not valid while create_customer"));
    }

    #[tokio::test]
    async fn test_create_with_invalid_document_never_reaches_the_repository() {
        let mut repository = MockCustomerRepository::new();
        repository.expect_create().times(0);

        let service = CustomerService::new(repository);
        let input = CreateCustomer {
            document: "123".to_string(),
            ..create_input("individual")
        };

        let err = service.create_customer(input).await.unwrap_err();
        assert!(matches!(err, CustomerError::Validation(_)));
    }

    #[tokio::test]
    async fn test_find_customer_maps_to_flat_dto() {
        let customer = stored_customer();
        let id = customer.id();

        let mut repository = MockCustomerRepository::new();
        let stored = customer.clone();
        repository
            .expect_find_by_id()
            .withf(move |lookup| *lookup == id)
            .returning(move |_| Ok(Some(stored.clone())));

        let service = CustomerService::new(repository);
        let dto = service.find_customer(id).await.unwrap();

        assert_eq!(dto.id, id);
        assert_eq!(dto.name, "John Doe");
        assert_eq!(dto.document, CPF);
    }

    #[tokio::test]
    async fn test_find_missing_customer_is_not_found() {
        let mut repository = MockCustomerRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));

        let service = CustomerService::new(repository);
        let id = Uuid::new_v4();
        let err = service.find_customer(id).await.unwrap_err();

        assert!(matches!(err, CustomerError::NotFound(_)));
        let message = err.to_string();
        assert!(message.contains(&id.to_string()));
        assert!(message.contains("find_customer"));
    }

    #[tokio::test]
    async fn test_update_customer_persists_every_change() {
        let customer = stored_customer();
        let id = customer.id();

        let mut repository = MockCustomerRepository::new();
        let stored = customer.clone();
        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        repository
            .expect_update()
            .withf(move |updated: &Customer| {
                updated.id() == id
                    && updated.name() == "Acme Inc"
                    && updated.email() == "contact@acme.com"
                    && updated.document().value() == CNPJ
                    && updated.document().document_type() == DocumentType::Legal
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = CustomerService::new(repository);
        let output = service
            .update_customer(
                id,
                UpdateCustomer {
                    name: "Acme Inc".to_string(),
                    email: "contact@acme.com".to_string(),
                    document: CNPJ.to_string(),
                    customer_type: "legal".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(output.id, id);
    }

    #[tokio::test]
    async fn test_update_missing_customer_is_not_found() {
        let mut repository = MockCustomerRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));
        repository.expect_update().times(0);

        let service = CustomerService::new(repository);
        let id = Uuid::new_v4();
        let err = service
            .update_customer(
                id,
                UpdateCustomer {
                    name: "Jane Doe".to_string(),
                    email: "jane@doe.com".to_string(),
                    document: CPF.to_string(),
                    customer_type: "individual".to_string(),
                },
            )
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains(&id.to_string()));
        assert!(message.contains("update_customer"));
    }

    #[tokio::test]
    async fn test_update_aborts_before_persistence_on_validation_failure() {
        let customer = stored_customer();
        let id = customer.id();

        let mut repository = MockCustomerRepository::new();
        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(customer.clone())));
        repository.expect_update().times(0);

        let service = CustomerService::new(repository);
        let err = service
            .update_customer(
                id,
                UpdateCustomer {
                    name: String::new(),
                    email: "jane@doe.com".to_string(),
                    document: CPF.to_string(),
                    customer_type: "individual".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CustomerError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_with_unknown_type_is_a_domain_error() {
        let customer = stored_customer();
        let id = customer.id();

        let mut repository = MockCustomerRepository::new();
        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(customer.clone())));
        repository.expect_update().times(0);

        let service = CustomerService::new(repository);
        let err = service
            .update_customer(
                id,
                UpdateCustomer {
                    name: "Jane Doe".to_string(),
                    email: "jane@doe.com".to_string(),
                    document: CPF.to_string(),
                    customer_type: "corporate".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CustomerError::Domain(_)));
        assert!(err.to_string().contains("Invalid document type corporate"));
    }

    #[tokio::test]
    async fn test_delete_customer() {
        let customer = stored_customer();
        let id = customer.id();

        let mut repository = MockCustomerRepository::new();
        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(customer.clone())));
        repository
            .expect_delete()
            .withf(move |target| *target == id)
            .times(1)
            .returning(|_| Ok(()));

        let service = CustomerService::new(repository);
        assert!(service.delete_customer(id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_customer_is_not_found() {
        let mut repository = MockCustomerRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));
        repository.expect_delete().times(0);

        let service = CustomerService::new(repository);
        let id = Uuid::new_v4();
        let err = service.delete_customer(id).await.unwrap_err();

        let message = err.to_string();
        assert!(message.contains(&id.to_string()));
        assert!(message.contains("delete_customer"));
    }

    #[tokio::test]
    async fn test_search_applies_defaults() {
        let mut repository = MockCustomerRepository::new();
        repository
            .expect_find_all()
            .withf(|keyword, page| {
                keyword == "doe" && page.page() == 1 && page.per_page() == 10
            })
            .returning(|_, page| Ok(Page::empty(page.page(), page.per_page())));

        let service = CustomerService::new(repository);
        let output = service
            .search_customers(SearchCustomers {
                keyword: "doe".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(output.page, 1);
        assert_eq!(output.per_page, 10);
        assert_eq!(output.total, 0);
        assert!(output.result.is_empty());
        assert_eq!(output.next, None);
        assert_eq!(output.prev, None);
        assert_eq!(output.last_id, None);
    }

    #[tokio::test]
    async fn test_search_echoes_the_requested_page() {
        let mut repository = MockCustomerRepository::new();
        repository.expect_find_all().returning(|_, page| {
            // Envelope deliberately disagrees with the request
            let mut envelope = Page::empty(99, page.per_page());
            envelope.prev = Some(1);
            Ok(envelope)
        });

        let service = CustomerService::new(repository);
        let output = service
            .search_customers(SearchCustomers {
                keyword: "doe".to_string(),
                page: Some(2),
                per_page: Some(5),
                last_id: None,
            })
            .await
            .unwrap();

        assert_eq!(output.page, 2);
        assert_eq!(output.prev, Some(1));
    }

    #[tokio::test]
    async fn test_search_maps_entities_to_flat_dtos() {
        let customer = stored_customer();
        let id = customer.id();

        let mut repository = MockCustomerRepository::new();
        repository.expect_find_all().returning(move |_, page| {
            Ok(Page {
                items: vec![customer.clone()],
                total: 1,
                per_page: page.per_page(),
                current_page: page.page(),
                prev: None,
                next: None,
                last_id: None,
            })
        });

        let service = CustomerService::new(repository);
        let output = service
            .search_customers(SearchCustomers {
                keyword: "doe".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(output.result.len(), 1);
        assert_eq!(output.result[0].id, id);
        assert_eq!(output.result[0].document, CPF);
    }

    #[tokio::test]
    async fn test_search_propagates_storage_errors() {
        let mut repository = MockCustomerRepository::new();
        repository.expect_find_all().returning(|keyword, page| {
            page.validate_scan(keyword)?;
            Ok(Page::empty(page.page(), page.per_page()))
        });

        let service = CustomerService::new(repository);
        let err = service
            .search_customers(SearchCustomers {
                keyword: "doe".to_string(),
                per_page: Some(21),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CustomerError::Storage(_)));
        assert!(err.to_string().contains("maximum is 20"));
    }
}
