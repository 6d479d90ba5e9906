//! Customer aggregate root.
//!
//! A customer owns its [`Document`] exclusively; document updates replace
//! the value object wholesale. Every construction path and every mutation
//! re-runs full entity validation, and a failed mutation leaves the
//! entity untouched.

use chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::ValidateEmail;

use crate::document::{Document, DocumentType};
use crate::error::CustomerResult;
use crate::validation::Violations;

/// Input for the `individual`/`legal` create factories.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    /// Raw document value; the factory builds the matching [`Document`].
    pub document: String,
}

/// Raw fields for rehydrating a persisted customer.
#[derive(Debug, Clone)]
pub struct CustomerParts {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub document: Document,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    id: Uuid,
    name: String,
    email: String,
    document: Document,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Customer {
    /// Create an individual (CPF) customer with a generated id and fresh
    /// timestamps.
    pub fn individual(input: NewCustomer) -> CustomerResult<Self> {
        let document = Document::individual(input.document)?;
        let now = Utc::now();
        Self::build(Uuid::new_v4(), input.name, input.email, document, now, now)
    }

    /// Create a legal-entity (CNPJ) customer with a generated id and
    /// fresh timestamps.
    pub fn legal(input: NewCustomer) -> CustomerResult<Self> {
        let document = Document::legal(input.document)?;
        let now = Utc::now();
        Self::build(Uuid::new_v4(), input.name, input.email, document, now, now)
    }

    /// Rehydrate a customer from storage; the caller supplies every field
    /// and the entity is re-validated.
    pub fn reconstruct(parts: CustomerParts) -> CustomerResult<Self> {
        Self::build(
            parts.id,
            parts.name,
            parts.email,
            parts.document,
            parts.created_at,
            parts.updated_at,
        )
    }

    fn build(
        id: Uuid,
        name: String,
        email: String,
        document: Document,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> CustomerResult<Self> {
        let customer = Self {
            id,
            name,
            email,
            document,
            created_at,
            updated_at,
        };
        customer.validate()?;
        Ok(customer)
    }

    fn validate(&self) -> CustomerResult<()> {
        let mut violations = Violations::new();

        let name_len = self.name.chars().count();
        violations.check(
            "name",
            (1..=255).contains(&name_len),
            "Name must have between 1 and 255 characters.",
        );
        violations.check(
            "email",
            self.email.validate_email(),
            "Email must be a valid email address.",
        );
        violations.check(
            "created_at",
            self.created_at <= self.updated_at,
            "created_at must be less than or equal to updated_at.",
        );

        // Id well-formedness and document validity are carried by the
        // types themselves: `Uuid` is parsed at the boundary and a
        // `Document` instance only exists after passing its own rules.
        violations.finish()
    }

    /// Replace the name, re-validating the whole entity. Bumps
    /// `updated_at` on success; leaves the entity unchanged on failure.
    pub fn update_name(&mut self, name: impl Into<String>) -> CustomerResult<()> {
        let mut candidate = self.clone();
        candidate.name = name.into();
        candidate.validate()?;
        candidate.updated_at = Utc::now();
        *self = candidate;
        Ok(())
    }

    /// Replace the email, re-validating the whole entity. Bumps
    /// `updated_at` on success; leaves the entity unchanged on failure.
    pub fn update_email(&mut self, email: impl Into<String>) -> CustomerResult<()> {
        let mut candidate = self.clone();
        candidate.email = email.into();
        candidate.validate()?;
        candidate.updated_at = Utc::now();
        *self = candidate;
        Ok(())
    }

    /// Replace the owned document with a freshly built one of the given
    /// type, re-validating the whole entity. Bumps `updated_at` on
    /// success; leaves the entity unchanged on failure.
    pub fn update_document(
        &mut self,
        value: impl Into<String>,
        document_type: DocumentType,
    ) -> CustomerResult<()> {
        let document = match document_type {
            DocumentType::Individual => Document::individual(value)?,
            DocumentType::Legal => Document::legal(value)?,
        };

        let mut candidate = self.clone();
        candidate.document = document;
        candidate.validate()?;
        candidate.updated_at = Utc::now();
        *self = candidate;
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
