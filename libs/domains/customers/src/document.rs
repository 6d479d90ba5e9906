//! Document value object: the tax identifier owned by a customer.
//!
//! A CPF (individual taxpayer id) has exactly 11 digits; a CNPJ
//! (legal-entity taxpayer id) has exactly 14.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

use crate::error::CustomerResult;
use crate::validation::Violations;

/// Document type tag. Displays and parses as `INDIVIDUAL` / `LEGAL`,
/// which is also the label keyword search matches against.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum DocumentType {
    /// CPF, 11 digits
    Individual,
    /// CNPJ, 14 digits
    Legal,
}

impl DocumentType {
    /// Number of characters a document of this type must have.
    pub fn expected_len(self) -> usize {
        match self {
            DocumentType::Individual => 11,
            DocumentType::Legal => 14,
        }
    }
}

/// Immutable tax-identifier value object.
///
/// Validated on every construction path; an instance that exists is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    value: String,
    document_type: DocumentType,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Document {
    /// Create an individual (CPF) document, stamping both timestamps to now.
    pub fn individual(value: impl Into<String>) -> CustomerResult<Self> {
        let now = Utc::now();
        Self::build(value, DocumentType::Individual, now, now)
    }

    /// Create a legal-entity (CNPJ) document, stamping both timestamps to now.
    pub fn legal(value: impl Into<String>) -> CustomerResult<Self> {
        let now = Utc::now();
        Self::build(value, DocumentType::Legal, now, now)
    }

    /// Rehydrate a document from storage. The caller supplies the
    /// timestamps; the value is still re-validated.
    pub fn reconstruct(
        value: impl Into<String>,
        document_type: DocumentType,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> CustomerResult<Self> {
        Self::build(value, document_type, created_at, updated_at)
    }

    fn build(
        value: impl Into<String>,
        document_type: DocumentType,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> CustomerResult<Self> {
        let document = Self {
            value: value.into().trim().to_string(),
            document_type,
            created_at,
            updated_at,
        };
        document.validate()?;
        Ok(document)
    }

    fn validate(&self) -> CustomerResult<()> {
        let len = self.value.chars().count();
        let mut violations = Violations::new();

        violations.check(
            "document",
            len >= 11,
            "Document must have at least 11 characters.",
        );
        violations.check(
            "document",
            len <= 14,
            "Document must have at most 14 characters.",
        );
        violations.check(
            "document",
            len == self.document_type.expected_len(),
            "Document must have 11 characters for INDIVIDUAL and 14 characters for LEGAL.",
        );
        violations.check(
            "created_at",
            self.created_at <= self.updated_at,
            "created_at must be less than or equal to updated_at.",
        );

        violations.finish()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
