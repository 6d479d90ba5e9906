//! Rule-table validation shared by the Customer entity and the Document
//! value object.
//!
//! Every entity runs its full rule list on construction and on every
//! mutation. All fields are checked in one pass; the first failing rule
//! per field is recorded, and the pass either succeeds or fails with a
//! single [`CustomerError::Validation`] whose message aggregates every
//! violated field as `field: message` pairs joined by `"; "`.

use crate::error::{CustomerError, CustomerResult};

/// Collector for validation rule violations.
#[derive(Debug, Default)]
pub struct Violations {
    entries: Vec<(&'static str, String)>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation for `field` unless the field already failed an
    /// earlier rule. Rules for a field must be checked in order of
    /// precedence.
    pub fn check(&mut self, field: &'static str, ok: bool, message: impl Into<String>) {
        if ok {
            return;
        }
        if self.entries.iter().any(|(existing, _)| *existing == field) {
            return;
        }
        self.entries.push((field, message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finish the pass: `Ok(())` when no rule was violated, otherwise a
    /// validation error aggregating every violation.
    pub fn finish(self) -> CustomerResult<()> {
        if self.entries.is_empty() {
            return Ok(());
        }

        let message = self
            .entries
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join("; ");

        Err(CustomerError::Validation(message))
    }
}
