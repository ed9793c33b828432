//! Domain-level errors.
//!
//! These errors represent business rule violations and lookups that miss.
//! They are independent of infrastructure concerns (HTTP, serialization).

use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// One field that failed its declared constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldViolation {
    /// Name of the offending field
    pub field: String,
    /// Human readable reason
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// One or more fields failed validation
    #[error("Validation error: {}", describe(.0))]
    Validation(Vec<FieldViolation>),

    /// Entity not found
    #[error("{0}")]
    NotFound(String),
}

impl DomainError {
    /// Create a validation error for a single field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DomainError::Validation(vec![FieldViolation::new(field, message)])
    }

    /// Create a not found error for a record of the given kind
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        DomainError::NotFound(format!("{} with ID {} not found", entity, id))
    }

    /// Names of the fields that failed validation (empty for other kinds)
    pub fn fields(&self) -> Vec<&str> {
        match self {
            DomainError::Validation(violations) => {
                violations.iter().map(|v| v.field.as_str()).collect()
            }
            DomainError::NotFound(_) => Vec::new(),
        }
    }
}

fn describe(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        let mut violations: Vec<FieldViolation> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field));
                    FieldViolation::new(field.to_string(), message)
                })
            })
            .collect();

        // field_errors() is backed by a HashMap
        violations.sort_by(|a, b| a.field.cmp(&b.field));
        DomainError::Validation(violations)
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
