//! Business-rule violations.
//!
//! These are the only failures whose message is meant to be shown to the end
//! user unchanged.

use crate::common::ErrorSeverity;

/// A business rule enforced by the hook was broken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BusinessRuleViolation {
    /// Another record already carries the same identity document.
    #[error("a record with this {label} already exists")]
    Duplicate {
        /// Human-readable field label, e.g. `nationalID`
        label: String,
    },
}

impl BusinessRuleViolation {
    /// Create a duplicate-document violation for the given field label.
    pub fn duplicate(label: impl Into<String>) -> Self {
        BusinessRuleViolation::Duplicate {
            label: label.into(),
        }
    }

    /// The label of the field that triggered the violation.
    pub fn label(&self) -> &str {
        match self {
            BusinessRuleViolation::Duplicate { label } => label,
        }
    }

    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Error
    }
}
