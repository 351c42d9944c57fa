//! Failures raised by the record store and by typed attribute access.

use crate::common::ErrorSeverity;

/// Errors reported by a record store or the factory that creates it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or answered with a transport failure.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The addressed record does not exist.
    #[error("record {id} of type '{entity}' not found")]
    NotFound {
        /// Logical name of the record type
        entity: String,
        /// Record identifier
        id: String,
    },

    /// The store refused the operation.
    #[error("store rejected the operation: {0}")]
    Rejected(String),

    /// A store service could not be created for the acting identity.
    #[error("failed to create store service: {0}")]
    Factory(String),
}

impl StoreError {
    /// Create an unavailable error.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        StoreError::Unavailable(msg.into())
    }

    /// Create a not-found error.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Create a rejected error.
    pub fn rejected(msg: impl Into<String>) -> Self {
        StoreError::Rejected(msg.into())
    }

    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            StoreError::Unavailable(_) | StoreError::Factory(_) => ErrorSeverity::Critical,
            StoreError::NotFound { .. } | StoreError::Rejected(_) => ErrorSeverity::Error,
        }
    }
}

/// Errors raised while reading a typed value out of an attribute bag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
    /// The attribute exists but holds a value of another type.
    #[error("attribute '{attribute}' has type {actual}, expected {expected}")]
    TypeMismatch {
        /// Attribute name
        attribute: String,
        /// Requested type
        expected: &'static str,
        /// Stored type
        actual: &'static str,
    },
}

impl AttributeError {
    /// Create a type mismatch error.
    pub fn type_mismatch(
        attribute: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        AttributeError::TypeMismatch {
            attribute: attribute.into(),
            expected,
            actual,
        }
    }
}
