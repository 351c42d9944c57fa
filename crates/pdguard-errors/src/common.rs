//! Top-level error type returned by the hook, plus classification helpers.

use core::fmt;

use crate::{AttributeError, BusinessRuleViolation, StoreError};

/// Error returned to the host pipeline.
///
/// A [`HookError::BusinessRule`] aborts persistence with a message meant for
/// the end user. Every other failure is collapsed into
/// [`HookError::Unexpected`], whose message carries the original cause behind
/// a fixed prefix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HookError {
    /// Expected, user-facing rule violation
    #[error(transparent)]
    BusinessRule(#[from] BusinessRuleViolation),

    /// Any other failure raised while processing
    #[error("error processing validations: {message}")]
    Unexpected {
        /// Message of the original failure
        message: String,
    },
}

impl HookError {
    /// Wrap an unexpected failure.
    pub fn unexpected(message: impl Into<String>) -> Self {
        HookError::Unexpected {
            message: message.into(),
        }
    }

    /// Get the error category for classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            HookError::BusinessRule(_) => ErrorCategory::BusinessRule,
            HookError::Unexpected { .. } => ErrorCategory::Unexpected,
        }
    }

    /// Get the error severity level.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            HookError::BusinessRule(e) => e.severity(),
            HookError::Unexpected { .. } => ErrorSeverity::Critical,
        }
    }

    /// Whether the host may show this message to the end user as-is.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, HookError::BusinessRule(_))
    }

    /// The business-rule violation, if this is one.
    pub fn as_business_rule(&self) -> Option<&BusinessRuleViolation> {
        match self {
            HookError::BusinessRule(v) => Some(v),
            HookError::Unexpected { .. } => None,
        }
    }
}

/// Failure raised inside the hook before it has been classified.
///
/// Converting into [`HookError`] keeps business rules intact and wraps the
/// rest.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProcessError {
    /// Duplicate identity document
    #[error(transparent)]
    BusinessRule(#[from] BusinessRuleViolation),

    /// Store or store-factory failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Attribute held a value of the wrong type
    #[error(transparent)]
    Attribute(#[from] AttributeError),
}

impl ProcessError {
    /// Whether this failure is an expected business-rule violation.
    pub fn is_business_rule(&self) -> bool {
        matches!(self, ProcessError::BusinessRule(_))
    }
}

impl From<ProcessError> for HookError {
    fn from(err: ProcessError) -> Self {
        match err {
            ProcessError::BusinessRule(v) => HookError::BusinessRule(v),
            other => HookError::unexpected(other.to_string()),
        }
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Duplicate identity document or another business rule
    BusinessRule = 0,
    /// Store, attribute or any other unexpected failure
    Unexpected = 1,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::BusinessRule => write!(f, "BusinessRule"),
            ErrorCategory::Unexpected => write!(f, "Unexpected"),
        }
    }
}

/// Error severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ErrorSeverity {
    /// Informational, no action required
    Info = 0,
    /// Warning, may require attention
    Warning = 1,
    /// Error, operation failed
    Error = 2,
    /// Critical, a collaborator is misbehaving
    Critical = 3,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
