//! Pipeline errors.

use pdguard_errors::{BusinessRuleViolation, HookError, StoreError};
use thiserror::Error;

/// Why an operation submitted to the pipeline was not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// A registered hook aborted the operation
    #[error(transparent)]
    Hook(#[from] HookError),

    /// Loading the pre-operation snapshot or persisting the target failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A hook removed the target from the invocation
    #[error("hook '{hook}' removed the target record")]
    TargetRemoved {
        /// Name of the last hook that ran
        hook: String,
    },
}

impl PipelineError {
    /// The business rule that rejected the operation, if any.
    pub fn as_business_rule(&self) -> Option<&BusinessRuleViolation> {
        match self {
            PipelineError::Hook(err) => err.as_business_rule(),
            _ => None,
        }
    }

    /// Whether the message is meant for the end user.
    pub fn is_user_facing(&self) -> bool {
        self.as_business_rule().is_some()
    }
}

/// Flatten a nested pipeline failure into the store error seen by the hook
/// that issued the nested update.
impl From<PipelineError> for StoreError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Store(inner) => inner,
            other => StoreError::rejected(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_rule_is_user_facing() {
        let err = PipelineError::from(HookError::from(BusinessRuleViolation::duplicate("stateID")));
        assert!(err.is_user_facing());
        assert_eq!(err.to_string(), "a record with this stateID already exists");
    }

    #[test]
    fn test_store_error_is_passed_through_unchanged() {
        let inner = StoreError::unavailable("down");
        let flattened = StoreError::from(PipelineError::Store(inner.clone()));
        assert_eq!(flattened, inner);
    }

    #[test]
    fn test_hook_error_becomes_rejection() {
        let err = PipelineError::Hook(HookError::unexpected("boom"));
        assert!(!err.is_user_facing());
        insta::assert_snapshot!(
            StoreError::from(err).to_string(),
            @"store rejected the operation: error processing validations: boom"
        );
    }
}
