//! Property-based tests for error classification.

use pdguard_errors::{
    BusinessRuleViolation, ErrorCategory, HookError, ProcessError, StoreError,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_business_rule_message_names_field(label in "[a-zA-Z]{1,24}") {
        let err: HookError = ProcessError::from(BusinessRuleViolation::duplicate(&label)).into();
        prop_assert!(err.is_user_facing());
        prop_assert_eq!(err.category(), ErrorCategory::BusinessRule);
        prop_assert!(err.to_string().contains(&label));
    }

    #[test]
    fn test_unexpected_message_keeps_cause(cause in "[a-zA-Z0-9 ]{0,40}") {
        let err: HookError = ProcessError::from(StoreError::unavailable(&cause)).into();
        prop_assert!(!err.is_user_facing());
        let msg = err.to_string();
        prop_assert!(msg.starts_with("error processing validations: "));
        prop_assert!(msg.ends_with(&cause));
    }

    #[test]
    fn test_category_consistency(code in 0u8..=3u8) {
        let err: HookError = match code {
            0 => BusinessRuleViolation::duplicate("nationalID").into(),
            1 => ProcessError::from(StoreError::rejected("x")).into(),
            2 => ProcessError::from(StoreError::not_found("e", "1")).into(),
            _ => HookError::unexpected("y"),
        };
        let expected = if code == 0 { ErrorCategory::BusinessRule } else { ErrorCategory::Unexpected };
        prop_assert_eq!(err.category(), expected);
        prop_assert_eq!(err.as_business_rule().is_some(), code == 0);
    }
}
