//! Snapshot tests for error message formatting.
//!
//! Business-rule messages reach end users verbatim, so their wording is pinned
//! here.

use pdguard_errors::{AttributeError, BusinessRuleViolation, HookError, ProcessError, StoreError};

mod business_rule_snapshots {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_duplicate_national_id() {
        assert_snapshot!(
            BusinessRuleViolation::duplicate("nationalID").to_string(),
            @"a record with this nationalID already exists"
        );
    }

    #[test]
    fn test_duplicate_state_id() {
        assert_snapshot!(
            BusinessRuleViolation::duplicate("stateID").to_string(),
            @"a record with this stateID already exists"
        );
    }

    #[test]
    fn test_duplicate_license_number() {
        assert_snapshot!(
            BusinessRuleViolation::duplicate("licenseNumber").to_string(),
            @"a record with this licenseNumber already exists"
        );
    }
}

mod wrapped_snapshots {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_wrapped_store_unavailable() {
        let err: HookError = ProcessError::from(StoreError::unavailable("timeout")).into();
        assert_snapshot!(err.to_string(), @"error processing validations: store unavailable: timeout");
    }

    #[test]
    fn test_wrapped_type_mismatch() {
        let err: HookError =
            ProcessError::from(AttributeError::type_mismatch("tr_rgdadospessoais", "text", "boolean"))
                .into();
        assert_snapshot!(
            err.to_string(),
            @"error processing validations: attribute 'tr_rgdadospessoais' has type boolean, expected text"
        );
    }

    #[test]
    fn test_wrapped_factory_failure() {
        let err: HookError = ProcessError::from(StoreError::Factory("no identity".into())).into();
        assert_snapshot!(
            err.to_string(),
            @"error processing validations: failed to create store service: no identity"
        );
    }
}
