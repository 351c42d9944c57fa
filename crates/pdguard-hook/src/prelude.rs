//! Convenience re-exports.

pub use crate::config::HookConfig;
pub use crate::field::{
    IDENTITY_FIELDS, IdentityField, LICENSE_NUMBER_FIELD, NATIONAL_ID_FIELD, STATE_ID_FIELD,
};
pub use crate::hook::{PersonalDataHook, PreOperationHook};
pub use crate::normalize::normalize_digits;
pub use pdguard_errors::{BusinessRuleViolation, HookError};
