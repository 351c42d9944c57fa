//! Prelude module for convenient error handling imports.
//!
//! ```
//! use pdguard_errors::prelude::*;
//!
//! fn check(found: bool) -> ProcessResult {
//!     if found {
//!         return Err(BusinessRuleViolation::duplicate("licenseNumber").into());
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(false).is_ok());
//! assert!(matches!(check(true), Err(ProcessError::BusinessRule(_))));
//! ```

pub use crate::{
    ProcessResult, Result,
    business::BusinessRuleViolation,
    common::{ErrorCategory, ErrorSeverity, HookError, ProcessError},
    store::{AttributeError, StoreError},
};
