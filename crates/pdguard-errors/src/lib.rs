//! Error taxonomy for the personal-data validation hook.
//!
//! The hook distinguishes three outcomes that are not a plain success:
//!
//! - skip conditions, which are not errors at all and never reach this crate
//! - [`BusinessRuleViolation`]: a duplicate identity document, surfaced to the
//!   end user verbatim
//! - everything else, wrapped into [`HookError::Unexpected`]
//!
//! # Modules
//!
//! - [`common`]: the top-level [`HookError`] plus classification helpers
//! - [`business`]: user-facing business-rule violations
//! - [`store`]: failures raised by the record store and the attribute bag
//!
//! # Example
//!
//! ```
//! use pdguard_errors::prelude::*;
//!
//! let err: HookError = BusinessRuleViolation::duplicate("nationalID").into();
//! assert!(err.is_user_facing());
//! assert_eq!(err.to_string(), "a record with this nationalID already exists");
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod business;
pub mod common;
pub mod prelude;
pub mod store;

pub use business::BusinessRuleViolation;
pub use common::{ErrorCategory, ErrorSeverity, HookError, ProcessError};
pub use store::{AttributeError, StoreError};

/// Result type returned by the hook entry point.
pub type Result<T> = std::result::Result<T, HookError>;

/// Result type used inside the hook before errors are classified.
pub type ProcessResult<T = ()> = std::result::Result<T, ProcessError>;
