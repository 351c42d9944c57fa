//! Shared test utilities for pdguard.
//!
//! # Modules
//!
//! - [`mod@must`] - Unwrap helpers with good error messages and `#[track_caller]`
//! - [`mock`] - Store doubles that record or fail every call
//! - [`fixtures`] - Record and invocation builders
//! - [`prelude`] - Convenience re-exports
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! pdguard-test-helpers = { workspace = true }
//! ```
//!
//! ```rust,ignore
//! use pdguard_test_helpers::prelude::*;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::unwrap_used, clippy::panic)]

pub mod must;
pub mod prelude;

#[cfg(feature = "mock")]
pub mod mock;

#[cfg(feature = "fixtures")]
pub mod fixtures;

pub use must::*;
