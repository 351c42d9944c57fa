//! Record store interfaces for the personal-data validation hook.
//!
//! The hook never talks to a concrete database. It receives a
//! [`ServiceFactory`] from the host, asks it for a [`RecordStore`] bound to
//! the acting identity, and issues two kinds of calls:
//!
//! - [`RecordStore::retrieve_multiple`] with a [`QueryExpression`] capped to
//!   one result, to detect duplicates
//! - [`RecordStore::update`] with a partial [`Entity`](pdguard_schemas::Entity),
//!   to backfill normalized values
//!
//! [`InMemoryStore`] implements both traits and backs the host pipeline,
//! the replay CLI and the test suite.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod memory;
pub mod prelude;
pub mod query;
pub mod service;

pub use memory::InMemoryStore;
pub use query::{Condition, ConditionOperator, FilterExpression, LogicalOperator, QueryExpression};
pub use service::{RecordStore, ServiceFactory};

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, pdguard_errors::StoreError>;
