//! Convenience re-exports.

pub use crate::memory::InMemoryStore;
pub use crate::query::{
    Condition, ConditionOperator, FilterExpression, LogicalOperator, QueryExpression,
};
pub use crate::service::{RecordStore, ServiceFactory};
pub use pdguard_errors::StoreError;
