//! Typed host data model for the personal-data validation hook.
//!
//! The host pipeline hands the hook an open attribute bag per record. This
//! crate gives that bag a typed shape:
//!
//! - [`attributes`]: [`AttributeValue`] and the [`Attributes`] map, which
//!   keeps "is this key present" separate from "is the value blank"
//! - [`entity`]: a record payload ([`Entity`])
//! - [`context`]: the per-invocation [`ExecutionContext`]
//! - [`fields`]: fixed logical names of the governed record type

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod attributes;
pub mod context;
pub mod entity;
pub mod fields;
pub mod prelude;

pub use attributes::{AttributeValue, Attributes};
pub use context::{
    ExecutionContext, InputParameters, MessageName, OperationContext, ParameterValue,
};
pub use entity::Entity;
