//! Convenience re-exports.

pub use crate::attributes::{AttributeValue, Attributes};
pub use crate::context::{
    ExecutionContext, InputParameters, MessageName, OperationContext, ParameterValue,
};
pub use crate::entity::Entity;
pub use crate::fields::*;
