//! Convenience re-exports.

pub use crate::error::PipelineError;
pub use crate::operation::Operation;
pub use crate::pipeline::{ExecutionPipeline, MAX_PIPELINE_DEPTH};
