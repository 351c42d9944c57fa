//! In-process execution pipeline for pre-operation hooks.
//!
//! [`ExecutionPipeline`] plays the role of the host platform: it owns an
//! [`InMemoryStore`](pdguard_store::InMemoryStore), runs every registered
//! [`PreOperationHook`](pdguard_hook::PreOperationHook) before a create or
//! update is persisted, and hands hooks a [`ScopedServices`] factory.
//!
//! Updates issued through those services re-enter the pipeline one level
//! deeper, so a hook that writes back to the record it is validating sees
//! its own write again at depth 2. Writes deeper than
//! [`MAX_PIPELINE_DEPTH`] are rejected.
//!
//! # Example
//!
//! ```
//! use pdguard_hook::prelude::*;
//! use pdguard_host::prelude::*;
//! use pdguard_schemas::prelude::*;
//! use uuid::Uuid;
//!
//! let pipeline = ExecutionPipeline::default()
//!     .with_hook(PersonalDataHook::new(HookConfig::default()));
//!
//! let record = Entity::new(PERSONAL_DATA_ENTITY).with_attribute(STATE_ID, "12.345.678-9");
//! let id = pipeline.create(Uuid::new_v4(), record)?;
//!
//! let stored = pipeline.store().retrieve(PERSONAL_DATA_ENTITY, id)?;
//! assert_eq!(stored.attributes.text(STATE_ID), Ok(Some("123456789")));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod error;
pub mod operation;
pub mod pipeline;
pub mod prelude;
pub mod scoped;

pub use error::PipelineError;
pub use operation::Operation;
pub use pipeline::{ExecutionPipeline, MAX_PIPELINE_DEPTH};
pub use scoped::{ScopedServices, ScopedStore};
