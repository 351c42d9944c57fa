//! Store services handed to hooks.
//!
//! Queries go straight to the pipeline's store. Updates are treated like
//! any other write: they re-enter the pipeline one level deeper, so
//! registered hooks see them with an incremented depth.

use pdguard_errors::StoreError;
use pdguard_schemas::Entity;
use pdguard_store::{QueryExpression, RecordStore, ServiceFactory};
use tracing::debug;
use uuid::Uuid;

use crate::operation::Operation;
use crate::pipeline::ExecutionPipeline;

/// Factory bound to the depth of the invocation it is handed to.
#[derive(Debug, Clone, Copy)]
pub struct ScopedServices<'p> {
    pipeline: &'p ExecutionPipeline,
    depth: u32,
}

impl<'p> ScopedServices<'p> {
    pub(crate) fn new(pipeline: &'p ExecutionPipeline, depth: u32) -> Self {
        Self { pipeline, depth }
    }

    /// Depth of the invocation these services belong to.
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl ServiceFactory for ScopedServices<'_> {
    fn create_service(&self, user_id: Uuid) -> Result<Box<dyn RecordStore + '_>, StoreError> {
        Ok(Box::new(ScopedStore {
            pipeline: self.pipeline,
            depth: self.depth,
            user_id,
        }))
    }
}

/// Store service acting on behalf of one identity at one depth.
#[derive(Debug)]
pub struct ScopedStore<'p> {
    pipeline: &'p ExecutionPipeline,
    depth: u32,
    user_id: Uuid,
}

impl RecordStore for ScopedStore<'_> {
    fn retrieve_multiple(&self, query: &QueryExpression) -> Result<Vec<Entity>, StoreError> {
        self.pipeline.store().retrieve_multiple(query)
    }

    fn update(&self, entity: &Entity) -> Result<(), StoreError> {
        let depth = self.depth.saturating_add(1);
        debug!(entity = %entity.logical_name, depth, "Nested update re-entering pipeline");
        self.pipeline
            .run(Operation::Update, depth, self.user_id, entity.clone())
            .map(|_| ())
            .map_err(StoreError::from)
    }
}
