//! Execution pipeline.

use std::fmt;

use pdguard_errors::StoreError;
use pdguard_hook::PreOperationHook;
use pdguard_schemas::{Entity, ExecutionContext};
use pdguard_store::{InMemoryStore, RecordStore};
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use crate::error::PipelineError;
use crate::operation::Operation;
use crate::scoped::ScopedServices;

/// Deepest nesting level the pipeline accepts.
///
/// Hooks are expected to stop re-entering long before this; anything deeper
/// is treated as runaway recursion.
pub const MAX_PIPELINE_DEPTH: u32 = 8;

/// Runs registered pre-operation hooks, then persists the target.
///
/// Every write starts at depth 1. Writes issued by hooks through the
/// services they are handed run through the same hooks at the next depth.
#[derive(Default)]
pub struct ExecutionPipeline {
    store: InMemoryStore,
    hooks: Vec<Box<dyn PreOperationHook>>,
}

impl ExecutionPipeline {
    /// Create a pipeline over `store` with no hooks.
    pub fn new(store: InMemoryStore) -> Self {
        Self {
            store,
            hooks: Vec::new(),
        }
    }

    /// Register a hook; hooks run in registration order.
    pub fn with_hook(mut self, hook: impl PreOperationHook + 'static) -> Self {
        self.register(hook);
        self
    }

    /// Register a hook after construction.
    pub fn register(&mut self, hook: impl PreOperationHook + 'static) {
        debug!(hook = hook.name(), "Hook registered");
        self.hooks.push(Box::new(hook));
    }

    /// Names of the registered hooks, in execution order.
    pub fn hook_names(&self) -> Vec<&str> {
        self.hooks.iter().map(|h| h.name()).collect()
    }

    /// Backing store.
    pub fn store(&self) -> &InMemoryStore {
        &self.store
    }

    /// Create `entity` on behalf of `user_id` and return its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Hook`] when a hook aborts the write and
    /// [`PipelineError::Store`] when the store refuses it.
    pub fn create(&self, user_id: Uuid, entity: Entity) -> Result<Uuid, PipelineError> {
        self.run(Operation::Create, 1, user_id, entity)
    }

    /// Merge `entity` into the stored record with the same identifier.
    ///
    /// The stored record is passed to hooks as the pre-operation snapshot.
    ///
    /// # Errors
    ///
    /// As [`ExecutionPipeline::create`]; additionally fails with
    /// [`StoreError::Rejected`] when `entity` has no identifier and
    /// [`StoreError::NotFound`] when no such record exists.
    pub fn update(&self, user_id: Uuid, entity: Entity) -> Result<Uuid, PipelineError> {
        self.run(Operation::Update, 1, user_id, entity)
    }

    /// Apply `operation` at an explicit depth.
    pub(crate) fn run(
        &self,
        operation: Operation,
        depth: u32,
        user_id: Uuid,
        target: Entity,
    ) -> Result<Uuid, PipelineError> {
        let span = info_span!(
            "pipeline",
            %operation,
            depth,
            entity = %target.logical_name,
        );
        let _entered = span.enter();

        if depth > MAX_PIPELINE_DEPTH {
            warn!(max = MAX_PIPELINE_DEPTH, "Pipeline depth exceeded, rejecting write");
            return Err(StoreError::rejected(format!(
                "maximum pipeline depth {MAX_PIPELINE_DEPTH} exceeded"
            ))
            .into());
        }

        let mut ctx = ExecutionContext::new(operation.into(), depth, user_id);
        if operation == Operation::Update {
            let id = target
                .id
                .ok_or_else(|| StoreError::rejected("update requires a record identifier"))?;
            let snapshot = self.store.retrieve(&target.logical_name, id)?;
            ctx = ctx.with_primary_entity_id(id).with_pre_image(snapshot);
        }
        ctx = ctx.with_target(target);

        let services = ScopedServices::new(self, depth);
        let mut last_hook = "";
        for hook in &self.hooks {
            last_hook = hook.name();
            debug!(hook = last_hook, "Running pre-operation hook");
            hook.execute(&mut ctx, &services)?;
        }

        let target = ctx.take_target().ok_or_else(|| PipelineError::TargetRemoved {
            hook: last_hook.to_string(),
        })?;
        let id = match operation {
            Operation::Create => self.store.create(target)?,
            Operation::Update => {
                self.store.update(&target)?;
                ctx.primary_entity_id
            }
        };
        info!(%id, "Record persisted");
        Ok(id)
    }
}

impl fmt::Debug for ExecutionPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionPipeline")
            .field("store", &self.store)
            .field("hooks", &self.hook_names())
            .finish()
    }
}
