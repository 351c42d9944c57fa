//! Store doubles.

use parking_lot::Mutex;
use pdguard_errors::StoreError;
use pdguard_schemas::Entity;
use pdguard_store::{QueryExpression, RecordStore, ServiceFactory};
use uuid::Uuid;

/// Wraps a store and records every call that goes through it.
pub struct RecordingStore<S> {
    inner: S,
    queries: Mutex<Vec<QueryExpression>>,
    updates: Mutex<Vec<Entity>>,
    users: Mutex<Vec<Uuid>>,
}

impl<S: RecordStore> RecordingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            queries: Mutex::new(Vec::new()),
            updates: Mutex::new(Vec::new()),
            users: Mutex::new(Vec::new()),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn queries(&self) -> Vec<QueryExpression> {
        self.queries.lock().clone()
    }

    pub fn updates(&self) -> Vec<Entity> {
        self.updates.lock().clone()
    }

    /// Identities passed to [`ServiceFactory::create_service`].
    pub fn users(&self) -> Vec<Uuid> {
        self.users.lock().clone()
    }

    pub fn factory_calls(&self) -> usize {
        self.users.lock().len()
    }

    pub fn total_calls(&self) -> usize {
        self.queries.lock().len() + self.updates.lock().len()
    }
}

impl<S: RecordStore> RecordStore for RecordingStore<S> {
    fn retrieve_multiple(&self, query: &QueryExpression) -> Result<Vec<Entity>, StoreError> {
        self.queries.lock().push(query.clone());
        self.inner.retrieve_multiple(query)
    }

    fn update(&self, entity: &Entity) -> Result<(), StoreError> {
        self.updates.lock().push(entity.clone());
        self.inner.update(entity)
    }
}

impl<S: RecordStore> ServiceFactory for RecordingStore<S> {
    fn create_service(&self, user_id: Uuid) -> Result<Box<dyn RecordStore + '_>, StoreError> {
        self.users.lock().push(user_id);
        Ok(Box::new(self))
    }
}

/// A store that fails every call, or fails to be created at all.
pub struct FailingStore {
    error: StoreError,
    fail_factory: bool,
}

impl FailingStore {
    /// Every query and update returns `error`.
    pub fn new(error: StoreError) -> Self {
        Self {
            error,
            fail_factory: false,
        }
    }

    /// [`ServiceFactory::create_service`] itself fails.
    pub fn factory_failure(msg: &str) -> Self {
        Self {
            error: StoreError::Factory(msg.to_string()),
            fail_factory: true,
        }
    }
}

impl RecordStore for FailingStore {
    fn retrieve_multiple(&self, _query: &QueryExpression) -> Result<Vec<Entity>, StoreError> {
        Err(self.error.clone())
    }

    fn update(&self, _entity: &Entity) -> Result<(), StoreError> {
        Err(self.error.clone())
    }
}

impl ServiceFactory for FailingStore {
    fn create_service(&self, _user_id: Uuid) -> Result<Box<dyn RecordStore + '_>, StoreError> {
        if self.fail_factory {
            return Err(self.error.clone());
        }
        Ok(Box::new(self))
    }
}
