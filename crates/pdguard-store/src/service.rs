//! Store service traits handed to the hook by the host.

use pdguard_schemas::Entity;
use uuid::Uuid;

use crate::Result;
use crate::query::QueryExpression;

/// Point queries and partial updates against the record store.
pub trait RecordStore {
    /// Run a query and return the matching records, at most
    /// `query.top_count` of them.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`](pdguard_errors::StoreError) when the store
    /// cannot answer.
    fn retrieve_multiple(&self, query: &QueryExpression) -> Result<Vec<Entity>>;

    /// Set the attributes present on `entity` for the record `entity.id`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`](pdguard_errors::StoreError) when the record is
    /// missing or the store refuses the write.
    fn update(&self, entity: &Entity) -> Result<()>;
}

impl<T: RecordStore + ?Sized> RecordStore for &T {
    fn retrieve_multiple(&self, query: &QueryExpression) -> Result<Vec<Entity>> {
        (**self).retrieve_multiple(query)
    }

    fn update(&self, entity: &Entity) -> Result<()> {
        (**self).update(entity)
    }
}

impl<T: RecordStore + ?Sized> RecordStore for Box<T> {
    fn retrieve_multiple(&self, query: &QueryExpression) -> Result<Vec<Entity>> {
        (**self).retrieve_multiple(query)
    }

    fn update(&self, entity: &Entity) -> Result<()> {
        (**self).update(entity)
    }
}

/// Creates store services that act on behalf of a given identity.
pub trait ServiceFactory {
    /// Create a service for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Factory`](pdguard_errors::StoreError::Factory)
    /// when no service can be created for the identity.
    fn create_service(&self, user_id: Uuid) -> Result<Box<dyn RecordStore + '_>>;
}
