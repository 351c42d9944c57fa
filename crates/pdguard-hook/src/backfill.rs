//! Corrective updates that write the digits-only form back to the stored record.

use pdguard_errors::StoreError;
use pdguard_schemas::Entity;
use pdguard_schemas::fields::PERSONAL_DATA_ENTITY;
use pdguard_store::RecordStore;
use uuid::Uuid;

use crate::field::IdentityField;

/// Issues single-attribute updates against the governed record type.
///
/// The update goes through the host like any other write, so it re-enters
/// the hook one level deeper, where the depth check stops it.
pub struct BackfillUpdater<'a> {
    store: &'a dyn RecordStore,
}

impl<'a> BackfillUpdater<'a> {
    /// Create an updater over `store`.
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self { store }
    }

    /// Set `field` to `normalized` on record `target_id`.
    ///
    /// # Errors
    ///
    /// Propagates store failures. Updates already issued for earlier fields
    /// are not undone.
    pub fn backfill(
        &self,
        target_id: Uuid,
        field: &IdentityField,
        normalized: &str,
    ) -> Result<(), StoreError> {
        let patch = Entity::new(PERSONAL_DATA_ENTITY)
            .with_id(target_id)
            .with_attribute(field.attribute, normalized);
        self.store.update(&patch)
    }
}
