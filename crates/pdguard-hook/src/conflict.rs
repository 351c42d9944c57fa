//! Duplicate detection for identity fields.
//!
//! A conflict is any *other* record whose stored value equals either the
//! normalized submission or, when it differs, the raw submission. Matching
//! the raw form catches legacy records that were stored with a mask.

use pdguard_errors::StoreError;
use pdguard_schemas::fields::{PERSONAL_DATA_ENTITY, PERSONAL_DATA_ID};
use pdguard_store::{ConditionOperator, FilterExpression, LogicalOperator, QueryExpression, RecordStore};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::field::IdentityField;

/// Build the duplicate-detection query, or `None` when neither value is
/// usable.
///
/// `exclude` removes the record being edited from the match set.
pub fn conflict_query(
    field: &IdentityField,
    normalized: Option<&str>,
    raw: Option<&str>,
    exclude: Option<Uuid>,
) -> Option<QueryExpression> {
    let mut any_of = FilterExpression::new(LogicalOperator::Or);
    if let Some(normalized) = normalized.filter(|v| !v.is_empty()) {
        any_of.add_condition(field.attribute, ConditionOperator::Equal, normalized);
    }
    if let Some(raw) = raw.filter(|v| !v.is_empty())
        && normalized != Some(raw)
    {
        any_of.add_condition(field.attribute, ConditionOperator::Equal, raw);
    }
    if any_of.is_empty() {
        return None;
    }

    let mut query = QueryExpression::new(PERSONAL_DATA_ENTITY)
        .with_columns([field.attribute])
        .with_top_count(1);
    query.criteria.add_filter(any_of);
    if let Some(id) = exclude {
        query
            .criteria
            .add_condition(PERSONAL_DATA_ID, ConditionOperator::NotEqual, id);
    }
    Some(query)
}

/// Runs duplicate-detection queries against a store.
pub struct ConflictDetector<'a> {
    store: &'a dyn RecordStore,
}

impl<'a> ConflictDetector<'a> {
    /// Create a detector over `store`.
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self { store }
    }

    /// Whether another record already holds the value.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn find_conflict(
        &self,
        field: &IdentityField,
        normalized: Option<&str>,
        raw: Option<&str>,
        exclude: Option<Uuid>,
    ) -> Result<bool, StoreError> {
        let Some(query) = conflict_query(field, normalized, raw, exclude) else {
            debug!(field = field.label, "No usable value to search, skipping duplicate check");
            return Ok(false);
        };
        let found = !self.store.retrieve_multiple(&query)?.is_empty();
        if found {
            warn!(field = field.label, "Duplicate found, aborting operation");
        }
        Ok(found)
    }
}
