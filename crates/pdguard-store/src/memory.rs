//! In-memory record store.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use pdguard_errors::StoreError;
use pdguard_schemas::{AttributeValue, Attributes, Entity};
use tracing::{debug, trace};
use uuid::Uuid;

use crate::Result;
use crate::query::{Condition, ConditionOperator, FilterExpression, LogicalOperator, QueryExpression};
use crate::service::{RecordStore, ServiceFactory};

type Table = BTreeMap<Uuid, Entity>;

/// Thread-safe record store kept entirely in memory.
///
/// Records are grouped by lower-cased logical name. The primary key of a
/// record type `x` is exposed to filters as the attribute `xid`.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<BTreeMap<String, Table>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `records`.
    ///
    /// # Errors
    ///
    /// Fails like [`InMemoryStore::create`] on duplicate identifiers.
    pub fn seeded(records: impl IntoIterator<Item = Entity>) -> Result<Self> {
        let store = Self::new();
        for record in records {
            store.create(record)?;
        }
        Ok(store)
    }

    /// Insert a new record, assigning an identifier when it has none.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Rejected`] when a record with the same
    /// identifier already exists.
    pub fn create(&self, mut entity: Entity) -> Result<Uuid> {
        let id = *entity.id.get_or_insert_with(Uuid::new_v4);
        let mut tables = self.tables.write();
        let table = tables.entry(table_key(&entity.logical_name)).or_default();
        if table.contains_key(&id) {
            return Err(StoreError::rejected(format!(
                "record {id} of type '{}' already exists",
                entity.logical_name
            )));
        }
        debug!(entity = %entity.logical_name, %id, "Record created");
        table.insert(id, entity);
        Ok(id)
    }

    /// Fetch a full record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for unknown identifiers.
    pub fn retrieve(&self, logical_name: &str, id: Uuid) -> Result<Entity> {
        self.tables
            .read()
            .get(&table_key(logical_name))
            .and_then(|table| table.get(&id))
            .cloned()
            .ok_or_else(|| StoreError::not_found(logical_name, id))
    }

    /// Every record of a type, ordered by identifier.
    pub fn records(&self, logical_name: &str) -> Vec<Entity> {
        self.tables
            .read()
            .get(&table_key(logical_name))
            .map(|table| table.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of records of a type.
    pub fn len(&self, logical_name: &str) -> usize {
        self.tables
            .read()
            .get(&table_key(logical_name))
            .map_or(0, BTreeMap::len)
    }

    /// Whether the store holds no record of the type.
    pub fn is_empty(&self, logical_name: &str) -> bool {
        self.len(logical_name) == 0
    }
}

impl RecordStore for InMemoryStore {
    fn retrieve_multiple(&self, query: &QueryExpression) -> Result<Vec<Entity>> {
        let tables = self.tables.read();
        let Some(table) = tables.get(&table_key(&query.entity_name)) else {
            return Ok(Vec::new());
        };

        let limit = query.top_count.unwrap_or(usize::MAX);
        let found: Vec<Entity> = table
            .values()
            .filter(|record| filter_matches(&query.criteria, record))
            .take(limit)
            .map(|record| project(record, &query.columns))
            .collect();

        trace!(entity = %query.entity_name, matches = found.len(), "Query evaluated");
        Ok(found)
    }

    fn update(&self, entity: &Entity) -> Result<()> {
        let id = entity
            .id
            .ok_or_else(|| StoreError::rejected("update requires a record identifier"))?;
        let mut tables = self.tables.write();
        let record = tables
            .get_mut(&table_key(&entity.logical_name))
            .and_then(|table| table.get_mut(&id))
            .ok_or_else(|| StoreError::not_found(&entity.logical_name, id))?;
        record.attributes.merge(&entity.attributes);
        debug!(entity = %entity.logical_name, %id, fields = entity.attributes.len(), "Record updated");
        Ok(())
    }
}

impl ServiceFactory for InMemoryStore {
    fn create_service(&self, _user_id: Uuid) -> Result<Box<dyn RecordStore + '_>> {
        Ok(Box::new(self))
    }
}

fn table_key(logical_name: &str) -> String {
    logical_name.to_ascii_lowercase()
}

fn primary_key_attribute(record: &Entity) -> String {
    format!("{}id", table_key(&record.logical_name))
}

fn attribute_value(record: &Entity, attribute: &str) -> Option<AttributeValue> {
    if attribute.eq_ignore_ascii_case(&primary_key_attribute(record)) {
        return record.id.map(AttributeValue::Guid);
    }
    match record.attributes.get(attribute) {
        None | Some(AttributeValue::Null) => None,
        Some(value) => Some(value.clone()),
    }
}

// Null never compares equal or unequal to anything.
fn condition_matches(condition: &Condition, record: &Entity) -> bool {
    let Some(stored) = attribute_value(record, &condition.attribute) else {
        return false;
    };
    match condition.operator {
        ConditionOperator::Equal => stored == condition.value,
        ConditionOperator::NotEqual => stored != condition.value,
    }
}

fn filter_matches(filter: &FilterExpression, record: &Entity) -> bool {
    if filter.is_empty() {
        return true;
    }
    let mut members = filter
        .conditions
        .iter()
        .map(|c| condition_matches(c, record))
        .chain(filter.filters.iter().map(|f| filter_matches(f, record)));
    match filter.operator {
        LogicalOperator::And => members.all(|m| m),
        LogicalOperator::Or => members.any(|m| m),
    }
}

fn project(record: &Entity, columns: &[String]) -> Entity {
    if columns.is_empty() {
        return record.clone();
    }
    let attributes: Attributes = record
        .attributes
        .iter()
        .filter(|(name, _)| columns.iter().any(|c| c.as_str() == *name))
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect();
    Entity {
        logical_name: record.logical_name.clone(),
        id: record.id,
        attributes,
    }
}
