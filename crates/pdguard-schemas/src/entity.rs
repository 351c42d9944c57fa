//! Record payloads.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attributes::{AttributeValue, Attributes};

/// One record of a given type, as submitted to or read from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Logical name of the record type
    pub logical_name: String,
    /// Record identifier; absent on create
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Attribute bag
    #[serde(default)]
    pub attributes: Attributes,
}

impl Entity {
    /// Create an empty record of the given type.
    pub fn new(logical_name: impl Into<String>) -> Self {
        Self {
            logical_name: logical_name.into(),
            id: None,
            attributes: Attributes::new(),
        }
    }

    /// Set the record identifier.
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Set an attribute.
    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Whether the record is of the given type, compared ASCII
    /// case-insensitively the way the host compares logical names.
    pub fn is_type(&self, logical_name: &str) -> bool {
        self.logical_name.eq_ignore_ascii_case(logical_name)
    }

    /// Whether the attribute key is present.
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }
}
