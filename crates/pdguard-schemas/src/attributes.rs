//! Attribute values and the attribute bag carried by every record payload.

use std::collections::BTreeMap;

use pdguard_errors::AttributeError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single attribute value as the host transports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeValue {
    /// Explicit null: the key is present but carries no value
    Null,
    /// Free text
    Text(String),
    /// Whole number
    Integer(i64),
    /// Two-option value
    Boolean(bool),
    /// Identifier
    Guid(Uuid),
}

impl AttributeValue {
    /// Build a text value.
    pub fn text(value: impl Into<String>) -> Self {
        AttributeValue::Text(value.into())
    }

    /// Short type name, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::Null => "null",
            AttributeValue::Text(_) => "text",
            AttributeValue::Integer(_) => "integer",
            AttributeValue::Boolean(_) => "boolean",
            AttributeValue::Guid(_) => "guid",
        }
    }

    /// The text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<Uuid> for AttributeValue {
    fn from(value: Uuid) -> Self {
        AttributeValue::Guid(value)
    }
}

/// Attribute name to value map of one record.
///
/// Presence of a key is meaningful on its own: a key mapped to
/// [`AttributeValue::Null`] was still submitted by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, AttributeValue>);

impl Attributes {
    /// Create an empty attribute bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the key was submitted, regardless of its value.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Raw value lookup.
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.0.get(name)
    }

    /// Insert or overwrite a value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Remove a key, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
        self.0.remove(name)
    }

    /// Read a text attribute.
    ///
    /// Missing keys and explicit nulls both read as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::TypeMismatch`] when the key holds a non-text
    /// value.
    pub fn text(&self, name: &str) -> Result<Option<&str>, AttributeError> {
        match self.0.get(name) {
            None | Some(AttributeValue::Null) => Ok(None),
            Some(AttributeValue::Text(s)) => Ok(Some(s)),
            Some(other) => Err(AttributeError::type_mismatch(
                name,
                "text",
                other.type_name(),
            )),
        }
    }

    /// Copy every entry of `other` into `self`, overwriting existing keys.
    pub fn merge(&mut self, other: &Attributes) {
        for (name, value) in &other.0 {
            self.0.insert(name.clone(), value.clone());
        }
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<AttributeValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
