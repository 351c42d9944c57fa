//! Per-invocation execution context supplied by the host pipeline.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attributes::AttributeValue;
use crate::entity::Entity;
use crate::fields::{PRE_IMAGE, TARGET};

/// The store message that triggered the invocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageName {
    /// A new record is being created
    Create,
    /// An existing record is being updated
    Update,
    /// Any other message the hook may be registered on by mistake
    Other(String),
}

impl MessageName {
    /// Host-side spelling of the message.
    pub fn as_str(&self) -> &str {
        match self {
            MessageName::Create => "Create",
            MessageName::Update => "Update",
            MessageName::Other(name) => name,
        }
    }

    /// Whether this is an update.
    pub fn is_update(&self) -> bool {
        matches!(self, MessageName::Update)
    }
}

impl FromStr for MessageName {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s.eq_ignore_ascii_case("create") {
            MessageName::Create
        } else if s.eq_ignore_ascii_case("update") {
            MessageName::Update
        } else {
            MessageName::Other(s.to_string())
        })
    }
}

impl fmt::Display for MessageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MessageName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MessageName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let Ok(name) = raw.parse::<MessageName>();
        Ok(name)
    }
}

/// A value passed in the invocation's input parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterValue {
    /// A full record payload
    Entity(Entity),
    /// A reference to a record, e.g. on delete
    EntityReference {
        /// Logical name of the referenced record type
        logical_name: String,
        /// Referenced identifier
        id: Uuid,
    },
    /// A scalar value
    Value(AttributeValue),
}

/// Named input parameters of an invocation.
pub type InputParameters = BTreeMap<String, ParameterValue>;

/// Scalar header of an invocation: what is happening, how deep, on whose
/// behalf and to which record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationContext {
    /// Triggering message
    pub message: MessageName,
    /// Nesting depth
    pub depth: u32,
    /// Acting identity
    pub user_id: Uuid,
    /// Record being written; `None` on create
    pub target_id: Option<Uuid>,
}

impl OperationContext {
    /// Whether the invocation is an update.
    pub fn is_update(&self) -> bool {
        self.message.is_update()
    }
}

/// Everything the host tells the hook about one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionContext {
    /// Triggering message
    pub message: MessageName,
    /// Nesting depth; 1 for a call made directly by a user
    pub depth: u32,
    /// Acting identity
    pub user_id: Uuid,
    /// Identifier of the record being written; nil on create
    #[serde(default)]
    pub primary_entity_id: Uuid,
    /// Input parameters, normally holding [`TARGET`]
    #[serde(default)]
    pub input_parameters: InputParameters,
    /// Pre-operation snapshots registered for this step
    #[serde(default)]
    pub pre_entity_images: BTreeMap<String, Entity>,
}

impl ExecutionContext {
    /// Create a context with no parameters and no snapshots.
    pub fn new(message: MessageName, depth: u32, user_id: Uuid) -> Self {
        Self {
            message,
            depth,
            user_id,
            primary_entity_id: Uuid::nil(),
            input_parameters: InputParameters::new(),
            pre_entity_images: BTreeMap::new(),
        }
    }

    /// Set the record being written.
    pub fn with_primary_entity_id(mut self, id: Uuid) -> Self {
        self.primary_entity_id = id;
        self
    }

    /// Put an entity under [`TARGET`].
    pub fn with_target(mut self, target: Entity) -> Self {
        self.input_parameters
            .insert(TARGET.to_string(), ParameterValue::Entity(target));
        self
    }

    /// Register the [`PRE_IMAGE`] snapshot.
    pub fn with_pre_image(mut self, snapshot: Entity) -> Self {
        self.pre_entity_images.insert(PRE_IMAGE.to_string(), snapshot);
        self
    }

    /// The record being written, or `None` when the nil id was supplied.
    pub fn target_id(&self) -> Option<Uuid> {
        (!self.primary_entity_id.is_nil()).then_some(self.primary_entity_id)
    }

    /// Copy of the scalar header.
    pub fn operation(&self) -> OperationContext {
        OperationContext {
            message: self.message.clone(),
            depth: self.depth,
            user_id: self.user_id,
            target_id: self.target_id(),
        }
    }

    /// The [`TARGET`] payload, if present and shaped as an entity.
    pub fn target(&self) -> Option<&Entity> {
        match self.input_parameters.get(TARGET) {
            Some(ParameterValue::Entity(entity)) => Some(entity),
            _ => None,
        }
    }

    /// Mutable access to the [`TARGET`] payload.
    pub fn target_mut(&mut self) -> Option<&mut Entity> {
        match self.input_parameters.get_mut(TARGET) {
            Some(ParameterValue::Entity(entity)) => Some(entity),
            _ => None,
        }
    }

    /// Take the [`TARGET`] payload out of the context.
    pub fn take_target(&mut self) -> Option<Entity> {
        match self.input_parameters.remove(TARGET) {
            Some(ParameterValue::Entity(entity)) => Some(entity),
            _ => None,
        }
    }

    /// The [`PRE_IMAGE`] snapshot, if the host registered one.
    pub fn pre_image(&self) -> Option<&Entity> {
        self.pre_entity_images.get(PRE_IMAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_name_parse_is_case_insensitive() {
        assert_eq!("UPDATE".parse::<MessageName>(), Ok(MessageName::Update));
        assert_eq!("create".parse::<MessageName>(), Ok(MessageName::Create));
        assert_eq!(
            "Delete".parse::<MessageName>(),
            Ok(MessageName::Other("Delete".into()))
        );
    }

    #[test]
    fn test_nil_primary_id_reads_as_absent() {
        let ctx = ExecutionContext::new(MessageName::Update, 1, Uuid::new_v4());
        assert_eq!(ctx.target_id(), None);
        let id = Uuid::new_v4();
        let ctx = ctx.with_primary_entity_id(id);
        assert_eq!(ctx.target_id(), Some(id));
        assert_eq!(ctx.operation().target_id, Some(id));
        assert!(ctx.operation().is_update());
    }

    #[test]
    fn test_target_requires_entity_shape() {
        let mut ctx = ExecutionContext::new(MessageName::Update, 1, Uuid::new_v4());
        ctx.input_parameters.insert(
            TARGET.to_string(),
            ParameterValue::EntityReference {
                logical_name: "tr_dadospessoais".into(),
                id: Uuid::new_v4(),
            },
        );
        assert!(ctx.target().is_none());
        assert!(ctx.target_mut().is_none());
    }

    #[test]
    fn test_context_json_roundtrip_shape() -> Result<(), serde_json::Error> {
        let json = r#"{
            "message": "update",
            "depth": 1,
            "user_id": "7c1d5a3e-1f9b-4b8e-9a55-2f4c8d1e0b6a",
            "input_parameters": {
                "Target": {"entity": {"logical_name": "tr_dadospessoais", "attributes": {}}}
            }
        }"#;
        let ctx: ExecutionContext = serde_json::from_str(json)?;
        assert_eq!(ctx.message, MessageName::Update);
        assert!(ctx.target().is_some());
        assert!(ctx.pre_image().is_none());
        assert_eq!(ctx.target_id(), None);
        Ok(())
    }
}
