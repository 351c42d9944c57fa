//! Invocation documents and hook configuration files.

use std::fs;
use std::path::Path;

use pdguard_hook::HookConfig;
use pdguard_host::Operation;
use pdguard_schemas::Entity;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CliError;

/// One write to replay against a freshly seeded store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    /// Records present in the store before the write
    #[serde(default)]
    pub seed: Vec<Entity>,
    /// Create or update
    pub operation: Operation,
    /// Acting identity; nil when omitted
    #[serde(default)]
    pub user_id: Uuid,
    /// Record submitted by the caller
    pub target: Entity,
}

impl Invocation {
    /// Read and validate an invocation document (JSON or YAML).
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path)?;
        let invocation: Invocation = if is_yaml(path) {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        invocation.validate()?;
        Ok(invocation)
    }

    /// Reject documents the pipeline could never apply.
    pub fn validate(&self) -> Result<(), CliError> {
        if self.target.logical_name.trim().is_empty() {
            return Err(CliError::InvalidInvocation(
                "target.logical_name must not be empty".to_string(),
            ));
        }
        if self.operation == Operation::Update && self.target.id.is_none() {
            return Err(CliError::InvalidInvocation(
                "an update target needs an id".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load hook options, falling back to defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<HookConfig, CliError> {
    let Some(path) = path else {
        return Ok(HookConfig::default());
    };
    let content = fs::read_to_string(path)?;
    if is_yaml(path) {
        serde_yaml::from_str(&content).map_err(|e| CliError::InvalidConfiguration(e.to_string()))
    } else {
        serde_json::from_str(&content).map_err(|e| CliError::InvalidConfiguration(e.to_string()))
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}
