//! Hook configuration.

use serde::{Deserialize, Serialize};

/// Runtime options of [`PersonalDataHook`](crate::PersonalDataHook).
///
/// The governed record type, its attribute names and the recursion
/// threshold are fixed and not part of the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookConfig {
    /// Mask document and phone values in log output
    pub redact_values: bool,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            redact_values: true,
        }
    }
}

impl HookConfig {
    /// Configuration with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set value redaction.
    pub fn with_redact_values(mut self, enabled: bool) -> Self {
        self.redact_values = enabled;
        self
    }
}
