//! Write operations accepted by the pipeline.

use std::fmt;

use pdguard_schemas::MessageName;
use serde::{Deserialize, Serialize};

/// A write the pipeline can persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Insert a new record
    Create,
    /// Merge attributes into an existing record
    Update,
}

impl From<Operation> for MessageName {
    fn from(operation: Operation) -> Self {
        match operation {
            Operation::Create => MessageName::Create,
            Operation::Update => MessageName::Update,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create => write!(f, "Create"),
            Operation::Update => write!(f, "Update"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_reads_host_spelling() -> Result<(), serde_json::Error> {
        let op: Operation = serde_json::from_str("\"Update\"")?;
        assert_eq!(op, Operation::Update);
        assert_eq!(MessageName::from(op), MessageName::Update);
        assert_eq!(Operation::Create.to_string(), "Create");
        assert!(serde_json::from_str::<Operation>("\"Delete\"").is_err_and(|e| e.is_data()));
        Ok(())
    }
}
