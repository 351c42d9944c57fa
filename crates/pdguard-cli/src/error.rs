//! Error types for pdguardctl

use pdguard_errors::StoreError;
use pdguard_host::PipelineError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid invocation: {0}")]
    InvalidInvocation(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Seed rejected: {0}")]
    Seed(StoreError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl CliError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Pipeline(err) if err.is_user_facing() => 3,
            CliError::Pipeline(PipelineError::Store(StoreError::NotFound { .. }))
            | CliError::InvalidInvocation(_)
            | CliError::InvalidConfiguration(_)
            | CliError::Seed(_)
            | CliError::JsonError(_)
            | CliError::YamlError(_) => 4,
            _ => 1,
        }
    }

    /// Short machine-readable kind for JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Pipeline(err) if err.is_user_facing() => "business_rule",
            CliError::Pipeline(_) => "pipeline",
            CliError::InvalidInvocation(_) | CliError::Seed(_) => "invalid_invocation",
            CliError::InvalidConfiguration(_) => "invalid_configuration",
            CliError::IoError(_) => "io",
            CliError::JsonError(_) | CliError::YamlError(_) => "parse",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdguard_errors::{BusinessRuleViolation, HookError};
    use uuid::Uuid;

    #[test]
    fn test_exit_codes() {
        let duplicate = CliError::Pipeline(PipelineError::Hook(HookError::from(
            BusinessRuleViolation::duplicate("nationalID"),
        )));
        assert_eq!(duplicate.exit_code(), 3);
        assert_eq!(duplicate.kind(), "business_rule");

        let unexpected = CliError::Pipeline(PipelineError::Hook(HookError::unexpected("boom")));
        assert_eq!(unexpected.exit_code(), 1);

        let missing = CliError::Pipeline(PipelineError::Store(StoreError::not_found(
            "tr_dadospessoais",
            Uuid::nil(),
        )));
        assert_eq!(missing.exit_code(), 4);

        assert_eq!(CliError::InvalidInvocation("x".into()).exit_code(), 4);
        assert_eq!(
            CliError::IoError(std::io::Error::other("disk")).exit_code(),
            1
        );
    }
}
