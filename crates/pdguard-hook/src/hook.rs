//! Hook entry point.

use pdguard_errors::{HookError, ProcessError, ProcessResult};
use pdguard_schemas::fields::{PRE_IMAGE, TARGET};
use pdguard_schemas::{ExecutionContext, ParameterValue};
use pdguard_store::ServiceFactory;
use tracing::{debug, error, info_span};

use crate::config::HookConfig;
use crate::field::IDENTITY_FIELDS;
use crate::guard::{self, GuardDecision};
use crate::phone::normalize_phone;
use crate::processor::FieldProcessor;

/// A step the host runs synchronously before persisting a record.
pub trait PreOperationHook {
    /// Name used in host logs.
    fn name(&self) -> &str;

    /// Inspect and possibly mutate the invocation's target.
    ///
    /// Returning `Ok(())` lets the host persist the (possibly rewritten)
    /// target; returning an error aborts the whole operation.
    ///
    /// # Errors
    ///
    /// Implementations decide which failures abort persistence.
    fn execute(
        &self,
        ctx: &mut ExecutionContext,
        services: &dyn ServiceFactory,
    ) -> Result<(), HookError>;
}

/// Normalizes phone and identity documents of personal-data records and
/// rejects duplicate documents.
#[derive(Debug, Clone, Default)]
pub struct PersonalDataHook {
    config: HookConfig,
}

impl PersonalDataHook {
    /// Create a hook with the given configuration.
    pub fn new(config: HookConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &HookConfig {
        &self.config
    }

    fn run(&self, ctx: &mut ExecutionContext, services: &dyn ServiceFactory) -> ProcessResult {
        if let GuardDecision::Skip(reason) = guard::evaluate(ctx) {
            debug!(%reason, "Skipping invocation");
            return Ok(());
        }

        let operation = ctx.operation();
        let prior = ctx
            .pre_entity_images
            .get(PRE_IMAGE)
            .map(|snapshot| &snapshot.attributes);
        let Some(ParameterValue::Entity(target)) = ctx.input_parameters.get_mut(TARGET) else {
            return Ok(());
        };
        let change_set = &mut target.attributes;

        normalize_phone(change_set, self.config.redact_values)?;

        let store = services.create_service(operation.user_id)?;
        let processor = FieldProcessor::new(store.as_ref(), self.config.redact_values);
        for field in &IDENTITY_FIELDS {
            let outcome = processor.process(field, change_set, prior, &operation)?;
            debug!(
                field = field.label,
                source = ?outcome.source,
                rewritten = outcome.rewritten,
                checked = outcome.checked,
                backfilled = outcome.backfilled,
                "Field processed"
            );
        }
        Ok(())
    }
}

impl PreOperationHook for PersonalDataHook {
    fn name(&self) -> &str {
        "PersonalDataHook"
    }

    fn execute(
        &self,
        ctx: &mut ExecutionContext,
        services: &dyn ServiceFactory,
    ) -> Result<(), HookError> {
        let span = info_span!(
            "personal_data_hook",
            message = %ctx.message,
            depth = ctx.depth,
            user = %ctx.user_id,
        );
        let _entered = span.enter();

        match self.run(ctx, services) {
            Ok(()) => Ok(()),
            Err(err @ ProcessError::BusinessRule(_)) => Err(err.into()),
            Err(err) => {
                error!(error = %err, detail = ?err, "Unexpected failure while validating record");
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdguard_errors::{BusinessRuleViolation, StoreError};
    use pdguard_schemas::fields::{
        LICENSE_NUMBER, NATIONAL_ID, PERSONAL_DATA_ENTITY, PHONE, STATE_ID,
    };
    use pdguard_schemas::{AttributeValue, Entity, MessageName};
    use pdguard_store::InMemoryStore;
    use pdguard_test_helpers::prelude::*;
    use tracing_test::traced_test;
    use uuid::Uuid;

    fn hook() -> PersonalDataHook {
        PersonalDataHook::new(HookConfig::default().with_redact_values(false))
    }

    fn target_text<'a>(ctx: &'a ExecutionContext, attribute: &str) -> Option<&'a str> {
        ctx.target()
            .and_then(|t| t.attributes.text(attribute).ok())
            .flatten()
    }

    #[test]
    #[traced_test]
    fn test_create_normalizes_everything() {
        let store = RecordingStore::new(InMemoryStore::new());
        let mut ctx = create_context(
            personal_data()
                .with_attribute(PHONE, "(11) 98888-7777")
                .with_attribute(NATIONAL_ID, "123.456.789-00")
                .with_attribute(STATE_ID, "12.345.678-9")
                .with_attribute(LICENSE_NUMBER, "0123 4567 890"),
        );

        must(hook().execute(&mut ctx, &store));

        assert_eq!(target_text(&ctx, PHONE), Some("11988887777"));
        assert_eq!(target_text(&ctx, NATIONAL_ID), Some("12345678900"));
        assert_eq!(target_text(&ctx, STATE_ID), Some("123456789"));
        assert_eq!(target_text(&ctx, LICENSE_NUMBER), Some("01234567890"));
        assert_eq!(store.queries().len(), 3);
        assert!(store.updates().is_empty());
        assert!(logs_contain("Phone formatted"));
        assert!(logs_contain("Value normalized in change set"));
    }

    #[test]
    #[traced_test]
    fn test_depth_two_touches_nothing() {
        let store = RecordingStore::new(InMemoryStore::new());
        let mut ctx = ExecutionContext::new(MessageName::Update, 2, Uuid::new_v4())
            .with_primary_entity_id(Uuid::new_v4())
            .with_target(personal_data().with_attribute(PHONE, "(11) 98888-7777"))
            .with_pre_image(personal_data().with_attribute(STATE_ID, "AB.123.456"));

        must(hook().execute(&mut ctx, &store));

        assert_eq!(store.factory_calls(), 0);
        assert!(store.queries().is_empty());
        assert!(store.updates().is_empty());
        assert_eq!(target_text(&ctx, PHONE), Some("(11) 98888-7777"));
        assert!(logs_contain("stopping to avoid recursion"));
    }

    #[test]
    #[traced_test]
    fn test_other_entity_is_skipped() {
        let store = RecordingStore::new(InMemoryStore::new());
        let mut ctx = create_context(Entity::new("contact").with_attribute(PHONE, "(11) 1234"));

        must(hook().execute(&mut ctx, &store));

        assert_eq!(store.factory_calls(), 0);
        assert_eq!(target_text(&ctx, PHONE), Some("(11) 1234"));
        assert!(logs_contain("is not governed"));
    }

    #[test]
    #[traced_test]
    fn test_duplicate_is_reported_verbatim() {
        let existing = personal_data().with_attribute(NATIONAL_ID, "12345678900");
        let store = RecordingStore::new(must(InMemoryStore::seeded([existing])));
        let mut ctx = create_context(personal_data().with_attribute(NATIONAL_ID, "123.456.789-00"));

        let err = must_err(hook().execute(&mut ctx, &store));

        assert_eq!(
            err,
            HookError::BusinessRule(BusinessRuleViolation::duplicate("nationalID"))
        );
        assert_eq!(err.to_string(), "a record with this nationalID already exists");
        assert!(store.updates().is_empty());
        assert!(logs_contain("Duplicate found"));
        assert!(!logs_contain("Unexpected failure"));
    }

    #[test]
    #[traced_test]
    fn test_store_failure_is_wrapped_and_logged() {
        let store = FailingStore::new(StoreError::unavailable("connection reset"));
        let mut ctx = create_context(personal_data().with_attribute(STATE_ID, "12.345"));

        let err = must_err(hook().execute(&mut ctx, &store));

        assert_eq!(
            err.to_string(),
            "error processing validations: store unavailable: connection reset"
        );
        assert!(!err.is_user_facing());
        assert!(logs_contain("Unexpected failure while validating record"));
    }

    #[test]
    fn test_non_text_document_is_wrapped() {
        let store = RecordingStore::new(InMemoryStore::new());
        let mut ctx = create_context(
            personal_data().with_attribute(LICENSE_NUMBER, AttributeValue::Integer(123)),
        );

        let err = must_err(hook().execute(&mut ctx, &store));

        assert_eq!(
            err.to_string(),
            "error processing validations: attribute 'tr_cnhdadospessoais' has type integer, expected text"
        );
    }

    #[test]
    fn test_phone_is_normalized_before_store_failure() {
        let store = FailingStore::factory_failure("no identity");
        let mut ctx = create_context(
            personal_data().with_attribute(PHONE, "+55 (11) 98888-7777"),
        );

        let err = must_err(hook().execute(&mut ctx, &store));

        assert!(err.to_string().ends_with("failed to create store service: no identity"));
        assert_eq!(target_text(&ctx, PHONE), Some("5511988887777"));
    }

    #[test]
    #[traced_test]
    fn test_redaction_hides_documents_in_logs() {
        let store = RecordingStore::new(InMemoryStore::new());
        let mut ctx = create_context(personal_data().with_attribute(NATIONAL_ID, "123.456.789-00"));

        must(PersonalDataHook::default().execute(&mut ctx, &store));

        assert!(logs_contain("*******8900"));
        assert!(!logs_contain("12345678900"));
    }

    #[test]
    fn test_hook_name() {
        assert_eq!(hook().name(), "PersonalDataHook");
        assert_eq!(PERSONAL_DATA_ENTITY, "tr_dadospessoais");
    }
}
