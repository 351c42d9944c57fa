//! Per-field normalization, duplicate detection and backfill.

use pdguard_errors::{BusinessRuleViolation, ProcessResult};
use pdguard_schemas::{Attributes, OperationContext};
use pdguard_store::RecordStore;
use tracing::{debug, info};

use crate::backfill::BackfillUpdater;
use crate::conflict::ConflictDetector;
use crate::field::IdentityField;
use crate::normalize::{is_blank, normalize_digits};
use crate::redact::loggable;

/// Where the value of a field was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// Submitted in the change-set
    ChangeSet,
    /// Recovered from the pre-operation snapshot
    PriorSnapshot,
}

/// What [`FieldProcessor::process`] did for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOutcome {
    /// Where the raw value came from; `None` when the field was skipped
    pub source: Option<ValueSource>,
    /// Digits-only projection of the raw value
    pub normalized: Option<String>,
    /// The change-set entry was overwritten with a different value
    pub rewritten: bool,
    /// The duplicate check ran
    pub checked: bool,
    /// A corrective update was sent to the store
    pub backfilled: bool,
}

impl FieldOutcome {
    fn skipped() -> Self {
        Self::default()
    }
}

/// Applies the identity-field protocol to one field at a time.
pub struct FieldProcessor<'a> {
    detector: ConflictDetector<'a>,
    updater: BackfillUpdater<'a>,
    redact: bool,
}

impl<'a> FieldProcessor<'a> {
    /// Create a processor that queries and updates `store`.
    pub fn new(store: &'a dyn RecordStore, redact: bool) -> Self {
        Self {
            detector: ConflictDetector::new(store),
            updater: BackfillUpdater::new(store),
            redact,
        }
    }

    /// Resolve, normalize, check and backfill `field`.
    ///
    /// The submitted value wins over the snapshot. A key present in the
    /// change-set with a null value counts as submitted and is not replaced
    /// by the snapshot value.
    ///
    /// # Errors
    ///
    /// - [`BusinessRuleViolation::Duplicate`] when another record holds the
    ///   value
    /// - attribute or store failures, unclassified
    pub fn process(
        &self,
        field: &IdentityField,
        change_set: &mut Attributes,
        prior: Option<&Attributes>,
        operation: &OperationContext,
    ) -> ProcessResult<FieldOutcome> {
        let (raw, source) = if change_set.contains(field.attribute) {
            (
                change_set.text(field.attribute)?.map(str::to_owned),
                ValueSource::ChangeSet,
            )
        } else if let Some(prior) = prior.filter(|_| operation.is_update()) {
            if !prior.contains(field.attribute) {
                return Ok(FieldOutcome::skipped());
            }
            (
                prior.text(field.attribute)?.map(str::to_owned),
                ValueSource::PriorSnapshot,
            )
        } else {
            return Ok(FieldOutcome::skipped());
        };

        let Some(raw) = raw.filter(|r| !is_blank(Some(r.as_str()))) else {
            debug!(field = field.label, ?source, "Blank value, nothing to do");
            return Ok(FieldOutcome::skipped());
        };

        let normalized = normalize_digits(Some(raw.as_str()));
        let mut outcome = FieldOutcome {
            source: Some(source),
            normalized: normalized.clone(),
            ..FieldOutcome::default()
        };

        if source == ValueSource::ChangeSet
            && let Some(normalized) = &normalized
            && *normalized != raw
        {
            change_set.set(field.attribute, normalized.as_str());
            outcome.rewritten = true;
            info!(
                field = field.label,
                raw = %loggable(&raw, self.redact),
                normalized = %loggable(normalized, self.redact),
                "Value normalized in change set"
            );
        }

        outcome.checked = true;
        if self.detector.find_conflict(
            field,
            normalized.as_deref(),
            Some(raw.as_str()),
            operation.target_id.filter(|_| operation.is_update()),
        )? {
            return Err(BusinessRuleViolation::duplicate(field.label).into());
        }

        if source == ValueSource::PriorSnapshot
            && operation.is_update()
            && let Some(target_id) = operation.target_id
            && let Some(normalized) = normalized.as_deref()
        {
            self.updater.backfill(target_id, field, normalized)?;
            outcome.backfilled = true;
            info!(
                field = field.label,
                %target_id,
                raw = %loggable(&raw, self.redact),
                normalized = %loggable(normalized, self.redact),
                "Stored value normalized through corrective update"
            );
        }

        Ok(outcome)
    }
}
