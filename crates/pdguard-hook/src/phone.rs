//! Phone normalization. Phones are not unique, so there is no conflict check
//! and no backfill.

use pdguard_errors::AttributeError;
use pdguard_schemas::{AttributeValue, Attributes};
use pdguard_schemas::fields::PHONE;
use tracing::{debug, info};

use crate::normalize::{is_blank, normalize_digits};
use crate::redact::loggable;

/// Rewrite a submitted, non-blank phone to digits only.
///
/// Returns whether the change-set was modified. A phone without any digit is
/// cleared to null, so a stored phone is either digits-only or absent.
///
/// # Errors
///
/// Fails when the phone attribute holds a non-text value.
pub fn normalize_phone(change_set: &mut Attributes, redact: bool) -> Result<bool, AttributeError> {
    if !change_set.contains(PHONE) {
        return Ok(false);
    }
    let raw = change_set.text(PHONE)?;
    if is_blank(raw) {
        return Ok(false);
    }
    let Some(formatted) = normalize_digits(raw) else {
        debug!(
            raw = %loggable(raw.unwrap_or_default(), redact),
            "Phone has no digits, cleared"
        );
        change_set.set(PHONE, AttributeValue::Null);
        return Ok(true);
    };
    if raw == Some(formatted.as_str()) {
        return Ok(false);
    }
    info!(
        raw = %loggable(raw.unwrap_or_default(), redact),
        formatted = %loggable(&formatted, redact),
        "Phone formatted"
    );
    change_set.set(PHONE, formatted);
    Ok(true)
}
