//! Digits-only projection of a single value

use anyhow::Result;
use pdguard_hook::normalize_digits;

use crate::output;

pub fn execute(value: &str, json: bool) -> Result<()> {
    let normalized = normalize_digits(Some(value));
    output::print_normalized(value, normalized.as_deref(), json);
    Ok(())
}
