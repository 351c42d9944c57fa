//! Masking of document values before they reach log output.

use std::borrow::Cow;

const VISIBLE_TAIL: usize = 4;

/// Replace all but the last four characters with `*`.
///
/// Values of four characters or fewer are fully masked.
pub fn mask(value: &str) -> String {
    let len = value.chars().count();
    if len <= VISIBLE_TAIL {
        return "*".repeat(len);
    }
    let hidden = len.saturating_sub(VISIBLE_TAIL);
    value
        .chars()
        .enumerate()
        .map(|(i, c)| if i < hidden { '*' } else { c })
        .collect()
}

/// Mask `value` when `redact` is set.
pub fn loggable(value: &str, redact: bool) -> Cow<'_, str> {
    if redact {
        Cow::Owned(mask(value))
    } else {
        Cow::Borrowed(value)
    }
}
