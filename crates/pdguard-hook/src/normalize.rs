//! Digits-only normalization.

use std::sync::LazyLock;

use regex::Regex;

/// Runs of characters outside the Unicode decimal-digit category (Nd).
static NON_DIGITS: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"\D+"));

/// Whether a value is absent, empty or whitespace only.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Strip every character that is not a decimal digit.
///
/// Any Unicode decimal digit is kept as written, so Arabic-Indic or
/// full-width digits survive unchanged. Other numeric characters such as
/// `'½'` are stripped.
///
/// Blank input and input without any digit yield `None`: downstream code
/// treats that as "no value" and never stores or searches for an empty
/// string.
///
/// ```
/// use pdguard_hook::normalize_digits;
///
/// assert_eq!(normalize_digits(Some("123.456.789-00")).as_deref(), Some("12345678900"));
/// assert_eq!(normalize_digits(Some("abc")), None);
/// assert_eq!(normalize_digits(Some("   ")), None);
/// assert_eq!(normalize_digits(None), None);
/// ```
pub fn normalize_digits(value: Option<&str>) -> Option<String> {
    let value = value.filter(|v| !v.trim().is_empty())?;
    let Ok(non_digits) = NON_DIGITS.as_ref() else {
        return None;
    };
    let digits = non_digits.replace_all(value, "").into_owned();
    (!digits.is_empty()).then_some(digits)
}
