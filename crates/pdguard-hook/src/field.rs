//! Metadata of the conflict-checked identity fields.

use pdguard_schemas::fields::{LICENSE_NUMBER, NATIONAL_ID, STATE_ID};

/// An identity-document attribute that must be unique across records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityField {
    /// Attribute logical name
    pub attribute: &'static str,
    /// Label used in user-facing messages and logs
    pub label: &'static str,
}

/// National taxpayer ID.
pub const NATIONAL_ID_FIELD: IdentityField = IdentityField {
    attribute: NATIONAL_ID,
    label: "nationalID",
};

/// State identity card number.
pub const STATE_ID_FIELD: IdentityField = IdentityField {
    attribute: STATE_ID,
    label: "stateID",
};

/// Driver's license number.
pub const LICENSE_NUMBER_FIELD: IdentityField = IdentityField {
    attribute: LICENSE_NUMBER,
    label: "licenseNumber",
};

/// Identity fields in processing order.
pub const IDENTITY_FIELDS: [IdentityField; 3] =
    [NATIONAL_ID_FIELD, STATE_ID_FIELD, LICENSE_NUMBER_FIELD];
