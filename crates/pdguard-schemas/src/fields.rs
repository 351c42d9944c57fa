//! Logical names of the governed record type and its attributes.
//!
//! These are fixed by the deployed entity schema and are not configurable.

/// The only record type the hook governs.
pub const PERSONAL_DATA_ENTITY: &str = "tr_dadospessoais";

/// Primary key attribute of [`PERSONAL_DATA_ENTITY`].
pub const PERSONAL_DATA_ID: &str = "tr_dadospessoaisid";

/// Customer phone number. Normalized, never conflict-checked.
pub const PHONE: &str = "tr_telefonecliente";

/// National taxpayer ID (CPF).
pub const NATIONAL_ID: &str = "tr_cpfdadospessoais";

/// State identity card number (RG).
pub const STATE_ID: &str = "tr_rgdadospessoais";

/// Driver's license number (CNH).
pub const LICENSE_NUMBER: &str = "tr_cnhdadospessoais";

/// Input parameter that carries the record being written.
pub const TARGET: &str = "Target";

/// Name under which the host registers the pre-operation snapshot.
pub const PRE_IMAGE: &str = "PreImage";
