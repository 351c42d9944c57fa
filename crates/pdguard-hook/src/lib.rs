//! Pre-operation normalization and duplicate detection for personal-data
//! records.
//!
//! [`PersonalDataHook`] runs before a record of type `tr_dadospessoais` is
//! created or updated. It:
//!
//! 1. skips nested invocations, payloads without a record, and other record
//!    types ([`guard`])
//! 2. rewrites a submitted phone to digits only ([`phone`])
//! 3. for the national ID, state ID and license number, in that order
//!    ([`processor`]):
//!    - reads the submitted value, or on update the stored one
//!    - rewrites a submitted value to digits only
//!    - aborts when another record holds the value ([`conflict`])
//!    - pushes the digits-only form into the store when only the stored
//!      value was available ([`backfill`])
//!
//! Corrective updates are not rolled back when a later field reports a
//! duplicate.
//!
//! # Example
//!
//! ```
//! use pdguard_hook::prelude::*;
//! use pdguard_schemas::prelude::*;
//! use pdguard_store::InMemoryStore;
//! use uuid::Uuid;
//!
//! let store = InMemoryStore::new();
//! let mut ctx = ExecutionContext::new(MessageName::Create, 1, Uuid::new_v4()).with_target(
//!     Entity::new(PERSONAL_DATA_ENTITY).with_attribute(NATIONAL_ID, "123.456.789-00"),
//! );
//!
//! let hook = PersonalDataHook::new(HookConfig::default());
//! assert!(hook.execute(&mut ctx, &store).is_ok());
//!
//! let target = ctx.target().map(|t| t.attributes.text(NATIONAL_ID));
//! assert_eq!(target, Some(Ok(Some("12345678900"))));
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod backfill;
pub mod config;
pub mod conflict;
pub mod field;
pub mod guard;
pub mod hook;
pub mod normalize;
pub mod phone;
pub mod prelude;
pub mod processor;
pub mod redact;

pub use config::HookConfig;
pub use field::{IDENTITY_FIELDS, IdentityField};
pub use guard::{GuardDecision, MAX_DEPTH, SkipReason};
pub use hook::{PersonalDataHook, PreOperationHook};
pub use normalize::normalize_digits;
pub use processor::{FieldOutcome, FieldProcessor, ValueSource};
