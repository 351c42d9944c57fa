//! Entry gate: decides whether an invocation is processed at all.

use std::fmt;

use pdguard_schemas::fields::PERSONAL_DATA_ENTITY;
use pdguard_schemas::{ExecutionContext, ParameterValue, fields::TARGET};

/// Deepest nesting level the hook still processes.
///
/// Corrective updates issued by the hook reach it again one level deeper and
/// stop here.
pub const MAX_DEPTH: u32 = 1;

/// Why an invocation was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Invoked from inside another invocation
    RecursionDepth(u32),
    /// No `Target` input parameter
    MissingTarget,
    /// `Target` is present but is not a record payload
    MalformedTarget,
    /// `Target` is a record of another type
    OtherEntity(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::RecursionDepth(depth) => {
                write!(f, "depth {depth} > {MAX_DEPTH}, stopping to avoid recursion")
            }
            SkipReason::MissingTarget => write!(f, "target missing"),
            SkipReason::MalformedTarget => write!(f, "target is not an entity"),
            SkipReason::OtherEntity(name) => write!(f, "entity '{name}' is not governed"),
        }
    }
}

/// Outcome of [`evaluate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Run the hook
    Proceed,
    /// Return immediately without side effects
    Skip(SkipReason),
}

/// Check depth, payload shape and record type, in that order.
pub fn evaluate(ctx: &ExecutionContext) -> GuardDecision {
    if ctx.depth > MAX_DEPTH {
        return GuardDecision::Skip(SkipReason::RecursionDepth(ctx.depth));
    }
    let target = match ctx.input_parameters.get(TARGET) {
        None => return GuardDecision::Skip(SkipReason::MissingTarget),
        Some(ParameterValue::Entity(entity)) => entity,
        Some(_) => return GuardDecision::Skip(SkipReason::MalformedTarget),
    };
    if !target.is_type(PERSONAL_DATA_ENTITY) {
        return GuardDecision::Skip(SkipReason::OtherEntity(target.logical_name.clone()));
    }
    GuardDecision::Proceed
}

/// Whether the hook should run for this invocation.
pub fn proceed(ctx: &ExecutionContext) -> bool {
    evaluate(ctx) == GuardDecision::Proceed
}
