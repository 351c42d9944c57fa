//! Convenience re-exports for common test utilities.

pub use crate::must::{must, must_err, must_some, must_with};

#[cfg(feature = "fixtures")]
pub use crate::fixtures::{create_context, personal_data, update_context};

#[cfg(feature = "mock")]
pub use crate::mock::{FailingStore, RecordingStore};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
