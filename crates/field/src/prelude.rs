//! Prelude module for convenient imports.
//!
//! ```rust
//! use fieldguard::prelude::*;
//!
//! let policy = FieldPolicy::<f64>::new().with_pre_validator(min(1.00));
//! assert_eq!(policy.pre_validator_count(), 1);
//! ```

pub use crate::builder::FieldBuilder;
pub use crate::engine::{Decision, Phase, Revert, ValidationEngine};
pub use crate::error::ConfigError;
pub use crate::policy::{FieldOptions, FieldPolicy};
pub use crate::result::ValidationResult;
pub use crate::sink::{ErrorSink, TracingSink};
pub use crate::value::{FieldValue, InputHint};

#[allow(clippy::wildcard_imports)]
pub use fieldguard_validator::prelude::*;
