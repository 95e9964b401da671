//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`]
//!
//! Validators are generic over their input type and compose with
//! short-circuiting combinators:
//!
//! ```rust
//! use fieldguard_validator::prelude::*;
//!
//! let validator = min_length(5).and(max_length(20));
//! assert!(validator.validate("hello").is_ok());
//! ```

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};

// ============================================================================
// UTILITIES
// ============================================================================

/// Runs validators in declared order and returns the first failure.
///
/// Validators after the first failing one are never invoked.
///
/// # Examples
///
/// ```rust
/// use fieldguard_validator::foundation::{Validate, validate_in_order};
/// use fieldguard_validator::validators::{max, min};
///
/// let rules: Vec<Box<dyn Validate<Input = i32>>> = vec![Box::new(min(1)), Box::new(max(10))];
/// assert!(validate_in_order(&5, &rules).is_ok());
/// assert_eq!(validate_in_order(&0, &rules).unwrap_err().code, "min");
/// ```
pub fn validate_in_order<T, V>(value: &T, validators: &[V]) -> Result<(), ValidationError>
where
    T: ?Sized,
    V: Validate<Input = T>,
{
    validators
        .iter()
        .try_for_each(|validator| validator.validate(value))
}

// ============================================================================
// TESTS
// ============================================================================
