//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators must implement.

use std::borrow::Borrow;

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// Validators are pure: the same input always produces the same outcome and
/// validating has no side effects.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
///
/// # Examples
///
/// ```rust
/// use fieldguard_validator::foundation::{Validate, ValidationError};
///
/// struct Adult;
///
/// impl Validate for Adult {
///     type Input = u32;
///
///     fn validate(&self, input: &u32) -> Result<(), ValidationError> {
///         if *input >= 18 {
///             Ok(())
///         } else {
///             Err(ValidationError::new("adult", "Debe ser mayor de 18 años."))
///         }
///     }
/// }
///
/// assert!(Adult.validate(&30).is_ok());
/// assert_eq!(Adult.check(&15).as_deref(), Some("Debe ser mayor de 18 años."));
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Runs the rule and returns only the user-facing message on failure.
    ///
    /// `None` means the value passed.
    fn check(&self, input: &Self::Input) -> Option<String> {
        self.validate(input).err().map(ValidationError::into_message)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for all types that implement [`Validate`].
///
/// # Examples
///
/// ```rust
/// use fieldguard_validator::prelude::*;
///
/// let validator = min_length(3).and(max_length(10));
/// assert!(validator.validate("hello").is_ok());
/// assert!(validator.validate("hi").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Short-circuits on the first failure, so `other` never sees a value
    /// that `self` rejected.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Replaces the user-facing message reported on failure.
    ///
    /// The original error is kept as a nested error.
    fn with_message(self, message: impl Into<String>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Adapts the validator to any input that borrows as `Self::Input`,
    /// e.g. a `str` rule checking a `String`.
    fn borrowed<O>(self) -> Borrowed<Self, O>
    where
        O: Borrow<Self::Input> + ?Sized,
    {
        Borrowed::new(self)
    }

    /// Boxes the validator so it can be stored next to validators of other types.
    fn boxed(self) -> Box<dyn Validate<Input = Self::Input>>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

// Automatically implement ValidateExt for all Validate implementations
impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::borrowed::Borrowed;
pub use crate::combinators::message::WithMessage;

// ============================================================================
// TESTS
// ============================================================================
