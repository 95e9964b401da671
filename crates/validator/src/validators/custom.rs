//! Ad hoc validators built from closures

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// CUSTOM (predicate + fixed message)
// ============================================================================

/// Fails with a fixed message whenever the predicate returns `false`.
///
/// # Examples
///
/// ```
/// use fieldguard_validator::validators::custom;
/// use fieldguard_validator::foundation::Validate;
///
/// let even = custom(|v: &i64| v % 2 == 0, "Debe ser un número par");
/// assert!(even.validate(&4).is_ok());
/// assert_eq!(even.check(&3).as_deref(), Some("Debe ser un número par"));
/// ```
pub struct Custom<T: ?Sized, F> {
    predicate: F,
    message: Cow<'static, str>,
    _input: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> Custom<T, F>
where
    F: Fn(&T) -> bool,
{
    /// Creates a validator from a predicate and the message reported on failure.
    pub fn new(predicate: F, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            predicate,
            message: message.into(),
            _input: PhantomData,
        }
    }
}

impl<T: ?Sized, F> Validate for Custom<T, F>
where
    F: Fn(&T) -> bool,
{
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if (self.predicate)(input) {
            Ok(())
        } else {
            Err(ValidationError::custom(self.message.clone()))
        }
    }
}

impl<T: ?Sized, F: Clone> Clone for Custom<T, F> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            message: self.message.clone(),
            _input: PhantomData,
        }
    }
}

impl<T: ?Sized, F> fmt::Debug for Custom<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Creates a [`Custom`] validator.
pub fn custom<T: ?Sized, F>(predicate: F, message: impl Into<Cow<'static, str>>) -> Custom<T, F>
where
    F: Fn(&T) -> bool,
{
    Custom::new(predicate, message)
}

// ============================================================================
// FN VALIDATOR (closure returning an optional message)
// ============================================================================

/// Adapts a closure of shape `(value) -> Option<message>` into a validator.
///
/// `None` means the value passed.
///
/// # Examples
///
/// ```
/// use fieldguard_validator::validators::from_fn;
/// use fieldguard_validator::foundation::Validate;
///
/// let no_spaces = from_fn(|s: &str| s.contains(' ').then(|| "Sin espacios".to_string()));
/// assert!(no_spaces.validate("abc").is_ok());
/// assert!(no_spaces.validate("a b").is_err());
/// ```
pub struct FnValidator<T: ?Sized, F> {
    rule: F,
    _input: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> Validate for FnValidator<T, F>
where
    F: Fn(&T) -> Option<String>,
{
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match (self.rule)(input) {
            None => Ok(()),
            Some(message) => Err(ValidationError::custom(message)),
        }
    }
}

impl<T: ?Sized, F> fmt::Debug for FnValidator<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidator").finish_non_exhaustive()
    }
}

/// Creates a [`FnValidator`] from a closure.
pub fn from_fn<T: ?Sized, F>(rule: F) -> FnValidator<T, F>
where
    F: Fn(&T) -> Option<String>,
{
    FnValidator {
        rule,
        _input: PhantomData,
    }
}

// ============================================================================
// TESTS
// ============================================================================
