//! Outcome of a main-validator call.

use std::borrow::Borrow;

use fieldguard_validator::foundation::Validate;

/// Outcome of validating a parsed value.
///
/// Only two shapes exist: [`accept`](Self::accept), which never carries a
/// message, and [`reject`](Self::reject) / [`reject_silently`](Self::reject_silently).
/// A silent rejection still reverts the field; it just reports nothing.
///
/// # Examples
///
/// ```
/// use fieldguard::ValidationResult;
///
/// let ok = ValidationResult::accept(30);
/// assert!(ok.is_accepted());
/// assert_eq!(ok.message(), None);
///
/// let no = ValidationResult::reject(25, "Debe ser mayor de 18 años.");
/// assert!(!no.is_accepted());
/// assert_eq!(no.value(), &25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct ValidationResult<T> {
    accepted: bool,
    value: T,
    message: Option<String>,
}

impl<T> ValidationResult<T> {
    /// Accepts `value` as the field's new value.
    pub fn accept(value: T) -> Self {
        Self {
            accepted: true,
            value,
            message: None,
        }
    }

    /// Rejects the input, keeping `fallback` as the value and reporting `message`.
    pub fn reject(fallback: T, message: impl Into<String>) -> Self {
        Self {
            accepted: false,
            value: fallback,
            message: Some(message.into()),
        }
    }

    /// Rejects the input without reporting anything.
    pub fn reject_silently(fallback: T) -> Self {
        Self {
            accepted: false,
            value: fallback,
            message: None,
        }
    }

    /// Accepts `value` if `rule` passes, otherwise rejects it with the rule's message.
    ///
    /// The rule may check a borrowed form of the value, e.g. `str` for `String`.
    ///
    /// ```
    /// use fieldguard::ValidationResult;
    /// use fieldguard_validator::validators::min;
    ///
    /// assert!(ValidationResult::check(20, &min(18)).is_accepted());
    /// assert_eq!(
    ///     ValidationResult::check(15, &min(18)).message(),
    ///     Some("El valor mínimo es 18")
    /// );
    /// ```
    pub fn check<V>(value: T, rule: &V) -> Self
    where
        V: Validate + ?Sized,
        T: Borrow<V::Input>,
    {
        match rule.check(Borrow::<V::Input>::borrow(&value)) {
            None => Self::accept(value),
            Some(message) => Self::reject(value, message),
        }
    }

    /// Whether the value was accepted.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// The accepted value, or the fallback on rejection.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The message to report, present only on a non-silent rejection.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Consumes the result and returns the value.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Consumes the result and returns `(accepted, value, message)`.
    #[must_use]
    pub fn into_parts(self) -> (bool, T, Option<String>) {
        (self.accepted, self.value, self.message)
    }
}
