//! Divisibility validators

use std::fmt::Debug;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// INTEGER MARKER
// ============================================================================

/// Primitive integer types accepted by [`MultipleOf`].
///
/// Floating point types are deliberately not covered: "multiple of" is only
/// defined for integers here.
pub trait Integer: Copy + PartialEq + Debug {
    /// The additive identity.
    const ZERO: Self;

    /// Remainder of `self / rhs`, `None` when `rhs` is zero or the division
    /// overflows.
    fn checked_remainder(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl Integer for $t {
                const ZERO: Self = 0;

                #[inline]
                fn checked_remainder(self, rhs: Self) -> Option<Self> {
                    self.checked_rem(rhs)
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// ============================================================================
// MULTIPLE OF
// ============================================================================

/// Validates that an integer is a multiple of a given factor.
///
/// Results for negative operands follow Rust's remainder semantics and are
/// not part of the contract; use non-negative factors and values. A zero
/// factor matches nothing.
///
/// # Examples
///
/// ```
/// use fieldguard_validator::validators::multiple_of;
/// use fieldguard_validator::foundation::Validate;
///
/// let validator = multiple_of(5);
/// assert!(validator.validate(&25).is_ok());
/// assert!(validator.validate(&7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MultipleOf<T> {
    /// The factor.
    pub factor: T,
}

impl<T: Integer> MultipleOf<T> {
    /// Creates a new multiple-of validator.
    #[must_use]
    pub fn new(factor: T) -> Self {
        Self { factor }
    }
}

impl<T: Integer> Validate for MultipleOf<T> {
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.checked_remainder(self.factor) == Some(T::ZERO) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "multiple_of",
                format!("El valor debe ser múltiplo de {:?}", self.factor),
            )
            .with_param("factor", format!("{:?}", self.factor))
            .with_param("actual", format!("{input:?}")))
        }
    }
}

/// Creates a validator that checks an integer is a multiple of `factor`.
#[must_use]
pub fn multiple_of<T: Integer>(factor: T) -> MultipleOf<T> {
    MultipleOf::new(factor)
}

// ============================================================================
// TESTS
// ============================================================================
