//! Numeric range validators
//!
//! Bounds are rendered with their `Debug` form so floating point bounds keep
//! their decimal point in messages (`1.0`, not `1`).

use std::fmt::Debug;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a value is at least a minimum.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Min<T: PartialOrd + Debug + Copy> { min: T } for T;
    rule(self, input) { *input >= self.min }
    error(self, input) {
        ValidationError::new("min", format!("El valor mínimo es {:?}", self.min))
            .with_param("min", format!("{:?}", self.min))
            .with_param("actual", format!("{:?}", input))
    }
    fn min(value: T);
}

crate::validator! {
    /// Validates that a value does not exceed a maximum.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Max<T: PartialOrd + Debug + Copy> { max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        ValidationError::new("max", format!("El valor máximo es {:?}", self.max))
            .with_param("max", format!("{:?}", self.max))
            .with_param("actual", format!("{:?}", input))
    }
    fn max(value: T);
}

crate::validator! {
    /// Validates that a value is within an inclusive range.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldguard_validator::validators::in_range;
    /// use fieldguard_validator::foundation::Validate;
    ///
    /// let validator = in_range(18, 65);
    /// assert!(validator.validate(&18).is_ok());
    /// assert!(validator.validate(&65).is_ok());
    /// assert!(validator.validate(&17).is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub InRange<T: PartialOrd + Debug + Copy> { min: T, max: T } for T;
    rule(self, input) { *input >= self.min && *input <= self.max }
    error(self, input) {
        ValidationError::new(
            "out_of_range",
            format!("El valor debe estar entre {:?} y {:?}", self.min, self.max),
        )
        .with_param("min", format!("{:?}", self.min))
        .with_param("max", format!("{:?}", self.max))
        .with_param("actual", format!("{:?}", input))
    }
    fn in_range(min: T, max: T);
}

// ============================================================================
// TESTS
// ============================================================================
