//! Text length validators
//!
//! Length is measured in Unicode scalar values (chars), so `"año"` has
//! length 3.

use crate::foundation::ValidationError;

#[inline]
fn measure(input: &str) -> usize {
    input.chars().count()
}

fn too_short(min: usize, actual: usize) -> ValidationError {
    ValidationError::new(
        "min_length",
        format!("Debe tener al menos {min} caracteres"),
    )
    .with_param("min", min.to_string())
    .with_param("actual", actual.to_string())
}

fn too_long(max: usize, actual: usize) -> ValidationError {
    ValidationError::new(
        "max_length",
        format!("Debe tener como máximo {max} caracteres"),
    )
    .with_param("max", max.to_string())
    .with_param("actual", actual.to_string())
}

// ============================================================================
// LENGTH
// ============================================================================

crate::validator! {
    /// Validates that text has at least `min` characters and, when `max` is
    /// given, no more than `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldguard_validator::validators::length;
    /// use fieldguard_validator::foundation::Validate;
    ///
    /// let validator = length(2, Some(4));
    /// assert!(validator.validate("abc").is_ok());
    /// assert!(validator.validate("a").is_err());
    /// assert!(validator.validate("abcde").is_err());
    ///
    /// // Without an upper bound only the minimum applies.
    /// assert!(length(2, None).validate("a very long text").is_ok());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Length { min: usize, max: Option<usize> } for str;
    rule(self, input) { self.accepts(measure(input)) }
    error(self, input) {
        let len = measure(input);
        match self.max {
            Some(max) if len > max => too_long(max, len),
            _ => too_short(self.min, len),
        }
    }
    new(min: usize, max: Option<usize>) { Self { min, max } }
    fn length(min: usize, max: Option<usize>);
}

impl Length {
    fn accepts(&self, len: usize) -> bool {
        len >= self.min && self.max.is_none_or(|max| len <= max)
    }
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that text has at least a minimum number of characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { measure(input) >= self.min }
    error(self, input) { too_short(self.min, measure(input)) }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that text does not exceed a maximum number of characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { measure(input) <= self.max }
    error(self, input) { too_long(self.max, measure(input)) }
    fn max_length(max: usize);
}

// ============================================================================
// TESTS
// ============================================================================
