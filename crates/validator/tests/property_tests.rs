//! Property-based tests for fieldguard-validator.

use fieldguard_validator::prelude::*;
use proptest::prelude::*;

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn length_idempotent(s in ".*") {
        let v = length(3, Some(10));
        prop_assert_eq!(v.check(&s), v.check(&s));
    }

    #[test]
    fn in_range_idempotent(n in any::<i64>()) {
        let v = in_range(0i64, 100i64);
        prop_assert_eq!(v.validate(&n).is_ok(), v.validate(&n).is_ok());
    }

    #[test]
    fn email_idempotent(s in ".*") {
        let v = email();
        prop_assert_eq!(v.validate(&s).is_ok(), v.validate(&s).is_ok());
    }
}

// ============================================================================
// BOUNDS: range families agree with the plain comparison
// ============================================================================

proptest! {
    #[test]
    fn in_range_matches_comparison(n in -1_000i64..1_000, lo in -500i64..0, hi in 0i64..500) {
        let ok = in_range(lo, hi).validate(&n).is_ok();
        prop_assert_eq!(ok, n >= lo && n <= hi);
    }

    #[test]
    fn in_range_equals_min_and_max(n in any::<i32>()) {
        let combined = min(-10).and(max(10));
        prop_assert_eq!(combined.validate(&n).is_ok(), in_range(-10, 10).validate(&n).is_ok());
    }

    #[test]
    fn multiple_of_matches_remainder(n in 0u32..100_000, factor in 1u32..500) {
        prop_assert_eq!(multiple_of(factor).validate(&n).is_ok(), n % factor == 0);
    }

    #[test]
    fn length_without_max_only_checks_min(s in ".{0,40}", lo in 0usize..20) {
        let ok = length(lo, None).validate(&s).is_ok();
        prop_assert_eq!(ok, s.chars().count() >= lo);
    }
}

// ============================================================================
// COMBINATOR LAWS: a.and(b) fails iff a fails or b fails, reporting a first
// ============================================================================

proptest! {
    #[test]
    fn and_fails_iff_either_fails(s in ".{0,30}") {
        let a = min_length(3);
        let b = max_length(10);
        let combined = a.and(b);

        let a_err = a.check(&s);
        let b_ok = b.validate(&s).is_ok();

        match combined.check(&s) {
            None => prop_assert!(a_err.is_none() && b_ok),
            Some(message) => match a_err {
                Some(first) => prop_assert_eq!(message, first),
                None => prop_assert!(!b_ok),
            },
        }
    }

    #[test]
    fn validate_in_order_reports_first_failure(n in -100i32..100) {
        let rules: Vec<Box<dyn Validate<Input = i32>>> = vec![min(0).boxed(), max(50).boxed()];
        let expected = if n < 0 {
            Some("El valor mínimo es 0".to_string())
        } else if n > 50 {
            Some("El valor máximo es 50".to_string())
        } else {
            None
        };
        prop_assert_eq!(validate_in_order(&n, &rules).err().map(ValidationError::into_message), expected);
    }
}
