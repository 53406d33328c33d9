//! Value validation
//!
//! A check is a plain function from a borrowed value to `Ok(())` or a
//! [`ValidationError`] carrying the rejection reason. Checks are composed by
//! position: [`run_checks`] applies them in order and stops at the first
//! failure.
//!
//! # Example
//!
//! ```rust
//! use env_guard::validation::{non_negative, not_empty, positive, run_checks};
//!
//! assert!(run_checks("localhost", &[not_empty]).is_ok());
//! assert!(run_checks(&-1i64, &[non_negative]).is_err());
//!
//! // First failure wins
//! let err = run_checks(&0i32, &[non_negative, positive]).unwrap_err();
//! assert_eq!(err.reason(), "value must be positive");
//! ```

use std::borrow::Cow;
use std::fmt::Display;

use thiserror::Error;

/// A validator: inspects a value and either accepts it or explains why not.
///
/// Functions such as [`not_empty`] and the generic [`non_negative`] coerce to
/// this type, so a list of them can be written as `&[not_empty]` or
/// `&[non_negative, positive]`.
pub type Check<T> = fn(&T) -> Result<(), ValidationError>;

/// Reason a value was rejected by a check
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ValidationError {
    reason: Cow<'static, str>,
}

impl ValidationError {
    /// Create a rejection with the given reason
    pub fn new(reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The rejection reason, as written by the check
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Ordered numeric kinds the sign checks apply to
///
/// Implemented for every primitive integer and float.
pub trait Number: PartialOrd + Copy + Display {
    /// The additive identity
    const ZERO: Self;
}

macro_rules! impl_number {
    ($zero:literal => $($ty:ty),+) => {
        $(
            impl Number for $ty {
                const ZERO: Self = $zero;
            }
        )+
    };
}

impl_number!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_number!(0.0 => f32, f64);

/// Reject strings that are empty or consist only of whitespace
pub fn not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("value must not be empty"));
    }
    Ok(())
}

/// Reject values below zero. Zero is accepted, NaN is not.
pub fn non_negative<T: Number>(value: &T) -> Result<(), ValidationError> {
    if *value >= T::ZERO {
        Ok(())
    } else {
        Err(ValidationError::new("value must be non-negative"))
    }
}

/// Reject zero, negative values and NaN
pub fn positive<T: Number>(value: &T) -> Result<(), ValidationError> {
    if *value > T::ZERO {
        Ok(())
    } else {
        Err(ValidationError::new("value must be positive"))
    }
}

/// Apply checks in order, returning the first rejection
pub fn run_checks<T: ?Sized>(value: &T, checks: &[Check<T>]) -> Result<(), ValidationError> {
    checks.iter().try_for_each(|check| check(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_not_empty() {
        assert!(not_empty("hello").is_ok());
        assert!(not_empty("  padded  ").is_ok());

        assert!(not_empty("").is_err());
        assert!(not_empty("   ").is_err());
        assert!(not_empty("\t\n").is_err());
    }

    #[test]
    fn test_not_empty_reason() {
        let err = not_empty(" ").unwrap_err();
        assert_eq!(err.reason(), "value must not be empty");
    }

    #[test]
    fn test_non_negative_accepts_zero() {
        assert!(non_negative(&0i32).is_ok());
        assert!(non_negative(&0.0f64).is_ok());
        assert!(non_negative(&-0.0f32).is_ok());
        assert!(non_negative(&0u8).is_ok());
    }

    #[test]
    fn test_non_negative_rejects_negative() {
        let err = non_negative(&-1i64).unwrap_err();
        assert_eq!(err.to_string(), "value must be non-negative");
        assert!(non_negative(&-0.5f32).is_err());
        assert!(non_negative(&isize::MIN).is_err());
    }

    #[test]
    fn test_positive_rejects_zero() {
        let err = positive(&0i32).unwrap_err();
        assert_eq!(err.to_string(), "value must be positive");
        assert!(positive(&0.0f64).is_err());
        assert!(positive(&1u64).is_ok());
        assert!(positive(&f32::MIN_POSITIVE).is_ok());
    }

    #[test]
    fn test_nan_fails_sign_checks() {
        assert!(non_negative(&f64::NAN).is_err());
        assert!(positive(&f32::NAN).is_err());
    }

    #[test]
    fn test_run_checks_in_order() {
        let result = run_checks(&0i32, &[non_negative, positive]);
        assert_eq!(result.unwrap_err().reason(), "value must be positive");

        let result = run_checks(&-3i32, &[non_negative, positive]);
        assert_eq!(result.unwrap_err().reason(), "value must be non-negative");

        assert!(run_checks(&3i32, &[non_negative, positive]).is_ok());
        assert!(run_checks(&-3i32, &[]).is_ok());
    }

    #[test]
    fn test_run_checks_on_str() {
        assert!(run_checks("value", &[not_empty]).is_ok());
        assert!(run_checks(" ", &[not_empty]).is_err());
    }

    proptest! {
        #[test]
        fn prop_not_empty_accepts_non_blank(s in "[ \t]*[a-zA-Z0-9_:/.-]+[ \t]*") {
            prop_assert!(not_empty(&s).is_ok());
        }

        #[test]
        fn prop_not_empty_rejects_whitespace(s in "[ \t\r\n]*") {
            prop_assert!(not_empty(&s).is_err());
        }

        #[test]
        fn prop_non_negative_iff_ge_zero(v in any::<i64>()) {
            prop_assert_eq!(non_negative(&v).is_ok(), v >= 0);
        }

        #[test]
        fn prop_positive_iff_gt_zero(v in any::<i32>()) {
            prop_assert_eq!(positive(&v).is_ok(), v > 0);
        }

        #[test]
        fn prop_float_sign_checks(v in any::<f64>()) {
            prop_assert_eq!(non_negative(&v).is_ok(), v >= 0.0);
            prop_assert_eq!(positive(&v).is_ok(), v > 0.0);
        }
    }
}
