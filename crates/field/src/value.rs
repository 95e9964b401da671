//! Value strategies: how a field's typed value maps to and from text.
//!
//! Primitive numbers and `String` get a default strategy through
//! [`FieldValue`]. Any other type has to supply its own parser and formatter
//! through the policy; [`Codec::resolve`] turns a missing one into
//! [`ConfigError::UnsupportedType`].

use std::fmt;
use std::rc::Rc;

use crate::error::ConfigError;

/// Converts field text into a value. Never fails; bad input degrades to a
/// type-appropriate default.
pub type Parser<T> = Rc<dyn Fn(&str) -> T>;

/// Converts a value into field text.
pub type Formatter<T> = Rc<dyn Fn(&T) -> String>;

// ============================================================================
// INPUT HINT
// ============================================================================

/// Which characters the host should let the user type.
///
/// This mirrors the keyboard type and input filter a host picks for the
/// field; the engine itself never filters text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputHint {
    /// ASCII digits only.
    Digits,
    /// ASCII digits with at most one `.` separator.
    Decimal,
    /// Free text.
    Text,
    /// No restriction known (custom value types).
    #[default]
    Any,
}

impl InputHint {
    /// Returns `true` if `text` is something the hint lets the user type.
    ///
    /// ```
    /// use fieldguard::InputHint;
    ///
    /// assert!(InputHint::Digits.admits("0123"));
    /// assert!(!InputHint::Digits.admits("-1"));
    /// assert!(InputHint::Decimal.admits("3."));
    /// assert!(!InputHint::Decimal.admits("1.2.3"));
    /// ```
    #[must_use]
    pub fn admits(self, text: &str) -> bool {
        match self {
            Self::Digits => text.bytes().all(|b| b.is_ascii_digit()),
            Self::Decimal => {
                let mut separators = 0;
                text.bytes().all(|b| match b {
                    b'.' => {
                        separators += 1;
                        separators == 1
                    }
                    _ => b.is_ascii_digit(),
                })
            }
            Self::Text | Self::Any => true,
        }
    }
}

impl fmt::Display for InputHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digits => write!(f, "digits"),
            Self::Decimal => write!(f, "decimal"),
            Self::Text => write!(f, "text"),
            Self::Any => write!(f, "any"),
        }
    }
}

// ============================================================================
// FIELD VALUE
// ============================================================================

/// A value type with a built-in text strategy.
///
/// Implemented for the primitive integers, `f32`/`f64` and `String`.
pub trait FieldValue: Clone + PartialEq + fmt::Debug + 'static {
    /// Input hint for the host.
    const HINT: InputHint;

    /// Best-effort parse; malformed text yields [`FieldValue::empty_value`].
    fn parse_lossy(text: &str) -> Self;

    /// Default text rendering.
    fn format_value(&self) -> String;

    /// The value an empty field stands for (`0`, `0.0`, `""`).
    fn empty_value() -> Self;

    /// Numeric zero check. Non-numeric types are never zero.
    fn is_zero(&self) -> bool {
        false
    }
}

macro_rules! integer_field_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl FieldValue for $t {
                const HINT: InputHint = InputHint::Digits;

                fn parse_lossy(text: &str) -> Self {
                    text.trim().parse().unwrap_or(0)
                }

                fn format_value(&self) -> String {
                    self.to_string()
                }

                fn empty_value() -> Self {
                    0
                }

                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

integer_field_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_field_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl FieldValue for $t {
                const HINT: InputHint = InputHint::Decimal;

                // "inf" and "NaN" parse in Rust but are not field input.
                fn parse_lossy(text: &str) -> Self {
                    text.trim()
                        .parse::<$t>()
                        .ok()
                        .filter(|v| v.is_finite())
                        .unwrap_or(0.0)
                }

                fn format_value(&self) -> String {
                    self.to_string()
                }

                fn empty_value() -> Self {
                    0.0
                }

                fn is_zero(&self) -> bool {
                    *self == 0.0
                }
            }
        )*
    };
}

float_field_value!(f32, f64);

impl FieldValue for String {
    const HINT: InputHint = InputHint::Text;

    fn parse_lossy(text: &str) -> Self {
        text.to_owned()
    }

    fn format_value(&self) -> String {
        self.clone()
    }

    fn empty_value() -> Self {
        Self::new()
    }
}

// ============================================================================
// CODEC
// ============================================================================

/// The text strategy an engine runs with, fixed at construction.
pub(crate) struct Codec<T> {
    pub(crate) parse: Parser<T>,
    pub(crate) format: Formatter<T>,
    pub(crate) empty: Rc<dyn Fn() -> T>,
    pub(crate) is_zero: fn(&T) -> bool,
    pub(crate) hint: InputHint,
}

impl<T: FieldValue> Codec<T> {
    /// The built-in strategy of `T`.
    pub(crate) fn native() -> Self {
        Self {
            parse: Rc::new(T::parse_lossy),
            format: Rc::new(T::format_value),
            empty: Rc::new(T::empty_value),
            is_zero: T::is_zero,
            hint: T::HINT,
        }
    }
}

impl<T> Codec<T> {
    /// Replaces the parser and/or formatter with policy overrides.
    pub(crate) fn with_overrides(
        mut self,
        parser: Option<Parser<T>>,
        formatter: Option<Formatter<T>>,
    ) -> Self {
        if let Some(parser) = parser {
            self.parse = parser;
        }
        if let Some(formatter) = formatter {
            self.format = formatter;
        }
        self
    }
}

impl<T: 'static> Codec<T> {
    /// Combines an optional built-in strategy with policy overrides.
    ///
    /// Policy parser/formatter always win. Without a built-in strategy both
    /// must be supplied, and the empty value is whatever the parser makes of
    /// `""`.
    pub(crate) fn resolve(
        native: Option<Self>,
        parser: Option<Parser<T>>,
        formatter: Option<Formatter<T>>,
    ) -> Result<Self, ConfigError> {
        match native {
            Some(codec) => Ok(codec.with_overrides(parser, formatter)),
            None => {
                let parse = parser.ok_or_else(|| ConfigError::unsupported::<T>("parser"))?;
                let format = formatter.ok_or_else(|| ConfigError::unsupported::<T>("formatter"))?;
                let empty_parse = Rc::clone(&parse);
                Ok(Self {
                    parse,
                    format,
                    empty: Rc::new(move || empty_parse("")),
                    is_zero: |_| false,
                    hint: InputHint::Any,
                })
            }
        }
    }
}

impl<T> fmt::Debug for Codec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Codec")
            .field("hint", &self.hint)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================
