//! Configuration error types.
//!
//! These are programmer errors: a field wired up without something it needs.
//! Rejected user input is never an error; it is a
//! [`Decision`](crate::Decision).

/// Errors raised while assembling a field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The value type has no built-in text strategy and the policy did not
    /// supply the missing piece.
    #[error("unsupported field type `{type_name}`: no {missing} supplied")]
    UnsupportedType {
        /// Name of the value type.
        type_name: &'static str,
        /// `"parser"` or `"formatter"`.
        missing: &'static str,
    },

    /// `build()` was called before an initial value was set.
    #[error("field is missing an initial value")]
    MissingInitialValue,

    /// `build()` was called before a main validator was set.
    #[error("field is missing a main validator")]
    MissingValidator,
}

impl ConfigError {
    pub(crate) fn unsupported<T>(missing: &'static str) -> Self {
        Self::UnsupportedType {
            type_name: std::any::type_name::<T>(),
            missing,
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedType { .. } => "FIELD_UNSUPPORTED_TYPE",
            Self::MissingInitialValue => "FIELD_MISSING_INITIAL_VALUE",
            Self::MissingValidator => "FIELD_MISSING_VALIDATOR",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_messages() {
        let err = ConfigError::UnsupportedType {
            type_name: "my_app::Money",
            missing: "parser",
        };
        assert_eq!(
            err.to_string(),
            "unsupported field type `my_app::Money`: no parser supplied"
        );
        assert_eq!(
            ConfigError::MissingInitialValue.to_string(),
            "field is missing an initial value"
        );
        assert_eq!(
            ConfigError::MissingValidator.to_string(),
            "field is missing a main validator"
        );
    }

    #[test]
    fn unsupported_names_the_type() {
        struct Money;
        let err = ConfigError::unsupported::<Money>("formatter");
        match err {
            ConfigError::UnsupportedType { type_name, missing } => {
                assert!(type_name.ends_with("Money"));
                assert_eq!(missing, "formatter");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn codes() {
        assert_eq!(
            ConfigError::unsupported::<u8>("parser").code(),
            "FIELD_UNSUPPORTED_TYPE"
        );
        assert_eq!(
            ConfigError::MissingInitialValue.code(),
            "FIELD_MISSING_INITIAL_VALUE"
        );
        assert_eq!(ConfigError::MissingValidator.code(), "FIELD_MISSING_VALIDATOR");
    }
}
