//! Per-field configuration.

use std::borrow::Borrow;
use std::fmt;
use std::rc::Rc;

use fieldguard_validator::foundation::{Validate, ValidateExt};
use serde::{Deserialize, Serialize};

use crate::value::{Formatter, Parser};

/// Receives the message of a rejected input.
pub type ErrorHandler = Rc<dyn Fn(&str)>;

/// Runs when the field loses focus while empty.
pub type EmptyHandler = Rc<dyn Fn()>;

/// A boxed pre-validator over the field's value type.
pub type PreValidator<T> = Box<dyn Validate<Input = T>>;

// ============================================================================
// OPTIONS
// ============================================================================

/// Plain behaviour switches of a field.
///
/// These are the parts of a policy that can live in a config file.
///
/// ```
/// use fieldguard::FieldOptions;
///
/// let options: FieldOptions = serde_json::from_str(r#"{ "show_zero_as_empty": true }"#).unwrap();
/// assert!(options.auto_sync);
/// assert!(options.show_zero_as_empty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldOptions {
    /// Mirror external value changes into the text while the field is idle.
    pub auto_sync: bool,
    /// Render a zero value as empty text.
    pub show_zero_as_empty: bool,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            auto_sync: true,
            show_zero_as_empty: false,
        }
    }
}

// ============================================================================
// POLICY
// ============================================================================

/// Optional hooks and switches for a [`ValidationEngine`](crate::ValidationEngine).
///
/// Every part is optional. A parser or formatter set here overrides the value
/// type's built-in strategy.
pub struct FieldPolicy<T> {
    pub(crate) parser: Option<Parser<T>>,
    pub(crate) formatter: Option<Formatter<T>>,
    pub(crate) on_error: Option<ErrorHandler>,
    pub(crate) on_empty: Option<EmptyHandler>,
    pub(crate) pre_validators: Vec<PreValidator<T>>,
    pub(crate) options: FieldOptions,
}

impl<T> FieldPolicy<T> {
    /// Empty policy: no hooks, no pre-validators, default options.
    pub fn new() -> Self {
        Self {
            parser: None,
            formatter: None,
            on_error: None,
            on_empty: None,
            pre_validators: Vec::new(),
            options: FieldOptions::default(),
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_parser(mut self, parser: impl Fn(&str) -> T + 'static) -> Self {
        self.parser = Some(Rc::new(parser));
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_formatter(mut self, formatter: impl Fn(&T) -> String + 'static) -> Self {
        self.formatter = Some(Rc::new(formatter));
        self
    }

    /// Routes rejection messages to `handler` instead of the engine's sink.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_on_error(mut self, handler: impl Fn(&str) + 'static) -> Self {
        self.on_error = Some(Rc::new(handler));
        self
    }

    /// Replaces empty-field validation on focus loss with `handler`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_on_empty(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_empty = Some(Rc::new(handler));
        self
    }

    /// Appends a pre-validator. Pre-validators run in insertion order and
    /// stop at the first failure.
    ///
    /// The rule may target any type `T` borrows as, so `str` rules such as
    /// `length` or `email` apply directly to a `String` field.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_pre_validator<I>(mut self, validator: impl Validate<Input = I> + 'static) -> Self
    where
        I: ?Sized + 'static,
        T: Borrow<I> + 'static,
    {
        self.pre_validators.push(Box::new(validator.borrowed::<T>()));
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_auto_sync(mut self, auto_sync: bool) -> Self {
        self.options.auto_sync = auto_sync;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_show_zero_as_empty(mut self, show_zero_as_empty: bool) -> Self {
        self.options.show_zero_as_empty = show_zero_as_empty;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn options(&self) -> FieldOptions {
        self.options
    }

    #[must_use]
    pub fn pre_validator_count(&self) -> usize {
        self.pre_validators.len()
    }
}

impl<T> Default for FieldPolicy<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for FieldPolicy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldPolicy")
            .field("parser", &self.parser.is_some())
            .field("formatter", &self.formatter.is_some())
            .field("on_error", &self.on_error.is_some())
            .field("on_empty", &self.on_empty.is_some())
            .field("pre_validators", &self.pre_validators.len())
            .field("options", &self.options)
            .finish()
    }
}
