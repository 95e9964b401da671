//! Fluent construction of a [`ValidationEngine`].

use std::borrow::Borrow;
use std::fmt;
use std::rc::Rc;

use fieldguard_validator::foundation::Validate;

use crate::engine::{MainValidator, ValidationEngine};
use crate::error::ConfigError;
use crate::policy::{FieldOptions, FieldPolicy};
use crate::result::ValidationResult;
use crate::sink::ErrorSink;
use crate::value::{Codec, FieldValue};

/// Builder for a [`ValidationEngine`].
///
/// # Examples
///
/// ```
/// use fieldguard::{FieldBuilder, ValidationResult};
/// use fieldguard_validator::validators::min;
///
/// let mut price = FieldBuilder::<f64>::new()
///     .initial(2.5)
///     .validator(|v: &f64| ValidationResult::accept(*v))
///     .pre_validator(min(1.00))
///     .formatter(|v: &f64| format!("{v:.2}"))
///     .on_error(|_| {})
///     .build()
///     .unwrap();
///
/// assert_eq!(price.displayed_text(), "2.50");
/// price.focus_gained();
/// assert_eq!(price.text_changed("0.5").message(), Some("El valor mínimo es 1.0"));
/// ```
#[must_use = "builders do nothing until `build()` is called"]
pub struct FieldBuilder<T> {
    initial: Option<T>,
    validator: Option<MainValidator<T>>,
    policy: FieldPolicy<T>,
    sink: Option<Rc<dyn ErrorSink>>,
    native: Option<Codec<T>>,
}

impl<T: FieldValue> FieldBuilder<T> {
    /// Builder for a value type with a built-in text strategy.
    pub fn new() -> Self {
        Self::with_codec(Some(Codec::native()))
    }
}

impl<T: FieldValue> Default for FieldBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FieldBuilder<T>
where
    T: Clone + PartialEq + fmt::Debug + 'static,
{
    /// Builder for any other value type; `parser` and `formatter` are required.
    pub fn custom() -> Self {
        Self::with_codec(None)
    }

    fn with_codec(native: Option<Codec<T>>) -> Self {
        Self {
            initial: None,
            validator: None,
            policy: FieldPolicy::new(),
            sink: None,
            native,
        }
    }

    pub fn initial(mut self, value: T) -> Self {
        self.initial = Some(value);
        self
    }

    pub fn validator(mut self, validator: impl FnMut(&T) -> ValidationResult<T> + 'static) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    pub fn parser(mut self, parser: impl Fn(&str) -> T + 'static) -> Self {
        self.policy = self.policy.with_parser(parser);
        self
    }

    pub fn formatter(mut self, formatter: impl Fn(&T) -> String + 'static) -> Self {
        self.policy = self.policy.with_formatter(formatter);
        self
    }

    pub fn on_error(mut self, handler: impl Fn(&str) + 'static) -> Self {
        self.policy = self.policy.with_on_error(handler);
        self
    }

    pub fn on_empty(mut self, handler: impl Fn() + 'static) -> Self {
        self.policy = self.policy.with_on_empty(handler);
        self
    }

    /// Appends a pre-validator; call repeatedly to add more, in order.
    ///
    /// Rules over a borrowed form of `T` (e.g. `str` for `String`) are accepted.
    pub fn pre_validator<I>(mut self, validator: impl Validate<Input = I> + 'static) -> Self
    where
        I: ?Sized + 'static,
        T: Borrow<I>,
    {
        self.policy = self.policy.with_pre_validator(validator);
        self
    }

    pub fn auto_sync(mut self, auto_sync: bool) -> Self {
        self.policy = self.policy.with_auto_sync(auto_sync);
        self
    }

    pub fn show_zero_as_empty(mut self, show_zero_as_empty: bool) -> Self {
        self.policy = self.policy.with_show_zero_as_empty(show_zero_as_empty);
        self
    }

    pub fn options(mut self, options: FieldOptions) -> Self {
        self.policy = self.policy.with_options(options);
        self
    }

    pub fn error_sink(mut self, sink: impl ErrorSink + 'static) -> Self {
        self.sink = Some(Rc::new(sink));
        self
    }

    /// Builds the engine.
    ///
    /// Checks run in order: initial value, main validator, text strategy.
    pub fn build(self) -> Result<ValidationEngine<T>, ConfigError> {
        let initial = self.initial.ok_or(ConfigError::MissingInitialValue)?;
        let validator = self.validator.ok_or(ConfigError::MissingValidator)?;
        let codec = Codec::resolve(
            self.native,
            self.policy.parser.clone(),
            self.policy.formatter.clone(),
        )?;

        let mut engine = ValidationEngine::assemble(initial, validator, self.policy, codec);
        if let Some(sink) = self.sink {
            engine.set_sink(sink);
        }
        Ok(engine)
    }
}

impl<T: fmt::Debug> fmt::Debug for FieldBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBuilder")
            .field("initial", &self.initial)
            .field("validator", &self.validator.is_some())
            .field("policy", &self.policy)
            .field("error_sink", &self.sink.is_some())
            .field("native", &self.native.is_some())
            .finish()
    }
}
