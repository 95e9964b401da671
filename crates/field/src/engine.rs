//! The per-field validation state machine.
//!
//! A host feeds the engine four kinds of events: text edits, focus gained,
//! focus lost and external value changes. The engine answers with a
//! [`Decision`] and keeps the text the host should display.
//!
//! ```text
//!            focus_gained
//!    Idle ─────────────────▶ Editing
//!     ▲                         │
//!     └──────── focus_lost ─────┘
//! ```
//!
//! Rejections never touch the text directly. They schedule a [`Revert`]
//! that the host applies with [`ValidationEngine::flush`] after it has
//! rendered the rejected text; any later event flushes it first.

use std::fmt;
use std::rc::Rc;

use fieldguard_validator::foundation::validate_in_order;

use crate::error::ConfigError;
use crate::policy::{FieldOptions, FieldPolicy};
use crate::result::ValidationResult;
use crate::sink::{ErrorSink, TracingSink};
use crate::value::{Codec, FieldValue, InputHint};

/// The main validator of a field.
///
/// It may mutate owner state, hence `FnMut`.
pub type MainValidator<T> = Box<dyn FnMut(&T) -> ValidationResult<T>>;

// ============================================================================
// STATE
// ============================================================================

/// Whether the field currently holds focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    Editing,
}

/// Text the host should put back into the field, with the caret at `caret`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Revert {
    pub text: String,
    /// Caret position in characters; always the end of `text`.
    pub caret: usize,
}

impl Revert {
    fn to_end_of(text: String) -> Self {
        let caret = text.chars().count();
        Self { text, caret }
    }
}

/// Everything the engine remembers about one field.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineState<T> {
    committed_value: T,
    displayed_text: String,
    last_valid_text: String,
    phase: Phase,
    last_error: Option<String>,
    pending: Option<Revert>,
}

impl<T> EngineState<T> {
    fn new(committed_value: T, text: String) -> Self {
        Self {
            committed_value,
            displayed_text: text.clone(),
            last_valid_text: text,
            phase: Phase::Idle,
            last_error: None,
            pending: None,
        }
    }

    /// Last value the owner reported.
    pub fn committed_value(&self) -> &T {
        &self.committed_value
    }

    pub fn displayed_text(&self) -> &str {
        &self.displayed_text
    }

    /// Text a rejection reverts to.
    pub fn last_valid_text(&self) -> &str {
        &self.last_valid_text
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last reported message, cleared by the next acceptance.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn pending_revert(&self) -> Option<&Revert> {
        self.pending.as_ref()
    }
}

// ============================================================================
// DECISION
// ============================================================================

/// What the engine made of an event.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Decision<T> {
    /// Empty text while editing; nothing validated yet.
    Deferred,
    /// The value passed every check. The owner should commit it.
    Accepted(ValidationResult<T>),
    /// A pre-validator or the main validator rejected the input and a revert
    /// is pending.
    Rejected(ValidationResult<T>),
    /// The field was left empty and the `on_empty` hook ran instead of
    /// validation.
    EmptyHandled,
}

impl<T> Decision<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// The validated value, if any validation ran.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Accepted(result) | Self::Rejected(result) => Some(result.value()),
            Self::Deferred | Self::EmptyHandled => None,
        }
    }

    /// The rejection message, if one was reported.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Rejected(result) => result.message(),
            _ => None,
        }
    }
}

// ============================================================================
// ENGINE
// ============================================================================

/// Validation state machine for one editable field.
///
/// # Examples
///
/// ```
/// use fieldguard::{FieldPolicy, ValidationEngine, ValidationResult};
///
/// let mut age = ValidationEngine::new(
///     25,
///     |v: &i32| {
///         if *v < 18 {
///             ValidationResult::reject(25, "Debe ser mayor de 18 años.")
///         } else {
///             ValidationResult::accept(*v)
///         }
///     },
///     FieldPolicy::new().with_on_error(|_| {}),
/// );
///
/// age.focus_gained();
/// let decision = age.text_changed("15");
/// assert_eq!(decision.message(), Some("Debe ser mayor de 18 años."));
///
/// let revert = age.flush().unwrap();
/// assert_eq!(revert.text, "25");
/// assert_eq!(age.displayed_text(), "25");
/// ```
pub struct ValidationEngine<T> {
    state: EngineState<T>,
    policy: FieldPolicy<T>,
    codec: Codec<T>,
    validator: MainValidator<T>,
    sink: Rc<dyn ErrorSink>,
}

impl<T: FieldValue> ValidationEngine<T> {
    /// Creates an engine for a value type with a built-in text strategy.
    pub fn new(
        initial: T,
        validator: impl FnMut(&T) -> ValidationResult<T> + 'static,
        policy: FieldPolicy<T>,
    ) -> Self {
        let codec =
            Codec::native().with_overrides(policy.parser.clone(), policy.formatter.clone());
        Self::assemble(initial, Box::new(validator), policy, codec)
    }
}

impl<T> ValidationEngine<T>
where
    T: Clone + PartialEq + fmt::Debug + 'static,
{
    /// Creates an engine for a value type without a built-in text strategy.
    ///
    /// The policy must supply both a parser and a formatter.
    pub fn custom(
        initial: T,
        validator: impl FnMut(&T) -> ValidationResult<T> + 'static,
        policy: FieldPolicy<T>,
    ) -> Result<Self, ConfigError> {
        let codec = Codec::resolve(None, policy.parser.clone(), policy.formatter.clone())?;
        Ok(Self::assemble(initial, Box::new(validator), policy, codec))
    }

    pub(crate) fn assemble(
        initial: T,
        validator: MainValidator<T>,
        policy: FieldPolicy<T>,
        codec: Codec<T>,
    ) -> Self {
        let text = render(&codec, policy.options, &initial);
        tracing::debug!(?initial, %text, hint = %codec.hint, "field engine created");
        Self {
            state: EngineState::new(initial, text),
            policy,
            codec,
            validator,
            sink: Rc::new(TracingSink),
        }
    }

    /// Sends messages to `sink` when the policy has no `on_error` hook.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_error_sink(mut self, sink: impl ErrorSink + 'static) -> Self {
        self.sink = Rc::new(sink);
        self
    }

    pub(crate) fn set_sink(&mut self, sink: Rc<dyn ErrorSink>) {
        self.sink = sink;
    }

    // ------------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------------

    /// The field received focus. Repeated calls while editing are ignored.
    pub fn focus_gained(&mut self) {
        self.settle();
        if self.state.phase == Phase::Editing {
            tracing::trace!("focus_gained while already editing");
            return;
        }
        self.state.phase = Phase::Editing;
        self.state.last_valid_text.clone_from(&self.state.displayed_text);
        tracing::debug!(text = %self.state.displayed_text, "field editing started");
    }

    /// The user changed the text.
    pub fn text_changed(&mut self, text: &str) -> Decision<T> {
        self.settle();
        text.clone_into(&mut self.state.displayed_text);
        if text.is_empty() && self.state.phase == Phase::Editing {
            tracing::debug!("empty text while editing, validation deferred");
            return Decision::Deferred;
        }
        self.run_pipeline()
    }

    /// The field lost focus.
    pub fn focus_lost(&mut self) -> Decision<T> {
        self.settle();
        self.state.phase = Phase::Idle;
        tracing::debug!(text = %self.state.displayed_text, "field editing finished");

        if !self.state.displayed_text.is_empty() {
            return self.run_pipeline();
        }

        if let Some(on_empty) = &self.policy.on_empty {
            tracing::debug!("empty field handed to on_empty");
            on_empty();
            return Decision::EmptyHandled;
        }

        let value = (self.codec.empty)();
        let result = (self.validator)(&value);
        if result.is_accepted() && (self.codec.is_zero)(result.value()) {
            self.state.displayed_text = if self.policy.options.show_zero_as_empty {
                String::new()
            } else {
                "0".to_owned()
            };
        }
        let text = self.state.displayed_text.clone();
        self.conclude(text, result)
    }

    /// The owner's value changed outside the field.
    ///
    /// Returns `true` if the displayed text was replaced.
    pub fn external_value_changed(&mut self, value: T) -> bool {
        self.settle();
        let changed = value != self.state.committed_value;
        let previous = std::mem::replace(&mut self.state.committed_value, value);

        if !self.policy.options.auto_sync || self.state.phase == Phase::Editing || !changed {
            tracing::trace!(
                ?previous,
                changed,
                phase = ?self.state.phase,
                "external value recorded without sync"
            );
            return false;
        }

        let text = self.format(&self.state.committed_value);
        if text == self.state.displayed_text {
            return false;
        }
        tracing::debug!(?previous, %text, "displayed text synced from external value");
        self.state.displayed_text.clone_from(&text);
        self.state.last_valid_text = text;
        true
    }

    /// Applies the pending revert, if any, and returns it.
    pub fn flush(&mut self) -> Option<Revert> {
        let revert = self.state.pending.take()?;
        self.state.displayed_text.clone_from(&revert.text);
        tracing::debug!(text = %revert.text, caret = revert.caret, "revert applied");
        Some(revert)
    }

    // ------------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------------

    pub fn state(&self) -> &EngineState<T> {
        &self.state
    }

    pub fn displayed_text(&self) -> &str {
        self.state.displayed_text()
    }

    pub fn last_valid_text(&self) -> &str {
        self.state.last_valid_text()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.state.last_error()
    }

    pub fn committed_value(&self) -> &T {
        self.state.committed_value()
    }

    pub fn pending_revert(&self) -> Option<&Revert> {
        self.state.pending_revert()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn is_editing(&self) -> bool {
        self.state.phase == Phase::Editing
    }

    pub fn input_hint(&self) -> InputHint {
        self.codec.hint
    }

    pub fn options(&self) -> FieldOptions {
        self.policy.options
    }

    /// Renders `value` the way the field would display it.
    pub fn format(&self, value: &T) -> String {
        render(&self.codec, self.policy.options, value)
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn settle(&mut self) {
        if let Some(revert) = self.flush() {
            tracing::trace!(text = %revert.text, "pending revert flushed before event");
        }
    }

    fn run_pipeline(&mut self) -> Decision<T> {
        let text = self.state.displayed_text.clone();
        let value = (self.codec.parse)(&text);

        tracing::trace!(
            count = self.policy.pre_validators.len(),
            ?value,
            "running pre-validators"
        );
        if let Err(error) = validate_in_order(&value, &self.policy.pre_validators) {
            let message = error.into_message();
            tracing::debug!(%text, reason = %message, "pre-validation failed");
            self.report(&message);
            self.schedule_revert();
            return Decision::Rejected(ValidationResult::reject(value, message));
        }

        let result = (self.validator)(&value);
        self.conclude(text, result)
    }

    fn conclude(&mut self, text: String, result: ValidationResult<T>) -> Decision<T> {
        if result.is_accepted() {
            tracing::debug!(%text, value = ?result.value(), "input accepted");
            self.state.last_valid_text = text;
            self.state.last_error = None;
            return Decision::Accepted(result);
        }

        tracing::debug!(%text, reason = ?result.message(), "input rejected");
        match result.message() {
            Some(message) => self.report(message),
            None => self.state.last_error = None,
        }
        self.schedule_revert();
        Decision::Rejected(result)
    }

    fn report(&mut self, message: &str) {
        self.state.last_error = Some(message.to_owned());
        match &self.policy.on_error {
            Some(on_error) => on_error(message),
            None => self.sink.report(message),
        }
    }

    fn schedule_revert(&mut self) {
        let revert = Revert::to_end_of(self.state.last_valid_text.clone());
        tracing::debug!(text = %revert.text, caret = revert.caret, "revert scheduled");
        self.state.pending = Some(revert);
    }
}

fn render<T>(codec: &Codec<T>, options: FieldOptions, value: &T) -> String {
    if options.show_zero_as_empty && (codec.is_zero)(value) {
        String::new()
    } else {
        (codec.format)(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for ValidationEngine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationEngine")
            .field("state", &self.state)
            .field("policy", &self.policy)
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}
