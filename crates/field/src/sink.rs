//! Where rejection messages go when the policy has no `on_error` hook.

/// Destination for user-facing rejection messages.
pub trait ErrorSink {
    fn report(&self, message: &str);
}

/// Default sink: emits the message as a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn report(&self, message: &str) {
        tracing::warn!(reason = message, "field input rejected");
    }
}

impl<F: Fn(&str)> ErrorSink for F {
    fn report(&self, message: &str) {
        self(message);
    }
}
