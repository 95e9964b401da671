//! Text content validators

use std::sync::LazyLock;

use crate::foundation::ValidationError;

// local-part "@" one-or-more "label." then a TLD of two or more letters
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[A-Za-z0-9._%+-]+@(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,}$").unwrap()
});

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates the conventional `local@domain.tld` email shape.
    ///
    /// The domain needs at least one dot and the top-level label must be two
    /// or more letters.
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) {
        ValidationError::new("email", "Correo electrónico no válido")
            .with_param("expected", "email")
    }
    fn email();
}

// ============================================================================
// TESTS
// ============================================================================
