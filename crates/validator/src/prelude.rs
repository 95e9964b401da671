//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldguard_validator::prelude::*;` import that brings
//! in the traits, error type, validators, and combinators.
//!
//! # Examples
//!
//! ```rust
//! use fieldguard_validator::prelude::*;
//!
//! let username = length(3, Some(20));
//! let age = in_range(18, 100);
//! let contact = email().with_message("Introduce un correo válido");
//!
//! assert!(username.validate("ana").is_ok());
//! assert!(age.validate(&40).is_ok());
//! assert!(contact.validate("ana@").is_err());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{Validate, ValidateExt, ValidationError, validate_in_order};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{And, Borrowed, WithMessage, and, borrowed, with_message};
