//! Built-in validators
//!
//! # Categories
//!
//! - **Numeric**: range bounds, integer multiples
//! - **Text**: length, email shape
//! - **Ad hoc**: predicate + message, closure adapters
//!
//! # Examples
//!
//! ```rust
//! use fieldguard_validator::prelude::*;
//!
//! let age = in_range(18, 120);
//! let quantity = min(1).and(multiple_of(5));
//! let username = length(3, Some(20));
//!
//! assert!(age.validate(&30).is_ok());
//! assert!(quantity.validate(&10).is_ok());
//! assert!(username.validate("ana").is_ok());
//! ```

// Numeric validators
pub mod divisibility;
pub mod range;

// Text validators
pub mod content;
pub mod length;

// Closure-backed validators
pub mod custom;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use divisibility::{Integer, MultipleOf, multiple_of};
pub use range::{InRange, Max, Min, in_range, max, min};

pub use content::{Email, email};
pub use length::{Length, MaxLength, MinLength, length, max_length, min_length};

pub use custom::{Custom, FnValidator, custom, from_fn};
