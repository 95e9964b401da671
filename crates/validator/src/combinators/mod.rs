//! Validator combinators
//!
//! - [`And`] — both validators must pass, short-circuits on the first failure
//! - [`WithMessage`] — replaces the reported message
//! - [`Borrowed`] — runs a rule on any input that borrows as its own

pub mod and;
pub mod borrowed;
pub mod message;

pub use and::{And, and};
pub use borrowed::{Borrowed, borrowed};
pub use message::{WithMessage, with_message};
