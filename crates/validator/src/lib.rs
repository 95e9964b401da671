//! # fieldguard-validator
//!
//! Small, composable value rules used as pre-validators by `fieldguard`
//! fields and usable on their own.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldguard_validator::prelude::*;
//!
//! let age = min(18).and(max(120));
//! assert!(age.validate(&30).is_ok());
//! assert_eq!(age.check(&15).as_deref(), Some("El valor mínimo es 18"));
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for struct-shaped rules, [`validators::custom`]
//! for a predicate plus fixed message, or [`validators::from_fn`] to adapt a
//! closure returning an optional message.
//!
//! ## Built-in Validators
//!
//! - **Numeric**: [`Min`](validators::Min), [`Max`](validators::Max),
//!   [`InRange`](validators::InRange), [`MultipleOf`](validators::MultipleOf)
//! - **Text**: [`Length`](validators::Length), [`MinLength`](validators::MinLength),
//!   [`MaxLength`](validators::MaxLength), [`Email`](validators::Email)
//! - **Ad hoc**: [`Custom`](validators::Custom), [`FnValidator`](validators::FnValidator)

// ValidationError is the fundamental error type for all validators;
// boxing it would add indirection to every validation call.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
