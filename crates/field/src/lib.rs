//! # fieldguard
//!
//! Turns the free text of an editable field into a typed value, checks it
//! against pluggable rules and decides what the field should display.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldguard::prelude::*;
//!
//! let mut age = FieldBuilder::<i32>::new()
//!     .initial(25)
//!     .validator(|v: &i32| {
//!         if *v < 18 {
//!             ValidationResult::reject(25, "Debe ser mayor de 18 años.")
//!         } else {
//!             ValidationResult::accept(*v)
//!         }
//!     })
//!     .on_error(|_| {})
//!     .build()
//!     .unwrap();
//!
//! age.focus_gained();
//! assert!(age.text_changed("15").is_rejected());
//! assert_eq!(age.flush().map(|r| r.text).as_deref(), Some("25"));
//! assert!(age.text_changed("30").is_accepted());
//! ```
//!
//! ## Pieces
//!
//! - [`ValidationResult`]: what a main validator returns.
//! - [`FieldPolicy`]: parser, formatter, hooks, pre-validators and
//!   [`FieldOptions`].
//! - [`ValidationEngine`]: the per-field state machine.
//! - [`FieldBuilder`]: fluent construction with [`ConfigError`] checks.
//!
//! Pre-validators are [`validator`] rules; the crate is re-exported here.

pub mod builder;
pub mod engine;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod result;
pub mod sink;
pub mod value;

pub use fieldguard_validator as validator;

pub use builder::FieldBuilder;
pub use engine::{Decision, EngineState, MainValidator, Phase, Revert, ValidationEngine};
pub use error::ConfigError;
pub use policy::{EmptyHandler, ErrorHandler, FieldOptions, FieldPolicy, PreValidator};
pub use result::ValidationResult;
pub use sink::{ErrorSink, TracingSink};
pub use value::{FieldValue, Formatter, InputHint, Parser};
