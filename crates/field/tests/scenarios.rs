//! End-to-end field scenarios driven through the public API.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fieldguard::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// HELPERS
// ============================================================================

/// Installs a test subscriber once so `tracing` output is exercised.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[derive(Clone, Default)]
struct Messages(Rc<RefCell<Vec<String>>>);

impl Messages {
    fn handler(&self) -> impl Fn(&str) + 'static {
        let inner = Rc::clone(&self.0);
        move |message: &str| inner.borrow_mut().push(message.to_owned())
    }

    fn all(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

fn age_field(messages: &Messages) -> ValidationEngine<i32> {
    FieldBuilder::<i32>::new()
        .initial(25)
        .validator(|v: &i32| {
            if *v < 18 {
                ValidationResult::reject(25, "Debe ser mayor de 18 años.")
            } else {
                ValidationResult::accept(*v)
            }
        })
        .on_error(messages.handler())
        .build()
        .unwrap()
}

// ============================================================================
// AGE
// ============================================================================

#[test]
fn age_rejects_minor_and_reverts() {
    init_tracing();
    let messages = Messages::default();
    let mut age = age_field(&messages);

    age.focus_gained();
    let decision = age.text_changed("15");

    assert!(decision.is_rejected());
    assert_eq!(decision.value(), Some(&25));
    assert_eq!(messages.all(), ["Debe ser mayor de 18 años."]);

    let revert = age.flush().unwrap();
    assert_eq!(revert, Revert { text: "25".into(), caret: 2 });
    assert_eq!(age.displayed_text(), "25");
}

#[test]
fn age_accepts_adult() {
    let messages = Messages::default();
    let mut age = age_field(&messages);

    age.focus_gained();
    let decision = age.text_changed("30");

    assert_eq!(decision, Decision::Accepted(ValidationResult::accept(30)));
    assert_eq!(age.last_valid_text(), "30");
    assert!(messages.all().is_empty());
    assert!(age.pending_revert().is_none());
}

#[test]
fn age_reverts_to_last_accepted_text() {
    let messages = Messages::default();
    let mut age = age_field(&messages);

    age.focus_gained();
    assert!(age.text_changed("3").is_rejected());
    assert!(age.text_changed("31").is_accepted());
    assert!(age.text_changed("312").is_accepted());
    assert!(age.text_changed("3").is_rejected());
    assert_eq!(age.flush().map(|r| r.text), Some("312".to_string()));
}

// ============================================================================
// PRICE
// ============================================================================

#[test]
fn price_pre_validator_blocks_main_validator() {
    init_tracing();
    let messages = Messages::default();
    let main_calls = Rc::new(Cell::new(0));
    let calls = Rc::clone(&main_calls);

    let mut price = FieldBuilder::<f64>::new()
        .initial(10.0)
        .validator(move |v: &f64| {
            calls.set(calls.get() + 1);
            ValidationResult::accept(*v)
        })
        .pre_validator(min(1.00))
        .formatter(|v: &f64| format!("{v:.2}"))
        .on_error(messages.handler())
        .build()
        .unwrap();

    assert_eq!(price.displayed_text(), "10.00");
    assert_eq!(price.input_hint(), InputHint::Decimal);

    price.focus_gained();
    let decision = price.text_changed("0.5");

    assert!(decision.is_rejected());
    assert_eq!(messages.all(), ["El valor mínimo es 1.0"]);
    assert_eq!(main_calls.get(), 0);
    assert_eq!(price.flush().map(|r| r.text), Some("10.00".to_string()));

    assert!(price.text_changed("12.5").is_accepted());
    assert_eq!(main_calls.get(), 1);
}

#[test]
fn pre_validators_short_circuit_in_order() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let first = Rc::clone(&seen);
    let second = Rc::clone(&seen);

    let mut field = FieldBuilder::<i32>::new()
        .initial(1)
        .validator(|v: &i32| ValidationResult::accept(*v))
        .pre_validator(from_fn(move |_: &i32| {
            first.borrow_mut().push("A");
            Some("A falla".to_string())
        }))
        .pre_validator(from_fn(move |_: &i32| {
            second.borrow_mut().push("B");
            None
        }))
        .on_error(|_| {})
        .build()
        .unwrap();

    field.focus_gained();
    assert_eq!(field.text_changed("2").message(), Some("A falla"));
    assert_eq!(*seen.borrow(), ["A"]);
}

// ============================================================================
// EMPTY TEXT
// ============================================================================

#[test]
fn empty_while_editing_is_deferred() {
    let messages = Messages::default();
    let mut age = age_field(&messages);

    age.focus_gained();
    assert_eq!(age.text_changed(""), Decision::Deferred);
    assert_eq!(age.displayed_text(), "");
    assert!(age.pending_revert().is_none());
    assert!(messages.all().is_empty());
}

#[test]
fn empty_on_focus_lost_goes_to_on_empty() {
    let cleared = Rc::new(Cell::new(false));
    let flag = Rc::clone(&cleared);

    let mut field = FieldBuilder::<u32>::new()
        .initial(4)
        .validator(|v: &u32| ValidationResult::reject(*v, "no debería ejecutarse"))
        .on_empty(move || flag.set(true))
        .build()
        .unwrap();

    field.focus_gained();
    let _ = field.text_changed("");
    assert_eq!(field.focus_lost(), Decision::EmptyHandled);
    assert!(cleared.get());
    assert_eq!(field.displayed_text(), "");
    assert!(field.pending_revert().is_none());
}

#[rstest]
#[case(true, "")]
#[case(false, "0")]
fn empty_on_focus_lost_renders_zero(#[case] show_zero_as_empty: bool, #[case] expected: &str) {
    let mut field = FieldBuilder::<i64>::new()
        .initial(9)
        .validator(|v: &i64| ValidationResult::accept(*v))
        .show_zero_as_empty(show_zero_as_empty)
        .build()
        .unwrap();

    field.focus_gained();
    let _ = field.text_changed("");
    let decision = field.focus_lost();

    assert_eq!(decision.value(), Some(&0));
    assert_eq!(field.displayed_text(), expected);
    assert_eq!(field.last_valid_text(), expected);
}

#[test]
fn zero_as_empty_round_trip() {
    let mut field = FieldBuilder::<f64>::new()
        .initial(0.0)
        .validator(|v: &f64| ValidationResult::accept(*v))
        .show_zero_as_empty(true)
        .build()
        .unwrap();
    assert_eq!(field.displayed_text(), "");

    assert!(field.external_value_changed(2.5));
    assert_eq!(field.displayed_text(), "2.5");

    assert!(field.external_value_changed(0.0));
    assert_eq!(field.displayed_text(), "");
}

// ============================================================================
// EXTERNAL VALUES
// ============================================================================

#[test]
fn auto_sync_suppressed_while_editing() {
    let messages = Messages::default();
    let mut age = age_field(&messages);

    age.focus_gained();
    assert!(age.text_changed("40").is_accepted());
    assert!(!age.external_value_changed(50));
    assert_eq!(age.displayed_text(), "40");
    assert_eq!(age.committed_value(), &50);

    let _ = age.focus_lost();
    assert_eq!(age.displayed_text(), "40");
    assert!(age.external_value_changed(60));
    assert_eq!(age.displayed_text(), "60");
}

#[test]
fn owner_commits_accepted_values() {
    let messages = Messages::default();
    let mut age = age_field(&messages);

    age.focus_gained();
    if let Decision::Accepted(result) = age.text_changed("44") {
        // The owner writes the value back; the engine never reformats mid-edit.
        assert!(!age.external_value_changed(result.into_value()));
    } else {
        panic!("44 should be accepted");
    }
    assert_eq!(age.committed_value(), &44);
    assert_eq!(age.displayed_text(), "44");
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn options_loaded_from_json() {
    let options: FieldOptions =
        serde_json::from_str(r#"{ "auto_sync": false, "show_zero_as_empty": true }"#).unwrap();

    let mut field = FieldBuilder::<u16>::new()
        .initial(0)
        .validator(|v: &u16| ValidationResult::accept(*v))
        .options(options)
        .build()
        .unwrap();

    assert_eq!(field.displayed_text(), "");
    assert!(!field.external_value_changed(7));
    assert_eq!(field.displayed_text(), "");
}

#[derive(Debug, Clone, PartialEq)]
struct Money {
    cents: i64,
}

#[rstest]
#[case(false, true, "parser")]
#[case(true, false, "formatter")]
fn custom_type_reports_missing_hook(
    #[case] with_parser: bool,
    #[case] with_formatter: bool,
    #[case] missing: &str,
) {
    let mut builder = FieldBuilder::<Money>::custom()
        .initial(Money { cents: 0 })
        .validator(|m: &Money| ValidationResult::accept(m.clone()));
    if with_parser {
        builder = builder.parser(|_| Money { cents: 0 });
    }
    if with_formatter {
        builder = builder.formatter(|m| format!("{}", m.cents));
    }

    match builder.build() {
        Err(ConfigError::UnsupportedType { type_name, missing: got }) => {
            assert!(type_name.ends_with("Money"));
            assert_eq!(got, missing);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn custom_type_round_trip() {
    let mut field = FieldBuilder::<Money>::custom()
        .initial(Money { cents: 150 })
        .validator(|m: &Money| {
            if m.cents % 5 == 0 {
                ValidationResult::accept(m.clone())
            } else {
                ValidationResult::reject_silently(m.clone())
            }
        })
        .parser(|s| Money {
            cents: (s.parse::<f64>().unwrap_or(0.0) * 100.0).round() as i64,
        })
        .formatter(|m| format!("{}.{:02}", m.cents / 100, m.cents % 100))
        .build()
        .unwrap();

    assert_eq!(field.displayed_text(), "1.50");
    field.focus_gained();
    assert_eq!(field.text_changed("2.05").value(), Some(&Money { cents: 205 }));

    let decision = field.text_changed("2.07");
    assert!(decision.is_rejected());
    assert_eq!(decision.message(), None);
    assert_eq!(field.last_error(), None);
    assert_eq!(field.flush().map(|r| r.text), Some("2.05".to_string()));
}
