//! Fuzz target for whole-form validation.
//!
//! Tests that validation never panics and reports every empty field.

#![no_main]

use arbitrary::Arbitrary;
use card_input::{validate_at, CardValues, Field};
use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Form<'a> {
    number: &'a str,
    name: &'a str,
    expiry: &'a str,
    cvc: &'a str,
}

fuzz_target!(|form: Form<'_>| {
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let values = CardValues::new(form.number, form.name, form.expiry, form.cvc);
    let errors = validate_at(&values, today);

    for field in Field::ALL {
        if values.get(field).trim().is_empty() {
            assert!(errors.get(field).is_some(), "empty {} accepted", field);
        }
    }
    assert_eq!(errors.has_errors(), errors.iter().next().is_some());
});
