//! Fuzz target for expiry date parsing.
//!
//! Tests that expiry parsing never panics on arbitrary input.

#![no_main]

use card_input::expiry;
use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

    let _ = expiry::validate_expiry_at(data, today);

    // If parsing succeeds, test other methods
    if let Ok(exp) = expiry::parse_expiry(data) {
        assert!((1..=12).contains(&exp.month()));
        let _ = exp.is_expired_at(today);
        let _ = exp.months_until_expiry_at(today);
        let _ = exp.format_short();
        let _ = exp.to_string();
    }
});
