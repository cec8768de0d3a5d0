//! Fuzz target for field formatting.
//!
//! Formatters must never panic and must be stable on their own output.

#![no_main]

use card_input::{detect_issuer, extract_digits, format};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    let (raw, number) = data;

    let formatted = format::format_number(raw);
    assert_eq!(format::format_number(&formatted), formatted, "number not idempotent");
    assert_eq!(detect_issuer(&formatted), detect_issuer(raw), "issuer changed");
    assert!(extract_digits(raw).starts_with(&extract_digits(&formatted)));

    let expiry = format::format_expiry(raw);
    assert!(expiry.len() <= 5);
    assert_eq!(format::format_expiry(&expiry), expiry, "expiry not idempotent");

    let cvc = format::format_cvc(raw, number);
    assert!(cvc.len() <= 4);
    assert_eq!(format::format_cvc(&cvc, number), cvc, "cvc not idempotent");
});
