//! Fuzz target for masked previews.
//!
//! Previews keep the placeholder width for any input, multi-byte included.

#![no_main]

use card_input::mask;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    let (value, number) = data;

    assert_eq!(mask::mask_number(value).chars().count(), 19);
    assert_eq!(mask::mask_expiry(value).chars().count(), 5);

    let cvc = mask::mask_cvc(value, number).chars().count();
    assert!(cvc == 3 || cvc == 4);

    let _ = mask::normalise_name(value);
    let _ = mask::redact_number(value);
});
