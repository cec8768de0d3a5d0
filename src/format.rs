//! Keystroke formatting for the card number, expiry and security code.
//!
//! Every formatter clears non-digits first and rebuilds its output from the
//! cleaned digits, so running a formatter on its own output is a no-op.
//!
//! # Format Conventions
//!
//! - **American Express** (15 digits): `XXXX XXXXXX XXXXX`
//! - **Diners Club** (14 digits): `XXXX XXXXXX XXXX`
//! - **Everything else** (16 digits): `XXXX XXXX XXXX XXXX`
//!
//! # Example
//!
//! ```
//! use card_input::format::{format_cvc, format_expiry, format_number};
//!
//! assert_eq!(format_number("4111111111111111"), "4111 1111 1111 1111");
//! assert_eq!(format_number("371449635398431"), "3714 496353 98431");
//! assert_eq!(format_expiry("1225"), "12/25");
//! assert_eq!(format_cvc("12345", "371449635398431"), "1234");
//! ```

use crate::card::{grouping, max_length};
use crate::cvc::cvc_length;
use crate::detect::detect_issuer;
use crate::digits::extract_digits;

/// Digits kept by the expiry formatter (`MMYY`).
pub const EXPIRY_DIGITS: usize = 4;

/// Formats a card number as the user types.
///
/// Clears non-digits, truncates to the issuer's maximum length (Amex 15,
/// Diners Club 14, everything else 16) and groups the digits with single
/// spaces.
///
/// # Example
///
/// ```
/// use card_input::format::format_number;
///
/// assert_eq!(format_number("4111"), "4111");
/// assert_eq!(format_number("41111"), "4111 1");
/// assert_eq!(format_number("30569309025904"), "3056 930902 5904");
/// assert_eq!(format_number("4111-1111-1111-1111-999"), "4111 1111 1111 1111");
/// ```
pub fn format_number(raw: &str) -> String {
    let digits = extract_digits(raw);
    if digits.is_empty() {
        return String::new();
    }

    let issuer = detect_issuer(&digits);
    let kept = &digits[..digits.len().min(max_length(issuer))];

    group_digits(kept, grouping(issuer), " ")
}

/// Splits a digit string into groups and joins them with `separator`.
///
/// Group sizes count characters, not bytes. Groups past the end of
/// `digits` are not emitted, so a partial number never ends with a
/// separator. Digits past the last group are appended as one final group.
///
/// # Example
///
/// ```
/// use card_input::format::group_digits;
///
/// assert_eq!(group_digits("3714496353", &[4, 6, 5], " "), "3714 496353");
/// assert_eq!(group_digits("411111", &[4, 4, 4, 4], "-"), "4111-11");
/// ```
pub fn group_digits(digits: &str, groups: &[usize], separator: &str) -> String {
    let mut result = String::with_capacity(digits.len() + groups.len() * separator.len());
    let mut rest = digits;

    for &size in groups {
        if rest.is_empty() {
            break;
        }
        let at = rest.char_indices().nth(size).map_or(rest.len(), |(index, _)| index);
        let (group, tail) = rest.split_at(at);
        if !result.is_empty() {
            result.push_str(separator);
        }
        result.push_str(group);
        rest = tail;
    }

    if !rest.is_empty() {
        if !result.is_empty() {
            result.push_str(separator);
        }
        result.push_str(rest);
    }

    result
}

/// Formats an expiry date as the user types.
///
/// Clears non-digits and keeps four of them. Up to two digits pass through
/// unchanged; with three or four a `/` separates month from year. No
/// calendar checks happen here.
///
/// # Example
///
/// ```
/// use card_input::format::format_expiry;
///
/// assert_eq!(format_expiry("1"), "1");
/// assert_eq!(format_expiry("12"), "12");
/// assert_eq!(format_expiry("122"), "12/2");
/// assert_eq!(format_expiry("12/2599"), "12/25");
/// ```
pub fn format_expiry(raw: &str) -> String {
    let digits = extract_digits(raw);
    let kept = &digits[..digits.len().min(EXPIRY_DIGITS)];

    if kept.len() <= 2 {
        return kept.to_string();
    }

    format!("{}/{}", &kept[..2], &kept[2..])
}

/// Formats a security code as the user types.
///
/// Clears non-digits and truncates to the code length of the issuer
/// detected from the sibling `number` field: 4 for Amex, 3 otherwise.
///
/// # Example
///
/// ```
/// use card_input::format::format_cvc;
///
/// assert_eq!(format_cvc("1234", "4111 1111 1111 1111"), "123");
/// assert_eq!(format_cvc("1234", "3714 496353 98431"), "1234");
/// assert_eq!(format_cvc("1a2", ""), "12");
/// ```
pub fn format_cvc(raw: &str, number: &str) -> String {
    let digits = extract_digits(raw);
    let length = cvc_length(detect_issuer(number));

    digits[..digits.len().min(length)].to_string()
}
