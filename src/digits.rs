//! Digit extraction from raw keystroke text.

/// Returns the ASCII digits of `raw`, in their original order.
///
/// Spaces, punctuation, letters and any other characters are dropped.
///
/// # Example
///
/// ```
/// use card_input::digits::extract_digits;
///
/// assert_eq!(extract_digits("4111-1111 1111.1111"), "4111111111111111");
/// assert_eq!(extract_digits("12/25"), "1225");
/// assert_eq!(extract_digits(""), "");
/// ```
#[inline]
pub fn extract_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Returns the ASCII digits of `raw` as numeric values (0-9).
///
/// This is the representation the detector and the Luhn check work on.
#[inline]
pub fn digit_values(raw: &str) -> Vec<u8> {
    raw.bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}
