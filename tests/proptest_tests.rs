//! Property-based tests using proptest.
//!
//! These tests check invariants that hold for every keystroke sequence,
//! not just the hand-picked fixtures.

use card_input::{
    detect::detect_brand, detect_issuer, extract_digits, format, luhn, mask, passes_luhn,
    validate::validate_number, validate_at, CardBrand, CardValues,
};
use chrono::NaiveDate;
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

/// A representative prefix for each brand.
fn sample_prefix(brand: CardBrand) -> &'static [u8] {
    match brand {
        CardBrand::Visa => &[4],
        CardBrand::Mastercard => &[5, 1],
        CardBrand::Amex => &[3, 7],
        CardBrand::Discover => &[6, 0, 1, 1],
        CardBrand::Jcb => &[3, 5, 3, 0],
        CardBrand::DinersClub => &[3, 6],
        CardBrand::UnionPay => &[6, 2],
        CardBrand::Maestro => &[6, 7],
    }
}

fn brand_strategy() -> impl Strategy<Value = CardBrand> {
    proptest::sample::select(CardBrand::ALL.to_vec())
}

/// Generates a Luhn-valid number of a valid length for a random brand.
fn valid_card_strategy() -> impl Strategy<Value = (CardBrand, String)> {
    brand_strategy()
        .prop_flat_map(|brand| {
            let length = proptest::sample::select(brand.valid_lengths().to_vec());
            (Just(brand), length)
        })
        .prop_flat_map(|(brand, length)| {
            let fill = length - 1 - sample_prefix(brand).len();
            (Just(brand), proptest::collection::vec(0u8..=9, fill))
        })
        .prop_map(|(brand, fill)| {
            let mut digits = sample_prefix(brand).to_vec();
            digits.extend(fill);
            digits.push(luhn::generate_check_digit(&digits));
            let number = digits.iter().map(|d| char::from(b'0' + d)).collect();
            (brand, number)
        })
}

/// Keystroke-like input: digits mixed with separators and junk.
fn keystrokes() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            4 => prop::char::range('0', '9'),
            1 => Just(' '),
            1 => Just('-'),
            1 => Just('/'),
            1 => any::<char>(),
        ],
        0..30,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

// =============================================================================
// DIGIT EXTRACTOR
// =============================================================================

proptest! {
    /// Property: Output holds only ASCII digits.
    #[test]
    fn extract_digits_only_digits(input in any::<String>()) {
        let digits = extract_digits(&input);
        prop_assert!(digits.bytes().all(|b| b.is_ascii_digit()));
    }

    /// Property: Output is the input's digits, in order.
    #[test]
    fn extract_digits_is_subsequence(input in keystrokes()) {
        let digits = extract_digits(&input);
        let mut remaining = input.chars();
        for d in digits.chars() {
            prop_assert!(remaining.any(|c| c == d));
        }
        prop_assert_eq!(digits.len(), input.chars().filter(char::is_ascii_digit).count());
    }
}

// =============================================================================
// FORMATTERS
// =============================================================================

proptest! {
    /// Property: Formatting a formatted number changes nothing.
    #[test]
    fn format_number_idempotent(input in keystrokes()) {
        let once = format::format_number(&input);
        prop_assert_eq!(format::format_number(&once), once);
    }

    /// Property: Formatted numbers hold digits and single spaces only.
    #[test]
    fn format_number_shape(input in keystrokes()) {
        let formatted = format::format_number(&input);
        prop_assert!(formatted.chars().all(|c| c.is_ascii_digit() || c == ' '));
        prop_assert!(!formatted.starts_with(' '));
        prop_assert!(!formatted.ends_with(' '));
        prop_assert!(!formatted.contains("  "));
        prop_assert!(extract_digits(&formatted).len() <= 16);
    }

    /// Property: Formatting never changes the detected issuer.
    #[test]
    fn format_keeps_issuer(input in keystrokes()) {
        prop_assert_eq!(detect_issuer(&format::format_number(&input)), detect_issuer(&input));
    }

    /// Property: Grouping keeps every character and never splits one.
    #[test]
    fn group_digits_any_text(
        input in any::<String>(),
        groups in proptest::collection::vec(1usize..8, 0..5),
    ) {
        let grouped = format::group_digits(&input, &groups, "|");
        let rejoined: String = grouped.split('|').collect();
        prop_assert_eq!(rejoined, input.replace('|', ""));
    }

    /// Property: Expiry formatting is idempotent and at most `MM/YY`.
    #[test]
    fn format_expiry_idempotent(input in keystrokes()) {
        let once = format::format_expiry(&input);
        prop_assert!(once.len() <= 5);
        prop_assert_eq!(format::format_expiry(&once), once);
    }

    /// Property: Security codes never exceed the issuer's length.
    #[test]
    fn format_cvc_bounded(input in keystrokes(), number in keystrokes()) {
        let once = format::format_cvc(&input, &number);
        let limit = if detect_issuer(&number) == Some(CardBrand::Amex) { 4 } else { 3 };
        prop_assert!(once.len() <= limit);
        prop_assert_eq!(format::format_cvc(&once, &number), once);
    }
}

// =============================================================================
// MASKING
// =============================================================================

proptest! {
    /// Property: Previews always have the placeholder's width.
    #[test]
    fn mask_widths_fixed(value in any::<String>(), number in keystrokes()) {
        prop_assert_eq!(mask::mask_number(&value).chars().count(), 19);
        prop_assert_eq!(mask::mask_expiry(&value).chars().count(), 5);

        let cvc_width = if detect_issuer(&number) == Some(CardBrand::Amex) { 4 } else { 3 };
        prop_assert_eq!(mask::mask_cvc(&value, &number).chars().count(), cvc_width);
    }

    /// Property: Typed characters show through unchanged.
    #[test]
    fn mask_keeps_typed_prefix(value in keystrokes()) {
        let masked = mask::mask_number(&value);
        let shown: String = value.chars().take(19).collect();
        prop_assert!(masked.starts_with(&shown));
    }

    /// Property: Display names are never blank and never too long.
    #[test]
    fn normalise_name_bounded(name in any::<String>()) {
        let shown = mask::normalise_name(&name);
        prop_assert!(!shown.trim().is_empty());
        prop_assert!(shown.chars().count() <= 26 * 3);
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

proptest! {
    /// Property: Luhn-valid numbers of a valid length are accepted.
    #[test]
    fn generated_cards_are_valid((brand, number) in valid_card_strategy()) {
        prop_assert!(passes_luhn(&number));
        prop_assert_eq!(validate_number(&number), Ok(brand));
    }

    /// Property: Any single-digit change breaks the checksum.
    #[test]
    fn single_digit_typo_detected(
        (_, number) in valid_card_strategy(),
        position in any::<prop::sample::Index>(),
        delta in 1u8..=9,
    ) {
        let mut digits: Vec<u8> = number.bytes().map(|b| b - b'0').collect();
        let i = position.index(digits.len());
        digits[i] = (digits[i] + delta) % 10;
        prop_assert!(!luhn::validate(&digits));
    }

    /// Property: Detection only looks at the leading digits.
    #[test]
    fn detection_is_prefix_stable(
        (brand, number) in valid_card_strategy(),
        tail in proptest::collection::vec(0u8..=9, 0..4),
    ) {
        let mut digits: Vec<u8> = number.bytes().map(|b| b - b'0').collect();
        digits.extend(tail);
        prop_assert_eq!(detect_brand(&digits), Some(brand));
    }

    /// Property: The name never changes how other fields validate.
    #[test]
    fn fields_are_independent(
        (_, number) in valid_card_strategy(),
        name in any::<String>(),
    ) {
        let cvc = format::format_cvc("1234", &number);
        let values = CardValues::new(number, name, "12/30", cvc);
        let errors = validate_at(&values, today());
        prop_assert_eq!(errors.number, None);
        prop_assert_eq!(errors.expiry, None);
        prop_assert_eq!(errors.cvc, None);
    }

    /// Property: Validation never panics on arbitrary input.
    #[test]
    fn validate_total(
        number in any::<String>(),
        name in any::<String>(),
        expiry in any::<String>(),
        cvc in any::<String>(),
    ) {
        let values = CardValues::new(number, name, expiry, cvc);
        let _ = validate_at(&values, today());
    }
}
