//! Card brand detection using BIN/IIN prefix matching.
//!
//! The Bank Identification Number (BIN), also known as Issuer Identification
//! Number (IIN), is the leading digits of a card number. Detection walks a
//! single ordered table of prefix ranges; the first matching rule wins.
//!
//! A rule only matches once all of its prefix digits have been typed, so a
//! partial number like `"3"` stays unknown until the second digit tells
//! Amex, Diners Club and JCB apart.

use crate::digits::digit_values;
use crate::CardBrand;

/// An inclusive range over the first `width` digits of a card number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixRule {
    /// Brand assigned when the rule matches.
    pub brand: CardBrand,
    /// Number of leading digits the rule inspects.
    pub width: usize,
    /// Lowest matching prefix.
    pub low: u32,
    /// Highest matching prefix.
    pub high: u32,
}

impl PrefixRule {
    /// Creates a rule over `low..=high`; the width is the digit count of `low`.
    pub const fn range(brand: CardBrand, low: u32, high: u32) -> Self {
        let mut width = 1;
        let mut rest = low / 10;
        while rest > 0 {
            width += 1;
            rest /= 10;
        }
        Self {
            brand,
            width,
            low,
            high,
        }
    }

    /// Creates a rule matching exactly one prefix.
    pub const fn exact(brand: CardBrand, prefix: u32) -> Self {
        Self::range(brand, prefix, prefix)
    }

    /// Returns true if `digits` starts with a prefix inside this rule.
    #[inline]
    pub fn matches(&self, digits: &[u8]) -> bool {
        if digits.len() < self.width {
            return false;
        }
        let prefix = digits[..self.width]
            .iter()
            .fold(0u32, |acc, &d| acc * 10 + d as u32);
        (self.low..=self.high).contains(&prefix)
    }
}

/// Prefix rules in priority order. More specific patterns come before
/// general ones.
pub static PREFIX_RULES: &[PrefixRule] = &[
    // Mastercard: 2221-2720, 51-55
    PrefixRule::range(CardBrand::Mastercard, 2221, 2720),
    PrefixRule::range(CardBrand::Mastercard, 51, 55),
    // American Express: 34, 37
    PrefixRule::exact(CardBrand::Amex, 34),
    PrefixRule::exact(CardBrand::Amex, 37),
    // Diners Club: 300-305, 309, 36, 38-39
    PrefixRule::range(CardBrand::DinersClub, 300, 305),
    PrefixRule::exact(CardBrand::DinersClub, 309),
    PrefixRule::exact(CardBrand::DinersClub, 36),
    PrefixRule::range(CardBrand::DinersClub, 38, 39),
    // JCB: 3528-3589
    PrefixRule::range(CardBrand::Jcb, 3528, 3589),
    // Visa: starts with 4
    PrefixRule::exact(CardBrand::Visa, 4),
    // Discover: 6011, 644-649, 65
    PrefixRule::exact(CardBrand::Discover, 6011),
    PrefixRule::range(CardBrand::Discover, 644, 649),
    PrefixRule::exact(CardBrand::Discover, 65),
    // UnionPay: 62
    PrefixRule::exact(CardBrand::UnionPay, 62),
    // Maestro: 50, 56-58, 639, 67 (must stay after Discover and UnionPay)
    PrefixRule::exact(CardBrand::Maestro, 50),
    PrefixRule::range(CardBrand::Maestro, 56, 58),
    PrefixRule::exact(CardBrand::Maestro, 639),
    PrefixRule::exact(CardBrand::Maestro, 67),
];

/// Detects the card brand from a sequence of digits.
///
/// # Arguments
///
/// * `digits` - A slice of digits (0-9), possibly a partial card number.
///
/// # Returns
///
/// `Some(CardBrand)` if a known brand is detected, `None` otherwise.
///
/// # Example
///
/// ```
/// use card_input::detect::detect_brand;
/// use card_input::CardBrand;
///
/// assert_eq!(detect_brand(&[4]), Some(CardBrand::Visa));
/// assert_eq!(detect_brand(&[3, 7, 1, 4]), Some(CardBrand::Amex));
/// assert_eq!(detect_brand(&[3]), None);
/// ```
#[inline]
pub fn detect_brand(digits: &[u8]) -> Option<CardBrand> {
    PREFIX_RULES
        .iter()
        .find(|rule| rule.matches(digits))
        .map(|rule| rule.brand)
}

/// Detects the issuer of a possibly partial, possibly formatted card number.
///
/// Non-digit characters are ignored. Returns `None` for empty input or when
/// no prefix rule matches.
///
/// # Example
///
/// ```
/// use card_input::detect::detect_issuer;
/// use card_input::CardBrand;
///
/// assert_eq!(detect_issuer("4111 1111 1111 1111"), Some(CardBrand::Visa));
/// assert_eq!(detect_issuer("6011111111111117"), Some(CardBrand::Discover));
/// assert_eq!(detect_issuer(""), None);
/// ```
#[inline]
pub fn detect_issuer(number: &str) -> Option<CardBrand> {
    detect_brand(&digit_values(number))
}
