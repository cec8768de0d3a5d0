//! Masked previews and display labels.
//!
//! The preview helpers draw a fixed-width card face: whatever the user has
//! typed is shown as-is, and every position not typed yet shows the
//! placeholder's own character there. They never validate and never panic.
//!
//! # Example
//!
//! ```
//! use card_input::mask::{mask_cvc, mask_expiry, mask_number};
//!
//! assert_eq!(mask_number("4111 1"), "4111 1••• •••• ••••");
//! assert_eq!(mask_expiry("12/"), "12/••");
//! assert_eq!(mask_cvc("", "3714 496353 98431"), "••••");
//! ```

use crate::card::BrandSpec;
use crate::cvc::cvc_length;
use crate::detect::detect_issuer;
use crate::CardBrand;

/// Card number placeholder (19 characters).
pub const NUMBER_PLACEHOLDER: &str = "•••• •••• •••• ••••";

/// Expiry placeholder (5 characters).
pub const EXPIRY_PLACEHOLDER: &str = "••/••";

/// Security code placeholder for 3-digit codes.
pub const CVC_PLACEHOLDER: &str = "•••";

/// Security code placeholder for Amex.
pub const AMEX_CVC_PLACEHOLDER: &str = "••••";

/// Name shown before anything is typed.
pub const NAME_PLACEHOLDER: &str = "YOUR NAME HERE";

/// Longest name shown on the card face, in characters.
pub const MAX_DISPLAY_NAME: usize = 26;

/// Label used when no issuer is detected.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Overlays `value` on `placeholder`, keeping the placeholder's width.
fn overlay(value: &str, placeholder: &str) -> String {
    let mut typed = value.chars();
    placeholder
        .chars()
        .map(|slot| typed.next().unwrap_or(slot))
        .collect()
}

/// Card number preview.
///
/// # Example
///
/// ```
/// use card_input::mask::mask_number;
///
/// assert_eq!(mask_number(""), "•••• •••• •••• ••••");
/// assert_eq!(mask_number("4111 1111 1111 1111"), "4111 1111 1111 1111");
/// assert_eq!(mask_number("3714 496353 98431"), "3714 496353 98431••");
/// ```
#[inline]
pub fn mask_number(value: &str) -> String {
    overlay(value, NUMBER_PLACEHOLDER)
}

/// Expiry preview.
#[inline]
pub fn mask_expiry(value: &str) -> String {
    overlay(value, EXPIRY_PLACEHOLDER)
}

/// Security code preview. Width is 4 when `number` looks like Amex, else 3.
#[inline]
pub fn mask_cvc(value: &str, number: &str) -> String {
    let placeholder = match cvc_length(detect_issuer(number)) {
        4 => AMEX_CVC_PLACEHOLDER,
        _ => CVC_PLACEHOLDER,
    };
    overlay(value, placeholder)
}

/// Cardholder name as shown on the card face.
///
/// Blank names show [`NAME_PLACEHOLDER`]; otherwise the trimmed name is cut
/// to [`MAX_DISPLAY_NAME`] characters and uppercased.
///
/// # Example
///
/// ```
/// use card_input::mask::normalise_name;
///
/// assert_eq!(normalise_name("  jane appleseed "), "JANE APPLESEED");
/// assert_eq!(normalise_name("   "), "YOUR NAME HERE");
/// ```
pub fn normalise_name(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return NAME_PLACEHOLDER.to_string();
    }

    trimmed
        .chars()
        .take(MAX_DISPLAY_NAME)
        .collect::<String>()
        .to_uppercase()
}

/// Human-readable brand name, `"Unknown"` when no issuer is detected.
///
/// # Example
///
/// ```
/// use card_input::mask::brand_label;
/// use card_input::CardBrand;
///
/// assert_eq!(brand_label(Some(CardBrand::Amex)), "American Express");
/// assert_eq!(brand_label(None), "Unknown");
/// ```
#[inline]
pub fn brand_label(issuer: Option<CardBrand>) -> &'static str {
    issuer.map_or(UNKNOWN_LABEL, |brand| brand.label())
}

/// Short uppercase issuer badge, e.g. `"VISA"` or `"DINERSCLUB"`.
///
/// Returns `"Unknown"` when no issuer is detected.
pub fn issuer_badge(issuer: Option<CardBrand>) -> String {
    match issuer {
        Some(brand) => brand.code().replace('_', " ").to_uppercase(),
        None => UNKNOWN_LABEL.to_string(),
    }
}

/// Display theme (label, colors) for an issuer.
#[inline]
pub fn brand_theme(issuer: Option<CardBrand>) -> Option<&'static BrandSpec> {
    issuer.map(|brand| brand.spec())
}

/// Redacts every digit but the last four, keeping separators in place.
///
/// Used for `Debug` output of card data.
///
/// # Example
///
/// ```
/// use card_input::mask::redact_number;
///
/// assert_eq!(redact_number("4111 1111 1111 1234"), "**** **** **** 1234");
/// assert_eq!(redact_number("123"), "***");
/// ```
pub fn redact_number(value: &str) -> String {
    let digit_count = value.chars().filter(char::is_ascii_digit).count();
    let visible_from = if digit_count > 4 { digit_count - 4 } else { digit_count };

    let mut seen = 0;
    value
        .chars()
        .map(|c| {
            if !c.is_ascii_digit() {
                return c;
            }
            seen += 1;
            if seen > visible_from {
                c
            } else {
                '*'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn width(s: &str) -> usize {
        s.chars().count()
    }

    #[test]
    fn test_placeholder_widths() {
        assert_eq!(width(NUMBER_PLACEHOLDER), 19);
        assert_eq!(width(EXPIRY_PLACEHOLDER), 5);
        assert_eq!(width(CVC_PLACEHOLDER), 3);
        assert_eq!(width(AMEX_CVC_PLACEHOLDER), 4);
    }

    #[test]
    fn test_mask_number_partial() {
        assert_eq!(mask_number("4"), "4••• •••• •••• ••••");
        assert_eq!(mask_number("4111 1111"), "4111 1111 •••• ••••");
    }

    #[test]
    fn test_mask_number_overlong() {
        let masked = mask_number("4111 1111 1111 1111 1111 1111");
        assert_eq!(masked, "4111 1111 1111 1111");
        assert_eq!(width(&masked), 19);
    }

    #[test]
    fn test_mask_expiry() {
        assert_eq!(mask_expiry(""), "••/••");
        assert_eq!(mask_expiry("1"), "1•/••");
        assert_eq!(mask_expiry("12/25"), "12/25");
        assert_eq!(mask_expiry("12/2599"), "12/25");
    }

    #[test]
    fn test_mask_cvc() {
        assert_eq!(mask_cvc("", "371449635398431"), "••••");
        assert_eq!(mask_cvc("", "4111111111111111"), "•••");
        assert_eq!(mask_cvc("", ""), "•••");
        assert_eq!(mask_cvc("12", "371449635398431"), "12••");
        assert_eq!(mask_cvc("12345", "4111111111111111"), "123");
    }

    #[test]
    fn test_mask_multibyte_input() {
        assert_eq!(mask_expiry("é"), "é•/••");
        assert_eq!(width(&mask_number("日本語")), 19);
    }

    #[test]
    fn test_normalise_name() {
        assert_eq!(normalise_name(""), "YOUR NAME HERE");
        assert_eq!(normalise_name("jane"), "JANE");
        let long = "a".repeat(40);
        assert_eq!(normalise_name(&long), "A".repeat(26));
    }

    #[test]
    fn test_labels() {
        assert_eq!(brand_label(Some(CardBrand::DinersClub)), "Diners Club");
        assert_eq!(issuer_badge(Some(CardBrand::DinersClub)), "DINERSCLUB");
        assert_eq!(issuer_badge(Some(CardBrand::Visa)), "VISA");
        assert_eq!(issuer_badge(None), "Unknown");
    }

    #[test]
    fn test_brand_theme() {
        assert_eq!(brand_theme(None), None);
        let theme = brand_theme(Some(CardBrand::Visa)).unwrap();
        assert_eq!(theme.accent, "#60a5fa");
        assert_eq!(theme.gradient.via, Some("#1d4ed8"));
    }

    #[test]
    fn test_redact_number() {
        assert_eq!(redact_number("4111111111111111"), "************1111");
        assert_eq!(redact_number(""), "");
        assert_eq!(redact_number("1234"), "****");
    }
}
