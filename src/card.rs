//! Core card types: the brand table and the caller-owned form values.
//!
//! This module provides the `CardBrand` enum for identifying card networks,
//! the static `BrandSpec` table that every formatter, masker and validator
//! reads its per-brand numbers from, and `CardValues`, the four in-progress
//! text fields of a card form.

use std::fmt;
use std::str::FromStr;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Supported card brands/networks.
///
/// Each variant has exactly one entry in [`BRANDS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardBrand {
    /// Visa - Prefix 4
    Visa,
    /// Mastercard - Prefix 51-55, 2221-2720
    Mastercard,
    /// American Express - Prefix 34, 37
    Amex,
    /// Discover - Prefix 6011, 644-649, 65
    Discover,
    /// JCB - Prefix 3528-3589
    Jcb,
    /// Diners Club - Prefix 300-305, 309, 36, 38-39
    DinersClub,
    /// UnionPay - Prefix 62
    UnionPay,
    /// Maestro - Prefix 50, 56-58, 639, 67
    Maestro,
}

/// Display gradient for a brand's card preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Gradient {
    /// Start color.
    pub from: &'static str,
    /// Optional middle color.
    pub via: Option<&'static str>,
    /// End color.
    pub to: &'static str,
}

/// Static descriptor for one card brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BrandSpec {
    /// The brand this entry describes.
    pub brand: CardBrand,
    /// Stable identifier, e.g. `"dinersclub"`.
    pub code: &'static str,
    /// Human-readable name.
    pub label: &'static str,
    /// BIN prefix description. Documentation only; detection uses
    /// [`crate::detect`].
    pub bin_prefix: &'static str,
    /// Preview gradient.
    pub gradient: Gradient,
    /// Accent color.
    pub accent: &'static str,
    /// Number of digits the number formatter keeps.
    pub max_length: usize,
    /// Complete card number lengths accepted by validation.
    pub valid_lengths: &'static [usize],
    /// Expected security code length.
    pub cvc_length: usize,
    /// Digit group sizes used when formatting the number.
    pub grouping: &'static [usize],
}

/// Grouping used for brands without a special layout, and for unknown issuers.
pub const DEFAULT_GROUPING: &[usize] = &[4, 4, 4, 4];

/// Number of digits kept for unknown issuers.
pub const DEFAULT_MAX_LENGTH: usize = 16;

/// Security code length for unknown issuers.
pub const DEFAULT_CVC_LENGTH: usize = 3;

/// The brand table, in the order brands are shown to users.
pub static BRANDS: &[BrandSpec] = &[
    BrandSpec {
        brand: CardBrand::Visa,
        code: "visa",
        label: "Visa",
        bin_prefix: "4",
        gradient: Gradient { from: "#0f1b61", via: Some("#1d4ed8"), to: "#60a5fa" },
        accent: "#60a5fa",
        max_length: 16,
        valid_lengths: &[13, 16, 19],
        cvc_length: 3,
        grouping: DEFAULT_GROUPING,
    },
    BrandSpec {
        brand: CardBrand::Mastercard,
        code: "mastercard",
        label: "Mastercard",
        bin_prefix: "51-55, 2221-2720",
        gradient: Gradient { from: "#311428", via: Some("#be123c"), to: "#fb923c" },
        accent: "#fb923c",
        max_length: 16,
        valid_lengths: &[16],
        cvc_length: 3,
        grouping: DEFAULT_GROUPING,
    },
    BrandSpec {
        brand: CardBrand::Amex,
        code: "amex",
        label: "American Express",
        bin_prefix: "34, 37",
        gradient: Gradient { from: "#0f172a", via: Some("#2563eb"), to: "#38bdf8" },
        accent: "#38bdf8",
        max_length: 15,
        valid_lengths: &[15],
        cvc_length: 4,
        grouping: &[4, 6, 5],
    },
    BrandSpec {
        brand: CardBrand::Discover,
        code: "discover",
        label: "Discover",
        bin_prefix: "6011, 644-649, 65",
        gradient: Gradient { from: "#2f1728", via: Some("#f59e0b"), to: "#f97316" },
        accent: "#f97316",
        max_length: 16,
        valid_lengths: &[16, 19],
        cvc_length: 3,
        grouping: DEFAULT_GROUPING,
    },
    BrandSpec {
        brand: CardBrand::Jcb,
        code: "jcb",
        label: "JCB",
        bin_prefix: "3528-3589",
        gradient: Gradient { from: "#1e213e", via: Some("#22c55e"), to: "#38bdf8" },
        accent: "#22c55e",
        max_length: 16,
        valid_lengths: &[16, 17, 18, 19],
        cvc_length: 3,
        grouping: DEFAULT_GROUPING,
    },
    BrandSpec {
        brand: CardBrand::DinersClub,
        code: "dinersclub",
        label: "Diners Club",
        bin_prefix: "300-305, 309, 36, 38-39",
        gradient: Gradient { from: "#0f172a", via: Some("#4c1d95"), to: "#7c3aed" },
        accent: "#7c3aed",
        max_length: 14,
        valid_lengths: &[14],
        cvc_length: 3,
        grouping: &[4, 6, 4],
    },
    BrandSpec {
        brand: CardBrand::UnionPay,
        code: "unionpay",
        label: "UnionPay",
        bin_prefix: "62",
        gradient: Gradient { from: "#1f0a0a", via: Some("#b91c1c"), to: "#0e7490" },
        accent: "#0e7490",
        max_length: 16,
        valid_lengths: &[16, 17, 18, 19],
        cvc_length: 3,
        grouping: DEFAULT_GROUPING,
    },
    BrandSpec {
        brand: CardBrand::Maestro,
        code: "maestro",
        label: "Maestro",
        bin_prefix: "50, 56-58, 639, 67",
        gradient: Gradient { from: "#111827", via: None, to: "#0ea5e9" },
        accent: "#0ea5e9",
        max_length: 16,
        valid_lengths: &[12, 13, 14, 15, 16, 17, 18, 19],
        cvc_length: 3,
        grouping: DEFAULT_GROUPING,
    },
];

impl CardBrand {
    /// All brands, in table order.
    pub const ALL: [CardBrand; 8] = [
        Self::Visa,
        Self::Mastercard,
        Self::Amex,
        Self::Discover,
        Self::Jcb,
        Self::DinersClub,
        Self::UnionPay,
        Self::Maestro,
    ];

    /// Returns this brand's entry in [`BRANDS`].
    #[inline]
    pub fn spec(&self) -> &'static BrandSpec {
        // BRANDS holds one entry per variant, in declaration order.
        &BRANDS[*self as usize]
    }

    /// Returns the stable brand code, e.g. `"amex"`.
    #[inline]
    pub fn code(&self) -> &'static str {
        self.spec().code
    }

    /// Returns a human-readable name for the card brand.
    #[inline]
    pub fn label(&self) -> &'static str {
        self.spec().label
    }

    /// Returns the valid complete lengths for this card brand.
    #[inline]
    pub fn valid_lengths(&self) -> &'static [usize] {
        self.spec().valid_lengths
    }

    /// Returns true if the given length is valid for this brand.
    #[inline]
    pub fn is_valid_length(&self, length: usize) -> bool {
        self.valid_lengths().contains(&length)
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error returned when parsing an unknown brand code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown card brand code '{0}'")]
pub struct UnknownBrandCode(pub String);

impl FromStr for CardBrand {
    type Err = UnknownBrandCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        BRANDS
            .iter()
            .find(|spec| spec.code.eq_ignore_ascii_case(code))
            .map(|spec| spec.brand)
            .ok_or_else(|| UnknownBrandCode(s.to_string()))
    }
}

/// Returns the table of supported brands, for "accepted cards" displays.
#[inline]
pub fn supported_brands() -> &'static [BrandSpec] {
    BRANDS
}

/// Max digits kept for an issuer (16 when unknown).
#[inline]
pub fn max_length(issuer: Option<CardBrand>) -> usize {
    issuer.map_or(DEFAULT_MAX_LENGTH, |b| b.spec().max_length)
}

/// Digit grouping for an issuer (4-4-4-4 when unknown).
#[inline]
pub fn grouping(issuer: Option<CardBrand>) -> &'static [usize] {
    issuer.map_or(DEFAULT_GROUPING, |b| b.spec().grouping)
}

/// One of the four text fields of a card form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Field {
    /// Card number.
    Number,
    /// Name on card.
    Name,
    /// Expiry date, `MM/YY`.
    Expiry,
    /// Security code.
    Cvc,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 4] = [Self::Number, Self::Name, Self::Expiry, Self::Cvc];

    /// Returns the field's lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Name => "name",
            Self::Expiry => "expiry",
            Self::Cvc => "cvc",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown card field '{0}' (expected number, name, expiry or cvc)")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// The four in-progress text fields of a card form.
///
/// Values are never assumed valid. The struct is owned and mutated by the
/// caller; the engine only reads it.
///
/// # Security
///
/// - Memory is zeroed on drop using the `zeroize` crate
/// - Debug output masks the number and security code
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardValues {
    /// Card number as typed (usually already formatted).
    pub number: String,
    /// Name on card.
    pub name: String,
    /// Expiry, usually `MM/YY`.
    pub expiry: String,
    /// Security code.
    pub cvc: String,
}

impl CardValues {
    /// Creates a snapshot from the four field values.
    pub fn new(
        number: impl Into<String>,
        name: impl Into<String>,
        expiry: impl Into<String>,
        cvc: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
            expiry: expiry.into(),
            cvc: cvc.into(),
        }
    }

    /// Returns the value of one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Number => &self.number,
            Field::Name => &self.name,
            Field::Expiry => &self.expiry,
            Field::Cvc => &self.cvc,
        }
    }

    /// Replaces the value of one field.
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Number => &mut self.number,
            Field::Name => &mut self.name,
            Field::Expiry => &mut self.expiry,
            Field::Cvc => &mut self.cvc,
        };
        slot.zeroize();
        *slot = value;
    }

    /// Returns true if every field is empty.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|&field| self.get(field).is_empty())
    }
}

impl fmt::Debug for CardValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Mask card data in debug output
        f.debug_struct("CardValues")
            .field("number", &crate::mask::redact_number(&self.number))
            .field("name", &self.name)
            .field("expiry", &self.expiry)
            .field("cvc", &"*".repeat(self.cvc.chars().count()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_variants() {
        for (index, brand) in CardBrand::ALL.iter().enumerate() {
            assert_eq!(BRANDS[index].brand, *brand);
            assert_eq!(brand.spec().brand, *brand);
        }
        assert_eq!(BRANDS.len(), CardBrand::ALL.len());
    }

    #[test]
    fn test_codes_are_unique() {
        for (i, a) in BRANDS.iter().enumerate() {
            for b in &BRANDS[i + 1..] {
                assert_ne!(a.code, b.code);
            }
        }
    }

    #[test]
    fn test_brand_constants() {
        assert_eq!(CardBrand::Amex.spec().max_length, 15);
        assert_eq!(CardBrand::Amex.spec().cvc_length, 4);
        assert_eq!(CardBrand::Amex.spec().grouping, &[4, 6, 5]);
        assert_eq!(CardBrand::DinersClub.spec().max_length, 14);
        assert_eq!(CardBrand::DinersClub.spec().grouping, &[4, 6, 4]);
        assert_eq!(CardBrand::Visa.spec().max_length, 16);
        assert_eq!(CardBrand::Visa.spec().cvc_length, 3);
    }

    #[test]
    fn test_grouping_fits_max_length() {
        for spec in BRANDS {
            assert_eq!(spec.grouping.iter().sum::<usize>(), spec.max_length, "{}", spec.code);
        }
    }

    #[test]
    fn test_card_brand_names() {
        assert_eq!(CardBrand::Visa.label(), "Visa");
        assert_eq!(CardBrand::Amex.label(), "American Express");
        assert_eq!(CardBrand::Mastercard.to_string(), "Mastercard");
        assert_eq!(CardBrand::DinersClub.code(), "dinersclub");
    }

    #[test]
    fn test_brand_from_str() {
        assert_eq!("amex".parse::<CardBrand>(), Ok(CardBrand::Amex));
        assert_eq!("DinersClub".parse::<CardBrand>(), Ok(CardBrand::DinersClub));
        assert!("laser".parse::<CardBrand>().is_err());
    }

    #[test]
    fn test_defaults_for_unknown_issuer() {
        assert_eq!(max_length(None), 16);
        assert_eq!(grouping(None), &[4, 4, 4, 4]);
        assert_eq!(max_length(Some(CardBrand::Amex)), 15);
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("cvc".parse::<Field>(), Ok(Field::Cvc));
        assert_eq!(" Expiry ".parse::<Field>(), Ok(Field::Expiry));
        assert!("zip".parse::<Field>().is_err());
    }

    #[test]
    fn test_values_get_set() {
        let mut values = CardValues::default();
        assert!(values.is_empty());
        values.set(Field::Name, "Jane".to_string());
        assert_eq!(values.get(Field::Name), "Jane");
        assert!(!values.is_empty());
    }

    #[test]
    fn test_debug_is_masked() {
        let values = CardValues::new("4111 1111 1111 1111", "Jane Appleseed", "12/30", "123");
        let debug = format!("{:?}", values);
        assert!(!debug.contains("4111 1111 1111 1111"));
        assert!(!debug.contains("123\""));
        assert!(debug.contains("1111"));
        assert!(debug.contains("Jane Appleseed"));
    }

    #[test]
    fn test_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardValues>();
        assert_send_sync::<CardBrand>();
        assert_send_sync::<BrandSpec>();
    }
}
