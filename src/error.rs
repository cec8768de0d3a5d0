//! Field-level validation results.
//!
//! Validation never fails as a whole. It returns a [`CardErrors`] with one
//! optional [`FieldError`] per field; the calling UI decides when to show
//! them. `FieldError`'s `Display` output is the user-facing message.

use std::fmt;

use crate::card::Field;
use crate::CardBrand;

/// Why a single field failed validation.
///
/// Variants keep the offending details for programmatic use; several
/// variants share one user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The field is empty or only whitespace.
    #[error("{}", required_message(.0))]
    Required(Field),

    /// The number contains no digits at all.
    #[error("Enter a valid card number")]
    NoDigits,

    /// The Luhn checksum failed.
    #[error("Enter a valid card number")]
    InvalidChecksum,

    /// No issuer matches the number's prefix.
    #[error("Enter a valid card number")]
    UnknownIssuer,

    /// The number has a length the issuer never uses.
    #[error("Enter a valid card number")]
    InvalidLength {
        /// The detected issuer.
        brand: CardBrand,
        /// The number of digits entered.
        length: usize,
    },

    /// The trimmed name is shorter than required.
    #[error("Please enter the full cardholder name")]
    NameTooShort {
        /// Trimmed length in characters.
        length: usize,
        /// Required minimum.
        minimum: usize,
    },

    /// The expiry is not `MM/YY`.
    #[error("Use MM/YY format")]
    MalformedExpiry,

    /// The expiry month is not 1-12.
    #[error("Use MM/YY format")]
    InvalidMonth(u8),

    /// The expiry month is over.
    #[error("Card has expired")]
    Expired {
        /// The expiry month.
        month: u8,
        /// The expiry year.
        year: u16,
    },

    /// The security code has the wrong length or non-digit characters.
    #[error("Enter a valid security code")]
    InvalidCvc {
        /// Code length the detected issuer expects.
        expected: usize,
    },
}

fn required_message(field: &Field) -> &'static str {
    match field {
        Field::Number => "Card number is required",
        Field::Name => "Name on card is required",
        Field::Expiry => "Expiry date is required",
        Field::Cvc => "Security code is required",
    }
}

impl FieldError {
    /// Returns the user-facing message.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Validation result for a whole card form: one optional error per field.
///
/// An empty slot means "no error for that field". A `CardErrors` is only
/// meaningful for the [`crate::CardValues`] snapshot it was computed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardErrors {
    /// Card number error.
    pub number: Option<FieldError>,
    /// Name error.
    pub name: Option<FieldError>,
    /// Expiry error.
    pub expiry: Option<FieldError>,
    /// Security code error.
    pub cvc: Option<FieldError>,
}

impl CardErrors {
    /// Returns the error for one field, if any.
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        match field {
            Field::Number => self.number.as_ref(),
            Field::Name => self.name.as_ref(),
            Field::Expiry => self.expiry.as_ref(),
            Field::Cvc => self.cvc.as_ref(),
        }
    }

    /// Returns a mutable slot for one field.
    pub fn slot_mut(&mut self, field: Field) -> &mut Option<FieldError> {
        match field {
            Field::Number => &mut self.number,
            Field::Name => &mut self.name,
            Field::Expiry => &mut self.expiry,
            Field::Cvc => &mut self.cvc,
        }
    }

    /// Returns the user-facing message for one field, if any.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(FieldError::message)
    }

    /// Returns true if at least one field has an error.
    pub fn has_errors(&self) -> bool {
        self.iter().next().is_some()
    }

    /// Iterates over the fields that have errors, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|error| (field, error)))
    }

    /// Keeps only the errors whose field passes `show`.
    pub fn filtered(&self, mut show: impl FnMut(Field) -> bool) -> CardErrors {
        let mut kept = CardErrors::default();
        for (field, error) in self.iter() {
            if show(field) {
                *kept.slot_mut(field) = Some(error.clone());
            }
        }
        kept
    }
}

impl fmt::Display for CardErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, error)?;
            first = false;
        }
        Ok(())
    }
}

/// Returns true if at least one field slot holds an error.
#[inline]
pub fn has_errors(errors: &CardErrors) -> bool {
    errors.has_errors()
}

#[cfg(feature = "serde")]
impl serde::Serialize for FieldError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CardErrors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.iter().count()))?;
        for (field, error) in self.iter() {
            map.serialize_entry(field.name(), error)?;
        }
        map.end()
    }
}
