//! Whole-form validation.
//!
//! [`validate`] checks each of the four fields on its own and collects the
//! results into a [`CardErrors`]. An error in one field never changes how
//! another field is checked.
//!
//! Expiry checks need a date. [`validate`] reads the local clock;
//! [`validate_at`] and [`validate_with`] take it explicitly so results are
//! reproducible.

use chrono::{Local, NaiveDate};

use crate::card::{CardValues, Field};
use crate::cvc::{cvc_length, validate_cvc};
use crate::detect::detect_brand;
use crate::digits::digit_values;
use crate::error::{CardErrors, FieldError};
use crate::expiry::{self, ExpiryError};
use crate::luhn;
use crate::CardBrand;

/// Minimum trimmed cardholder name length.
pub const MIN_NAME_LENGTH: usize = 3;

/// Knobs for [`validate_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidationOptions {
    /// Minimum trimmed name length, in characters.
    pub min_name_length: usize,
    /// Date used for the expiry check. `None` reads the local clock.
    pub today: Option<NaiveDate>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            min_name_length: MIN_NAME_LENGTH,
            today: None,
        }
    }
}

impl ValidationOptions {
    /// Returns options pinned to a fixed date.
    pub fn at(today: NaiveDate) -> Self {
        Self {
            today: Some(today),
            ..Self::default()
        }
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Validates a card form snapshot against the local clock.
///
/// # Example
///
/// ```
/// use card_input::{validate, CardValues, Field};
///
/// let values = CardValues::new("4111 1111 1111 1112", "Jane Appleseed", "12/99", "123");
/// let errors = validate(&values);
/// assert!(errors.has_errors());
/// assert_eq!(errors.message(Field::Number).as_deref(), Some("Enter a valid card number"));
/// ```
pub fn validate(values: &CardValues) -> CardErrors {
    validate_with(values, &ValidationOptions::default())
}

/// Validates a card form snapshot as of `today`.
///
/// # Example
///
/// ```
/// use card_input::{validate_at, CardValues};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let values = CardValues::new("4111 1111 1111 1111", "Jane Appleseed", "10/26", "123");
/// assert!(!validate_at(&values, today).has_errors());
/// ```
pub fn validate_at(values: &CardValues, today: NaiveDate) -> CardErrors {
    validate_with(values, &ValidationOptions::at(today))
}

/// Validates a card form snapshot with explicit options.
pub fn validate_with(values: &CardValues, options: &ValidationOptions) -> CardErrors {
    let issuer = detect_brand(&digit_values(&values.number));

    let errors = CardErrors {
        number: validate_number(&values.number).err(),
        name: validate_name(&values.name, options.min_name_length).err(),
        expiry: validate_expiry(&values.expiry, options.today()).err(),
        cvc: validate_security_code(&values.cvc, issuer).err(),
    };

    tracing::debug!(
        issuer = issuer.map(|brand| brand.code()),
        failed = ?errors.iter().map(|(field, _)| field.name()).collect::<Vec<_>>(),
        "validated card values"
    );

    errors
}

/// Checks the card number field.
///
/// Required, then: at least one digit, a passing Luhn checksum, a
/// recognised issuer, and a length that issuer uses. Non-digit characters
/// are cleared before checking.
pub fn validate_number(number: &str) -> Result<CardBrand, FieldError> {
    if number.trim().is_empty() {
        return Err(FieldError::Required(Field::Number));
    }

    let digits = digit_values(number);
    if digits.is_empty() {
        return Err(FieldError::NoDigits);
    }

    if !luhn::validate(&digits) {
        return Err(FieldError::InvalidChecksum);
    }

    let brand = detect_brand(&digits).ok_or(FieldError::UnknownIssuer)?;

    if !brand.is_valid_length(digits.len()) {
        return Err(FieldError::InvalidLength {
            brand,
            length: digits.len(),
        });
    }

    Ok(brand)
}

/// Checks the cardholder name field.
pub fn validate_name(name: &str, min_length: usize) -> Result<(), FieldError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required(Field::Name));
    }

    let length = trimmed.chars().count();
    if length < min_length {
        return Err(FieldError::NameTooShort {
            length,
            minimum: min_length,
        });
    }

    Ok(())
}

/// Checks the expiry field as of `today`.
pub fn validate_expiry(expiry: &str, today: NaiveDate) -> Result<expiry::ExpiryDate, FieldError> {
    expiry::validate_expiry_at(expiry, today).map_err(|err| match err {
        ExpiryError::Empty => FieldError::Required(Field::Expiry),
        ExpiryError::InvalidFormat => FieldError::MalformedExpiry,
        ExpiryError::InvalidMonth(month) => FieldError::InvalidMonth(month),
        ExpiryError::Expired { month, year } => FieldError::Expired { month, year },
    })
}

/// Checks the security code field for the issuer detected from the number.
pub fn validate_security_code(cvc: &str, issuer: Option<CardBrand>) -> Result<(), FieldError> {
    if cvc.trim().is_empty() {
        return Err(FieldError::Required(Field::Cvc));
    }

    validate_cvc(cvc, issuer).map_err(|_| FieldError::InvalidCvc {
        expected: cvc_length(issuer),
    })
}

/// Returns true if the number field holds a complete, valid card number.
#[inline]
pub fn is_valid_number(number: &str) -> bool {
    validate_number(number).is_ok()
}
