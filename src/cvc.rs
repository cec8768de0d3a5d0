//! Security code (CVC/CVV/CID) rules.
//!
//! - American Express: 4 digits (printed on front)
//! - All other cards, including unknown issuers: 3 digits
//!
//! # Example
//!
//! ```
//! use card_input::cvc::validate_cvc;
//! use card_input::CardBrand;
//!
//! assert!(validate_cvc("123", Some(CardBrand::Visa)).is_ok());
//! assert!(validate_cvc("1234", Some(CardBrand::Amex)).is_ok());
//! assert!(validate_cvc("1234", None).is_err());
//! ```

use crate::card::DEFAULT_CVC_LENGTH;
use crate::CardBrand;

/// Errors that can occur during security code validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CvcError {
    /// The input is empty after trimming.
    #[error("security code is empty")]
    Empty,
    /// The code contains a non-digit character.
    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter {
        /// The invalid character found.
        character: char,
        /// Position of the invalid character.
        position: usize,
    },
    /// The code length does not match what the issuer expects.
    #[error("security code must be {expected} digits, got {length}")]
    WrongLength {
        /// Actual number of characters.
        length: usize,
        /// Expected length for the issuer.
        expected: usize,
    },
}

/// Returns the expected security code length for an issuer.
#[inline]
pub fn cvc_length(issuer: Option<CardBrand>) -> usize {
    issuer.map_or(DEFAULT_CVC_LENGTH, |brand| brand.spec().cvc_length)
}

/// Validates a security code for an issuer.
///
/// Surrounding whitespace is ignored. The code must consist of digits only
/// and have exactly [`cvc_length`] of them.
pub fn validate_cvc(input: &str, issuer: Option<CardBrand>) -> Result<(), CvcError> {
    let code = input.trim();
    if code.is_empty() {
        return Err(CvcError::Empty);
    }

    if let Some((position, character)) = code.chars().enumerate().find(|(_, c)| !c.is_ascii_digit())
    {
        return Err(CvcError::InvalidCharacter {
            character,
            position,
        });
    }

    let expected = cvc_length(issuer);
    if code.len() != expected {
        return Err(CvcError::WrongLength {
            length: code.len(),
            expected,
        });
    }

    Ok(())
}

/// Checks if a string is a valid security code for an issuer.
#[inline]
pub fn is_valid_cvc(input: &str, issuer: Option<CardBrand>) -> bool {
    validate_cvc(input, issuer).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cvc_length() {
        assert_eq!(cvc_length(Some(CardBrand::Amex)), 4);
        assert_eq!(cvc_length(Some(CardBrand::Visa)), 3);
        assert_eq!(cvc_length(Some(CardBrand::DinersClub)), 3);
        assert_eq!(cvc_length(None), 3);
    }

    #[test]
    fn test_cvc_for_visa() {
        assert!(validate_cvc("123", Some(CardBrand::Visa)).is_ok());
        assert!(validate_cvc("007", Some(CardBrand::Visa)).is_ok());
        assert_eq!(
            validate_cvc("1234", Some(CardBrand::Visa)),
            Err(CvcError::WrongLength {
                length: 4,
                expected: 3
            })
        );
    }

    #[test]
    fn test_cvc_for_amex() {
        assert!(validate_cvc("1234", Some(CardBrand::Amex)).is_ok());
        assert!(validate_cvc("123", Some(CardBrand::Amex)).is_err());
    }

    #[test]
    fn test_cvc_for_unknown_issuer() {
        assert!(validate_cvc("123", None).is_ok());
        assert!(validate_cvc("1234", None).is_err());
    }

    #[test]
    fn test_cvc_empty() {
        assert_eq!(validate_cvc("", None), Err(CvcError::Empty));
        assert_eq!(validate_cvc("   ", None), Err(CvcError::Empty));
    }

    #[test]
    fn test_cvc_non_digit() {
        assert_eq!(
            validate_cvc("12a", None),
            Err(CvcError::InvalidCharacter {
                character: 'a',
                position: 2
            })
        );
        assert!(!is_valid_cvc("1 3", None));
    }

    #[test]
    fn test_cvc_trimmed() {
        assert!(is_valid_cvc(" 123 ", Some(CardBrand::Mastercard)));
    }

    #[test]
    fn test_cvc_error_display() {
        let err = CvcError::WrongLength {
            length: 2,
            expected: 3,
        };
        assert_eq!(err.to_string(), "security code must be 3 digits, got 2");
    }
}
