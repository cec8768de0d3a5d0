//! Card expiry date parsing and the "not expired" rule.
//!
//! The expiry field holds `MM/YY` (or `MM/YYYY`). A card stays valid through
//! the last day of its stated month, so `10/26` is still accepted on
//! 31 October 2026 and rejected from 1 November 2026.
//!
//! # Example
//!
//! ```
//! use card_input::expiry::parse_expiry;
//! use chrono::NaiveDate;
//!
//! let expiry = parse_expiry("12/30").unwrap();
//! assert_eq!(expiry.month(), 12);
//! assert_eq!(expiry.year(), 2030);
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
//! assert!(!expiry.is_expired_at(today));
//! assert!(parse_expiry("01/20").unwrap().is_expired_at(today));
//! ```

use std::fmt;

use chrono::{Datelike, NaiveDate};

/// A parsed expiry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpiryDate {
    // Field order matters for the derived ordering.
    year: u16,
    month: u8,
}

impl ExpiryDate {
    /// Creates a new expiry date.
    ///
    /// Returns `None` if the month is not 1-12.
    pub fn new(month: u8, year: u16) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }

    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the four-digit year.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns true if the card has expired as of `today`.
    ///
    /// A card expires once its stated month is over.
    pub fn is_expired_at(&self, today: NaiveDate) -> bool {
        *self < Self::containing(today)
    }

    /// Returns the number of whole months left after the current one.
    ///
    /// Returns 0 for the current month and for expired cards.
    pub fn months_until_expiry_at(&self, today: NaiveDate) -> u32 {
        let current = Self::containing(today);
        self.month_index().saturating_sub(current.month_index())
    }

    /// Formats as MM/YY.
    pub fn format_short(&self) -> String {
        format!("{:02}/{:02}", self.month, self.year % 100)
    }

    fn containing(date: NaiveDate) -> Self {
        Self {
            // Years before 0 or past u16::MAX never reach a card form.
            year: u16::try_from(date.year()).unwrap_or(0),
            month: date.month() as u8,
        }
    }

    fn month_index(&self) -> u32 {
        self.year as u32 * 12 + self.month as u32
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_short())
    }
}

/// Errors that can occur during expiry date parsing/validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpiryError {
    /// The input string is empty.
    #[error("expiry date is empty")]
    Empty,
    /// No `/`, a non-numeric part, or a year that is neither 2 nor 4 digits.
    #[error("invalid expiry format (expected MM/YY)")]
    InvalidFormat,
    /// Month is out of range (must be 1-12).
    #[error("invalid month {0}: must be 1-12")]
    InvalidMonth(u8),
    /// The stated month is over.
    #[error("card expired ({month:02}/{year})")]
    Expired {
        /// The expiry month.
        month: u8,
        /// The expiry year.
        year: u16,
    },
}

/// Parses an `MM/YY` or `MM/YYYY` expiry string.
///
/// Whitespace around the whole value and around each part is ignored. Two
/// digit years are read as `20YY`.
///
/// # Example
///
/// ```
/// use card_input::expiry::{parse_expiry, ExpiryError};
///
/// assert_eq!(parse_expiry("1/2031").unwrap().month(), 1);
/// assert_eq!(parse_expiry("1225"), Err(ExpiryError::InvalidFormat));
/// ```
pub fn parse_expiry(input: &str) -> Result<ExpiryDate, ExpiryError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ExpiryError::Empty);
    }

    let (month_str, year_str) = input.split_once('/').ok_or(ExpiryError::InvalidFormat)?;
    let (month_str, year_str) = (month_str.trim(), year_str.trim());

    if !is_numeric(month_str) || month_str.len() > 2 || !is_numeric(year_str) {
        return Err(ExpiryError::InvalidFormat);
    }

    let month: u8 = month_str.parse().map_err(|_| ExpiryError::InvalidFormat)?;
    if !(1..=12).contains(&month) {
        return Err(ExpiryError::InvalidMonth(month));
    }

    let year: u16 = match year_str.len() {
        2 => 2000 + year_str.parse::<u16>().map_err(|_| ExpiryError::InvalidFormat)?,
        4 => year_str.parse().map_err(|_| ExpiryError::InvalidFormat)?,
        _ => return Err(ExpiryError::InvalidFormat),
    };

    Ok(ExpiryDate { year, month })
}

/// Parses an expiry string and rejects cards expired as of `today`.
pub fn validate_expiry_at(input: &str, today: NaiveDate) -> Result<ExpiryDate, ExpiryError> {
    let expiry = parse_expiry(input)?;

    if expiry.is_expired_at(today) {
        return Err(ExpiryError::Expired {
            month: expiry.month,
            year: expiry.year,
        });
    }

    Ok(expiry)
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
