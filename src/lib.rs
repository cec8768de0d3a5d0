//! # card_input
//!
//! Payment card input helper for checkout forms. Turns raw keystrokes into
//! display-formatted card number, expiry and security code strings, detects
//! the card issuer, validates every field, and draws masked previews.
//!
//! Every function is pure: no I/O, no hidden state, total over all input
//! strings. Interaction state (focus, touched fields, submit attempts)
//! lives in the caller-owned [`form::FormState`].
//!
//! ## Quick Start
//!
//! ```rust
//! use card_input::{detect_issuer, format, mask, CardBrand};
//!
//! // Detect the issuer from a partial number
//! assert_eq!(detect_issuer("37"), Some(CardBrand::Amex));
//!
//! // Format as the user types
//! assert_eq!(format::format_number("371449635398431"), "3714 496353 98431");
//! assert_eq!(format::format_expiry("1225"), "12/25");
//! assert_eq!(format::format_cvc("12345", "371449635398431"), "1234");
//!
//! // Draw the card preview
//! assert_eq!(mask::mask_number("3714 49"), "3714 49•• •••• ••••");
//! ```
//!
//! ## Validation
//!
//! ```rust
//! use card_input::{validate_at, CardValues, Field};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
//! let values = CardValues::new("4111 1111 1111 1111", "Jane Appleseed", "01/20", "123");
//!
//! let errors = validate_at(&values, today);
//! assert!(errors.has_errors());
//! assert_eq!(errors.message(Field::Expiry).as_deref(), Some("Card has expired"));
//! assert_eq!(errors.message(Field::Number), None);
//! ```
//!
//! ## Supported Card Brands
//!
//! | Brand | Prefix | Grouping | CVC |
//! |-------|--------|----------|-----|
//! | Visa | 4 | 4-4-4-4 | 3 |
//! | Mastercard | 51-55, 2221-2720 | 4-4-4-4 | 3 |
//! | American Express | 34, 37 | 4-6-5 | 4 |
//! | Discover | 6011, 644-649, 65 | 4-4-4-4 | 3 |
//! | JCB | 3528-3589 | 4-4-4-4 | 3 |
//! | Diners Club | 300-305, 309, 36, 38-39 | 4-6-4 | 3 |
//! | UnionPay | 62 | 4-4-4-4 | 3 |
//! | Maestro | 50, 56-58, 639, 67 | 4-4-4-4 | 3 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize/Deserialize for form data, errors and options |
//! | `cli` | `card-input` command-line tool |
//! | `wasm` | WebAssembly bindings for browser forms |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod cvc;
pub mod detect;
pub mod digits;
pub mod error;
pub mod expiry;
pub mod form;
pub mod format;
pub mod luhn;
pub mod mask;
pub mod validate;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use card::{supported_brands, BrandSpec, CardBrand, CardValues, Field, BRANDS};
pub use detect::detect_issuer;
pub use digits::extract_digits;
pub use error::{has_errors, CardErrors, FieldError};
pub use form::{FormState, SubmissionPayload};
pub use luhn::passes_luhn;
pub use validate::{validate, validate_at, validate_with, ValidationOptions};
