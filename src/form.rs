//! Caller-owned checkout form state.
//!
//! The engine itself is stateless. `FormState` holds the interaction state
//! a card form needs on top of it: the current values, which field has
//! focus, which fields the user has visited, whether a submit attempt has
//! switched on validation for every field, and the last accepted payload.
//!
//! # Example
//!
//! ```
//! use card_input::form::FormState;
//! use card_input::{Field, ValidationOptions};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
//! let mut form = FormState::with_options(ValidationOptions::at(today));
//!
//! form.input(Field::Number, "4111111111111111");
//! form.input(Field::Name, "Jane Appleseed");
//! form.input(Field::Expiry, "1230");
//! form.input(Field::Cvc, "1234");
//!
//! assert_eq!(form.values().number, "4111 1111 1111 1111");
//! assert_eq!(form.values().cvc, "123");
//!
//! let payload = form.submit().unwrap();
//! assert_eq!(payload.issuer, "VISA");
//! assert!(form.values().is_empty());
//! ```

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::card::{CardValues, Field};
use crate::detect::detect_issuer;
use crate::error::CardErrors;
use crate::format::{format_cvc, format_expiry, format_number};
use crate::mask::issuer_badge;
use crate::validate::{validate_with, ValidationOptions};
use crate::CardBrand;

/// What a successful submit hands to the submission layer.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubmissionPayload {
    /// Formatted card number.
    pub number: String,
    /// Name on card, as typed.
    pub name: String,
    /// Expiry, `MM/YY`.
    pub expiry: String,
    /// Security code.
    pub cvc: String,
    /// Issuer badge, e.g. `"VISA"`, or `"Unknown"`.
    pub issuer: String,
}

impl std::fmt::Debug for SubmissionPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionPayload")
            .field("number", &crate::mask::redact_number(&self.number))
            .field("name", &self.name)
            .field("expiry", &self.expiry)
            .field("cvc", &"*".repeat(self.cvc.chars().count()))
            .field("issuer", &self.issuer)
            .finish()
    }
}

/// Per-field "the user has been here" flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchedFields {
    number: bool,
    name: bool,
    expiry: bool,
    cvc: bool,
}

impl TouchedFields {
    /// Every field touched.
    pub const ALL: TouchedFields = TouchedFields {
        number: true,
        name: true,
        expiry: true,
        cvc: true,
    };

    /// Returns true if `field` has been touched.
    pub fn contains(&self, field: Field) -> bool {
        match field {
            Field::Number => self.number,
            Field::Name => self.name,
            Field::Expiry => self.expiry,
            Field::Cvc => self.cvc,
        }
    }

    /// Marks `field` as touched.
    pub fn insert(&mut self, field: Field) {
        match field {
            Field::Number => self.number = true,
            Field::Name => self.name = true,
            Field::Expiry => self.expiry = true,
            Field::Cvc => self.cvc = true,
        }
    }
}

/// Interaction state of one card form.
#[derive(Debug, Clone)]
pub struct FormState {
    values: CardValues,
    focused: Option<Field>,
    touched: TouchedFields,
    show_validation: bool,
    payload: Option<SubmissionPayload>,
    options: ValidationOptions,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// Creates an empty form with focus on the number field.
    pub fn new() -> Self {
        Self::with_options(ValidationOptions::default())
    }

    /// Creates an empty form that validates with `options`.
    pub fn with_options(options: ValidationOptions) -> Self {
        Self {
            values: CardValues::default(),
            focused: Some(Field::Number),
            touched: TouchedFields::default(),
            show_validation: false,
            payload: None,
            options,
        }
    }

    /// Current field values.
    pub fn values(&self) -> &CardValues {
        &self.values
    }

    /// Field with focus, if any.
    pub fn focused(&self) -> Option<Field> {
        self.focused
    }

    /// Fields the user has visited.
    pub fn touched(&self) -> TouchedFields {
        self.touched
    }

    /// True once a failed submit has switched on errors for every field.
    pub fn show_validation(&self) -> bool {
        self.show_validation
    }

    /// Payload of the last successful submit, until the next edit.
    pub fn payload(&self) -> Option<&SubmissionPayload> {
        self.payload.as_ref()
    }

    /// Applies a keystroke to `field`.
    ///
    /// Number, expiry and security code are reformatted; the code is cut to
    /// the length of the issuer detected from the current number. The name
    /// is stored as typed. Any previous payload is cleared.
    pub fn input(&mut self, field: Field, raw: &str) {
        let value = match field {
            Field::Number => format_number(raw),
            Field::Expiry => format_expiry(raw),
            Field::Cvc => format_cvc(raw, &self.values.number),
            Field::Name => raw.to_string(),
        };
        self.values.set(field, value);
        self.payload = None;
    }

    /// Moves focus to `field` and marks it touched.
    pub fn focus(&mut self, field: Field) {
        self.focused = Some(field);
        self.touched.insert(field);
    }

    /// Marks `field` touched when it loses focus.
    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
    }

    /// Issuer detected from the current number.
    pub fn issuer(&self) -> Option<CardBrand> {
        detect_issuer(&self.values.number)
    }

    /// Full validation result for the current values.
    pub fn errors(&self) -> CardErrors {
        validate_with(&self.values, &self.options)
    }

    /// Errors the UI should show right now.
    ///
    /// A field's error is shown once that field has been touched, or for
    /// every field after a failed submit.
    pub fn display_errors(&self) -> CardErrors {
        let show_all = self.show_validation;
        let touched = self.touched;
        self.errors()
            .filtered(|field| show_all || touched.contains(field))
    }

    /// One-line status text about the detected issuer.
    pub fn status_message(&self) -> String {
        match self.issuer() {
            Some(brand) => format!("We detected a {} card.", issuer_badge(Some(brand))),
            None => "Start typing to detect the card provider automatically.".to_string(),
        }
    }

    /// Attempts to submit the form.
    ///
    /// On validation errors every field is marked touched, validation is
    /// switched on, and the errors are returned. On success the payload is
    /// stored and returned, and the form starts over with focus on the
    /// number field.
    pub fn submit(&mut self) -> Result<SubmissionPayload, CardErrors> {
        let errors = self.errors();
        if errors.has_errors() {
            tracing::debug!(failed = errors.iter().count(), "card form submit rejected");
            self.show_validation = true;
            self.touched = TouchedFields::ALL;
            return Err(errors);
        }

        let issuer = self.issuer();
        let payload = SubmissionPayload {
            number: self.values.number.clone(),
            name: self.values.name.clone(),
            expiry: self.values.expiry.clone(),
            cvc: self.values.cvc.clone(),
            issuer: issuer_badge(issuer),
        };
        tracing::debug!(issuer = issuer.map(|brand| brand.code()), "card form submitted");

        self.show_validation = false;
        self.touched = TouchedFields::default();
        self.values = CardValues::default();
        self.focused = Some(Field::Number);
        self.payload = Some(payload.clone());

        Ok(payload)
    }

    /// Returns the form to its initial state.
    pub fn reset(&mut self) {
        self.values = CardValues::default();
        self.touched = TouchedFields::default();
        self.focused = Some(Field::Number);
        self.show_validation = false;
        self.payload = None;
    }
}
