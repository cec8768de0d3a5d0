//! WebAssembly bindings for browser card forms.
//!
//! The rendering layer keeps the form values in JavaScript and calls these
//! functions on every keystroke.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { formatNumber, detectIssuer, validateCard, maskCvc } from 'card_input';
//!
//! await init();
//!
//! input.value = formatNumber(input.value);       // "4111 1111 1111 1111"
//! const issuer = detectIssuer(input.value);      // "visa" or undefined
//! preview.textContent = maskCvc(cvc.value, input.value);
//!
//! const errors = validateCard(number, name, expiry, cvc);
//! if (errors.hasErrors) {
//!     console.log(errors.number);                // "Enter a valid card number"
//! }
//! ```

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::card::Field;
use crate::{CardBrand, CardErrors, CardValues};

/// Validation result, returned to JavaScript.
#[wasm_bindgen]
pub struct ValidationResult {
    errors: CardErrors,
}

#[wasm_bindgen]
impl ValidationResult {
    /// True if any field has an error.
    #[wasm_bindgen(getter, js_name = hasErrors)]
    pub fn has_errors(&self) -> bool {
        self.errors.has_errors()
    }

    /// Card number message, if any.
    #[wasm_bindgen(getter)]
    pub fn number(&self) -> Option<String> {
        self.errors.message(Field::Number)
    }

    /// Name message, if any.
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> Option<String> {
        self.errors.message(Field::Name)
    }

    /// Expiry message, if any.
    #[wasm_bindgen(getter)]
    pub fn expiry(&self) -> Option<String> {
        self.errors.message(Field::Expiry)
    }

    /// Security code message, if any.
    #[wasm_bindgen(getter)]
    pub fn cvc(&self) -> Option<String> {
        self.errors.message(Field::Cvc)
    }
}

/// Strips everything but ASCII digits.
#[wasm_bindgen(js_name = extractDigits)]
pub fn extract_digits(raw: &str) -> String {
    crate::digits::extract_digits(raw)
}

/// Detects the issuer code (`"visa"`, `"amex"`, ...) of a partial number.
///
/// # Example
/// ```javascript
/// detectIssuer("4111");  // "visa"
/// detectIssuer("");      // undefined
/// ```
#[wasm_bindgen(js_name = detectIssuer)]
pub fn detect_issuer(number: &str) -> Option<String> {
    crate::detect::detect_issuer(number).map(|brand| brand.code().to_string())
}

/// Formats a card number for the input field.
#[wasm_bindgen(js_name = formatNumber)]
pub fn format_number(raw: &str) -> String {
    crate::format::format_number(raw)
}

/// Formats an expiry for the input field.
#[wasm_bindgen(js_name = formatExpiry)]
pub fn format_expiry(raw: &str) -> String {
    crate::format::format_expiry(raw)
}

/// Formats a security code for the input field.
#[wasm_bindgen(js_name = formatCvc)]
pub fn format_cvc(raw: &str, number: &str) -> String {
    crate::format::format_cvc(raw, number)
}

/// Card number preview.
#[wasm_bindgen(js_name = maskNumber)]
pub fn mask_number(value: &str) -> String {
    crate::mask::mask_number(value)
}

/// Expiry preview.
#[wasm_bindgen(js_name = maskExpiry)]
pub fn mask_expiry(value: &str) -> String {
    crate::mask::mask_expiry(value)
}

/// Security code preview.
#[wasm_bindgen(js_name = maskCvc)]
pub fn mask_cvc(value: &str, number: &str) -> String {
    crate::mask::mask_cvc(value, number)
}

/// Cardholder name for the card face.
#[wasm_bindgen(js_name = normaliseName)]
pub fn normalise_name(value: &str) -> String {
    crate::mask::normalise_name(value)
}

/// Human-readable brand name for an issuer code, `"Unknown"` otherwise.
#[wasm_bindgen(js_name = brandLabel)]
pub fn brand_label(issuer: Option<String>) -> String {
    let brand = issuer.and_then(|code| code.parse::<CardBrand>().ok());
    crate::mask::brand_label(brand).to_string()
}

/// Codes of every supported brand, in display order.
#[wasm_bindgen(js_name = supportedBrands)]
pub fn supported_brands() -> js_sys::Array {
    crate::supported_brands()
        .iter()
        .map(|spec| JsValue::from_str(spec.code))
        .collect()
}

/// Accent color of a brand, for themed previews.
#[wasm_bindgen(js_name = brandAccent)]
pub fn brand_accent(issuer: &str) -> Option<String> {
    issuer
        .parse::<CardBrand>()
        .ok()
        .map(|brand| brand.spec().accent.to_string())
}

/// Validates the four form values against the local clock.
#[wasm_bindgen(js_name = validateCard)]
pub fn validate_card(number: &str, name: &str, expiry: &str, cvc: &str) -> ValidationResult {
    let values = CardValues::new(number, name, expiry, cvc);
    ValidationResult {
        errors: crate::validate(&values),
    }
}

/// Returns true if any field of `result` has an error.
#[wasm_bindgen(js_name = hasErrors)]
pub fn has_errors(result: &ValidationResult) -> bool {
    crate::has_errors(&result.errors)
}
