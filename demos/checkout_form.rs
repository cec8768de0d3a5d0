//! Drives a checkout form the way a UI would.
//!
//! Run with: `cargo run --example checkout_form`

use card_input::form::FormState;
use card_input::{mask, Field};

fn render(form: &FormState) {
    let values = form.values();
    println!("  +-------------------------------+");
    println!("  | {:<29} |", mask::brand_label(form.issuer()));
    println!("  | {:<29} |", mask::mask_number(&values.number));
    println!("  | {:<21} {:>7} |", mask::normalise_name(&values.name), mask::mask_expiry(&values.expiry));
    println!("  | CVC {:<25} |", mask::mask_cvc(&values.cvc, &values.number));
    println!("  +-------------------------------+");
    println!("  {}", form.status_message());

    for (field, error) in form.display_errors().iter() {
        println!("  ! {}: {}", field, error);
    }
    println!();
}

fn type_into(form: &mut FormState, field: Field, keys: &str) {
    form.focus(field);
    for key in keys.chars() {
        let current = format!("{}{}", form.values().get(field), key);
        form.input(field, &current);
    }
    form.blur(field);
}

fn main() {
    let mut form = FormState::new();

    println!("=== Empty form ===\n");
    render(&form);

    println!("=== Number typed ===\n");
    type_into(&mut form, Field::Number, "378282246310005");
    render(&form);

    println!("=== Submit too early ===\n");
    if let Err(errors) = form.submit() {
        println!("  rejected: {}\n", errors);
    }
    render(&form);

    println!("=== Remaining fields ===\n");
    type_into(&mut form, Field::Name, "Jane Appleseed");
    type_into(&mut form, Field::Expiry, "1230");
    type_into(&mut form, Field::Cvc, "12345");
    render(&form);

    println!("=== Submit ===\n");
    match form.submit() {
        Ok(payload) => println!("  accepted: {:?}\n", payload),
        Err(errors) => println!("  rejected: {}\n", errors),
    }
    render(&form);
}
