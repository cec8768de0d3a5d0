//! Basic card input example.
//!
//! Run with: `cargo run --example basic`

use card_input::{detect_issuer, format, mask, supported_brands, validate, CardValues, Field};

fn main() {
    println!("=== Issuer Detection ===\n");

    for number in ["4", "37", "3528", "6011", "62", "9"] {
        println!("  {:<6} -> {}", number, mask::brand_label(detect_issuer(number)));
    }
    println!();

    println!("=== Formatting ===\n");

    let raw_numbers = [
        ("Visa", "4111111111111111"),
        ("Amex", "378282246310005"),
        ("Diners Club", "30569309025904"),
        ("Pasted with dashes", "5555-5555-5555-4444"),
        ("Too long", "41111111111111119999"),
    ];

    for (label, raw) in raw_numbers {
        let formatted = format::format_number(raw);
        println!("  {:<20} {:<22} -> {}", label, raw, formatted);
    }
    println!();

    println!("  Expiry '1225'  -> {}", format::format_expiry("1225"));
    println!("  CVC '12345' (Amex) -> {}", format::format_cvc("12345", "378282246310005"));
    println!("  CVC '12345' (Visa) -> {}", format::format_cvc("12345", "4111111111111111"));
    println!();

    println!("=== Card Preview ===\n");

    let number = format::format_number("3714496");
    println!("  Number: {}", mask::mask_number(&number));
    println!("  Expiry: {}", mask::mask_expiry("12/"));
    println!("  CVC:    {}", mask::mask_cvc("", &number));
    println!("  Name:   {}", mask::normalise_name(""));
    println!();

    println!("=== Validation ===\n");

    let forms = [
        CardValues::new("4111 1111 1111 1111", "Jane Appleseed", "12/30", "123"),
        CardValues::new("4111 1111 1111 1112", "Jane Appleseed", "12/30", "123"),
        CardValues::new("3782 822463 10005", "Jo", "01/20", "123"),
        CardValues::default(),
    ];

    for values in &forms {
        let errors = validate(values);
        println!("  {:?}", values);
        if !errors.has_errors() {
            println!("    valid");
        }
        for field in Field::ALL {
            if let Some(message) = errors.message(field) {
                println!("    {:<7} {}", field, message);
            }
        }
    }
    println!();

    println!("=== Accepted Brands ===\n");

    for spec in supported_brands() {
        println!("  {:<18} {}", spec.label, spec.accent);
    }
}
