//! CLI tool for trying out the card input engine.
//!
//! # Usage
//!
//! ```bash
//! # Detect the issuer of a partial number
//! card-input detect 3714
//!
//! # Format a field as the form would
//! card-input format 371449635398431
//! card-input format --field expiry 1225
//! card-input format --field cvc 12345 --number 371449635398431
//!
//! # Masked previews
//! card-input mask "4111 1"
//!
//! # Validate a whole form
//! card-input validate --number 4111111111111111 --name "Jane Appleseed" \
//!     --expiry 12/30 --cvc 123 --json
//!
//! # List supported brands
//! card-input brands
//! ```

use card_input::{
    detect_issuer, format, mask, supported_brands, validate_with, CardValues, Field,
    ValidationOptions,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "card-input")]
#[command(author, version, about = "Payment card input helper")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the card issuer from a (partial) number
    Detect {
        /// Card number, any formatting
        number: String,
    },

    /// Format a field value the way the form does on input
    Format {
        /// Raw field value
        value: String,

        /// Field to format
        #[arg(short, long, default_value = "number")]
        field: FieldArg,

        /// Card number, used to size the security code
        #[arg(short, long, default_value = "")]
        number: String,
    },

    /// Draw the masked card preview for a field value
    Mask {
        /// Field value as shown in the input
        value: String,

        /// Field to mask
        #[arg(short, long, default_value = "number")]
        field: FieldArg,

        /// Card number, used to size the security code
        #[arg(short, long, default_value = "")]
        number: String,
    },

    /// Validate a complete card form
    Validate {
        /// Card number
        #[arg(long, default_value = "")]
        number: String,

        /// Name on card
        #[arg(long, default_value = "")]
        name: String,

        /// Expiry, MM/YY
        #[arg(long, default_value = "")]
        expiry: String,

        /// Security code
        #[arg(long, default_value = "")]
        cvc: String,

        /// Check expiry against this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Minimum cardholder name length
        #[arg(long, default_value_t = card_input::validate::MIN_NAME_LENGTH)]
        min_name_length: usize,
    },

    /// List supported card brands
    Brands,
}

#[derive(Clone, Copy, ValueEnum)]
enum FieldArg {
    Number,
    Name,
    Expiry,
    Cvc,
}

impl From<FieldArg> for Field {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Number => Field::Number,
            FieldArg::Name => Field::Name,
            FieldArg::Expiry => Field::Expiry,
            FieldArg::Cvc => Field::Cvc,
        }
    }
}

#[derive(Serialize)]
struct DetectOutput {
    issuer: Option<&'static str>,
    label: &'static str,
    valid_lengths: &'static [usize],
}

#[derive(Serialize)]
struct FieldOutput {
    field: Field,
    value: String,
}

#[derive(Serialize)]
struct ValidateOutput {
    valid: bool,
    issuer: Option<&'static str>,
    errors: card_input::CardErrors,
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("card_input=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("card_input=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let code = match cli.command {
        Commands::Detect { number } => cmd_detect(&number, cli.json),
        Commands::Format {
            value,
            field,
            number,
        } => cmd_format(&value, field.into(), &number, cli.json),
        Commands::Mask {
            value,
            field,
            number,
        } => cmd_mask(&value, field.into(), &number, cli.json),
        Commands::Validate {
            number,
            name,
            expiry,
            cvc,
            today,
            min_name_length,
        } => {
            let values = CardValues::new(number, name, expiry, cvc);
            let options = ValidationOptions {
                min_name_length,
                today,
            };
            cmd_validate(&values, &options, cli.json)
        }
        Commands::Brands => cmd_brands(cli.json),
    };

    std::process::exit(code);
}

fn print_json<T: Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to encode output");
            2
        }
    }
}

fn cmd_detect(number: &str, json: bool) -> i32 {
    let issuer = detect_issuer(number);
    let output = DetectOutput {
        issuer: issuer.map(|brand| brand.code()),
        label: mask::brand_label(issuer),
        valid_lengths: issuer.map(|brand| brand.valid_lengths()).unwrap_or_default(),
    };

    if json {
        return print_json(&output);
    }

    println!("Detected Brand: {}", output.label);
    if let Some(brand) = issuer {
        println!("Badge: {}", mask::issuer_badge(Some(brand)));
        println!("Valid Lengths: {:?}", output.valid_lengths);
        println!("Security Code: {} digits", brand.spec().cvc_length);
    }
    0
}

fn cmd_format(value: &str, field: Field, number: &str, json: bool) -> i32 {
    let formatted = match field {
        Field::Number => format::format_number(value),
        Field::Expiry => format::format_expiry(value),
        Field::Cvc => format::format_cvc(value, number),
        Field::Name => value.to_string(),
    };
    emit_field(field, formatted, json)
}

fn cmd_mask(value: &str, field: Field, number: &str, json: bool) -> i32 {
    let masked = match field {
        Field::Number => mask::mask_number(value),
        Field::Expiry => mask::mask_expiry(value),
        Field::Cvc => mask::mask_cvc(value, number),
        Field::Name => mask::normalise_name(value),
    };
    emit_field(field, masked, json)
}

fn emit_field(field: Field, value: String, json: bool) -> i32 {
    if json {
        return print_json(&FieldOutput { field, value });
    }
    println!("{}", value);
    0
}

fn cmd_validate(values: &CardValues, options: &ValidationOptions, json: bool) -> i32 {
    let errors = validate_with(values, options);
    let valid = !errors.has_errors();
    tracing::info!(valid, "validated card form");

    if json {
        let output = ValidateOutput {
            valid,
            issuer: detect_issuer(&values.number).map(|brand| brand.code()),
            errors,
        };
        let code = print_json(&output);
        return if valid { code } else { 1 };
    }

    if valid {
        println!("Valid: yes");
        println!("Issuer: {}", mask::brand_label(detect_issuer(&values.number)));
        return 0;
    }

    println!("Valid: no");
    for (field, error) in errors.iter() {
        println!("{}: {}", field, error);
    }
    1
}

fn cmd_brands(json: bool) -> i32 {
    if json {
        return print_json(&supported_brands());
    }

    for spec in supported_brands() {
        let groups: Vec<String> = spec.grouping.iter().map(|g| g.to_string()).collect();
        println!(
            "{:<12} {:<18} prefix {:<24} layout {:<8} cvc {}",
            spec.code,
            spec.label,
            spec.bin_prefix,
            groups.join("-"),
            spec.cvc_length
        );
    }
    0
}
