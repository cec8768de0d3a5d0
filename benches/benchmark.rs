//! Benchmarks for the per-keystroke hot path.
//!
//! Run with: cargo bench

use card_input::{detect_issuer, format, luhn, mask, validate_at, CardValues};
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const VISA_16: &str = "4111111111111111";
const VISA_16_FORMATTED: &str = "4111 1111 1111 1111";
const MASTERCARD_2_SERIES: &str = "2223000048400011";
const AMEX: &str = "378282246310005";
const MAESTRO: &str = "6759649826438453";

const VISA_DIGITS: [u8; 16] = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap_or_default()
}

/// Benchmark issuer detection across the prefix table
fn bench_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_issuer");

    for (name, number) in [
        ("visa", VISA_16),
        ("mastercard_2_series", MASTERCARD_2_SERIES),
        ("amex", AMEX),
        // Last rule in the table
        ("maestro", MAESTRO),
        ("unknown", "9999999999999999"),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), number, |b, number| {
            b.iter(|| detect_issuer(black_box(number)))
        });
    }

    group.finish();
}

/// Benchmark the formatters
fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    group.bench_function("number_raw", |b| {
        b.iter(|| format::format_number(black_box(VISA_16)))
    });

    group.bench_function("number_formatted", |b| {
        b.iter(|| format::format_number(black_box(VISA_16_FORMATTED)))
    });

    group.bench_function("number_amex", |b| {
        b.iter(|| format::format_number(black_box(AMEX)))
    });

    group.bench_function("expiry", |b| {
        b.iter(|| format::format_expiry(black_box("12/25")))
    });

    group.bench_function("cvc", |b| {
        b.iter(|| format::format_cvc(black_box("12345"), black_box(AMEX)))
    });

    group.finish();
}

/// Benchmark typing a full number one keystroke at a time
fn bench_typing(c: &mut Criterion) {
    c.bench_function("type_visa_16", |b| {
        b.iter(|| {
            let mut field = String::new();
            for key in black_box(VISA_16).chars() {
                field.push(key);
                field = format::format_number(&field);
            }
            field
        })
    });
}

/// Benchmark Luhn algorithm specifically
fn bench_luhn(c: &mut Criterion) {
    let mut group = c.benchmark_group("luhn");

    group.bench_function("digits", |b| {
        b.iter(|| luhn::validate(black_box(&VISA_DIGITS)))
    });

    group.bench_function("string", |b| {
        b.iter(|| luhn::passes_luhn(black_box(VISA_16_FORMATTED)))
    });

    group.finish();
}

/// Benchmark masked previews
fn bench_masking(c: &mut Criterion) {
    let mut group = c.benchmark_group("mask");

    group.bench_function("number_partial", |b| {
        b.iter(|| mask::mask_number(black_box("4111 11")))
    });

    group.bench_function("cvc_amex", |b| {
        b.iter(|| mask::mask_cvc(black_box("12"), black_box(AMEX)))
    });

    group.finish();
}

/// Benchmark whole-form validation
fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    let today = today();

    let valid = CardValues::new(VISA_16_FORMATTED, "Jane Appleseed", "12/30", "123");
    group.bench_function("valid_form", |b| {
        b.iter(|| validate_at(black_box(&valid), today))
    });

    let empty = CardValues::default();
    group.bench_function("empty_form", |b| {
        b.iter(|| validate_at(black_box(&empty), today))
    });

    let invalid = CardValues::new("4111 1111 1111 1112", "J", "13/30", "12");
    group.bench_function("all_invalid", |b| {
        b.iter(|| validate_at(black_box(&invalid), today))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_detection,
    bench_formatting,
    bench_typing,
    bench_luhn,
    bench_masking,
    bench_validation,
);
criterion_main!(benches);
