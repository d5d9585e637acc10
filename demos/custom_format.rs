//! Building a grammar rule by rule.
//!
//! Run with: cargo run --example custom_format

use numform::{parse_with_options, NumberFormat, ParseFloatOptions};

fn main() {
    // A strict grammar: digits on both sides of the decimal point, no
    // positive signs, apostrophe separators between integer digits only.
    let format = NumberFormat::builder()
        .digit_separator(b'\'')
        .required_integer_digits(true)
        .required_fraction_digits(true)
        .no_positive_mantissa_sign(true)
        .no_special(true)
        .integer_internal_digit_separator(true)
        .build()
        .expect("a separator character is set, so separator flags are legal");

    let options = ParseFloatOptions::builder()
        .format(format)
        .build()
        .expect("radix and exponent character are consistent");

    for input in ["1'000.5", "-12'345.25", ".5", "1.", "+1.0", "1''0.0"] {
        match parse_with_options::<f64>(input.as_bytes(), &options) {
            Ok(value) => println!("{input:>12} -> {value}"),
            Err(error) => println!("{input:>12} -> {error}"),
        }
    }
}
