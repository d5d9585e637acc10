//! Integration tests for number formats: builder validation, presets, and
//! accessor predicates.

use numform::{parse_with_options, NumberFormat, ParseFloatOptions, ParseIntegerOptions};

#[test]
fn permissive_is_all_clear() {
    let format = NumberFormat::permissive();
    assert_eq!(format.bits(), 0);
    assert_eq!(format, NumberFormat::default());
    assert!(!format.required_integer_digits());
    assert!(!format.required_fraction_digits());
    assert!(!format.required_exponent_digits());
    assert!(!format.no_special());
    assert!(!format.has_digit_separator_flags());
}

#[test]
fn standard_only_requires_exponent_digits() {
    let format = NumberFormat::standard();
    assert!(format.required_exponent_digits());
    assert!(!format.required_integer_digits());
    assert!(!format.required_fraction_digits());
    assert!(!format.no_special());
}

#[test]
fn builder_roundtrips_every_flag() {
    let format = NumberFormat::builder()
        .digit_separator(b'_')
        .required_integer_digits(true)
        .required_fraction_digits(true)
        .required_exponent_digits(true)
        .no_positive_mantissa_sign(true)
        .required_mantissa_sign(true)
        .no_exponent_notation(true)
        .no_positive_exponent_sign(true)
        .required_exponent_sign(true)
        .no_exponent_without_fraction(true)
        .no_special(true)
        .case_sensitive_special(true)
        .no_integer_leading_zeros(true)
        .no_float_leading_zeros(true)
        .integer_internal_digit_separator(true)
        .fraction_internal_digit_separator(true)
        .exponent_internal_digit_separator(true)
        .integer_leading_digit_separator(true)
        .fraction_leading_digit_separator(true)
        .exponent_leading_digit_separator(true)
        .integer_trailing_digit_separator(true)
        .fraction_trailing_digit_separator(true)
        .exponent_trailing_digit_separator(true)
        .integer_consecutive_digit_separator(true)
        .fraction_consecutive_digit_separator(true)
        .exponent_consecutive_digit_separator(true)
        .special_digit_separator(true)
        .build()
        .unwrap();
    assert_eq!(format.digit_separator(), b'_');
    assert!(format.required_integer_digits());
    assert!(format.required_fraction_digits());
    assert!(format.required_exponent_digits());
    assert!(format.required_digits());
    assert!(format.no_positive_mantissa_sign());
    assert!(format.required_mantissa_sign());
    assert!(format.no_exponent_notation());
    assert!(format.no_positive_exponent_sign());
    assert!(format.required_exponent_sign());
    assert!(format.no_exponent_without_fraction());
    assert!(format.no_special());
    assert!(format.case_sensitive_special());
    assert!(format.no_integer_leading_zeros());
    assert!(format.no_float_leading_zeros());
    assert!(format.integer_internal_digit_separator());
    assert!(format.fraction_internal_digit_separator());
    assert!(format.exponent_internal_digit_separator());
    assert!(format.integer_leading_digit_separator());
    assert!(format.fraction_leading_digit_separator());
    assert!(format.exponent_leading_digit_separator());
    assert!(format.integer_trailing_digit_separator());
    assert!(format.fraction_trailing_digit_separator());
    assert!(format.exponent_trailing_digit_separator());
    assert!(format.integer_consecutive_digit_separator());
    assert!(format.fraction_consecutive_digit_separator());
    assert!(format.exponent_consecutive_digit_separator());
    assert!(format.special_digit_separator());
    assert!(format.internal_digit_separator());
    assert!(format.leading_digit_separator());
    assert!(format.trailing_digit_separator());
    assert!(format.consecutive_digit_separator());
}

#[test]
fn separator_flags_without_separator_byte_fail_to_build() {
    assert!(NumberFormat::builder()
        .integer_internal_digit_separator(true)
        .build()
        .is_none());
    assert!(NumberFormat::builder()
        .fraction_leading_digit_separator(true)
        .build()
        .is_none());
    assert!(NumberFormat::builder()
        .special_digit_separator(true)
        .build()
        .is_none());
}

#[test]
fn invalid_separator_bytes_fail_to_build() {
    for separator in [b'0', b'9', b'+', b'-', b'.', 0x80] {
        assert!(
            NumberFormat::builder()
                .digit_separator(separator)
                .integer_internal_digit_separator(true)
                .build()
                .is_none(),
            "separator {separator:#x} should be rejected"
        );
    }
}

#[test]
fn inert_separator_builds() {
    let format = NumberFormat::builder().digit_separator(b'_').build().unwrap();
    assert!(!format.has_digit_separator_flags());
    // Inert means the separator is never consumed while parsing.
    let options = ParseIntegerOptions::builder().format(format).build().unwrap();
    assert!(parse_with_options::<u32>(b"1_0", &options).is_err());
}

#[test]
fn ignore_builds_a_lenient_format() {
    let format = NumberFormat::ignore(b'_').unwrap();
    assert!(format.internal_digit_separator());
    assert!(format.leading_digit_separator());
    assert!(format.trailing_digit_separator());
    assert!(format.consecutive_digit_separator());
    assert!(format.special_digit_separator());
    assert!(NumberFormat::ignore(b'3').is_none());
    assert!(NumberFormat::ignore(b'-').is_none());
}

#[test]
fn formats_compare_by_packed_value() {
    assert_eq!(NumberFormat::permissive(), NumberFormat::PERMISSIVE);
    assert_eq!(NumberFormat::standard(), NumberFormat::STANDARD);
    assert_ne!(NumberFormat::JSON, NumberFormat::TOML);
    assert_eq!(NumberFormat::YAML, NumberFormat::JSON);
}

#[test]
fn json_preset_matches_grammar() {
    let options = ParseFloatOptions::builder()
        .format(NumberFormat::JSON)
        .build()
        .unwrap();
    // Valid JSON numbers.
    for text in &["0", "-1", "1.5", "1e10", "1.5e-10", "0.5"] {
        assert!(
            parse_with_options::<f64>(text.as_bytes(), &options).is_ok(),
            "JSON should accept {text}"
        );
    }
    // Invalid JSON numbers.
    for text in &[".5", "1.", "+1", "NaN", "inf", "1.e5", "1.5e"] {
        assert!(
            parse_with_options::<f64>(text.as_bytes(), &options).is_err(),
            "JSON should reject {text}"
        );
    }
}

#[test]
fn rust_literal_preset_matches_grammar() {
    let options = ParseFloatOptions::builder()
        .format(NumberFormat::RUST_LITERAL)
        .build()
        .unwrap();
    for text in &["1_000.5", "1__0.0", "1_.0", "1.5"] {
        assert!(
            parse_with_options::<f64>(text.as_bytes(), &options).is_ok(),
            "Rust literal should accept {text}"
        );
    }
    for text in &["_1.0", "+1.0", "inf", "1.5e"] {
        assert!(
            parse_with_options::<f64>(text.as_bytes(), &options).is_err(),
            "Rust literal should reject {text}"
        );
    }
}

#[test]
fn toml_preset_matches_grammar() {
    let options = ParseFloatOptions::builder()
        .format(NumberFormat::TOML)
        .build()
        .unwrap();
    assert!(parse_with_options::<f64>(b"1_000.5", &options).is_ok());
    assert!(parse_with_options::<f64>(b"1.5", &options).is_ok());
    assert!(parse_with_options::<f64>(b".5", &options).is_err());
    assert!(parse_with_options::<f64>(b"1_.5", &options).is_err());
    assert!(parse_with_options::<f64>(b"inf", &options).is_err());
}

#[test]
fn cxx17_literal_uses_quote_separator() {
    let options = ParseFloatOptions::builder()
        .format(NumberFormat::CXX17_LITERAL)
        .build()
        .unwrap();
    assert!(parse_with_options::<f64>(b"1'000.5", &options).is_ok());
    assert!(parse_with_options::<f64>(b"1_000.5", &options).is_err());
}

#[test]
fn union_combines_flags() {
    let combined = NumberFormat::STANDARD.union(NumberFormat::NO_SPECIAL);
    assert!(combined.required_exponent_digits());
    assert!(combined.no_special());
}
