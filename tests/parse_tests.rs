//! Integration tests for parsing: radixes, rounding modes, partial parses,
//! and the error taxonomy.

use numform::{
    parse, parse_partial, parse_partial_with_options, parse_with_options, ErrorKind,
    NumberFormat, ParseFloatOptions, ParseIntegerOptions, RoundingKind,
};

#[test]
fn integers_across_types() {
    assert_eq!(parse::<u8>(b"255"), Ok(255));
    assert_eq!(parse::<i8>(b"-128"), Ok(-128));
    assert_eq!(parse::<u16>(b"65535"), Ok(65535));
    assert_eq!(parse::<i32>(b"-2147483648"), Ok(i32::MIN));
    assert_eq!(parse::<u64>(b"18446744073709551615"), Ok(u64::MAX));
    assert_eq!(parse::<i64>(b"+9223372036854775807"), Ok(i64::MAX));
    assert_eq!(parse::<u128>(b"340282366920938463463374607431768211455"), Ok(u128::MAX));
    assert_eq!(parse::<usize>(b"0"), Ok(0));
    assert_eq!(parse::<isize>(b"-1"), Ok(-1));
}

#[test]
fn integer_errors() {
    assert_eq!(parse::<u8>(b"256").unwrap_err().kind(), ErrorKind::Overflow);
    assert_eq!(parse::<i8>(b"-129").unwrap_err().kind(), ErrorKind::Underflow);
    assert_eq!(parse::<u8>(b"-1").unwrap_err().kind(), ErrorKind::Underflow);
    assert_eq!(parse::<u8>(b"").unwrap_err().kind(), ErrorKind::Empty);
    assert_eq!(parse::<u8>(b"abc").unwrap_err().kind(), ErrorKind::EmptyMantissa);
    let err = parse::<u8>(b"12x").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidDigit);
    assert_eq!(err.index(), 2);
}

#[test]
fn partial_integers() {
    assert_eq!(parse_partial::<i32>(b"10a"), Ok((10, 2)));
    assert_eq!(parse_partial::<i32>(b"-10a"), Ok((-10, 3)));
    assert_eq!(parse_partial::<i32>(b"7"), Ok((7, 1)));
    // A decimal point is not part of an integer.
    assert_eq!(parse_partial::<i32>(b"10.5"), Ok((10, 2)));
}

#[test]
fn integer_radixes() {
    let hex = ParseIntegerOptions::hexadecimal();
    assert_eq!(parse_with_options::<u32>(b"ff", &hex), Ok(255));
    assert_eq!(parse_with_options::<u32>(b"FF", &hex), Ok(255));
    assert_eq!(parse_with_options::<i32>(b"-10", &hex), Ok(-16));
    let binary = ParseIntegerOptions::binary();
    assert_eq!(parse_with_options::<u8>(b"11111111", &binary), Ok(255));
    let octal = ParseIntegerOptions::builder().radix(8).build().unwrap();
    assert_eq!(parse_with_options::<u32>(b"777", &octal), Ok(511));
    let base36 = ParseIntegerOptions::builder().radix(36).build().unwrap();
    assert_eq!(parse_with_options::<u64>(b"numform", &base36), Ok(u64_from_base36(b"numform")));
}

fn u64_from_base36(text: &[u8]) -> u64 {
    text.iter().fold(0u64, |acc, &b| {
        acc * 36 + (b as char).to_digit(36).unwrap() as u64
    })
}

#[test]
fn floats_match_the_standard_library() {
    for text in [
        "0", "0.0", "-0.0", "1", "1.5", "-1.5", ".5", "5.", "1e10", "1e-10", "1.5e+300",
        "2.2250738585072014e-308", "5e-324", "1.7976931348623157e308",
        "3.141592653589793", "9007199254740993", "123456789.123456789",
    ] {
        let expected: f64 = text.parse().unwrap();
        assert_eq!(parse::<f64>(text.as_bytes()), Ok(expected), "mismatch for {text}");
    }
}

#[test]
fn float_specials() {
    assert!(parse::<f64>(b"NaN").unwrap().is_nan());
    assert!(parse::<f64>(b"nan").unwrap().is_nan());
    assert_eq!(parse::<f64>(b"inf"), Ok(f64::INFINITY));
    assert_eq!(parse::<f64>(b"Infinity"), Ok(f64::INFINITY));
    assert_eq!(parse::<f64>(b"-inf"), Ok(f64::NEG_INFINITY));
    assert_eq!(parse::<f32>(b"-infinity"), Ok(f32::NEG_INFINITY));
}

#[test]
fn custom_special_spellings() {
    let options = ParseFloatOptions::builder()
        .nan_string(b"missing")
        .inf_string(b"huge")
        .infinity_string(b"absolutely-huge")
        .build()
        .unwrap();
    assert!(parse_with_options::<f64>(b"missing", &options).unwrap().is_nan());
    assert_eq!(parse_with_options::<f64>(b"huge", &options), Ok(f64::INFINITY));
    assert_eq!(
        parse_with_options::<f64>(b"-absolutely-huge", &options),
        Ok(f64::NEG_INFINITY)
    );
    // The default spellings are no longer recognized.
    assert!(parse_with_options::<f64>(b"inf", &options).is_err());
}

#[test]
fn infinity_prefers_the_longer_spelling() {
    // "infinity" begins with "inf"; the longer spelling must win so the
    // whole token is consumed.
    assert_eq!(parse_partial::<f64>(b"infinity"), Ok((f64::INFINITY, 8)));
    assert_eq!(parse_partial::<f64>(b"infinite"), Ok((f64::INFINITY, 3)));
}

#[test]
fn partial_floats() {
    assert_eq!(parse_partial::<f64>(b"1.5e2 rest"), Ok((150.0, 5)));
    assert_eq!(parse_partial::<f64>(b"1.5."), Ok((1.5, 3)));
    assert_eq!(parse_partial::<f64>(b"-2.5e-1!"), Ok((-0.25, 7)));
}

#[test]
fn float_error_positions() {
    let err = parse::<f64>(b"1.5x").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidDigit);
    assert_eq!(err.index(), 3);
    let err = parse::<f64>(b"").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Empty);
    assert_eq!(err.index(), 0);
    let err = parse::<f64>(b"+").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyMantissa);
    assert_eq!(err.index(), 1);
}

#[test]
fn rounding_modes_differ_on_inexact_input() {
    let parse_mode = |text: &[u8], rounding| {
        let options = ParseFloatOptions::builder().rounding(rounding).build().unwrap();
        parse_with_options::<f64>(text, &options).unwrap()
    };
    let nearest = parse_mode(b"0.1", RoundingKind::NearestTieEven);
    let down = parse_mode(b"0.1", RoundingKind::TowardZero);
    let up = parse_mode(b"0.1", RoundingKind::TowardPositiveInfinity);
    assert!(down < up);
    assert_eq!(up.to_bits() - down.to_bits(), 1);
    assert!(nearest == down || nearest == up);
    // Exact input: all modes agree.
    for rounding in [
        RoundingKind::NearestTieEven,
        RoundingKind::NearestTieAwayZero,
        RoundingKind::TowardPositiveInfinity,
        RoundingKind::TowardNegativeInfinity,
        RoundingKind::TowardZero,
    ] {
        assert_eq!(parse_mode(b"0.25", rounding), 0.25);
    }
}

#[test]
fn hexadecimal_floats() {
    let options = ParseFloatOptions::hexadecimal();
    assert_eq!(parse_with_options::<f64>(b"A.8", &options), Ok(10.5));
    assert_eq!(parse_with_options::<f64>(b"ff.8", &options), Ok(255.5));
    assert_eq!(parse_with_options::<f64>(b"1p3", &options), Ok(4096.0));
    assert_eq!(parse_with_options::<f64>(b"1P-1", &options), Ok(1.0 / 16.0));
}

#[test]
fn binary_floats() {
    let options = ParseFloatOptions::binary();
    assert_eq!(parse_with_options::<f64>(b"1010", &options), Ok(10.0));
    assert_eq!(parse_with_options::<f64>(b"1.1", &options), Ok(1.5));
    assert_eq!(parse_with_options::<f64>(b"1.01e2", &options), Ok(5.0));
}

#[test]
fn lossy_mode_stays_close() {
    let options = ParseFloatOptions::builder().lossy(true).build().unwrap();
    for text in ["1.5", "3.141592653589793", "1e100", "2.5e-100"] {
        let exact: f64 = text.parse().unwrap();
        let lossy = parse_with_options::<f64>(text.as_bytes(), &options).unwrap();
        let error = ((lossy - exact) / exact).abs();
        assert!(error < 1e-9, "lossy parse of {text} drifted by {error}");
    }
}

#[test]
fn separated_input_with_ignore_format() {
    let format = NumberFormat::ignore(b'_').unwrap();
    let int_options = ParseIntegerOptions::builder().format(format).build().unwrap();
    assert_eq!(parse_with_options::<u64>(b"1_000_000", &int_options), Ok(1_000_000));
    assert_eq!(parse_with_options::<u64>(b"_1_", &int_options), Ok(1));
    let float_options = ParseFloatOptions::builder().format(format).build().unwrap();
    assert_eq!(
        parse_with_options::<f64>(b"1_234.5_6", &float_options),
        Ok(1234.56)
    );
}

#[test]
fn partial_with_options_reports_consumed() {
    let hex = ParseIntegerOptions::hexadecimal();
    assert_eq!(parse_partial_with_options::<u32>(b"FFx", &hex), Ok((255, 2)));
    let json = ParseFloatOptions::builder()
        .format(NumberFormat::JSON)
        .build()
        .unwrap();
    assert_eq!(parse_partial_with_options::<f64>(b"1.5,", &json), Ok((1.5, 3)));
}
