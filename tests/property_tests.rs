//! Property-based tests - pragmatic approach testing core roundtrip and
//! never-panic guarantees across generated inputs.

use proptest::prelude::*;
use numform::{
    parse, parse_partial, parse_with_options, to_string, to_string_with_options, ErrorKind,
    ParseFloatOptions, ParseIntegerOptions, WriteIntegerOptions,
};

fn int_roundtrip<T>(value: T) -> bool
where
    T: numform::FromText + numform::ToText + Copy + PartialEq + std::fmt::Debug,
{
    let text = to_string(value);
    match parse::<T>(text.as_bytes()) {
        Ok(back) => back == value,
        Err(e) => {
            eprintln!("parse failed for {text}: {e}");
            false
        }
    }
}

proptest! {
    // Round trips for primitive types under the default format.
    #[test]
    fn prop_u32_roundtrip(n in any::<u32>()) {
        prop_assert!(int_roundtrip(n));
    }

    #[test]
    fn prop_i64_roundtrip(n in any::<i64>()) {
        prop_assert!(int_roundtrip(n));
    }

    #[test]
    fn prop_u128_roundtrip(n in any::<u128>()) {
        prop_assert!(int_roundtrip(n));
    }

    #[test]
    fn prop_i8_roundtrip(n in any::<i8>()) {
        prop_assert!(int_roundtrip(n));
    }

    #[test]
    fn prop_f64_roundtrip(n in any::<f64>()) {
        if n.is_nan() {
            let text = to_string(n);
            prop_assert!(parse::<f64>(text.as_bytes()).unwrap().is_nan());
        } else {
            prop_assert!(int_roundtrip(n));
        }
    }

    #[test]
    fn prop_f32_roundtrip(n in any::<f32>()) {
        if n.is_nan() {
            let text = to_string(n);
            prop_assert!(parse::<f32>(text.as_bytes()).unwrap().is_nan());
        } else {
            prop_assert!(int_roundtrip(n));
        }
    }

    // Round trips at non-decimal radixes.
    #[test]
    fn prop_u64_radix_roundtrip(n in any::<u64>(), radix in 2u32..=36) {
        let write_options = WriteIntegerOptions::builder().radix(radix).build().unwrap();
        let parse_options = ParseIntegerOptions::builder().radix(radix).build().unwrap();
        let text = to_string_with_options(n, &write_options);
        prop_assert_eq!(parse_with_options::<u64>(text.as_bytes(), &parse_options), Ok(n));
    }

    #[test]
    fn prop_f64_binary_roundtrip(n in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
        let write_options = numform::WriteFloatOptions::binary();
        let parse_options = ParseFloatOptions::binary();
        let text = to_string_with_options(n, &write_options);
        prop_assert_eq!(
            parse_with_options::<f64>(text.as_bytes(), &parse_options),
            Ok(n)
        );
    }

    // Parsing agrees with the standard library on its own output.
    #[test]
    fn prop_f64_matches_std(n in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
        let text = format!("{n:e}");
        prop_assert_eq!(parse::<f64>(text.as_bytes()), Ok(n));
    }

    // Arbitrary bytes never panic, and either parse or produce a positioned
    // error inside the input.
    #[test]
    fn prop_parse_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..32)) {
        match parse::<f64>(&bytes) {
            Ok(_) => {}
            Err(e) => prop_assert!(e.index() <= bytes.len()),
        }
        match parse::<i32>(&bytes) {
            Ok(_) => {}
            Err(e) => prop_assert!(e.index() <= bytes.len()),
        }
    }

    // A successful partial parse never claims more bytes than exist, and
    // reparsing the consumed prefix gives the same value.
    #[test]
    fn prop_partial_is_a_prefix_parse(bytes in proptest::collection::vec(any::<u8>(), 0..24)) {
        if let Ok((value, consumed)) = parse_partial::<f64>(&bytes) {
            prop_assert!(consumed <= bytes.len());
            let reparsed = parse::<f64>(&bytes[..consumed]).unwrap();
            if value.is_nan() {
                prop_assert!(reparsed.is_nan());
            } else {
                prop_assert_eq!(reparsed, value);
            }
        }
    }

    // Digit strings with an ASCII suffix always partially parse to the digit
    // prefix.
    #[test]
    fn prop_digits_then_garbage(n in any::<u16>(), suffix in "[a-z ]{1,4}") {
        let text = format!("{n}{suffix}");
        let (value, consumed) = parse_partial::<u32>(text.as_bytes()).unwrap();
        prop_assert_eq!(value, u32::from(n));
        prop_assert_eq!(consumed, n.to_string().len());
    }

    // Empty input is always the Empty error.
    #[test]
    fn prop_sign_only_never_parses(sign in prop::sample::select(vec!["+", "-"])) {
        let err = parse::<i64>(sign.as_bytes()).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::EmptyMantissa);
    }
}
