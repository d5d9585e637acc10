//! Grammar-driven scanning of numeric text.
//!
//! The scanner walks the input bytes exactly once, enforcing every rule the
//! active [`NumberFormat`] carries, and produces the raw components of the
//! number (sign, digit runs, explicit exponent) for the conversion engine to
//! assemble. All positioned error production lives here: whichever byte
//! violates the grammar is the byte the reported index points at.
//!
//! Scanning runs in one of two modes. A *complete* scan treats any grammar
//! violation after the first byte as an error. A *partial* scan instead
//! backtracks to the longest prefix that forms a valid number, so trailing
//! garbage (or an exponent marker that never materializes into a legal
//! exponent) simply ends the token. Violations that leave no valid prefix
//! at all (an empty mantissa, a forbidden sign) are errors in both modes.

use crate::error::{Error, ErrorKind, Result};
use crate::format::NumberFormat;

/// Raw components of a scanned integer.
#[derive(Debug)]
pub(crate) struct RawInteger<'a> {
    pub negative: bool,
    /// Digit run, possibly containing legal separator bytes.
    pub digits: &'a [u8],
    /// Absolute offset of `digits` within the input.
    pub digits_start: usize,
    pub consumed: usize,
}

/// Raw components of a scanned finite float.
#[derive(Debug)]
pub(crate) struct RawFloat<'a> {
    pub negative: bool,
    /// Integer digit run, possibly containing legal separator bytes.
    pub integer: &'a [u8],
    /// Fraction digit run, possibly containing legal separator bytes.
    pub fraction: &'a [u8],
    /// Explicit exponent value, 0 when absent. Saturated well past any
    /// representable magnitude.
    pub exponent: i32,
    pub consumed: usize,
}

/// Outcome of scanning a float.
#[derive(Debug)]
pub(crate) enum FloatScan<'a> {
    Finite(RawFloat<'a>),
    Nan { negative: bool, consumed: usize },
    Infinite { negative: bool, consumed: usize },
}

/// Separator placements legal for one segment of the number.
#[derive(Copy, Clone, Debug)]
struct SeparatorRules {
    internal: bool,
    leading: bool,
    trailing: bool,
    consecutive: bool,
}

impl SeparatorRules {
    fn integer(format: NumberFormat) -> Self {
        SeparatorRules {
            internal: format.integer_internal_digit_separator(),
            leading: format.integer_leading_digit_separator(),
            trailing: format.integer_trailing_digit_separator(),
            consecutive: format.integer_consecutive_digit_separator(),
        }
    }

    fn fraction(format: NumberFormat) -> Self {
        SeparatorRules {
            internal: format.fraction_internal_digit_separator(),
            leading: format.fraction_leading_digit_separator(),
            trailing: format.fraction_trailing_digit_separator(),
            consecutive: format.fraction_consecutive_digit_separator(),
        }
    }

    fn exponent(format: NumberFormat) -> Self {
        SeparatorRules {
            internal: format.exponent_internal_digit_separator(),
            leading: format.exponent_leading_digit_separator(),
            trailing: format.exponent_trailing_digit_separator(),
            consecutive: format.exponent_consecutive_digit_separator(),
        }
    }
}

#[inline]
pub(crate) fn digit_value(byte: u8, radix: u32) -> Option<u32> {
    (byte as char).to_digit(radix)
}

/// Byte cursor over the input.
struct Cursor<'a> {
    bytes: &'a [u8],
    index: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Cursor { bytes, index: 0 }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.index).copied()
    }

    #[inline]
    fn bump(&mut self) {
        self.index += 1;
    }
}

/// Consumes one digit run, honoring the separator placement rules.
///
/// Returns the consumed subslice (separators included) and the digit count.
/// A separator in an illegal position is left unconsumed and ends the run.
fn scan_digits<'a>(
    cursor: &mut Cursor<'a>,
    radix: u32,
    separator: u8,
    rules: SeparatorRules,
) -> (&'a [u8], usize) {
    let start = cursor.index;
    let mut count = 0usize;
    loop {
        match cursor.peek() {
            Some(byte) if digit_value(byte, radix).is_some() => {
                count += 1;
                cursor.bump();
            }
            Some(byte) if separator != 0 && byte == separator => {
                let run_start = cursor.index;
                let mut run_len = 0usize;
                while cursor.peek() == Some(separator) {
                    run_len += 1;
                    cursor.bump();
                }
                let next_is_digit = cursor
                    .peek()
                    .is_some_and(|b| digit_value(b, radix).is_some());
                let placement_ok = if count == 0 {
                    rules.leading
                } else if next_is_digit {
                    rules.internal
                } else {
                    rules.trailing
                };
                if !placement_ok || (run_len > 1 && !rules.consecutive) {
                    cursor.index = run_start;
                    break;
                }
            }
            _ => break,
        }
    }
    (&cursor.bytes[start..cursor.index], count)
}

/// Matches a special-value spelling at the start of `input`.
///
/// Returns the number of input bytes consumed, or `None` if the spelling
/// does not match. With a nonzero `separator`, separator bytes inside the
/// input are skipped while matching.
fn match_special(
    input: &[u8],
    spelling: &[u8],
    case_sensitive: bool,
    separator: u8,
) -> Option<usize> {
    if spelling.is_empty() {
        return None;
    }
    let mut consumed = 0usize;
    for &expected in spelling {
        loop {
            let byte = *input.get(consumed)?;
            if separator != 0 && byte == separator {
                consumed += 1;
                continue;
            }
            let matches = if case_sensitive {
                byte == expected
            } else {
                byte.eq_ignore_ascii_case(&expected)
            };
            if !matches {
                return None;
            }
            consumed += 1;
            break;
        }
    }
    Some(consumed)
}

/// Offset of the first digit in a run, looking through separators.
fn first_digit_offset(run: &[u8], separator: u8) -> Option<usize> {
    run.iter()
        .position(|&b| separator == 0 || b != separator)
}

/// First digit of a run, looking through separators.
fn first_digit(run: &[u8], separator: u8) -> Option<u8> {
    first_digit_offset(run, separator).map(|at| run[at])
}

/// Scans the mantissa sign, enforcing the sign rules. Returns the sign at
/// byte 0.
fn scan_mantissa_sign(cursor: &mut Cursor<'_>, format: NumberFormat) -> Result<bool> {
    match cursor.peek() {
        Some(b'+') => {
            if format.no_positive_mantissa_sign() {
                return Err(Error::new(ErrorKind::InvalidPositiveMantissaSign, 0));
            }
            cursor.bump();
            Ok(false)
        }
        Some(b'-') => {
            cursor.bump();
            Ok(true)
        }
        _ => {
            if format.required_mantissa_sign() {
                return Err(Error::new(ErrorKind::MissingMantissaSign, 0));
            }
            Ok(false)
        }
    }
}

/// Scans an integer per the format's integer-segment rules.
pub(crate) fn scan_integer<'a>(
    bytes: &'a [u8],
    radix: u32,
    format: NumberFormat,
    partial: bool,
) -> Result<RawInteger<'a>> {
    if bytes.is_empty() {
        return Err(Error::new(ErrorKind::Empty, 0));
    }
    let mut cursor = Cursor::new(bytes);
    let negative = scan_mantissa_sign(&mut cursor, format)?;
    let digits_start = cursor.index;
    let separator = format.digit_separator();
    let (mut digits, count) =
        scan_digits(&mut cursor, radix, separator, SeparatorRules::integer(format));
    if count == 0 {
        return Err(Error::new(ErrorKind::EmptyMantissa, digits_start));
    }
    let mut consumed = cursor.index;
    if format.no_integer_leading_zeros()
        && count > 1
        && first_digit(digits, separator) == Some(b'0')
    {
        let zero_at = digits_start + first_digit_offset(digits, separator).unwrap_or(0);
        if !partial {
            return Err(Error::new(ErrorKind::InvalidLeadingZeros, zero_at));
        }
        // The longest valid prefix ends at the lone zero.
        digits = &bytes[digits_start..zero_at + 1];
        consumed = zero_at + 1;
    }
    Ok(RawInteger { negative, digits, digits_start, consumed })
}

/// Scans a float per the format's rules.
///
/// `nan`, `infinity` and `inf` are the special spellings to recognize; the
/// longer infinity spelling is tried first so the match consuming more input
/// wins.
#[allow(clippy::too_many_arguments)]
pub(crate) fn scan_float<'a>(
    bytes: &'a [u8],
    radix: u32,
    exponent_char: u8,
    format: NumberFormat,
    nan: &[u8],
    infinity: &[u8],
    inf: &[u8],
    partial: bool,
) -> Result<FloatScan<'a>> {
    if bytes.is_empty() {
        return Err(Error::new(ErrorKind::Empty, 0));
    }
    let mut cursor = Cursor::new(bytes);
    let negative = scan_mantissa_sign(&mut cursor, format)?;
    let mantissa_start = cursor.index;
    let separator = format.digit_separator();

    if !format.no_special() {
        let case_sensitive = format.case_sensitive_special();
        let special_sep = if format.special_digit_separator() { separator } else { 0 };
        let rest = &bytes[mantissa_start..];
        if let Some(len) = match_special(rest, nan, case_sensitive, special_sep) {
            return Ok(FloatScan::Nan { negative, consumed: mantissa_start + len });
        }
        if let Some(len) = match_special(rest, infinity, case_sensitive, special_sep) {
            return Ok(FloatScan::Infinite { negative, consumed: mantissa_start + len });
        }
        if let Some(len) = match_special(rest, inf, case_sensitive, special_sep) {
            return Ok(FloatScan::Infinite { negative, consumed: mantissa_start + len });
        }
    }

    let (integer, integer_count) =
        scan_digits(&mut cursor, radix, separator, SeparatorRules::integer(format));
    if format.no_float_leading_zeros()
        && integer_count > 1
        && first_digit(integer, separator) == Some(b'0')
    {
        let zero_at = mantissa_start + first_digit_offset(integer, separator).unwrap_or(0);
        if !partial {
            return Err(Error::new(ErrorKind::InvalidLeadingZeros, zero_at));
        }
        return Ok(FloatScan::Finite(RawFloat {
            negative,
            integer: &bytes[mantissa_start..zero_at + 1],
            fraction: &[],
            exponent: 0,
            consumed: zero_at + 1,
        }));
    }

    let mut fraction: &[u8] = &[];
    let mut fraction_count = 0usize;
    let mut has_point = false;
    if cursor.peek() == Some(b'.') {
        let point_index = cursor.index;
        cursor.bump();
        let scanned =
            scan_digits(&mut cursor, radix, separator, SeparatorRules::fraction(format));
        fraction = scanned.0;
        fraction_count = scanned.1;
        has_point = true;
        if fraction_count == 0 && format.required_fraction_digits() {
            if !partial || integer_count == 0 {
                return Err(Error::new(ErrorKind::EmptyFraction, point_index + 1));
            }
            // Longest valid prefix ends before the point.
            cursor.index = point_index;
            fraction = &[];
            has_point = false;
        }
    }

    if integer_count == 0 && fraction_count == 0 {
        return Err(Error::new(ErrorKind::EmptyMantissa, mantissa_start));
    }
    if integer_count == 0 && format.required_integer_digits() {
        return Err(Error::new(ErrorKind::EmptyInteger, mantissa_start));
    }

    let mut exponent = 0i32;
    if cursor
        .peek()
        .is_some_and(|b| b.eq_ignore_ascii_case(&exponent_char))
    {
        let exponent_index = cursor.index;
        let backtrack = |cursor: &mut Cursor<'_>| {
            cursor.index = exponent_index;
        };
        if format.no_exponent_notation() {
            if !partial {
                return Err(Error::new(ErrorKind::InvalidExponent, exponent_index));
            }
            backtrack(&mut cursor);
        } else if !has_point && format.no_exponent_without_fraction() {
            if !partial {
                return Err(Error::new(ErrorKind::ExponentWithoutFraction, exponent_index));
            }
            backtrack(&mut cursor);
        } else {
            cursor.bump();
            let mut failed = None;
            let exponent_negative = match cursor.peek() {
                Some(b'+') => {
                    if format.no_positive_exponent_sign() {
                        failed =
                            Some(Error::new(ErrorKind::InvalidPositiveExponentSign, cursor.index));
                    } else {
                        cursor.bump();
                    }
                    false
                }
                Some(b'-') => {
                    cursor.bump();
                    true
                }
                _ => {
                    if format.required_exponent_sign() {
                        failed = Some(Error::new(ErrorKind::MissingExponentSign, cursor.index));
                    }
                    false
                }
            };
            if let Some(error) = failed {
                if !partial {
                    return Err(error);
                }
                backtrack(&mut cursor);
            } else {
                // Exponent digits are always decimal, whatever the mantissa
                // radix.
                let (exponent_digits, exponent_count) =
                    scan_digits(&mut cursor, 10, separator, SeparatorRules::exponent(format));
                if exponent_count == 0 && format.required_exponent_digits() {
                    if !partial {
                        return Err(Error::new(ErrorKind::EmptyExponent, cursor.index));
                    }
                    backtrack(&mut cursor);
                } else {
                    exponent =
                        accumulate_exponent(exponent_digits, separator, exponent_negative);
                }
            }
        }
    }

    Ok(FloatScan::Finite(RawFloat {
        negative,
        integer,
        fraction,
        exponent,
        consumed: cursor.index,
    }))
}

/// Accumulates decimal exponent digits, saturating far past any exponent a
/// binary float can absorb.
fn accumulate_exponent(digits: &[u8], separator: u8, negative: bool) -> i32 {
    const SATURATION: i64 = 0x1000_0000;
    let mut value = 0i64;
    for &byte in digits {
        if separator != 0 && byte == separator {
            continue;
        }
        let digit = digit_value(byte, 10).unwrap_or(0) as i64;
        value = (value * 10 + digit).min(SATURATION);
    }
    if negative {
        value = -value;
    }
    value as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAN: &[u8] = b"NaN";
    const INF: &[u8] = b"inf";
    const INFINITY: &[u8] = b"infinity";

    fn float(bytes: &[u8], format: NumberFormat, partial: bool) -> Result<FloatScan<'_>> {
        scan_float(bytes, 10, b'e', format, NAN, INFINITY, INF, partial)
    }

    fn finite(bytes: &[u8], format: NumberFormat) -> RawFloat<'_> {
        match float(bytes, format, false).unwrap() {
            FloatScan::Finite(raw) => raw,
            other => panic!("expected finite scan, got {other:?}"),
        }
    }

    #[test]
    fn scans_plain_float() {
        let raw = finite(b"-12.34e-5", NumberFormat::PERMISSIVE);
        assert!(raw.negative);
        assert_eq!(raw.integer, b"12");
        assert_eq!(raw.fraction, b"34");
        assert_eq!(raw.exponent, -5);
        assert_eq!(raw.consumed, 9);
    }

    #[test]
    fn empty_input_errors_at_zero() {
        let err = float(b"", NumberFormat::PERMISSIVE, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Empty);
        assert_eq!(err.index(), 0);
        let err = scan_integer(b"", 10, NumberFormat::PERMISSIVE, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Empty);
    }

    #[test]
    fn mantissa_sign_rules() {
        let format = NumberFormat::JSON;
        let err = float(b"+1", format, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPositiveMantissaSign);
        assert_eq!(err.index(), 0);

        let format = NumberFormat::builder().required_mantissa_sign(true).build().unwrap();
        let err = float(b"1", format, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingMantissaSign);
    }

    #[test]
    fn empty_mantissa() {
        let err = float(b".", NumberFormat::PERMISSIVE, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyMantissa);
        assert_eq!(err.index(), 0);
        let err = float(b"+e5", NumberFormat::PERMISSIVE, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyMantissa);
        assert_eq!(err.index(), 1);
    }

    #[test]
    fn json_rejects_bare_fraction_and_bare_point() {
        let err = float(b".5", NumberFormat::JSON, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyInteger);
        let err = float(b"1.", NumberFormat::JSON, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyFraction);
        assert_eq!(err.index(), 2);
    }

    #[test]
    fn permissive_accepts_bare_fraction() {
        let raw = finite(b".5", NumberFormat::PERMISSIVE);
        assert_eq!(raw.integer, b"");
        assert_eq!(raw.fraction, b"5");
    }

    #[test]
    fn standard_requires_exponent_digits() {
        let err = float(b"3e", NumberFormat::STANDARD, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyExponent);
        assert_eq!(err.index(), 2);
        // Permissive treats the empty exponent as zero.
        let raw = finite(b"3e", NumberFormat::PERMISSIVE);
        assert_eq!(raw.exponent, 0);
        assert_eq!(raw.consumed, 2);
    }

    #[test]
    fn partial_backtracks_incomplete_exponent() {
        let FloatScan::Finite(raw) = float(b"1.5e", NumberFormat::STANDARD, true).unwrap()
        else {
            panic!("expected finite");
        };
        assert_eq!(raw.consumed, 3);
        assert_eq!(raw.exponent, 0);
        let FloatScan::Finite(raw) = float(b"1.5e+a", NumberFormat::STANDARD, true).unwrap()
        else {
            panic!("expected finite");
        };
        assert_eq!(raw.consumed, 3);
    }

    #[test]
    fn exponent_sign_rules() {
        let format = NumberFormat::builder().no_positive_exponent_sign(true).build().unwrap();
        let err = float(b"1e+5", format, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPositiveExponentSign);
        assert_eq!(err.index(), 2);

        let format = NumberFormat::builder().required_exponent_sign(true).build().unwrap();
        let err = float(b"1e5", format, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingExponentSign);
    }

    #[test]
    fn exponent_structure_rules() {
        let format = NumberFormat::builder().no_exponent_notation(true).build().unwrap();
        let err = float(b"1e5", format, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidExponent);
        assert_eq!(err.index(), 1);

        let format =
            NumberFormat::builder().no_exponent_without_fraction(true).build().unwrap();
        let err = float(b"1e5", format, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExponentWithoutFraction);
        assert!(matches!(
            float(b"1.2e5", format, false).unwrap(),
            FloatScan::Finite(_)
        ));
    }

    #[test]
    fn leading_zero_rules() {
        let format = NumberFormat::builder().no_float_leading_zeros(true).build().unwrap();
        let err = float(b"01.5", format, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLeadingZeros);
        assert_eq!(err.index(), 0);
        assert!(matches!(float(b"0.5", format, false).unwrap(), FloatScan::Finite(_)));

        let format = NumberFormat::builder().no_integer_leading_zeros(true).build().unwrap();
        let err = scan_integer(b"007", 10, format, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLeadingZeros);
        // Partial keeps the lone zero.
        let raw = scan_integer(b"007", 10, format, true).unwrap();
        assert_eq!(raw.digits, b"0");
        assert_eq!(raw.consumed, 1);
    }

    #[test]
    fn specials_match_longest_first() {
        match float(b"infinity", NumberFormat::PERMISSIVE, false).unwrap() {
            FloatScan::Infinite { negative, consumed } => {
                assert!(!negative);
                assert_eq!(consumed, 8);
            }
            other => panic!("unexpected {other:?}"),
        }
        match float(b"-Inf", NumberFormat::PERMISSIVE, true).unwrap() {
            FloatScan::Infinite { negative, consumed } => {
                assert!(negative);
                assert_eq!(consumed, 4);
            }
            other => panic!("unexpected {other:?}"),
        }
        match float(b"nan", NumberFormat::PERMISSIVE, false).unwrap() {
            FloatScan::Nan { consumed, .. } => assert_eq!(consumed, 3),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn case_sensitive_specials() {
        let format = NumberFormat::builder().case_sensitive_special(true).build().unwrap();
        assert!(matches!(
            float(b"NaN", format, false).unwrap(),
            FloatScan::Nan { .. }
        ));
        let err = float(b"nan", format, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyMantissa);
    }

    #[test]
    fn no_special_disables_matching() {
        let err = float(b"NaN", NumberFormat::JSON, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyMantissa);
    }

    #[test]
    fn separators_in_specials() {
        let format = NumberFormat::builder()
            .digit_separator(b'_')
            .special_digit_separator(true)
            .build()
            .unwrap();
        match float(b"i_n_f", format, false).unwrap() {
            FloatScan::Infinite { consumed, .. } => assert_eq!(consumed, 5),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn internal_separators() {
        let format = NumberFormat::builder()
            .digit_separator(b'_')
            .integer_internal_digit_separator(true)
            .build()
            .unwrap();
        let raw = finite(b"1_000", format);
        assert_eq!(raw.integer, b"1_000");
        assert_eq!(raw.consumed, 5);
        // A trailing separator is not internal.
        let FloatScan::Finite(raw) = float(b"1_000_", format, true).unwrap() else {
            panic!("expected finite");
        };
        assert_eq!(raw.consumed, 5);
        // Consecutive runs need their own flag.
        let FloatScan::Finite(raw) = float(b"1__0", format, true).unwrap() else {
            panic!("expected finite");
        };
        assert_eq!(raw.consumed, 1);
    }

    #[test]
    fn leading_and_trailing_separators() {
        let format = NumberFormat::builder()
            .digit_separator(b'_')
            .integer_leading_digit_separator(true)
            .integer_trailing_digit_separator(true)
            .build()
            .unwrap();
        let raw = finite(b"_1", format);
        assert_eq!(raw.integer, b"_1");
        let raw = finite(b"1_", format);
        assert_eq!(raw.integer, b"1_");
    }

    #[test]
    fn disallowed_separator_ends_token() {
        let format = NumberFormat::PERMISSIVE;
        let FloatScan::Finite(raw) = float(b"1_0", format, true).unwrap() else {
            panic!("expected finite");
        };
        assert_eq!(raw.consumed, 1);
    }

    #[test]
    fn ignore_skips_separators_everywhere() {
        let format = NumberFormat::ignore(b'_').unwrap();
        let raw = finite(b"_1_2_.3_4_e5_6_", format);
        assert_eq!(raw.exponent, 56);
        assert_eq!(raw.consumed, 15);
    }

    #[test]
    fn integer_scan_reports_consumed() {
        let raw = scan_integer(b"10a", 10, NumberFormat::PERMISSIVE, true).unwrap();
        assert_eq!(raw.digits, b"10");
        assert_eq!(raw.consumed, 2);
        assert!(!raw.negative);
        let raw = scan_integer(b"-42", 10, NumberFormat::PERMISSIVE, false).unwrap();
        assert!(raw.negative);
        assert_eq!(raw.consumed, 3);
    }

    #[test]
    fn exponent_saturation() {
        let raw = finite(b"1e99999999999999999999", NumberFormat::PERMISSIVE);
        assert_eq!(raw.exponent, 0x1000_0000);
        let raw = finite(b"1e-99999999999999999999", NumberFormat::PERMISSIVE);
        assert_eq!(raw.exponent, -0x1000_0000);
    }
}
