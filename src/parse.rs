//! Conversion of scanned components into numeric values.
//!
//! Integer conversion is exact: checked accumulation in the target type, with
//! the overflowing digit's position reported on failure.
//!
//! Float conversion picks one of three strategies:
//!
//! - a **fast path** when the digits fit the mantissa exactly and the scale
//!   is an exactly-representable power of ten: a single correctly-rounded
//!   multiply or divide (only taken under nearest-tie-even, where one IEEE
//!   operation is guaranteed correct);
//! - a **slow path** that scales the full digit string as an arbitrary-
//!   precision ratio and rounds the quotient explicitly, which is correct
//!   for every radix and every [`RoundingKind`], including subnormals and
//!   per-mode overflow saturation;
//! - a **lossy path** that multiplies the (possibly truncated) mantissa by a
//!   floating-point power, trading last-bit accuracy for never touching big
//!   integers.

use std::sync::OnceLock;

use num_bigint::BigUint;

use crate::error::{Error, ErrorKind, PartialResult, Result};
use crate::num::{Float, FromText, Integer};
use crate::options::{ParseFloatOptions, ParseIntegerOptions, RoundingKind};
use crate::scan::{self, FloatScan, RawFloat, RawInteger};

/// Shared default float options, so option-free parses skip rebuilding the
/// owned special-value spellings on every call.
fn default_float_options() -> &'static ParseFloatOptions {
    static DEFAULT: OnceLock<ParseFloatOptions> = OnceLock::new();
    DEFAULT.get_or_init(ParseFloatOptions::default)
}

// INTEGERS

/// Accumulates a scanned digit run into `T` with checked arithmetic.
///
/// Negative values accumulate downward so the type minimum parses without a
/// final negation.
fn accumulate_integer<T: Integer>(raw: &RawInteger<'_>, radix: u32, separator: u8) -> Result<T> {
    let mut value = T::zero();
    for (offset, &byte) in raw.digits.iter().enumerate() {
        if separator != 0 && byte == separator {
            continue;
        }
        let digit = scan::digit_value(byte, radix).unwrap_or(0);
        let next = value.checked_mul_radix(radix).and_then(|scaled| {
            if raw.negative {
                scaled.checked_sub_digit(digit)
            } else {
                scaled.checked_add_digit(digit)
            }
        });
        let kind = if raw.negative { ErrorKind::Underflow } else { ErrorKind::Overflow };
        value = next.ok_or(Error::new(kind, raw.digits_start + offset))?;
    }
    Ok(value)
}

pub(crate) fn integer_complete<T: Integer>(
    bytes: &[u8],
    options: &ParseIntegerOptions,
) -> Result<T> {
    let raw = scan::scan_integer(bytes, options.radix(), options.format(), false)?;
    if raw.consumed < bytes.len() {
        return Err(Error::new(ErrorKind::InvalidDigit, raw.consumed));
    }
    accumulate_integer(&raw, options.radix(), options.format().digit_separator())
}

pub(crate) fn integer_partial<T: Integer>(
    bytes: &[u8],
    options: &ParseIntegerOptions,
) -> PartialResult<T> {
    let raw = scan::scan_integer(bytes, options.radix(), options.format(), true)?;
    let value = accumulate_integer(&raw, options.radix(), options.format().digit_separator())?;
    Ok((value, raw.consumed))
}

// FLOATS

/// Magnitude-space rounding: the sign is folded in up front so the engine
/// only ever rounds an absolute value.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum MagRound {
    NearestEven,
    NearestAway,
    /// Toward zero.
    Down,
    /// Away from zero.
    Up,
}

fn magnitude_rounding(kind: RoundingKind, negative: bool) -> MagRound {
    match kind {
        RoundingKind::NearestTieEven => MagRound::NearestEven,
        RoundingKind::NearestTieAwayZero => MagRound::NearestAway,
        RoundingKind::TowardZero => MagRound::Down,
        RoundingKind::TowardPositiveInfinity => {
            if negative {
                MagRound::Down
            } else {
                MagRound::Up
            }
        }
        RoundingKind::TowardNegativeInfinity => {
            if negative {
                MagRound::Up
            } else {
                MagRound::Down
            }
        }
    }
}

/// Overflow result for the given rounding: directed modes that cannot cross
/// the finite boundary saturate at the largest finite value.
fn saturate<F: Float>(negative: bool, round: MagRound) -> F {
    let magnitude = match round {
        MagRound::Down => F::max_finite(),
        _ => F::infinity(),
    };
    signed(magnitude, negative)
}

/// Result for a magnitude strictly below half the smallest subnormal.
fn vanish<F: Float>(negative: bool, round: MagRound) -> F {
    let magnitude = match round {
        MagRound::Up => F::min_subnormal(),
        _ => F::zero(),
    };
    signed(magnitude, negative)
}

fn signed<F: Float>(value: F, negative: bool) -> F {
    if negative {
        value.neg_value()
    } else {
        value
    }
}

/// Mantissa digits folded into a `u64`, with any overflow digits counted
/// rather than kept.
struct MantissaDigits {
    mantissa: u64,
    truncated: usize,
    fraction_digits: usize,
    nonzero: bool,
}

fn collect_mantissa(raw: &RawFloat<'_>, radix: u32, separator: u8) -> MantissaDigits {
    let radix64 = radix as u64;
    let mut mantissa = 0u64;
    let mut truncated = 0usize;
    let mut fraction_digits = 0usize;
    let mut nonzero = false;
    let mut fold = |byte: u8, in_fraction: bool| {
        if separator != 0 && byte == separator {
            return;
        }
        if in_fraction {
            fraction_digits += 1;
        }
        let digit = scan::digit_value(byte, radix).unwrap_or(0) as u64;
        nonzero |= digit != 0;
        if mantissa <= (u64::MAX - digit) / radix64 {
            mantissa = mantissa * radix64 + digit;
        } else {
            truncated += 1;
        }
    };
    for &byte in raw.integer {
        fold(byte, false);
    }
    for &byte in raw.fraction {
        fold(byte, true);
    }
    MantissaDigits { mantissa, truncated, fraction_digits, nonzero }
}

/// `base^exp` by squaring.
pub(crate) fn big_pow(base: u32, exp: u64) -> BigUint {
    let mut result = BigUint::from(1u32);
    let mut base = BigUint::from(base);
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            result *= &base;
        }
        base = &base * &base;
        exp >>= 1;
    }
    result
}

/// The full digit string as a big integer in the mantissa radix.
fn collect_big(raw: &RawFloat<'_>, radix: u32, separator: u8) -> BigUint {
    let radix64 = radix as u64;
    let mut big = BigUint::from(0u32);
    let mut chunk = 0u64;
    let mut scale = 1u64;
    let digits = raw
        .integer
        .iter()
        .chain(raw.fraction.iter())
        .copied()
        .filter(|&byte| separator == 0 || byte != separator);
    for byte in digits {
        let digit = scan::digit_value(byte, radix).unwrap_or(0) as u64;
        if scale > u64::MAX / radix64 {
            big = big * scale + chunk;
            chunk = 0;
            scale = 1;
        }
        chunk = chunk * radix64 + digit;
        scale *= radix64;
    }
    if scale > 1 {
        big = big * scale + chunk;
    }
    big
}

/// Correctly rounds `numerator / denominator` (a positive rational) into `F`
/// under the given magnitude rounding.
fn round_ratio<F: Float>(
    numerator: BigUint,
    denominator: BigUint,
    negative: bool,
    round: MagRound,
) -> F {
    let precision = F::MANTISSA_BITS as i64 + 1;
    let estimate = numerator.bits() as i64 - denominator.bits() as i64;
    // Scale so the quotient lands with two bits beyond the target precision;
    // the estimate is off by at most one either way.
    let shift = precision + 2 - estimate;
    let (numerator, denominator) = if shift >= 0 {
        (numerator << shift as u64, denominator)
    } else {
        (numerator, denominator << (-shift) as u64)
    };
    let quotient = &numerator / &denominator;
    let remainder = numerator - &quotient * &denominator;
    let sticky = remainder.bits() != 0;
    // The quotient carries at most precision + 3 bits.
    let quotient = u64::try_from(&quotient).unwrap_or(u64::MAX);
    let qbits = 64 - i64::from(quotient.leading_zeros());
    let value_exp = qbits - 1 - shift;

    // Effective precision shrinks below the normal range.
    let keep = if value_exp < F::MIN_EXPONENT as i64 {
        precision - (F::MIN_EXPONENT as i64 - value_exp)
    } else {
        precision
    };
    if keep < 0 {
        return vanish(negative, round);
    }

    let drop = (qbits - keep) as u32;
    let low = quotient & ((1u64 << drop) - 1);
    let half = 1u64 << (drop - 1);
    let mut mantissa = quotient >> drop;
    let round_up = match round {
        MagRound::Down => false,
        MagRound::Up => low != 0 || sticky,
        MagRound::NearestEven => low > half || (low == half && (sticky || mantissa & 1 == 1)),
        MagRound::NearestAway => low >= half,
    };
    if round_up {
        mantissa += 1;
    }

    if keep < precision {
        // Subnormal, unless the round-up carried into the smallest normal.
        if mantissa >> F::MANTISSA_BITS != 0 {
            return signed(F::pack(false, mantissa, 1), negative);
        }
        return signed(F::pack(false, mantissa, 0), negative);
    }
    let mut exponent = value_exp;
    if mantissa >> precision != 0 {
        mantissa >>= 1;
        exponent += 1;
    }
    if exponent > F::MAX_EXPONENT as i64 {
        return saturate(negative, round);
    }
    signed(
        F::pack(false, mantissa, exponent as i32 + F::EXPONENT_BIAS),
        negative,
    )
}

/// Slow path: exact scaling of the full digit string, correct under every
/// rounding mode.
fn slow_path<F: Float>(
    raw: &RawFloat<'_>,
    radix: u32,
    separator: u8,
    fraction_digits: usize,
    round: MagRound,
) -> F {
    let big = collect_big(raw, radix, separator);
    let scale = i64::from(raw.exponent) - fraction_digits as i64;
    let log2_radix = f64::from(radix).log2();
    let approx_log2 = big.bits() as f64 + scale as f64 * log2_radix;
    // Clamp far outside the representable range before building enormous
    // powers; margins absorb the estimate error.
    if approx_log2 > (F::MAX_EXPONENT + 8) as f64 {
        return saturate(raw.negative, round);
    }
    if approx_log2 < (F::MIN_EXPONENT - F::MANTISSA_BITS as i32 - 8) as f64 {
        return vanish(raw.negative, round);
    }
    let (numerator, denominator) = if scale >= 0 {
        (big * big_pow(radix, scale as u64), BigUint::from(1u32))
    } else {
        (big, big_pow(radix, scale.unsigned_abs()))
    };
    round_ratio(numerator, denominator, raw.negative, round)
}

/// Lossy path: mantissa times a floating-point power of the radix.
fn lossy_path<F: Float>(raw: &RawFloat<'_>, radix: u32, digits: &MantissaDigits) -> F {
    let scale = i64::from(raw.exponent) - digits.fraction_digits as i64
        + digits.truncated as i64;
    let scale = scale.clamp(-100_000, 100_000) as i32;
    let value = digits.mantissa as f64 * f64::from(radix).powi(scale);
    signed(F::from_f64_value(value), raw.negative)
}

fn convert_finite<F: Float>(raw: &RawFloat<'_>, options: &ParseFloatOptions) -> F {
    let radix = options.radix();
    let separator = options.format().digit_separator();
    let digits = collect_mantissa(raw, radix, separator);
    if !digits.nonzero {
        return signed(F::zero(), raw.negative);
    }
    let round = magnitude_rounding(options.rounding(), raw.negative);

    // Fast path: one correctly-rounded IEEE operation. Only sound under
    // nearest-tie-even, the mode the hardware rounds in.
    if round == MagRound::NearestEven
        && radix == 10
        && digits.truncated == 0
        && digits.mantissa <= F::MAX_EXACT_MANTISSA
    {
        let scale = i64::from(raw.exponent) - digits.fraction_digits as i64;
        if scale.unsigned_abs() <= F::MAX_EXACT_POW10 as u64 {
            let mantissa = F::from_mantissa(digits.mantissa);
            let power = F::pow10_exact(scale.unsigned_abs() as i32);
            let value = if scale < 0 {
                mantissa.div_value(power)
            } else {
                mantissa.mul_value(power)
            };
            return signed(value, raw.negative);
        }
    }

    if options.lossy() {
        return lossy_path(raw, radix, &digits);
    }
    slow_path(raw, radix, separator, digits.fraction_digits, round)
}

pub(crate) fn float_complete<F: Float>(bytes: &[u8], options: &ParseFloatOptions) -> Result<F> {
    let scanned = scan::scan_float(
        bytes,
        options.radix(),
        options.exponent_char(),
        options.format(),
        options.nan_string(),
        options.infinity_string(),
        options.inf_string(),
        false,
    )?;
    let (value, consumed) = resolve_scan(scanned, options);
    if consumed < bytes.len() {
        return Err(Error::new(ErrorKind::InvalidDigit, consumed));
    }
    Ok(value)
}

pub(crate) fn float_partial<F: Float>(
    bytes: &[u8],
    options: &ParseFloatOptions,
) -> PartialResult<F> {
    let scanned = scan::scan_float(
        bytes,
        options.radix(),
        options.exponent_char(),
        options.format(),
        options.nan_string(),
        options.infinity_string(),
        options.inf_string(),
        true,
    )?;
    Ok(resolve_scan(scanned, options))
}

fn resolve_scan<F: Float>(scanned: FloatScan<'_>, options: &ParseFloatOptions) -> (F, usize) {
    match scanned {
        FloatScan::Nan { negative, consumed } => (signed(F::nan(), negative), consumed),
        FloatScan::Infinite { negative, consumed } => {
            (signed(F::infinity(), negative), consumed)
        }
        FloatScan::Finite(raw) => {
            let value = convert_finite(&raw, options);
            (value, raw.consumed)
        }
    }
}

// TRAIT IMPLS

macro_rules! from_text_integer {
    ($($t:ty,)*) => {$(
        impl FromText for $t {
            type Options = ParseIntegerOptions;

            #[inline]
            fn from_text(bytes: &[u8]) -> Result<Self> {
                integer_complete(bytes, &ParseIntegerOptions::decimal())
            }

            #[inline]
            fn from_text_partial(bytes: &[u8]) -> PartialResult<Self> {
                integer_partial(bytes, &ParseIntegerOptions::decimal())
            }

            #[inline]
            fn from_text_with_options(
                bytes: &[u8],
                options: &Self::Options,
            ) -> Result<Self> {
                integer_complete(bytes, options)
            }

            #[inline]
            fn from_text_partial_with_options(
                bytes: &[u8],
                options: &Self::Options,
            ) -> PartialResult<Self> {
                integer_partial(bytes, options)
            }
        }
    )*};
}

from_text_integer! {
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
}

macro_rules! from_text_float {
    ($($t:ty,)*) => {$(
        impl FromText for $t {
            type Options = ParseFloatOptions;

            #[inline]
            fn from_text(bytes: &[u8]) -> Result<Self> {
                float_complete(bytes, default_float_options())
            }

            #[inline]
            fn from_text_partial(bytes: &[u8]) -> PartialResult<Self> {
                float_partial(bytes, default_float_options())
            }

            #[inline]
            fn from_text_with_options(
                bytes: &[u8],
                options: &Self::Options,
            ) -> Result<Self> {
                float_complete(bytes, options)
            }

            #[inline]
            fn from_text_partial_with_options(
                bytes: &[u8],
                options: &Self::Options,
            ) -> PartialResult<Self> {
                float_partial(bytes, options)
            }
        }
    )*};
}

from_text_float! {
    f32,
    f64,
}
