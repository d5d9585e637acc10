//! Formatting of numeric values into caller-supplied buffers.
//!
//! Integer writing is a plain digit loop over the magnitude, for any radix in
//! 2..=36, with digits above 9 written uppercase.
//!
//! Float writing has two paths:
//!
//! - **radix 10** reuses the standard library's shortest round-trip digit
//!   generation and reformats it into this crate's conventions: positional
//!   form for moderate exponents, scientific form (with the configured
//!   exponent character) beyond, a `.0` suffix on integral values unless
//!   `trim_floats` is set;
//! - **other radixes** generate exact digits from the binary representation
//!   through arbitrary-precision scaling, rounded at the radix's round-trip
//!   digit count.
//!
//! Every writer indexes directly into the destination buffer, so a buffer
//! smaller than the published `FORMATTED_SIZE` constants panics rather than
//! overruns.

use std::fmt::{self, Write as _};
use std::sync::OnceLock;

use num_bigint::BigUint;

use crate::num::{Float, Integer, ToText};
use crate::options::{WriteFloatOptions, WriteIntegerOptions};
use crate::parse::big_pow;

/// Shared default float options, so option-free writes skip rebuilding the
/// owned special-value spellings on every call.
fn default_float_options() -> &'static WriteFloatOptions {
    static DEFAULT: OnceLock<WriteFloatOptions> = OnceLock::new();
    DEFAULT.get_or_init(WriteFloatOptions::default)
}

const DIGIT_TABLE: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Append-only view over the destination buffer.
struct Sink<'a> {
    buffer: &'a mut [u8],
    len: usize,
}

impl<'a> Sink<'a> {
    fn new(buffer: &'a mut [u8]) -> Self {
        Sink { buffer, len: 0 }
    }

    #[inline]
    fn push(&mut self, byte: u8) {
        self.buffer[self.len] = byte;
        self.len += 1;
    }

    fn extend(&mut self, bytes: &[u8]) {
        self.buffer[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
    }

    fn finish(self) -> &'a mut [u8] {
        &mut self.buffer[..self.len]
    }
}

// INTEGERS

pub(crate) fn write_integer<T: Integer>(value: T, radix: u32, buffer: &mut [u8]) -> &mut [u8] {
    let mut digits = [0u8; 128];
    let mut position = digits.len();
    let radix = radix as u128;
    let mut magnitude = value.magnitude();
    loop {
        position -= 1;
        digits[position] = DIGIT_TABLE[(magnitude % radix) as usize];
        magnitude /= radix;
        if magnitude == 0 {
            break;
        }
    }
    let mut sink = Sink::new(buffer);
    if value.is_negative_value() {
        sink.push(b'-');
    }
    sink.extend(&digits[position..]);
    sink.finish()
}

pub(crate) fn write_integer_with_options<'a, T: Integer>(
    value: T,
    options: &WriteIntegerOptions,
    buffer: &'a mut [u8],
) -> &'a mut [u8] {
    write_integer(value, options.radix(), buffer)
}

// FLOATS

/// Fixed-capacity collector for the standard library's `{:e}` output.
struct ShortestBuffer {
    bytes: [u8; 64],
    len: usize,
}

impl ShortestBuffer {
    fn new() -> Self {
        ShortestBuffer { bytes: [0; 64], len: 0 }
    }

    fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl fmt::Write for ShortestBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        if self.len + bytes.len() > self.bytes.len() {
            return Err(fmt::Error);
        }
        self.bytes[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
        Ok(())
    }
}

/// Significant digits plus the scale of the leading digit: the first digit
/// has weight `radix^k`.
struct Digits {
    digits: Vec<u8>,
    k: i32,
}

/// Decimal digits via the standard library's shortest round-trip form.
///
/// `{:e}` always prints `d[.ddd]e[-]k`; reparsing it is simpler and cheaper
/// than regenerating digits from the bits.
fn decimal_digits<F: Float>(value: F) -> Digits {
    let mut shortest = ShortestBuffer::new();
    write!(shortest, "{value:e}").expect("shortest float form fits in 64 bytes");
    let mut bytes = shortest.as_bytes();
    if bytes.first() == Some(&b'-') {
        bytes = &bytes[1..];
    }
    let e_at = bytes
        .iter()
        .position(|&b| b == b'e')
        .expect("{:e} output always contains an exponent");
    let mut digits = Vec::with_capacity(e_at);
    for &byte in &bytes[..e_at] {
        if byte != b'.' {
            digits.push(byte);
        }
    }
    let mut k = 0i32;
    let mut exp_negative = false;
    for &byte in &bytes[e_at + 1..] {
        match byte {
            b'-' => exp_negative = true,
            _ => k = k * 10 + i32::from(byte - b'0'),
        }
    }
    if exp_negative {
        k = -k;
    }
    while digits.len() > 1 && digits.last() == Some(&b'0') {
        digits.pop();
    }
    Digits { digits, k }
}

/// Exact digits at an arbitrary radix, rounded at the radix's round-trip
/// digit count.
fn radix_digits<F: Float>(value: F, radix: u32) -> Digits {
    let precision = F::MANTISSA_BITS as i64 + 1;
    let log2_radix = f64::from(radix).log2();
    let target = (precision as f64 / log2_radix).ceil() as u32 + 1;
    let (mantissa, exponent) = value.decompose();
    let log2_value = 64 - i64::from(mantissa.leading_zeros()) + i64::from(exponent) - 1;
    let mut k = (log2_value as f64 / log2_radix).floor() as i64;

    // Round value / radix^(k - target + 1) to an integer with `target`
    // digits; the leading-digit estimate can be off by one in either
    // direction.
    loop {
        let shift = k - i64::from(target) + 1;
        let mut numerator = BigUint::from(mantissa);
        let mut denominator = BigUint::from(1u32);
        if exponent >= 0 {
            numerator <<= exponent as u64;
        } else {
            denominator <<= exponent.unsigned_abs() as u64;
        }
        if shift >= 0 {
            denominator *= big_pow(radix, shift as u64);
        } else {
            numerator *= big_pow(radix, shift.unsigned_abs());
        }
        // Round half away from zero.
        let quotient = (numerator * 2u32 + &denominator) / (denominator * 2u32);
        if quotient >= big_pow(radix, u64::from(target)) {
            k += 1;
            continue;
        }
        if quotient < big_pow(radix, u64::from(target) - 1) {
            k -= 1;
            continue;
        }
        let mut digits = quotient.to_str_radix(radix).into_bytes();
        for byte in &mut digits {
            byte.make_ascii_uppercase();
        }
        while digits.len() > 1 && digits.last() == Some(&b'0') {
            digits.pop();
        }
        return Digits { digits, k: k as i32 };
    }
}

/// Emits digits in positional or scientific form.
fn emit_digits(
    sink: &mut Sink<'_>,
    parts: &Digits,
    positional_cutoff: i32,
    exponent_char: u8,
    trim: bool,
) {
    let digits = &parts.digits;
    let k = parts.k;
    if (-4..positional_cutoff).contains(&k) {
        if k >= 0 {
            let integer_len = (k + 1) as usize;
            if digits.len() > integer_len {
                sink.extend(&digits[..integer_len]);
                sink.push(b'.');
                sink.extend(&digits[integer_len..]);
            } else {
                sink.extend(digits);
                for _ in digits.len()..integer_len {
                    sink.push(b'0');
                }
                if !trim {
                    sink.extend(b".0");
                }
            }
        } else {
            sink.extend(b"0.");
            for _ in 0..(-k - 1) {
                sink.push(b'0');
            }
            sink.extend(digits);
        }
    } else {
        sink.push(digits[0]);
        if digits.len() > 1 {
            sink.push(b'.');
            sink.extend(&digits[1..]);
        }
        sink.push(exponent_char);
        let exponent = if k < 0 {
            sink.push(b'-');
            k.unsigned_abs()
        } else {
            k.unsigned_abs()
        };
        let mut scratch = [0u8; 16];
        let written = write_integer(exponent, 10, &mut scratch).len();
        sink.extend(&scratch[..written]);
    }
}

pub(crate) fn write_float<'a, F: Float>(
    value: F,
    options: &WriteFloatOptions,
    buffer: &'a mut [u8],
) -> &'a mut [u8] {
    let mut sink = Sink::new(buffer);
    if value.is_nan_value() {
        sink.extend(options.nan_string());
        return sink.finish();
    }
    if value.is_sign_negative_value() {
        sink.push(b'-');
    }
    if value.is_infinite_value() {
        sink.extend(options.inf_string());
        return sink.finish();
    }
    if value.to_f64_value() == 0.0 {
        sink.push(b'0');
        if !options.trim_floats() {
            sink.extend(b".0");
        }
        return sink.finish();
    }
    let radix = options.radix();
    let parts = if radix == 10 {
        decimal_digits(value)
    } else {
        radix_digits(value, radix)
    };
    let positional_cutoff = if radix == 10 {
        F::DECIMAL_DIGITS as i32 - 1
    } else {
        let log2_radix = f64::from(radix).log2();
        ((F::MANTISSA_BITS as f64 + 1.0) / log2_radix).ceil() as i32 + 1
    };
    emit_digits(
        &mut sink,
        &parts,
        positional_cutoff,
        options.exponent_char(),
        options.trim_floats(),
    );
    sink.finish()
}

// TRAIT IMPLS

macro_rules! to_text_integer {
    ($($t:ty,)*) => {$(
        impl ToText for $t {
            type Options = WriteIntegerOptions;

            #[inline]
            fn to_text(self, buffer: &mut [u8]) -> &mut [u8] {
                write_integer(self, 10, buffer)
            }

            #[inline]
            fn to_text_with_options<'a>(
                self,
                options: &Self::Options,
                buffer: &'a mut [u8],
            ) -> &'a mut [u8] {
                write_integer_with_options(self, options, buffer)
            }
        }
    )*};
}

to_text_integer! {
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

macro_rules! to_text_float {
    ($($t:ty,)*) => {$(
        impl ToText for $t {
            type Options = WriteFloatOptions;

            #[inline]
            fn to_text(self, buffer: &mut [u8]) -> &mut [u8] {
                write_float(self, default_float_options(), buffer)
            }

            #[inline]
            fn to_text_with_options<'a>(
                self,
                options: &Self::Options,
                buffer: &'a mut [u8],
            ) -> &'a mut [u8] {
                write_float(self, options, buffer)
            }
        }
    )*};
}

to_text_float! {
    f32,
    f64,
}
