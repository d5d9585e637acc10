//! # numform
//!
//! Configurable conversion between text and numeric values under precisely
//! parameterized lexical grammars.
//!
//! ## What is numform?
//!
//! Every language and data format draws the boundaries of a "number" a
//! little differently: JSON forbids `.5` and `+1`, Rust literals accept
//! `1_000`, C++ uses `'` as a digit separator, Erlang insists on digits on
//! both sides of the decimal point. numform encodes those rules as a single
//! packed [`NumberFormat`] value, ships presets for dozens of grammars, and
//! parses or writes any primitive numeric type under the grammar you pick.
//!
//! ## Key Features
//!
//! - **Grammar presets**: `NumberFormat::JSON`, `NumberFormat::RUST_LITERAL`,
//!   `NumberFormat::TOML`, and many more, each matching the published
//!   numeric-literal syntax of its source
//! - **Custom grammars**: a validating builder over ~26 independent rules,
//!   including per-segment digit separator placement
//! - **Precise errors**: every failure is an [`Error`] carrying a kind from a
//!   closed taxonomy and the exact byte offset of the violation
//! - **Partial parsing**: stop at the first unrecognized byte and report how
//!   much input was consumed, instead of demanding a full match
//! - **Radix 2–36**: integers and floats, with correctly rounded float
//!   conversion under five rounding modes
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! numform = "0.1"
//! ```
//!
//! ### Basic parsing and writing
//!
//! ```rust
//! use numform::{parse, parse_partial, to_string};
//!
//! let x: i32 = parse(b"42").unwrap();
//! assert_eq!(x, 42);
//!
//! let f: f64 = parse(b"1.5e10").unwrap();
//! assert_eq!(f, 1.5e10);
//!
//! // Partial parses report the bytes consumed; trailing input is fine.
//! assert_eq!(parse_partial::<i32>(b"10a"), Ok((10, 2)));
//!
//! assert_eq!(to_string(3.0f64), "3.0");
//! assert_eq!(to_string(42u8), "42");
//! ```
//!
//! ### Grammar-checked parsing
//!
//! ```rust
//! use numform::{parse_with_options, NumberFormat, ParseFloatOptions};
//!
//! let json = ParseFloatOptions::builder()
//!     .format(NumberFormat::JSON)
//!     .build()
//!     .unwrap();
//!
//! // JSON requires a digit before the decimal point.
//! assert!(parse_with_options::<f64>(b".5", &json).is_err());
//! assert_eq!(parse_with_options::<f64>(b"1.5e10", &json), Ok(1.5e10));
//!
//! // The permissive default accepts it.
//! assert_eq!(numform::parse::<f64>(b".5"), Ok(0.5));
//! ```
//!
//! ### Buffer-based writing
//!
//! ```rust
//! use numform::{write_with_options, Number, WriteFloatOptions, WriteIntegerOptions};
//!
//! let mut buffer = [0u8; f64::FORMATTED_SIZE];
//! let hex = WriteFloatOptions::hexadecimal();
//! assert_eq!(write_with_options(10.5f64, &hex, &mut buffer), b"A.8");
//!
//! let mut buffer = [0u8; u32::FORMATTED_SIZE];
//! let binary = WriteIntegerOptions::binary();
//! assert_eq!(write_with_options(10u32, &binary, &mut buffer), b"1010");
//! ```
//!
//! ### Locating errors
//!
//! ```rust
//! use numform::{parse, ErrorKind};
//!
//! let err = parse::<u64>(b"10a").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidDigit);
//! assert_eq!(err.index(), 2);
//!
//! let err = parse::<f32>(b"").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Empty);
//! assert_eq!(err.index(), 0);
//! ```
//!
//! ## Buffer Contracts
//!
//! The buffer-based writers never allocate and never overrun: callers supply
//! a destination of at least [`Number::FORMATTED_SIZE_DECIMAL`] bytes (radix
//! 10) or [`Number::FORMATTED_SIZE`] bytes (any radix) for the type being
//! written. An undersized buffer is a caller defect and panics. A
//! [`BUFFER_SIZE`] array is large enough for every type at every radix.
//!
//! ## Concurrency
//!
//! Everything here is synchronous and stateless across calls. Formats and
//! options are immutable once built and safe to share between threads;
//! builders are single-owner values. Parse and write operations are pure
//! functions of their inputs, with no side effects beyond the caller's
//! output buffer.
//!
//! ## Examples
//!
//! See the `demos/` directory for runnable examples:
//!
//! - **`presets.rs`** - parsing under different language grammars
//! - **`custom_format.rs`** - building a grammar rule by rule
//! - **`partial_parsing.rs`** - incremental scanning of mixed input
//!
//! Run any example with: `cargo run --example <name>`

mod flags;
mod parse;
mod scan;
mod write;

pub mod error;
pub mod format;
pub mod num;
pub mod options;

pub use error::{Error, ErrorKind, PartialResult, Result};
pub use format::{NumberFormat, NumberFormatBuilder};
pub use num::{FromText, Number, ToText, BUFFER_SIZE};
pub use options::{
    ParseFloatOptions, ParseFloatOptionsBuilder, ParseIntegerOptions,
    ParseIntegerOptionsBuilder, RoundingKind, WriteFloatOptions, WriteFloatOptionsBuilder,
    WriteIntegerOptions, WriteIntegerOptionsBuilder,
};

/// Parses the entire input as `N`, using default options.
///
/// # Examples
///
/// ```rust
/// assert_eq!(numform::parse::<i32>(b"-37"), Ok(-37));
/// assert_eq!(numform::parse::<f64>(b"0.5"), Ok(0.5));
/// ```
///
/// # Errors
///
/// Returns a positioned [`Error`] if the input violates the grammar, leaves
/// trailing bytes, or overflows the target type.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse<N: FromText>(bytes: &[u8]) -> Result<N> {
    N::from_text(bytes)
}

/// Parses a prefix of the input as `N`, reporting the bytes consumed.
///
/// Trailing unrecognized bytes are not an error; the parse stops at the
/// first byte that cannot extend a valid number.
///
/// # Examples
///
/// ```rust
/// assert_eq!(numform::parse_partial::<i32>(b"10a"), Ok((10, 2)));
/// assert_eq!(numform::parse_partial::<f64>(b"1.5 apples"), Ok((1.5, 3)));
/// ```
///
/// # Errors
///
/// Returns a positioned [`Error`] if no valid prefix exists.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_partial<N: FromText>(bytes: &[u8]) -> PartialResult<N> {
    N::from_text_partial(bytes)
}

/// Parses the entire input as `N` with the given options.
///
/// # Errors
///
/// Returns a positioned [`Error`] if the input violates the configured
/// grammar, leaves trailing bytes, or overflows the target type.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options<N: FromText>(bytes: &[u8], options: &N::Options) -> Result<N> {
    N::from_text_with_options(bytes, options)
}

/// Parses a prefix of the input as `N` with the given options, reporting the
/// bytes consumed.
///
/// # Errors
///
/// Returns a positioned [`Error`] if no valid prefix exists under the
/// configured grammar.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_partial_with_options<N: FromText>(
    bytes: &[u8],
    options: &N::Options,
) -> PartialResult<N> {
    N::from_text_partial_with_options(bytes, options)
}

/// Writes `n` at radix 10 into `buffer`, returning the written slice.
///
/// `buffer` must hold at least [`Number::FORMATTED_SIZE_DECIMAL`] bytes for
/// `N`; an undersized buffer panics.
///
/// # Examples
///
/// ```rust
/// use numform::Number;
///
/// let mut buffer = [0u8; i32::FORMATTED_SIZE_DECIMAL];
/// assert_eq!(numform::write(-123i32, &mut buffer), b"-123");
/// ```
pub fn write<N: ToText>(n: N, buffer: &mut [u8]) -> &mut [u8] {
    n.to_text(buffer)
}

/// Writes `n` with the given options into `buffer`, returning the written
/// slice.
///
/// `buffer` must hold at least [`Number::FORMATTED_SIZE`] bytes for `N` when
/// the options select a non-decimal radix; an undersized buffer panics.
pub fn write_with_options<'a, N: ToText>(
    n: N,
    options: &N::Options,
    buffer: &'a mut [u8],
) -> &'a mut [u8] {
    n.to_text_with_options(options, buffer)
}

/// Writes `n` at radix 10 into a freshly allocated `String`.
///
/// # Examples
///
/// ```rust
/// assert_eq!(numform::to_string(5), "5");
/// assert_eq!(numform::to_string(0.0), "0.0");
/// ```
#[must_use]
pub fn to_string<N: ToText>(n: N) -> String {
    let mut buffer = [0u8; BUFFER_SIZE];
    String::from_utf8_lossy(n.to_text(&mut buffer)).into_owned()
}

/// Writes `n` with the given options into a freshly allocated `String`.
///
/// # Examples
///
/// ```rust
/// use numform::WriteFloatOptions;
///
/// let trim = WriteFloatOptions::builder().trim_floats(true).build().unwrap();
/// assert_eq!(numform::to_string_with_options(3.0, &trim), "3");
/// ```
#[must_use]
pub fn to_string_with_options<N: ToText>(n: N, options: &N::Options) -> String {
    let mut buffer = [0u8; BUFFER_SIZE];
    String::from_utf8_lossy(n.to_text_with_options(options, &mut buffer)).into_owned()
}
