//! Per-call configuration for the four conversion families.
//!
//! Each operation family (parse-integer, parse-float, write-integer,
//! write-float) has its own options type built through a deferred-validation
//! builder: setters only store fields, and [`build`](ParseFloatOptionsBuilder::build)
//! checks consistency (radix range, exponent character validity) in one
//! place, returning `None` on contradiction. The `binary`/`decimal`/
//! `hexadecimal` constructors cover the common radixes; hexadecimal float
//! options conventionally switch the exponent character to `p` so that `e`
//! remains available as a digit.
//!
//! Float options own the byte spellings used to recognize and emit NaN and
//! infinity. Ownership is real: the buffers are copied into the options value
//! and deep-copied on clone, so an options value can outlive whatever slice
//! it was configured from.
//!
//! ## Examples
//!
//! ```rust
//! use numform::{NumberFormat, ParseFloatOptions, RoundingKind};
//!
//! let options = ParseFloatOptions::builder()
//!     .format(NumberFormat::JSON)
//!     .rounding(RoundingKind::TowardZero)
//!     .nan_string(b"nan")
//!     .build()
//!     .unwrap();
//! assert_eq!(options.radix(), 10);
//! assert_eq!(options.nan_string(), b"nan");
//! ```

use crate::flags;
use crate::format::NumberFormat;

/// Default radix for every options type.
pub(crate) const DEFAULT_RADIX: u32 = 10;

/// Default exponent character at radix 10.
pub(crate) const DEFAULT_EXPONENT_CHAR: u8 = b'e';

/// Default NaN spelling.
pub(crate) const DEFAULT_NAN_STRING: &[u8] = b"NaN";

/// Default short infinity spelling.
pub(crate) const DEFAULT_INF_STRING: &[u8] = b"inf";

/// Default long infinity spelling.
pub(crate) const DEFAULT_INFINITY_STRING: &[u8] = b"infinity";

/// Rounding mode applied when a parsed float cannot be represented exactly.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingKind {
    /// Round to nearest, ties to even. The IEEE 754 default.
    #[default]
    NearestTieEven,
    /// Round to nearest, ties away from zero.
    NearestTieAwayZero,
    /// Round toward positive infinity.
    TowardPositiveInfinity,
    /// Round toward negative infinity.
    TowardNegativeInfinity,
    /// Round toward zero.
    TowardZero,
}

#[inline]
fn is_valid_radix(radix: u32) -> bool {
    (2..=36).contains(&radix)
}

/// Validate an exponent character against a radix and a format.
///
/// The character must not be a digit of the radix, a sign, or collide with
/// the format's digit separator.
fn check_exponent_char(exponent_char: u8, radix: u32, format: NumberFormat) -> bool {
    flags::is_valid_exponent_char(exponent_char, radix)
        && format.digit_separator() != exponent_char
}

// PARSE INTEGER

/// Options to customize integer parsing.
///
/// ## Examples
///
/// ```rust
/// use numform::{parse_with_options, ParseIntegerOptions};
///
/// let options = ParseIntegerOptions::hexadecimal();
/// assert_eq!(parse_with_options::<u32>(b"FF", &options), Ok(255));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseIntegerOptions {
    radix: u32,
    format: NumberFormat,
}

impl ParseIntegerOptions {
    /// Returns a fresh builder with default fields.
    #[must_use]
    pub const fn builder() -> ParseIntegerOptionsBuilder {
        ParseIntegerOptionsBuilder::new()
    }

    /// Options for parsing base-2 integers.
    #[must_use]
    pub fn binary() -> Self {
        ParseIntegerOptions { radix: 2, format: NumberFormat::PERMISSIVE }
    }

    /// Options for parsing base-10 integers.
    #[must_use]
    pub fn decimal() -> Self {
        ParseIntegerOptions { radix: 10, format: NumberFormat::PERMISSIVE }
    }

    /// Options for parsing base-16 integers.
    #[must_use]
    pub fn hexadecimal() -> Self {
        ParseIntegerOptions { radix: 16, format: NumberFormat::PERMISSIVE }
    }

    /// The radix digits are interpreted in.
    #[must_use]
    pub const fn radix(&self) -> u32 {
        self.radix
    }

    /// The number format enforced while scanning.
    #[must_use]
    pub const fn format(&self) -> NumberFormat {
        self.format
    }
}

impl Default for ParseIntegerOptions {
    fn default() -> Self {
        Self::decimal()
    }
}

/// Builder for [`ParseIntegerOptions`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseIntegerOptionsBuilder {
    radix: u32,
    format: NumberFormat,
}

impl ParseIntegerOptionsBuilder {
    const fn new() -> Self {
        ParseIntegerOptionsBuilder {
            radix: DEFAULT_RADIX,
            format: NumberFormat::PERMISSIVE,
        }
    }

    /// Sets the radix. Accepted values are 2 through 36.
    #[must_use]
    pub const fn radix(mut self, radix: u32) -> Self {
        self.radix = radix;
        self
    }

    /// Sets the number format.
    #[must_use]
    pub const fn format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    /// Validates the configuration and returns the immutable options value,
    /// or `None` when the radix is out of range.
    #[must_use]
    pub fn build(self) -> Option<ParseIntegerOptions> {
        if !is_valid_radix(self.radix) {
            return None;
        }
        Some(ParseIntegerOptions { radix: self.radix, format: self.format })
    }
}

impl Default for ParseIntegerOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// PARSE FLOAT

/// Options to customize float parsing.
///
/// Owns the NaN and infinity spellings it recognizes. The longer
/// `infinity_string` is tried before `inf_string` when matching input, so
/// the spelling that consumes more bytes wins.
///
/// ## Examples
///
/// ```rust
/// use numform::{parse_with_options, ParseFloatOptions};
///
/// let options = ParseFloatOptions::builder()
///     .lossy(true)
///     .build()
///     .unwrap();
/// assert_eq!(parse_with_options::<f64>(b"1.5", &options), Ok(1.5));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ParseFloatOptions {
    lossy: bool,
    exponent_char: u8,
    radix: u32,
    format: NumberFormat,
    rounding: RoundingKind,
    nan_string: Vec<u8>,
    inf_string: Vec<u8>,
    infinity_string: Vec<u8>,
}

impl ParseFloatOptions {
    /// Returns a fresh builder with default fields.
    #[must_use]
    pub fn builder() -> ParseFloatOptionsBuilder {
        ParseFloatOptionsBuilder::new()
    }

    /// Options for parsing base-2 floats.
    #[must_use]
    pub fn binary() -> Self {
        let mut options = Self::default();
        options.radix = 2;
        options
    }

    /// Options for parsing base-10 floats.
    #[must_use]
    pub fn decimal() -> Self {
        Self::default()
    }

    /// Options for parsing base-16 floats, with `p` as the exponent
    /// character.
    #[must_use]
    pub fn hexadecimal() -> Self {
        let mut options = Self::default();
        options.radix = 16;
        options.exponent_char = b'p';
        options
    }

    /// Whether the exact-rounding slow path is skipped.
    #[must_use]
    pub const fn lossy(&self) -> bool {
        self.lossy
    }

    /// The character introducing the exponent.
    #[must_use]
    pub const fn exponent_char(&self) -> u8 {
        self.exponent_char
    }

    /// The radix mantissa digits are interpreted in.
    #[must_use]
    pub const fn radix(&self) -> u32 {
        self.radix
    }

    /// The number format enforced while scanning.
    #[must_use]
    pub const fn format(&self) -> NumberFormat {
        self.format
    }

    /// The rounding mode for inexact conversions.
    #[must_use]
    pub const fn rounding(&self) -> RoundingKind {
        self.rounding
    }

    /// The spelling recognized for NaN.
    #[must_use]
    pub fn nan_string(&self) -> &[u8] {
        &self.nan_string
    }

    /// The short spelling recognized for infinity.
    #[must_use]
    pub fn inf_string(&self) -> &[u8] {
        &self.inf_string
    }

    /// The long spelling recognized for infinity. Tried before
    /// [`inf_string`](Self::inf_string).
    #[must_use]
    pub fn infinity_string(&self) -> &[u8] {
        &self.infinity_string
    }
}

impl Default for ParseFloatOptions {
    fn default() -> Self {
        ParseFloatOptions {
            lossy: false,
            exponent_char: DEFAULT_EXPONENT_CHAR,
            radix: DEFAULT_RADIX,
            format: NumberFormat::PERMISSIVE,
            rounding: RoundingKind::NearestTieEven,
            nan_string: DEFAULT_NAN_STRING.to_vec(),
            inf_string: DEFAULT_INF_STRING.to_vec(),
            infinity_string: DEFAULT_INFINITY_STRING.to_vec(),
        }
    }
}

/// Builder for [`ParseFloatOptions`].
#[derive(Clone, Debug, PartialEq)]
pub struct ParseFloatOptionsBuilder {
    lossy: bool,
    exponent_char: u8,
    radix: u32,
    format: NumberFormat,
    rounding: RoundingKind,
    nan_string: Vec<u8>,
    inf_string: Vec<u8>,
    infinity_string: Vec<u8>,
}

impl ParseFloatOptionsBuilder {
    fn new() -> Self {
        ParseFloatOptionsBuilder {
            lossy: false,
            exponent_char: DEFAULT_EXPONENT_CHAR,
            radix: DEFAULT_RADIX,
            format: NumberFormat::PERMISSIVE,
            rounding: RoundingKind::NearestTieEven,
            nan_string: DEFAULT_NAN_STRING.to_vec(),
            inf_string: DEFAULT_INF_STRING.to_vec(),
            infinity_string: DEFAULT_INFINITY_STRING.to_vec(),
        }
    }

    /// Skips the exact-rounding slow path, trading worst-case last-bit
    /// accuracy for speed.
    #[must_use]
    pub const fn lossy(mut self, lossy: bool) -> Self {
        self.lossy = lossy;
        self
    }

    /// Sets the exponent character. Conventionally `p` for hexadecimal.
    #[must_use]
    pub const fn exponent_char(mut self, exponent_char: u8) -> Self {
        self.exponent_char = exponent_char;
        self
    }

    /// Sets the radix. Accepted values are 2 through 36.
    #[must_use]
    pub const fn radix(mut self, radix: u32) -> Self {
        self.radix = radix;
        self
    }

    /// Sets the number format.
    #[must_use]
    pub const fn format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the rounding mode for inexact conversions.
    #[must_use]
    pub const fn rounding(mut self, rounding: RoundingKind) -> Self {
        self.rounding = rounding;
        self
    }

    /// Sets the NaN spelling. The bytes are copied into the options value.
    #[must_use]
    pub fn nan_string(mut self, nan_string: &[u8]) -> Self {
        self.nan_string = nan_string.to_vec();
        self
    }

    /// Sets the short infinity spelling. The bytes are copied into the
    /// options value.
    #[must_use]
    pub fn inf_string(mut self, inf_string: &[u8]) -> Self {
        self.inf_string = inf_string.to_vec();
        self
    }

    /// Sets the long infinity spelling, tried before the short one when
    /// recognizing input. The bytes are copied into the options value.
    #[must_use]
    pub fn infinity_string(mut self, infinity_string: &[u8]) -> Self {
        self.infinity_string = infinity_string.to_vec();
        self
    }

    /// Validates the configuration and returns the immutable options value.
    ///
    /// Returns `None` when the radix is out of range, when the exponent
    /// character is a digit of the radix or a sign, or when it collides with
    /// the format's digit separator.
    #[must_use]
    pub fn build(self) -> Option<ParseFloatOptions> {
        if !is_valid_radix(self.radix)
            || !check_exponent_char(self.exponent_char, self.radix, self.format)
        {
            return None;
        }
        Some(ParseFloatOptions {
            lossy: self.lossy,
            exponent_char: self.exponent_char,
            radix: self.radix,
            format: self.format,
            rounding: self.rounding,
            nan_string: self.nan_string,
            inf_string: self.inf_string,
            infinity_string: self.infinity_string,
        })
    }
}

impl Default for ParseFloatOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// WRITE INTEGER

/// Options to customize integer writing.
///
/// ## Examples
///
/// ```rust
/// use numform::{write_with_options, Number, WriteIntegerOptions};
///
/// let options = WriteIntegerOptions::binary();
/// let mut buffer = [0u8; u32::FORMATTED_SIZE];
/// assert_eq!(write_with_options(10u32, &options, &mut buffer), b"1010");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WriteIntegerOptions {
    radix: u32,
}

impl WriteIntegerOptions {
    /// Returns a fresh builder with default fields.
    #[must_use]
    pub const fn builder() -> WriteIntegerOptionsBuilder {
        WriteIntegerOptionsBuilder::new()
    }

    /// Options for writing base-2 integers.
    #[must_use]
    pub fn binary() -> Self {
        WriteIntegerOptions { radix: 2 }
    }

    /// Options for writing base-10 integers.
    #[must_use]
    pub fn decimal() -> Self {
        WriteIntegerOptions { radix: 10 }
    }

    /// Options for writing base-16 integers.
    #[must_use]
    pub fn hexadecimal() -> Self {
        WriteIntegerOptions { radix: 16 }
    }

    /// The radix digits are emitted in.
    #[must_use]
    pub const fn radix(&self) -> u32 {
        self.radix
    }
}

impl Default for WriteIntegerOptions {
    fn default() -> Self {
        Self::decimal()
    }
}

/// Builder for [`WriteIntegerOptions`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WriteIntegerOptionsBuilder {
    radix: u32,
}

impl WriteIntegerOptionsBuilder {
    const fn new() -> Self {
        WriteIntegerOptionsBuilder { radix: DEFAULT_RADIX }
    }

    /// Sets the radix. Accepted values are 2 through 36.
    #[must_use]
    pub const fn radix(mut self, radix: u32) -> Self {
        self.radix = radix;
        self
    }

    /// Validates the configuration and returns the immutable options value,
    /// or `None` when the radix is out of range.
    #[must_use]
    pub fn build(self) -> Option<WriteIntegerOptions> {
        if !is_valid_radix(self.radix) {
            return None;
        }
        Some(WriteIntegerOptions { radix: self.radix })
    }
}

impl Default for WriteIntegerOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// WRITE FLOAT

/// Options to customize float writing.
///
/// Owns the NaN and infinity spellings it emits. When `trim_floats` is set,
/// a float with a zero fractional part is written without the trailing
/// `.0`.
///
/// ## Examples
///
/// ```rust
/// use numform::{to_string_with_options, WriteFloatOptions};
///
/// let options = WriteFloatOptions::builder()
///     .trim_floats(true)
///     .build()
///     .unwrap();
/// assert_eq!(to_string_with_options(3.0f64, &options), "3");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WriteFloatOptions {
    exponent_char: u8,
    radix: u32,
    trim_floats: bool,
    nan_string: Vec<u8>,
    inf_string: Vec<u8>,
}

impl WriteFloatOptions {
    /// Returns a fresh builder with default fields.
    #[must_use]
    pub fn builder() -> WriteFloatOptionsBuilder {
        WriteFloatOptionsBuilder::new()
    }

    /// Options for writing base-2 floats.
    #[must_use]
    pub fn binary() -> Self {
        let mut options = Self::default();
        options.radix = 2;
        options
    }

    /// Options for writing base-10 floats.
    #[must_use]
    pub fn decimal() -> Self {
        Self::default()
    }

    /// Options for writing base-16 floats, with `p` as the exponent
    /// character.
    #[must_use]
    pub fn hexadecimal() -> Self {
        let mut options = Self::default();
        options.radix = 16;
        options.exponent_char = b'p';
        options
    }

    /// The character introducing the exponent.
    #[must_use]
    pub const fn exponent_char(&self) -> u8 {
        self.exponent_char
    }

    /// The radix digits are emitted in.
    #[must_use]
    pub const fn radix(&self) -> u32 {
        self.radix
    }

    /// Whether integral floats are written without a trailing `.0`.
    #[must_use]
    pub const fn trim_floats(&self) -> bool {
        self.trim_floats
    }

    /// The spelling emitted for NaN.
    #[must_use]
    pub fn nan_string(&self) -> &[u8] {
        &self.nan_string
    }

    /// The spelling emitted for infinity.
    #[must_use]
    pub fn inf_string(&self) -> &[u8] {
        &self.inf_string
    }
}

impl Default for WriteFloatOptions {
    fn default() -> Self {
        WriteFloatOptions {
            exponent_char: DEFAULT_EXPONENT_CHAR,
            radix: DEFAULT_RADIX,
            trim_floats: false,
            nan_string: DEFAULT_NAN_STRING.to_vec(),
            inf_string: DEFAULT_INF_STRING.to_vec(),
        }
    }
}

/// Builder for [`WriteFloatOptions`].
#[derive(Clone, Debug, PartialEq)]
pub struct WriteFloatOptionsBuilder {
    exponent_char: u8,
    radix: u32,
    trim_floats: bool,
    nan_string: Vec<u8>,
    inf_string: Vec<u8>,
}

impl WriteFloatOptionsBuilder {
    fn new() -> Self {
        WriteFloatOptionsBuilder {
            exponent_char: DEFAULT_EXPONENT_CHAR,
            radix: DEFAULT_RADIX,
            trim_floats: false,
            nan_string: DEFAULT_NAN_STRING.to_vec(),
            inf_string: DEFAULT_INF_STRING.to_vec(),
        }
    }

    /// Sets the exponent character. Conventionally `p` for hexadecimal.
    #[must_use]
    pub const fn exponent_char(mut self, exponent_char: u8) -> Self {
        self.exponent_char = exponent_char;
        self
    }

    /// Sets the radix. Accepted values are 2 through 36.
    #[must_use]
    pub const fn radix(mut self, radix: u32) -> Self {
        self.radix = radix;
        self
    }

    /// Writes integral floats without a trailing `.0`.
    #[must_use]
    pub const fn trim_floats(mut self, trim_floats: bool) -> Self {
        self.trim_floats = trim_floats;
        self
    }

    /// Sets the NaN spelling. The bytes are copied into the options value.
    #[must_use]
    pub fn nan_string(mut self, nan_string: &[u8]) -> Self {
        self.nan_string = nan_string.to_vec();
        self
    }

    /// Sets the infinity spelling. The bytes are copied into the options
    /// value.
    #[must_use]
    pub fn inf_string(mut self, inf_string: &[u8]) -> Self {
        self.inf_string = inf_string.to_vec();
        self
    }

    /// Validates the configuration and returns the immutable options value.
    ///
    /// Returns `None` when the radix is out of range or the exponent
    /// character is a digit of the radix or a sign.
    #[must_use]
    pub fn build(self) -> Option<WriteFloatOptions> {
        if !is_valid_radix(self.radix)
            || !flags::is_valid_exponent_char(self.exponent_char, self.radix)
        {
            return None;
        }
        Some(WriteFloatOptions {
            exponent_char: self.exponent_char,
            radix: self.radix,
            trim_floats: self.trim_floats,
            nan_string: self.nan_string,
            inf_string: self.inf_string,
        })
    }
}

impl Default for WriteFloatOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
