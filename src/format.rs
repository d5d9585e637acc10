//! Packed number format values and their builder.
//!
//! A [`NumberFormat`] encodes, in a single `u64`, every lexical rule a number
//! grammar can enforce: which digit runs are mandatory, how signs may appear,
//! whether exponents and special values are legal, and where a digit
//! separator character may be placed. The separator character itself lives in
//! the top byte; the grammar flags occupy the low bits. Two formats are equal
//! exactly when their packed values are equal.
//!
//! Formats come from three places:
//!
//! - the permissive/standard/ignore constructors for the common cases,
//! - the preset constants matching the published numeric-literal grammars of
//!   specific languages and data formats (`NumberFormat::JSON`,
//!   `NumberFormat::RUST_LITERAL`, ...),
//! - [`NumberFormat::builder`] for anything custom.
//!
//! ## Examples
//!
//! ```rust
//! use numform::NumberFormat;
//!
//! // A format that requires digits around the decimal point and accepts
//! // underscore separators between integer digits.
//! let format = NumberFormat::builder()
//!     .digit_separator(b'_')
//!     .required_integer_digits(true)
//!     .required_fraction_digits(true)
//!     .integer_internal_digit_separator(true)
//!     .build()
//!     .unwrap();
//! assert!(format.required_integer_digits());
//! assert_eq!(format.digit_separator(), b'_');
//!
//! // Placement flags without a separator character cannot build.
//! assert!(NumberFormat::builder()
//!     .integer_internal_digit_separator(true)
//!     .build()
//!     .is_none());
//! ```

use crate::flags;

/// An immutable, packed description of a numeric grammar.
///
/// See the [module documentation](self) for an overview. Presets are plain
/// data validated against the grammar each language publishes; they are
/// constructed once and never mutated.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NumberFormat(u64);

/// Shorthand for packing a separator byte with a set of grammar flags.
const fn pack(separator: u8, bits: u64) -> NumberFormat {
    NumberFormat(flags::digit_separator_to_flags(separator) | bits)
}

impl NumberFormat {
    // FLAGS
    //
    // Each constant has exactly one bit set and can be OR-ed with others via
    // `union`; the group constants below have several.

    /// Digits are required before the decimal point.
    pub const REQUIRED_INTEGER_DIGITS: Self = NumberFormat(flags::REQUIRED_INTEGER_DIGITS);
    /// Digits are required after the decimal point, if one is present.
    pub const REQUIRED_FRACTION_DIGITS: Self = NumberFormat(flags::REQUIRED_FRACTION_DIGITS);
    /// Digits are required after the exponent character, if one is present.
    pub const REQUIRED_EXPONENT_DIGITS: Self = NumberFormat(flags::REQUIRED_EXPONENT_DIGITS);
    /// A positive mantissa sign is not allowed.
    pub const NO_POSITIVE_MANTISSA_SIGN: Self = NumberFormat(flags::NO_POSITIVE_MANTISSA_SIGN);
    /// A mantissa sign is required.
    pub const REQUIRED_MANTISSA_SIGN: Self = NumberFormat(flags::REQUIRED_MANTISSA_SIGN);
    /// Exponent notation is not allowed.
    pub const NO_EXPONENT_NOTATION: Self = NumberFormat(flags::NO_EXPONENT_NOTATION);
    /// A positive exponent sign is not allowed.
    pub const NO_POSITIVE_EXPONENT_SIGN: Self = NumberFormat(flags::NO_POSITIVE_EXPONENT_SIGN);
    /// An exponent sign is required.
    pub const REQUIRED_EXPONENT_SIGN: Self = NumberFormat(flags::REQUIRED_EXPONENT_SIGN);
    /// An exponent may not appear without a preceding decimal point.
    pub const NO_EXPONENT_WITHOUT_FRACTION: Self =
        NumberFormat(flags::NO_EXPONENT_WITHOUT_FRACTION);
    /// Special (non-finite) values are not allowed.
    pub const NO_SPECIAL: Self = NumberFormat(flags::NO_SPECIAL);
    /// Special value spellings are case-sensitive.
    pub const CASE_SENSITIVE_SPECIAL: Self = NumberFormat(flags::CASE_SENSITIVE_SPECIAL);
    /// Leading zeros on integer values are not allowed.
    pub const NO_INTEGER_LEADING_ZEROS: Self = NumberFormat(flags::NO_INTEGER_LEADING_ZEROS);
    /// Leading zeros on float values are not allowed.
    pub const NO_FLOAT_LEADING_ZEROS: Self = NumberFormat(flags::NO_FLOAT_LEADING_ZEROS);

    /// Separators may appear between integer digits.
    pub const INTEGER_INTERNAL_DIGIT_SEPARATOR: Self =
        NumberFormat(flags::INTEGER_INTERNAL_DIGIT_SEPARATOR);
    /// A separator may appear before any integer digits.
    pub const INTEGER_LEADING_DIGIT_SEPARATOR: Self =
        NumberFormat(flags::INTEGER_LEADING_DIGIT_SEPARATOR);
    /// A separator may appear after the integer digits.
    pub const INTEGER_TRAILING_DIGIT_SEPARATOR: Self =
        NumberFormat(flags::INTEGER_TRAILING_DIGIT_SEPARATOR);
    /// Consecutive separators are allowed between integer digits.
    pub const INTEGER_CONSECUTIVE_DIGIT_SEPARATOR: Self =
        NumberFormat(flags::INTEGER_CONSECUTIVE_DIGIT_SEPARATOR);
    /// Separators may appear between fraction digits.
    pub const FRACTION_INTERNAL_DIGIT_SEPARATOR: Self =
        NumberFormat(flags::FRACTION_INTERNAL_DIGIT_SEPARATOR);
    /// A separator may appear before any fraction digits.
    pub const FRACTION_LEADING_DIGIT_SEPARATOR: Self =
        NumberFormat(flags::FRACTION_LEADING_DIGIT_SEPARATOR);
    /// A separator may appear after the fraction digits.
    pub const FRACTION_TRAILING_DIGIT_SEPARATOR: Self =
        NumberFormat(flags::FRACTION_TRAILING_DIGIT_SEPARATOR);
    /// Consecutive separators are allowed between fraction digits.
    pub const FRACTION_CONSECUTIVE_DIGIT_SEPARATOR: Self =
        NumberFormat(flags::FRACTION_CONSECUTIVE_DIGIT_SEPARATOR);
    /// Separators may appear between exponent digits.
    pub const EXPONENT_INTERNAL_DIGIT_SEPARATOR: Self =
        NumberFormat(flags::EXPONENT_INTERNAL_DIGIT_SEPARATOR);
    /// A separator may appear before any exponent digits.
    pub const EXPONENT_LEADING_DIGIT_SEPARATOR: Self =
        NumberFormat(flags::EXPONENT_LEADING_DIGIT_SEPARATOR);
    /// A separator may appear after the exponent digits.
    pub const EXPONENT_TRAILING_DIGIT_SEPARATOR: Self =
        NumberFormat(flags::EXPONENT_TRAILING_DIGIT_SEPARATOR);
    /// Consecutive separators are allowed between exponent digits.
    pub const EXPONENT_CONSECUTIVE_DIGIT_SEPARATOR: Self =
        NumberFormat(flags::EXPONENT_CONSECUTIVE_DIGIT_SEPARATOR);
    /// Separators may appear inside special value spellings.
    pub const SPECIAL_DIGIT_SEPARATOR: Self = NumberFormat(flags::SPECIAL_DIGIT_SEPARATOR);

    // GROUPS

    /// Digits are required around every control character.
    pub const REQUIRED_DIGITS: Self = NumberFormat(flags::REQUIRED_DIGITS);
    /// Separators may appear between the digits of any segment.
    pub const INTERNAL_DIGIT_SEPARATOR: Self = NumberFormat(flags::INTERNAL_DIGIT_SEPARATOR);
    /// Separators may lead the digits of any segment.
    pub const LEADING_DIGIT_SEPARATOR: Self = NumberFormat(flags::LEADING_DIGIT_SEPARATOR);
    /// Separators may trail the digits of any segment.
    pub const TRAILING_DIGIT_SEPARATOR: Self = NumberFormat(flags::TRAILING_DIGIT_SEPARATOR);
    /// Consecutive separators are allowed in any segment.
    pub const CONSECUTIVE_DIGIT_SEPARATOR: Self = NumberFormat(flags::CONSECUTIVE_DIGIT_SEPARATOR);
    /// Every separator placement flag for the integer segment.
    pub const INTEGER_DIGIT_SEPARATOR_FLAG_MASK: Self =
        NumberFormat(flags::INTEGER_DIGIT_SEPARATOR_FLAG_MASK);
    /// Every separator placement flag for the fraction segment.
    pub const FRACTION_DIGIT_SEPARATOR_FLAG_MASK: Self =
        NumberFormat(flags::FRACTION_DIGIT_SEPARATOR_FLAG_MASK);
    /// Every separator placement flag for the exponent segment.
    pub const EXPONENT_DIGIT_SEPARATOR_FLAG_MASK: Self =
        NumberFormat(flags::EXPONENT_DIGIT_SEPARATOR_FLAG_MASK);
    /// Every separator placement flag.
    pub const DIGIT_SEPARATOR_FLAG_MASK: Self = NumberFormat(flags::DIGIT_SEPARATOR_FLAG_MASK);
    /// Every flag that affects the exponent.
    pub const EXPONENT_FLAG_MASK: Self = NumberFormat(flags::EXPONENT_FLAG_MASK);
    /// Every grammar flag.
    pub const FLAG_MASK: Self = NumberFormat(flags::FLAG_MASK);

    // PRESETS
    //
    // One constant per supported grammar, OR-ing exactly the rules that
    // grammar's published numeric-literal syntax enforces. `*_LITERAL`
    // matches source-code literals; `*_STRING` matches the language's
    // string-to-number conversion, which is usually laxer.

    /// Permissive format: no rule is enforced.
    pub const PERMISSIVE: Self = NumberFormat(0);
    /// Standard format: what a conventional float parser expects.
    pub const STANDARD: Self = NumberFormat(flags::REQUIRED_EXPONENT_DIGITS);

    /// Rust float literal.
    pub const RUST_LITERAL: Self = pack(
        b'_',
        flags::REQUIRED_DIGITS
            | flags::NO_POSITIVE_MANTISSA_SIGN
            | flags::NO_SPECIAL
            | flags::INTERNAL_DIGIT_SEPARATOR
            | flags::TRAILING_DIGIT_SEPARATOR
            | flags::CONSECUTIVE_DIGIT_SEPARATOR,
    );
    /// Rust string-to-float conversion.
    pub const RUST_STRING: Self = NumberFormat(flags::REQUIRED_EXPONENT_DIGITS);
    /// Rust string conversion with case-sensitive special values.
    pub const RUST_STRING_STRICT: Self =
        NumberFormat(flags::REQUIRED_EXPONENT_DIGITS | flags::CASE_SENSITIVE_SPECIAL);

    /// Python float literal.
    pub const PYTHON_LITERAL: Self =
        NumberFormat(flags::REQUIRED_EXPONENT_DIGITS | flags::NO_SPECIAL);
    /// Python string-to-float conversion.
    pub const PYTHON_STRING: Self = NumberFormat(flags::REQUIRED_EXPONENT_DIGITS);

    /// C++17 float literal.
    pub const CXX17_LITERAL: Self = pack(
        b'\'',
        flags::REQUIRED_EXPONENT_DIGITS
            | flags::CASE_SENSITIVE_SPECIAL
            | flags::INTERNAL_DIGIT_SEPARATOR,
    );
    /// C++17 string-to-float conversion.
    pub const CXX17_STRING: Self = NumberFormat(flags::REQUIRED_EXPONENT_DIGITS);
    /// C++14 float literal.
    pub const CXX14_LITERAL: Self = Self::CXX17_LITERAL;
    /// C++14 string-to-float conversion.
    pub const CXX14_STRING: Self = NumberFormat(flags::REQUIRED_EXPONENT_DIGITS);
    /// C++11 float literal.
    pub const CXX11_LITERAL: Self =
        NumberFormat(flags::REQUIRED_EXPONENT_DIGITS | flags::CASE_SENSITIVE_SPECIAL);
    /// C++11 string-to-float conversion.
    pub const CXX11_STRING: Self = NumberFormat(flags::REQUIRED_EXPONENT_DIGITS);
    /// C++03 float literal.
    pub const CXX03_LITERAL: Self =
        NumberFormat(flags::REQUIRED_EXPONENT_DIGITS | flags::NO_SPECIAL);
    /// C++03 string-to-float conversion.
    pub const CXX03_STRING: Self = NumberFormat(flags::REQUIRED_EXPONENT_DIGITS);
    /// C++98 float literal.
    pub const CXX98_LITERAL: Self =
        NumberFormat(flags::REQUIRED_EXPONENT_DIGITS | flags::NO_SPECIAL);
    /// C++98 string-to-float conversion.
    pub const CXX98_STRING: Self = NumberFormat(flags::REQUIRED_EXPONENT_DIGITS);

    /// C18 float literal.
    pub const C18_LITERAL: Self =
        NumberFormat(flags::REQUIRED_EXPONENT_DIGITS | flags::CASE_SENSITIVE_SPECIAL);
    /// C18 string-to-float conversion.
    pub const C18_STRING: Self = NumberFormat(flags::REQUIRED_EXPONENT_DIGITS);
    /// C11 float literal.
    pub const C11_LITERAL: Self =
        NumberFormat(flags::REQUIRED_EXPONENT_DIGITS | flags::CASE_SENSITIVE_SPECIAL);
    /// C11 string-to-float conversion.
    pub const C11_STRING: Self = NumberFormat(flags::REQUIRED_EXPONENT_DIGITS);
    /// C99 float literal.
    pub const C99_LITERAL: Self =
        NumberFormat(flags::REQUIRED_EXPONENT_DIGITS | flags::CASE_SENSITIVE_SPECIAL);
    /// C99 string-to-float conversion.
    pub const C99_STRING: Self = NumberFormat(flags::REQUIRED_EXPONENT_DIGITS);
    /// C90 float literal.
    pub const C90_LITERAL: Self =
        NumberFormat(flags::REQUIRED_EXPONENT_DIGITS | flags::NO_SPECIAL);
    /// C90 string-to-float conversion.
    pub const C90_STRING: Self = NumberFormat(flags::REQUIRED_EXPONENT_DIGITS);
    /// C89 float literal.
    pub const C89_LITERAL: Self =
        NumberFormat(flags::REQUIRED_EXPONENT_DIGITS | flags::NO_SPECIAL);
    /// C89 string-to-float conversion.
    pub const C89_STRING: Self = NumberFormat(flags::REQUIRED_EXPONENT_DIGITS);

    /// Ruby float literal.
    pub const RUBY_LITERAL: Self = pack(
        b'_',
        flags::REQUIRED_DIGITS | flags::NO_SPECIAL | flags::INTERNAL_DIGIT_SEPARATOR,
    );
    /// Ruby string-to-float conversion.
    pub const RUBY_STRING: Self =
        pack(b'_', flags::NO_SPECIAL | flags::INTERNAL_DIGIT_SEPARATOR);

    /// Swift float literal.
    pub const SWIFT_LITERAL: Self = pack(
        b'_',
        flags::REQUIRED_DIGITS
            | flags::NO_SPECIAL
            | flags::INTERNAL_DIGIT_SEPARATOR
            | flags::TRAILING_DIGIT_SEPARATOR
            | flags::CONSECUTIVE_DIGIT_SEPARATOR,
    );
    /// Swift string-to-float conversion.
    pub const SWIFT_STRING: Self = NumberFormat(flags::REQUIRED_FRACTION_DIGITS);

    /// Go float literal.
    pub const GO_LITERAL: Self =
        NumberFormat(flags::REQUIRED_FRACTION_DIGITS | flags::NO_SPECIAL);
    /// Go string-to-float conversion.
    pub const GO_STRING: Self = NumberFormat(flags::REQUIRED_FRACTION_DIGITS);

    /// Haskell float literal.
    pub const HASKELL_LITERAL: Self = NumberFormat(
        flags::REQUIRED_DIGITS | flags::NO_POSITIVE_MANTISSA_SIGN | flags::NO_SPECIAL,
    );
    /// Haskell string-to-float conversion.
    pub const HASKELL_STRING: Self = NumberFormat(
        flags::REQUIRED_DIGITS
            | flags::NO_POSITIVE_MANTISSA_SIGN
            | flags::CASE_SENSITIVE_SPECIAL,
    );

    /// JavaScript float literal.
    pub const JAVASCRIPT_LITERAL: Self =
        NumberFormat(flags::REQUIRED_EXPONENT_DIGITS | flags::CASE_SENSITIVE_SPECIAL);
    /// JavaScript string-to-float conversion.
    pub const JAVASCRIPT_STRING: Self = NumberFormat(flags::CASE_SENSITIVE_SPECIAL);

    /// Perl float literal.
    pub const PERL_LITERAL: Self = pack(
        b'_',
        flags::REQUIRED_EXPONENT_DIGITS
            | flags::NO_SPECIAL
            | flags::INTERNAL_DIGIT_SEPARATOR
            | flags::FRACTION_LEADING_DIGIT_SEPARATOR
            | flags::EXPONENT_LEADING_DIGIT_SEPARATOR
            | flags::TRAILING_DIGIT_SEPARATOR
            | flags::CONSECUTIVE_DIGIT_SEPARATOR,
    );
    /// Perl string-to-float conversion.
    pub const PERL_STRING: Self = Self::PERMISSIVE;

    /// PHP float literal.
    pub const PHP_LITERAL: Self =
        NumberFormat(flags::REQUIRED_EXPONENT_DIGITS | flags::CASE_SENSITIVE_SPECIAL);
    /// PHP string-to-float conversion.
    pub const PHP_STRING: Self = NumberFormat(flags::NO_SPECIAL);

    /// Java float literal.
    pub const JAVA_LITERAL: Self = pack(
        b'_',
        flags::REQUIRED_EXPONENT_DIGITS
            | flags::NO_SPECIAL
            | flags::INTERNAL_DIGIT_SEPARATOR
            | flags::CONSECUTIVE_DIGIT_SEPARATOR,
    );
    /// Java string-to-float conversion.
    pub const JAVA_STRING: Self =
        NumberFormat(flags::REQUIRED_EXPONENT_DIGITS | flags::CASE_SENSITIVE_SPECIAL);

    /// R float literal.
    pub const R_LITERAL: Self =
        NumberFormat(flags::REQUIRED_EXPONENT_DIGITS | flags::CASE_SENSITIVE_SPECIAL);
    /// R string-to-float conversion.
    pub const R_STRING: Self = Self::PERMISSIVE;

    /// Kotlin float literal.
    pub const KOTLIN_LITERAL: Self = pack(
        b'_',
        flags::REQUIRED_EXPONENT_DIGITS
            | flags::NO_SPECIAL
            | flags::INTERNAL_DIGIT_SEPARATOR
            | flags::CONSECUTIVE_DIGIT_SEPARATOR,
    );
    /// Kotlin string-to-float conversion.
    pub const KOTLIN_STRING: Self =
        NumberFormat(flags::REQUIRED_EXPONENT_DIGITS | flags::CASE_SENSITIVE_SPECIAL);

    /// Julia float literal.
    pub const JULIA_LITERAL: Self = pack(
        b'_',
        flags::REQUIRED_EXPONENT_DIGITS
            | flags::CASE_SENSITIVE_SPECIAL
            | flags::INTEGER_INTERNAL_DIGIT_SEPARATOR
            | flags::FRACTION_INTERNAL_DIGIT_SEPARATOR,
    );
    /// Julia string-to-float conversion.
    pub const JULIA_STRING: Self = NumberFormat(flags::REQUIRED_EXPONENT_DIGITS);

    /// C# 7 float literal.
    pub const CSHARP7_LITERAL: Self = pack(
        b'_',
        flags::REQUIRED_FRACTION_DIGITS
            | flags::REQUIRED_EXPONENT_DIGITS
            | flags::NO_SPECIAL
            | flags::INTERNAL_DIGIT_SEPARATOR
            | flags::CONSECUTIVE_DIGIT_SEPARATOR,
    );
    /// C# 7 string-to-float conversion.
    pub const CSHARP7_STRING: Self =
        NumberFormat(flags::REQUIRED_EXPONENT_DIGITS | flags::CASE_SENSITIVE_SPECIAL);
    /// C# 6 float literal.
    pub const CSHARP6_LITERAL: Self = NumberFormat(
        flags::REQUIRED_FRACTION_DIGITS | flags::REQUIRED_EXPONENT_DIGITS | flags::NO_SPECIAL,
    );
    /// C# 6 string-to-float conversion.
    pub const CSHARP6_STRING: Self = Self::CSHARP7_STRING;
    /// C# 5 float literal.
    pub const CSHARP5_LITERAL: Self = Self::CSHARP6_LITERAL;
    /// C# 5 string-to-float conversion.
    pub const CSHARP5_STRING: Self = Self::CSHARP7_STRING;
    /// C# 4 float literal.
    pub const CSHARP4_LITERAL: Self = Self::CSHARP6_LITERAL;
    /// C# 4 string-to-float conversion.
    pub const CSHARP4_STRING: Self = Self::CSHARP7_STRING;
    /// C# 3 float literal.
    pub const CSHARP3_LITERAL: Self = Self::CSHARP6_LITERAL;
    /// C# 3 string-to-float conversion.
    pub const CSHARP3_STRING: Self = Self::CSHARP7_STRING;
    /// C# 2 float literal.
    pub const CSHARP2_LITERAL: Self = Self::CSHARP6_LITERAL;
    /// C# 2 string-to-float conversion.
    pub const CSHARP2_STRING: Self = Self::CSHARP7_STRING;
    /// C# 1 float literal.
    pub const CSHARP1_LITERAL: Self = Self::CSHARP6_LITERAL;
    /// C# 1 string-to-float conversion.
    pub const CSHARP1_STRING: Self = Self::CSHARP7_STRING;

    /// Kawa float literal.
    pub const KAWA_LITERAL: Self =
        NumberFormat(flags::REQUIRED_EXPONENT_DIGITS | flags::NO_SPECIAL);
    /// Kawa string-to-float conversion.
    pub const KAWA_STRING: Self = Self::KAWA_LITERAL;
    /// Gambit-C float literal.
    pub const GAMBITC_LITERAL: Self = Self::KAWA_LITERAL;
    /// Gambit-C string-to-float conversion.
    pub const GAMBITC_STRING: Self = Self::KAWA_LITERAL;
    /// Guile float literal.
    pub const GUILE_LITERAL: Self = Self::KAWA_LITERAL;
    /// Guile string-to-float conversion.
    pub const GUILE_STRING: Self = Self::KAWA_LITERAL;

    /// Clojure float literal.
    pub const CLOJURE_LITERAL: Self = NumberFormat(
        flags::REQUIRED_INTEGER_DIGITS | flags::REQUIRED_EXPONENT_DIGITS | flags::NO_SPECIAL,
    );
    /// Clojure string-to-float conversion.
    pub const CLOJURE_STRING: Self =
        NumberFormat(flags::REQUIRED_EXPONENT_DIGITS | flags::CASE_SENSITIVE_SPECIAL);

    /// Erlang float literal.
    pub const ERLANG_LITERAL: Self = NumberFormat(
        flags::REQUIRED_DIGITS
            | flags::NO_EXPONENT_WITHOUT_FRACTION
            | flags::CASE_SENSITIVE_SPECIAL,
    );
    /// Erlang string-to-float conversion.
    pub const ERLANG_STRING: Self = NumberFormat(
        flags::REQUIRED_DIGITS | flags::NO_EXPONENT_WITHOUT_FRACTION | flags::NO_SPECIAL,
    );

    /// Elm float literal.
    pub const ELM_LITERAL: Self =
        NumberFormat(flags::REQUIRED_DIGITS | flags::NO_POSITIVE_MANTISSA_SIGN);
    /// Elm string-to-float conversion.
    pub const ELM_STRING: Self =
        NumberFormat(flags::REQUIRED_EXPONENT_DIGITS | flags::CASE_SENSITIVE_SPECIAL);

    /// Scala float literal.
    pub const SCALA_LITERAL: Self = NumberFormat(flags::REQUIRED_DIGITS | flags::NO_SPECIAL);
    /// Scala string-to-float conversion.
    pub const SCALA_STRING: Self =
        NumberFormat(flags::REQUIRED_EXPONENT_DIGITS | flags::CASE_SENSITIVE_SPECIAL);

    /// Elixir float literal.
    pub const ELIXIR_LITERAL: Self = pack(
        b'_',
        flags::REQUIRED_DIGITS
            | flags::NO_EXPONENT_WITHOUT_FRACTION
            | flags::NO_SPECIAL
            | flags::INTERNAL_DIGIT_SEPARATOR,
    );
    /// Elixir string-to-float conversion.
    pub const ELIXIR_STRING: Self = NumberFormat(
        flags::REQUIRED_DIGITS | flags::NO_EXPONENT_WITHOUT_FRACTION | flags::NO_SPECIAL,
    );

    /// FORTRAN float literal.
    pub const FORTRAN_LITERAL: Self =
        NumberFormat(flags::REQUIRED_EXPONENT_DIGITS | flags::NO_SPECIAL);
    /// FORTRAN string-to-float conversion.
    pub const FORTRAN_STRING: Self = NumberFormat(flags::REQUIRED_EXPONENT_DIGITS);

    /// D float literal.
    pub const D_LITERAL: Self = pack(
        b'_',
        flags::REQUIRED_EXPONENT_DIGITS
            | flags::NO_SPECIAL
            | flags::INTERNAL_DIGIT_SEPARATOR
            | flags::TRAILING_DIGIT_SEPARATOR
            | flags::CONSECUTIVE_DIGIT_SEPARATOR,
    );
    /// D string-to-float conversion.
    pub const D_STRING: Self = pack(
        b'_',
        flags::REQUIRED_EXPONENT_DIGITS
            | flags::INTEGER_INTERNAL_DIGIT_SEPARATOR
            | flags::FRACTION_INTERNAL_DIGIT_SEPARATOR
            | flags::INTEGER_TRAILING_DIGIT_SEPARATOR
            | flags::FRACTION_TRAILING_DIGIT_SEPARATOR,
    );

    /// CoffeeScript float literal.
    pub const COFFEESCRIPT_LITERAL: Self =
        NumberFormat(flags::REQUIRED_EXPONENT_DIGITS | flags::CASE_SENSITIVE_SPECIAL);
    /// CoffeeScript string-to-float conversion.
    pub const COFFEESCRIPT_STRING: Self = NumberFormat(flags::CASE_SENSITIVE_SPECIAL);

    /// COBOL float literal.
    pub const COBOL_LITERAL: Self = NumberFormat(
        flags::REQUIRED_FRACTION_DIGITS
            | flags::REQUIRED_EXPONENT_DIGITS
            | flags::NO_EXPONENT_WITHOUT_FRACTION
            | flags::NO_SPECIAL,
    );
    /// COBOL string-to-float conversion.
    pub const COBOL_STRING: Self =
        NumberFormat(flags::REQUIRED_EXPONENT_SIGN | flags::NO_SPECIAL);

    /// F# float literal.
    pub const FSHARP_LITERAL: Self = pack(
        b'_',
        flags::REQUIRED_INTEGER_DIGITS
            | flags::REQUIRED_EXPONENT_DIGITS
            | flags::CASE_SENSITIVE_SPECIAL
            | flags::INTERNAL_DIGIT_SEPARATOR
            | flags::CONSECUTIVE_DIGIT_SEPARATOR,
    );
    /// F# string-to-float conversion.
    pub const FSHARP_STRING: Self = pack(
        b'_',
        flags::REQUIRED_EXPONENT_DIGITS
            | flags::CASE_SENSITIVE_SPECIAL
            | flags::INTERNAL_DIGIT_SEPARATOR
            | flags::LEADING_DIGIT_SEPARATOR
            | flags::TRAILING_DIGIT_SEPARATOR
            | flags::CONSECUTIVE_DIGIT_SEPARATOR
            | flags::SPECIAL_DIGIT_SEPARATOR,
    );

    /// Visual Basic float literal.
    pub const VB_LITERAL: Self = NumberFormat(
        flags::REQUIRED_FRACTION_DIGITS | flags::REQUIRED_EXPONENT_DIGITS | flags::NO_SPECIAL,
    );
    /// Visual Basic string-to-float conversion.
    pub const VB_STRING: Self =
        NumberFormat(flags::REQUIRED_EXPONENT_DIGITS | flags::CASE_SENSITIVE_SPECIAL);

    /// OCaml float literal.
    pub const OCAML_LITERAL: Self = pack(
        b'_',
        flags::REQUIRED_INTEGER_DIGITS
            | flags::REQUIRED_EXPONENT_DIGITS
            | flags::NO_POSITIVE_MANTISSA_SIGN
            | flags::CASE_SENSITIVE_SPECIAL
            | flags::INTERNAL_DIGIT_SEPARATOR
            | flags::FRACTION_LEADING_DIGIT_SEPARATOR
            | flags::TRAILING_DIGIT_SEPARATOR
            | flags::CONSECUTIVE_DIGIT_SEPARATOR,
    );
    /// OCaml string-to-float conversion.
    pub const OCAML_STRING: Self = pack(
        b'_',
        flags::REQUIRED_EXPONENT_DIGITS
            | flags::INTERNAL_DIGIT_SEPARATOR
            | flags::LEADING_DIGIT_SEPARATOR
            | flags::TRAILING_DIGIT_SEPARATOR
            | flags::CONSECUTIVE_DIGIT_SEPARATOR
            | flags::SPECIAL_DIGIT_SEPARATOR,
    );

    /// Objective-C float literal.
    pub const OBJECTIVEC_LITERAL: Self =
        NumberFormat(flags::REQUIRED_EXPONENT_DIGITS | flags::NO_SPECIAL);
    /// Objective-C string-to-float conversion.
    pub const OBJECTIVEC_STRING: Self = Self::OBJECTIVEC_LITERAL;

    /// ReasonML float literal.
    pub const REASONML_LITERAL: Self = pack(
        b'_',
        flags::REQUIRED_INTEGER_DIGITS
            | flags::REQUIRED_EXPONENT_DIGITS
            | flags::CASE_SENSITIVE_SPECIAL
            | flags::INTERNAL_DIGIT_SEPARATOR
            | flags::FRACTION_LEADING_DIGIT_SEPARATOR
            | flags::TRAILING_DIGIT_SEPARATOR
            | flags::CONSECUTIVE_DIGIT_SEPARATOR,
    );
    /// ReasonML string-to-float conversion.
    pub const REASONML_STRING: Self = Self::OCAML_STRING;

    /// Octave float literal.
    pub const OCTAVE_LITERAL: Self = pack(
        b'_',
        flags::REQUIRED_EXPONENT_DIGITS
            | flags::CASE_SENSITIVE_SPECIAL
            | flags::INTERNAL_DIGIT_SEPARATOR
            | flags::FRACTION_LEADING_DIGIT_SEPARATOR
            | flags::TRAILING_DIGIT_SEPARATOR
            | flags::CONSECUTIVE_DIGIT_SEPARATOR,
    );
    /// Octave string-to-float conversion.
    pub const OCTAVE_STRING: Self = pack(
        b',',
        flags::REQUIRED_EXPONENT_DIGITS
            | flags::INTERNAL_DIGIT_SEPARATOR
            | flags::LEADING_DIGIT_SEPARATOR
            | flags::TRAILING_DIGIT_SEPARATOR
            | flags::CONSECUTIVE_DIGIT_SEPARATOR,
    );

    /// MATLAB float literal.
    pub const MATLAB_LITERAL: Self = Self::OCTAVE_LITERAL;
    /// MATLAB string-to-float conversion.
    pub const MATLAB_STRING: Self = Self::OCTAVE_STRING;

    /// Zig float literal.
    pub const ZIG_LITERAL: Self = NumberFormat(
        flags::REQUIRED_INTEGER_DIGITS
            | flags::NO_POSITIVE_MANTISSA_SIGN
            | flags::NO_SPECIAL,
    );
    /// Zig string-to-float conversion.
    pub const ZIG_STRING: Self = Self::PERMISSIVE;

    /// Sage float literal.
    pub const SAGE_LITERAL: Self =
        NumberFormat(flags::REQUIRED_EXPONENT_DIGITS | flags::CASE_SENSITIVE_SPECIAL);
    /// Sage string-to-float conversion.
    pub const SAGE_STRING: Self = pack(
        b'_',
        flags::REQUIRED_EXPONENT_DIGITS | flags::INTERNAL_DIGIT_SEPARATOR,
    );

    /// JSON number.
    pub const JSON: Self = NumberFormat(
        flags::REQUIRED_DIGITS | flags::NO_POSITIVE_MANTISSA_SIGN | flags::NO_SPECIAL,
    );
    /// TOML number.
    pub const TOML: Self = NumberFormat(
        flags::REQUIRED_DIGITS | flags::NO_SPECIAL | flags::INTERNAL_DIGIT_SEPARATOR,
    );
    /// YAML number.
    pub const YAML: Self = Self::JSON;
    /// XML float value.
    pub const XML: Self = NumberFormat(flags::CASE_SENSITIVE_SPECIAL);
    /// SQLite numeric literal.
    pub const SQLITE: Self = NumberFormat(flags::REQUIRED_EXPONENT_DIGITS | flags::NO_SPECIAL);
    /// PostgreSQL numeric literal.
    pub const POSTGRESQL: Self = Self::SQLITE;
    /// MySQL numeric literal.
    pub const MYSQL: Self = Self::SQLITE;
    /// MongoDB numeric value.
    pub const MONGODB: Self =
        NumberFormat(flags::REQUIRED_EXPONENT_DIGITS | flags::CASE_SENSITIVE_SPECIAL);

    // CONSTRUCTORS

    /// Returns a fresh [`NumberFormatBuilder`] with every rule disabled and
    /// no separator character.
    #[must_use]
    pub const fn builder() -> NumberFormatBuilder {
        NumberFormatBuilder::new()
    }

    /// The permissive format.
    ///
    /// No structural rule is enforced: digits with an optional sign, an
    /// optional fraction, and an optional exponent are accepted, with no
    /// digit separator.
    #[must_use]
    pub const fn permissive() -> Self {
        Self::PERMISSIVE
    }

    /// The standard format.
    ///
    /// What a conventional systems-language float parser expects: an
    /// exponent, when present, must have digits; everything else is
    /// permissive.
    #[must_use]
    pub const fn standard() -> Self {
        Self::STANDARD
    }

    /// A format that skips the given separator anywhere digits may occur.
    ///
    /// Permissive on every structural rule; intended for fast, lenient
    /// parsing of human-formatted input like `1_000_000`. Returns `None` if
    /// the byte cannot serve as a separator (a digit, sign, decimal point,
    /// or non-ASCII byte).
    #[must_use]
    pub fn ignore(digit_separator: u8) -> Option<Self> {
        if digit_separator == 0
            || digit_separator == b'.'
            || !flags::is_valid_digit_separator(digit_separator)
        {
            return None;
        }
        Some(pack(
            digit_separator,
            flags::DIGIT_SEPARATOR_FLAG_MASK,
        ))
    }

    // ACCESSORS

    /// The raw packed value.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// The grammar flags, with the separator byte masked off.
    #[must_use]
    pub const fn flags(self) -> Self {
        NumberFormat(self.0 & flags::FLAG_MASK)
    }

    /// The digit separator character, or 0 if none is set.
    #[must_use]
    pub const fn digit_separator(self) -> u8 {
        flags::digit_separator_from_flags(self.0)
    }

    /// Tests whether any flag in `mask` is set.
    #[must_use]
    pub const fn intersects(self, mask: Self) -> bool {
        self.0 & mask.0 != 0
    }

    /// The union of two flag sets. The separator byte of `self` wins if both
    /// carry one.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        if self.digit_separator() != 0 {
            NumberFormat(self.0 | other.flags().0)
        } else {
            NumberFormat(self.0 | other.0)
        }
    }

    /// Digits are required before the decimal point.
    #[must_use]
    pub const fn required_integer_digits(self) -> bool {
        self.intersects(Self::REQUIRED_INTEGER_DIGITS)
    }

    /// Digits are required after the decimal point.
    #[must_use]
    pub const fn required_fraction_digits(self) -> bool {
        self.intersects(Self::REQUIRED_FRACTION_DIGITS)
    }

    /// Digits are required after the exponent character.
    #[must_use]
    pub const fn required_exponent_digits(self) -> bool {
        self.intersects(Self::REQUIRED_EXPONENT_DIGITS)
    }

    /// Digits are required around any control character.
    #[must_use]
    pub const fn required_digits(self) -> bool {
        self.intersects(Self::REQUIRED_DIGITS)
    }

    /// A positive mantissa sign is not allowed.
    #[must_use]
    pub const fn no_positive_mantissa_sign(self) -> bool {
        self.intersects(Self::NO_POSITIVE_MANTISSA_SIGN)
    }

    /// A mantissa sign is required.
    #[must_use]
    pub const fn required_mantissa_sign(self) -> bool {
        self.intersects(Self::REQUIRED_MANTISSA_SIGN)
    }

    /// Exponent notation is not allowed.
    #[must_use]
    pub const fn no_exponent_notation(self) -> bool {
        self.intersects(Self::NO_EXPONENT_NOTATION)
    }

    /// A positive exponent sign is not allowed.
    #[must_use]
    pub const fn no_positive_exponent_sign(self) -> bool {
        self.intersects(Self::NO_POSITIVE_EXPONENT_SIGN)
    }

    /// An exponent sign is required.
    #[must_use]
    pub const fn required_exponent_sign(self) -> bool {
        self.intersects(Self::REQUIRED_EXPONENT_SIGN)
    }

    /// An exponent may not appear without a fraction.
    #[must_use]
    pub const fn no_exponent_without_fraction(self) -> bool {
        self.intersects(Self::NO_EXPONENT_WITHOUT_FRACTION)
    }

    /// Special values are not allowed.
    #[must_use]
    pub const fn no_special(self) -> bool {
        self.intersects(Self::NO_SPECIAL)
    }

    /// Special value spellings are case-sensitive.
    #[must_use]
    pub const fn case_sensitive_special(self) -> bool {
        self.intersects(Self::CASE_SENSITIVE_SPECIAL)
    }

    /// Integer leading zeros are not allowed.
    #[must_use]
    pub const fn no_integer_leading_zeros(self) -> bool {
        self.intersects(Self::NO_INTEGER_LEADING_ZEROS)
    }

    /// Float leading zeros are not allowed.
    #[must_use]
    pub const fn no_float_leading_zeros(self) -> bool {
        self.intersects(Self::NO_FLOAT_LEADING_ZEROS)
    }

    /// Separators are allowed between integer digits.
    #[must_use]
    pub const fn integer_internal_digit_separator(self) -> bool {
        self.intersects(Self::INTEGER_INTERNAL_DIGIT_SEPARATOR)
    }

    /// Separators are allowed before integer digits.
    #[must_use]
    pub const fn integer_leading_digit_separator(self) -> bool {
        self.intersects(Self::INTEGER_LEADING_DIGIT_SEPARATOR)
    }

    /// Separators are allowed after integer digits.
    #[must_use]
    pub const fn integer_trailing_digit_separator(self) -> bool {
        self.intersects(Self::INTEGER_TRAILING_DIGIT_SEPARATOR)
    }

    /// Consecutive separators are allowed between integer digits.
    #[must_use]
    pub const fn integer_consecutive_digit_separator(self) -> bool {
        self.intersects(Self::INTEGER_CONSECUTIVE_DIGIT_SEPARATOR)
    }

    /// Separators are allowed between fraction digits.
    #[must_use]
    pub const fn fraction_internal_digit_separator(self) -> bool {
        self.intersects(Self::FRACTION_INTERNAL_DIGIT_SEPARATOR)
    }

    /// Separators are allowed before fraction digits.
    #[must_use]
    pub const fn fraction_leading_digit_separator(self) -> bool {
        self.intersects(Self::FRACTION_LEADING_DIGIT_SEPARATOR)
    }

    /// Separators are allowed after fraction digits.
    #[must_use]
    pub const fn fraction_trailing_digit_separator(self) -> bool {
        self.intersects(Self::FRACTION_TRAILING_DIGIT_SEPARATOR)
    }

    /// Consecutive separators are allowed between fraction digits.
    #[must_use]
    pub const fn fraction_consecutive_digit_separator(self) -> bool {
        self.intersects(Self::FRACTION_CONSECUTIVE_DIGIT_SEPARATOR)
    }

    /// Separators are allowed between exponent digits.
    #[must_use]
    pub const fn exponent_internal_digit_separator(self) -> bool {
        self.intersects(Self::EXPONENT_INTERNAL_DIGIT_SEPARATOR)
    }

    /// Separators are allowed before exponent digits.
    #[must_use]
    pub const fn exponent_leading_digit_separator(self) -> bool {
        self.intersects(Self::EXPONENT_LEADING_DIGIT_SEPARATOR)
    }

    /// Separators are allowed after exponent digits.
    #[must_use]
    pub const fn exponent_trailing_digit_separator(self) -> bool {
        self.intersects(Self::EXPONENT_TRAILING_DIGIT_SEPARATOR)
    }

    /// Consecutive separators are allowed between exponent digits.
    #[must_use]
    pub const fn exponent_consecutive_digit_separator(self) -> bool {
        self.intersects(Self::EXPONENT_CONSECUTIVE_DIGIT_SEPARATOR)
    }

    /// Separators are allowed inside special value spellings.
    #[must_use]
    pub const fn special_digit_separator(self) -> bool {
        self.intersects(Self::SPECIAL_DIGIT_SEPARATOR)
    }

    /// Any internal separator placement is allowed.
    #[must_use]
    pub const fn internal_digit_separator(self) -> bool {
        self.intersects(Self::INTERNAL_DIGIT_SEPARATOR)
    }

    /// Any leading separator placement is allowed.
    #[must_use]
    pub const fn leading_digit_separator(self) -> bool {
        self.intersects(Self::LEADING_DIGIT_SEPARATOR)
    }

    /// Any trailing separator placement is allowed.
    #[must_use]
    pub const fn trailing_digit_separator(self) -> bool {
        self.intersects(Self::TRAILING_DIGIT_SEPARATOR)
    }

    /// Any consecutive separator placement is allowed.
    #[must_use]
    pub const fn consecutive_digit_separator(self) -> bool {
        self.intersects(Self::CONSECUTIVE_DIGIT_SEPARATOR)
    }

    /// Any separator placement flag at all is set.
    #[must_use]
    pub const fn has_digit_separator_flags(self) -> bool {
        self.0 & flags::DIGIT_SEPARATOR_FLAG_MASK != 0
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::PERMISSIVE
    }
}

/// Builder for a [`NumberFormat`].
///
/// Setters store their field without validation; all checking is deferred to
/// [`build`](Self::build), which returns `None` for contradictory
/// configurations rather than panicking. Builders are single-owner values:
/// construct, chain setters, build, discard.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct NumberFormatBuilder {
    digit_separator: u8,
    required_integer_digits: bool,
    required_fraction_digits: bool,
    required_exponent_digits: bool,
    no_positive_mantissa_sign: bool,
    required_mantissa_sign: bool,
    no_exponent_notation: bool,
    no_positive_exponent_sign: bool,
    required_exponent_sign: bool,
    no_exponent_without_fraction: bool,
    no_special: bool,
    case_sensitive_special: bool,
    no_integer_leading_zeros: bool,
    no_float_leading_zeros: bool,
    integer_internal_digit_separator: bool,
    fraction_internal_digit_separator: bool,
    exponent_internal_digit_separator: bool,
    integer_leading_digit_separator: bool,
    fraction_leading_digit_separator: bool,
    exponent_leading_digit_separator: bool,
    integer_trailing_digit_separator: bool,
    fraction_trailing_digit_separator: bool,
    exponent_trailing_digit_separator: bool,
    integer_consecutive_digit_separator: bool,
    fraction_consecutive_digit_separator: bool,
    exponent_consecutive_digit_separator: bool,
    special_digit_separator: bool,
}

macro_rules! builder_setter {
    ($(#[$doc:meta])* $field:ident) => {
        $(#[$doc])*
        #[must_use]
        pub const fn $field(mut self, $field: bool) -> Self {
            self.$field = $field;
            self
        }
    };
}

impl NumberFormatBuilder {
    /// Creates a builder with every rule disabled and no separator.
    #[must_use]
    pub const fn new() -> Self {
        NumberFormatBuilder {
            digit_separator: 0,
            required_integer_digits: false,
            required_fraction_digits: false,
            required_exponent_digits: false,
            no_positive_mantissa_sign: false,
            required_mantissa_sign: false,
            no_exponent_notation: false,
            no_positive_exponent_sign: false,
            required_exponent_sign: false,
            no_exponent_without_fraction: false,
            no_special: false,
            case_sensitive_special: false,
            no_integer_leading_zeros: false,
            no_float_leading_zeros: false,
            integer_internal_digit_separator: false,
            fraction_internal_digit_separator: false,
            exponent_internal_digit_separator: false,
            integer_leading_digit_separator: false,
            fraction_leading_digit_separator: false,
            exponent_leading_digit_separator: false,
            integer_trailing_digit_separator: false,
            fraction_trailing_digit_separator: false,
            exponent_trailing_digit_separator: false,
            integer_consecutive_digit_separator: false,
            fraction_consecutive_digit_separator: false,
            exponent_consecutive_digit_separator: false,
            special_digit_separator: false,
        }
    }

    /// Sets the digit separator character.
    ///
    /// Inert unless at least one placement rule is also enabled.
    #[must_use]
    pub const fn digit_separator(mut self, digit_separator: u8) -> Self {
        self.digit_separator = digit_separator;
        self
    }

    builder_setter!(
        /// Requires digits before the decimal point.
        required_integer_digits
    );
    builder_setter!(
        /// Requires digits after the decimal point.
        required_fraction_digits
    );
    builder_setter!(
        /// Requires digits after the exponent character.
        required_exponent_digits
    );
    builder_setter!(
        /// Forbids a positive mantissa sign.
        no_positive_mantissa_sign
    );
    builder_setter!(
        /// Requires a mantissa sign.
        required_mantissa_sign
    );
    builder_setter!(
        /// Forbids exponent notation.
        no_exponent_notation
    );
    builder_setter!(
        /// Forbids a positive exponent sign.
        no_positive_exponent_sign
    );
    builder_setter!(
        /// Requires an exponent sign.
        required_exponent_sign
    );
    builder_setter!(
        /// Forbids an exponent without a fraction.
        no_exponent_without_fraction
    );
    builder_setter!(
        /// Forbids special (non-finite) values.
        no_special
    );
    builder_setter!(
        /// Makes special value spellings case-sensitive.
        case_sensitive_special
    );
    builder_setter!(
        /// Forbids integer leading zeros.
        no_integer_leading_zeros
    );
    builder_setter!(
        /// Forbids float leading zeros.
        no_float_leading_zeros
    );
    builder_setter!(
        /// Allows separators between integer digits.
        integer_internal_digit_separator
    );
    builder_setter!(
        /// Allows separators between fraction digits.
        fraction_internal_digit_separator
    );
    builder_setter!(
        /// Allows separators between exponent digits.
        exponent_internal_digit_separator
    );
    builder_setter!(
        /// Allows separators before integer digits.
        integer_leading_digit_separator
    );
    builder_setter!(
        /// Allows separators before fraction digits.
        fraction_leading_digit_separator
    );
    builder_setter!(
        /// Allows separators before exponent digits.
        exponent_leading_digit_separator
    );
    builder_setter!(
        /// Allows separators after integer digits.
        integer_trailing_digit_separator
    );
    builder_setter!(
        /// Allows separators after fraction digits.
        fraction_trailing_digit_separator
    );
    builder_setter!(
        /// Allows separators after exponent digits.
        exponent_trailing_digit_separator
    );
    builder_setter!(
        /// Allows consecutive separators between integer digits.
        integer_consecutive_digit_separator
    );
    builder_setter!(
        /// Allows consecutive separators between fraction digits.
        fraction_consecutive_digit_separator
    );
    builder_setter!(
        /// Allows consecutive separators between exponent digits.
        exponent_consecutive_digit_separator
    );
    builder_setter!(
        /// Allows separators inside special value spellings.
        special_digit_separator
    );

    /// Validates the accumulated configuration and packs it into a
    /// [`NumberFormat`].
    ///
    /// Returns `None` when a separator placement rule is enabled but the
    /// separator character is absent, or cannot legally serve as a separator.
    /// A separator character with no placement rules is legal but inert.
    #[must_use]
    pub fn build(self) -> Option<NumberFormat> {
        let mut bits = 0u64;
        let mut add = |enabled: bool, flag: u64| {
            if enabled {
                bits |= flag;
            }
        };
        add(self.required_integer_digits, flags::REQUIRED_INTEGER_DIGITS);
        add(self.required_fraction_digits, flags::REQUIRED_FRACTION_DIGITS);
        add(self.required_exponent_digits, flags::REQUIRED_EXPONENT_DIGITS);
        add(self.no_positive_mantissa_sign, flags::NO_POSITIVE_MANTISSA_SIGN);
        add(self.required_mantissa_sign, flags::REQUIRED_MANTISSA_SIGN);
        add(self.no_exponent_notation, flags::NO_EXPONENT_NOTATION);
        add(self.no_positive_exponent_sign, flags::NO_POSITIVE_EXPONENT_SIGN);
        add(self.required_exponent_sign, flags::REQUIRED_EXPONENT_SIGN);
        add(self.no_exponent_without_fraction, flags::NO_EXPONENT_WITHOUT_FRACTION);
        add(self.no_special, flags::NO_SPECIAL);
        add(self.case_sensitive_special, flags::CASE_SENSITIVE_SPECIAL);
        add(self.no_integer_leading_zeros, flags::NO_INTEGER_LEADING_ZEROS);
        add(self.no_float_leading_zeros, flags::NO_FLOAT_LEADING_ZEROS);
        add(self.integer_internal_digit_separator, flags::INTEGER_INTERNAL_DIGIT_SEPARATOR);
        add(self.fraction_internal_digit_separator, flags::FRACTION_INTERNAL_DIGIT_SEPARATOR);
        add(self.exponent_internal_digit_separator, flags::EXPONENT_INTERNAL_DIGIT_SEPARATOR);
        add(self.integer_leading_digit_separator, flags::INTEGER_LEADING_DIGIT_SEPARATOR);
        add(self.fraction_leading_digit_separator, flags::FRACTION_LEADING_DIGIT_SEPARATOR);
        add(self.exponent_leading_digit_separator, flags::EXPONENT_LEADING_DIGIT_SEPARATOR);
        add(self.integer_trailing_digit_separator, flags::INTEGER_TRAILING_DIGIT_SEPARATOR);
        add(self.fraction_trailing_digit_separator, flags::FRACTION_TRAILING_DIGIT_SEPARATOR);
        add(self.exponent_trailing_digit_separator, flags::EXPONENT_TRAILING_DIGIT_SEPARATOR);
        add(
            self.integer_consecutive_digit_separator,
            flags::INTEGER_CONSECUTIVE_DIGIT_SEPARATOR,
        );
        add(
            self.fraction_consecutive_digit_separator,
            flags::FRACTION_CONSECUTIVE_DIGIT_SEPARATOR,
        );
        add(
            self.exponent_consecutive_digit_separator,
            flags::EXPONENT_CONSECUTIVE_DIGIT_SEPARATOR,
        );
        add(self.special_digit_separator, flags::SPECIAL_DIGIT_SEPARATOR);

        if bits & flags::DIGIT_SEPARATOR_FLAG_MASK != 0
            && (self.digit_separator == 0
                || self.digit_separator == b'.'
                || !flags::is_valid_digit_separator(self.digit_separator))
        {
            return None;
        }
        Some(pack(self.digit_separator, bits))
    }
}
