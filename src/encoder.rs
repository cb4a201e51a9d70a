//! Encoding logic for order-preserving number tokens
//!
//! A token is laid out as `header`, `magnitude digit`, `significant digits` and,
//! for negative values only, a terminator:
//!
//! ```text
//!  -12.5   ->  3 x y x u ~
//!  -0.012  ->  4 1 y x ~
//!   0      ->  5
//!   0.012  ->  6 y 1 2
//!   12.5   ->  7 2 1 2 5
//! ```

use tracing::debug;

use crate::alphabet;
use crate::analyzer::{analyze, Analysis, NumberDescriptor};
use crate::error::{EncodeError, EncodeResult};
use crate::token::Class;

/// Sorts below every token the encoder can produce.
pub const LESS_THAN_ANY: &str = "2";

/// Sorts above every token the encoder can produce.
pub const GREATER_THAN_ANY: &str = "8";

/// The whole token for zero.
pub const ZERO_TOKEN: &str = "5";

/// Closes every negative token; sorts above every alphabet digit.
pub const TERMINATOR: u8 = b'~';

/// Longest integer part the magnitude digit can describe.
pub const MAX_INTEGER_DIGITS: usize = 35;

/// Most zeros allowed between the decimal point and the first significant digit.
pub const MAX_FRACTION_LEADING_ZEROS: usize = 35;

/// Magnitude of a non-zero number, as carried by the magnitude digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Magnitude {
    /// `|value| >= 1`, with this many integer digits.
    Integer(u8),
    /// `|value| < 1`, with this many zeros after the decimal point.
    Fraction(u8),
}

impl Magnitude {
    /// # Errors
    ///
    /// Returns [`EncodeError::IntegerTooLong`] above [`MAX_INTEGER_DIGITS`].
    #[allow(clippy::cast_possible_truncation)]
    pub fn integer(digit_count: usize) -> EncodeResult<Self> {
        if digit_count > MAX_INTEGER_DIGITS {
            debug!(digit_count, "integer part too long for a token");
            return Err(EncodeError::IntegerTooLong(digit_count));
        }
        Ok(Self::Integer(digit_count as u8))
    }

    /// # Errors
    ///
    /// Returns [`EncodeError::FractionTooSmall`] above [`MAX_FRACTION_LEADING_ZEROS`].
    #[allow(clippy::cast_possible_truncation)]
    pub fn fraction(leading_zeros: usize) -> EncodeResult<Self> {
        if leading_zeros > MAX_FRACTION_LEADING_ZEROS {
            debug!(leading_zeros, "fraction too small for a token");
            return Err(EncodeError::FractionTooSmall(leading_zeros));
        }
        Ok(Self::Fraction(leading_zeros as u8))
    }

    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Ordinal written as the magnitude digit, before sign-dependent mapping.
    ///
    /// Fewer leading zeros means a larger fraction, hence the subtraction.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Integer(count) => count,
            Self::Fraction(zeros) => alphabet::MAX_ORDINAL - zeros,
        }
    }
}

/// Return the header byte of a class.
#[must_use]
pub const fn encode_class_byte(class: Class) -> u8 {
    match class {
        Class::NegativeLarge => b'3',
        Class::NegativeSmall => b'4',
        Class::Zero => b'5',
        Class::PositiveSmall => b'6',
        Class::PositiveLarge => b'7',
    }
}

/// Encode a numeric string
///
/// # Errors
///
/// Returns [`EncodeError`] if the input is malformed or its magnitude does not fit
/// in a token.
pub fn encode_str(input: &str) -> EncodeResult<String> {
    match analyze(input)? {
        Analysis::Empty => Ok(String::new()),
        Analysis::Zero => Ok(ZERO_TOKEN.to_owned()),
        Analysis::Number(descriptor) => encode_descriptor(&descriptor),
    }
}

/// Encode an analyzed non-zero number
///
/// # Errors
///
/// Returns [`EncodeError`] if the magnitude does not fit in a token.
pub fn encode_descriptor(descriptor: &NumberDescriptor<'_>) -> EncodeResult<String> {
    let magnitude = if descriptor.has_integer_part() {
        Magnitude::integer(descriptor.integer_digits().len())?
    } else if let Some(zeros) = descriptor.fraction_leading_zeros() {
        Magnitude::fraction(zeros)?
    } else {
        return Ok(ZERO_TOKEN.to_owned());
    };
    Ok(encode_from_parts(
        descriptor.is_positive(),
        magnitude,
        descriptor.significant_digits(),
    ))
}

/// Encode an integer given as a sign and its digits.
///
/// `digits` must only contain alphabet digits; leading and trailing zeros are
/// allowed. Shared by the mixed-text scanner and the fixed-width conversions.
pub(crate) fn encode_integer_digits(positive: bool, digits: &str) -> EncodeResult<String> {
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(ZERO_TOKEN.to_owned());
    }
    let magnitude = Magnitude::integer(digits.len())?;
    Ok(encode_from_parts(
        positive,
        magnitude,
        (digits.trim_end_matches('0'), ""),
    ))
}

/// Encode from semantic parts
///
/// The significand is given as two consecutive pieces so callers can pass the
/// integer and fraction spans of their input without concatenating them. It must
/// be non-empty, free of leading and trailing zeros, and contain only alphabet
/// digits.
#[must_use]
pub fn encode_from_parts(positive: bool, magnitude: Magnitude, significand: (&str, &str)) -> String {
    let (head, tail) = significand;
    let class = Class::of(positive, magnitude.is_integer());

    // header + magnitude digit + digits + terminator
    let mut out = String::with_capacity(head.len() + tail.len() + 3);
    out.push(char::from(encode_class_byte(class)));

    if positive {
        out.push(char::from(alphabet::digit(magnitude.ordinal())));
        out.push_str(head);
        out.push_str(tail);
    } else {
        out.push(char::from(alphabet::reversed_digit(magnitude.ordinal())));
        // Digits were validated upstream, so nothing is filtered out here
        out.extend(
            head.bytes()
                .chain(tail.bytes())
                .filter_map(alphabet::complement)
                .map(char::from),
        );
        out.push(char::from(TERMINATOR));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_zero_and_empty() {
        assert_eq!(encode_str("").unwrap(), "");
        assert_eq!(encode_str("0").unwrap(), ZERO_TOKEN);
        assert_eq!(encode_str("-000.000").unwrap(), ZERO_TOKEN);
    }

    #[test]
    fn test_class_bytes_are_ordered() {
        let bytes = [
            LESS_THAN_ANY.as_bytes()[0],
            encode_class_byte(Class::NegativeLarge),
            encode_class_byte(Class::NegativeSmall),
            encode_class_byte(Class::Zero),
            encode_class_byte(Class::PositiveSmall),
            encode_class_byte(Class::PositiveLarge),
            GREATER_THAN_ANY.as_bytes()[0],
        ];
        assert!(bytes.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ZERO_TOKEN.as_bytes(), &[encode_class_byte(Class::Zero)]);
    }

    #[test]
    fn test_terminator_sorts_after_digits() {
        assert!(alphabet::DIGITS.iter().all(|&d| d < TERMINATOR));
    }

    #[test]
    fn test_magnitude_ordinals() {
        assert_eq!(Magnitude::integer(1).unwrap().ordinal(), 1);
        assert_eq!(Magnitude::integer(35).unwrap().ordinal(), 35);
        assert_eq!(Magnitude::fraction(0).unwrap().ordinal(), 35);
        assert_eq!(Magnitude::fraction(2).unwrap().ordinal(), 33);
        assert_eq!(Magnitude::fraction(35).unwrap().ordinal(), 0);
        assert_eq!(Magnitude::integer(36), Err(EncodeError::IntegerTooLong(36)));
        assert_eq!(
            Magnitude::fraction(36),
            Err(EncodeError::FractionTooSmall(36))
        );
    }

    #[test]
    fn test_encode_from_parts() {
        // 1200 = 4 integer digits, significand "12"
        let e = encode_from_parts(true, Magnitude::Integer(4), ("12", ""));
        assert_eq!(e, "7412");

        // -1200
        let e = encode_from_parts(false, Magnitude::Integer(4), ("12", ""));
        assert_eq!(e, "3vyx~");

        // 0.0012
        let e = encode_from_parts(true, Magnitude::Fraction(2), ("", "12"));
        assert_eq!(e, "6x12");

        // -0.0012
        let e = encode_from_parts(false, Magnitude::Fraction(2), ("", "12"));
        assert_eq!(e, "42yx~");
    }

    #[test]
    fn test_encode_integer_digits() {
        assert_eq!(encode_integer_digits(true, "300").unwrap(), "733");
        assert_eq!(encode_integer_digits(true, "0042").unwrap(), "7242");
        assert_eq!(encode_integer_digits(false, "1").unwrap(), "3yy~");
        assert_eq!(encode_integer_digits(true, "000").unwrap(), ZERO_TOKEN);
        assert_eq!(encode_integer_digits(false, "0").unwrap(), ZERO_TOKEN);
        assert_eq!(
            encode_integer_digits(true, &"9".repeat(36)),
            Err(EncodeError::IntegerTooLong(36))
        );
    }

    #[test]
    fn test_integer_path_matches_string_path() {
        for digits in ["1", "10", "1200", "54321", "100000000000000000000"] {
            assert_eq!(
                encode_integer_digits(true, digits).unwrap(),
                encode_str(digits).unwrap()
            );
            assert_eq!(
                encode_integer_digits(false, digits).unwrap(),
                encode_str(&format!("-{digits}")).unwrap()
            );
        }
    }

    #[test]
    fn test_magnitude_limits() {
        let longest = "1".repeat(MAX_INTEGER_DIGITS);
        assert!(encode_str(&longest).is_ok());
        assert_eq!(
            encode_str(&format!("{longest}1")),
            Err(EncodeError::IntegerTooLong(36))
        );

        let smallest = format!("0.{}1", "0".repeat(MAX_FRACTION_LEADING_ZEROS));
        assert_eq!(encode_str(&smallest).unwrap(), "601");
        let too_small = format!("0.{}1", "0".repeat(MAX_FRACTION_LEADING_ZEROS + 1));
        assert_eq!(
            encode_str(&too_small),
            Err(EncodeError::FractionTooSmall(36))
        );
    }
}
