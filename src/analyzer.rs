//! Single-pass analysis of numeric strings.
//!
//! The analyzer validates `[+-]?[0-9a-z]+(\.[0-9a-z]+)?` and records where the
//! significant digits of the integer and fraction parts begin and end. It knows
//! nothing about the token layout; see [`crate::encoder`] for that.

use tracing::trace;

use crate::alphabet;
use crate::error::{EncodeError, EncodeResult};

const MINUS: u8 = b'-';
const PLUS: u8 = b'+';
const DECIMAL_POINT: u8 = b'.';
const ZERO: u8 = b'0';

/// Outcome of analyzing a numeric string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Analysis<'a> {
    /// The input was the empty string.
    Empty,
    /// The input denotes zero, whatever its sign or padding.
    Zero,
    /// A non-zero number.
    Number(NumberDescriptor<'a>),
}

/// Spans of a non-zero number over the analyzed input.
///
/// Offsets are byte offsets into the input and every span is half-open. The
/// integer span starts after the leading zeros and is empty when the magnitude is
/// below one; in that case the fraction is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberDescriptor<'a> {
    input: &'a str,
    positive: bool,
    int_start: usize,
    int_significant_end: usize,
    int_end: usize,
    fraction: Option<FractionSpan>,
}

/// Fraction part of a number with at least one non-zero digit after the point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FractionSpan {
    /// Zeros between the decimal point and the first significant digit.
    pub leading_zeros: usize,
    /// Offset of the first significant fraction digit.
    pub significant_start: usize,
    /// End of the fraction after its trailing zeros are trimmed.
    pub end: usize,
}

impl<'a> NumberDescriptor<'a> {
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.positive
    }

    /// `true` when `|value| >= 1`.
    #[must_use]
    pub const fn has_integer_part(&self) -> bool {
        self.int_end > self.int_start
    }

    /// Integer digits without leading zeros, trailing zeros included.
    #[must_use]
    pub fn integer_digits(&self) -> &'a str {
        &self.input[self.int_start..self.int_end]
    }

    /// Integer digits without leading or trailing zeros.
    #[must_use]
    pub fn integer_significant_digits(&self) -> &'a str {
        &self.input[self.int_start..self.int_significant_end]
    }

    #[must_use]
    pub const fn fraction(&self) -> Option<FractionSpan> {
        self.fraction
    }

    /// Number of zeros right after the decimal point, if there is a non-zero fraction.
    #[must_use]
    pub fn fraction_leading_zeros(&self) -> Option<usize> {
        self.fraction.map(|f| f.leading_zeros)
    }

    /// The significant digit stream, as two consecutive pieces.
    ///
    /// The stream is the integer digits followed by the fraction digits, with the
    /// leading zeros of the whole stream removed and its trailing zeros trimmed.
    /// Fraction leading zeros stay in the stream when an integer part precedes them.
    #[must_use]
    pub fn significant_digits(&self) -> (&'a str, &'a str) {
        match (self.has_integer_part(), self.fraction) {
            (true, Some(f)) => (
                self.integer_digits(),
                &self.input[f.significant_start - f.leading_zeros..f.end],
            ),
            (true, None) => (self.integer_significant_digits(), ""),
            (false, Some(f)) => ("", &self.input[f.significant_start..f.end]),
            // Rejected by `analyze`, which reports such inputs as zero.
            (false, None) => ("", ""),
        }
    }
}

/// Analyze a numeric string in a single left-to-right pass.
///
/// # Errors
///
/// Returns [`EncodeError`] when the input does not match
/// `[+-]?[0-9a-z]+(\.[0-9a-z]+)?`.
pub fn analyze(input: &str) -> EncodeResult<Analysis<'_>> {
    let bytes = input.as_bytes();
    let len = bytes.len();
    if len == 0 {
        return Ok(Analysis::Empty);
    }

    let mut i = 0;
    let positive = match bytes[0] {
        MINUS => {
            i += 1;
            false
        }
        PLUS => {
            i += 1;
            true
        }
        _ => true,
    };
    if i >= len {
        trace!(input, "sign without digits");
        return Err(EncodeError::SignWithoutDigits);
    }
    if bytes[i] == DECIMAL_POINT {
        trace!(input, "missing integer part");
        return Err(EncodeError::MissingIntegerPart);
    }

    while i < len && bytes[i] == ZERO {
        i += 1;
    }

    let int_start = i;
    let mut trailing_zeros = 0;
    while i < len && bytes[i] != DECIMAL_POINT {
        match bytes[i] {
            ZERO => trailing_zeros += 1,
            b if alphabet::is_digit(b) => trailing_zeros = 0,
            _ => return Err(invalid_character(input, i)),
        }
        i += 1;
    }
    let int_end = i;
    let int_significant_end = int_end - trailing_zeros;

    let fraction = if i < len {
        // Skip the decimal point
        i += 1;
        if i >= len {
            trace!(input, "empty fraction");
            return Err(EncodeError::EmptyFraction);
        }
        scan_fraction(input, i)?
    } else {
        None
    };

    if int_start == int_end && fraction.is_none() {
        return Ok(Analysis::Zero);
    }

    Ok(Analysis::Number(NumberDescriptor {
        input,
        positive,
        int_start,
        int_significant_end,
        int_end,
        fraction,
    }))
}

/// Scan the fraction starting right after the decimal point.
///
/// Returns `None` when every fraction digit is zero.
fn scan_fraction(input: &str, start: usize) -> EncodeResult<Option<FractionSpan>> {
    let bytes = input.as_bytes();
    let len = bytes.len();

    let mut i = start;
    while i < len && bytes[i] == ZERO {
        i += 1;
    }
    if i >= len {
        return Ok(None);
    }

    let significant_start = i;
    let mut trailing_zeros = 0;
    while i < len {
        match bytes[i] {
            ZERO => trailing_zeros += 1,
            b if alphabet::is_digit(b) => trailing_zeros = 0,
            _ => return Err(invalid_character(input, i)),
        }
        i += 1;
    }

    Ok(Some(FractionSpan {
        leading_zeros: significant_start - start,
        significant_start,
        end: len - trailing_zeros,
    }))
}

/// Everything before `position` is ASCII, so it is always a char boundary.
fn invalid_character(input: &str, position: usize) -> EncodeError {
    let found = input[position..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
    trace!(input, position, ?found, "invalid character");
    EncodeError::InvalidCharacter { found, position }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(input: &str) -> NumberDescriptor<'_> {
        match analyze(input).unwrap() {
            Analysis::Number(d) => d,
            other => panic!("expected a number for {input:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(analyze("").unwrap(), Analysis::Empty);
    }

    #[test]
    fn test_zero_forms() {
        for input in ["0", "+0", "-0", "000", "+000", "-000", "0.0", "000.0000", "-0.000"] {
            assert_eq!(analyze(input).unwrap(), Analysis::Zero, "{input}");
        }
    }

    #[test]
    fn test_integer_spans() {
        let d = number("+00000123000");
        assert!(d.is_positive());
        assert!(d.has_integer_part());
        assert_eq!(d.integer_digits(), "123000");
        assert_eq!(d.integer_significant_digits(), "123");
        assert_eq!(d.fraction(), None);
        assert_eq!(d.significant_digits(), ("123", ""));
    }

    #[test]
    fn test_fraction_spans() {
        let d = number("-00054321000.00012345000");
        assert!(!d.is_positive());
        assert_eq!(d.integer_digits(), "54321000");
        assert_eq!(d.fraction_leading_zeros(), Some(3));
        assert_eq!(d.significant_digits(), ("54321000", "00012345"));
    }

    #[test]
    fn test_pure_fraction() {
        let d = number("0.0012");
        assert!(!d.has_integer_part());
        assert_eq!(d.fraction_leading_zeros(), Some(2));
        assert_eq!(d.significant_digits(), ("", "12"));

        let d = number("000.120");
        assert_eq!(d.fraction_leading_zeros(), Some(0));
        assert_eq!(d.significant_digits(), ("", "12"));
    }

    #[test]
    fn test_all_zero_fraction_is_integer() {
        let d = number("1200.000");
        assert_eq!(d.fraction(), None);
        assert_eq!(d.significant_digits(), ("12", ""));
    }

    #[test]
    fn test_base36_digits() {
        let d = number("cowboy.hat");
        assert_eq!(d.integer_digits(), "cowboy");
        assert_eq!(d.significant_digits(), ("cowboy", "hat"));
    }

    #[test]
    fn test_rejections() {
        assert_eq!(analyze("-"), Err(EncodeError::SignWithoutDigits));
        assert_eq!(analyze("+"), Err(EncodeError::SignWithoutDigits));
        assert_eq!(analyze("."), Err(EncodeError::MissingIntegerPart));
        assert_eq!(analyze("-.5"), Err(EncodeError::MissingIntegerPart));
        assert_eq!(analyze("1."), Err(EncodeError::EmptyFraction));
        assert_eq!(
            analyze("1.2.3"),
            Err(EncodeError::InvalidCharacter {
                found: '.',
                position: 3
            })
        );
        assert_eq!(
            analyze("12A"),
            Err(EncodeError::InvalidCharacter {
                found: 'A',
                position: 2
            })
        );
        assert_eq!(
            analyze("--1"),
            Err(EncodeError::InvalidCharacter {
                found: '-',
                position: 1
            })
        );
        assert_eq!(
            analyze("0.00é"),
            Err(EncodeError::InvalidCharacter {
                found: 'é',
                position: 4
            })
        );
        assert!(analyze(" 1").is_err());
        assert!(analyze("1 ").is_err());
    }
}
