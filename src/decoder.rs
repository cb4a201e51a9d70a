//! Decoding logic for order-preserving number tokens

use std::fmt;
use std::fmt::Write as _;

use tracing::trace;

use crate::alphabet;
use crate::encoder::{Magnitude, TERMINATOR};
use crate::error::{DecodeError, DecodeResult};
use crate::token::Class;

/// Decoded token with semantic fields (for when field access is needed)
///
/// `Display` renders the normalized number: no sign for positive values, no
/// redundant zeros, and a fraction only when one is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedNumber {
    pub positive: bool,
    pub magnitude: Magnitude,
    /// Significant digits in the forward alphabet, complement already undone.
    pub significand: String,
}

/// Represents the three shapes a token can take
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedValue {
    Empty,
    Zero,
    Regular(DecodedNumber),
}

/// Recover the class from a header byte.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidHeader`] for bytes outside `3..=7`.
pub fn decode_class_byte(byte: u8) -> DecodeResult<Class> {
    match byte {
        b'3' => Ok(Class::NegativeLarge),
        b'4' => Ok(Class::NegativeSmall),
        b'5' => Ok(Class::Zero),
        b'6' => Ok(Class::PositiveSmall),
        b'7' => Ok(Class::PositiveLarge),
        other => Err(DecodeError::InvalidHeader(other)),
    }
}

/// Decode a token to semantic parts
///
/// # Errors
///
/// Returns [`DecodeError`] if the token is malformed or is not the canonical
/// encoding of any number.
pub fn decode_to_parts(token: &str) -> DecodeResult<DecodedValue> {
    let bytes = token.as_bytes();
    let Some(&header) = bytes.first() else {
        return Ok(DecodedValue::Empty);
    };

    let class = decode_class_byte(header)?;
    if class == Class::Zero {
        if bytes.len() > 1 {
            trace!(token, "bytes after zero token");
            return Err(DecodeError::TrailingBytes);
        }
        return Ok(DecodedValue::Zero);
    }

    let positive = class.is_positive();
    let magnitude_byte = *bytes.get(1).ok_or(DecodeError::UnexpectedEndOfInput)?;
    let ordinal = if positive {
        alphabet::ordinal(magnitude_byte)
    } else {
        alphabet::reversed_ordinal(magnitude_byte)
    }
    .ok_or(DecodeError::InvalidDigit {
        byte: magnitude_byte,
        position: 1,
    })?;

    let magnitude = if class.is_integer() {
        if ordinal == 0 {
            return Err(DecodeError::NonCanonical("integer part without digits"));
        }
        Magnitude::Integer(ordinal)
    } else {
        Magnitude::Fraction(alphabet::MAX_ORDINAL - ordinal)
    };

    let significand = if positive {
        decode_significand(&bytes[2..])?
    } else {
        decode_complemented_significand(&bytes[2..])?
    };

    match significand.as_bytes() {
        [] => return Err(DecodeError::UnexpectedEndOfInput),
        [b'0', ..] => return Err(DecodeError::NonCanonical("leading zero digit")),
        [.., b'0'] => return Err(DecodeError::NonCanonical("trailing zero digit")),
        _ => {}
    }

    Ok(DecodedValue::Regular(DecodedNumber {
        positive,
        magnitude,
        significand,
    }))
}

/// Decode a token back into its normalized numeric string
///
/// # Errors
///
/// Returns [`DecodeError`] if the token is malformed.
pub fn decode_str(token: &str) -> DecodeResult<String> {
    match decode_to_parts(token)? {
        DecodedValue::Empty => Ok(String::new()),
        DecodedValue::Zero => Ok("0".to_owned()),
        DecodedValue::Regular(number) => Ok(number.to_string()),
    }
}

/// Copy the digits of a positive token. Offsets in errors are token offsets.
fn decode_significand(stream: &[u8]) -> DecodeResult<String> {
    let mut digits = String::with_capacity(stream.len());
    for (i, &byte) in stream.iter().enumerate() {
        if byte == TERMINATOR {
            return Err(DecodeError::UnexpectedTerminator(i + 2));
        }
        if !alphabet::is_digit(byte) {
            return Err(DecodeError::InvalidDigit {
                byte,
                position: i + 2,
            });
        }
        digits.push(char::from(byte));
    }
    Ok(digits)
}

/// Un-complement the digits of a negative token, which must end at the terminator.
fn decode_complemented_significand(stream: &[u8]) -> DecodeResult<String> {
    let Some((&last, body)) = stream.split_last() else {
        return Err(DecodeError::MissingTerminator);
    };

    let mut digits = String::with_capacity(body.len());
    for (i, &byte) in body.iter().enumerate() {
        if byte == TERMINATOR {
            return Err(DecodeError::UnexpectedTerminator(i + 2));
        }
        let digit = alphabet::complement(byte).ok_or(DecodeError::InvalidDigit {
            byte,
            position: i + 2,
        })?;
        digits.push(char::from(digit));
    }

    if last != TERMINATOR {
        return if alphabet::is_digit(last) {
            Err(DecodeError::MissingTerminator)
        } else {
            Err(DecodeError::InvalidDigit {
                byte: last,
                position: stream.len() + 1,
            })
        };
    }
    Ok(digits)
}

impl fmt::Display for DecodedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.positive {
            f.write_str("-")?;
        }

        match self.magnitude {
            Magnitude::Integer(count) => {
                let count = usize::from(count);
                if self.significand.len() > count {
                    let (integer, fraction) = self.significand.split_at(count);
                    write!(f, "{integer}.{fraction}")
                } else {
                    // Restore the integer's trailing zeros trimmed by the encoder
                    f.write_str(&self.significand)?;
                    for _ in self.significand.len()..count {
                        f.write_char('0')?;
                    }
                    Ok(())
                }
            }
            Magnitude::Fraction(zeros) => {
                f.write_str("0.")?;
                for _ in 0..zeros {
                    f.write_char('0')?;
                }
                f.write_str(&self.significand)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode_from_parts;

    #[test]
    fn test_decode_empty_and_zero() {
        assert_eq!(decode_to_parts("").unwrap(), DecodedValue::Empty);
        assert_eq!(decode_to_parts("5").unwrap(), DecodedValue::Zero);
        assert_eq!(decode_str("5").unwrap(), "0");
        assert_eq!(decode_str("").unwrap(), "");
    }

    #[test]
    fn test_decode_parts() {
        let decoded = decode_to_parts("3vyx~").unwrap();
        assert_eq!(
            decoded,
            DecodedValue::Regular(DecodedNumber {
                positive: false,
                magnitude: Magnitude::Integer(4),
                significand: "12".to_owned(),
            })
        );

        let decoded = decode_to_parts("6w125").unwrap();
        assert_eq!(
            decoded,
            DecodedValue::Regular(DecodedNumber {
                positive: true,
                magnitude: Magnitude::Fraction(3),
                significand: "125".to_owned(),
            })
        );
    }

    #[test]
    fn test_display_pads_integer_zeros() {
        assert_eq!(decode_str("76123").unwrap(), "123000");
        assert_eq!(decode_str("3tyxw~").unwrap(), "-123000");
        assert_eq!(decode_str("7112").unwrap(), "1.2");
        assert_eq!(decode_str("785f002k000i0k").unwrap(), "5f002k00.0i0k");
        assert_eq!(decode_str("6w125").unwrap(), "0.000125");
        assert_eq!(decode_str("42yx~").unwrap(), "-0.0012");
    }

    #[test]
    fn test_roundtrip_from_parts() {
        let encoded = encode_from_parts(false, Magnitude::Fraction(0), ("", "999"));
        assert_eq!(decode_str(&encoded).unwrap(), "-0.999");

        let encoded = encode_from_parts(true, Magnitude::Integer(35), ("1", ""));
        assert_eq!(decode_str(&encoded).unwrap(), format!("1{}", "0".repeat(34)));
    }

    #[test]
    fn test_rejects_bad_headers() {
        for token in ["2", "8", "0", "a", "~", "-1", " 711"] {
            assert!(
                matches!(decode_to_parts(token), Err(DecodeError::InvalidHeader(_))),
                "{token}"
            );
        }
        assert_eq!(decode_to_parts("50"), Err(DecodeError::TrailingBytes));
    }

    #[test]
    fn test_rejects_truncated_tokens() {
        assert_eq!(
            decode_to_parts("7"),
            Err(DecodeError::UnexpectedEndOfInput)
        );
        assert_eq!(
            decode_to_parts("71"),
            Err(DecodeError::UnexpectedEndOfInput)
        );
        assert_eq!(decode_to_parts("3y"), Err(DecodeError::MissingTerminator));
        assert_eq!(decode_to_parts("3yy"), Err(DecodeError::MissingTerminator));
        assert_eq!(
            decode_to_parts("3y~"),
            Err(DecodeError::UnexpectedEndOfInput)
        );
    }

    #[test]
    fn test_rejects_misplaced_terminator() {
        assert_eq!(
            decode_to_parts("3y~y~"),
            Err(DecodeError::UnexpectedTerminator(2))
        );
        assert_eq!(
            decode_to_parts("711~"),
            Err(DecodeError::UnexpectedTerminator(3))
        );
    }

    #[test]
    fn test_rejects_bad_digits() {
        assert_eq!(
            decode_to_parts("7A1"),
            Err(DecodeError::InvalidDigit {
                byte: b'A',
                position: 1
            })
        );
        assert_eq!(
            decode_to_parts("721.2"),
            Err(DecodeError::InvalidDigit {
                byte: b'.',
                position: 3
            })
        );
        assert_eq!(
            decode_to_parts("3yy!"),
            Err(DecodeError::InvalidDigit {
                byte: b'!',
                position: 3
            })
        );
    }

    #[test]
    fn test_rejects_non_canonical() {
        // Zero integer digit count
        assert!(matches!(
            decode_to_parts("701"),
            Err(DecodeError::NonCanonical(_))
        ));
        // Trailing zero kept in the stream
        assert!(matches!(
            decode_to_parts("7210"),
            Err(DecodeError::NonCanonical(_))
        ));
        // Leading zero
        assert!(matches!(
            decode_to_parts("6z01"),
            Err(DecodeError::NonCanonical(_))
        ));
        // Negative with a complemented trailing zero ('z')
        assert!(matches!(
            decode_to_parts("3xyz~"),
            Err(DecodeError::NonCanonical(_))
        ));
    }
}
