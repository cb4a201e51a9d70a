use crate::decoder::{
    decode_class_byte, decode_str, decode_to_parts, DecodedNumber, DecodedValue,
};
use crate::encoder::{
    encode_from_parts, encode_integer_digits, encode_str, Magnitude, MAX_INTEGER_DIGITS,
    ZERO_TOKEN,
};
use crate::error::{DecodeError, DecodeResult, EncodeError, EncodeResult};
use std::fmt;
use std::str::FromStr;

/// Sign and magnitude class carried by the first byte of a token
///
/// Variants are declared in token order: every token of a class sorts below
/// every token of the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Class {
    /// `value <= -1`
    NegativeLarge,
    /// `-1 < value < 0`
    NegativeSmall,
    Zero,
    /// `0 < value < 1`
    PositiveSmall,
    /// `value >= 1`
    PositiveLarge,
}

impl Class {
    /// Class of a non-zero value.
    #[must_use]
    pub const fn of(positive: bool, integer: bool) -> Self {
        match (positive, integer) {
            (false, true) => Self::NegativeLarge,
            (false, false) => Self::NegativeSmall,
            (true, false) => Self::PositiveSmall,
            (true, true) => Self::PositiveLarge,
        }
    }

    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::PositiveSmall | Self::PositiveLarge)
    }

    /// `true` for the classes whose magnitude digit counts integer digits.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::NegativeLarge | Self::PositiveLarge)
    }
}

/// An order-preserving token for a number
///
/// The token is kept as the encoded ASCII string, providing:
/// - Zero-copy access via `as_str()`
/// - Direct byte comparison for `Ord`, which matches numeric order
/// - `Display` that prints the normalized number back
///
/// Every `Token` holds a canonical encoding: it was either produced by the
/// encoder or validated by [`Token::from_encoded`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Token {
    text: String,
}

impl Token {
    /// Validate an existing token
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if `token` is not a canonical encoding.
    pub fn from_encoded(token: &str) -> DecodeResult<Self> {
        decode_to_parts(token)?;
        Ok(Self {
            text: token.to_owned(),
        })
    }

    /// The token for zero
    #[must_use]
    pub fn zero() -> Self {
        Self {
            text: ZERO_TOKEN.to_owned(),
        }
    }

    /// Get the encoded token (zero-copy)
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Consume and return the encoded token
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// `true` for the token of the empty input
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.text == ZERO_TOKEN
    }

    /// Class of the token, `None` for the empty token
    #[must_use]
    pub fn class(&self) -> Option<Class> {
        let header = *self.text.as_bytes().first()?;
        decode_class_byte(header).ok()
    }

    /// Decode to get semantic fields (sign, magnitude, significand).
    ///
    /// Returns `None` for the empty and zero tokens, which have neither.
    #[must_use]
    pub fn decode(&self) -> Option<DecodedNumber> {
        match decode_to_parts(&self.text).ok()? {
            DecodedValue::Regular(number) => Some(number),
            DecodedValue::Empty | DecodedValue::Zero => None,
        }
    }

    /// Decode into the normalized numeric string
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] only if the token was corrupted after validation,
    /// which safe code cannot do.
    pub fn to_number_string(&self) -> DecodeResult<String> {
        decode_str(&self.text)
    }

    /// Decode and parse into a numeric type
    ///
    /// ```rust
    /// use ordnum::Token;
    ///
    /// let token: Token = "-0042".parse().unwrap();
    /// assert_eq!(token.to_number::<i32>().unwrap(), -42);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::NotRepresentable`] if `T` cannot parse the number.
    pub fn to_number<T: FromStr>(&self) -> DecodeResult<T> {
        parse_decoded(self.to_number_string()?)
    }
}

/// Parse a decoded number, keeping the text for the error
pub(crate) fn parse_decoded<T: FromStr>(value: String) -> DecodeResult<T> {
    value
        .parse()
        .map_err(|_| DecodeError::NotRepresentable {
            value,
            target: std::any::type_name::<T>(),
        })
}

impl FromStr for Token {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            text: encode_str(s)?,
        })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match decode_to_parts(&self.text) {
            Ok(DecodedValue::Regular(number)) => fmt::Display::fmt(&number, f),
            Ok(DecodedValue::Zero) => f.write_str("0"),
            Ok(DecodedValue::Empty) => Ok(()),
            Err(_) => f.write_str("<invalid>"),
        }
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.text
    }
}

/// Digits in the decimal rendering of `u64::MAX`
const U64_MAX_DIGITS: u32 = u64::MAX.ilog10() + 1;

// Every u64 fits in the magnitude digit, so the u64 path cannot fail.
const _: () = assert!(U64_MAX_DIGITS as usize <= MAX_INTEGER_DIGITS);

/// Build a [`Token`] from an unsigned magnitude and a sign flag.
///
/// Goes through the same digit-run encoder as the text scanner, so values with
/// more than 35 digits fail just like their string form does.
fn from_unsigned_with_sign(value: u128, positive: bool) -> EncodeResult<Token> {
    Ok(Token {
        text: encode_integer_digits(positive, &value.to_string())?,
    })
}

/// Conversion for widths whose largest value has at most [`U64_MAX_DIGITS`] digits.
#[allow(clippy::cast_possible_truncation)]
fn from_small_unsigned_with_sign(value: u64, positive: bool) -> Token {
    if value == 0 {
        return Token::zero();
    }
    let digits = value.to_string();
    let magnitude = Magnitude::Integer(digits.len() as u8);
    Token {
        text: encode_from_parts(positive, magnitude, (digits.trim_end_matches('0'), "")),
    }
}

impl From<u64> for Token {
    fn from(value: u64) -> Self {
        from_small_unsigned_with_sign(value, true)
    }
}

impl From<i64> for Token {
    fn from(value: i64) -> Self {
        from_small_unsigned_with_sign(value.unsigned_abs(), value >= 0)
    }
}

impl From<usize> for Token {
    fn from(value: usize) -> Self {
        Self::from(value as u64)
    }
}

impl From<isize> for Token {
    fn from(value: isize) -> Self {
        Self::from(value as i64)
    }
}

impl TryFrom<u128> for Token {
    type Error = EncodeError;

    fn try_from(value: u128) -> Result<Self, Self::Error> {
        from_unsigned_with_sign(value, true)
    }
}

impl TryFrom<i128> for Token {
    type Error = EncodeError;

    fn try_from(value: i128) -> Result<Self, Self::Error> {
        // i128::MIN.unsigned_abs() == 2^127, no overflow
        from_unsigned_with_sign(value.unsigned_abs(), value >= 0)
    }
}

// Smaller unsigned types - widen to u64
impl From<u8> for Token {
    fn from(value: u8) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<u16> for Token {
    fn from(value: u16) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<u32> for Token {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}

// Smaller signed types - widen to i64
impl From<i8> for Token {
    fn from(value: i8) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<i16> for Token {
    fn from(value: i16) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<i32> for Token {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl TryFrom<f64> for Token {
    type Error = EncodeError;

    /// Convert an [`f64`] using its shortest round-trip representation.
    ///
    /// `Display` for floats never uses exponent notation, so its output is always
    /// a plain decimal the string path accepts. Both zeros map to the zero token.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(EncodeError::NonFinite);
        }
        value.to_string().parse()
    }
}

impl TryFrom<f32> for Token {
    type Error = EncodeError;

    /// Uses the `f32` shortest representation, so `0.1f32` encodes as `0.1`.
    fn try_from(value: f32) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(EncodeError::NonFinite);
        }
        value.to_string().parse()
    }
}
