use thiserror::Error;

/// Errors that can occur while turning a number into a token
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Invalid input: sign without digits")]
    SignWithoutDigits,

    #[error("Invalid input: missing integer part before the decimal point")]
    MissingIntegerPart,

    #[error("Invalid input: decimal point must be followed by at least one digit")]
    EmptyFraction,

    #[error("Invalid input: unexpected character {found:?} at byte {position}")]
    InvalidCharacter { found: char, position: usize },

    #[error("Invalid input: only finite floats can be encoded")]
    NonFinite,

    #[error("Unrepresentable magnitude: integer part has {0} digits, at most 35 are supported")]
    IntegerTooLong(usize),

    #[error(
        "Unrepresentable magnitude: fraction has {0} leading zeros, at most 35 are supported"
    )]
    FractionTooSmall(usize),
}

impl EncodeError {
    /// `true` when the input was well formed but its magnitude does not fit the
    /// single-character magnitude digit of a token.
    #[must_use]
    pub const fn is_unrepresentable(&self) -> bool {
        matches!(self, Self::IntegerTooLong(_) | Self::FractionTooSmall(_))
    }
}

/// Errors that can occur while decoding a token
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Invalid header byte {0:#04x}: expected one of '3', '4', '5', '6', '7'")]
    InvalidHeader(u8),

    #[error("Unexpected end of input while decoding")]
    UnexpectedEndOfInput,

    #[error("Invalid digit byte {byte:#04x} at position {position}")]
    InvalidDigit { byte: u8, position: usize },

    #[error("Negative token is missing its terminator")]
    MissingTerminator,

    #[error("Unexpected terminator at position {0}")]
    UnexpectedTerminator(usize),

    #[error("Unexpected bytes after the zero token")]
    TrailingBytes,

    #[error("Non-canonical token: {0}")]
    NonCanonical(&'static str),

    #[error("Decoded value {value} does not fit into {target}")]
    NotRepresentable { value: String, target: &'static str },
}

/// Result type for decoding operations
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Result type for encoding operations
pub type EncodeResult<T> = Result<T, EncodeError>;
