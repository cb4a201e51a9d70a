//! # ordnum
//!
//! Order-preserving string tokens for arbitrary-precision numbers.
//!
//! A number written in any base up to 36 (`[+-]?[0-9a-z]+(\.[0-9a-z]+)?`) is turned
//! into a short ASCII token such that comparing two tokens byte by byte gives the
//! same answer as comparing the numbers. Tokens decode back to the normalized
//! number without loss.
//!
//! - **Arbitrary precision**: up to 35 integer digits and 35 leading fraction
//!   zeros, with any number of significant digits
//! - **Order preservation**: plain string comparison matches numeric comparison
//! - **Compact**: leading and trailing zeros are not stored
//! - **Text aware**: numbers embedded in free text can be made sortable in place
//!
//! ## Use Cases
//!
//! - Sort keys for indexes in key-value stores
//! - Range queries over numeric values stored as strings
//! - Natural ordering of labels such as `"Item 20"` and `"Item 100"`
//!
//! ## Examples
//!
//! ```rust
//! use ordnum::Token;
//!
//! // Parse a number from string (encodes immediately)
//! let value: Token = "123.456".parse().unwrap();
//! assert_eq!(value.as_str(), "73123456");
//!
//! // Display prints the normalized number back
//! assert_eq!(value.to_string(), "123.456");
//!
//! // Order preservation: comparing tokens = comparing numbers
//! let a: Token = "-1.5".parse().unwrap();
//! let b: Token = "-1".parse().unwrap();
//! assert!(a < b);
//! assert!(a.as_str() < b.as_str());
//! ```
//!
//! The free functions work on plain strings:
//!
//! ```rust
//! assert_eq!(ordnum::encode("-1").unwrap(), "3yy~");
//! assert_eq!(ordnum::decode("6w125").unwrap(), "0.000125");
//! assert_eq!(ordnum::encode_in_text("SomeCam300D").unwrap(), "SomeCam 733 D");
//! ```
//!
//! ## Format Overview
//!
//! - **Header** (1 byte): `3` negative `<= -1`, `4` negative `> -1`, `5` zero,
//!   `6` positive `< 1`, `7` positive `>= 1`
//! - **Magnitude** (1 digit): integer digit count, or `35 -` leading fraction zeros
//! - **Significand**: the significant digits, complemented for negative values
//! - **Terminator**: `~`, negative values only
//!
//! [`LESS_THAN_ANY`] and [`GREATER_THAN_ANY`] bound every token and can be used as
//! open range limits.

pub(crate) mod alphabet;
pub(crate) mod analyzer;
pub(crate) mod decoder;
pub(crate) mod encoder;
pub(crate) mod error;
pub(crate) mod text;
pub(crate) mod token;

use std::str::FromStr;

// Re-export main types and functions
pub use analyzer::{analyze, Analysis, FractionSpan, NumberDescriptor};
pub use decoder::{decode_to_parts, DecodedNumber, DecodedValue};
pub use encoder::{
    Magnitude, GREATER_THAN_ANY, LESS_THAN_ANY, MAX_FRACTION_LEADING_ZEROS, MAX_INTEGER_DIGITS,
};
pub use error::{DecodeError, DecodeResult, EncodeError, EncodeResult};
pub use text::encode_in_text;
pub use token::{Class, Token};

/// Encode a numeric string into its token
///
/// # Errors
///
/// Returns [`EncodeError`] if the input is malformed or its magnitude does not fit
/// in a token.
pub fn encode(input: &str) -> EncodeResult<String> {
    encoder::encode_str(input)
}

/// Decode a token into its normalized numeric string
///
/// # Errors
///
/// Returns [`DecodeError`] if the token is not a canonical token.
pub fn decode(token: &str) -> DecodeResult<String> {
    decoder::decode_str(token)
}

/// Decode a token and parse the number into `T`
///
/// ```rust
/// assert_eq!(ordnum::decode_as::<u64>("75864").unwrap(), 86400);
/// assert!(ordnum::decode_as::<u64>("3yy~").is_err());
/// ```
///
/// # Errors
///
/// Returns [`DecodeError`] if the token is malformed or `T` cannot hold the number.
pub fn decode_as<T: FromStr>(token: &str) -> DecodeResult<T> {
    token::parse_decoded(decoder::decode_str(token)?)
}
