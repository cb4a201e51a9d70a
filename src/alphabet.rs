//! Base-36 digit tables.
//!
//! Every digit of a token is one of `0-9a-z`. Positive values use the forward
//! table, negative values the reverse table, so that a digit and its complement
//! always sum to [`MAX_ORDINAL`].

/// Largest digit value of the alphabet (`z`).
pub const MAX_ORDINAL: u8 = 35;

/// Forward alphabet, indexed by ordinal.
pub const DIGITS: [u8; 36] = *b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Reverse alphabet, indexed by ordinal: `REVERSED[v] == DIGITS[35 - v]`.
pub const REVERSED: [u8; 36] = *b"zyxwvutsrqponmlkjihgfedcba9876543210";

const INVALID: u8 = 0xFF;

/// Byte -> ordinal lookup; [`INVALID`] for bytes outside the alphabet.
const ORDINALS: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < DIGITS.len() {
        table[DIGITS[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Ordinal of a forward-alphabet digit.
#[inline]
#[must_use]
pub const fn ordinal(byte: u8) -> Option<u8> {
    match ORDINALS[byte as usize] {
        INVALID => None,
        v => Some(v),
    }
}

/// Ordinal of a reverse-alphabet digit.
#[inline]
#[must_use]
pub const fn reversed_ordinal(byte: u8) -> Option<u8> {
    match ordinal(byte) {
        Some(v) => Some(MAX_ORDINAL - v),
        None => None,
    }
}

/// `true` for `0-9a-z`.
#[inline]
#[must_use]
pub const fn is_digit(byte: u8) -> bool {
    ORDINALS[byte as usize] != INVALID
}

/// Forward digit for an ordinal in `0..=35`.
#[inline]
#[must_use]
pub const fn digit(ordinal: u8) -> u8 {
    DIGITS[ordinal as usize]
}

/// Reverse digit for an ordinal in `0..=35`.
#[inline]
#[must_use]
pub const fn reversed_digit(ordinal: u8) -> u8 {
    REVERSED[ordinal as usize]
}

/// Map a digit to its complement (`v -> 35 - v`). The mapping is its own inverse.
#[inline]
#[must_use]
pub const fn complement(byte: u8) -> Option<u8> {
    match ordinal(byte) {
        Some(v) => Some(reversed_digit(v)),
        None => None,
    }
}
