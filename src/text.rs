//! Sortable keys for free text with embedded numbers.
//!
//! Every maximal run of ASCII decimal digits is replaced by its token, so that
//! `"Item 20"` and `"Item 100"` become `"Item 722"` and `"Item 731"` and sort by
//! the number they contain. Signs, decimal points and letters are plain text
//! here: only unsigned decimal integers are recognized.

use tracing::debug;

use crate::encoder::encode_integer_digits;
use crate::error::EncodeResult;

const SEPARATOR: char = ' ';

/// Replace each digit run of `text` with its token
///
/// A space is inserted before a token when the preceding character is not
/// whitespace, and after it when the following character is not whitespace.
/// Nothing is ever added at the very start or end of the text.
///
/// # Errors
///
/// Returns the error of the first digit run that cannot be encoded, which only
/// happens for runs with more than 35 significant digits.
pub fn encode_in_text(text: &str) -> EncodeResult<String> {
    let bytes = text.as_bytes();
    let len = bytes.len();
    // Each token adds at most three bytes and two separators
    let mut out = String::with_capacity(len + len / 2 + 4);

    let mut copied_up_to = 0;
    let mut i = 0;
    while i < len {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let run_start = i;
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        // Digit runs start and end on char boundaries since digits are ASCII
        out.push_str(&text[copied_up_to..run_start]);

        let token = encode_integer_digits(true, &text[run_start..i]).inspect_err(|err| {
            debug!(run = &text[run_start..i], %err, "digit run cannot be encoded");
        })?;

        if out.chars().next_back().is_some_and(|c| !c.is_whitespace()) {
            out.push(SEPARATOR);
        }
        out.push_str(&token);
        if text[i..].chars().next().is_some_and(|c| !c.is_whitespace()) {
            out.push(SEPARATOR);
        }

        copied_up_to = i;
    }
    out.push_str(&text[copied_up_to..]);

    Ok(out)
}
