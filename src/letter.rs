//! Single-letter base-26 digits used for periods and bars.

use crate::error::RangeError;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: u8 = 26;

/// Convert an index in `[0, 25]` to `'A'..='Z'`
///
/// # Errors
/// Returns `RangeError::IndexOutOfRange` for negative indices or indices
/// above 25.
///
/// # Example
/// ```
/// use alphadec::index_to_letter;
///
/// assert_eq!(index_to_letter(0).unwrap(), 'A');
/// assert_eq!(index_to_letter(25).unwrap(), 'Z');
/// assert!(index_to_letter(26).is_err());
/// ```
#[inline]
pub fn index_to_letter(index: i64) -> Result<char, RangeError> {
    match u8::try_from(index) {
        Ok(n) if n < ALPHABET_LEN => Ok(char::from(b'A' + n)),
        _ => Err(RangeError::IndexOutOfRange {
            index,
            max: ALPHABET_LEN - 1,
        }),
    }
}

/// Convert `'A'..='Z'` back to its index
///
/// # Errors
/// Returns `RangeError::InvalidLetter` for anything other than an ASCII
/// uppercase letter.
#[inline]
pub fn letter_to_index(ch: char) -> Result<u8, RangeError> {
    if ch.is_ascii_uppercase() {
        // ASCII uppercase, so the byte value fits and is >= b'A'
        Ok(ch as u8 - b'A')
    } else {
        Err(RangeError::InvalidLetter { ch })
    }
}
