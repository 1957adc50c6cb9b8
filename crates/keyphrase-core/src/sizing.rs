//! Buffer sizes for strings and passphrases.
//!
//! Callers allocate from these before generating; the generators reject any
//! buffer whose length does not match.

use crate::constants::{
    MAX_LONGEST_WORD_SIZE, MAX_STRING_SIZE, MAX_WORD_COUNT, MIN_LONGEST_WORD_SIZE,
    MIN_STRING_SIZE, MIN_WORD_COUNT,
};
use crate::error::GenerateError;

/// Buffer size for a random string of `length` characters.
pub fn string_buffer_size(length: usize) -> Result<usize, GenerateError> {
    if !(MIN_STRING_SIZE..=MAX_STRING_SIZE).contains(&length) {
        return Err(GenerateError::range(
            "string length",
            length,
            MIN_STRING_SIZE,
            MAX_STRING_SIZE,
        ));
    }
    Ok(length)
}

/// Worst-case buffer size for a passphrase.
///
/// Every word at `longest_word_size`, a separator between each pair of
/// words, and one byte for the embedded digit:
/// `word_count * longest_word_size + (word_count - 1) + 1`.
///
/// # Example
/// ```
/// assert_eq!(keyphrase_core::passphrase_buffer_size(45, 4).unwrap(), 184);
/// ```
pub fn passphrase_buffer_size(
    longest_word_size: usize,
    word_count: usize,
) -> Result<usize, GenerateError> {
    if !(MIN_LONGEST_WORD_SIZE..=MAX_LONGEST_WORD_SIZE).contains(&longest_word_size) {
        return Err(GenerateError::range(
            "longest word size",
            longest_word_size,
            MIN_LONGEST_WORD_SIZE,
            MAX_LONGEST_WORD_SIZE,
        ));
    }
    if !(MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&word_count) {
        return Err(GenerateError::range(
            "word count",
            word_count,
            MIN_WORD_COUNT,
            MAX_WORD_COUNT,
        ));
    }
    let separators = word_count - 1;
    let digit = 1;
    Ok(word_count * longest_word_size + separators + digit)
}
