//! Wordlist passphrases
//!
//! A passphrase is `word_count` words drawn uniformly (with replacement)
//! from a [`Wordlist`], joined by a single-byte separator. Options:
//!
//! - `capitalize`: uppercase the first letter of every word
//! - `include_number`: insert one digit `0`-`9` directly after a uniformly
//!   chosen word, so no word is split and the passphrase never ends with
//!   the separator
//!
//! # Buffer Layout
//!
//! The output buffer must be exactly
//! [`passphrase_buffer_size`]`(longest_word_size, word_count)` bytes. After a
//! successful call `buffer[..written]` holds the passphrase and
//! `buffer[written..]` is all zeros. Parameter errors are raised before the
//! buffer is touched; if the byte source fails part way through, the whole
//! buffer is zeroed before the error is returned.

use zeroize::Zeroize;

use crate::constants::{
    DEFAULT_SEPARATOR, DIGIT_COUNT, MAX_LONGEST_WORD_SIZE, MAX_WORD_COUNT, MIN_WORD_COUNT,
};
use crate::error::GenerateError;
use crate::memory::zeroize_tail;
use crate::random::{uniform_with, OsByteSource, SecureByteSource};
use crate::sizing::passphrase_buffer_size;
use crate::wordlist::Wordlist;

/// How a passphrase is laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassphraseOptions {
    /// Number of words (`MIN_WORD_COUNT..=MAX_WORD_COUNT`)
    pub word_count: usize,
    /// Byte placed between words; ASCII, not a letter or digit, not NUL/CR/LF
    pub separator: char,
    /// Uppercase the first letter of every word
    pub capitalize: bool,
    /// Embed exactly one digit
    pub include_number: bool,
}

impl Default for PassphraseOptions {
    fn default() -> Self {
        Self {
            word_count: 6,
            separator: DEFAULT_SEPARATOR,
            capitalize: true,
            include_number: true,
        }
    }
}

impl PassphraseOptions {
    /// Check the word count and separator.
    pub fn validate(&self) -> Result<(), GenerateError> {
        self.checked_separator().map(|_| ())
    }

    /// Validate and return the separator as a byte.
    fn checked_separator(&self) -> Result<u8, GenerateError> {
        if !(MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&self.word_count) {
            return Err(GenerateError::range(
                "word count",
                self.word_count,
                MIN_WORD_COUNT,
                MAX_WORD_COUNT,
            ));
        }
        let sep = self.separator;
        if !sep.is_ascii() {
            return Err(GenerateError::Range(format!(
                "separator must be an ASCII character, got {sep:?}"
            )));
        }
        if matches!(sep, '\0' | '\r' | '\n') {
            return Err(GenerateError::Range(
                "separator must not be NUL, CR or LF".into(),
            ));
        }
        if sep.is_ascii_alphanumeric() {
            return Err(GenerateError::Range(format!(
                "separator must not be a letter or digit, got {sep:?}"
            )));
        }
        Ok(sep as u8)
    }
}

/// Generate a passphrase from the built-in wordlist using the OS CSPRNG.
///
/// `buffer` must be `passphrase_buffer_size(MAX_LONGEST_WORD_SIZE, options.word_count)`
/// bytes. Returns the number of bytes written.
///
/// # Example
/// ```
/// use keyphrase_core::{generate_passphrase, passphrase_buffer_size, PassphraseOptions};
///
/// let options = PassphraseOptions {
///     word_count: 4,
///     separator: '-',
///     capitalize: false,
///     include_number: false,
/// };
/// let mut buffer = vec![0u8; passphrase_buffer_size(45, 4).unwrap()];
/// let written = generate_passphrase(&mut buffer, &options).unwrap();
/// let phrase = std::str::from_utf8(&buffer[..written]).unwrap();
/// assert_eq!(phrase.split('-').count(), 4);
/// ```
pub fn generate_passphrase(
    buffer: &mut [u8],
    options: &PassphraseOptions,
) -> Result<usize, GenerateError> {
    options.validate()?;
    let wordlist = Wordlist::builtin()?;
    generate_passphrase_with(
        &mut OsByteSource,
        buffer,
        options,
        wordlist,
        MAX_LONGEST_WORD_SIZE,
    )
}

/// Generate a passphrase from caller-supplied words using the OS CSPRNG.
///
/// The words are validated here: any word that is empty, too long, or not
/// made of ASCII letters is a `Format` error.
pub fn generate_passphrase_from_words<W: AsRef<str>>(
    buffer: &mut [u8],
    options: &PassphraseOptions,
    words: &[W],
    longest_word_size: usize,
) -> Result<usize, GenerateError> {
    options.validate()?;
    let wordlist = Wordlist::new(words.iter().map(AsRef::as_ref))?;
    generate_passphrase_with(
        &mut OsByteSource,
        buffer,
        options,
        &wordlist,
        longest_word_size,
    )
}

/// Generate a passphrase from `wordlist` using `source`.
///
/// `longest_word_size` must be at least the wordlist's longest word and
/// `buffer` must be exactly `passphrase_buffer_size(longest_word_size, options.word_count)`.
pub fn generate_passphrase_with<S: SecureByteSource + ?Sized>(
    source: &mut S,
    buffer: &mut [u8],
    options: &PassphraseOptions,
    wordlist: &Wordlist<'_>,
    longest_word_size: usize,
) -> Result<usize, GenerateError> {
    let separator = options.checked_separator()?;
    let expected = passphrase_buffer_size(longest_word_size, options.word_count)?;
    if wordlist.longest_word_size() > longest_word_size {
        return Err(GenerateError::Range(format!(
            "longest word size {longest_word_size} is smaller than the wordlist's longest word ({})",
            wordlist.longest_word_size()
        )));
    }
    if buffer.len() != expected {
        return Err(GenerateError::Range(format!(
            "passphrase buffer must be exactly {expected} bytes, got {}",
            buffer.len()
        )));
    }
    let domain = u32::try_from(wordlist.len())
        .map_err(|_| GenerateError::Range("wordlist is too large".into()))?;

    buffer.zeroize();
    match write_words(source, buffer, options, separator, wordlist, domain) {
        Ok(written) => {
            zeroize_tail(buffer, written);
            Ok(written)
        }
        Err(e) => {
            buffer.zeroize();
            Err(e)
        }
    }
}

fn write_words<S: SecureByteSource + ?Sized>(
    source: &mut S,
    buffer: &mut [u8],
    options: &PassphraseOptions,
    separator: u8,
    wordlist: &Wordlist<'_>,
    domain: u32,
) -> Result<usize, GenerateError> {
    let words = wordlist.as_slice();
    let mut word_ends = [0usize; MAX_WORD_COUNT];
    let mut cursor = 0;

    for (i, end) in word_ends.iter_mut().take(options.word_count).enumerate() {
        let word = words[uniform_with(source, domain)? as usize].as_bytes();
        let dest = &mut buffer[cursor..cursor + word.len()];
        dest.copy_from_slice(word);
        if options.capitalize {
            dest[0] = dest[0].to_ascii_uppercase();
        }
        cursor += word.len();
        *end = cursor;

        if i + 1 < options.word_count {
            buffer[cursor] = separator;
            cursor += 1;
        }
    }

    if options.include_number {
        // word_count <= MAX_WORD_COUNT, so the cast cannot truncate
        let position = uniform_with(source, options.word_count as u32)? as usize;
        let digit = uniform_with(source, DIGIT_COUNT)? as u8;
        let at = word_ends[position];
        buffer.copy_within(at..cursor, at + 1);
        buffer[at] = b'0' + digit;
        cursor += 1;
    }

    Ok(cursor)
}
