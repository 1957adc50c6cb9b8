//! Wordlists for passphrase generation
//!
//! A [`Wordlist`] is an ordered, validated, read-only sequence of words.
//! Every word must be non-empty, at most `MAX_LONGEST_WORD_SIZE` bytes and
//! made only of ASCII letters, so passphrases survive any text transport
//! and split cleanly on their separator.
//!
//! # Built-in List
//!
//! The built-in list is the EFF long wordlist with its four hyphenated
//! entries (`drop-down`, `felt-tip`, `t-shirt`, `yo-yo`) removed, leaving
//! 7772 words of at most 9 letters. It is validated on first access and
//! cached for the lifetime of the process. Other lists can be loaded with
//! [`Wordlist::parse`].

use std::sync::OnceLock;

use crate::constants::{MAX_LONGEST_WORD_SIZE, MIN_WORDLIST_SIZE};
use crate::error::GenerateError;

/// Number of words in the built-in list.
pub const BUILTIN_WORDLIST_SIZE: usize = 7772;

static BUILTIN: OnceLock<Result<Wordlist<'static>, GenerateError>> = OnceLock::new();

/// A validated list of words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlist<'a> {
    words: Vec<&'a str>,
    longest_word_size: usize,
}

impl<'a> Wordlist<'a> {
    /// Validate `words` and build a wordlist.
    ///
    /// Malformed words are a `Format` error naming the word's position.
    /// Fewer than `MIN_WORDLIST_SIZE` words is a `Range` error.
    pub fn new<I>(words: I) -> Result<Self, GenerateError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let words: Vec<&'a str> = words.into_iter().collect();
        if words.len() < MIN_WORDLIST_SIZE {
            return Err(GenerateError::Range(format!(
                "wordlist must contain at least {MIN_WORDLIST_SIZE} words, got {}",
                words.len()
            )));
        }
        if u32::try_from(words.len()).is_err() {
            return Err(GenerateError::Range("wordlist is too large".into()));
        }

        let mut longest_word_size = 0;
        for (index, word) in words.iter().enumerate() {
            validate_word(index, word)?;
            longest_word_size = longest_word_size.max(word.len());
        }

        Ok(Self {
            words,
            longest_word_size,
        })
    }

    /// Parse a wordlist with one word per line.
    ///
    /// Blank lines are skipped. Diceware lines (`11111<TAB>word`) keep only
    /// the word.
    pub fn parse(text: &'a str) -> Result<Self, GenerateError> {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(strip_dice_index);
        let list = Self::new(words)?;
        log::debug!(
            "Parsed wordlist: {} words, longest {} bytes",
            list.len(),
            list.longest_word_size
        );
        Ok(list)
    }

    /// The process-wide built-in wordlist.
    pub fn builtin() -> Result<&'static Wordlist<'static>, GenerateError> {
        BUILTIN
            .get_or_init(|| {
                let words = eff_wordlist::large::LIST
                    .iter()
                    .map(|&(_, word)| word)
                    .filter(|word| !word.contains('-'));
                let list = Wordlist::new(words);
                if let Ok(ref list) = list {
                    log::debug!("Loaded built-in wordlist: {} words", list.len());
                }
                list
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.words.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.words.iter().copied()
    }

    pub fn as_slice(&self) -> &[&'a str] {
        &self.words
    }

    /// Length in bytes of the longest word.
    pub fn longest_word_size(&self) -> usize {
        self.longest_word_size
    }

    /// Entropy contributed by one uniformly drawn word.
    pub fn bits_per_word(&self) -> f64 {
        (self.words.len() as f64).log2()
    }
}

/// The built-in wordlist (see [`Wordlist::builtin`]).
pub fn load_wordlist() -> Result<&'static Wordlist<'static>, GenerateError> {
    Wordlist::builtin()
}

fn strip_dice_index(line: &str) -> &str {
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(index), Some(word), None) if index.bytes().all(|b| b.is_ascii_digit()) => word,
        _ => line,
    }
}

fn validate_word(index: usize, word: &str) -> Result<(), GenerateError> {
    if word.is_empty() {
        return Err(GenerateError::Format(format!("word {index} is empty")));
    }
    if word.len() > MAX_LONGEST_WORD_SIZE {
        return Err(GenerateError::Format(format!(
            "word {index} is longer than {MAX_LONGEST_WORD_SIZE} bytes"
        )));
    }
    if word.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(GenerateError::Format(format!(
            "word {index} contains whitespace or control characters"
        )));
    }
    if !word.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(GenerateError::Format(format!(
            "word {index} contains characters other than ASCII letters"
        )));
    }
    Ok(())
}
