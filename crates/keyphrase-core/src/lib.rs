//! keyphrase Core
//!
//! Turns a cryptographically secure byte source into user-facing secrets.
//!
//! # Secrets
//!
//! - Random strings: fixed length, every character drawn uniformly from a
//!   caller-supplied character set.
//! - Passphrases: 4 to 20 words drawn uniformly from a wordlist, joined by
//!   a separator, optionally capitalized, optionally with one embedded digit.
//!
//! # Buffers
//!
//! Callers size their output buffers with [`sizing`] first. Passphrase
//! buffers are a worst-case upper bound: whatever is not written is zeroed
//! before the call returns.
//!
//! # Example
//!
//! ```
//! use keyphrase_core::{generate_passphrase, passphrase_buffer_size, PassphraseOptions};
//! use keyphrase_core::constants::MAX_LONGEST_WORD_SIZE;
//!
//! let options = PassphraseOptions::default();
//! let size = passphrase_buffer_size(MAX_LONGEST_WORD_SIZE, options.word_count).unwrap();
//! let mut buffer = vec![0u8; size];
//! let written = generate_passphrase(&mut buffer, &options).unwrap();
//! assert!(buffer[written..].iter().all(|&b| b == 0));
//! ```

pub mod charset;
pub mod constants;
pub mod error;
pub mod memory;
pub mod passphrase;
pub mod random;
pub mod sizing;
pub mod strength;
pub mod wordlist;

#[cfg(test)]
mod test_utils;

pub use charset::{generate_string, generate_string_with};
pub use error::GenerateError;
pub use passphrase::{
    generate_passphrase, generate_passphrase_from_words, generate_passphrase_with,
    PassphraseOptions,
};
pub use random::{
    fill_random, fill_random_deterministic, uniform_int, DeterministicByteSource, OsByteSource,
    SecureByteSource,
};
pub use sizing::{passphrase_buffer_size, string_buffer_size};
pub use wordlist::{load_wordlist, Wordlist, BUILTIN_WORDLIST_SIZE};
