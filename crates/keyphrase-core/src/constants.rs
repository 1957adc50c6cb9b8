//! Size limits shared by the generators and the buffer sizer.
//!
//! These values are part of the public contract: callers allocate buffers
//! from them and tests pin them exactly.

/// Seed length for the deterministic byte source (bytes).
pub const SEED_SIZE: usize = 32;

/// Smallest domain `uniform_int` will sample from.
pub const MIN_UPPER_BOUND: u32 = 2;

/// Shortest random string (characters).
pub const MIN_STRING_SIZE: usize = 8;

/// Longest random string (characters).
pub const MAX_STRING_SIZE: usize = 128;

/// Smallest character set a string may be drawn from.
pub const MIN_CHARACTER_SET_SIZE: usize = MIN_UPPER_BOUND as usize;

/// Smallest accepted bound on the longest word of a wordlist (bytes).
pub const MIN_LONGEST_WORD_SIZE: usize = 1;

/// Largest accepted bound on the longest word of a wordlist (bytes).
pub const MAX_LONGEST_WORD_SIZE: usize = 45;

/// Smallest wordlist a passphrase may be drawn from.
pub const MIN_WORDLIST_SIZE: usize = MIN_UPPER_BOUND as usize;

/// Fewest words in a passphrase.
pub const MIN_WORD_COUNT: usize = 4;

/// Most words in a passphrase.
pub const MAX_WORD_COUNT: usize = 20;

/// Size of the digit domain for the embedded number (`0`-`9`).
pub const DIGIT_COUNT: u32 = 10;

/// Separator used when the caller does not pick one.
pub const DEFAULT_SEPARATOR: char = '-';
