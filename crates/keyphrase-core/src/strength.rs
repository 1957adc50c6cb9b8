//! Entropy of generated secrets
//!
//! Because every character or word is drawn uniformly, the entropy of a
//! generated secret is exact rather than estimated.
//!
//! # Strength Levels
//!
//! | Level     | Bits   | Meaning                                  |
//! |-----------|--------|------------------------------------------|
//! | Dangerous | < 28   | Trivially brute-forceable                |
//! | Weak      | 28–35  | Vulnerable to targeted attack            |
//! | Fair      | 36–59  | Adequate for casual threats              |
//! | Strong    | 60–127 | Resistant to well-funded attackers       |
//! | Excellent | ≥ 128  | Beyond brute-force for foreseeable future |

use crate::constants::DIGIT_COUNT;

/// Minimum recommended entropy (bits)
pub const MIN_RECOMMENDED_ENTROPY: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Dangerous,
    Weak,
    Fair,
    Strong,
    Excellent,
}

impl Strength {
    pub fn from_bits(bits: f64) -> Self {
        if bits < 28.0 {
            Self::Dangerous
        } else if bits < 36.0 {
            Self::Weak
        } else if bits < MIN_RECOMMENDED_ENTROPY {
            Self::Fair
        } else if bits < 128.0 {
            Self::Strong
        } else {
            Self::Excellent
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Dangerous => "Dangerous: trivially crackable",
            Self::Weak => "Weak: vulnerable to targeted attacks",
            Self::Fair => "Fair: adequate for casual threats only",
            Self::Strong => "Strong: resistant to well-funded attackers",
            Self::Excellent => "Excellent: beyond brute-force for the foreseeable future",
        }
    }

    pub fn is_recommended(&self) -> bool {
        *self >= Self::Strong
    }
}

/// Entropy of a secret in bits, with its strength level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entropy {
    pub bits: f64,
    pub strength: Strength,
}

impl Entropy {
    fn from_bits(bits: f64) -> Self {
        Self {
            bits,
            strength: Strength::from_bits(bits),
        }
    }
}

/// Entropy of a random string: `length * log2(charset_size)`.
///
/// Duplicate characters in the set are counted as distinct, which
/// overstates entropy; callers should pass the number of unique characters.
pub fn string_entropy(length: usize, charset_size: usize) -> Entropy {
    if charset_size < 2 {
        return Entropy::from_bits(0.0);
    }
    Entropy::from_bits(length as f64 * (charset_size as f64).log2())
}

/// Entropy of a passphrase.
///
/// Each word adds `log2(wordlist_len)`. An embedded number adds
/// `log2(10)` for the digit and `log2(word_count)` for its position.
/// Capitalization is deterministic and adds nothing.
pub fn passphrase_entropy(word_count: usize, wordlist_len: usize, include_number: bool) -> Entropy {
    if wordlist_len < 2 || word_count == 0 {
        return Entropy::from_bits(0.0);
    }
    let mut bits = word_count as f64 * (wordlist_len as f64).log2();
    if include_number {
        bits += (DIGIT_COUNT as f64).log2() + (word_count as f64).log2();
    }
    Entropy::from_bits(bits)
}
