//! Random strings over a character set
//!
//! Every position is drawn independently and uniformly from the set, so a
//! string of length `n` over `k` characters carries `n * log2(k)` bits.

use crate::constants::{MAX_STRING_SIZE, MIN_CHARACTER_SET_SIZE, MIN_STRING_SIZE};
use crate::error::GenerateError;
use crate::random::{uniform_with, OsByteSource, SecureByteSource};

/// `a`-`z`
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
/// `A`-`Z`
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// `0`-`9`
pub const DIGITS: &[u8] = b"0123456789";
/// Printable ASCII punctuation.
pub const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
/// Letters and digits.
pub const ALPHANUMERIC: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// Every printable ASCII character except space.
pub const PRINTABLE: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ\
    0123456789!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Look up a predefined character set by name.
pub fn named(name: &str) -> Option<&'static [u8]> {
    match name {
        "lowercase" => Some(LOWERCASE),
        "uppercase" => Some(UPPERCASE),
        "digits" => Some(DIGITS),
        "symbols" => Some(SYMBOLS),
        "alphanumeric" => Some(ALPHANUMERIC),
        "printable" => Some(PRINTABLE),
        _ => None,
    }
}

/// Fill `buffer` with characters drawn from `character_set` using the OS CSPRNG.
///
/// # Example
/// ```
/// use keyphrase_core::charset::{generate_string, ALPHANUMERIC};
///
/// let mut token = [0u8; 16];
/// generate_string(&mut token, ALPHANUMERIC).unwrap();
/// assert!(token.iter().all(|c| ALPHANUMERIC.contains(c)));
/// ```
pub fn generate_string<T: Copy>(buffer: &mut [T], character_set: &[T]) -> Result<(), GenerateError> {
    generate_string_with(&mut OsByteSource, buffer, character_set)
}

/// Fill `buffer` with characters drawn from `character_set`.
///
/// The buffer is not cleared first; every position is overwritten.
pub fn generate_string_with<S, T>(
    source: &mut S,
    buffer: &mut [T],
    character_set: &[T],
) -> Result<(), GenerateError>
where
    S: SecureByteSource + ?Sized,
    T: Copy,
{
    if buffer.len() < MIN_STRING_SIZE || buffer.len() > MAX_STRING_SIZE {
        return Err(GenerateError::range(
            "string length",
            buffer.len(),
            MIN_STRING_SIZE,
            MAX_STRING_SIZE,
        ));
    }
    if character_set.len() < MIN_CHARACTER_SET_SIZE {
        return Err(GenerateError::Range(format!(
            "character set must contain at least {MIN_CHARACTER_SET_SIZE} characters, got {}",
            character_set.len()
        )));
    }
    let set_size = u32::try_from(character_set.len())
        .map_err(|_| GenerateError::Range("character set is too large".into()))?;

    for slot in buffer.iter_mut() {
        let index = uniform_with(source, set_size)?;
        *slot = character_set[index as usize];
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SEED_SIZE;
    use crate::random::DeterministicByteSource;
    use crate::test_utils::{chi_square, FailingByteSource, ScriptedByteSource};

    #[test]
    fn test_two_character_set() {
        let mut buf = [0u8; 8];
        generate_string(&mut buf, b"ab").unwrap();
        assert!(buf.iter().all(|&c| c == b'a' || c == b'b'));
    }

    #[test]
    fn test_output_contained_in_set() {
        for set in [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS, ALPHANUMERIC, PRINTABLE] {
            let mut buf = [0u8; MAX_STRING_SIZE];
            generate_string(&mut buf, set).unwrap();
            assert!(buf.iter().all(|c| set.contains(c)));
        }
    }

    #[test]
    fn test_char_buffers() {
        let set: Vec<char> = "αβγδ".chars().collect();
        let mut buf = ['\0'; 12];
        generate_string(&mut buf, &set).unwrap();
        assert!(buf.iter().all(|c| set.contains(c)));
    }

    #[test]
    fn test_length_bounds() {
        let mut short = [0u8; MIN_STRING_SIZE - 1];
        assert!(generate_string(&mut short, LOWERCASE).unwrap_err().is_range());

        let mut long = [0u8; MAX_STRING_SIZE + 1];
        assert!(generate_string(&mut long, LOWERCASE).unwrap_err().is_range());

        let mut min = [0u8; MIN_STRING_SIZE];
        generate_string(&mut min, LOWERCASE).unwrap();
    }

    #[test]
    fn test_character_set_too_small() {
        let mut buf = [0u8; 8];
        assert!(generate_string(&mut buf, b"a").unwrap_err().is_range());
        assert!(generate_string(&mut buf, b"").unwrap_err().is_range());
    }

    #[test]
    fn test_range_errors_leave_buffer_untouched() {
        let mut buf = [0xAAu8; 8];
        let err = generate_string_with(&mut FailingByteSource, &mut buf, b"x").unwrap_err();
        assert!(err.is_range());
        assert_eq!(buf, [0xAA; 8]);
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut buf = [0u8; 8];
        generate_string(&mut buf, b"aab").unwrap();
        assert!(buf.iter().all(|&c| c == b'a' || c == b'b'));
    }

    #[test]
    fn test_index_maps_to_set_position() {
        let mut source = ScriptedByteSource::new(&[0, 1, 2, 3, 4, 5, 6, 7]);
        let mut buf = [0u8; 8];
        generate_string_with(&mut source, &mut buf, b"0123").unwrap();
        assert_eq!(&buf, b"01230123");
    }

    #[test]
    fn test_deterministic_reproducible() {
        let seed = [3u8; SEED_SIZE];
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        generate_string_with(&mut DeterministicByteSource::from_seed(&seed), &mut a, ALPHANUMERIC)
            .unwrap();
        generate_string_with(&mut DeterministicByteSource::from_seed(&seed), &mut b, ALPHANUMERIC)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_characters_uniform() {
        let mut source = DeterministicByteSource::from_seed(&[0x11; SEED_SIZE]);
        let mut counts = [0usize; 10];
        let mut buf = [0u8; 100];
        for _ in 0..500 {
            generate_string_with(&mut source, &mut buf, DIGITS).unwrap();
            for c in buf {
                counts[(c - b'0') as usize] += 1;
            }
        }
        let stat = chi_square(&counts);
        assert!(stat < 40.0, "chi-square {stat:.2}");
    }

    #[test]
    fn test_named_sets() {
        assert_eq!(named("digits"), Some(DIGITS));
        assert_eq!(named("alphanumeric").map(<[u8]>::len), Some(62));
        assert_eq!(named("printable").map(<[u8]>::len), Some(94));
        assert_eq!(SYMBOLS.len(), 32);
        assert!(named("emoji").is_none());
    }

    #[test]
    fn test_printable_is_alphanumeric_then_symbols() {
        assert_eq!(PRINTABLE, [ALPHANUMERIC, SYMBOLS].concat().as_slice());
        assert!(PRINTABLE.iter().all(u8::is_ascii_graphic));
        assert!(!PRINTABLE.contains(&b' '));
    }
}
