//! Security-specific tests.
//!
//! These tests verify:
//! 1. Buffer tails never leak earlier contents
//! 2. Failed generation leaves no partial secret behind
//! 3. Malformed inputs don't panic
//! 4. Random wordlists and options are handled without panics
//! 5. Secret buffers redact and zero

use keyphrase_core::constants::MAX_LONGEST_WORD_SIZE;
use keyphrase_core::memory::{zeroize_tail, SecretBuffer};
use keyphrase_core::{
    generate_passphrase, generate_passphrase_from_words, generate_passphrase_with,
    generate_string_with, passphrase_buffer_size, GenerateError, PassphraseOptions,
    SecureByteSource, Wordlist,
};
use zeroize::Zeroize;

/// Yields good bytes for a while, then fails like an exhausted OS source.
struct FlakySource {
    remaining: usize,
}

impl SecureByteSource for FlakySource {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), GenerateError> {
        if self.remaining == 0 {
            return Err(GenerateError::Entropy("source exhausted".into()));
        }
        self.remaining -= 1;
        dest.fill(0x11);
        Ok(())
    }
}

// ============================================================================
// 1. Zero tail
// ============================================================================

#[test]
fn test_dirty_buffer_tail_is_cleared() {
    let options = PassphraseOptions::default();
    let size = passphrase_buffer_size(MAX_LONGEST_WORD_SIZE, options.word_count).unwrap();

    for _ in 0..50 {
        let mut buffer = vec![0xA5u8; size];
        let written = generate_passphrase(&mut buffer, &options).unwrap();
        assert!(written < size);
        assert!(
            buffer[written..].iter().all(|&b| b == 0),
            "stale bytes survived past {written}"
        );
        assert!(!buffer[..written].contains(&0xA5));
    }
}

#[test]
fn test_reused_buffer_does_not_leak_longer_phrase() {
    let long = ["abcdefghijklmnopqrstuvwxyz", "zyxwvutsrqponmlkjihgfedcba"];
    let short = ["ab", "cd"];
    let options = PassphraseOptions {
        word_count: 4,
        separator: '-',
        capitalize: false,
        include_number: false,
    };
    let mut buffer = vec![0u8; passphrase_buffer_size(26, 4).unwrap()];

    let first = generate_passphrase_from_words(&mut buffer, &options, &long, 26).unwrap();
    assert_eq!(first, 4 * 26 + 3);

    let second = generate_passphrase_from_words(&mut buffer, &options, &short, 26).unwrap();
    assert_eq!(second, 4 * 2 + 3);
    assert!(buffer[second..].iter().all(|&b| b == 0));
}

#[test]
fn test_zeroize_tail_on_vec() {
    let mut secret = b"correct-horse-battery-staple".to_vec();
    zeroize_tail(&mut secret, 7);
    assert_eq!(&secret[..7], b"correct");
    assert!(secret[7..].iter().all(|&b| b == 0));

    secret.zeroize();
    assert!(secret.is_empty() || secret.iter().all(|&b| b == 0));
}

// ============================================================================
// 2. Entropy failure
// ============================================================================

#[test]
fn test_source_failure_mid_passphrase_clears_buffer() {
    let list = Wordlist::builtin().unwrap();
    let options = PassphraseOptions::default();
    let size = passphrase_buffer_size(MAX_LONGEST_WORD_SIZE, options.word_count).unwrap();

    for successes in 0..8 {
        let mut source = FlakySource {
            remaining: successes,
        };
        let mut buffer = vec![0xC3u8; size];
        let err = generate_passphrase_with(
            &mut source,
            &mut buffer,
            &options,
            list,
            MAX_LONGEST_WORD_SIZE,
        )
        .unwrap_err();

        assert!(matches!(err, GenerateError::Entropy(_)), "{err:?}");
        assert!(
            buffer.iter().all(|&b| b == 0),
            "partial passphrase left after {successes} draws"
        );
    }
}

#[test]
fn test_source_failure_mid_string_is_reported() {
    let mut source = FlakySource { remaining: 3 };
    let mut buffer = [0u8; 16];
    let err = generate_string_with(&mut source, &mut buffer, b"0123456789abcdef").unwrap_err();
    assert!(matches!(err, GenerateError::Entropy(_)));
}

// ============================================================================
// 3. Malformed input panic tests (should NOT panic)
// ============================================================================

#[test]
fn test_parse_garbage_wordlists_does_not_panic() {
    let inputs = [
        "",
        "\n\n\n",
        "a",
        "alpha\nbravo charlie",
        "🎉\n🎊\n🎈",
        "\0\0\0\n\0\0",
        "11111\t\n22222\t",
        "1 2 3\n4 5 6",
        &"a".repeat(10_000),
        &"word\n".repeat(10_000),
    ];

    for input in &inputs {
        // Should return Ok or Err, not panic
        let _ = Wordlist::parse(input);
    }
}

#[test]
fn test_garbage_words_are_format_errors() {
    let options = PassphraseOptions::default();
    let mut buffer = vec![0u8; passphrase_buffer_size(MAX_LONGEST_WORD_SIZE, 6).unwrap()];
    let cases: [&[&str]; 5] = [
        &["alpha", ""],
        &["alpha", "tab\there"],
        &["alpha", "null\0byte"],
        &["alpha", "naïve"],
        &["alpha", "new\nline"],
    ];

    for words in cases {
        let err = generate_passphrase_from_words(&mut buffer, &options, words, MAX_LONGEST_WORD_SIZE)
            .unwrap_err();
        assert!(err.is_format(), "{words:?} gave {err:?}");
    }
}

// ============================================================================
// 4. Random inputs
// ============================================================================

#[test]
fn test_fuzz_random_wordlists() {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    for _ in 0..500 {
        let lines = rng.gen_range(0..20);
        let text: String = (0..lines)
            .map(|_| {
                let len = rng.gen_range(0..12);
                let mut line: String = (0..len).map(|_| rng.gen_range(' '..='~')).collect();
                line.push('\n');
                line
            })
            .collect();

        if let Ok(list) = Wordlist::parse(&text) {
            assert!(list.len() >= 2);
            assert!(list.iter().all(|w| w.bytes().all(|b| b.is_ascii_alphabetic())));
        }
    }
}

#[test]
fn test_fuzz_random_options() {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    for _ in 0..500 {
        let options = PassphraseOptions {
            word_count: rng.gen_range(0..30),
            separator: char::from(rng.gen_range(0u8..128)),
            capitalize: rng.gen(),
            include_number: rng.gen(),
        };
        let longest = rng.gen_range(0..60);
        let size = passphrase_buffer_size(longest, options.word_count).unwrap_or(16);
        let mut buffer = vec![0x5Au8; size];

        match generate_passphrase_from_words(&mut buffer, &options, &["oak", "ash"], longest) {
            Ok(written) => {
                assert!(buffer[written..].iter().all(|&b| b == 0));
                let sep = options.separator as u8;
                assert!(!sep.is_ascii_alphanumeric());
            }
            Err(err) => {
                assert!(err.is_range() || err.is_format(), "{err:?}");
                assert!(buffer.iter().all(|&b| b == 0x5A), "buffer touched on {err:?}");
            }
        }
    }
}

// ============================================================================
// 5. Secret buffers
// ============================================================================

#[test]
fn test_secret_buffer_debug_never_shows_contents() {
    let options = PassphraseOptions::default();
    let size = passphrase_buffer_size(MAX_LONGEST_WORD_SIZE, options.word_count).unwrap();
    let mut secret = SecretBuffer::new(size);
    let written = generate_passphrase(secret.as_mut_slice(), &options).unwrap();

    let phrase = secret.as_str(written).unwrap().to_string();
    let shown = format!("{secret:?}");
    assert!(!shown.contains(&phrase), "{shown} leaks the passphrase");
    assert!(shown.contains(&format!("len: {size}")));
}
