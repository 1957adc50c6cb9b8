#![no_main]

use keyphrase_core::{
    generate_passphrase_with, passphrase_buffer_size, DeterministicByteSource, PassphraseOptions,
    Wordlist,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Layout: [seed: 32][word_count][separator][flags][longest][words...]
    if data.len() < 36 {
        return;
    }
    let (header, rest) = data.split_at(36);
    let mut seed = [0u8; 32];
    seed.copy_from_slice(&header[..32]);

    let options = PassphraseOptions {
        word_count: usize::from(header[32] % 24),
        separator: char::from(header[33] & 0x7F),
        capitalize: header[34] & 1 != 0,
        include_number: header[34] & 2 != 0,
    };
    let longest = usize::from(header[35] % 50);

    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };
    let Ok(list) = Wordlist::new(text.split(',')) else {
        return;
    };
    let Ok(size) = passphrase_buffer_size(longest, options.word_count) else {
        return;
    };

    let mut buffer = vec![0xFFu8; size];
    let mut source = DeterministicByteSource::from_seed(&seed);
    match generate_passphrase_with(&mut source, &mut buffer, &options, &list, longest) {
        Ok(written) => {
            assert!(written <= size);
            assert!(buffer[written..].iter().all(|&b| b == 0));
            let phrase = &buffer[..written];
            assert!(!phrase.iter().any(|&b| b == 0 || b == b'\r' || b == b'\n'));
            let digits = phrase.iter().filter(|b| b.is_ascii_digit()).count();
            assert_eq!(digits, usize::from(options.include_number));
        }
        Err(_) => assert!(buffer.iter().all(|&b| b == 0xFF)),
    }
});
