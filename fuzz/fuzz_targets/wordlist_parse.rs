#![no_main]

use libfuzzer_sys::fuzz_target;
use keyphrase_core::Wordlist;

fuzz_target!(|data: &[u8]| {
    // Arbitrary text must parse to a valid list or an error, never panic.
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(list) = Wordlist::parse(text) {
            assert!(list.len() >= 2);
            for word in list.iter() {
                assert!(!word.is_empty());
                assert!(word.len() <= list.longest_word_size());
                assert!(word.bytes().all(|b| b.is_ascii_alphabetic()));
            }
        }
    }
});
