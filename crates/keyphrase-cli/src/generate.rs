//! Generate secrets as configured and write them out, one per line.

use crate::config::KeyphraseConfig;
use anyhow::{Context, Result};
use keyphrase_core::constants::MAX_LONGEST_WORD_SIZE;
use keyphrase_core::memory::SecretBuffer;
use keyphrase_core::strength::{self, Entropy};
use keyphrase_core::{
    generate_passphrase_with, generate_string_with, passphrase_buffer_size, string_buffer_size,
    SecureByteSource, Wordlist,
};
use std::collections::BTreeSet;
use std::io::Write;

/// What to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    String,
    Passphrase,
}

/// Write `config.general.count` secrets to `out`.
///
/// Returns the entropy of each secret.
pub fn run<S, W>(source: &mut S, mode: Mode, config: &KeyphraseConfig, out: &mut W) -> Result<Entropy>
where
    S: SecureByteSource + ?Sized,
    W: Write + ?Sized,
{
    match mode {
        Mode::String => strings(source, config, out),
        Mode::Passphrase => passphrases(source, config, out),
    }
}

fn strings<S, W>(source: &mut S, config: &KeyphraseConfig, out: &mut W) -> Result<Entropy>
where
    S: SecureByteSource + ?Sized,
    W: Write + ?Sized,
{
    let charset = config.character_set()?;
    let size = string_buffer_size(config.string.length)?;
    log::debug!(
        "Generating {} string(s) of {} characters from a set of {}",
        config.general.count,
        size,
        charset.len()
    );

    let mut buffer = SecretBuffer::new(size);
    for _ in 0..config.general.count {
        generate_string_with(source, buffer.as_mut_slice(), &charset)
            .context("String generation failed")?;
        emit(out, buffer.as_slice())?;
    }

    let unique = charset.iter().collect::<BTreeSet<_>>().len();
    Ok(strength::string_entropy(size, unique))
}

fn passphrases<S, W>(source: &mut S, config: &KeyphraseConfig, out: &mut W) -> Result<Entropy>
where
    S: SecureByteSource + ?Sized,
    W: Write + ?Sized,
{
    let options = config.passphrase_options();

    let text;
    let (wordlist, longest) = match config.passphrase.wordlist {
        Some(ref path) => {
            text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read wordlist: {}", path.display()))?;
            let list = Wordlist::parse(&text)
                .with_context(|| format!("Invalid wordlist: {}", path.display()))?;
            log::info!("Using wordlist {} ({} words)", path.display(), list.len());
            let longest = list.longest_word_size();
            (list, longest)
        }
        None => (Wordlist::builtin()?.clone(), MAX_LONGEST_WORD_SIZE),
    };

    let size = passphrase_buffer_size(longest, options.word_count)?;
    log::debug!(
        "Generating {} passphrase(s) of {} words into {} byte buffer",
        config.general.count,
        options.word_count,
        size
    );

    let mut buffer = SecretBuffer::new(size);
    for _ in 0..config.general.count {
        let written =
            generate_passphrase_with(source, buffer.as_mut_slice(), &options, &wordlist, longest)
                .context("Passphrase generation failed")?;
        emit(out, &buffer.as_slice()[..written])?;
    }

    Ok(strength::passphrase_entropy(
        options.word_count,
        wordlist.len(),
        options.include_number,
    ))
}

fn emit<W: Write + ?Sized>(out: &mut W, secret: &[u8]) -> Result<()> {
    out.write_all(secret).context("Failed to write output")?;
    out.write_all(b"\n").context("Failed to write output")?;
    Ok(())
}
