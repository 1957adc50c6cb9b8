//! keyphrase: print random strings and wordlist passphrases
//!
//! # Usage
//!
//! ```bash
//! keyphrase passphrase --words 8
//! keyphrase -n 5 string --length 32 --charset printable
//! keyphrase --config keyphrase.toml --entropy passphrase
//! ```

mod config;
mod generate;

use anyhow::{Context, Result};
use generate::Mode;
use keyphrase_core::strength::Entropy;
use keyphrase_core::OsByteSource;
use std::io::Write;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_PATH: &str = "keyphrase.toml";

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct Args {
    config_path: Option<PathBuf>,
    mode: Option<Mode>,
    count: Option<usize>,
    show_entropy: bool,
    length: Option<usize>,
    charset: Option<String>,
    chars: Option<String>,
    words: Option<usize>,
    separator: Option<char>,
    no_capitalize: bool,
    no_number: bool,
    wordlist: Option<PathBuf>,
}

#[derive(Debug, PartialEq)]
enum Action {
    Help,
    Version,
    Generate(Args),
}

fn main() -> Result<()> {
    // Keep generated secrets out of core files
    keyphrase_core::memory::disable_core_dumps();

    // Parse CLI args (minimal, no clap dependency needed)
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&argv)? {
        Action::Help => {
            print_help();
            return Ok(());
        }
        Action::Version => {
            println!("keyphrase {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Action::Generate(args) => args,
    };

    // Load config
    let mut config =
        config::KeyphraseConfig::load(args.config_path.as_deref(), Path::new(DEFAULT_CONFIG_PATH))
            .context("Failed to load configuration")?;

    // Apply env overrides, then flags
    config.apply_env_overrides();
    args.apply(&mut config);

    // Validate
    config
        .validate()
        .context("Configuration validation failed")?;

    // Init logger
    std::env::set_var("RUST_LOG", &config.general.log_level);
    env_logger::init();

    let mode = args.mode.unwrap_or(Mode::Passphrase);
    log::debug!("Mode: {:?}", mode);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let entropy = generate::run(&mut OsByteSource, mode, &config, &mut out)?;
    out.flush().context("Failed to flush output")?;

    if args.show_entropy {
        report_entropy(&entropy);
    } else if !entropy.strength.is_recommended() {
        log::warn!(
            "Generated secrets carry {:.1} bits of entropy ({})",
            entropy.bits,
            entropy.strength.description()
        );
    }

    Ok(())
}

fn report_entropy(entropy: &Entropy) {
    eprintln!("Entropy:  {:.1} bits", entropy.bits);
    eprintln!("Strength: {}", entropy.strength.description());
}

fn parse_args(argv: &[String]) -> Result<Action> {
    let mut args = Args::default();

    let mut i = 0;
    while i < argv.len() {
        let arg = argv[i].as_str();
        let mut value = || take_value(argv, &mut i, arg);

        match arg {
            "--config" | "-c" => args.config_path = Some(PathBuf::from(value()?)),
            "--count" | "-n" => args.count = Some(parse_number(arg, value()?)?),
            "--entropy" => args.show_entropy = true,
            "--help" | "-h" => return Ok(Action::Help),
            "--version" | "-V" => return Ok(Action::Version),

            "string" | "passphrase" if args.mode.is_none() => {
                args.mode = Some(if arg == "string" {
                    Mode::String
                } else {
                    Mode::Passphrase
                });
            }

            "--length" | "-l" => {
                args.length = Some(parse_number(arg, value()?)?);
            }
            "--charset" => args.charset = Some(value()?.to_string()),
            "--chars" => args.chars = Some(value()?.to_string()),

            "--words" | "-w" => {
                args.words = Some(parse_number(arg, value()?)?);
            }
            "--separator" | "-s" => {
                let v = value()?;
                let mut chars = v.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => args.separator = Some(c),
                    _ => anyhow::bail!("--separator takes a single character, got {:?}", v),
                }
            }
            "--no-capitalize" => args.no_capitalize = true,
            "--no-number" => args.no_number = true,
            "--wordlist" => args.wordlist = Some(PathBuf::from(value()?)),

            other => anyhow::bail!("Unknown argument: {}", other),
        }
        i += 1;
    }

    args.check_mode()?;
    Ok(Action::Generate(args))
}

fn take_value<'a>(argv: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    match argv.get(*i) {
        Some(v) => Ok(v.as_str()),
        None => anyhow::bail!("{} requires a value", flag),
    }
}

fn parse_number(flag: &str, value: &str) -> Result<usize> {
    value
        .parse()
        .with_context(|| format!("{} expects a number, got {:?}", flag, value))
}

impl Args {
    /// Reject flags that belong to the other subcommand.
    fn check_mode(&self) -> Result<()> {
        let string_flags = self.length.is_some() || self.charset.is_some() || self.chars.is_some();
        let passphrase_flags = self.words.is_some()
            || self.separator.is_some()
            || self.no_capitalize
            || self.no_number
            || self.wordlist.is_some();

        match self.mode.unwrap_or(Mode::Passphrase) {
            Mode::String => anyhow::ensure!(
                !passphrase_flags,
                "passphrase options cannot be used with the string command"
            ),
            Mode::Passphrase => anyhow::ensure!(
                !string_flags,
                "string options require the string command"
            ),
        }
        anyhow::ensure!(
            !(self.charset.is_some() && self.chars.is_some()),
            "--charset and --chars are mutually exclusive"
        );
        Ok(())
    }

    /// Command-line flags take priority over everything else.
    fn apply(&self, config: &mut config::KeyphraseConfig) {
        if let Some(count) = self.count {
            config.general.count = count;
        }
        if let Some(length) = self.length {
            config.string.length = length;
        }
        if let Some(ref charset) = self.charset {
            config.string.charset = charset.clone();
            config.string.chars = None;
        }
        if let Some(ref chars) = self.chars {
            config.string.chars = Some(chars.clone());
        }
        if let Some(words) = self.words {
            config.passphrase.word_count = words;
        }
        if let Some(separator) = self.separator {
            config.passphrase.separator = separator;
        }
        if self.no_capitalize {
            config.passphrase.capitalize = false;
        }
        if self.no_number {
            config.passphrase.include_number = false;
        }
        if let Some(ref wordlist) = self.wordlist {
            config.passphrase.wordlist = Some(wordlist.clone());
        }
    }
}

fn print_help() {
    println!(
        r#"keyphrase: random strings and wordlist passphrases

USAGE:
    keyphrase [OPTIONS] [passphrase] [PASSPHRASE OPTIONS]
    keyphrase [OPTIONS] string [STRING OPTIONS]

OPTIONS:
    -c, --config <PATH>     Config file path (default: ./keyphrase.toml if present)
    -n, --count <N>         Number of secrets to print (default: 1)
    --entropy               Print entropy and strength to stderr
    -h, --help              Show this help message
    -V, --version           Show version

PASSPHRASE OPTIONS:
    -w, --words <N>         Words per passphrase, 4-20 (default: 6)
    -s, --separator <C>     Character between words (default: -)
    --no-capitalize         Keep words lowercase
    --no-number             Do not embed a digit
    --wordlist <PATH>       Wordlist file, one word per line (diceware format accepted)

STRING OPTIONS:
    -l, --length <N>        Characters per string, 8-128 (default: 20)
    --charset <NAME>        lowercase, uppercase, digits, symbols, alphanumeric, printable
    --chars <STR>           Literal characters to draw from

ENVIRONMENT VARIABLES (override config file):
    KEYPHRASE_LOG_LEVEL       Log level (error/warn/info/debug/trace)
    KEYPHRASE_WORD_COUNT      Words per passphrase
    KEYPHRASE_SEPARATOR       Separator character
    KEYPHRASE_CAPITALIZE      Capitalize words (true/false)
    KEYPHRASE_INCLUDE_NUMBER  Embed a digit (true/false)
    KEYPHRASE_WORDLIST        Wordlist file path
    KEYPHRASE_STRING_LENGTH   Characters per string
    KEYPHRASE_CHARSET         Named character set

EXAMPLES:
    # Six capitalized words with one digit
    keyphrase

    # Five 32-character tokens
    keyphrase -n 5 string --length 32 --charset printable

    # Eight words from the EFF long list, underscore separated
    keyphrase passphrase -w 8 -s _ --wordlist eff_large_wordlist.txt
"#
    );
}
