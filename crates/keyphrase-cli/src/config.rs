//! CLI configuration: a TOML file plus environment variable overrides.
//!
//! Priority: command-line flags > environment variables > config file > defaults.

use anyhow::{Context, Result};
use keyphrase_core::charset;
use keyphrase_core::constants::DEFAULT_SEPARATOR;
use keyphrase_core::{string_buffer_size, PassphraseOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyphraseConfig {
    /// General settings
    #[serde(default)]
    pub general: GeneralSection,

    /// Passphrase layout
    #[serde(default)]
    pub passphrase: PassphraseSection,

    /// Random string settings
    #[serde(default)]
    pub string: StringSection,
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSection {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Secrets to print per run
    #[serde(default = "default_count")]
    pub count: usize,
}

impl Default for GeneralSection {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            count: default_count(),
        }
    }
}

/// Passphrase layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassphraseSection {
    /// Words per passphrase (4-20)
    #[serde(default = "default_word_count")]
    pub word_count: usize,

    /// Character between words
    #[serde(default = "default_separator")]
    pub separator: char,

    /// Uppercase the first letter of each word
    #[serde(default = "default_true")]
    pub capitalize: bool,

    /// Embed one digit
    #[serde(default = "default_true")]
    pub include_number: bool,

    /// Wordlist file (one word per line, diceware format accepted).
    /// The built-in list is used when unset.
    #[serde(default)]
    pub wordlist: Option<PathBuf>,
}

impl Default for PassphraseSection {
    fn default() -> Self {
        Self {
            word_count: default_word_count(),
            separator: default_separator(),
            capitalize: true,
            include_number: true,
            wordlist: None,
        }
    }
}

/// Random string settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringSection {
    /// Characters per string (8-128)
    #[serde(default = "default_string_length")]
    pub length: usize,

    /// Named character set: lowercase, uppercase, digits, symbols,
    /// alphanumeric, printable
    #[serde(default = "default_charset")]
    pub charset: String,

    /// Literal ASCII characters to draw from; overrides `charset`
    #[serde(default)]
    pub chars: Option<String>,
}

impl Default for StringSection {
    fn default() -> Self {
        Self {
            length: default_string_length(),
            charset: default_charset(),
            chars: None,
        }
    }
}

// ============================================================================
// Default value functions
// ============================================================================

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_count() -> usize {
    1
}

fn default_word_count() -> usize {
    PassphraseOptions::default().word_count
}

fn default_separator() -> char {
    DEFAULT_SEPARATOR
}

fn default_true() -> bool {
    true
}

fn default_string_length() -> usize {
    20
}

fn default_charset() -> String {
    "alphanumeric".to_string()
}

// ============================================================================
// Loading & environment override
// ============================================================================

impl KeyphraseConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: KeyphraseConfig =
            toml::from_str(&contents).with_context(|| "Failed to parse TOML config")?;
        Ok(config)
    }

    /// Load `path` if given (it must exist), otherwise the default file if
    /// present, otherwise built-in defaults.
    pub fn load(path: Option<&Path>, default_path: &Path) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if default_path.exists() => Self::from_file(default_path),
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `KEYPHRASE_LOG_LEVEL`
    /// - `KEYPHRASE_WORD_COUNT`
    /// - `KEYPHRASE_SEPARATOR`
    /// - `KEYPHRASE_CAPITALIZE`
    /// - `KEYPHRASE_INCLUDE_NUMBER`
    /// - `KEYPHRASE_WORDLIST`
    /// - `KEYPHRASE_STRING_LENGTH`
    /// - `KEYPHRASE_CHARSET`
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(v) = var("KEYPHRASE_LOG_LEVEL") {
            self.general.log_level = v;
        }
        if let Some(v) = var("KEYPHRASE_WORD_COUNT") {
            if let Ok(n) = v.parse::<usize>() {
                self.passphrase.word_count = n;
            }
        }
        if let Some(v) = var("KEYPHRASE_SEPARATOR") {
            let mut chars = v.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                self.passphrase.separator = c;
            }
        }
        if let Some(v) = var("KEYPHRASE_CAPITALIZE") {
            if let Some(b) = parse_bool(&v) {
                self.passphrase.capitalize = b;
            }
        }
        if let Some(v) = var("KEYPHRASE_INCLUDE_NUMBER") {
            if let Some(b) = parse_bool(&v) {
                self.passphrase.include_number = b;
            }
        }
        if let Some(v) = var("KEYPHRASE_WORDLIST") {
            self.passphrase.wordlist = Some(PathBuf::from(v));
        }
        if let Some(v) = var("KEYPHRASE_STRING_LENGTH") {
            if let Ok(n) = v.parse::<usize>() {
                self.string.length = n;
            }
        }
        if let Some(v) = var("KEYPHRASE_CHARSET") {
            self.string.charset = v;
        }
    }

    /// Passphrase options as the core library takes them.
    pub fn passphrase_options(&self) -> PassphraseOptions {
        PassphraseOptions {
            word_count: self.passphrase.word_count,
            separator: self.passphrase.separator,
            capitalize: self.passphrase.capitalize,
            include_number: self.passphrase.include_number,
        }
    }

    /// The character set random strings are drawn from.
    pub fn character_set(&self) -> Result<Vec<u8>> {
        if let Some(ref chars) = self.string.chars {
            anyhow::ensure!(
                chars.bytes().all(|b| b.is_ascii_graphic()),
                "string.chars must contain only printable ASCII characters"
            );
            return Ok(chars.as_bytes().to_vec());
        }
        charset::named(&self.string.charset)
            .map(<[u8]>::to_vec)
            .with_context(|| format!("Unknown character set: {}", self.string.charset))
    }

    /// Validate that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.general.count >= 1, "general.count must be >= 1");

        self.passphrase_options()
            .validate()
            .context("Invalid passphrase settings")?;

        string_buffer_size(self.string.length).context("Invalid string.length")?;
        self.character_set()?;

        Ok(())
    }
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
