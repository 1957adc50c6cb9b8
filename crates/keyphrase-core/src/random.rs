//! Secure byte sources and unbiased integer sampling
//!
//! Every secret produced by this crate is derived from a [`SecureByteSource`].
//! Two implementations are provided:
//!
//! - [`OsByteSource`]: the operating system CSPRNG (`getrandom`, `BCryptGenRandom`, ...)
//! - [`DeterministicByteSource`]: a ChaCha20 stream keyed by a 32-byte seed,
//!   for reproducible tests only
//!
//! # Modulo Bias
//!
//! Reducing a raw `u32` with `% upper_bound` favours small values whenever
//! `upper_bound` does not divide 2^32. [`uniform_with`] only accepts raw
//! values below the largest multiple of `upper_bound` that fits and redraws
//! otherwise, so every result in `[0, upper_bound)` is equally likely.

use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use zeroize::Zeroizing;

use crate::constants::{MIN_UPPER_BOUND, SEED_SIZE};
use crate::error::GenerateError;

/// A source of cryptographically secure random bytes.
///
/// Implementations must be uniformly distributed. A source shared between
/// threads must be synchronized by the caller.
pub trait SecureByteSource {
    /// Fill `dest` entirely with random bytes.
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), GenerateError>;
}

/// The operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsByteSource;

impl SecureByteSource for OsByteSource {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), GenerateError> {
        OsRng.try_fill_bytes(dest)?;
        Ok(())
    }
}

/// Seeded ChaCha20 byte stream.
///
/// Equal seeds yield equal streams. Never use this for real secrets.
pub struct DeterministicByteSource {
    rng: ChaCha20Rng,
}

impl DeterministicByteSource {
    pub fn from_seed(seed: &[u8; SEED_SIZE]) -> Self {
        Self {
            rng: ChaCha20Rng::from_seed(*seed),
        }
    }
}

impl SecureByteSource for DeterministicByteSource {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), GenerateError> {
        self.rng.try_fill_bytes(dest)?;
        Ok(())
    }
}

/// Fill `buffer` with bytes from the OS CSPRNG.
pub fn fill_random(buffer: &mut [u8]) -> Result<(), GenerateError> {
    OsByteSource.try_fill(buffer)
}

/// Fill `buffer` with bytes derived from `seed`. Test reproducibility only.
pub fn fill_random_deterministic(
    buffer: &mut [u8],
    seed: &[u8; SEED_SIZE],
) -> Result<(), GenerateError> {
    DeterministicByteSource::from_seed(seed).try_fill(buffer)
}

/// Draw a raw little-endian `u32`.
pub fn random_u32<S: SecureByteSource + ?Sized>(source: &mut S) -> Result<u32, GenerateError> {
    let mut bytes = Zeroizing::new([0u8; 4]);
    source.try_fill(&mut bytes[..])?;
    Ok(u32::from_le_bytes(*bytes))
}

/// Uniform integer in `[0, upper_bound)` from the OS CSPRNG.
///
/// # Example
/// ```
/// let roll = keyphrase_core::uniform_int(6).unwrap();
/// assert!(roll < 6);
/// ```
pub fn uniform_int(upper_bound: u32) -> Result<u32, GenerateError> {
    uniform_with(&mut OsByteSource, upper_bound)
}

/// Uniform integer in `[0, upper_bound)` by rejection sampling.
///
/// Returns `GenerateError::Range` if `upper_bound < MIN_UPPER_BOUND`.
pub fn uniform_with<S: SecureByteSource + ?Sized>(
    source: &mut S,
    upper_bound: u32,
) -> Result<u32, GenerateError> {
    if upper_bound < MIN_UPPER_BOUND {
        return Err(GenerateError::Range(format!(
            "upper bound must be at least {MIN_UPPER_BOUND}, got {upper_bound}"
        )));
    }

    // Largest multiple of upper_bound that is <= u32::MAX
    let limit = u32::MAX - (u32::MAX % upper_bound);
    loop {
        let raw = random_u32(source)?;
        if raw < limit {
            return Ok(raw % upper_bound);
        }
    }
}
