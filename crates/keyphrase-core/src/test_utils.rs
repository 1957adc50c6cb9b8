//! Shared test utilities for keyphrase-core tests.
//!
//! Byte sources with scripted or failing output, and a chi-square helper
//! for uniformity checks.

use std::collections::VecDeque;

use crate::error::GenerateError;
use crate::random::SecureByteSource;

/// Replays a fixed sequence of `u32` draws, then fails.
///
/// Each fill must request exactly four bytes (one `random_u32`).
pub struct ScriptedByteSource {
    values: VecDeque<u32>,
}

impl ScriptedByteSource {
    pub fn new(values: &[u32]) -> Self {
        Self {
            values: values.iter().copied().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl SecureByteSource for ScriptedByteSource {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), GenerateError> {
        assert_eq!(dest.len(), 4, "scripted source only serves u32 draws");
        let value = self
            .values
            .pop_front()
            .ok_or_else(|| GenerateError::Entropy("script exhausted".into()))?;
        dest.copy_from_slice(&value.to_le_bytes());
        Ok(())
    }
}

/// Always fails.
pub struct FailingByteSource;

impl SecureByteSource for FailingByteSource {
    fn try_fill(&mut self, _dest: &mut [u8]) -> Result<(), GenerateError> {
        Err(GenerateError::Entropy("source unavailable".into()))
    }
}

/// Serves `successes` fills from an inner source, then fails.
pub struct FailAfter<S> {
    inner: S,
    successes: usize,
}

impl<S: SecureByteSource> FailAfter<S> {
    pub fn new(inner: S, successes: usize) -> Self {
        Self { inner, successes }
    }
}

impl<S: SecureByteSource> SecureByteSource for FailAfter<S> {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), GenerateError> {
        if self.successes == 0 {
            return Err(GenerateError::Entropy("source exhausted".into()));
        }
        self.successes -= 1;
        self.inner.try_fill(dest)
    }
}

/// Pearson chi-square statistic against a uniform expectation.
pub fn chi_square(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum()
}
