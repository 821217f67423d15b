// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ID generation abstractions

use crate::clock::{Clock, SystemClock};
use rand::Rng;

/// Prefix used when the caller does not supply one.
pub const DEFAULT_PREFIX: &str = "id";

/// Length of the random base-36 suffix of prefixed IDs.
pub const SUFFIX_LEN: usize = 9;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates unique identifiers
pub trait IdGen: Clone + Send + Sync {
    fn next(&self) -> String;
}

/// Timestamped ID generator: `{prefix}_{epoch_ms}_{random}`.
///
/// Uniqueness is best-effort. Two IDs minted in the same millisecond differ
/// only by their 9-character random suffix; this is not a cryptographic
/// guarantee.
#[derive(Clone, Debug)]
pub struct PrefixedIdGen<C: Clock = SystemClock> {
    prefix: String,
    clock: C,
}

impl PrefixedIdGen<SystemClock> {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_clock(prefix, SystemClock)
    }
}

impl<C: Clock> PrefixedIdGen<C> {
    pub fn with_clock(prefix: impl Into<String>, clock: C) -> Self {
        Self {
            prefix: prefix.into(),
            clock,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for PrefixedIdGen<SystemClock> {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl<C: Clock> IdGen for PrefixedIdGen<C> {
    fn next(&self) -> String {
        format!(
            "{}_{}_{}",
            self.prefix,
            self.clock.epoch_ms(),
            random_suffix(&mut rand::rng())
        )
    }
}

/// Mint a `{prefix}_{epoch_ms}_{random}` ID from the system clock.
pub fn generate_id(prefix: &str) -> String {
    PrefixedIdGen::new(prefix).next()
}

fn random_suffix(rng: &mut impl Rng) -> String {
    (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

/// Random v4 UUIDs, for callers that want IDs with no prefix or timestamp.
#[derive(Clone, Default)]
pub struct UuidIdGen;

impl IdGen for UuidIdGen {
    fn next(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
