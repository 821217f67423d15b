// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Random integers in a range.

use rand::Rng;

/// Uniform random integer in `min..=max`.
///
/// Bounds given in the wrong order are swapped.
pub fn random_between(min: i64, max: i64) -> i64 {
    random_between_with(&mut rand::rng(), min, max)
}

/// [`random_between`] with a caller-supplied generator.
pub fn random_between_with(rng: &mut impl Rng, min: i64, max: i64) -> i64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.random_range(lo..=hi)
}

#[cfg(test)]
#[path = "random_tests.rs"]
mod tests;
