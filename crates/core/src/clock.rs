// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction so time-dependent helpers can be tested.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// Source of monotonic and wall-clock time.
pub trait Clock: Clone + Send + Sync {
    /// Monotonic instant, for measuring intervals.
    fn now(&self) -> Instant;

    /// Milliseconds since the Unix epoch.
    fn epoch_ms(&self) -> u64;
}

/// Real system clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn epoch_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Manually driven clock for tests.
///
/// Clones share the same time, so advancing one advances all of them.
#[derive(Clone, Debug)]
pub struct FakeClock {
    inner: Arc<Mutex<FakeTime>>,
}

#[derive(Debug)]
struct FakeTime {
    base: Instant,
    elapsed: Duration,
    epoch_ms: u64,
}

impl FakeClock {
    /// Epoch used by [`FakeClock::new`]: 2023-11-14T22:13:20Z.
    pub const DEFAULT_EPOCH_MS: u64 = 1_700_000_000_000;

    pub fn new() -> Self {
        Self::at_epoch_ms(Self::DEFAULT_EPOCH_MS)
    }

    pub fn at_epoch_ms(epoch_ms: u64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeTime {
                base: Instant::now(),
                elapsed: Duration::ZERO,
                epoch_ms,
            })),
        }
    }

    /// Move both the monotonic and wall clock forward.
    pub fn advance(&self, by: Duration) {
        let mut time = self.inner.lock();
        time.elapsed += by;
        time.epoch_ms += by.as_millis() as u64;
    }

    /// Jump the wall clock without touching the monotonic clock.
    pub fn set_epoch_ms(&self, epoch_ms: u64) {
        self.inner.lock().epoch_ms = epoch_ms;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        let time = self.inner.lock();
        time.base + time.elapsed
    }

    fn epoch_ms(&self) -> u64 {
        self.inner.lock().epoch_ms
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
