// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Leading-edge throttling.

use parking_lot::Mutex;
use std::time::Duration;
use tokio::time::Instant;

/// Runs the callback at most once per `limit` window.
///
/// The first call in a window runs immediately on the caller's thread;
/// further calls inside the window are dropped, with no trailing call once
/// the window ends.
///
/// Time is read from Tokio's clock, so a paused test runtime controls the
/// window. No runtime is needed otherwise.
pub struct Throttle<T> {
    limit: Duration,
    callback: Box<dyn Fn(T) + Send + Sync>,
    last_run: Mutex<Option<Instant>>,
}

impl<T> Throttle<T> {
    pub fn new(limit: Duration, callback: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            limit,
            callback: Box::new(callback),
            last_run: Mutex::new(None),
        }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Run the callback unless the window is still open.
    ///
    /// Returns true if the callback ran.
    pub fn invoke(&self, arg: T) -> bool {
        let now = Instant::now();
        {
            let mut last_run = self.last_run.lock();
            if let Some(at) = *last_run {
                if now.duration_since(at) < self.limit {
                    tracing::debug!(
                        limit_ms = self.limit.as_millis() as u64,
                        "throttled call dropped"
                    );
                    return false;
                }
            }
            *last_run = Some(now);
        }
        (self.callback)(arg);
        true
    }

    /// Close the current window so the next call runs immediately.
    pub fn cancel(&self) {
        *self.last_run.lock() = None;
    }

    /// Returns true if a call made now would be dropped.
    pub fn is_throttled(&self) -> bool {
        self.last_run
            .lock()
            .is_some_and(|at| at.elapsed() < self.limit)
    }
}

#[cfg(test)]
#[path = "throttle_tests.rs"]
mod tests;
