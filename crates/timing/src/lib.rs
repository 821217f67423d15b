// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Call pacing for UI event handlers.
//!
//! - [`Debouncer`] collapses a burst of calls into one trailing call.
//! - [`Throttle`] runs the first call and drops the rest of the window.
//! - [`delay`] pauses an async task.
//!
//! Timers run on Tokio; [`Debouncer::invoke`] needs a runtime in scope.

mod debounce;
mod error;
mod throttle;

pub use debounce::Debouncer;
pub use error::TimingError;
pub use throttle::Throttle;

use std::time::Duration;

/// Sleep for `ms` milliseconds.
pub async fn delay(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
