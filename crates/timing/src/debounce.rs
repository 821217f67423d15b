// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trailing-edge debouncing.

use crate::error::TimingError;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

type Callback<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Collapses bursts of calls into a single call after a quiet period.
///
/// Every [`invoke`](Debouncer::invoke) restarts the timer; the callback runs
/// once, `delay` after the last invoke, with the last argument. Dropping the
/// debouncer cancels a pending call.
///
/// ```ignore
/// let save = Debouncer::new(Duration::from_millis(300), |text: String| persist(&text));
/// save.invoke("h".into())?;
/// save.invoke("hi".into())?; // only "hi" is persisted
/// ```
pub struct Debouncer<T> {
    delay: Duration,
    callback: Callback<T>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration, callback: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            delay,
            callback: Arc::new(callback),
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule the callback with `arg`, replacing any pending call.
    ///
    /// Fails only when called outside a Tokio runtime; the pending call, if
    /// any, is left untouched in that case.
    pub fn invoke(&self, arg: T) -> Result<(), TimingError> {
        let handle = Handle::try_current().map_err(|_| TimingError::NoRuntime)?;

        let mut pending = self.pending.lock();
        if let Some(previous) = pending.take() {
            if !previous.is_finished() {
                tracing::debug!(delay_ms = self.delay.as_millis() as u64, "debounce rescheduled");
            }
            previous.abort();
        }

        let callback = Arc::clone(&self.callback);
        let delay = self.delay;
        *pending = Some(handle.spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::debug!("debounce fired");
            callback(arg);
        }));
        Ok(())
    }

    /// Drop the pending call, if any. Returns true if one was cancelled.
    pub fn cancel(&self) -> bool {
        match self.pending.lock().take() {
            Some(handle) => {
                let was_pending = !handle.is_finished();
                handle.abort();
                was_pending
            }
            None => false,
        }
    }

    /// Returns true while a call is scheduled and has not run yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod tests;
