// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors from scheduling a timer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimingError {
    #[error("no tokio runtime to schedule the timer on")]
    NoRuntime,
}
