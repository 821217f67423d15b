// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors from element lookup
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("element not found: {0}")]
    NotFound(String),
    #[error("invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },
}
