// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors from strict tokenizing.

use crate::span::{context_snippet, Span};
use thiserror::Error;

/// Characters of context shown on each side of an error position.
const CONTEXT_CHARS: usize = 30;

/// Errors reported by [`crate::tokenize_strict`].
///
/// The lenient [`crate::tokenize`] never fails; these only surface when a
/// caller asks for the stricter check.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// A `"` was opened and never closed.
    #[error("unterminated quote at position {}", span.start)]
    UnterminatedQuote {
        /// From the opening quote to the end of the line.
        span: Span,
    },
}

impl TokenizeError {
    pub fn span(&self) -> Span {
        match self {
            TokenizeError::UnterminatedQuote { span } => *span,
        }
    }

    /// Render the offending part of `line` with carets under the error.
    ///
    /// ```text
    /// open "My Documents
    ///      ^^^^^^^^^^^^^
    /// ```
    pub fn context(&self, line: &str) -> String {
        context_snippet(line, self.span(), CONTEXT_CHARS)
    }
}
