// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Byte-range tracking for scanned command lines.

use serde::{Deserialize, Serialize};

/// A span representing a range in the input line.
///
/// Spans use byte offsets so they can slice the original `&str` directly.
///
/// # Examples
///
/// ```ignore
/// use pos_shell::Span;
///
/// let line = "open notes.txt";
/// let span = Span::new(5, 14);
/// assert_eq!(span.slice(line), "notes.txt");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// Create an empty span at a position.
    #[inline]
    pub fn empty(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if `start <= pos < end`.
    #[inline]
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Extract the spanned text from the line.
    ///
    /// Returns an empty string if the span is out of bounds or not on
    /// character boundaries.
    #[inline]
    pub fn slice<'a>(&self, line: &'a str) -> &'a str {
        line.get(self.start..self.end).unwrap_or("")
    }
}

/// Render the line around `span` with carets under the spanned bytes.
///
/// At most `context_chars` characters are kept on each side of the span
/// start. Out-of-range spans are clamped to the end of the line.
///
/// ```text
/// open "notes
///      ^^^^^^
/// ```
pub fn context_snippet(line: &str, span: Span, context_chars: usize) -> String {
    let at = clamp_to_boundary(line, span.start);
    let head = &line[..at];
    let tail = &line[at..];

    let start = head
        .char_indices()
        .rev()
        .take(context_chars)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(at);

    let end = tail
        .char_indices()
        .take(context_chars + 1)
        .last()
        .map(|(i, c)| at + i + c.len_utf8())
        .unwrap_or(line.len());

    let snippet = &line[start..end];
    let caret_pos = line[start..at].chars().count();
    let remaining = line[at..end].chars().count().max(1);
    let caret_len = span.slice(line).chars().count().clamp(1, remaining);

    format!(
        "{}\n{}{}",
        snippet,
        " ".repeat(caret_pos),
        "^".repeat(caret_len)
    )
}

/// Largest char boundary in `line` that is `<= pos`.
fn clamp_to_boundary(line: &str, pos: usize) -> usize {
    let mut pos = pos.min(line.len());
    while !line.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
