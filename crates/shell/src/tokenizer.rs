// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Whitespace tokenizer with double-quote grouping.
//!
//! The rules are deliberately small:
//!
//! - `"` toggles quoting and is dropped from the output.
//! - An unquoted space (U+0020) ends the current token. Runs of spaces never
//!   produce empty tokens.
//! - Every other character, including tabs, is kept as-is.
//! - An unbalanced quote is not an error; quoting simply stays on until the
//!   end of the line. Use [`tokenize_strict`] to reject such lines.
//!
//! ```ignore
//! use pos_shell::tokenize;
//!
//! assert_eq!(tokenize(r#"open "My Documents" -v"#), ["open", "My Documents", "-v"]);
//! ```

use crate::error::TokenizeError;
use crate::span::Span;
use serde::{Deserialize, Serialize};

const QUOTE: char = '"';
const SEPARATOR: char = ' ';

/// A token and the bytes of the input it was scanned from.
///
/// The span covers quote characters that contributed to the token, so
/// `span.slice(line)` for `"b c"` is `"b c"` with its quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub span: Span,
}

/// Configurable tokenizer.
///
/// The default configuration matches [`tokenize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tokenizer {
    keep_empty_quoted: bool,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `""` as an empty token instead of dropping it.
    ///
    /// Off by default: a quoted empty segment leaves the buffer empty, and an
    /// empty buffer is never emitted. With this on, any quote character marks
    /// the token as started.
    pub fn keep_empty_quoted(mut self, keep: bool) -> Self {
        self.keep_empty_quoted = keep;
        self
    }

    pub fn tokenize(&self, line: &str) -> Vec<String> {
        self.scan(line).tokens.into_iter().map(|t| t.text).collect()
    }

    /// Tokenize, keeping the source span of each token.
    pub fn tokenize_spanned(&self, line: &str) -> Vec<Token> {
        self.scan(line).tokens
    }

    /// Tokenize, rejecting lines with an odd number of quotes.
    pub fn tokenize_strict(&self, line: &str) -> Result<Vec<String>, TokenizeError> {
        let tokens = self.tokenize_strict_spanned(line)?;
        Ok(tokens.into_iter().map(|t| t.text).collect())
    }

    /// Strict tokenizing that keeps spans, in a single pass over the line.
    pub fn tokenize_strict_spanned(&self, line: &str) -> Result<Vec<Token>, TokenizeError> {
        let scan = self.scan(line);
        if let Some(open) = scan.open_quote {
            tracing::debug!(line, open, "unterminated quote");
            return Err(TokenizeError::UnterminatedQuote {
                span: Span::new(open, line.len()),
            });
        }
        Ok(scan.tokens)
    }

    fn scan(&self, line: &str) -> Scan {
        let mut tokens = Vec::new();
        let mut current = Pending::default();
        let mut open_quote = None;

        for (i, c) in line.char_indices() {
            match c {
                QUOTE => {
                    open_quote = match open_quote {
                        Some(_) => None,
                        None => Some(i),
                    };
                    current.touch(i, c);
                    if self.keep_empty_quoted {
                        current.started = true;
                    }
                }
                SEPARATOR if open_quote.is_none() => {
                    if let Some(token) = current.finish() {
                        tokens.push(token);
                    }
                }
                _ => {
                    current.touch(i, c);
                    current.text.push(c);
                    current.started = true;
                }
            }
        }

        if let Some(token) = current.finish() {
            tokens.push(token);
        }

        Scan { tokens, open_quote }
    }
}

/// Result of one pass over a line.
struct Scan {
    tokens: Vec<Token>,
    /// Byte offset of the quote left open at end of input.
    open_quote: Option<usize>,
}

/// Token being accumulated between separators.
#[derive(Default)]
struct Pending {
    text: String,
    /// Whether the buffer should be emitted even if empty.
    started: bool,
    span: Option<Span>,
}

impl Pending {
    /// Extend the span to cover the character at `i`.
    fn touch(&mut self, i: usize, c: char) {
        let end = i + c.len_utf8();
        self.span = Some(match self.span {
            Some(span) => Span::new(span.start, end),
            None => Span::new(i, end),
        });
    }

    /// Take the accumulated token, resetting for the next one.
    ///
    /// Returns `None` when nothing was started; spans of dropped runs (such as
    /// a bare `""`) are discarded too.
    fn finish(&mut self) -> Option<Token> {
        let pending = std::mem::take(self);
        match (pending.started, pending.span) {
            (true, Some(span)) => Some(Token {
                text: pending.text,
                span,
            }),
            _ => None,
        }
    }
}

/// Split a command line into tokens.
///
/// Total and pure: never fails, and the empty line yields no tokens.
pub fn tokenize(line: &str) -> Vec<String> {
    Tokenizer::default().tokenize(line)
}

/// Like [`tokenize`], but an unterminated quote is an error.
pub fn tokenize_strict(line: &str) -> Result<Vec<String>, TokenizeError> {
    Tokenizer::default().tokenize_strict(line)
}

/// Join tokens back into a line that tokenizes to the same tokens.
///
/// Tokens that are empty or contain a space are wrapped in quotes. Tokens
/// containing `"` cannot be represented and are written unchanged. Empty
/// tokens only survive a round trip through a tokenizer with
/// [`Tokenizer::keep_empty_quoted`] enabled.
pub fn join<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| {
            let t = t.as_ref();
            if t.is_empty() || t.contains(SEPARATOR) {
                format!("{QUOTE}{t}{QUOTE}")
            } else {
                t.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "tokenizer_tests.rs"]
mod tests;
